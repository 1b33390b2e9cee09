use serde::{Deserialize, Serialize};

/// Inclusive word-count band for a good professional summary.
pub const SUMMARY_MIN_WORDS: usize = 20;
pub const SUMMARY_MAX_WORDS: usize = 50;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryLengthCheck {
    pub is_valid: bool,
    pub word_count: usize,
    pub message: String,
}

/// Counts whitespace-delimited words. Empty or blank text counts zero.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Validates summary length against the 20–50 word band, inclusive on
/// both ends.
pub fn validate_summary_length(text: &str) -> SummaryLengthCheck {
    let word_count = count_words(text);
    if word_count < SUMMARY_MIN_WORDS {
        SummaryLengthCheck {
            is_valid: false,
            word_count,
            message: format!(
                "Summary is too short at {word_count} words; aim for {SUMMARY_MIN_WORDS} to {SUMMARY_MAX_WORDS}."
            ),
        }
    } else if word_count > SUMMARY_MAX_WORDS {
        SummaryLengthCheck {
            is_valid: false,
            word_count,
            message: format!(
                "Summary is too long at {word_count} words; aim for {SUMMARY_MIN_WORDS} to {SUMMARY_MAX_WORDS}."
            ),
        }
    } else {
        SummaryLengthCheck {
            is_valid: true,
            word_count,
            message: "Summary length looks good.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_words_empty() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("   "), 0);
    }

    #[test]
    fn test_count_words_collapses_runs() {
        assert_eq!(count_words("  a  b   c "), 3);
    }

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        assert!(validate_summary_length(&words(20)).is_valid);
        assert!(validate_summary_length(&words(50)).is_valid);
    }

    #[test]
    fn test_too_short() {
        let check = validate_summary_length(&words(19));
        assert!(!check.is_valid);
        assert_eq!(check.word_count, 19);
        assert!(check.message.contains("too short"));
    }

    #[test]
    fn test_too_long() {
        let check = validate_summary_length(&words(51));
        assert!(!check.is_valid);
        assert_eq!(check.word_count, 51);
        assert!(check.message.contains("too long"));
    }
}
