//! Action-verb set for bullet scoring and the avoided-word list for the
//! weak-language detector.

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Strong opening verbs for résumé bullets, lower-cased past-tense forms.
pub static ACTION_VERBS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "achieved",
        "accelerated",
        "analyzed",
        "architected",
        "automated",
        "built",
        "collaborated",
        "conducted",
        "coordinated",
        "created",
        "decreased",
        "delivered",
        "designed",
        "developed",
        "directed",
        "drove",
        "established",
        "executed",
        "expanded",
        "founded",
        "generated",
        "grew",
        "implemented",
        "improved",
        "increased",
        "initiated",
        "launched",
        "led",
        "managed",
        "mentored",
        "migrated",
        "negotiated",
        "optimized",
        "organized",
        "overhauled",
        "owned",
        "partnered",
        "pioneered",
        "redesigned",
        "reduced",
        "refactored",
        "resolved",
        "scaled",
        "shipped",
        "spearheaded",
        "streamlined",
        "transformed",
    ]
    .into_iter()
    .collect()
});

/// Weak, vague, or overused words and phrases flagged by the language
/// check. Dictionary order is scan order; all entries are lower case.
/// Single-word entries are matched with word-boundary verification,
/// multi-word entries by plain substring.
pub const AVOIDED_WORDS: &[&str] = &[
    "responsible for",
    "duties included",
    "worked on",
    "helped with",
    "assisted with",
    "participated in",
    "involved in",
    "tasked with",
    "team player",
    "hard worker",
    "go-getter",
    "self-starter",
    "think outside the box",
    "results-driven",
    "detail-oriented",
    "seasoned",
    "dynamic",
    "synergy",
    "passionate",
    "motivated",
    "stuff",
    "things",
    "various",
    "numerous",
    "many",
    "very",
];

/// Curated replacements for the most common offenders. Everything else
/// falls through to a single generic suggestion.
const REPLACEMENTS: &[(&str, &[&str])] = &[
    (
        "responsible for",
        &["led", "managed", "owned", "directed"],
    ),
    ("duties included", &["delivered", "executed", "drove"]),
    ("worked on", &["built", "developed", "shipped"]),
    ("helped with", &["contributed to", "co-developed"]),
    ("assisted with", &["supported delivery of", "co-led"]),
    ("participated in", &["contributed to", "drove"]),
    ("involved in", &["led", "contributed to"]),
    ("tasked with", &["owned", "directed"]),
    (
        "team player",
        &["collaborated with N cross-functional partners"],
    ),
    ("hard worker", &["delivered X ahead of schedule"]),
    ("results-driven", &["increased X by N%"]),
    ("detail-oriented", &["reduced error rate by N%"]),
    ("stuff", &["name the specific deliverable"]),
    ("things", &["name the specific deliverable"]),
    ("various", &["list the top two or three items"]),
    ("many", &["use the actual number"]),
    ("numerous", &["use the actual number"]),
    ("very", &["drop it, or quantify instead"]),
];

/// Returns 1–4 suggested replacements for a known avoided word, or a
/// single generic suggestion for anything else.
pub fn replacement_suggestions(word: &str) -> Vec<String> {
    for (entry, subs) in REPLACEMENTS {
        if *entry == word {
            return subs.iter().map(|s| s.to_string()).collect();
        }
    }
    vec!["Replace with a specific action verb and a measurable outcome".to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_verbs_are_lowercase() {
        for verb in ACTION_VERBS.iter() {
            assert_eq!(*verb, verb.to_lowercase());
        }
    }

    #[test]
    fn test_avoided_words_are_lowercase() {
        for word in AVOIDED_WORDS {
            assert_eq!(*word, word.to_lowercase());
        }
    }

    #[test]
    fn test_known_replacement() {
        let subs = replacement_suggestions("responsible for");
        assert!(subs.contains(&"led".to_string()));
        assert!(subs.len() <= 4);
    }

    #[test]
    fn test_generic_fallback() {
        let subs = replacement_suggestions("seasoned");
        assert_eq!(subs.len(), 1);
        assert!(subs[0].contains("action verb"));
    }

    #[test]
    fn test_every_replacement_key_is_in_dictionary() {
        for (entry, _) in REPLACEMENTS {
            assert!(AVOIDED_WORDS.contains(entry), "{entry} missing from list");
        }
    }
}
