//! Résumé-builder side: quality scoring, the builder's own JD matcher,
//! weak-language detection, and word counting.

pub mod handlers;
pub mod jd_match;
pub mod language;
pub mod quality;
pub mod word_count;
