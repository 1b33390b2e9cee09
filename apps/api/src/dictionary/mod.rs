//! Curated, process-wide dictionaries backing both extraction paths and the
//! quality/language checks. All data here is immutable after startup.

pub mod language;
pub mod skills;

pub use language::{replacement_suggestions, ACTION_VERBS, AVOIDED_WORDS};
pub use skills::{
    canonical_term, skill_weight, BUILDER_STOP_WORDS, SCANNER_STOP_WORDS, TECH_PHRASES,
};
