//! Scanner engine: the JD-vs-résumé match scan. Extraction here is the
//! phrase- and synonym-aware path; the résumé builder's lighter extractor
//! lives in `builder::jd_match`.

pub mod extract;
pub mod handlers;
pub mod scoring;
