//! Skill weight table, synonym map, phrase list, and the two stop-word sets.
//!
//! The synonym map is declared canonical-first; a reverse index is built
//! once at startup so lookup is O(1) while preserving first-declared-wins
//! semantics for any variant that (accidentally) appears under two
//! canonical entries.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

/// Multi-word technical phrases detected by pure substring containment
/// before word-level tokenization. Ordered; earlier entries are tested
/// first. No word-boundary check is applied, accepting the small risk of
/// a phrase firing inside a longer word.
pub const TECH_PHRASES: &[&str] = &[
    "machine learning",
    "deep learning",
    "data analysis",
    "data science",
    "data engineering",
    "data visualization",
    "natural language processing",
    "computer vision",
    "power bi",
    "google sheets",
    "google analytics",
    "google cloud",
    "react native",
    "ruby on rails",
    "spring boot",
    "unit testing",
    "version control",
    "project management",
    "product management",
    "agile methodologies",
    "rest api",
    "restful apis",
    "ci/cd",
    "continuous integration",
    "microsoft excel",
    "microsoft office",
    "customer service",
    "supply chain",
    "digital marketing",
    "social media",
];

/// Canonical term → accepted variants. Declaration order is the tie-break
/// order: if a variant ever shows up in two lists, the earlier canonical
/// entry claims it.
const SYNONYMS: &[(&str, &[&str])] = &[
    ("javascript", &["js", "ecmascript"]),
    ("typescript", &["ts"]),
    ("react", &["reactjs", "react.js"]),
    ("node", &["nodejs", "node.js"]),
    ("vue", &["vuejs", "vue.js"]),
    ("angular", &["angularjs", "angular.js"]),
    ("next", &["nextjs", "next.js"]),
    ("express", &["expressjs", "express.js"]),
    ("python", &["python3"]),
    ("go", &["golang"]),
    ("c++", &["cpp"]),
    ("c#", &["csharp"]),
    ("postgresql", &["postgres", "psql"]),
    ("mongodb", &["mongo"]),
    ("kubernetes", &["k8s"]),
    ("amazon web services", &["aws"]),
    ("google cloud", &["gcp"]),
    ("machine learning", &["ml"]),
    ("artificial intelligence", &["ai"]),
    ("continuous integration", &["ci/cd", "cicd"]),
    ("user experience", &["ux"]),
    ("user interface", &["ui"]),
    ("search engine optimization", &["seo"]),
    ("quality assurance", &["qa"]),
];

/// Reverse index: canonical-or-variant → canonical. Built once; first
/// declaration wins on collision.
static CANONICAL_INDEX: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut index = HashMap::new();
    for (canonical, variants) in SYNONYMS {
        index.entry(*canonical).or_insert(*canonical);
        for variant in *variants {
            index.entry(*variant).or_insert(*canonical);
        }
    }
    index
});

/// Maps a token or phrase to its canonical spelling. Idempotent: terms
/// outside the map pass through unchanged, and canonical terms map to
/// themselves.
pub fn canonical_term(term: &str) -> &str {
    CANONICAL_INDEX.get(term).copied().unwrap_or(term)
}

/// Per-keyword importance used by the weighted match scorer. Canonical
/// terms only; anything absent defaults to 1.0 (or the soft-skill 0.8,
/// see `skill_weight`).
const SKILL_WEIGHTS: &[(&str, f64)] = &[
    ("python", 3.0),
    ("javascript", 3.0),
    ("typescript", 2.5),
    ("java", 3.0),
    ("c++", 2.5),
    ("c#", 2.5),
    ("go", 2.5),
    ("rust", 2.5),
    ("sql", 3.0),
    ("react", 2.5),
    ("angular", 2.0),
    ("vue", 2.0),
    ("node", 2.5),
    ("amazon web services", 2.5),
    ("google cloud", 2.0),
    ("azure", 2.0),
    ("docker", 2.0),
    ("kubernetes", 2.0),
    ("terraform", 1.5),
    ("postgresql", 2.0),
    ("mongodb", 2.0),
    ("redis", 1.5),
    ("machine learning", 3.0),
    ("deep learning", 2.5),
    ("data analysis", 2.5),
    ("data science", 2.5),
    ("natural language processing", 2.0),
    ("power bi", 2.0),
    ("tableau", 2.0),
    ("excel", 2.0),
    ("microsoft excel", 2.0),
    ("google sheets", 1.5),
    ("git", 1.5),
    ("linux", 1.5),
    ("rest api", 2.0),
    ("graphql", 1.5),
    ("continuous integration", 1.5),
    ("agile", 1.5),
    ("scrum", 1.5),
    ("project management", 2.0),
];

/// Substrings that mark a term as a soft skill. Terms absent from the
/// weight table whose raw text contains one of these score 0.8 instead of
/// the 1.0 default.
const SOFT_SKILL_MARKERS: &[&str] = &["communication", "team", "detail", "work"];

static WEIGHT_INDEX: Lazy<HashMap<&'static str, f64>> =
    Lazy::new(|| SKILL_WEIGHTS.iter().copied().collect());

/// Looks up the scoring weight for a keyword. The keyword is expected to
/// be canonical already; `raw` is the pre-canonicalization text used for
/// the soft-skill heuristic.
pub fn skill_weight(canonical: &str, raw: &str) -> f64 {
    if let Some(w) = WEIGHT_INDEX.get(canonical) {
        return *w;
    }
    if SOFT_SKILL_MARKERS.iter().any(|m| raw.contains(m)) {
        return 0.8;
    }
    1.0
}

/// Stop words for the scanner-engine extractor: English glue plus
/// job-posting boilerplate. Case-folded input is matched exactly.
pub static SCANNER_STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "an", "the", "and", "or", "but", "if", "then", "else", "of", "at", "by", "for",
        "with", "about", "into", "onto", "to", "from", "in", "out", "on", "off", "up", "down",
        "is", "are", "was", "were", "be", "been", "being", "as", "we", "us", "you", "your",
        "yours", "they", "them", "their", "this", "that", "these", "those", "it", "its", "will",
        "would", "can", "could", "should", "shall", "has", "have", "had", "do", "does", "did",
        "not", "no", "nor", "so", "all", "any", "both", "each", "few", "more", "most", "other",
        "some", "such", "than", "too", "very", "who", "whom", "what", "when", "where", "which",
        "why", "how", "must", "may", "might", "also", "able", "ability", "years", "year", "plus",
        "including", "include", "includes", "etc", "strong", "required", "require", "requires",
        "preferred", "preferably", "looking", "seeking", "join", "role", "job", "position",
        "candidate", "candidates", "applicant", "responsibilities", "requirements",
        "qualifications", "benefits", "bonus", "ideal", "day", "per", "via", "within", "across",
        "help", "new", "well", "like", "make", "makes", "using", "use", "used",
    ]
    .into_iter()
    .collect()
});

/// The résumé-builder JD matcher carries its own, smaller stop-word set,
/// flavored for résumé text rather than job postings. The two extractors
/// evolved separately and are intentionally not unified.
pub static BUILDER_STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "and", "for", "with", "you", "your", "will", "our", "are", "this", "that", "have",
        "has", "had", "was", "were", "been", "being", "from", "they", "them", "their", "who",
        "what", "when", "where", "which", "about", "into", "over", "under", "between", "while",
        "work", "working", "works", "worked", "experience", "experienced", "team", "teams",
        "role", "roles", "job", "jobs", "skill", "skills", "year", "years", "must", "should",
        "required", "requirements", "preferred", "ability", "able", "strong", "candidate",
        "looking", "seeking", "etc", "more", "most", "other", "some", "such", "than", "all",
        "any", "each", "per", "using", "use", "used", "including", "include", "well", "also",
    ]
    .into_iter()
    .collect()
});
