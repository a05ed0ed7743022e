//! Closed-vocabulary keyword extraction. Terms outside `TECH_KEYWORDS` are
//! never detected, and matching is plain substring search, so short terms
//! like "ai" or "java" also hit inside longer words.

pub const TECH_KEYWORDS: &[&str] = &[
    "javascript",
    "python",
    "java",
    "react",
    "angular",
    "vue",
    "node.js",
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "git",
    "agile",
    "scrum",
    "ci/cd",
    "api",
    "rest",
    "graphql",
    "sql",
    "nosql",
    "machine learning",
    "ai",
    "data analysis",
    "project management",
];

/// Returns the vocabulary terms found in `job_description`, in vocabulary order.
pub fn extract_keywords(job_description: &str) -> Vec<String> {
    if job_description.trim().is_empty() {
        return Vec::new();
    }
    let text = job_description.to_lowercase();
    TECH_KEYWORDS
        .iter()
        .filter(|kw| text.contains(*kw))
        .map(|kw| kw.to_string())
        .collect()
}
