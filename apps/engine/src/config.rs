use anyhow::{Context, Result};

use crate::ats::optimizer::MAX_INJECTED_KEYWORDS;
use crate::generation::vocabulary::ActionVerbCategory;

/// Engine configuration loaded from environment variables (and `.env` if present).
/// Everything has a default; malformed values fail at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub rust_log: String,
    /// Seeds the choice source so filler phrases and verbs repeat across runs.
    pub random_seed: Option<u64>,
    pub verb_category: ActionVerbCategory,
    pub max_injected_keywords: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rust_log: "info".to_string(),
            random_seed: None,
            verb_category: ActionVerbCategory::default(),
            max_injected_keywords: MAX_INJECTED_KEYWORDS,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        Ok(Config {
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            random_seed: lookup("XYZ_RANDOM_SEED")
                .map(|raw| {
                    raw.trim()
                        .parse::<u64>()
                        .context("XYZ_RANDOM_SEED must be an unsigned integer")
                })
                .transpose()?,
            verb_category: match lookup("XYZ_VERB_CATEGORY") {
                Some(raw) => raw
                    .parse::<ActionVerbCategory>()
                    .with_context(|| format!("XYZ_VERB_CATEGORY '{raw}' is not a known category"))?,
                None => defaults.verb_category,
            },
            max_injected_keywords: match lookup("XYZ_MAX_INJECTED_KEYWORDS") {
                Some(raw) => raw
                    .trim()
                    .parse::<usize>()
                    .context("XYZ_MAX_INJECTED_KEYWORDS must be a non-negative integer")?,
                None => defaults.max_injected_keywords,
            },
        })
    }
}
