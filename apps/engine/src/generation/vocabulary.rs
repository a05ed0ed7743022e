//! Fixed phrase tables used by the bullet formatter.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

/// Which family of strong verbs to draw from when a bullet needs one prepended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionVerbCategory {
    Leadership,
    Analysis,
    #[default]
    Creation,
    Improvement,
    Collaboration,
}

impl ActionVerbCategory {
    pub const ALL: [ActionVerbCategory; 5] = [
        ActionVerbCategory::Leadership,
        ActionVerbCategory::Analysis,
        ActionVerbCategory::Creation,
        ActionVerbCategory::Improvement,
        ActionVerbCategory::Collaboration,
    ];

    pub fn verbs(&self) -> &'static [&'static str] {
        match self {
            ActionVerbCategory::Leadership => &[
                "Led",
                "Directed",
                "Managed",
                "Supervised",
                "Coordinated",
                "Mentored",
                "Guided",
            ],
            ActionVerbCategory::Analysis => &[
                "Analyzed",
                "Evaluated",
                "Assessed",
                "Investigated",
                "Researched",
                "Examined",
            ],
            ActionVerbCategory::Creation => &[
                "Developed",
                "Designed",
                "Built",
                "Created",
                "Implemented",
                "Established",
                "Launched",
            ],
            ActionVerbCategory::Improvement => &[
                "Optimized",
                "Enhanced",
                "Improved",
                "Streamlined",
                "Increased",
                "Reduced",
                "Accelerated",
            ],
            ActionVerbCategory::Collaboration => &[
                "Collaborated",
                "Partnered",
                "Facilitated",
                "Coordinated",
                "Contributed",
                "Supported",
            ],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionVerbCategory::Leadership => "leadership",
            ActionVerbCategory::Analysis => "analysis",
            ActionVerbCategory::Creation => "creation",
            ActionVerbCategory::Improvement => "improvement",
            ActionVerbCategory::Collaboration => "collaboration",
        }
    }
}

impl FromStr for ActionVerbCategory {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActionVerbCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EngineError::InvalidOption(format!("unknown verb category '{s}'")))
    }
}

impl fmt::Display for ActionVerbCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// True when `word` appears in any category, ignoring case.
pub fn is_action_verb(word: &str) -> bool {
    ActionVerbCategory::ALL
        .iter()
        .flat_map(|c| c.verbs())
        .any(|verb| verb.eq_ignore_ascii_case(word))
}

/// Generic impact clauses appended to results that carry no metric.
pub const IMPACT_PHRASES: [&str; 5] = [
    "resulting in measurable improvement",
    "achieving significant impact",
    "delivering positive outcomes",
    "exceeding expectations",
    "driving successful results",
];

/// A worked example of a quantified result, shown to users as a hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuantificationExample {
    pub kind: &'static str,
    pub example: &'static str,
}

pub const QUANTIFICATION_EXAMPLES: &[QuantificationExample] = &[
    QuantificationExample {
        kind: "percentages",
        example: "Increased efficiency by 25%",
    },
    QuantificationExample {
        kind: "dollar_amounts",
        example: "Generated $500K in revenue",
    },
    QuantificationExample {
        kind: "time_savings",
        example: "Reduced processing time by 3 hours daily",
    },
    QuantificationExample {
        kind: "scale",
        example: "Managed team of 15 developers",
    },
    QuantificationExample {
        kind: "frequency",
        example: "Delivered 20+ projects quarterly",
    },
    QuantificationExample {
        kind: "user_impact",
        example: "Improved user experience for 10K+ users",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_category_is_creation() {
        assert_eq!(ActionVerbCategory::default(), ActionVerbCategory::Creation);
    }

    #[test]
    fn test_creation_includes_built() {
        assert!(ActionVerbCategory::Creation.verbs().contains(&"Built"));
    }

    #[test]
    fn test_is_action_verb_pools_all_categories() {
        assert!(is_action_verb("led"));
        assert!(is_action_verb("ANALYZED"));
        assert!(is_action_verb("Supported"));
        assert!(!is_action_verb("redesigned"));
        assert!(!is_action_verb(""));
    }

    #[test]
    fn test_category_parse_roundtrips_names() {
        for category in ActionVerbCategory::ALL {
            assert_eq!(category.as_str().parse::<ActionVerbCategory>().unwrap(), category);
        }
        assert_eq!(
            "Leadership".parse::<ActionVerbCategory>().unwrap(),
            ActionVerbCategory::Leadership
        );
        assert!("heroics".parse::<ActionVerbCategory>().is_err());
    }

    #[test]
    fn test_quantification_examples_all_carry_digits() {
        for ex in QUANTIFICATION_EXAMPLES {
            assert!(ex.example.chars().any(|c| c.is_ascii_digit()), "{}", ex.kind);
        }
    }
}
