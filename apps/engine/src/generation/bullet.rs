//! XYZ bullet formatter: turns a Situation/Action/Result triple into an
//! ATS-friendly "<Action> <Result>" phrase.
//!
//! Steps run in a fixed order: pronoun removal, phrase conversion,
//! quantification nudge, strong-verb enforcement, then assembly. The situation
//! is normalized and kept on the bullet but never rendered into `formatted`.

use std::sync::LazyLock;

use regex::{Regex, RegexSet};
use tracing::debug;

use crate::generation::choice::{choose, ChoiceSource};
use crate::generation::vocabulary::{is_action_verb, ActionVerbCategory, IMPACT_PHRASES};
use crate::models::{Achievement, GeneratedBullet};

static PRONOUNS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(I|me|my|we|our|us)\b").expect("pronoun pattern is valid")
});

static QUANTIFICATION: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new([
        r"\d+%",
        r"\$\d+",
        r"\d+\+",
        r"\d+[KMB]",
        r"(?i)\d+\s*(hours?|days?|weeks?|months?|years?)",
        r"(?i)\d+\s*(users?|customers?|clients?|projects?|teams?)",
    ])
    .expect("quantification patterns are valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulletOptions {
    pub remove_pronouns: bool,
    pub suggest_quantification: bool,
    pub action_verb_category: ActionVerbCategory,
}

impl Default for BulletOptions {
    fn default() -> Self {
        Self {
            remove_pronouns: true,
            suggest_quantification: true,
            action_verb_category: ActionVerbCategory::Creation,
        }
    }
}

/// Formats one XYZ triple.
pub fn format_bullet(
    situation: &str,
    action: &str,
    result: &str,
    options: &BulletOptions,
    choice: &mut dyn ChoiceSource,
) -> GeneratedBullet {
    let (action, result) = if options.remove_pronouns {
        (
            remove_personal_pronouns(action),
            remove_personal_pronouns(result),
        )
    } else {
        (action.to_string(), result.to_string())
    };

    let action = convert_to_phrase(&action);
    let mut result = convert_to_phrase(&result);

    if options.suggest_quantification && !has_quantification(&result) {
        result = suggest_quantification(&result, choice);
        debug!("No metric in result, appended filler: {result}");
    }

    let action = ensure_strong_action_verb(&action, options.action_verb_category, choice);

    let formatted = [action.as_str(), result.as_str()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    GeneratedBullet {
        situation: convert_to_phrase(situation),
        action,
        result,
        formatted,
    }
}

pub fn format_achievement(
    achievement: &Achievement,
    options: &BulletOptions,
    choice: &mut dyn ChoiceSource,
) -> GeneratedBullet {
    format_bullet(
        &achievement.situation,
        &achievement.action,
        &achievement.result,
        options,
        choice,
    )
}

/// Drops standalone first-person pronouns and collapses the leftover whitespace.
pub fn remove_personal_pronouns(text: &str) -> String {
    PRONOUNS
        .replace_all(text, "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Strips trailing sentence punctuation, lowercases, then capitalizes the
/// first character only. Leading acronyms come out as "Aws ...".
pub fn convert_to_phrase(text: &str) -> String {
    let stripped = text.trim().trim_end_matches(['.', '!', '?']).trim();
    let lower = stripped.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn has_quantification(text: &str) -> bool {
    QUANTIFICATION.is_match(text)
}

/// Appends a generic impact clause. This nudges, it does not invent numbers.
pub fn suggest_quantification(result: &str, choice: &mut dyn ChoiceSource) -> String {
    let phrase = choose(choice, &IMPACT_PHRASES).copied().unwrap_or_default();
    if result.is_empty() {
        phrase.to_string()
    } else {
        format!("{result}, {phrase}")
    }
}

/// Prepends a verb from `category` unless the action already opens with a
/// verb from any category.
pub fn ensure_strong_action_verb(
    action: &str,
    category: ActionVerbCategory,
    choice: &mut dyn ChoiceSource,
) -> String {
    let Some(first_word) = action.split_whitespace().next() else {
        return action.to_string();
    };

    if is_action_verb(first_word) {
        return action.to_string();
    }

    match choose(choice, category.verbs()) {
        Some(verb) => {
            debug!("Prepending '{verb}' to action '{action}'");
            format!("{verb} {action}")
        }
        None => action.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::choice::{FirstChoice, RandomChoice};

    #[test]
    fn test_remove_pronouns_basic() {
        assert_eq!(remove_personal_pronouns("I built our platform"), "built platform");
    }

    #[test]
    fn test_remove_pronouns_case_insensitive_whole_words() {
        assert_eq!(
            remove_personal_pronouns("We helped US users and MY team"),
            "helped users and team"
        );
        // "us" inside "using" and "my" inside "myriad" survive
        assert_eq!(
            remove_personal_pronouns("using a myriad of tools"),
            "using a myriad of tools"
        );
    }

    #[test]
    fn test_remove_pronouns_empty() {
        assert_eq!(remove_personal_pronouns(""), "");
        assert_eq!(remove_personal_pronouns("I me my"), "");
    }

    #[test]
    fn test_convert_to_phrase_strips_period() {
        assert_eq!(convert_to_phrase("Shipped the feature."), "Shipped the feature");
    }

    #[test]
    fn test_convert_to_phrase_normalizes_case() {
        assert_eq!(convert_to_phrase("reduced COSTS by half!!"), "Reduced costs by half");
        assert_eq!(convert_to_phrase("What went wrong?"), "What went wrong");
    }

    #[test]
    fn test_convert_to_phrase_flattens_leading_acronym() {
        assert_eq!(convert_to_phrase("AWS migration"), "Aws migration");
    }

    #[test]
    fn test_convert_to_phrase_empty() {
        assert_eq!(convert_to_phrase(""), "");
        assert_eq!(convert_to_phrase("..."), "");
    }

    #[test]
    fn test_has_quantification_patterns() {
        assert!(has_quantification("cut latency 40%"));
        assert!(has_quantification("saved $500 a month"));
        assert!(has_quantification("served 100+ customers"));
        assert!(has_quantification("grew revenue 2M"));
        assert!(has_quantification("saved 3 hours daily"));
        assert!(has_quantification("onboarded 12 clients"));
        assert!(has_quantification("shipped in 2 weeks"));
    }

    #[test]
    fn test_has_quantification_without_digits() {
        assert!(!has_quantification("improved the user experience"));
        assert!(!has_quantification(""));
        assert!(!has_quantification("a lot of users"));
    }

    #[test]
    fn test_lowercase_magnitude_suffix_is_not_a_match() {
        // Results are lowercased before the check, so "10k" needs another pattern to hit.
        assert!(!has_quantification("processed 10k records"));
        assert!(has_quantification("processed 10K records"));
        assert!(has_quantification("processed 10k records for 40 clients"));
    }

    #[test]
    fn test_suggest_quantification_first_phrase() {
        assert_eq!(
            suggest_quantification("Cut costs", &mut FirstChoice),
            "Cut costs, resulting in measurable improvement"
        );
    }

    #[test]
    fn test_suggest_quantification_on_empty_result() {
        assert_eq!(
            suggest_quantification("", &mut FirstChoice),
            "resulting in measurable improvement"
        );
    }

    #[test]
    fn test_suggest_quantification_draws_from_table() {
        let mut src = RandomChoice::seeded(7);
        for _ in 0..20 {
            let out = suggest_quantification("Done", &mut src);
            let tail = out.strip_prefix("Done, ").unwrap();
            assert!(IMPACT_PHRASES.contains(&tail));
        }
    }

    #[test]
    fn test_strong_verb_kept_when_present() {
        assert_eq!(
            ensure_strong_action_verb(
                "built a dashboard",
                ActionVerbCategory::Creation,
                &mut FirstChoice
            ),
            "built a dashboard"
        );
        // any category counts, not just the requested one
        assert_eq!(
            ensure_strong_action_verb(
                "Mentored interns",
                ActionVerbCategory::Analysis,
                &mut FirstChoice
            ),
            "Mentored interns"
        );
    }

    #[test]
    fn test_strong_verb_prepended_from_category() {
        let out = ensure_strong_action_verb(
            "wrote the onboarding docs",
            ActionVerbCategory::Leadership,
            &mut RandomChoice::seeded(3),
        );
        let verb = out.split_whitespace().next().unwrap();
        assert!(ActionVerbCategory::Leadership.verbs().contains(&verb));
        assert!(out.ends_with("wrote the onboarding docs"));
    }

    #[test]
    fn test_strong_verb_empty_action() {
        assert_eq!(
            ensure_strong_action_verb("", ActionVerbCategory::Creation, &mut FirstChoice),
            ""
        );
    }

    #[test]
    fn test_format_bullet_demo_triple() {
        let bullet = format_bullet(
            "Legacy system causing performance issues",
            "Redesigned the architecture using microservices",
            "Improved performance by 60% and reduced costs by 30%",
            &BulletOptions::default(),
            &mut FirstChoice,
        );
        assert_eq!(bullet.situation, "Legacy system causing performance issues");
        assert_eq!(
            bullet.action,
            "Developed Redesigned the architecture using microservices"
        );
        assert_eq!(
            bullet.result,
            "Improved performance by 60% and reduced costs by 30%"
        );
        assert_eq!(
            bullet.formatted,
            "Developed Redesigned the architecture using microservices Improved performance by 60% and reduced costs by 30%"
        );
    }

    #[test]
    fn test_format_bullet_strips_pronouns_and_adds_filler() {
        let bullet = format_bullet(
            "Our checkout was slow.",
            "I built our platform.",
            "We cut costs.",
            &BulletOptions::default(),
            &mut FirstChoice,
        );
        assert_eq!(bullet.situation, "Our checkout was slow");
        assert_eq!(bullet.action, "Built platform");
        assert_eq!(bullet.result, "Cut costs, resulting in measurable improvement");
        assert_eq!(
            bullet.formatted,
            "Built platform Cut costs, resulting in measurable improvement"
        );
    }

    #[test]
    fn test_format_bullet_options_disabled() {
        let options = BulletOptions {
            remove_pronouns: false,
            suggest_quantification: false,
            action_verb_category: ActionVerbCategory::Improvement,
        };
        let bullet = format_bullet(
            "x",
            "we tuned queries",
            "pages load faster",
            &options,
            &mut FirstChoice,
        );
        assert_eq!(bullet.action, "Optimized We tuned queries");
        assert_eq!(bullet.result, "Pages load faster");
    }

    #[test]
    fn test_format_bullet_excludes_situation_from_formatted() {
        let bullet = format_bullet(
            "Unique situation text",
            "Led migration",
            "Saved 5 hours weekly",
            &BulletOptions::default(),
            &mut FirstChoice,
        );
        assert!(!bullet.formatted.to_lowercase().contains("unique situation"));
        assert_eq!(bullet.formatted, "Led migration Saved 5 hours weekly");
    }

    #[test]
    fn test_format_bullet_seeded_is_reproducible() {
        let run = |seed| {
            format_bullet(
                "s",
                "wrote code",
                "things improved",
                &BulletOptions::default(),
                &mut RandomChoice::seeded(seed),
            )
        };
        assert_eq!(run(11), run(11));
    }

    #[test]
    fn test_format_achievement_matches_format_bullet() {
        let a = Achievement::new("s", "Built api", "Served 10 users");
        let options = BulletOptions::default();
        assert_eq!(
            format_achievement(&a, &options, &mut FirstChoice),
            format_bullet("s", "Built api", "Served 10 users", &options, &mut FirstChoice)
        );
    }
}
