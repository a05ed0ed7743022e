//! Professional summary templates, one per candidate type.
//!
//! Only the first key achievement feeds the summary, and it is used verbatim
//! (lowercased, not run through the bullet formatter). Section bullets get the
//! full XYZ treatment; the summary deliberately stays lightweight.

use crate::models::{Achievement, CandidateProfile, CandidateType};

const FRESHER_COMPETENCY_LIMIT: usize = 3;
const EXPERIENCED_COMPETENCY_LIMIT: usize = 4;

/// Builds the summary paragraph. Anything other than `fresher` gets the
/// experienced template.
pub fn generate_summary(profile: &CandidateProfile) -> String {
    let summary = profile.professional_summary.as_ref();
    let years = summary.map_or(0, |s| s.years_experience);
    let competencies = summary
        .map(|s| s.core_competencies.as_slice())
        .unwrap_or(&[]);
    let top_achievement = profile.key_achievements().first();
    let position = profile
        .target_role
        .position
        .as_deref()
        .unwrap_or_default()
        .trim();

    let mut sentences = Vec::new();

    match profile.candidate_kind() {
        Some(CandidateType::Fresher) => {
            sentences.push(format!(
                "Recent graduate with {years} years of experience seeking {position} position."
            ));
            if !competencies.is_empty() {
                sentences.push(format!(
                    "Proficient in {}.",
                    join_limited(competencies, FRESHER_COMPETENCY_LIMIT)
                ));
            }
            if let Some(clause) = top_achievement.and_then(achievement_clause) {
                sentences.push(format!("Demonstrated ability to {clause}."));
            }
        }
        _ => {
            let industry = profile
                .target_role
                .industry
                .as_deref()
                .map(str::trim)
                .filter(|i| !i.is_empty());
            sentences.push(match industry {
                Some(industry) => format!(
                    "Experienced {position} with {years} years of expertise in {industry}."
                ),
                None => format!("Experienced {position} with {years} years of expertise."),
            });
            if !competencies.is_empty() {
                sentences.push(format!(
                    "Core competencies include {}.",
                    join_limited(competencies, EXPERIENCED_COMPETENCY_LIMIT)
                ));
            }
            if let Some(clause) = top_achievement.and_then(achievement_clause) {
                sentences.push(format!("Proven track record of {clause}."));
            }
        }
    }

    sentences.join(" ")
}

fn join_limited(items: &[String], limit: usize) -> String {
    items
        .iter()
        .take(limit)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// "<action> <result>" lowercased, or `None` when both are blank.
fn achievement_clause(achievement: &Achievement) -> Option<String> {
    let parts: Vec<String> = [&achievement.action, &achievement.result]
        .iter()
        .map(|p| p.trim().to_lowercase())
        .filter(|p| !p.is_empty())
        .collect();
    (!parts.is_empty()).then(|| parts.join(" "))
}
