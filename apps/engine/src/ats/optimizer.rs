//! ATS optimizer: tops up a skills list with job-description keywords the
//! candidate has not already listed.

use tracing::{debug, info};

use crate::ats::keywords::extract_keywords;
use crate::models::{Resume, Section};

/// Default cap on keywords appended per optimization pass.
pub const MAX_INJECTED_KEYWORDS: usize = 3;

/// Job keywords not already covered by an existing skill. A keyword counts as
/// covered when it is a case-insensitive substring of any skill entry.
pub fn missing_keywords<'a, I>(existing_skills: I, job_description: &str) -> Vec<String>
where
    I: IntoIterator<Item = &'a String>,
{
    let existing: Vec<String> = existing_skills
        .into_iter()
        .map(|s| s.to_lowercase())
        .collect();

    extract_keywords(job_description)
        .into_iter()
        .filter(|kw| !existing.iter().any(|skill| skill.contains(kw.as_str())))
        .collect()
}

/// The keywords one optimization pass would add: missing ones, in vocabulary
/// order, capped at `limit`. Empty when the job description is blank.
pub fn keywords_to_add<'a, I>(
    existing_skills: I,
    job_description: &str,
    limit: usize,
) -> Vec<String>
where
    I: IntoIterator<Item = &'a String>,
{
    if job_description.trim().is_empty() {
        return Vec::new();
    }
    missing_keywords(existing_skills, job_description)
        .into_iter()
        .take(limit)
        .collect()
}

/// Appends at most `limit` missing keywords to `skills` and returns the ones added.
/// No-op when there is no skills list or the job description is empty.
pub fn optimize_for_ats(
    skills: Option<&mut Vec<String>>,
    job_description: &str,
    limit: usize,
) -> Vec<String> {
    let Some(skills) = skills else {
        return Vec::new();
    };
    let added = keywords_to_add(skills.iter(), job_description, limit);
    skills.extend(added.iter().cloned());
    added
}

impl Resume {
    /// Runs the optimizer against the Technical Skills section. Every skill
    /// category counts as existing; additions land in `job_keywords`.
    pub fn optimize_for_ats(&mut self, job_description: &str, limit: usize) -> Vec<String> {
        let Some(content) = self.sections.iter_mut().find_map(|s| match s {
            Section::TechnicalSkills(content) => Some(content),
            _ => None,
        }) else {
            debug!("Resume has no Technical Skills section, skipping ATS optimization");
            return Vec::new();
        };

        let added = keywords_to_add(
            content.skills.iter().chain(&content.job_keywords),
            job_description,
            limit,
        );
        if !added.is_empty() {
            info!("ATS optimizer added {} keyword(s): {:?}", added.len(), added);
        }
        content.job_keywords.extend(added.iter().cloned());
        added
    }
}
