use serde::{Deserialize, Serialize};

use crate::models::profile::has_text;
use crate::models::{CandidateProfile, CandidateType};

/// Outcome of input validation. Errors block resume generation; warnings are
/// informational and travel with the finished resume.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Checks a profile against the XYZ input rules. Every rule runs; nothing
/// short-circuits. A field that is present but blank counts as missing.
pub fn validate_profile(profile: &CandidateProfile) -> ValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let info = &profile.personal_info;
    let candidate_type = profile
        .candidate_type
        .as_deref()
        .filter(|t| !t.trim().is_empty());

    if !has_text(info.name.as_deref()) {
        errors.push("Name is required".to_string());
    }
    if !has_text(info.email.as_deref()) {
        errors.push("Email is required".to_string());
    }
    if candidate_type.is_none() {
        errors.push("Candidate type (experienced/fresher) is required".to_string());
    }
    if !has_text(profile.target_role.position.as_deref()) {
        errors.push("Target position is required".to_string());
    }

    let parsed = candidate_type.map(str::parse::<CandidateType>);
    if let Some(Err(_)) = parsed {
        errors.push("Candidate type must be 'experienced' or 'fresher'".to_string());
    }

    if matches!(parsed, Some(Ok(CandidateType::Experienced))) && profile.experience.is_empty() {
        warnings.push("No professional experience provided for experienced candidate".to_string());
    }

    if profile.education.is_empty() {
        warnings.push("No education information provided".to_string());
    }

    for (index, achievement) in profile.key_achievements().iter().enumerate() {
        if !achievement.is_complete() {
            warnings.push(format!("Achievement {} missing XYZ components", index + 1));
        }
    }

    ValidationResult { errors, warnings }
}
