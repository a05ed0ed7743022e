//! ATS score: a weighted presence checklist over the profile.
//!
//! This is a coarse completeness proxy, not a model of any real applicant
//! tracking system. It only checks that fields are filled in.

use crate::models::profile::has_text;
use crate::models::{CandidateProfile, CandidateType};

const PERSONAL_FIELD_POINTS: u32 = 5;
const SUMMARY_POINTS: u32 = 15;
const BODY_POINTS: u32 = 25;
const EDUCATION_POINTS: u32 = 15;
const SKILLS_POINTS: u32 = 15;
const CERTIFICATION_POINTS: u32 = 10;

const MAX_POINTS: u32 = PERSONAL_FIELD_POINTS * 4
    + SUMMARY_POINTS
    + BODY_POINTS
    + EDUCATION_POINTS
    + SKILLS_POINTS
    + CERTIFICATION_POINTS;

/// Scores the profile 0–100.
///
/// - name, email, phone, location: 5 each
/// - professional summary present: 15
/// - experience (experienced) or projects (fresher) non-empty: 25
/// - education non-empty: 15
/// - technical skills present: 15
/// - certifications non-empty: 10
pub fn calculate_ats_score(profile: &CandidateProfile) -> u8 {
    let info = &profile.personal_info;
    let personal = [&info.name, &info.email, &info.phone, &info.location]
        .into_iter()
        .filter(|field| has_text(field.as_deref()))
        .count() as u32
        * PERSONAL_FIELD_POINTS;

    let body = match profile.candidate_kind() {
        Some(CandidateType::Experienced) if !profile.experience.is_empty() => BODY_POINTS,
        Some(CandidateType::Fresher) if !profile.projects.is_empty() => BODY_POINTS,
        _ => 0,
    };

    let points = personal
        + award(profile.professional_summary.is_some(), SUMMARY_POINTS)
        + body
        + award(!profile.education.is_empty(), EDUCATION_POINTS)
        + award(profile.technical_skills().is_some(), SKILLS_POINTS)
        + award(!profile.certifications.is_empty(), CERTIFICATION_POINTS);

    ((points as f64 / MAX_POINTS as f64) * 100.0).round() as u8
}

fn award(present: bool, points: u32) -> u32 {
    if present {
        points
    } else {
        0
    }
}
