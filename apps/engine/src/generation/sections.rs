//! Section builder. Empty sections are left out entirely rather than rendered
//! with no content.

use tracing::debug;

use crate::generation::bullet::{format_achievement, BulletOptions};
use crate::generation::choice::ChoiceSource;
use crate::models::{CandidateProfile, CandidateType, Section, SkillsContent};

/// Builds the ordered section list for the profile's candidate type.
///
/// Fresher: Technical Skills, Projects, Education, Certifications.
/// Everyone else: Technical Skills, Professional Experience, Projects,
/// Education, Certifications.
pub fn build_sections(profile: &CandidateProfile, choice: &mut dyn ChoiceSource) -> Vec<Section> {
    let mut sections = vec![technical_skills_section(profile)];

    if profile.candidate_kind() != Some(CandidateType::Fresher) {
        sections.push(experience_section(profile, choice));
    }

    sections.push(projects_section(profile, choice));
    sections.push(education_section(profile));
    sections.push(certifications_section(profile));

    let sections: Vec<Section> = sections.into_iter().flatten().collect();
    debug!(
        "Built {} section(s) for {:?} candidate",
        sections.len(),
        profile.candidate_type.as_deref().unwrap_or("unknown")
    );
    sections
}

fn technical_skills_section(profile: &CandidateProfile) -> Option<Section> {
    profile.technical_skills().map(|skills| {
        Section::TechnicalSkills(SkillsContent {
            skills: skills.clone(),
            job_keywords: Vec::new(),
        })
    })
}

fn experience_section(
    profile: &CandidateProfile,
    choice: &mut dyn ChoiceSource,
) -> Option<Section> {
    if profile.experience.is_empty() {
        return None;
    }
    let options = BulletOptions::default();
    let formatted = profile
        .experience
        .iter()
        .map(|exp| exp.map_achievements(|a| format_achievement(a, &options, choice)))
        .collect();
    Some(Section::ProfessionalExperience(formatted))
}

fn projects_section(profile: &CandidateProfile, choice: &mut dyn ChoiceSource) -> Option<Section> {
    if profile.projects.is_empty() {
        return None;
    }
    let options = BulletOptions::default();
    let formatted = profile
        .projects
        .iter()
        .map(|project| project.map_achievements(|a| format_achievement(a, &options, choice)))
        .collect();
    Some(Section::Projects(formatted))
}

fn education_section(profile: &CandidateProfile) -> Option<Section> {
    (!profile.education.is_empty()).then(|| Section::Education(profile.education.clone()))
}

fn certifications_section(profile: &CandidateProfile) -> Option<Section> {
    (!profile.certifications.is_empty())
        .then(|| Section::Certifications(profile.certifications.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::choice::FirstChoice;
    use crate::samples::{sample_experienced_profile, sample_fresher_profile};

    fn titles(sections: &[Section]) -> Vec<&'static str> {
        sections.iter().map(Section::title).collect()
    }

    #[test]
    fn test_fresher_section_order() {
        let sections = build_sections(&sample_fresher_profile(), &mut FirstChoice);
        assert_eq!(
            titles(&sections),
            vec!["Technical Skills", "Projects", "Education", "Certifications"]
        );
    }

    #[test]
    fn test_experienced_section_order_skips_empty_projects() {
        let sections = build_sections(&sample_experienced_profile(), &mut FirstChoice);
        assert_eq!(
            titles(&sections),
            vec![
                "Technical Skills",
                "Professional Experience",
                "Education",
                "Certifications"
            ]
        );
    }

    #[test]
    fn test_fresher_without_certifications_has_no_certifications_entry() {
        let mut profile = sample_fresher_profile();
        profile.certifications.clear();
        let sections = build_sections(&profile, &mut FirstChoice);
        assert!(!titles(&sections).contains(&"Certifications"));
        assert_eq!(sections.len(), 3);
    }

    #[test]
    fn test_fresher_never_gets_experience_section() {
        let mut profile = sample_fresher_profile();
        profile.experience = sample_experienced_profile().experience;
        let sections = build_sections(&profile, &mut FirstChoice);
        assert!(!titles(&sections).contains(&"Professional Experience"));
    }

    #[test]
    fn test_missing_technical_skills_omits_section() {
        let mut profile = sample_fresher_profile();
        profile.additional_sections.technical_skills = None;
        let sections = build_sections(&profile, &mut FirstChoice);
        assert_eq!(titles(&sections)[0], "Projects");
    }

    #[test]
    fn test_experience_achievements_are_formatted() {
        let sections = build_sections(&sample_experienced_profile(), &mut FirstChoice);
        let Some(Section::ProfessionalExperience(roles)) = sections.get(1) else {
            panic!("expected experience section second");
        };
        assert_eq!(roles[0].organization, "Ledgerly");
        assert_eq!(roles[0].end_date, "Present");

        let first = &roles[0].achievements[0];
        assert_eq!(first.situation, "Payment ledger could not keep up with peak traffic");
        assert_eq!(
            first.formatted,
            "Developed Re-architected ledger around an append-only event log Settlement latency dropped by 70%"
        );

        let second = &roles[0].achievements[1];
        assert_eq!(
            second.formatted,
            "Led an alert audit with sre Paging volume fell noticeably, resulting in measurable improvement"
        );

        let third = &roles[1].achievements[0];
        assert_eq!(
            third.formatted,
            "Built a reconciliation service in go Saved 40 hours per month for 6 teams"
        );
    }

    #[test]
    fn test_project_achievements_are_formatted() {
        let sections = build_sections(&sample_fresher_profile(), &mut FirstChoice);
        let Some(Section::Projects(projects)) = sections.get(1) else {
            panic!("expected projects section second");
        };
        assert_eq!(projects[0].name, "Task Management App");
        assert_eq!(projects[0].team_size, Some(3));
        assert_eq!(
            projects[0].achievements[0].formatted,
            "Implemented websocket connections and responsive ui with react Achieved 100+ concurrent users and 99.9% uptime"
        );
    }

    #[test]
    fn test_skills_section_copies_categories() {
        let sections = build_sections(&sample_fresher_profile(), &mut FirstChoice);
        let Some(Section::TechnicalSkills(content)) = sections.first() else {
            panic!("expected skills section first");
        };
        assert_eq!(content.skills.databases, vec!["MongoDB", "MySQL", "PostgreSQL"]);
        assert!(content.job_keywords.is_empty());
    }
}
