use serde::{Deserialize, Serialize};

use crate::models::profile::{Certification, Education, Experience, PersonalInfo, Project, TechnicalSkills};

/// An achievement after XYZ formatting. Built fresh per call and never mutated.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneratedBullet {
    #[serde(rename = "X")]
    pub situation: String,
    #[serde(rename = "Y")]
    pub action: String,
    #[serde(rename = "Z")]
    pub result: String,
    pub formatted: String,
}

/// Technical skills as rendered, plus any job-description keywords the ATS
/// optimizer appended.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SkillsContent {
    #[serde(flatten)]
    pub skills: TechnicalSkills,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub job_keywords: Vec<String>,
}

/// A resume section. Serializes as `{"title": ..., "content": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "title", content = "content")]
pub enum Section {
    #[serde(rename = "Technical Skills")]
    TechnicalSkills(SkillsContent),
    #[serde(rename = "Professional Experience")]
    ProfessionalExperience(Vec<Experience<GeneratedBullet>>),
    #[serde(rename = "Projects")]
    Projects(Vec<Project<GeneratedBullet>>),
    #[serde(rename = "Education")]
    Education(Vec<Education>),
    #[serde(rename = "Certifications")]
    Certifications(Vec<Certification>),
}

impl Section {
    pub fn title(&self) -> &'static str {
        match self {
            Section::TechnicalSkills(_) => "Technical Skills",
            Section::ProfessionalExperience(_) => "Professional Experience",
            Section::Projects(_) => "Projects",
            Section::Education(_) => "Education",
            Section::Certifications(_) => "Certifications",
        }
    }

    /// Every formatted bullet carried by this section, in order.
    pub fn bullets(&self) -> Vec<&GeneratedBullet> {
        match self {
            Section::ProfessionalExperience(items) => {
                items.iter().flat_map(|e| &e.achievements).collect()
            }
            Section::Projects(items) => items.iter().flat_map(|p| &p.achievements).collect(),
            _ => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Resume {
    pub personal_info: PersonalInfo,
    pub professional_summary: String,
    pub sections: Vec<Section>,
    pub ats_score: u8,
    pub warnings: Vec<String>,
}

impl Resume {
    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.title() == title)
    }

    pub fn section_titles(&self) -> Vec<&'static str> {
        self.sections.iter().map(Section::title).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_section_serializes_title_and_content() {
        let section = Section::Certifications(vec![Certification {
            name: "AWS Certified Cloud Practitioner".to_string(),
            ..Default::default()
        }]);
        let value = serde_json::to_value(&section).unwrap();
        assert_eq!(value["title"], "Certifications");
        assert_eq!(value["content"][0]["name"], "AWS Certified Cloud Practitioner");
    }

    #[test]
    fn test_skills_section_flattens_categories() {
        let section = Section::TechnicalSkills(SkillsContent {
            skills: TechnicalSkills {
                tools: vec!["Git".to_string()],
                ..Default::default()
            },
            job_keywords: vec![],
        });
        let value = serde_json::to_value(&section).unwrap();
        assert_eq!(value["title"], "Technical Skills");
        assert_eq!(value["content"]["tools"], json!(["Git"]));
        assert!(value["content"].get("job_keywords").is_none());
    }

    #[test]
    fn test_section_deserializes_by_title() {
        let value = json!({
            "title": "Education",
            "content": [{"degree": "BSc", "institution": "Berkeley"}]
        });
        let section: Section = serde_json::from_value(value).unwrap();
        assert_eq!(section.title(), "Education");
    }

    #[test]
    fn test_bullets_collects_nested_achievements() {
        let bullet = GeneratedBullet {
            formatted: "Built a thing".to_string(),
            ..Default::default()
        };
        let section = Section::Projects(vec![Project {
            name: "p".to_string(),
            achievements: vec![bullet.clone(), bullet],
            ..Default::default()
        }]);
        assert_eq!(section.bullets().len(), 2);
        assert!(Section::Education(vec![]).bullets().is_empty());
    }
}
