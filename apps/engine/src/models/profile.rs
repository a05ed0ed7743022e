use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::EngineError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CandidateType {
    Experienced,
    Fresher,
}

impl CandidateType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CandidateType::Experienced => "experienced",
            CandidateType::Fresher => "fresher",
        }
    }
}

impl FromStr for CandidateType {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "experienced" => Ok(CandidateType::Experienced),
            "fresher" => Ok(CandidateType::Fresher),
            other => Err(EngineError::InvalidOption(format!(
                "unknown candidate type '{other}'"
            ))),
        }
    }
}

impl fmt::Display for CandidateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PersonalInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub portfolio: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TargetRole {
    pub position: Option<String>,
    pub industry: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub key_skills: Vec<String>,
}

/// One Situation/Action/Result triple. Serialized with the literal `X`/`Y`/`Z` keys.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Achievement {
    #[serde(rename = "X")]
    #[serde(deserialize_with = "null_as_default")]
    pub situation: String,
    #[serde(rename = "Y")]
    #[serde(deserialize_with = "null_as_default")]
    pub action: String,
    #[serde(rename = "Z")]
    #[serde(deserialize_with = "null_as_default")]
    pub result: String,
}

impl Achievement {
    pub fn new(
        situation: impl Into<String>,
        action: impl Into<String>,
        result: impl Into<String>,
    ) -> Self {
        Self {
            situation: situation.into(),
            action: action.into(),
            result: result.into(),
        }
    }

    /// True when all three components carry text.
    pub fn is_complete(&self) -> bool {
        [&self.situation, &self.action, &self.result]
            .iter()
            .all(|part| !part.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProfessionalSummary {
    #[serde(deserialize_with = "null_as_default")]
    pub years_experience: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub core_competencies: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub key_achievements: Vec<Achievement>,
}

/// A role held by the candidate. `A` is the achievement shape: raw triples on
/// input, formatted bullets once the section builder has run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, bound(deserialize = "A: Deserialize<'de> + Default"))]
pub struct Experience<A = Achievement> {
    #[serde(deserialize_with = "null_as_default")]
    pub organization: String,
    #[serde(deserialize_with = "null_as_default")]
    pub position: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(deserialize_with = "null_as_default")]
    pub start_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub end_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub achievements: Vec<A>,
}

impl<A> Experience<A> {
    pub fn map_achievements<B>(&self, f: impl FnMut(&A) -> B) -> Experience<B> {
        Experience {
            organization: self.organization.clone(),
            position: self.position.clone(),
            location: self.location.clone(),
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            achievements: self.achievements.iter().map(f).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, bound(deserialize = "A: Deserialize<'de> + Default"))]
pub struct Project<A = Achievement> {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub technologies: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub duration: String,
    pub team_size: Option<u32>,
    #[serde(deserialize_with = "null_as_default")]
    pub github_link: String,
    #[serde(deserialize_with = "null_as_default")]
    pub live_demo: String,
    #[serde(deserialize_with = "null_as_default")]
    pub achievements: Vec<A>,
}

impl<A> Project<A> {
    pub fn map_achievements<B>(&self, f: impl FnMut(&A) -> B) -> Project<B> {
        Project {
            name: self.name.clone(),
            description: self.description.clone(),
            technologies: self.technologies.clone(),
            duration: self.duration.clone(),
            team_size: self.team_size,
            github_link: self.github_link.clone(),
            live_demo: self.live_demo.clone(),
            achievements: self.achievements.iter().map(f).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Education {
    #[serde(deserialize_with = "null_as_default")]
    pub degree: String,
    #[serde(deserialize_with = "null_as_default")]
    pub major: String,
    #[serde(deserialize_with = "null_as_default")]
    pub institution: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(deserialize_with = "null_as_default")]
    pub graduation_date: String,
    pub gpa: Option<f64>,
    #[serde(deserialize_with = "null_as_default")]
    pub honors: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub relevant_coursework: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Certification {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub issuing_organization: String,
    #[serde(deserialize_with = "null_as_default")]
    pub date_obtained: String,
    pub expiration_date: Option<String>,
    pub credential_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TechnicalSkills {
    #[serde(deserialize_with = "null_as_default")]
    pub programming_languages: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub frameworks: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub databases: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub tools: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub cloud_platforms: Vec<String>,
}

impl TechnicalSkills {
    /// Every listed skill across all categories, in category order.
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.programming_languages
            .iter()
            .chain(&self.frameworks)
            .chain(&self.databases)
            .chain(&self.tools)
            .chain(&self.cloud_platforms)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AdditionalSections {
    pub technical_skills: Option<TechnicalSkills>,
}

/// Everything the candidate submitted through the form.
///
/// `candidate_type` stays raw so an unknown value surfaces as a validation
/// error instead of a parse failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CandidateProfile {
    #[serde(deserialize_with = "null_as_default")]
    pub personal_info: PersonalInfo,
    pub candidate_type: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub target_role: TargetRole,
    pub professional_summary: Option<ProfessionalSummary>,
    #[serde(deserialize_with = "null_as_default")]
    pub experience: Vec<Experience>,
    #[serde(deserialize_with = "null_as_default")]
    pub projects: Vec<Project>,
    #[serde(deserialize_with = "null_as_default")]
    pub education: Vec<Education>,
    #[serde(deserialize_with = "null_as_default")]
    pub certifications: Vec<Certification>,
    #[serde(deserialize_with = "null_as_default")]
    pub additional_sections: AdditionalSections,
    pub applied_job_title: Option<String>,
    pub applied_company: Option<String>,
    pub job_description: Option<String>,
}

impl CandidateProfile {
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parsed candidate type; `None` when missing or unrecognized.
    pub fn candidate_kind(&self) -> Option<CandidateType> {
        self.candidate_type
            .as_deref()
            .and_then(|raw| raw.parse().ok())
    }

    pub fn technical_skills(&self) -> Option<&TechnicalSkills> {
        self.additional_sections.technical_skills.as_ref()
    }

    pub fn key_achievements(&self) -> &[Achievement] {
        self.professional_summary
            .as_ref()
            .map(|s| s.key_achievements.as_slice())
            .unwrap_or(&[])
    }
}

/// Reads an explicit JSON `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// True when the field is present and not blank.
pub(crate) fn has_text(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}
