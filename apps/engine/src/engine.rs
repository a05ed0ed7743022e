//! Resume engine: the public entry point that ties validation, formatting,
//! summary, sections, and scoring together.
//!
//! Each engine owns its choice source, so independent requests should use
//! independent engines. Nothing else is shared between calls.

use tracing::{info, warn};

use crate::ats::keywords::extract_keywords;
use crate::ats::optimizer::MAX_INJECTED_KEYWORDS;
use crate::ats::score::calculate_ats_score;
use crate::config::Config;
use crate::errors::EngineError;
use crate::generation::bullet::{format_bullet, BulletOptions};
use crate::generation::choice::{ChoiceSource, RandomChoice};
use crate::generation::sections::build_sections;
use crate::generation::summary::generate_summary;
use crate::models::{CandidateProfile, GeneratedBullet, Resume, Section};
use crate::validation::{validate_profile, ValidationResult};

pub struct ResumeEngine {
    choice: Box<dyn ChoiceSource>,
    max_injected_keywords: usize,
}

impl ResumeEngine {
    /// Engine with an entropy-seeded choice source.
    pub fn new() -> Self {
        Self::with_choice_source(RandomChoice::from_entropy())
    }

    pub fn with_choice_source(choice: impl ChoiceSource + 'static) -> Self {
        Self {
            choice: Box::new(choice),
            max_injected_keywords: MAX_INJECTED_KEYWORDS,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_choice_source(RandomChoice::from_seed_opt(config.random_seed))
            .with_max_injected_keywords(config.max_injected_keywords)
    }

    pub fn with_max_injected_keywords(mut self, limit: usize) -> Self {
        self.max_injected_keywords = limit;
        self
    }

    pub fn validate(&self, profile: &CandidateProfile) -> ValidationResult {
        validate_profile(profile)
    }

    pub fn format_bullet(
        &mut self,
        situation: &str,
        action: &str,
        result: &str,
        options: &BulletOptions,
    ) -> GeneratedBullet {
        format_bullet(situation, action, result, options, self.choice.as_mut())
    }

    pub fn generate_summary(&self, profile: &CandidateProfile) -> String {
        generate_summary(profile)
    }

    pub fn extract_keywords(&self, job_description: &str) -> Vec<String> {
        extract_keywords(job_description)
    }

    pub fn build_sections(&mut self, profile: &CandidateProfile) -> Vec<Section> {
        build_sections(profile, self.choice.as_mut())
    }

    pub fn calculate_ats_score(&self, profile: &CandidateProfile) -> u8 {
        calculate_ats_score(profile)
    }

    /// Appends missing job keywords to the resume's skills, up to the
    /// configured cap. Returns what was added.
    pub fn optimize_for_ats(&self, resume: &mut Resume, job_description: &str) -> Vec<String> {
        resume.optimize_for_ats(job_description, self.max_injected_keywords)
    }

    /// Validates, then assembles the full resume. All-or-nothing: any
    /// validation error fails the whole call.
    pub fn generate_resume(&mut self, profile: &CandidateProfile) -> Result<Resume, EngineError> {
        let validation = validate_profile(profile);
        if !validation.is_valid() {
            warn!(
                "Resume generation rejected with {} validation error(s)",
                validation.errors.len()
            );
            return Err(EngineError::Validation {
                errors: validation.errors,
            });
        }

        let resume = Resume {
            personal_info: profile.personal_info.clone(),
            professional_summary: generate_summary(profile),
            sections: build_sections(profile, self.choice.as_mut()),
            ats_score: calculate_ats_score(profile),
            warnings: validation.warnings,
        };

        info!(
            "Generated resume: {} section(s), ATS score {}, {} warning(s)",
            resume.sections.len(),
            resume.ats_score,
            resume.warnings.len()
        );
        Ok(resume)
    }

    /// `generate_resume` followed by an ATS pass against the profile's own
    /// job description, when it has one.
    pub fn generate_tailored_resume(
        &mut self,
        profile: &CandidateProfile,
    ) -> Result<Resume, EngineError> {
        let mut resume = self.generate_resume(profile)?;
        if let Some(job_description) = profile.job_description.as_deref() {
            self.optimize_for_ats(&mut resume, job_description);
        }
        Ok(resume)
    }
}

impl Default for ResumeEngine {
    fn default() -> Self {
        Self::new()
    }
}
