pub mod profile;
pub mod resume;

pub use profile::{
    Achievement, AdditionalSections, CandidateProfile, CandidateType, Certification, Education,
    Experience, PersonalInfo, ProfessionalSummary, Project, TargetRole, TechnicalSkills,
};
pub use resume::{GeneratedBullet, Resume, Section, SkillsContent};
