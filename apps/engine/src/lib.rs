//! XYZ resume engine.
//!
//! Validates candidate profiles, rewrites achievements into XYZ-style bullets
//! (action + quantified result), builds a professional summary and resume
//! sections, matches a job description against a fixed technology vocabulary,
//! and scores profile completeness.
//!
//! Rendering, LLM calls, and HTTP plumbing live outside this crate and consume
//! [`Resume`] read-only.

pub mod ats;
pub mod config;
pub mod engine;
pub mod errors;
pub mod generation;
pub mod models;
pub mod samples;
pub mod validation;

pub use config::Config;
pub use engine::ResumeEngine;
pub use errors::EngineError;
pub use generation::bullet::BulletOptions;
pub use generation::choice::{ChoiceSource, FirstChoice, RandomChoice};
pub use generation::vocabulary::ActionVerbCategory;
pub use models::{CandidateProfile, GeneratedBullet, Resume, Section};
pub use validation::ValidationResult;
