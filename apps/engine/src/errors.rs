use thiserror::Error;

/// Engine-level error type.
/// Validation failures carry every message so callers can still itemize them.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Validation errors: {}", .errors.join(", "))]
    Validation { errors: Vec<String> },

    #[error("Profile parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid option: {0}")]
    InvalidOption(String),
}

impl EngineError {
    /// The individual validation messages, empty for non-validation errors.
    pub fn validation_errors(&self) -> &[String] {
        match self {
            EngineError::Validation { errors } => errors,
            _ => &[],
        }
    }
}
