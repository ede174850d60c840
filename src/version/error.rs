use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Rate limited: retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("Repository not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Error)]
#[error("Invalid version {input:?}: {reason}")]
pub struct VersionParseError {
    pub input: String,
    pub reason: String,
}

impl VersionParseError {
    pub fn new(input: &str, reason: impl ToString) -> Self {
        Self {
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }
}
