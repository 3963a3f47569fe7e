use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid laterality: {0}")]
    InvalidLaterality(String),

    #[error("invalid uuid: {0}")]
    InvalidUuid(#[from] uuid::Error),
}

/// Why a narrative collaborator returned nothing usable.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("narrative generator unavailable: {0}")]
    Unavailable(String),

    #[error("narrative generation failed: {0}")]
    Failed(String),
}
