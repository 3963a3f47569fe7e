use laudo_core::error::GenerationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NarrativeError {
    #[error("narrative service unavailable: {0}")]
    Unavailable(String),

    #[error("narrative request failed with HTTP {status}: {body}")]
    Request { status: u16, body: String },

    #[error("response parsing failed: {0}")]
    ResponseParse(String),}

impl From<NarrativeError> for GenerationError {
    fn from(e: NarrativeError) -> Self {
        match e {
            NarrativeError::Unavailable(reason) => GenerationError::Unavailable(reason),
            other => GenerationError::Failed(other.to_string()),
        }
    }
}
