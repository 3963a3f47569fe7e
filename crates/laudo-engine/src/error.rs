use laudo_knowledge::error::KnowledgeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Knowledge(#[from] KnowledgeError),

    #[error("finding '{finding_id}' does not accept {attribute}")]
    AttributeNotApplicable {
        finding_id: String,
        attribute: &'static str,
    },

    #[error("finding '{finding_id}' has {len} instance(s), index {index} is out of range")]
    InstanceOutOfRange {
        finding_id: String,
        index: usize,
        len: usize,
    },
}
