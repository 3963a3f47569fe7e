use thiserror::Error;

#[derive(Debug, Error)]
pub enum KnowledgeError {
    #[error("unknown exam type: {0}")]
    UnknownExamType(String),

    #[error("unknown finding: {0}")]
    UnknownFinding(String),

    #[error("finding '{finding_id}' is not part of exam '{exam_type}'")]
    FindingNotInExam {
        exam_type: String,
        finding_id: String,
    },
}
