use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::GenerationError;

/// Input handed to an external narrative-generation collaborator.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NarrativeRequest {
    pub exam_type: String,
    pub patient_name: String,
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub clinical_indication: Option<String>,
    /// Findings lines in report order.
    pub findings: Vec<String>,
}

/// Sections produced by a narrative collaborator, or by the deterministic
/// fallback when none is reachable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NarrativeReport {
    pub technique: String,
    pub report: String,
    pub conclusion: String,
    pub observations: Option<String>,
}

/// A best-effort generator of free narrative text (e.g. a local LLM).
///
/// Failures are expected; callers must fall back to the deterministic
/// assembler output rather than block report generation.
pub trait NarrativeGenerator {
    /// Short name used in logs (e.g. "ollama").
    fn name(&self) -> &str;

    fn generate(&self, request: &NarrativeRequest) -> Result<NarrativeReport, GenerationError>;
}
