use std::path::Path;

use laudo_core::models::report::ReportHeader;
use laudo_engine::action::SelectionAction;
use serde::{Deserialize, Serialize};

/// A recorded report-editing session: exam type, header fields and the
/// user's selection actions in order.
///
/// ```json
/// {
///   "exam_type": "abdome-total",
///   "header": { "patient_name": "Maria Silva" },
///   "actions": [
///     { "action": "check", "finding": "colelitiase" },
///     { "action": "quantity", "finding": "colelitiase", "text": "2" }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionScript {
    pub exam_type: String,
    #[serde(default)]
    pub header: ReportHeader,
    /// Patient age, only used for the narrative prompt.
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub clinical_indication: Option<String>,
    #[serde(default)]
    pub actions: Vec<SelectionAction>,
}

impl SessionScript {
    pub fn load(path: &Path) -> eyre::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| eyre::eyre!("failed to read script {}: {e}", path.display()))?;
        let script = serde_json::from_str(&contents)
            .map_err(|e| eyre::eyre!("invalid script {}: {e}", path.display()))?;
        Ok(script)
    }
}
