use laudo_core::models::selection::Laterality;
use serde::{Deserialize, Serialize};

/// A discrete user action on the finding selection.
///
/// Serialisable so a whole session can be replayed from a JSON script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SelectionAction {
    Check {
        finding: String,
    },
    Uncheck {
        finding: String,
    },
    /// Quantity text exactly as typed.
    Quantity {
        finding: String,
        text: String,
    },
    Size {
        finding: String,
        size: String,
    },
    Laterality {
        finding: String,
        laterality: Option<Laterality>,
    },
    /// Attributes of one occurrence of a multi-occurrence finding.
    Instance {
        finding: String,
        index: usize,
        #[serde(default)]
        size: String,
        #[serde(default)]
        laterality: Option<Laterality>,
    },
}

impl SelectionAction {
    pub fn finding(&self) -> &str {
        match self {
            SelectionAction::Check { finding }
            | SelectionAction::Uncheck { finding }
            | SelectionAction::Quantity { finding, .. }
            | SelectionAction::Size { finding, .. }
            | SelectionAction::Laterality { finding, .. }
            | SelectionAction::Instance { finding, .. } => finding,
        }
    }
}
