use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A standardized finding a clinician may record for a category.
///
/// Definitions are static knowledge-base data; nothing mutates them after load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FindingDefinition {
    /// Globally unique across the knowledge base (e.g. "nodulo-tireoidiano").
    pub id: String,
    pub label: String,
    /// Marks the category's Normal finding. Checking it excludes every
    /// other finding of the same category.
    pub is_normal_variant: bool,
    pub requires_size: bool,
    pub has_laterality: bool,
    /// Multi-occurrence finding: each instance carries its own size and
    /// laterality.
    pub has_quantity: bool,
    pub characteristics: Vec<String>,
    /// Sentence emitted in the findings section when the finding is checked.
    pub altered_text: String,
    pub conclusion_text: Option<String>,
    /// Hint shown to the clinician. Never rendered into a report.
    pub observations: Option<String>,
}

impl FindingDefinition {
    pub fn new(id: &str, label: &str, altered_text: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            is_normal_variant: false,
            requires_size: false,
            has_laterality: false,
            has_quantity: false,
            characteristics: Vec::new(),
            altered_text: altered_text.to_string(),
            conclusion_text: None,
            observations: None,
        }
    }

    pub fn normal(mut self) -> Self {
        self.is_normal_variant = true;
        self
    }

    pub fn sized(mut self) -> Self {
        self.requires_size = true;
        self
    }

    pub fn lateral(mut self) -> Self {
        self.has_laterality = true;
        self
    }

    pub fn multiple(mut self) -> Self {
        self.has_quantity = true;
        self
    }

    pub fn concluding(mut self, text: &str) -> Self {
        self.conclusion_text = Some(text.to_string());
        self
    }

    pub fn characteristics(mut self, values: &[&str]) -> Self {
        self.characteristics = values.iter().map(|v| v.to_string()).collect();
        self
    }

    pub fn observations(mut self, text: &str) -> Self {
        self.observations = Some(text.to_string());
        self
    }
}

/// An anatomical region or organ within an exam type.
///
/// `findings` is kept in narrative order; the report lists positive
/// findings in exactly this order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Category {
    pub name: String,
    pub default_normal_text: String,
    pub findings: Vec<FindingDefinition>,
}

impl Category {
    pub fn new(name: &str, default_normal_text: &str, findings: Vec<FindingDefinition>) -> Self {
        Self {
            name: name.to_string(),
            default_normal_text: default_normal_text.to_string(),
            findings,
        }
    }

    /// The finding tagged as this category's Normal variant, if any.
    pub fn normal_variant(&self) -> Option<&FindingDefinition> {
        self.findings.iter().find(|f| f.is_normal_variant)
    }

    pub fn finding(&self, finding_id: &str) -> Option<&FindingDefinition> {
        self.findings.iter().find(|f| f.id == finding_id)
    }

    pub fn contains(&self, finding_id: &str) -> bool {
        self.finding(finding_id).is_some()
    }
}
