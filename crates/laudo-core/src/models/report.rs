use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// Doctor and patient identification printed at the top of a report.
///
/// Values are opaque and substituted verbatim; blank fields render as
/// placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReportHeader {
    #[serde(default)]
    pub doctor_name: String,
    #[serde(default)]
    pub doctor_crm: String,
    #[serde(default)]
    pub patient_name: String,
    #[serde(default)]
    pub patient_birth_date: String,
    #[serde(default)]
    pub patient_gender: String,
}

/// A generated report kept in the report history.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StoredReport {
    pub id: Uuid,
    pub title: String,
    pub exam_type: String,
    pub content: String,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

/// Parse a report id typed on the command line or received from a UI.
pub fn parse_report_id(value: &str) -> Result<Uuid, CoreError> {
    Ok(value.trim().parse::<Uuid>()?)
}
