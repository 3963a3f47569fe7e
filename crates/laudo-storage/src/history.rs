use std::path::{Path, PathBuf};

use laudo_core::models::report::StoredReport;
use tracing::info;
use uuid::Uuid;

use crate::error::StorageError;
use crate::fs::{read_optional, write_atomic};

pub const HISTORY_FILE: &str = "reports.json";

/// Title used when the caller supplies none.
pub const DEFAULT_TITLE: &str = "Laudo";

/// Saved reports, newest first, in a single JSON file.
///
/// Every operation re-reads the file, so several processes may share one
/// history as long as they do not write concurrently.
#[derive(Debug, Clone)]
pub struct ReportHistory {
    path: PathBuf,
}

impl ReportHistory {
    /// History stored as [`HISTORY_FILE`] inside `data_dir`.
    pub fn in_dir(data_dir: impl AsRef<Path>) -> Self {
        Self::at(data_dir.as_ref().join(HISTORY_FILE))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All reports, newest first. A missing file is an empty history.
    pub fn list(&self) -> Result<Vec<StoredReport>, StorageError> {
        match read_optional(&self.path)? {
            Some(contents) if !contents.trim().is_empty() => Ok(serde_json::from_str(&contents)?),
            _ => Ok(Vec::new()),
        }
    }

    pub fn get(&self, id: Uuid) -> Result<StoredReport, StorageError> {
        self.list()?
            .into_iter()
            .find(|r| r.id == id)
            .ok_or(StorageError::NotFound { id })
    }

    /// Store a new report at the head of the history.
    ///
    /// The title gets the local save time appended, e.g.
    /// `Laudo - 18/10/2026 14:05`.
    pub fn save(&self, title: Option<&str>, exam_type: &str, content: &str) -> Result<StoredReport, StorageError> {
        let now = jiff::Zoned::now();
        let base = title.map(str::trim).filter(|t| !t.is_empty()).unwrap_or(DEFAULT_TITLE);

        let report = StoredReport {
            id: Uuid::new_v4(),
            title: format!("{base} - {}", now.strftime("%d/%m/%Y %H:%M")),
            exam_type: exam_type.to_string(),
            content: content.to_string(),
            created_at: now.timestamp(),
            updated_at: now.timestamp(),
        };

        let mut reports = self.list()?;
        reports.insert(0, report.clone());
        self.write(&reports)?;

        info!(id = %report.id, exam_type, "report saved");
        Ok(report)
    }

    /// Replace the content of an existing report.
    pub fn update(&self, id: Uuid, content: &str) -> Result<StoredReport, StorageError> {
        let mut reports = self.list()?;
        let report = reports
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(StorageError::NotFound { id })?;

        report.content = content.to_string();
        report.updated_at = jiff::Timestamp::now();
        let updated = report.clone();
        self.write(&reports)?;

        info!(%id, "report updated");
        Ok(updated)
    }

    pub fn delete(&self, id: Uuid) -> Result<(), StorageError> {
        let mut reports = self.list()?;
        let before = reports.len();
        reports.retain(|r| r.id != id);
        if reports.len() == before {
            return Err(StorageError::NotFound { id });
        }
        self.write(&reports)?;

        info!(%id, remaining = reports.len(), "report deleted");
        Ok(())
    }

    fn write(&self, reports: &[StoredReport]) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(reports)?;
        write_atomic(&self.path, json.as_bytes())
    }
}
