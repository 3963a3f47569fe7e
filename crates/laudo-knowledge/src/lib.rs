//! laudo-knowledge
//!
//! The ultrasound knowledge base. Pure data, no I/O. Defines each exam
//! type, its categories (organs/regions) and the standardized findings a
//! clinician can select, plus the conclusion → guidance lookup.

pub mod error;
pub mod exams;
pub mod guidance;

use std::collections::HashSet;
use std::sync::LazyLock;

use laudo_core::models::finding::{Category, FindingDefinition};
use thiserror::Error;

use error::KnowledgeError;
use guidance::GuidanceTable;

/// Trait implemented by each exam type in the catalogue.
pub trait Exam: Send + Sync {
    /// Short slug (e.g. "abdome-total").
    fn id(&self) -> &str;

    /// Exam type name as shown to clinicians (e.g. "US Abdome - Total").
    fn name(&self) -> &str;

    /// Scanning technique sentence printed in the report header.
    fn technique(&self) -> &str;

    /// Categories in narrative order.
    fn categories(&self) -> &[Category];

    /// The category holding `finding_id`, if this exam contains it.
    fn category_of(&self, finding_id: &str) -> Option<&Category> {
        self.categories().iter().find(|c| c.contains(finding_id))
    }

    fn finding_count(&self) -> usize {
        self.categories().iter().map(|c| c.findings.len()).sum()
    }
}

/// Return all registered exam types, in menu order.
pub fn all_exams() -> Vec<Box<dyn Exam>> {
    vec![
        Box::new(exams::thyroid::CervicalThyroid),
        Box::new(exams::abdomen::TotalAbdomen),
        Box::new(exams::female_pelvis::FemalePelvis),
        Box::new(exams::obstetric_first::ObstetricFirstTrimester),
        Box::new(exams::obstetric_later::ObstetricLaterTrimesters),
    ]
}

/// Technique sentence for reports whose exam type is unknown or absent.
pub const DEFAULT_TECHNIQUE: &str =
    "Exame realizado com transdutor apropriado na modalidade bidimensional.";

static KNOWLEDGE_BASE: LazyLock<KnowledgeBase> = LazyLock::new(KnowledgeBase::load);

/// An integrity problem in the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KnowledgeIssue {
    #[error("finding id '{finding_id}' is defined more than once")]
    DuplicateFindingId { finding_id: String },

    #[error("{exam_type} / {category}: more than one normal variant")]
    MultipleNormalVariants { exam_type: String, category: String },

    #[error("{exam_type} / {category}: category has no findings")]
    EmptyCategory { exam_type: String, category: String },
}

/// Read-only catalogue of exam types, categories and findings.
///
/// Loaded once and shared; nothing mutates it after construction.
pub struct KnowledgeBase {
    exams: Vec<Box<dyn Exam>>,
    guidance: GuidanceTable,
}

impl KnowledgeBase {
    pub fn load() -> Self {
        Self::from_exams(all_exams())
    }

    pub fn from_exams(exams: Vec<Box<dyn Exam>>) -> Self {
        let guidance = GuidanceTable::build(&exams);
        let kb = Self { exams, guidance };

        tracing::info!(
            exam_types = kb.exams.len(),
            findings = kb.exams.iter().map(|e| e.finding_count()).sum::<usize>(),
            guidance_entries = kb.guidance.len(),
            "knowledge base loaded"
        );
        for issue in kb.validate() {
            tracing::warn!(%issue, "knowledge base integrity issue");
        }
        kb
    }

    /// The process-wide knowledge base.
    pub fn global() -> &'static KnowledgeBase {
        &KNOWLEDGE_BASE
    }

    pub fn list_exam_types(&self) -> Vec<&str> {
        self.exams.iter().map(|e| e.name()).collect()
    }

    /// Look up an exam type by name or slug.
    pub fn exam(&self, exam_type: &str) -> Result<&dyn Exam, KnowledgeError> {
        self.exams
            .iter()
            .find(|e| e.name() == exam_type || e.id() == exam_type)
            .map(|e| e.as_ref())
            .ok_or_else(|| KnowledgeError::UnknownExamType(exam_type.to_string()))
    }

    pub fn categories(&self, exam_type: &str) -> Result<&[Category], KnowledgeError> {
        Ok(self.exam(exam_type)?.categories())
    }

    pub fn technique(&self, exam_type: &str) -> Result<&str, KnowledgeError> {
        Ok(self.exam(exam_type)?.technique())
    }

    /// Technique of `exam_type`, or [`DEFAULT_TECHNIQUE`] if it is unknown.
    pub fn technique_or_default(&self, exam_type: &str) -> &str {
        self.technique(exam_type).unwrap_or(DEFAULT_TECHNIQUE)
    }

    /// Find a finding definition anywhere in the catalogue.
    pub fn find_definition(&self, finding_id: &str) -> Result<&FindingDefinition, KnowledgeError> {
        self.exams
            .iter()
            .flat_map(|e| e.categories())
            .flat_map(|c| &c.findings)
            .find(|f| f.id == finding_id)
            .ok_or_else(|| KnowledgeError::UnknownFinding(finding_id.to_string()))
    }

    /// The category of `exam_type` that holds `finding_id`.
    pub fn category_of(&self, exam_type: &str, finding_id: &str) -> Result<&Category, KnowledgeError> {
        let exam = self.exam(exam_type)?;
        if let Some(category) = exam.category_of(finding_id) {
            return Ok(category);
        }
        // Distinguish a typo from a finding that belongs to another exam.
        self.find_definition(finding_id)?;
        Err(KnowledgeError::FindingNotInExam {
            exam_type: exam.name().to_string(),
            finding_id: finding_id.to_string(),
        })
    }

    pub fn guidance_for(&self, conclusion: &str) -> Option<&str> {
        self.guidance.guidance_for(conclusion)
    }

    /// Check catalogue integrity. An empty result means the catalogue is sound.
    pub fn validate(&self) -> Vec<KnowledgeIssue> {
        let mut issues = Vec::new();
        let mut seen = HashSet::new();

        for exam in &self.exams {
            for category in exam.categories() {
                if category.findings.is_empty() {
                    issues.push(KnowledgeIssue::EmptyCategory {
                        exam_type: exam.name().to_string(),
                        category: category.name.clone(),
                    });
                }
                if category.findings.iter().filter(|f| f.is_normal_variant).count() > 1 {
                    issues.push(KnowledgeIssue::MultipleNormalVariants {
                        exam_type: exam.name().to_string(),
                        category: category.name.clone(),
                    });
                }
                for finding in &category.findings {
                    if !seen.insert(finding.id.as_str()) {
                        issues.push(KnowledgeIssue::DuplicateFindingId {
                            finding_id: finding.id.clone(),
                        });
                    }
                }
            }
        }
        issues
    }
}
