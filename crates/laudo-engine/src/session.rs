use laudo_knowledge::KnowledgeBase;
use tracing::info;

use crate::action::SelectionAction;
use crate::error::EngineError;
use crate::rules::SelectionRules;
use crate::store::FindingStateStore;

/// One report-editing session: the chosen exam type and its selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    exam_type: String,
    store: FindingStateStore,
}

impl Session {
    /// Start a session for `exam_type` (name or slug) with an empty selection.
    pub fn start(kb: &KnowledgeBase, exam_type: &str) -> Result<Self, EngineError> {
        let exam = kb.exam(exam_type)?;
        info!(exam_type = exam.name(), "session started");
        Ok(Self {
            exam_type: exam.name().to_string(),
            store: FindingStateStore::new(),
        })
    }

    /// Canonical exam type name.
    pub fn exam_type(&self) -> &str {
        &self.exam_type
    }

    pub fn store(&self) -> &FindingStateStore {
        &self.store
    }

    /// Change the exam type. Any change discards the whole selection.
    pub fn switch_exam(&mut self, kb: &KnowledgeBase, exam_type: &str) -> Result<(), EngineError> {
        let exam = kb.exam(exam_type)?;
        if exam.name() == self.exam_type {
            return Ok(());
        }
        info!(from = %self.exam_type, to = exam.name(), "exam type changed, selection reset");
        self.exam_type = exam.name().to_string();
        self.store.reset();
        Ok(())
    }

    pub fn apply(&mut self, rules: &SelectionRules<'_>, action: &SelectionAction) -> Result<(), EngineError> {
        rules.apply(&mut self.store, &self.exam_type, action)
    }

    /// Apply actions in order, stopping at the first rejected one.
    pub fn apply_all<'a>(
        &mut self,
        rules: &SelectionRules<'_>,
        actions: impl IntoIterator<Item = &'a SelectionAction>,
    ) -> Result<(), EngineError> {
        for action in actions {
            self.apply(rules, action)?;
        }
        Ok(())
    }

    /// Discard the selection but keep the exam type.
    pub fn clear(&mut self) {
        self.store.reset();
    }
}
