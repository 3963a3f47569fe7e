use laudo_core::models::finding::{Category, FindingDefinition};
use laudo_core::models::selection::{FindingInstance, FindingState, Laterality, parse_quantity};
use laudo_knowledge::KnowledgeBase;
use laudo_knowledge::error::KnowledgeError;
use tracing::debug;

use crate::action::SelectionAction;
use crate::error::EngineError;
use crate::store::FindingStateStore;

/// Applies user actions to a [`FindingStateStore`] while keeping the
/// selection consistent:
///
/// - a category's normal variant and its altered findings are never checked
///   together; checking one side clears the other,
/// - unchecking a finding forgets its size, laterality and instances,
/// - a multi-occurrence finding always has one instance per parsed quantity.
///
/// Attribute edits on a finding that is not checked are ignored.
pub struct SelectionRules<'kb> {
    kb: &'kb KnowledgeBase,
}

impl<'kb> SelectionRules<'kb> {
    pub fn new(kb: &'kb KnowledgeBase) -> Self {
        Self { kb }
    }

    pub fn apply(
        &self,
        store: &mut FindingStateStore,
        exam_type: &str,
        action: &SelectionAction,
    ) -> Result<(), EngineError> {
        match action {
            SelectionAction::Check { finding } => self.toggle(store, exam_type, finding, true),
            SelectionAction::Uncheck { finding } => self.toggle(store, exam_type, finding, false),
            SelectionAction::Quantity { finding, text } => {
                self.set_quantity(store, exam_type, finding, text)
            }
            SelectionAction::Size { finding, size } => self.set_size(store, exam_type, finding, size),
            SelectionAction::Laterality {
                finding,
                laterality,
            } => self.set_laterality(store, exam_type, finding, *laterality),
            SelectionAction::Instance {
                finding,
                index,
                size,
                laterality,
            } => self.set_instance(
                store,
                exam_type,
                finding,
                *index,
                FindingInstance::new(size.as_str(), *laterality),
            ),
        }
    }

    /// Check or uncheck `finding_id`.
    ///
    /// Checking an already checked finding keeps its attributes.
    pub fn toggle(
        &self,
        store: &mut FindingStateStore,
        exam_type: &str,
        finding_id: &str,
        checked: bool,
    ) -> Result<(), EngineError> {
        let (category, definition) = self.resolve(exam_type, finding_id)?;

        if !checked {
            store.clear(finding_id);
            debug!(finding = finding_id, "finding unchecked");
            return Ok(());
        }
        if store.is_checked(finding_id) {
            return Ok(());
        }

        if definition.is_normal_variant {
            for other in category.findings.iter().filter(|f| f.id != definition.id) {
                if !store.get(&other.id).is_empty() {
                    store.clear(&other.id);
                    debug!(finding = %other.id, normal = finding_id, "cleared by normal variant");
                }
            }
        } else if let Some(normal) = category.normal_variant()
            && !store.get(&normal.id).is_empty()
        {
            store.clear(&normal.id);
            debug!(finding = %normal.id, altered = finding_id, "normal variant cleared");
        }

        store.set(finding_id, initial_state(definition));
        debug!(finding = finding_id, category = %category.name, "finding checked");
        Ok(())
    }

    /// Record the quantity text of a multi-occurrence finding and resize its
    /// instance list to match.
    ///
    /// Unparseable text (blank, zero, negative, non-numeric, or above
    /// [`MAX_QUANTITY`](laudo_core::models::selection::MAX_QUANTITY)) is kept
    /// as typed and leaves zero instances. Growing appends empty instances;
    /// shrinking truncates from the end.
    pub fn set_quantity(
        &self,
        store: &mut FindingStateStore,
        exam_type: &str,
        finding_id: &str,
        text: &str,
    ) -> Result<(), EngineError> {
        let (_, definition) = self.resolve(exam_type, finding_id)?;
        if !definition.has_quantity {
            return Err(not_applicable(finding_id, "a quantity"));
        }
        let Some(mut state) = checked_state(store, finding_id) else {
            return Ok(());
        };

        state.quantity_text = text.to_string();
        match parse_quantity(text) {
            Some(count) => state.instances.resize(count, FindingInstance::EMPTY),
            None => state.instances.clear(),
        }
        debug!(
            finding = finding_id,
            quantity = text,
            instances = state.instances.len(),
            "quantity updated"
        );
        store.set(finding_id, state);
        Ok(())
    }

    pub fn set_size(
        &self,
        store: &mut FindingStateStore,
        exam_type: &str,
        finding_id: &str,
        size: &str,
    ) -> Result<(), EngineError> {
        let (_, definition) = self.resolve(exam_type, finding_id)?;
        if !definition.requires_size || definition.has_quantity {
            return Err(not_applicable(finding_id, "a size"));
        }
        let Some(mut state) = checked_state(store, finding_id) else {
            return Ok(());
        };

        state.size = size.to_string();
        store.set(finding_id, state);
        Ok(())
    }

    pub fn set_laterality(
        &self,
        store: &mut FindingStateStore,
        exam_type: &str,
        finding_id: &str,
        laterality: Option<Laterality>,
    ) -> Result<(), EngineError> {
        let (_, definition) = self.resolve(exam_type, finding_id)?;
        if !definition.has_laterality || definition.has_quantity {
            return Err(not_applicable(finding_id, "a laterality"));
        }
        let Some(mut state) = checked_state(store, finding_id) else {
            return Ok(());
        };

        state.laterality = laterality;
        store.set(finding_id, state);
        Ok(())
    }

    /// Replace the attributes of occurrence `index` of a multi-occurrence
    /// finding.
    pub fn set_instance(
        &self,
        store: &mut FindingStateStore,
        exam_type: &str,
        finding_id: &str,
        index: usize,
        instance: FindingInstance,
    ) -> Result<(), EngineError> {
        let (_, definition) = self.resolve(exam_type, finding_id)?;
        if !definition.has_quantity {
            return Err(not_applicable(finding_id, "per-instance attributes"));
        }
        if !definition.requires_size && !instance.size.trim().is_empty() {
            return Err(not_applicable(finding_id, "a size"));
        }
        if !definition.has_laterality && instance.laterality.is_some() {
            return Err(not_applicable(finding_id, "a laterality"));
        }
        let Some(mut state) = checked_state(store, finding_id) else {
            return Ok(());
        };

        let len = state.instances.len();
        let slot = state
            .instances
            .get_mut(index)
            .ok_or_else(|| EngineError::InstanceOutOfRange {
                finding_id: finding_id.to_string(),
                index,
                len,
            })?;
        *slot = instance;
        store.set(finding_id, state);
        Ok(())
    }

    fn resolve(
        &self,
        exam_type: &str,
        finding_id: &str,
    ) -> Result<(&'kb Category, &'kb FindingDefinition), EngineError> {
        let category = self.kb.category_of(exam_type, finding_id)?;
        let definition = category
            .finding(finding_id)
            .ok_or_else(|| KnowledgeError::UnknownFinding(finding_id.to_string()))?;
        Ok((category, definition))
    }
}

fn initial_state(definition: &FindingDefinition) -> FindingState {
    if definition.has_quantity {
        FindingState {
            is_checked: true,
            quantity_text: "1".to_string(),
            instances: vec![FindingInstance::EMPTY],
            ..FindingState::EMPTY
        }
    } else {
        FindingState {
            is_checked: true,
            ..FindingState::EMPTY
        }
    }
}

/// Copy of the state of a checked finding; `None` (logged) otherwise.
fn checked_state(store: &FindingStateStore, finding_id: &str) -> Option<FindingState> {
    let state = store.get(finding_id);
    if state.is_checked {
        Some(state.clone())
    } else {
        debug!(finding = finding_id, "ignoring attribute edit on unchecked finding");
        None
    }
}

fn not_applicable(finding_id: &str, attribute: &'static str) -> EngineError {
    EngineError::AttributeNotApplicable {
        finding_id: finding_id.to_string(),
        attribute,
    }
}
