use std::collections::HashMap;

use laudo_core::models::selection::FindingState;

static EMPTY_STATE: FindingState = FindingState::EMPTY;

/// Per-session selection state, keyed by finding id.
///
/// Plain key-value semantics: only the current value per key matters.
/// Entries equal to the empty state are not kept, so two stores describing
/// the same selection compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindingStateStore {
    states: HashMap<String, FindingState>,
}

impl FindingStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state of `finding_id`, or the empty state if never touched.
    pub fn get(&self, finding_id: &str) -> &FindingState {
        self.states.get(finding_id).unwrap_or(&EMPTY_STATE)
    }

    pub fn set(&mut self, finding_id: &str, state: FindingState) {
        if state.is_empty() {
            self.states.remove(finding_id);
        } else {
            self.states.insert(finding_id.to_string(), state);
        }
    }

    /// Drop everything recorded for `finding_id`.
    pub fn clear(&mut self, finding_id: &str) {
        self.states.remove(finding_id);
    }

    pub fn reset(&mut self) {
        self.states.clear();
    }

    pub fn is_checked(&self, finding_id: &str) -> bool {
        self.get(finding_id).is_checked
    }

    /// Ids of checked findings, in no particular order.
    pub fn checked_ids(&self) -> impl Iterator<Item = &str> {
        self.states
            .iter()
            .filter(|(_, state)| state.is_checked)
            .map(|(id, _)| id.as_str())
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
