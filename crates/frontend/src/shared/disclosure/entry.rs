use contracts::usecases::common_use_cases::UseCaseId;
use std::collections::HashMap;

/// Expand/collapse flags of the rendered entries.
///
/// Entries are tracked lazily when they first enter the visible window and are
/// independent of each other: expanding one never collapses another.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryStates {
    expanded: HashMap<UseCaseId, bool>,
}

impl EntryStates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking an entry (collapsed). Already tracked entries keep their flag.
    pub fn track(&mut self, id: &UseCaseId) {
        self.expanded.entry(id.clone()).or_insert(false);
    }

    /// Flip the flag of a tracked entry. Events for unknown ids are ignored,
    /// they can arrive for entries that are no longer rendered.
    pub fn toggle(&mut self, id: &UseCaseId) {
        match self.expanded.get_mut(id) {
            Some(flag) => *flag = !*flag,
            None => log::trace!("disclosure: toggle for untracked entry {} ignored", id),
        }
    }

    pub fn is_expanded(&self, id: &UseCaseId) -> bool {
        self.expanded.get(id).copied().unwrap_or(false)
    }

    pub fn collapse_all(&mut self) {
        self.expanded.values_mut().for_each(|flag| *flag = false);
    }

    /// Drop entries whose id does not satisfy `keep`
    pub fn retain(&mut self, mut keep: impl FnMut(&UseCaseId) -> bool) {
        self.expanded.retain(|id, _| keep(id));
    }

    pub fn is_tracked(&self, id: &UseCaseId) -> bool {
        self.expanded.contains_key(id)
    }

    pub fn tracked_count(&self) -> usize {
        self.expanded.len()
    }

    pub fn expanded_count(&self) -> usize {
        self.expanded.values().filter(|flag| **flag).count()
    }
}
