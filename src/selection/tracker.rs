//! Selection tracker
//!
//! Every member must be a direct child of the current location. The caller
//! supplies that check on toggle and clears the set whenever the location changes.

use std::collections::BTreeSet;

use log::{debug, warn};

use crate::entity::EntityId;

/// What a toggle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Selected,
    Deselected,
    /// The identifier is not a child of the current location.
    Ignored,
}

#[derive(Debug, Default, Clone)]
pub struct SelectionSet {
    ids: BTreeSet<EntityId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `id` if absent, remove it if present. Identifiers rejected by
    /// `is_visible` are left alone.
    pub fn toggle<F>(&mut self, id: EntityId, is_visible: F) -> ToggleOutcome
    where
        F: FnOnce(EntityId) -> bool,
    {
        if !is_visible(id) {
            warn!("Ignoring toggle of {}: not in the current folder", id);
            return ToggleOutcome::Ignored;
        }

        if self.ids.remove(&id) {
            debug!("Deselected {}", id);
            ToggleOutcome::Deselected
        } else {
            self.ids.insert(id);
            debug!("Selected {}", id);
            ToggleOutcome::Selected
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Drop members for which `keep` returns false. Returns how many were dropped.
    pub fn retain<F>(&mut self, keep: F) -> usize
    where
        F: Fn(&EntityId) -> bool,
    {
        let before = self.ids.len();
        self.ids.retain(|id| keep(id));
        before - self.ids.len()
    }

    pub fn contains(&self, id: &EntityId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.ids.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<EntityId> {
        self.ids().collect()
    }
}
