//! Visible-items snapshot
//!
//! An owned copy of everything a renderer reads after an operation, taken in
//! one step so it never mixes state from before and after a mutation.

use crate::entity::{EntityId, File, Folder, Location};
use crate::navigate::Breadcrumb;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleItems {
    pub location: Location,
    pub trail: Vec<Breadcrumb>,
    pub query: String,
    pub folders: Vec<Folder>,
    pub files: Vec<File>,
    pub selection: Vec<EntityId>,
}

impl VisibleItems {
    pub fn len(&self) -> usize {
        self.folders.len() + self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_selected(&self, id: EntityId) -> bool {
        self.selection.contains(&id)
    }

    /// Entity at `index` in listing order: folders first, then files.
    pub fn item_at(&self, index: usize) -> Option<EntityId> {
        if index < self.folders.len() {
            Some(self.folders[index].entity_id())
        } else {
            self.files
                .get(index - self.folders.len())
                .map(File::entity_id)
        }
    }

    /// First visible entity with exactly this name, folders first.
    pub fn find(&self, name: &str) -> Option<EntityId> {
        self.folders
            .iter()
            .find(|f| f.name == name)
            .map(Folder::entity_id)
            .or_else(|| {
                self.files
                    .iter()
                    .find(|f| f.name == name)
                    .map(File::entity_id)
            })
    }
}
