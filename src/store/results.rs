//! Store result types
//!
//! Defines result structures returned by store operations.

use std::fmt;

use crate::entity::{EntityId, File, FileId, Folder, FolderId, Location};

/// Result of a (cascading) delete.
#[derive(Debug, Clone, Default)]
pub struct DeleteResult {
    /// Every folder removed, requested ones and their descendants.
    pub folders: Vec<Folder>,
    /// Every file removed. Their payload handles have already been released.
    pub files: Vec<File>,
    /// Requested identifiers that were not in the store.
    pub ignored: Vec<EntityId>,
    /// Broken links found around the removed entities.
    pub violations: Vec<IntegrityViolation>,
}

impl DeleteResult {
    pub fn removed_count(&self) -> usize {
        self.folders.len() + self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.removed_count() == 0
    }
}

/// A broken structural invariant in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityViolation {
    DanglingFolderParent { folder: FolderId, parent: Location },
    DanglingFileParent { file: FileId, parent: Location },
    StaleChildIndex { parent: Location, child: EntityId },
    Cycle(FolderId),
}

impl fmt::Display for IntegrityViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegrityViolation::DanglingFolderParent { folder, parent } => {
                write!(f, "folder {} points at missing parent {}", folder, parent)
            }
            IntegrityViolation::DanglingFileParent { file, parent } => {
                write!(f, "file {} points at missing parent {}", file, parent)
            }
            IntegrityViolation::StaleChildIndex { parent, child } => {
                write!(f, "child index of {} lists stale entry {}", parent, child)
            }
            IntegrityViolation::Cycle(id) => write!(f, "folder {} is its own ancestor", id),
        }
    }
}
