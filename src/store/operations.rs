//! Entity store operations
//!
//! Folders and files live in maps keyed by identifier. A separate adjacency
//! index maps every location to its children in insertion order; it is updated
//! on every create and delete so listing and cascade never scan the whole store.

use std::collections::{HashMap, HashSet, VecDeque};

use chrono::{DateTime, Utc};
use log::{error, info, warn};

use crate::blob::BlobStore;
use crate::entity::{
    EntityId, File, FileId, FileKind, Folder, FolderId, IngestEntry, Location,
};
use crate::error::StoreError;
use crate::store::results::{DeleteResult, IntegrityViolation};
use crate::store::validation::{MAX_FOLDER_DEPTH, MAX_NAME_LENGTH, validate_folder_name};

/// Limits applied when creating folders.
#[derive(Debug, Clone, Copy)]
pub struct StoreLimits {
    pub max_name_length: usize,
    pub max_folder_depth: usize,
}

impl Default for StoreLimits {
    fn default() -> Self {
        Self {
            max_name_length: MAX_NAME_LENGTH,
            max_folder_depth: MAX_FOLDER_DEPTH,
        }
    }
}

#[derive(Debug, Default, Clone)]
struct ChildIndex {
    folders: Vec<FolderId>,
    files: Vec<FileId>,
}

/// Single source of truth for every folder and file.
#[derive(Debug, Default)]
pub struct EntityStore {
    folders: HashMap<FolderId, Folder>,
    files: HashMap<FileId, File>,
    children: HashMap<Location, ChildIndex>,
    limits: StoreLimits,
}

impl EntityStore {
    pub fn new(limits: StoreLimits) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    // --------------------
    // Lookups
    // --------------------

    pub fn folder(&self, id: FolderId) -> Option<&Folder> {
        self.folders.get(&id)
    }

    pub fn file(&self, id: FileId) -> Option<&File> {
        self.files.get(&id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        match id {
            EntityId::Folder(id) => self.folders.contains_key(&id),
            EntityId::File(id) => self.files.contains_key(&id),
        }
    }

    /// ROOT always exists; a folder location exists while the folder does.
    pub fn contains_location(&self, location: Location) -> bool {
        match location {
            Location::Root => true,
            Location::Folder(id) => self.folders.contains_key(&id),
        }
    }

    pub fn folder_count(&self) -> usize {
        self.folders.len()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn folders(&self) -> impl Iterator<Item = &Folder> {
        self.folders.values()
    }

    pub fn files(&self) -> impl Iterator<Item = &File> {
        self.files.values()
    }

    /// Direct children of `location`, in insertion order.
    pub fn children(&self, location: Location) -> (Vec<&Folder>, Vec<&File>) {
        match self.children.get(&location) {
            Some(index) => (
                index
                    .folders
                    .iter()
                    .filter_map(|id| self.folders.get(id))
                    .collect(),
                index
                    .files
                    .iter()
                    .filter_map(|id| self.files.get(id))
                    .collect(),
            ),
            None => (Vec::new(), Vec::new()),
        }
    }

    /// Whether `id` is a direct child of `location`.
    pub fn is_child_of(&self, id: EntityId, location: Location) -> bool {
        match id {
            EntityId::Folder(id) => self.folders.get(&id).is_some_and(|f| f.parent == location),
            EntityId::File(id) => self.files.get(&id).is_some_and(|f| f.parent == location),
        }
    }

    /// Folders from just below ROOT down to `location` inclusive.
    ///
    /// Returns `None` if the chain is broken or loops.
    pub fn path_to(&self, location: Location) -> Option<Vec<&Folder>> {
        let mut chain = Vec::new();
        let mut cursor = location;

        while let Location::Folder(id) = cursor {
            if chain.len() > self.folders.len() {
                return None;
            }
            let folder = self.folders.get(&id)?;
            chain.push(folder);
            cursor = folder.parent;
        }

        chain.reverse();
        Some(chain)
    }

    /// Number of folders between ROOT and `location` (ROOT itself is depth 0).
    pub fn depth_of(&self, location: Location) -> Option<usize> {
        self.path_to(location).map(|chain| chain.len())
    }

    // --------------------
    // Mutations
    // --------------------

    /// Create a folder under `parent`, timestamped now.
    pub fn create_folder(&mut self, parent: Location, name: &str) -> Result<Folder, StoreError> {
        self.create_folder_at(parent, name, Utc::now())
    }

    /// Create a folder under `parent` with an explicit creation time.
    pub fn create_folder_at(
        &mut self,
        parent: Location,
        name: &str,
        created_at: DateTime<Utc>,
    ) -> Result<Folder, StoreError> {
        let name = validate_folder_name(name, self.limits.max_name_length)?;

        let parent_depth = self
            .depth_of(parent)
            .ok_or(StoreError::ParentNotFound(parent))?;
        let depth = parent_depth + 1;
        if depth > self.limits.max_folder_depth {
            return Err(StoreError::DepthExceeded {
                depth,
                max: self.limits.max_folder_depth,
            });
        }

        let folder = Folder {
            id: FolderId::new(),
            name,
            parent,
            created_at,
        };

        self.children
            .entry(parent)
            .or_default()
            .folders
            .push(folder.id);
        self.folders.insert(folder.id, folder.clone());

        info!("Created folder {:?} ({}) under {}", folder.name, folder.id, parent);
        Ok(folder)
    }

    /// Create one file per entry under `parent`, in input order.
    ///
    /// Size and mime type are taken as given.
    pub fn ingest_files(
        &mut self,
        parent: Location,
        entries: Vec<IngestEntry>,
    ) -> Result<Vec<File>, StoreError> {
        if !self.contains_location(parent) {
            return Err(StoreError::ParentNotFound(parent));
        }

        let created_at = Utc::now();
        let mut created = Vec::with_capacity(entries.len());

        for entry in entries {
            let file = File {
                id: FileId::new(),
                kind: FileKind::from_mime(&entry.mime_type),
                name: entry.name,
                size: entry.size,
                mime_type: entry.mime_type,
                parent,
                created_at,
                handle: entry.handle,
            };

            self.children.entry(parent).or_default().files.push(file.id);
            self.files.insert(file.id, file.clone());
            created.push(file);
        }

        info!("Ingested {} file(s) under {}", created.len(), parent);
        Ok(created)
    }

    /// Remove the given entities and everything beneath the folders among them.
    ///
    /// The full set is computed before anything is removed. Each removed file's
    /// payload handle is released through `blobs` exactly once. Unknown
    /// identifiers are ignored, so repeating a delete changes nothing.
    pub fn delete_entities<I>(&mut self, ids: I, blobs: &mut dyn BlobStore) -> DeleteResult
    where
        I: IntoIterator<Item = EntityId>,
    {
        let mut result = DeleteResult::default();
        let (folder_ids, file_ids) = self.collect_cascade(ids, &mut result.ignored);

        for id in &folder_ids {
            if let Some(folder) = self.folders.remove(id) {
                if let Some(index) = self.children.get_mut(&folder.parent) {
                    index.folders.retain(|child| child != id);
                }
                result.folders.push(folder);
            }
            self.children.remove(&Location::Folder(*id));
        }

        for id in &file_ids {
            if let Some(file) = self.files.remove(id) {
                if let Some(index) = self.children.get_mut(&file.parent) {
                    index.files.retain(|child| child != id);
                }
                blobs.release_handle(&file.handle);
                result.files.push(file);
            }
        }

        if !result.ignored.is_empty() {
            warn!(
                "Delete ignored {} identifier(s) not in the store",
                result.ignored.len()
            );
        }
        info!(
            "Deleted {} folder(s) and {} file(s)",
            result.folders.len(),
            result.files.len()
        );

        let mut touched: Vec<Location> = Vec::new();
        let parents = result.folders.iter().map(|f| f.parent);
        for parent in parents.chain(result.files.iter().map(|f| f.parent)) {
            if !touched.contains(&parent) {
                touched.push(parent);
            }
        }

        result.violations = self.verify_children_of(&touched);
        for violation in &result.violations {
            error!("Integrity violation after delete: {}", violation);
        }

        result
    }

    /// Check the child index of each surviving location in `locations`.
    ///
    /// Every listed child must exist, point back at that location, and have a
    /// parent that still exists.
    fn verify_children_of(&self, locations: &[Location]) -> Vec<IntegrityViolation> {
        let mut violations = Vec::new();

        for &location in locations {
            if !self.contains_location(location) {
                continue;
            }
            let Some(index) = self.children.get(&location) else {
                continue;
            };

            for id in &index.folders {
                match self.folders.get(id) {
                    Some(folder) if !self.contains_location(folder.parent) => {
                        violations.push(IntegrityViolation::DanglingFolderParent {
                            folder: folder.id,
                            parent: folder.parent,
                        });
                    }
                    Some(folder) if folder.parent == location => {}
                    _ => violations.push(IntegrityViolation::StaleChildIndex {
                        parent: location,
                        child: EntityId::Folder(*id),
                    }),
                }
            }

            for id in &index.files {
                match self.files.get(id) {
                    Some(file) if !self.contains_location(file.parent) => {
                        violations.push(IntegrityViolation::DanglingFileParent {
                            file: file.id,
                            parent: file.parent,
                        });
                    }
                    Some(file) if file.parent == location => {}
                    _ => violations.push(IntegrityViolation::StaleChildIndex {
                        parent: location,
                        child: EntityId::File(*id),
                    }),
                }
            }
        }

        violations
    }

    /// Expand requested identifiers into every folder and file to remove,
    /// breadth first from each requested folder.
    fn collect_cascade<I>(&self, ids: I, ignored: &mut Vec<EntityId>) -> (Vec<FolderId>, Vec<FileId>)
    where
        I: IntoIterator<Item = EntityId>,
    {
        let mut folder_ids = Vec::new();
        let mut file_ids = Vec::new();
        let mut seen_folders = HashSet::new();
        let mut seen_files = HashSet::new();
        let mut queue = VecDeque::new();

        for id in ids {
            match id {
                EntityId::Folder(folder) if self.folders.contains_key(&folder) => {
                    queue.push_back(folder);
                }
                EntityId::File(file) if self.files.contains_key(&file) => {
                    if seen_files.insert(file) {
                        file_ids.push(file);
                    }
                }
                other => {
                    if !ignored.contains(&other) {
                        ignored.push(other);
                    }
                }
            }
        }

        while let Some(folder) = queue.pop_front() {
            if !seen_folders.insert(folder) {
                continue;
            }
            folder_ids.push(folder);

            if let Some(index) = self.children.get(&Location::Folder(folder)) {
                queue.extend(index.folders.iter().copied());
                for file in &index.files {
                    if seen_files.insert(*file) {
                        file_ids.push(*file);
                    }
                }
            }
        }

        (folder_ids, file_ids)
    }

    /// Check parent links, the adjacency index and acyclicity across the
    /// whole store.
    pub fn verify_integrity(&self) -> Vec<IntegrityViolation> {
        let mut violations = Vec::new();

        for folder in self.folders.values() {
            if !self.contains_location(folder.parent) {
                violations.push(IntegrityViolation::DanglingFolderParent {
                    folder: folder.id,
                    parent: folder.parent,
                });
            } else if self.path_to(Location::Folder(folder.id)).is_none() {
                violations.push(IntegrityViolation::Cycle(folder.id));
            }
        }

        for file in self.files.values() {
            if !self.contains_location(file.parent) {
                violations.push(IntegrityViolation::DanglingFileParent {
                    file: file.id,
                    parent: file.parent,
                });
            }
        }

        for (parent, index) in &self.children {
            let stale_folders = index
                .folders
                .iter()
                .filter(|id| self.folders.get(id).is_none_or(|f| f.parent != *parent))
                .map(|id| EntityId::Folder(*id));
            let stale_files = index
                .files
                .iter()
                .filter(|id| self.files.get(id).is_none_or(|f| f.parent != *parent))
                .map(|id| EntityId::File(*id));

            for child in stale_folders.chain(stale_files) {
                violations.push(IntegrityViolation::StaleChildIndex {
                    parent: *parent,
                    child,
                });
            }
        }

        violations
    }
}
