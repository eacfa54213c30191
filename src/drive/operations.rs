//! Drive operations
//!
//! Navigation, selection, search and mutation entry points. Each runs to
//! completion and leaves the store, trail and selection consistent.

use chrono::{TimeZone, Utc};
use log::{info, warn};

use super::Drive;
use super::results::{Preview, UploadFailure, UploadResult};
use super::snapshot::VisibleItems;
use crate::blob::{BlobStore, DownloadTrigger};
use crate::entity::{EntityId, FileId, Folder, FolderId, IngestEntry, Location, RawPayload};
use crate::error::{DriveError, NavigateError, SelectionError, StoreError};
use crate::search::filter_children;
use crate::selection::ToggleOutcome;
use crate::store::DeleteResult;

/// Folders the console starts with, and their creation dates.
const SAMPLE_FOLDERS: [(&str, i32, u32, u32); 3] = [
    ("Documents", 2025, 1, 15),
    ("Images", 2025, 2, 10),
    ("Work Projects", 2025, 3, 5),
];

impl<B: BlobStore> Drive<B> {
    // --------------------
    // Navigation
    // --------------------

    /// Enter a direct child folder of the current location. Clears the selection.
    pub fn enter(&mut self, folder: FolderId) -> Result<(), DriveError> {
        let target = self
            .store
            .folder(folder)
            .ok_or(NavigateError::FolderNotFound(folder))?;
        self.navigator.enter(target)?;
        self.selection.clear();
        Ok(())
    }

    /// Jump back to breadcrumb `index`. Clears the selection.
    pub fn jump_to(&mut self, index: usize) -> Result<Location, DriveError> {
        let location = self.navigator.jump_to(index)?;
        self.selection.clear();
        Ok(location)
    }

    /// Back to ROOT.
    pub fn home(&mut self) -> Location {
        self.selection.clear();
        self.navigator.jump_to(0).unwrap_or(Location::Root)
    }

    /// One level up; stays at ROOT when already there.
    pub fn up(&mut self) -> Location {
        self.selection.clear();
        self.navigator.up()
    }

    // --------------------
    // Search
    // --------------------

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    /// Snapshot of the current location's children after the search filter,
    /// with trail and selection.
    pub fn visible_items(&self) -> VisibleItems {
        let location = self.location();
        let (folders, files) = self.store.children(location);
        let (folders, files) = filter_children(&folders, &files, &self.query);

        VisibleItems {
            location,
            trail: self.navigator.trail().to_vec(),
            query: self.query.clone(),
            folders: folders.into_iter().cloned().collect(),
            files: files.into_iter().cloned().collect(),
            selection: self.selection.to_vec(),
        }
    }

    // --------------------
    // Selection
    // --------------------

    /// Toggle `id` in the selection. Ignored unless `id` is a direct child of
    /// the current location.
    pub fn toggle(&mut self, id: EntityId) -> ToggleOutcome {
        let location = self.navigator.location();
        let store = &self.store;
        self.selection
            .toggle(id, |id| store.is_child_of(id, location))
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Delete everything selected (cascading into folders), then clear the selection.
    pub fn delete_selected(&mut self) -> Result<DeleteResult, DriveError> {
        if self.selection.is_empty() {
            return Err(SelectionError::NothingSelected.into());
        }

        let ids = self.selection.to_vec();
        let result = self.delete(ids);
        self.selection.clear();
        Ok(result)
    }

    // --------------------
    // Mutations
    // --------------------

    /// Create a folder in the current location.
    pub fn create_folder(&mut self, name: &str) -> Result<Folder, DriveError> {
        self.store
            .create_folder(self.navigator.location(), name)
            .map_err(|e| {
                warn!("Rejected folder name {:?}: {}", name, e);
                DriveError::from(e)
            })
    }

    /// Create the sample folders under ROOT.
    pub fn seed_sample_folders(&mut self) -> Result<Vec<Folder>, DriveError> {
        SAMPLE_FOLDERS
            .iter()
            .map(|&(name, year, month, day)| {
                let created_at = Utc
                    .with_ymd_and_hms(year, month, day, 0, 0, 0)
                    .single()
                    .unwrap_or_else(Utc::now);
                self.store
                    .create_folder_at(Location::Root, name, created_at)
                    .map_err(DriveError::from)
            })
            .collect()
    }

    /// Turn payloads into files in the current location.
    ///
    /// Each payload gets its own handle from the blob store. Payloads the
    /// blob store refuses are skipped and reported; the rest become files in
    /// input order.
    pub fn upload(&mut self, payloads: Vec<RawPayload>) -> Result<UploadResult, DriveError> {
        let parent = self.navigator.location();
        if !self.store.contains_location(parent) {
            return Err(StoreError::ParentNotFound(parent).into());
        }

        let mut entries = Vec::with_capacity(payloads.len());
        let mut failures = Vec::new();

        for payload in payloads {
            let size = payload.size();
            match self.blobs.obtain_handle(&payload) {
                Ok(handle) => {
                    let RawPayload {
                        name, mime_type, ..
                    } = payload;
                    entries.push(IngestEntry {
                        name,
                        size,
                        mime_type,
                        handle,
                    });
                }
                Err(error) => {
                    warn!("Skipping upload of {}: {}", payload.name, error);
                    failures.push(UploadFailure {
                        name: payload.name,
                        error,
                    });
                }
            }
        }

        let handles: Vec<_> = entries.iter().map(|e| e.handle.clone()).collect();
        let files = match self.store.ingest_files(parent, entries) {
            Ok(files) => files,
            Err(e) => {
                for handle in &handles {
                    self.blobs.release_handle(handle);
                }
                return Err(e.into());
            }
        };

        info!(
            "Uploaded {} file(s) to {} ({} failed)",
            files.len(),
            parent,
            failures.len()
        );
        Ok(UploadResult { files, failures })
    }

    /// Delete entities by identifier, cascading into folders and releasing
    /// payload handles. If the current folder disappears the trail falls back
    /// to its deepest surviving ancestor.
    pub fn delete<I>(&mut self, ids: I) -> DeleteResult
    where
        I: IntoIterator<Item = EntityId>,
    {
        let result = self.store.delete_entities(ids, &mut self.blobs);

        let store = &self.store;
        if self
            .navigator
            .retain_existing(|location| store.contains_location(location))
        {
            self.selection.clear();
        } else {
            let location = self.navigator.location();
            let dropped = self
                .selection
                .retain(|id| store.is_child_of(*id, location));
            if dropped > 0 {
                info!("Dropped {} deleted item(s) from the selection", dropped);
            }
        }

        result
    }

    // --------------------
    // Materialisation
    // --------------------

    /// Hand a file's payload to the download trigger under the file's name.
    pub fn download(
        &self,
        file: FileId,
        trigger: &mut dyn DownloadTrigger,
    ) -> Result<(), DriveError> {
        let file = self
            .store
            .file(file)
            .ok_or(DriveError::FileNotFound(EntityId::File(file)))?;
        trigger.trigger(&file.handle, &file.name);
        Ok(())
    }

    /// How to preview a file, from its mime type.
    pub fn preview(&self, file: FileId) -> Result<Preview, DriveError> {
        let file = self
            .store
            .file(file)
            .ok_or(DriveError::FileNotFound(EntityId::File(file)))?;

        Ok(Preview {
            file: file.id,
            name: file.name.clone(),
            kind: file.preview_kind(),
            handle: file.handle.clone(),
        })
    }
}
