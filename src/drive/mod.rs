//! Drive state
//!
//! `Drive` is the one state object every operation goes through. It owns the
//! entity store, the navigator, the selection and the search query, and keeps
//! them coupled: moving clears the selection, deleting prunes the trail.

pub mod operations;
pub mod results;
pub mod snapshot;

pub use results::{Preview, UploadFailure, UploadResult};
pub use snapshot::VisibleItems;

use crate::blob::{BlobStore, MemoryBlobStore};
use crate::config::DriveConfig;
use crate::entity::Location;
use crate::navigate::{Breadcrumb, Navigator};
use crate::selection::SelectionSet;
use crate::store::EntityStore;

pub struct Drive<B: BlobStore = MemoryBlobStore> {
    store: EntityStore,
    navigator: Navigator,
    selection: SelectionSet,
    query: String,
    blobs: B,
}

impl Drive<MemoryBlobStore> {
    /// Empty drive at ROOT with default limits and an unbounded blob store.
    pub fn new() -> Self {
        Self::with_blob_store(&DriveConfig::default(), MemoryBlobStore::unbounded())
    }

    /// Empty drive configured from `config`, blob capacity included.
    pub fn from_config(config: &DriveConfig) -> Self {
        Self::with_blob_store(config, MemoryBlobStore::new(config.max_blob_bytes))
    }
}

impl Default for Drive<MemoryBlobStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: BlobStore> Drive<B> {
    pub fn with_blob_store(config: &DriveConfig, blobs: B) -> Self {
        Self {
            store: EntityStore::new(config.store_limits()),
            navigator: Navigator::new(config.root_label.clone()),
            selection: SelectionSet::new(),
            query: String::new(),
            blobs,
        }
    }

    // --------------------
    // Getter methods
    // --------------------

    pub fn location(&self) -> Location {
        self.navigator.location()
    }

    pub fn trail(&self) -> &[Breadcrumb] {
        self.navigator.trail()
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub fn blobs(&self) -> &B {
        &self.blobs
    }
}
