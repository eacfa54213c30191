//! Blob subsystem boundary
//!
//! The drive never holds payload bytes itself. It asks a [`BlobStore`] for a
//! handle per uploaded payload, releases that handle when the owning file is
//! destroyed, and asks a [`DownloadTrigger`] to materialise a handle.

pub mod download;
pub mod memory;

pub use download::DownloadLog;
pub use memory::MemoryBlobStore;

use crate::entity::{PayloadHandle, RawPayload};
use crate::error::BlobError;

/// Source of ephemeral payload handles.
pub trait BlobStore {
    /// Take ownership of a payload and return a fresh handle for it.
    fn obtain_handle(&mut self, payload: &RawPayload) -> Result<PayloadHandle, BlobError>;

    /// Release a handle. Releasing an unknown or already released handle is a no-op.
    fn release_handle(&mut self, handle: &PayloadHandle);
}

/// Fire-and-forget download of a payload under a suggested name.
pub trait DownloadTrigger {
    fn trigger(&mut self, handle: &PayloadHandle, suggested_name: &str);
}
