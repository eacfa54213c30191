//! In-memory blob store
//!
//! Keeps payload bytes keyed by handle, bounded by a byte capacity.

use std::collections::HashMap;

use log::{debug, warn};
use uuid::Uuid;

use super::BlobStore;
use crate::entity::{PayloadHandle, RawPayload};
use crate::error::BlobError;

const HANDLE_PREFIX: &str = "blob:vdrive/";

pub struct MemoryBlobStore {
    blobs: HashMap<PayloadHandle, Vec<u8>>,
    used_bytes: u64,
    capacity_bytes: u64,
}

impl MemoryBlobStore {
    pub fn new(capacity_bytes: u64) -> Self {
        Self {
            blobs: HashMap::new(),
            used_bytes: 0,
            capacity_bytes,
        }
    }

    pub fn unbounded() -> Self {
        Self::new(u64::MAX)
    }

    pub fn live_handles(&self) -> usize {
        self.blobs.len()
    }

    pub fn used_bytes(&self) -> u64 {
        self.used_bytes
    }

    pub fn is_live(&self, handle: &PayloadHandle) -> bool {
        self.blobs.contains_key(handle)
    }

    pub fn read(&self, handle: &PayloadHandle) -> Option<&[u8]> {
        self.blobs.get(handle).map(Vec::as_slice)
    }
}

impl Default for MemoryBlobStore {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl BlobStore for MemoryBlobStore {
    fn obtain_handle(&mut self, payload: &RawPayload) -> Result<PayloadHandle, BlobError> {
        let requested = payload.size();
        let available = self.capacity_bytes.saturating_sub(self.used_bytes);
        if requested > available {
            warn!(
                "Refusing payload {} ({} bytes, {} available)",
                payload.name, requested, available
            );
            return Err(BlobError::CapacityExceeded {
                requested,
                available,
            });
        }

        let handle = PayloadHandle::new(format!("{}{}", HANDLE_PREFIX, Uuid::new_v4()));
        self.used_bytes += requested;
        self.blobs.insert(handle.clone(), payload.bytes.clone());
        debug!("Obtained handle {} for {} ({} bytes)", handle, payload.name, requested);
        Ok(handle)
    }

    fn release_handle(&mut self, handle: &PayloadHandle) {
        if let Some(bytes) = self.blobs.remove(handle) {
            self.used_bytes -= bytes.len() as u64;
            debug!("Released handle {} ({} bytes)", handle, bytes.len());
        }
    }
}
