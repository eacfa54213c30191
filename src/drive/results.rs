//! Drive result types
//!
//! Defines result structures returned by drive operations.

use crate::entity::{File, FileId, PayloadHandle, PreviewKind};
use crate::error::BlobError;

/// A payload the blob subsystem refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFailure {
    pub name: String,
    pub error: BlobError,
}

/// Result of an upload: the files created, in input order, and the payloads skipped.
#[derive(Debug, Clone, Default)]
pub struct UploadResult {
    pub files: Vec<File>,
    pub failures: Vec<UploadFailure>,
}

impl UploadResult {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// What a renderer needs to show a file preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub file: FileId,
    pub name: String,
    pub kind: PreviewKind,
    pub handle: PayloadHandle,
}

impl Preview {
    /// Generic files have no inline preview; offer a download instead.
    pub fn offers_download(&self) -> bool {
        self.kind == PreviewKind::Generic
    }
}
