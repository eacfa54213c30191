//! Entity models

use std::fmt;

use chrono::{DateTime, Utc};

use super::id::{EntityId, FileId, FolderId, Location};
use super::kind::{FileKind, PreviewKind};

/// A folder in the drive hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    pub id: FolderId,
    pub name: String,
    pub parent: Location,
    pub created_at: DateTime<Utc>,
}

impl Folder {
    pub fn entity_id(&self) -> EntityId {
        EntityId::Folder(self.id)
    }
}

/// Opaque token for a binary payload held by the blob subsystem.
///
/// Exactly one handle belongs to each file and it is released when the file
/// is destroyed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PayloadHandle(String);

impl PayloadHandle {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PayloadHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A file in the drive. Metadata is a snapshot taken at ingestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    pub id: FileId,
    pub name: String,
    pub size: u64,
    pub mime_type: String,
    pub kind: FileKind,
    pub parent: Location,
    pub created_at: DateTime<Utc>,
    pub handle: PayloadHandle,
}

impl File {
    pub fn entity_id(&self) -> EntityId {
        EntityId::File(self.id)
    }

    pub fn preview_kind(&self) -> PreviewKind {
        self.kind.preview_kind()
    }
}

/// Metadata plus handle for one payload about to become a `File`.
#[derive(Debug, Clone)]
pub struct IngestEntry {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
    pub handle: PayloadHandle,
}

/// A payload as handed over by the file picker, before a handle exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPayload {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl RawPayload {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}
