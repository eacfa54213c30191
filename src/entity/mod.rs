//! Drive entities
//!
//! Folders, files, their identifiers and the mime-type classification.

pub mod id;
pub mod kind;
pub mod model;

pub use id::{EntityId, FileId, FolderId, Location};
pub use kind::{FileKind, PreviewKind};
pub use model::{File, Folder, IngestEntry, PayloadHandle, RawPayload};
