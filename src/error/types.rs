//! Error types
//!
//! Defines domain-specific error types for each module of the drive.

use std::fmt;

use crate::entity::{EntityId, FolderId, Location};

/// Coarse error category surfaced to callers.
///
/// Validation errors leave the state untouched. Resource errors come from the
/// blob subsystem and are reported per payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Resource,
}

/// Entity store errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    EmptyName,
    NameTooLong { length: usize, max: usize },
    InvalidName(String),
    ParentNotFound(Location),
    DepthExceeded { depth: usize, max: usize },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::EmptyName => write!(f, "Name cannot be empty"),
            StoreError::NameTooLong { length, max } => {
                write!(f, "Name is {} characters long (max {})", length, max)
            }
            StoreError::InvalidName(n) => write!(f, "Invalid name: {:?}", n),
            StoreError::ParentNotFound(p) => write!(f, "Parent folder not found: {}", p),
            StoreError::DepthExceeded { depth, max } => {
                write!(f, "Folder depth {} exceeds limit of {}", depth, max)
            }
        }
    }
}

impl std::error::Error for StoreError {}

/// Navigate module errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigateError {
    FolderNotFound(FolderId),
    NotAChild { folder: FolderId, location: Location },
    TrailIndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for NavigateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigateError::FolderNotFound(id) => write!(f, "Folder not found: {}", id),
            NavigateError::NotAChild { folder, location } => {
                write!(f, "Folder {} is not a child of {}", folder, location)
            }
            NavigateError::TrailIndexOutOfRange { index, len } => {
                write!(f, "Breadcrumb index {} out of range (trail has {})", index, len)
            }
        }
    }
}

impl std::error::Error for NavigateError {}

/// Selection module errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    NothingSelected,
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::NothingSelected => write!(f, "Nothing selected"),
        }
    }
}

impl std::error::Error for SelectionError {}

/// Blob subsystem errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlobError {
    Unreadable(String),
    CapacityExceeded { requested: u64, available: u64 },
}

impl fmt::Display for BlobError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlobError::Unreadable(name) => write!(f, "Payload unreadable: {}", name),
            BlobError::CapacityExceeded {
                requested,
                available,
            } => write!(
                f,
                "Blob capacity exceeded: requested {} bytes, {} available",
                requested, available
            ),
        }
    }
}

impl std::error::Error for BlobError {}

/// General drive error that encompasses all error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriveError {
    Store(StoreError),
    Navigate(NavigateError),
    Selection(SelectionError),
    Blob(BlobError),
    FileNotFound(EntityId),
}

impl DriveError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DriveError::Blob(_) => ErrorKind::Resource,
            _ => ErrorKind::Validation,
        }
    }
}

impl fmt::Display for DriveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriveError::Store(e) => write!(f, "Store error: {}", e),
            DriveError::Navigate(e) => write!(f, "Navigate error: {}", e),
            DriveError::Selection(e) => write!(f, "Selection error: {}", e),
            DriveError::Blob(e) => write!(f, "Blob error: {}", e),
            DriveError::FileNotFound(id) => write!(f, "File not found: {}", id),
        }
    }
}

impl std::error::Error for DriveError {}

impl From<StoreError> for DriveError {
    fn from(error: StoreError) -> Self {
        DriveError::Store(error)
    }
}

impl From<NavigateError> for DriveError {
    fn from(error: NavigateError) -> Self {
        DriveError::Navigate(error)
    }
}

impl From<SelectionError> for DriveError {
    fn from(error: SelectionError) -> Self {
        DriveError::Selection(error)
    }
}

impl From<BlobError> for DriveError {
    fn from(error: BlobError) -> Self {
        DriveError::Blob(error)
    }
}
