//! Error handlers
//!
//! Provides error reporting and reply-code mapping.

use crate::error::types::{DriveError, ErrorKind};
use crate::protocol::responses;
use log::{error, warn};

/// Report a drive error to the log at a level matching its category
pub fn handle_error(err: &DriveError) {
    match err.kind() {
        ErrorKind::Validation => warn!("Rejected: {}", err),
        ErrorKind::Resource => error!("Resource failure: {}", err),
    }
}

/// Convert error to console reply code
pub fn error_to_reply_code(err: &DriveError) -> u16 {
    match err {
        DriveError::Store(_) => responses::NAME_NOT_ALLOWED,
        DriveError::Navigate(_) => responses::NOT_FOUND,
        DriveError::Selection(_) => responses::BAD_SEQUENCE,
        DriveError::Blob(_) => responses::RESOURCE_UNAVAILABLE,
        DriveError::FileNotFound(_) => responses::NOT_FOUND,
    }
}
