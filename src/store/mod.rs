//! Entity store
//!
//! Owns every folder and file plus the parent/child index between them.

pub mod operations;
pub mod results;
pub mod validation;

pub use operations::{EntityStore, StoreLimits};
pub use results::{DeleteResult, IntegrityViolation};
pub use validation::{MAX_FOLDER_DEPTH, MAX_NAME_LENGTH, validate_folder_name};
