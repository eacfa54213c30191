//! vdrive - an in-memory drive of folders and files
//!
//! The [`Drive`] state object ties together the entity store, breadcrumb
//! navigation, multi-selection and search. Payload bytes live behind the
//! [`blob::BlobStore`] boundary.

pub mod blob;
pub mod config;
pub mod drive;
pub mod entity;
pub mod error;
pub mod navigate;
pub mod protocol;
pub mod search;
pub mod selection;
pub mod session;
pub mod store;
pub mod utils;

pub use drive::Drive;
