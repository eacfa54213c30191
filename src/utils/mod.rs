//! Utility functions
//!
//! Provides display formatting helpers.

pub mod format;

pub use format::{format_date, format_file_size};
