//! Navigate module
//!
//! Tracks the current location and the breadcrumb trail leading to it.

mod controller;

pub use controller::{Breadcrumb, DEFAULT_ROOT_LABEL, Navigator};
