//! Selection module
//!
//! Multi-selection scoped to the current location.

mod tracker;

pub use tracker::{SelectionSet, ToggleOutcome};
