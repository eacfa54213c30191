//! Console session
//!
//! Line-oriented command loop over any async reader/writer pair.

pub mod handler;

pub use handler::run_session;
