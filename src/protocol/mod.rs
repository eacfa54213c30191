//! Console protocol
//!
//! Command parsing, dispatch and reply formatting.

pub mod commands;
pub mod handlers;
pub mod responses;

pub use commands::{Command, CommandResult, CommandStatus, Target, parse_command};
pub use handlers::handle_command;
