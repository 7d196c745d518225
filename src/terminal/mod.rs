//! Terminal front end
//!
//! Drives the login screen from a line-oriented text stream. Typing into
//! the fields and pressing controls are both plain commands.

pub mod commands;
pub mod session;
pub mod view;

pub use commands::{TerminalCommand, parse_command};
pub use session::{SessionSummary, run_session};
pub use view::TerminalView;
