//! Error handling
//!
//! Defines error types and handling for the login screen.

pub mod handlers;
pub mod types;

pub use types::*;
