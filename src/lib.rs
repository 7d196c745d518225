pub mod auth;
pub mod config;
pub mod error;
pub mod screen;
pub mod terminal;

pub use screen::{LoginController, decide};
