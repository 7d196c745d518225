//! Error types
//!
//! Defines domain-specific error types for each module of the login screen.
//! None of these are shown to the user; the screen only ever reports one of
//! its three outcomes.

use std::fmt;
use std::io;

/// Credential store errors
#[derive(Debug)]
pub enum StoreError {
    Sqlite(rusqlite::Error),
    EmptyField(&'static str),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Sqlite(e) => write!(f, "SQLite error: {}", e),
            StoreError::EmptyField(field) => write!(f, "Credential {} cannot be empty", field),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<rusqlite::Error> for StoreError {
    fn from(error: rusqlite::Error) -> Self {
        StoreError::Sqlite(error)
    }
}

/// Terminal session errors
#[derive(Debug)]
pub enum ScreenError {
    Io(io::Error),
}

impl fmt::Display for ScreenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScreenError::Io(e) => write!(f, "Terminal I/O error: {}", e),
        }
    }
}

impl std::error::Error for ScreenError {}

impl From<io::Error> for ScreenError {
    fn from(error: io::Error) -> Self {
        ScreenError::Io(error)
    }
}

/// Top-level application error
#[derive(Debug)]
pub enum AppError {
    Config(config::ConfigError),
    Screen(ScreenError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(e) => write!(f, "Configuration error: {}", e),
            AppError::Screen(e) => write!(f, "Screen error: {}", e),
        }
    }
}

impl std::error::Error for AppError {}

impl From<config::ConfigError> for AppError {
    fn from(error: config::ConfigError) -> Self {
        AppError::Config(error)
    }
}

impl From<ScreenError> for AppError {
    fn from(error: ScreenError) -> Self {
        AppError::Screen(error)
    }
}
