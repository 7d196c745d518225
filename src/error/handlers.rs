//! Error handlers
//!
//! Logs fatal errors and maps them to process exit codes.

use crate::error::types::AppError;
use log::error;

/// Handle an error that ended the application
pub fn handle_error(err: &AppError) {
    error!("Login screen error: {}", err);
}

/// Convert error to a sysexits-style exit code
pub fn error_to_exit_code(err: &AppError) -> u8 {
    match err {
        AppError::Config(_) => 78,
        AppError::Screen(_) => 74,
    }
}
