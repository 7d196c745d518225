//! Local Login - Entry Point
//!
//! Runs the login screen on the terminal against the on-device credential store.

use log::info;
use std::process::ExitCode;
use tokio::io::BufReader;

use local_login::auth::open_store;
use local_login::config::AppConfig;
use local_login::error::AppError;
use local_login::error::handlers::{error_to_exit_code, handle_error};
use local_login::terminal::run_session;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            handle_error(&e);
            ExitCode::from(error_to_exit_code(&e))
        }
    }
}

async fn run() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    info!("Launching login screen...");

    let store = open_store(&config.store);
    let stdin = BufReader::new(tokio::io::stdin());
    let summary = run_session(stdin, tokio::io::stdout(), store, &config.screen).await?;

    info!(
        "Login screen closed after {} attempt(s), last destination: {}",
        summary.attempts,
        summary
            .last_destination
            .map(|d| d.to_string())
            .unwrap_or_else(|| "none".to_string())
    );
    Ok(())
}
