//! Configuration management for the login screen
//!
//! Values come from an optional `config.toml` layered under environment
//! overrides (prefix `LOCAL_LOGIN`, nested keys separated by `__`).
//! Every field has a default, so the screen starts without any file.

use crate::auth::Credential;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

/// Complete application configuration
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub store: StoreConfig,
    pub screen: ScreenConfig,
}

/// Where credentials live and what to put there before the screen opens
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StoreConfig {
    /// SQLite database file. `:memory:` gives a throwaway store.
    /// Environment: LOCAL_LOGIN_STORE__DATABASE_PATH
    pub database_path: String,

    /// Credentials inserted at startup if their username is not taken yet
    pub seed: Vec<Credential>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_path: "local-login.db".to_string(),
            seed: Vec::new(),
        }
    }
}

/// Terminal screen behaviour
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ScreenConfig {
    /// Title printed when the session starts
    pub greeting: String,

    /// Longest accepted input line in bytes
    /// Environment: LOCAL_LOGIN_SCREEN__MAX_INPUT_LENGTH
    pub max_input_length: usize,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            greeting: "Login".to_string(),
            max_input_length: 256,
        }
    }
}

/// Environment overrides, e.g. `LOCAL_LOGIN_STORE__DATABASE_PATH`
fn environment() -> Environment {
    Environment::with_prefix("LOCAL_LOGIN")
        .prefix_separator("_")
        .separator("__")
}

impl AppConfig {
    /// Load configuration from config.toml with environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name("local-login/config").required(false))
            .add_source(File::with_name("config").required(false))
            .add_source(environment());
        Self::build(builder)
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let config: AppConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        if self.store.database_path.is_empty() {
            return Err(ConfigError::Message(
                "store.database_path cannot be empty".into(),
            ));
        }

        if let Some(bad) = self
            .store
            .seed
            .iter()
            .find(|c| c.username.is_empty() || c.password.is_empty())
        {
            return Err(ConfigError::Message(format!(
                "seed credential for user '{}' has an empty field",
                bad.username
            )));
        }

        if self.screen.max_input_length == 0 {
            return Err(ConfigError::Message(
                "screen.max_input_length must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}
