//! Credential storage
//!
//! Holds username/password pairs and answers exact-match lookups for the
//! login screen. Every store fails closed: a store that cannot be read
//! reports a non-match instead of an error.

pub mod credentials;
pub mod sqlite;

pub use credentials::{Credential, CredentialStore, InMemoryCredentialStore, UnavailableStore};
pub use sqlite::SqliteCredentialStore;

use crate::config::StoreConfig;
use log::{debug, error, info, warn};

/// Opens the configured SQLite store and applies the seed credentials.
///
/// If the database cannot be opened the screen still runs against an
/// [`UnavailableStore`], so every login attempt is rejected.
pub fn open_store(config: &StoreConfig) -> Box<dyn CredentialStore> {
    let store = match SqliteCredentialStore::open(&config.database_path) {
        Ok(store) => store,
        Err(e) => {
            error!(
                "Failed to open credential store at {}: {}",
                config.database_path, e
            );
            return Box::new(UnavailableStore);
        }
    };

    for credential in &config.seed {
        match store.contains_username(&credential.username) {
            Ok(true) => {
                debug!(
                    "User {} already registered, keeping stored password",
                    credential.username
                );
                continue;
            }
            Ok(false) => {}
            Err(e) => {
                warn!(
                    "Failed to check seed user {}: {}",
                    credential.username, e
                );
                continue;
            }
        }

        match store.insert(credential) {
            Ok(true) => info!("Seeded credential for user {}", credential.username),
            Ok(false) => {}
            Err(e) => warn!(
                "Failed to seed credential for user {}: {}",
                credential.username, e
            ),
        }
    }

    match store.count() {
        Ok(n) => info!(
            "Credential store ready at {} ({} users)",
            config.database_path, n
        ),
        Err(e) => warn!("Credential store opened but could not be counted: {}", e),
    }

    Box::new(store)
}
