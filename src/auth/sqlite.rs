//! SQLite-backed credential store
//!
//! Persists credentials in a single `users` table on the local device.
//! Lookups are plain `=` comparisons, which SQLite performs with the
//! case-sensitive BINARY collation.

use super::credentials::{Credential, CredentialStore};
use crate::error::StoreError;
use log::warn;
use rusqlite::{Connection, params};
use std::path::Path;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS users (
    username TEXT PRIMARY KEY,
    password TEXT NOT NULL
)";

pub struct SqliteCredentialStore {
    conn: Connection,
}

impl SqliteCredentialStore {
    /// Opens (or creates) the database file and ensures the schema exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        Self::with_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    /// Adds a credential. Returns `false` if the username was already taken,
    /// in which case the stored password is left unchanged.
    pub fn insert(&self, credential: &Credential) -> Result<bool, StoreError> {
        if credential.username.is_empty() {
            return Err(StoreError::EmptyField("username"));
        }
        if credential.password.is_empty() {
            return Err(StoreError::EmptyField("password"));
        }

        let rows = self.conn.execute(
            "INSERT OR IGNORE INTO users (username, password) VALUES (?1, ?2)",
            params![credential.username, credential.password],
        )?;
        Ok(rows > 0)
    }

    pub fn contains_username(&self, username: &str) -> Result<bool, StoreError> {
        let exists = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM users WHERE username = ?1)",
            params![username],
            |row| row.get(0),
        )?;
        Ok(exists)
    }

    /// Fallible form of [`CredentialStore::verify`].
    pub fn lookup(&self, username: &str, password: &str) -> Result<bool, StoreError> {
        let exists = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM users WHERE username = ?1 AND password = ?2)",
            params![username, password],
            |row| row.get(0),
        )?;
        Ok(exists)
    }

    pub fn count(&self) -> Result<usize, StoreError> {
        let n: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
        Ok(n as usize)
    }
}

impl CredentialStore for SqliteCredentialStore {
    fn verify(&self, username: &str, password: &str) -> bool {
        match self.lookup(username, password) {
            Ok(matched) => matched,
            Err(e) => {
                warn!("Credential lookup failed, rejecting login: {}", e);
                false
            }
        }
    }
}
