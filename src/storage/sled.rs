//! Durable key-value substrate backed by an embedded `sled` database
//!
//! Values are stored as UTF-8 bytes and flushed after every write so
//! data survives process restart.

use crate::error::{Result, VaultError};
use crate::storage::KeyValueStore;
use async_trait::async_trait;
use directories::ProjectDirs;
use sled::Db;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the database location
///
/// Set by the CLI's `--data-dir` flag so every store constructed in the
/// process points at the same place.
pub const DB_PATH_ENV: &str = "CHATVAULT_DB";

/// Sled-backed implementation of [`KeyValueStore`]
pub struct SledStore {
    db: Db,
}

impl SledStore {
    /// Open or create the store at the default location
    ///
    /// The default is the platform data directory (via `directories`),
    /// unless `CHATVAULT_DB` points somewhere else.
    ///
    /// # Errors
    ///
    /// Returns `VaultError::Storage` if the data directory cannot be
    /// determined or the database cannot be opened.
    pub fn open_default() -> Result<Self> {
        if let Ok(override_path) = std::env::var(DB_PATH_ENV) {
            return Self::open(override_path);
        }

        let proj_dirs = ProjectDirs::from("com", "chatvault", "chatvault")
            .ok_or_else(|| VaultError::Storage("Could not determine data directory".into()))?;

        let db_path = proj_dirs.data_dir().join("vault.db");
        Self::open(db_path)
    }

    /// Open or create the store at the given path
    ///
    /// This is the constructor used by tests, which point it at a
    /// temporary directory.
    ///
    /// # Errors
    ///
    /// Returns `VaultError::Storage` if the database cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path: PathBuf = path.as_ref().into();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                VaultError::Storage(format!("Failed to create data directory: {}", e))
            })?;
        }

        let db = sled::open(&path)
            .map_err(|e| VaultError::Storage(format!("Failed to open database: {}", e)))?;
        Ok(Self { db })
    }
}

#[async_trait]
impl KeyValueStore for SledStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        match self
            .db
            .get(key.as_bytes())
            .map_err(|e| VaultError::Storage(format!("Get failed: {}", e)))?
        {
            Some(bytes) => {
                let value = String::from_utf8(bytes.to_vec())
                    .map_err(|e| VaultError::Storage(format!("Invalid UTF-8 value: {}", e)))?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.db
            .insert(key.as_bytes(), value.as_bytes())
            .map_err(|e| VaultError::Storage(format!("Insert failed: {}", e)))?;

        self.db
            .flush()
            .map_err(|e| VaultError::Storage(format!("Flush failed: {}", e)))?;

        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.db
            .remove(key.as_bytes())
            .map_err(|e| VaultError::Storage(format!("Remove failed: {}", e)))?;

        self.db
            .flush()
            .map_err(|e| VaultError::Storage(format!("Flush failed: {}", e)))?;

        Ok(())
    }

    async fn multi_remove(&self, keys: &[&str]) -> Result<()> {
        for key in keys {
            self.db
                .remove(key.as_bytes())
                .map_err(|e| VaultError::Storage(format!("Remove failed: {}", e)))?;
        }

        // One flush for the whole batch
        self.db
            .flush()
            .map_err(|e| VaultError::Storage(format!("Flush failed: {}", e)))?;

        Ok(())
    }
}
