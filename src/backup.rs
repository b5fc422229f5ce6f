//! Backup, restore, and export for the persisted collections
//!
//! Backups snapshot the raw stored strings for every collection key, so
//! a restore is byte-faithful and needs no knowledge of the record
//! schemas. Chat history can also be exported as CSV for use outside
//! the app.

use crate::db::keys;
use crate::db::types::{ChatMessage, ChatSession};
use crate::error::{Result, VaultError};
use crate::storage::KeyValueStore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// Backup format version; restores reject anything else
pub const BACKUP_VERSION: &str = "1.0.0";

/// A snapshot of the raw stored values for every collection key
///
/// Absent keys stay `None` and are skipped on restore, so restoring a
/// backup taken from a fresh store never clobbers existing data with
/// empty collections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupData {
    pub chat_sessions: Option<String>,
    pub chat_messages: Option<String>,
    pub user_settings: Option<String>,
    pub notifications: Option<String>,
    /// When the snapshot was taken (RFC-3339)
    #[serde(rename = "backupDate")]
    pub backup_date: String,
    pub version: String,
}

/// Totals across the persisted collections
#[derive(Debug, Clone, Serialize)]
pub struct DataStats {
    pub total_sessions: usize,
    pub total_messages: usize,
    pub total_notifications: usize,
}

/// Backup and export operations over an injected substrate
pub struct BackupService {
    store: Arc<dyn KeyValueStore>,
}

impl BackupService {
    /// Create a service over the given substrate
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Snapshot the raw stored values for every collection key
    pub async fn create_backup(&self) -> Result<BackupData> {
        Ok(BackupData {
            chat_sessions: self.store.get(keys::SESSIONS).await?,
            chat_messages: self.store.get(keys::MESSAGES).await?,
            user_settings: self.store.get(keys::SETTINGS).await?,
            notifications: self.store.get(keys::NOTIFICATIONS).await?,
            backup_date: Utc::now().to_rfc3339(),
            version: BACKUP_VERSION.to_string(),
        })
    }

    /// Write a pretty-printed backup file
    pub async fn write_backup(&self, path: impl AsRef<Path>) -> Result<()> {
        let backup = self.create_backup().await?;
        let json = serde_json::to_string_pretty(&backup)?;
        std::fs::write(path.as_ref(), json)?;
        tracing::info!(path = %path.as_ref().display(), "Backup written");
        Ok(())
    }

    /// Restore a snapshot into the store
    ///
    /// Rejects a mismatched format version. Only keys present in the
    /// backup are written; everything else is left alone.
    pub async fn restore(&self, backup: &BackupData) -> Result<()> {
        if backup.version != BACKUP_VERSION {
            return Err(VaultError::Backup(format!(
                "Unsupported backup version: {}",
                backup.version
            ))
            .into());
        }

        if let Some(raw) = &backup.chat_sessions {
            self.store.set(keys::SESSIONS, raw).await?;
        }
        if let Some(raw) = &backup.chat_messages {
            self.store.set(keys::MESSAGES, raw).await?;
        }
        if let Some(raw) = &backup.user_settings {
            self.store.set(keys::SETTINGS, raw).await?;
        }
        if let Some(raw) = &backup.notifications {
            self.store.set(keys::NOTIFICATIONS, raw).await?;
        }

        Ok(())
    }

    /// Read a backup file and restore it
    pub async fn restore_from_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let backup: BackupData = serde_json::from_str(&json)?;
        self.restore(&backup).await?;
        tracing::info!(path = %path.as_ref().display(), "Backup restored");
        Ok(())
    }

    /// Export the full chat history as CSV
    ///
    /// One row per message with the owning session's title (or
    /// `Unknown` for orphans), timestamps rendered human-readable, and
    /// quotes doubled for CSV escaping.
    ///
    /// # Errors
    ///
    /// Returns `VaultError::Backup` when there are no messages to export.
    pub async fn export_chat_csv(&self) -> Result<String> {
        let messages: Vec<ChatMessage> = self.read_collection(keys::MESSAGES).await?;
        if messages.is_empty() {
            return Err(VaultError::Backup("No chat history to export".into()).into());
        }
        let sessions: Vec<ChatSession> = self.read_collection(keys::SESSIONS).await?;

        let mut csv = String::from("Session,Timestamp,Role,Content\n");
        for message in &messages {
            let title = sessions
                .iter()
                .find(|s| s.session_id == message.session_id)
                .map(|s| s.title.as_str())
                .unwrap_or("Unknown");

            csv.push_str(&format!(
                "\"{}\",\"{}\",\"{}\",\"{}\"\n",
                escape_csv(title),
                format_millis(message.timestamp),
                message.role.as_str(),
                escape_csv(&message.content),
            ));
        }

        Ok(csv)
    }

    /// Totals for sessions, messages, and notifications
    pub async fn stats(&self) -> Result<DataStats> {
        let sessions: Vec<ChatSession> = self.read_collection(keys::SESSIONS).await?;
        let messages: Vec<ChatMessage> = self.read_collection(keys::MESSAGES).await?;
        let notifications: Vec<serde_json::Value> =
            self.read_collection(keys::NOTIFICATIONS).await?;

        Ok(DataStats {
            total_sessions: sessions.len(),
            total_messages: messages.len(),
            total_notifications: notifications.len(),
        })
    }

    async fn read_collection<T: serde::de::DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
        match self.store.get(key).await? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(items) => Ok(items),
                Err(e) => {
                    tracing::warn!(key, error = %e, "Malformed stored JSON, treating collection as empty");
                    Ok(Vec::new())
                }
            },
            None => Ok(Vec::new()),
        }
    }
}

fn escape_csv(field: &str) -> String {
    field.replace('"', "\"\"")
}

fn format_millis(millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| millis.to_string())
}
