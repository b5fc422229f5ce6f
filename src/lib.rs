//! ChatVault - local assistant data store
//!
//! This library provides the persistence layer of an AI personal
//! assistant: chat sessions, ordered messages, a user-settings
//! singleton, and notifications, stored as JSON collections in an
//! embedded key-value database.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `storage`: the key-value substrate trait and its sled/in-memory backends
//! - `db`: record types and the CRUD service with its consistency rules
//! - `backup`: backup/restore snapshots, CSV export, and data statistics
//! - `config`: configuration loading and validation
//! - `error`: error types and result aliases
//! - `cli` / `commands`: command-line interface and handlers
//!
//! # Example
//!
//! ```no_run
//! use chatvault::db::{DatabaseService, MessageDraft};
//! use chatvault::storage::SledStore;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let store = Arc::new(SledStore::open("/tmp/vault.db")?);
//!     let db = DatabaseService::new(store);
//!
//!     db.create_session("s1", "Demo").await?;
//!     db.save_message(MessageDraft::user("hi", 1, "s1")).await?;
//!
//!     let sessions = db.list_sessions().await?;
//!     assert_eq!(sessions[0].message_count, 1);
//!     Ok(())
//! }
//! ```

pub mod backup;
pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod error;
pub mod storage;

// Re-export commonly used types
pub use backup::{BackupData, BackupService, DataStats};
pub use config::Config;
pub use db::{
    ChatMessage, ChatSession, DatabaseService, MessageDraft, MessageRole, NotificationDraft,
    NotificationItem, NotificationKind, SettingsPatch, Theme, UserSettings,
};
pub use error::{Result, VaultError};
pub use storage::{KeyValueStore, MemoryStore, SledStore};
