//! Error types for ChatVault
//!
//! This module defines all error types used throughout the persistence
//! layer, using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for ChatVault operations
///
/// This enum encompasses all possible errors that can occur while
/// loading configuration, talking to the key-value substrate, or
/// serializing records.
#[derive(Error, Debug)]
pub enum VaultError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Key-value substrate errors (open, read, write, remove)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Backup file errors (unreadable file, version mismatch)
    #[error("Backup error: {0}")]
    Backup(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias for ChatVault operations
///
/// This is a convenience alias that uses `anyhow::Error` as the error type,
/// allowing for rich error context and easy error propagation.
pub type Result<T> = anyhow::Result<T>;
