//! Command-line interface definition for ChatVault
//!
//! This module defines the CLI structure using clap's derive API,
//! providing commands for inspecting sessions and notifications and
//! for data maintenance (backup, restore, export, seed, clear).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// ChatVault - local assistant data store
///
/// Inspect and maintain the chat history, settings, and notifications
/// persisted by the assistant on this machine.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatvault")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/config.yaml")]
    pub config: Option<String>,

    /// Override the database directory
    #[arg(short, long, env = "CHATVAULT_DB")]
    pub data_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for ChatVault
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Inspect and manage chat sessions
    Sessions {
        #[command(subcommand)]
        command: SessionCommand,
    },

    /// Inspect and manage notifications
    Notifications {
        #[command(subcommand)]
        command: NotificationCommand,
    },

    /// Backup, restore, and maintenance operations
    Data {
        #[command(subcommand)]
        command: DataCommand,
    },
}

/// Session subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum SessionCommand {
    /// List all sessions
    List,

    /// Show the messages of a session
    Show {
        /// Session identifier
        session_id: String,
    },

    /// Create a new session
    New {
        /// Session identifier
        session_id: String,

        /// Session title
        title: String,
    },

    /// Delete a session and its messages
    Delete {
        /// Session identifier
        session_id: String,
    },
}

/// Notification subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum NotificationCommand {
    /// List all notifications, most recent first
    List,

    /// Mark a notification as read
    MarkRead {
        /// Notification id
        id: i64,
    },

    /// Delete a notification
    Delete {
        /// Notification id
        id: i64,
    },

    /// Show the unread notification count
    Unread,
}

/// Data maintenance subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum DataCommand {
    /// Write a backup file of all stored data
    Backup {
        /// Output file path
        output: PathBuf,
    },

    /// Restore stored data from a backup file
    Restore {
        /// Backup file path
        input: PathBuf,
    },

    /// Export the chat history as CSV
    ExportCsv {
        /// Output file path
        output: PathBuf,
    },

    /// Show totals for sessions, messages, and notifications
    Stats,

    /// Seed sample data for manual testing
    Seed,

    /// Remove sessions, messages, and notifications (settings survive)
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
