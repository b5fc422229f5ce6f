//! Persistence layer for chat sessions, messages, settings, and notifications
//!
//! Every collection lives as a JSON value under one well-known key in
//! the key-value substrate; [`service::DatabaseService`] implements the
//! read-modify-write operations on top.

pub mod service;
pub mod types;

pub use service::DatabaseService;
pub use types::{
    ChatMessage, ChatSession, MessageDraft, MessageRole, NotificationDraft, NotificationItem,
    NotificationKind, SettingsPatch, Theme, UserSettings,
};

/// Storage keys for the persisted collections
///
/// These names are part of the external contract; changing them breaks
/// compatibility with existing stores and backups.
pub mod keys {
    /// JSON array of [`super::ChatSession`]
    pub const SESSIONS: &str = "chat_sessions";
    /// JSON array of [`super::ChatMessage`]
    pub const MESSAGES: &str = "chat_messages";
    /// JSON object [`super::UserSettings`]
    pub const SETTINGS: &str = "user_settings";
    /// JSON array of [`super::NotificationItem`]
    pub const NOTIFICATIONS: &str = "notifications";
}
