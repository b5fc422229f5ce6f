//! Record types for the persistence layer
//!
//! Field names are renamed to camelCase on the wire so the stored JSON
//! stays byte-compatible with the key layout documented in
//! [`crate::db::keys`]. Timestamps are Unix epoch milliseconds; record
//! ids are integers assigned at write time.

use serde::{Deserialize, Serialize};

/// Who authored a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

impl MessageRole {
    /// Wire-format name of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

/// UI color theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    Auto,
}

/// Category of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Chat,
    Reminder,
    System,
}

impl NotificationKind {
    /// Wire-format name of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Chat => "chat",
            NotificationKind::Reminder => "reminder",
            NotificationKind::System => "system",
        }
    }
}

/// A logical conversation grouping ordered messages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSession {
    /// Caller-chosen unique identifier for the session
    pub session_id: String,
    /// User-friendly title
    pub title: String,
    /// When the session was created (epoch millis)
    pub created_at: i64,
    /// When the session last changed (epoch millis)
    pub updated_at: i64,
    /// Denormalized count of messages in the session
    pub message_count: usize,
}

/// A single persisted chat message
///
/// Immutable once written; removed only by session-scoped bulk deletes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// Store-assigned identifier
    pub id: i64,
    pub role: MessageRole,
    pub content: String,
    /// When the message was produced (epoch millis)
    pub timestamp: i64,
    /// Owning session
    pub session_id: String,
    /// Attached image, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// A chat message before the store assigns its id
#[derive(Debug, Clone)]
pub struct MessageDraft {
    pub role: MessageRole,
    pub content: String,
    pub timestamp: i64,
    pub session_id: String,
    pub image_url: Option<String>,
}

impl MessageDraft {
    /// Creates a user-authored draft
    pub fn user(content: impl Into<String>, timestamp: i64, session_id: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
            timestamp,
            session_id: session_id.into(),
            image_url: None,
        }
    }

    /// Creates an assistant-authored draft
    pub fn assistant(
        content: impl Into<String>,
        timestamp: i64,
        session_id: impl Into<String>,
    ) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
            timestamp,
            session_id: session_id.into(),
            image_url: None,
        }
    }
}

/// Singleton user settings record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    pub notifications_enabled: bool,
    pub voice_enabled: bool,
    pub theme: Theme,
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub openai_api_key: Option<String>,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            notifications_enabled: true,
            voice_enabled: true,
            theme: Theme::Auto,
            language: "ko".to_string(),
            openai_api_key: None,
        }
    }
}

/// Partial update for [`UserSettings`]
///
/// Fields left as `None` keep their stored value; set fields overwrite.
#[derive(Debug, Clone, Default)]
pub struct SettingsPatch {
    pub notifications_enabled: Option<bool>,
    pub voice_enabled: Option<bool>,
    pub theme: Option<Theme>,
    pub language: Option<String>,
    pub openai_api_key: Option<String>,
}

impl SettingsPatch {
    /// Shallow-merge this patch into `settings`
    pub fn apply(&self, settings: &mut UserSettings) {
        if let Some(enabled) = self.notifications_enabled {
            settings.notifications_enabled = enabled;
        }
        if let Some(enabled) = self.voice_enabled {
            settings.voice_enabled = enabled;
        }
        if let Some(theme) = self.theme {
            settings.theme = theme;
        }
        if let Some(language) = &self.language {
            settings.language = language.clone();
        }
        if let Some(key) = &self.openai_api_key {
            settings.openai_api_key = Some(key.clone());
        }
    }
}

/// A persisted notification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationItem {
    /// Store-assigned identifier
    pub id: i64,
    pub title: String,
    pub body: String,
    /// When the notification fired (epoch millis)
    pub timestamp: i64,
    pub is_read: bool,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
}

/// A notification before the store assigns its id
#[derive(Debug, Clone)]
pub struct NotificationDraft {
    pub title: String,
    pub body: String,
    pub timestamp: i64,
    pub is_read: bool,
    pub kind: NotificationKind,
}
