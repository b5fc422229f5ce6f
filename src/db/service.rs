//! CRUD operations over the persisted collections
//!
//! Every operation is a whole-collection read-modify-write against the
//! key-value substrate. There is no locking or transaction discipline:
//! the layer assumes a single logical caller per process, and two
//! concurrent writers to the same collection are last-write-wins at
//! collection granularity.

use crate::db::keys;
use crate::db::types::{
    ChatMessage, ChatSession, MessageDraft, NotificationDraft, NotificationItem, SettingsPatch,
    UserSettings,
};
use crate::error::Result;
use crate::storage::KeyValueStore;
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

/// Current wall-clock time as Unix epoch milliseconds
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Last id handed out by [`next_record_id`], shared by every service
/// instance in the process
static LAST_RECORD_ID: AtomicI64 = AtomicI64::new(0);

/// Generate a monotonic record id seeded from the wall clock
///
/// Ids are `max(now_millis, previous + 1)`, so they stay in wall-clock
/// range but never repeat within a process, even under rapid writes or
/// across multiple service instances over the same store.
fn next_record_id() -> i64 {
    let now = now_millis();
    let mut prev = LAST_RECORD_ID.load(Ordering::Relaxed);
    loop {
        let candidate = if now > prev { now } else { prev + 1 };
        match LAST_RECORD_ID.compare_exchange_weak(
            prev,
            candidate,
            Ordering::Relaxed,
            Ordering::Relaxed,
        ) {
            Ok(_) => return candidate,
            Err(actual) => prev = actual,
        }
    }
}

/// Persistence service for sessions, messages, settings, and notifications
///
/// Constructed with an injected [`KeyValueStore`] so production code can
/// use the sled-backed store while tests inject an in-memory one.
///
/// Failure semantics: a missing key reads as an empty collection;
/// malformed stored JSON is logged and read as empty rather than
/// crashing the caller; write failures propagate unmodified.
pub struct DatabaseService {
    store: Arc<dyn KeyValueStore>,
}

impl DatabaseService {
    /// Create a service over the given substrate
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Read a JSON-array collection, treating missing or malformed data as empty
    async fn read_collection<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
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

    /// Serialize and persist a collection under its key
    async fn write_collection<T: Serialize>(&self, key: &str, items: &[T]) -> Result<()> {
        let raw = serde_json::to_string(items)?;
        self.store.set(key, &raw).await
    }

    // --- Chat sessions ---

    /// Insert a new session at the head of the session list
    ///
    /// `message_count` starts at 0 and `created_at == updated_at == now`.
    /// No uniqueness check is performed: a duplicate `session_id` yields
    /// a duplicate entry.
    pub async fn create_session(&self, session_id: &str, title: &str) -> Result<()> {
        let mut sessions: Vec<ChatSession> = self.read_collection(keys::SESSIONS).await?;

        let now = now_millis();
        sessions.insert(
            0,
            ChatSession {
                session_id: session_id.to_string(),
                title: title.to_string(),
                created_at: now,
                updated_at: now,
                message_count: 0,
            },
        );

        self.write_collection(keys::SESSIONS, &sessions).await
    }

    /// List all sessions, most recently created first
    pub async fn list_sessions(&self) -> Result<Vec<ChatSession>> {
        self.read_collection(keys::SESSIONS).await
    }

    /// Look up a single session by id
    pub async fn get_session(&self, session_id: &str) -> Result<Option<ChatSession>> {
        let sessions: Vec<ChatSession> = self.read_collection(keys::SESSIONS).await?;
        Ok(sessions.into_iter().find(|s| s.session_id == session_id))
    }

    /// Update a session's title and bump its `updated_at`
    ///
    /// The title is only overwritten when `title` is `Some`. A missing
    /// session is a silent no-op.
    pub async fn update_session(&self, session_id: &str, title: Option<&str>) -> Result<()> {
        let mut sessions: Vec<ChatSession> = self.read_collection(keys::SESSIONS).await?;

        let Some(session) = sessions.iter_mut().find(|s| s.session_id == session_id) else {
            tracing::debug!(session_id, "update_session: session not found, skipping");
            return Ok(());
        };

        session.updated_at = now_millis();
        if let Some(title) = title {
            session.title = title.to_string();
        }

        self.write_collection(keys::SESSIONS, &sessions).await
    }

    /// Delete a session and cascade to its messages
    pub async fn delete_session(&self, session_id: &str) -> Result<()> {
        let mut sessions: Vec<ChatSession> = self.read_collection(keys::SESSIONS).await?;
        sessions.retain(|s| s.session_id != session_id);
        self.write_collection(keys::SESSIONS, &sessions).await?;

        let mut messages: Vec<ChatMessage> = self.read_collection(keys::MESSAGES).await?;
        messages.retain(|m| m.session_id != session_id);
        self.write_collection(keys::MESSAGES, &messages).await
    }

    // --- Chat messages ---

    /// Persist a message and update the owning session's counters
    ///
    /// Assigns an id, appends to the message list, then increments the
    /// owner's `message_count` and bumps `updated_at`. When no session
    /// matches, the message is still saved (an orphan) and the counter
    /// update is skipped.
    ///
    /// The counter is maintained incrementally, never recomputed; a
    /// write that fails between the two collection updates leaves the
    /// count stale.
    pub async fn save_message(&self, draft: MessageDraft) -> Result<ChatMessage> {
        let mut messages: Vec<ChatMessage> = self.read_collection(keys::MESSAGES).await?;

        let message = ChatMessage {
            id: next_record_id(),
            role: draft.role,
            content: draft.content,
            timestamp: draft.timestamp,
            session_id: draft.session_id,
            image_url: draft.image_url,
        };
        messages.push(message.clone());
        self.write_collection(keys::MESSAGES, &messages).await?;

        let mut sessions: Vec<ChatSession> = self.read_collection(keys::SESSIONS).await?;
        match sessions
            .iter_mut()
            .find(|s| s.session_id == message.session_id)
        {
            Some(session) => {
                session.message_count += 1;
                session.updated_at = now_millis();
                self.write_collection(keys::SESSIONS, &sessions).await?;
            }
            None => {
                tracing::warn!(
                    session_id = %message.session_id,
                    "save_message: no matching session, message saved as orphan"
                );
            }
        }

        Ok(message)
    }

    /// Messages for a session, ascending by timestamp
    pub async fn get_messages(&self, session_id: &str) -> Result<Vec<ChatMessage>> {
        let messages: Vec<ChatMessage> = self.read_collection(keys::MESSAGES).await?;
        let mut messages: Vec<ChatMessage> = messages
            .into_iter()
            .filter(|m| m.session_id == session_id)
            .collect();
        messages.sort_by_key(|m| m.timestamp);
        Ok(messages)
    }

    /// Delete all of a session's messages and reset its counter
    ///
    /// The session itself survives with `message_count == 0` and a
    /// bumped `updated_at`.
    pub async fn delete_messages(&self, session_id: &str) -> Result<()> {
        let mut messages: Vec<ChatMessage> = self.read_collection(keys::MESSAGES).await?;
        messages.retain(|m| m.session_id != session_id);
        self.write_collection(keys::MESSAGES, &messages).await?;

        let mut sessions: Vec<ChatSession> = self.read_collection(keys::SESSIONS).await?;
        if let Some(session) = sessions.iter_mut().find(|s| s.session_id == session_id) {
            session.message_count = 0;
            session.updated_at = now_millis();
            self.write_collection(keys::SESSIONS, &sessions).await?;
        }

        Ok(())
    }

    // --- User settings ---

    /// Read the settings singleton, creating defaults on first read
    ///
    /// When nothing is stored (or the stored value is malformed), the
    /// defaults are persisted before being returned, so the first read
    /// has a write side effect and every later read is a plain read.
    pub async fn get_user_settings(&self) -> Result<UserSettings> {
        if let Some(raw) = self.store.get(keys::SETTINGS).await? {
            match serde_json::from_str(&raw) {
                Ok(settings) => return Ok(settings),
                Err(e) => {
                    tracing::warn!(error = %e, "Malformed stored settings, rewriting defaults");
                }
            }
        }

        let defaults = UserSettings::default();
        let raw = serde_json::to_string(&defaults)?;
        self.store.set(keys::SETTINGS, &raw).await?;
        Ok(defaults)
    }

    /// Shallow-merge a patch into the stored settings
    ///
    /// A no-op when no settings record exists yet; callers are expected
    /// to have triggered the lazy default via [`Self::get_user_settings`]
    /// first.
    pub async fn update_user_settings(&self, patch: SettingsPatch) -> Result<()> {
        let Some(raw) = self.store.get(keys::SETTINGS).await? else {
            tracing::debug!("update_user_settings: no stored settings, skipping");
            return Ok(());
        };

        let mut settings: UserSettings = match serde_json::from_str(&raw) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(error = %e, "Malformed stored settings, patching defaults");
                UserSettings::default()
            }
        };

        patch.apply(&mut settings);
        let raw = serde_json::to_string(&settings)?;
        self.store.set(keys::SETTINGS, &raw).await
    }

    // --- Notifications ---

    /// Persist a notification at the head of the list (most recent first)
    pub async fn save_notification(&self, draft: NotificationDraft) -> Result<NotificationItem> {
        let mut notifications: Vec<NotificationItem> =
            self.read_collection(keys::NOTIFICATIONS).await?;

        let item = NotificationItem {
            id: next_record_id(),
            title: draft.title,
            body: draft.body,
            timestamp: draft.timestamp,
            is_read: draft.is_read,
            kind: draft.kind,
        };
        notifications.insert(0, item.clone());

        self.write_collection(keys::NOTIFICATIONS, &notifications)
            .await?;
        Ok(item)
    }

    /// All notifications in stored (head-first) order
    pub async fn list_notifications(&self) -> Result<Vec<NotificationItem>> {
        self.read_collection(keys::NOTIFICATIONS).await
    }

    /// Mark a notification as read; silent no-op when the id is absent
    pub async fn mark_notification_read(&self, id: i64) -> Result<()> {
        let mut notifications: Vec<NotificationItem> =
            self.read_collection(keys::NOTIFICATIONS).await?;

        let Some(item) = notifications.iter_mut().find(|n| n.id == id) else {
            tracing::debug!(id, "mark_notification_read: id not found, skipping");
            return Ok(());
        };
        item.is_read = true;

        self.write_collection(keys::NOTIFICATIONS, &notifications)
            .await
    }

    /// Remove a notification by id; silent no-op when absent
    pub async fn delete_notification(&self, id: i64) -> Result<()> {
        let mut notifications: Vec<NotificationItem> =
            self.read_collection(keys::NOTIFICATIONS).await?;
        notifications.retain(|n| n.id != id);
        self.write_collection(keys::NOTIFICATIONS, &notifications)
            .await
    }

    /// Number of notifications not yet marked read
    pub async fn unread_notification_count(&self) -> Result<usize> {
        let notifications: Vec<NotificationItem> =
            self.read_collection(keys::NOTIFICATIONS).await?;
        Ok(notifications.iter().filter(|n| !n.is_read).count())
    }

    // --- Maintenance ---

    /// Remove sessions, messages, and notifications; settings survive
    pub async fn clear_all(&self) -> Result<()> {
        self.store
            .multi_remove(&[keys::SESSIONS, keys::MESSAGES, keys::NOTIFICATIONS])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::types::{MessageRole, NotificationKind, Theme};
    use crate::storage::MemoryStore;

    fn memory_service() -> (DatabaseService, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        (DatabaseService::new(store.clone()), store)
    }

    fn system_notification(title: &str, timestamp: i64) -> NotificationDraft {
        NotificationDraft {
            title: title.to_string(),
            body: "body".to_string(),
            timestamp,
            is_read: false,
            kind: NotificationKind::System,
        }
    }

    #[tokio::test]
    async fn test_create_session_head_insertion_order() {
        let (db, _) = memory_service();
        db.create_session("s1", "First").await.expect("create failed");
        db.create_session("s2", "Second").await.expect("create failed");

        let sessions = db.list_sessions().await.expect("list failed");
        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[0].session_id, "s2");
        assert_eq!(sessions[1].session_id, "s1");
        assert_eq!(sessions[0].message_count, 0);
        assert_eq!(sessions[0].created_at, sessions[0].updated_at);
    }

    #[tokio::test]
    async fn test_duplicate_session_ids_produce_duplicate_entries() {
        let (db, _) = memory_service();
        db.create_session("dup", "One").await.expect("create failed");
        db.create_session("dup", "Two").await.expect("create failed");

        let sessions = db.list_sessions().await.expect("list failed");
        assert_eq!(sessions.len(), 2);
        assert!(sessions.iter().all(|s| s.session_id == "dup"));
    }

    #[tokio::test]
    async fn test_get_session_finds_by_id() {
        let (db, _) = memory_service();
        db.create_session("s1", "Demo").await.expect("create failed");

        let session = db.get_session("s1").await.expect("get failed");
        assert_eq!(session.expect("missing session").title, "Demo");

        let missing = db.get_session("nope").await.expect("get failed");
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_update_session_title_only_when_provided() {
        let (db, _) = memory_service();
        db.create_session("s1", "Original").await.expect("create failed");

        db.update_session("s1", None).await.expect("update failed");
        let session = db.get_session("s1").await.expect("get failed").unwrap();
        assert_eq!(session.title, "Original");

        db.update_session("s1", Some("Renamed")).await.expect("update failed");
        let session = db.get_session("s1").await.expect("get failed").unwrap();
        assert_eq!(session.title, "Renamed");
        assert!(session.updated_at >= session.created_at);
    }

    #[tokio::test]
    async fn test_update_session_missing_is_noop() {
        let (db, _) = memory_service();
        db.update_session("ghost", Some("Title")).await.expect("update failed");
        assert!(db.list_sessions().await.expect("list failed").is_empty());
    }

    #[tokio::test]
    async fn test_message_count_tracks_saves() {
        let (db, _) = memory_service();
        db.create_session("s1", "Demo").await.expect("create failed");

        for i in 0..3 {
            db.save_message(MessageDraft::user(format!("msg {}", i), i, "s1"))
                .await
                .expect("save failed");
        }

        let session = db.get_session("s1").await.expect("get failed").unwrap();
        assert_eq!(session.message_count, 3);
    }

    #[tokio::test]
    async fn test_orphan_message_saved_without_counter_update() {
        let (db, _) = memory_service();
        db.create_session("s1", "Demo").await.expect("create failed");

        let orphan = db
            .save_message(MessageDraft::user("lost", 1, "no_such_session"))
            .await
            .expect("save failed");
        assert_eq!(orphan.session_id, "no_such_session");

        // The orphan is readable, and the unrelated session is untouched
        let messages = db.get_messages("no_such_session").await.expect("get failed");
        assert_eq!(messages.len(), 1);
        let session = db.get_session("s1").await.expect("get failed").unwrap();
        assert_eq!(session.message_count, 0);
    }

    #[tokio::test]
    async fn test_messages_sorted_ascending_by_timestamp() {
        let (db, _) = memory_service();
        db.create_session("s1", "Demo").await.expect("create failed");

        db.save_message(MessageDraft::user("third", 30, "s1")).await.expect("save failed");
        db.save_message(MessageDraft::user("first", 10, "s1")).await.expect("save failed");
        db.save_message(MessageDraft::user("second", 20, "s1")).await.expect("save failed");

        let messages = db.get_messages("s1").await.expect("get failed");
        let contents: Vec<&str> = messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_get_messages_filters_by_session() {
        let (db, _) = memory_service();
        db.create_session("a", "A").await.expect("create failed");
        db.create_session("b", "B").await.expect("create failed");

        db.save_message(MessageDraft::user("for a", 1, "a")).await.expect("save failed");
        db.save_message(MessageDraft::user("for b", 2, "b")).await.expect("save failed");

        let messages = db.get_messages("a").await.expect("get failed");
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].content, "for a");
    }

    #[tokio::test]
    async fn test_delete_session_cascades_to_messages() {
        let (db, _) = memory_service();
        db.create_session("s1", "Demo").await.expect("create failed");
        db.save_message(MessageDraft::user("hi", 1, "s1")).await.expect("save failed");

        db.delete_session("s1").await.expect("delete failed");

        assert!(db.list_sessions().await.expect("list failed").is_empty());
        assert!(db.get_messages("s1").await.expect("get failed").is_empty());
    }

    #[tokio::test]
    async fn test_delete_messages_resets_counter_keeps_session() {
        let (db, _) = memory_service();
        db.create_session("s1", "Demo").await.expect("create failed");
        db.save_message(MessageDraft::user("hi", 1, "s1")).await.expect("save failed");
        db.save_message(MessageDraft::assistant("hello", 2, "s1")).await.expect("save failed");

        db.delete_messages("s1").await.expect("delete failed");

        assert!(db.get_messages("s1").await.expect("get failed").is_empty());
        let session = db.get_session("s1").await.expect("get failed").unwrap();
        assert_eq!(session.message_count, 0);
    }

    #[tokio::test]
    async fn test_spec_example_conversation() {
        let (db, _) = memory_service();
        db.create_session("s1", "Demo").await.expect("create failed");
        db.save_message(MessageDraft::user("hi", 1, "s1")).await.expect("save failed");
        db.save_message(MessageDraft::assistant("hello", 2, "s1")).await.expect("save failed");

        let sessions = db.list_sessions().await.expect("list failed");
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].message_count, 2);

        let messages = db.get_messages("s1").await.expect("get failed");
        let contents: Vec<&str> = messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["hi", "hello"]);
        assert_eq!(messages[0].role, MessageRole::User);
        assert_eq!(messages[1].role, MessageRole::Assistant);
    }

    #[tokio::test]
    async fn test_settings_lazy_default_is_persisted_and_idempotent() {
        let (db, store) = memory_service();

        assert!(store.get(keys::SETTINGS).await.expect("get failed").is_none());

        let first = db.get_user_settings().await.expect("get failed");
        assert_eq!(first, UserSettings::default());

        // First read persisted the defaults
        assert!(store.get(keys::SETTINGS).await.expect("get failed").is_some());

        let second = db.get_user_settings().await.expect("get failed");
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_update_settings_noop_before_first_read() {
        let (db, store) = memory_service();

        db.update_user_settings(SettingsPatch {
            theme: Some(Theme::Dark),
            ..Default::default()
        })
        .await
        .expect("update failed");

        // Nothing stored: the patch was dropped
        assert!(store.get(keys::SETTINGS).await.expect("get failed").is_none());
    }

    #[tokio::test]
    async fn test_update_settings_merges_after_first_read() {
        let (db, _) = memory_service();
        db.get_user_settings().await.expect("get failed");

        db.update_user_settings(SettingsPatch {
            voice_enabled: Some(false),
            openai_api_key: Some("sk-test".to_string()),
            ..Default::default()
        })
        .await
        .expect("update failed");

        let settings = db.get_user_settings().await.expect("get failed");
        assert!(!settings.voice_enabled);
        assert_eq!(settings.openai_api_key.as_deref(), Some("sk-test"));
        // Unpatched fields keep their defaults
        assert!(settings.notifications_enabled);
        assert_eq!(settings.theme, Theme::Auto);
    }

    #[tokio::test]
    async fn test_notifications_head_first_order() {
        let (db, _) = memory_service();
        db.save_notification(system_notification("first", 1)).await.expect("save failed");
        db.save_notification(system_notification("second", 2)).await.expect("save failed");

        let notifications = db.list_notifications().await.expect("list failed");
        assert_eq!(notifications[0].title, "second");
        assert_eq!(notifications[1].title, "first");
    }

    #[tokio::test]
    async fn test_unread_count_follows_mark_read() {
        let (db, _) = memory_service();
        let saved = db
            .save_notification(system_notification("T", 5))
            .await
            .expect("save failed");

        assert_eq!(db.unread_notification_count().await.expect("count failed"), 1);

        db.mark_notification_read(saved.id).await.expect("mark failed");
        assert_eq!(db.unread_notification_count().await.expect("count failed"), 0);
    }

    #[tokio::test]
    async fn test_mark_read_missing_id_is_noop() {
        let (db, _) = memory_service();
        db.save_notification(system_notification("T", 5)).await.expect("save failed");

        db.mark_notification_read(-1).await.expect("mark failed");
        assert_eq!(db.unread_notification_count().await.expect("count failed"), 1);
    }

    #[tokio::test]
    async fn test_delete_notification_by_id() {
        let (db, _) = memory_service();
        let first = db.save_notification(system_notification("a", 1)).await.expect("save failed");
        db.save_notification(system_notification("b", 2)).await.expect("save failed");

        db.delete_notification(first.id).await.expect("delete failed");

        let notifications = db.list_notifications().await.expect("list failed");
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].title, "b");

        // Deleting an absent id is a no-op
        db.delete_notification(first.id).await.expect("delete failed");
        assert_eq!(db.list_notifications().await.expect("list failed").len(), 1);
    }

    #[tokio::test]
    async fn test_clear_all_leaves_settings() {
        let (db, store) = memory_service();
        db.create_session("s1", "Demo").await.expect("create failed");
        db.save_message(MessageDraft::user("hi", 1, "s1")).await.expect("save failed");
        db.save_notification(system_notification("T", 5)).await.expect("save failed");
        db.get_user_settings().await.expect("get failed");

        db.clear_all().await.expect("clear failed");

        assert!(db.list_sessions().await.expect("list failed").is_empty());
        assert!(db.list_notifications().await.expect("list failed").is_empty());
        assert!(store.get(keys::SETTINGS).await.expect("get failed").is_some());
    }

    #[tokio::test]
    async fn test_malformed_collection_reads_as_empty() {
        let (db, store) = memory_service();
        store.seed(keys::SESSIONS, "{definitely not an array");

        let sessions = db.list_sessions().await.expect("list failed");
        assert!(sessions.is_empty());

        // Writes still work after the bad read
        db.create_session("s1", "Fresh").await.expect("create failed");
        assert_eq!(db.list_sessions().await.expect("list failed").len(), 1);
    }

    #[tokio::test]
    async fn test_ids_are_unique_under_rapid_writes() {
        let (db, _) = memory_service();
        db.create_session("s1", "Demo").await.expect("create failed");

        let mut ids = Vec::new();
        for i in 0..50 {
            let message = db
                .save_message(MessageDraft::user("m", i, "s1"))
                .await
                .expect("save failed");
            ids.push(message.id);
        }

        let mut deduped = ids.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());

        // Monotonic: each id strictly greater than the previous
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[tokio::test]
    async fn test_ids_are_unique_across_service_instances() {
        let store = Arc::new(MemoryStore::new());
        let first = DatabaseService::new(store.clone());
        let second = DatabaseService::new(store.clone());
        first.create_session("s1", "Shared").await.expect("create failed");

        // Interleave writes from two services over the same store
        let mut ids = Vec::new();
        for i in 0..20 {
            let message = first
                .save_message(MessageDraft::user("from first", i, "s1"))
                .await
                .expect("save failed");
            ids.push(message.id);

            let message = second
                .save_message(MessageDraft::assistant("from second", i, "s1"))
                .await
                .expect("save failed");
            ids.push(message.id);
        }

        let mut deduped = ids.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }

    #[tokio::test]
    async fn test_stored_wire_format_is_camel_case() {
        let (db, store) = memory_service();
        db.create_session("s1", "Demo").await.expect("create failed");

        let raw = store
            .get(keys::SESSIONS)
            .await
            .expect("get failed")
            .expect("sessions key missing");
        let value: serde_json::Value = serde_json::from_str(&raw).expect("parse failed");
        let entry = &value.as_array().expect("not an array")[0];
        assert!(entry.get("sessionId").is_some());
        assert!(entry.get("messageCount").is_some());
        assert!(entry.get("session_id").is_none());
    }
}
