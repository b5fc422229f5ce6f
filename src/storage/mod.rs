//! Key-value substrate abstraction
//!
//! The persistence layer stores every collection as a UTF-8 JSON string
//! under a well-known key. This module defines the substrate contract
//! (`KeyValueStore`) and its implementations: a durable sled-backed
//! store and an in-memory store for tests.

use crate::error::Result;
use async_trait::async_trait;

pub mod memory;
pub mod sled;

pub use self::sled::SledStore;
pub use memory::MemoryStore;

/// String-keyed persistent storage contract
///
/// The persistence service is written against this trait rather than a
/// concrete engine, so tests can inject [`MemoryStore`] while production
/// code uses [`SledStore`]. Values are opaque UTF-8 strings; the service
/// layers JSON on top.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, or `None` if absent
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key` if present
    async fn remove(&self, key: &str) -> Result<()>;

    /// Remove every key in `keys` in one pass
    async fn multi_remove(&self, keys: &[&str]) -> Result<()>;
}
