//! Session persistence seam
//!
//! The back office persists exactly one value across process starts: the
//! signed-in user, as a flat JSON record under a fixed key. The store is a
//! browser-local key-value stand-in; implementations carry no migration or
//! versioning scheme.

pub mod in_memory;

pub use in_memory::InMemorySessionStore;

use anyhow::Result;
use async_trait::async_trait;

/// Key under which the signed-in user is persisted
pub const SESSION_KEY: &str = "auth_user";

/// Opaque string key-value store for session state
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Read a value
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any existing one
    async fn put(&self, key: &str, value: String) -> Result<()>;

    /// Remove a value; removing an absent key is a no-op
    async fn remove(&self, key: &str) -> Result<()>;
}
