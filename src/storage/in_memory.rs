//! In-memory implementation of SessionStore for testing and development

use crate::storage::SessionStore;
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// In-memory session store.
///
/// Stands in for browser local storage. Uses RwLock for thread-safe access.
#[derive(Clone)]
pub struct InMemorySessionStore {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemorySessionStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            values: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let values = self
            .values
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(values.get(key).cloned())
    }

    async fn put(&self, key: &str, value: String) -> Result<()> {
        let mut values = self
            .values
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        values.insert(key.to_string(), value);

        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let mut values = self
            .values
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        values.remove(key);

        Ok(())
    }
}
