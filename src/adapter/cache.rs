use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::{
    domain::{RegistrationError, StoreError},
    port::EphemeralCache,
};

struct CacheEntry {
    value: String,
    expires_at: DateTime<Utc>,
}

/// In-memory TTL cache. Expiry is lazy: an entry past its deadline is
/// dropped on the next read.
///
/// For production, use a Redis-backed implementation.
pub struct InMemoryCache {
    entries: Arc<RwLock<HashMap<String, CacheEntry>>>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of live entries, stale ones included.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl Default for InMemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EphemeralCache for InMemoryCache {
    async fn set_with_ttl(
        &self,
        key: &str,
        value: String,
        ttl: Duration,
    ) -> Result<(), RegistrationError> {
        let ttl = chrono::Duration::from_std(ttl)
            .map_err(|e| RegistrationError::Store(StoreError::Cache(e.to_string())))?;
        let entry = CacheEntry {
            value,
            expires_at: Utc::now() + ttl,
        };

        self.entries.write().await.insert(key.to_string(), entry);
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, RegistrationError> {
        let now = Utc::now();

        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                Some(entry) if entry.expires_at > now => return Ok(Some(entry.value.clone())),
                None => return Ok(None),
                _ => {}
            }
        }

        // stale entry
        self.entries.write().await.remove(key);
        Ok(None)
    }

    async fn delete(&self, key: &str) -> Result<(), RegistrationError> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}
