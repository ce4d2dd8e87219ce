use std::time::Duration;

use async_trait::async_trait;

use crate::domain::RegistrationError;

/// Fast TTL-native key-value store, the primary lookup path for staged
/// payloads.
///
/// A latency optimization only: the staging store is the source of truth for
/// expiry, so a cache entry outliving its durable record must never win.
#[async_trait]
pub trait EphemeralCache: Send + Sync {
    /// Store a value under `key`, evicted after `ttl`.
    async fn set_with_ttl(
        &self,
        key: &str,
        value: String,
        ttl: Duration,
    ) -> Result<(), RegistrationError>;

    /// Fetch the value for `key`, if present and not yet expired.
    async fn get(&self, key: &str) -> Result<Option<String>, RegistrationError>;

    async fn delete(&self, key: &str) -> Result<(), RegistrationError>;
}
