use std::time::Duration;

/// Engine-level timing policy.
///
/// One TTL drives both the cache entry and the durable record's
/// `expires_at`, so the two staged stores can never disagree about when a
/// key dies; the durable record stays authoritative on read.
#[derive(Debug, Clone)]
pub struct EnginePolicy {
    pub staging_ttl: Duration,
    /// Time allowed to the detached notification task, independent of the
    /// main operation.
    pub notify_timeout: Duration,
}

impl Default for EnginePolicy {
    fn default() -> Self {
        Self {
            staging_ttl: Duration::from_secs(30 * 60),
            notify_timeout: Duration::from_secs(5),
        }
    }
}
