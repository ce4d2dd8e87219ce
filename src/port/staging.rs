use async_trait::async_trait;

use crate::domain::{RegistrationError, StagedRecord};

/// Durable, authoritative store for staged payloads.
///
/// Survives cache eviction and restarts. Records carry their own expiry
/// timestamp and owner; expiry enforcement happens in the commit engine, not
/// here.
#[async_trait]
pub trait StagingStore: Send + Sync {
    /// Persist a staged record. Re-creating an existing key replaces the
    /// record.
    async fn create(&self, record: StagedRecord) -> Result<(), RegistrationError>;

    async fn find_by_key(&self, key: &str) -> Result<Option<StagedRecord>, RegistrationError>;

    async fn delete_by_key(&self, key: &str) -> Result<(), RegistrationError>;
}
