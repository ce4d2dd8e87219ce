use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::{
    domain::{
        staged_key, EnginePolicy, RawRow, RegistrationError, Responsible, StagedBatch, StagedItem,
        StagedRecord, StoreError,
    },
    port::{EphemeralCache, EventDirectory, StagingStore},
    service::RowValidator,
};

/// Priced preview returned to the caller alongside the opaque key.
#[derive(Debug, Clone)]
pub struct StagedPreview {
    pub cache_key: String,
    pub total: f64,
    pub items: Vec<StagedItem>,
}

/// Validates a batch, computes totals and parks the payload behind an
/// opaque key in both staged stores.
#[derive(Clone)]
pub struct StagingEngine {
    directory: Arc<dyn EventDirectory>,
    cache: Arc<dyn EphemeralCache>,
    staging: Arc<dyn StagingStore>,
    policy: EnginePolicy,
}

impl StagingEngine {
    pub fn new(
        directory: Arc<dyn EventDirectory>,
        cache: Arc<dyn EphemeralCache>,
        staging: Arc<dyn StagingStore>,
        policy: EnginePolicy,
    ) -> Self {
        Self {
            directory,
            cache,
            staging,
            policy,
        }
    }

    /// Stage a batch of raw rows for later confirmation.
    ///
    /// Validation is all-or-nothing across the batch: if any row fails any
    /// check, every failing row's line number and reason is reported and
    /// nothing is written. On full success the identical payload goes to the
    /// staging store (authoritative expiry) and then to the cache (same
    /// TTL); a failure of either write surfaces as a hard error and no key
    /// reaches the caller.
    pub async fn stage(
        &self,
        owner_id: Uuid,
        event_id: Uuid,
        responsible: Responsible,
        rows: &[RawRow],
    ) -> Result<StagedPreview, RegistrationError> {
        let types = self.directory.inscription_types(event_id).await?;
        let validator = RowValidator::new(&types);

        let mut errors = Vec::new();
        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            match validator.validate(row) {
                Ok(item) => items.push(item),
                Err(e) => errors.push(e),
            }
        }
        if !errors.is_empty() {
            return Err(RegistrationError::Validation(errors));
        }

        let total: f64 = items.iter().map(|item| item.unit_value).sum();
        let batch = StagedBatch {
            cache_key: staged_key(),
            owner_id,
            event_id,
            responsible,
            items,
            total,
        };

        let payload = serde_json::to_string(&batch)
            .map_err(|e| RegistrationError::Store(StoreError::CorruptPayload(e.to_string())))?;
        let ttl = chrono::Duration::from_std(self.policy.staging_ttl)
            .map_err(|e| RegistrationError::Store(StoreError::Staging(e.to_string())))?;

        self.staging
            .create(StagedRecord {
                key: batch.cache_key.clone(),
                owner_id,
                payload: payload.clone(),
                expires_at: Utc::now() + ttl,
            })
            .await?;
        self.cache
            .set_with_ttl(&batch.cache_key, payload, self.policy.staging_ttl)
            .await?;

        tracing::debug!(
            key = %batch.cache_key,
            items = batch.items.len(),
            total = batch.total,
            "batch staged"
        );

        Ok(StagedPreview {
            cache_key: batch.cache_key,
            total: batch.total,
            items: batch.items,
        })
    }
}
