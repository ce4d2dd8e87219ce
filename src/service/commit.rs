use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::{
    domain::{
        EnginePolicy, Inscription, InscriptionStatus, Notification, Participant,
        RegistrationError, RuleError, StagedBatch, StoreError,
    },
    port::{
        EphemeralCache, EventDirectory, InscriptionStore, NotificationSink, ParticipantStore,
        StagingStore,
    },
};

/// Receipt returned by a successful commit.
#[derive(Debug, Clone)]
pub struct CommitReceipt {
    pub inscription_id: Uuid,
    pub status: InscriptionStatus,
}

/// Materializes a staged batch into durable inscription and participant
/// records exactly once.
#[derive(Clone)]
pub struct CommitEngine {
    cache: Arc<dyn EphemeralCache>,
    staging: Arc<dyn StagingStore>,
    inscriptions: Arc<dyn InscriptionStore>,
    participants: Arc<dyn ParticipantStore>,
    directory: Arc<dyn EventDirectory>,
    notifier: Arc<dyn NotificationSink>,
    policy: EnginePolicy,
}

impl CommitEngine {
    pub fn new(
        cache: Arc<dyn EphemeralCache>,
        staging: Arc<dyn StagingStore>,
        inscriptions: Arc<dyn InscriptionStore>,
        participants: Arc<dyn ParticipantStore>,
        directory: Arc<dyn EventDirectory>,
        notifier: Arc<dyn NotificationSink>,
        policy: EnginePolicy,
    ) -> Self {
        Self {
            cache,
            staging,
            inscriptions,
            participants,
            directory,
            notifier,
            policy,
        }
    }

    /// Confirm a staged batch.
    ///
    /// Lookup is cache-first with the staging store as durable fallback,
    /// tolerant of cache eviction or restart. The durable record's expiry is
    /// authoritative even when the cache still resolves the key: an expired
    /// record is deleted from both stores and the call fails with "expired".
    /// Ownership is enforced on both paths, so a guessed key reads as not
    /// found for anyone but the staging owner.
    ///
    /// Ordering contract: create the inscription, create its participant
    /// batch, bump the event counter, then delete the staged payload from
    /// both stores. The delete is the completion signal - after it, the key
    /// is unresolvable and a repeated commit fails closed. A retry after a
    /// crash earlier in the sequence redoes only what is missing: the
    /// inscription create deduplicates on the staging key and the
    /// participant batch reports whether it actually wrote, so participants
    /// and the counter are never doubled.
    pub async fn commit(
        &self,
        cache_key: &str,
        caller_account_id: Uuid,
    ) -> Result<CommitReceipt, RegistrationError> {
        let cached = self.cache.get(cache_key).await?;
        let record = self.staging.find_by_key(cache_key).await?;

        if let Some(rec) = &record {
            if rec.expires_at <= Utc::now() {
                self.staging.delete_by_key(cache_key).await?;
                self.cache.delete(cache_key).await?;
                return Err(RegistrationError::Rule(RuleError::StagedBatchExpired));
            }
        }

        let payload = match cached {
            Some(payload) => payload,
            None => match &record {
                Some(rec) => rec.payload.clone(),
                None => return Err(RegistrationError::Rule(RuleError::StagedBatchNotFound)),
            },
        };

        let batch: StagedBatch = serde_json::from_str(&payload)
            .map_err(|e| RegistrationError::Store(StoreError::CorruptPayload(e.to_string())))?;

        if batch.owner_id != caller_account_id {
            return Err(RegistrationError::Rule(RuleError::AccessDenied));
        }

        let inscription = self
            .inscriptions
            .create(Inscription::from_staged(&batch))
            .await?;

        if !batch.items.is_empty() {
            let participants: Vec<Participant> = batch
                .items
                .iter()
                .map(|item| Participant::from_item(inscription.id, item))
                .collect();

            let created = self.participants.create_batch(participants).await?;
            if created {
                self.directory
                    .increment_participant_count(batch.event_id, batch.items.len() as u32)
                    .await?;
            }
        }

        // completion signal: the key stops resolving for any later attempt
        self.staging.delete_by_key(cache_key).await?;
        self.cache.delete(cache_key).await?;

        tracing::info!(
            inscription = %inscription.id,
            event = %batch.event_id,
            participants = batch.items.len(),
            status = ?inscription.status,
            "staged batch committed"
        );

        self.dispatch_notification(&batch, &inscription);

        Ok(CommitReceipt {
            inscription_id: inscription.id,
            status: inscription.status,
        })
    }

    /// Best-effort, detached from the commit itself: a broken or slow sink
    /// is logged and forgotten.
    fn dispatch_notification(&self, batch: &StagedBatch, inscription: &Inscription) {
        let notifier = self.notifier.clone();
        let timeout = self.policy.notify_timeout;
        let event_id = batch.event_id;
        let notification = Notification::InscriptionConfirmed {
            inscription_id: inscription.id,
            event_id,
            responsible: inscription.responsible.clone(),
            participants: batch.items.len() as u32,
            total_value: inscription.total_value,
        };

        tokio::spawn(async move {
            match tokio::time::timeout(timeout, notifier.notify(event_id, notification)).await {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    tracing::warn!(%event_id, error = %e, "inscription notification failed")
                }
                Err(_) => tracing::warn!(%event_id, "inscription notification timed out"),
            }
        });
    }
}
