use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Inscription, Participant, RegistrationError};

/// Durable store for inscriptions.
#[async_trait]
pub trait InscriptionStore: Send + Sync {
    /// Create an inscription.
    ///
    /// Idempotent via `staging_key`: if an inscription was already committed
    /// from the same staged batch, the existing one is returned unchanged.
    async fn create(&self, inscription: Inscription) -> Result<Inscription, RegistrationError>;

    async fn find(&self, id: Uuid) -> Result<Option<Inscription>, RegistrationError>;

    /// The inscription committed from a staged key, if any. Lets a retried
    /// commit detect a partially-completed predecessor.
    async fn find_by_staging_key(
        &self,
        key: &str,
    ) -> Result<Option<Inscription>, RegistrationError>;
}

/// Durable store for participants. Participants only ever exist as a batch
/// under their owning inscription.
#[async_trait]
pub trait ParticipantStore: Send + Sync {
    /// Persist an inscription's participant batch in one write.
    ///
    /// Returns false when the inscription already has its batch (a completed
    /// retry or a racing duplicate), in which case nothing is written.
    async fn create_batch(
        &self,
        participants: Vec<Participant>,
    ) -> Result<bool, RegistrationError>;

    async fn find_by_inscription(
        &self,
        inscription_id: Uuid,
    ) -> Result<Vec<Participant>, RegistrationError>;
}
