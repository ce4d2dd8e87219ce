use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Event, InscriptionType, RegistrationError};

/// Read and counter access to the events the platform registers people for.
#[async_trait]
pub trait EventDirectory: Send + Sync {
    async fn find_event(&self, event_id: Uuid) -> Result<Option<Event>, RegistrationError>;

    /// Inscription types registered for an event, used to resolve a
    /// free-text label to an identifier and price.
    async fn inscription_types(
        &self,
        event_id: Uuid,
    ) -> Result<Vec<InscriptionType>, RegistrationError>;

    /// Atomically bump the event's participant counter.
    async fn increment_participant_count(
        &self,
        event_id: Uuid,
        by: u32,
    ) -> Result<(), RegistrationError>;
}
