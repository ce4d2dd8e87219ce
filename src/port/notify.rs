use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Notification, RegistrationError};

/// Fire-and-forget sink for messages to an event's responsibles.
///
/// The engines catch and log failures; a broken sink must never fail a
/// commit or an allocation.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn notify(
        &self,
        event_id: Uuid,
        notification: Notification,
    ) -> Result<(), RegistrationError>;
}
