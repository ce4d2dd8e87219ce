use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    domain::{Notification, RegistrationError, StoreError},
    port::NotificationSink,
};

/// Sink that only logs. Stands in for the email/queue sink in local runs.
pub struct LoggingNotifier;

#[async_trait]
impl NotificationSink for LoggingNotifier {
    async fn notify(
        &self,
        event_id: Uuid,
        notification: Notification,
    ) -> Result<(), RegistrationError> {
        tracing::info!(%event_id, ?notification, "notification dispatched");
        Ok(())
    }
}

/// Recording sink for tests: captures every dispatched notification and can
/// be flipped into a failing mode.
pub struct RecordingNotifier {
    sent: Arc<RwLock<Vec<(Uuid, Notification)>>>,
    failing: AtomicBool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self {
            sent: Arc::new(RwLock::new(Vec::new())),
            failing: AtomicBool::new(false),
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub async fn sent(&self) -> Vec<(Uuid, Notification)> {
        self.sent.read().await.clone()
    }
}

impl Default for RecordingNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationSink for RecordingNotifier {
    async fn notify(
        &self,
        event_id: Uuid,
        notification: Notification,
    ) -> Result<(), RegistrationError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(RegistrationError::Store(StoreError::Entity(
                "notification sink unavailable".to_string(),
            )));
        }

        self.sent.write().await.push((event_id, notification));
        Ok(())
    }
}
