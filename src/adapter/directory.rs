use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    domain::{Event, InscriptionType, RegistrationError, StoreError},
    port::EventDirectory,
};

struct EventEntry {
    event: Event,
    types: Vec<InscriptionType>,
}

/// In-memory event directory.
///
/// For production, the lookup and the counter increment map onto the event
/// table; the increment must stay a storage-level atomic update there too.
pub struct InMemoryDirectory {
    events: Arc<RwLock<HashMap<Uuid, EventEntry>>>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self {
            events: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Seed an event with its inscription types. Returns the event id.
    pub async fn register_event(
        &self,
        name: &str,
        responsibles: Vec<String>,
        types: Vec<InscriptionType>,
    ) -> Uuid {
        let event = Event {
            id: Uuid::new_v4(),
            name: name.to_string(),
            participant_count: 0,
            responsibles,
        };
        let id = event.id;

        self.events
            .write()
            .await
            .insert(id, EventEntry { event, types });

        id
    }
}

impl Default for InMemoryDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventDirectory for InMemoryDirectory {
    async fn find_event(&self, event_id: Uuid) -> Result<Option<Event>, RegistrationError> {
        Ok(self
            .events
            .read()
            .await
            .get(&event_id)
            .map(|entry| entry.event.clone()))
    }

    async fn inscription_types(
        &self,
        event_id: Uuid,
    ) -> Result<Vec<InscriptionType>, RegistrationError> {
        Ok(self
            .events
            .read()
            .await
            .get(&event_id)
            .map(|entry| entry.types.clone())
            .unwrap_or_default())
    }

    async fn increment_participant_count(
        &self,
        event_id: Uuid,
        by: u32,
    ) -> Result<(), RegistrationError> {
        let mut events = self.events.write().await;
        let entry = events.get_mut(&event_id).ok_or_else(|| {
            RegistrationError::Store(StoreError::Entity(format!("unknown event {}", event_id)))
        })?;

        entry.event.participant_count += by;
        Ok(())
    }
}
