use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    domain::{
        Inscription, Participant, Payment, PaymentAllocation, RegistrationError, RuleError,
    },
    port::{InscriptionStore, ParticipantStore, PaymentLedger},
};

struct EntityData {
    inscriptions: HashMap<Uuid, Inscription>,
    staging_index: HashMap<String, Uuid>,
    participants: HashMap<Uuid, Vec<Participant>>,
    payments: HashMap<Uuid, Payment>,
    allocations: Vec<PaymentAllocation>,
}

/// In-memory durable entity store: inscriptions, participants, payments and
/// allocations under one lock, so the ledger's conditional unit of work is
/// genuinely atomic. A database adapter would express the same unit as a
/// serializable transaction with conditional updates.
pub struct InMemoryEntityStore {
    data: Arc<RwLock<EntityData>>,
}

impl InMemoryEntityStore {
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(EntityData {
                inscriptions: HashMap::new(),
                staging_index: HashMap::new(),
                participants: HashMap::new(),
                payments: HashMap::new(),
                allocations: Vec::new(),
            })),
        }
    }

    pub async fn inscription_count(&self) -> usize {
        self.data.read().await.inscriptions.len()
    }

    pub async fn payment_count(&self) -> usize {
        self.data.read().await.payments.len()
    }
}

impl Default for InMemoryEntityStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InscriptionStore for InMemoryEntityStore {
    async fn create(&self, inscription: Inscription) -> Result<Inscription, RegistrationError> {
        let mut data = self.data.write().await;

        if let Some(existing_id) = data.staging_index.get(&inscription.staging_key) {
            if let Some(existing) = data.inscriptions.get(existing_id) {
                return Ok(existing.clone());
            }
        }

        data.staging_index
            .insert(inscription.staging_key.clone(), inscription.id);
        data.inscriptions.insert(inscription.id, inscription.clone());

        Ok(inscription)
    }

    async fn find(&self, id: Uuid) -> Result<Option<Inscription>, RegistrationError> {
        Ok(self.data.read().await.inscriptions.get(&id).cloned())
    }

    async fn find_by_staging_key(
        &self,
        key: &str,
    ) -> Result<Option<Inscription>, RegistrationError> {
        let data = self.data.read().await;
        Ok(data
            .staging_index
            .get(key)
            .and_then(|id| data.inscriptions.get(id))
            .cloned())
    }
}

#[async_trait]
impl ParticipantStore for InMemoryEntityStore {
    async fn create_batch(
        &self,
        participants: Vec<Participant>,
    ) -> Result<bool, RegistrationError> {
        let Some(inscription_id) = participants.first().map(|p| p.inscription_id) else {
            return Ok(false);
        };

        let mut data = self.data.write().await;

        // the existence check and the insert share the write lock, so a
        // racing duplicate batch cannot slip in between them
        if data
            .participants
            .get(&inscription_id)
            .is_some_and(|existing| !existing.is_empty())
        {
            return Ok(false);
        }

        data.participants.insert(inscription_id, participants);
        Ok(true)
    }

    async fn find_by_inscription(
        &self,
        inscription_id: Uuid,
    ) -> Result<Vec<Participant>, RegistrationError> {
        Ok(self
            .data
            .read()
            .await
            .participants
            .get(&inscription_id)
            .cloned()
            .unwrap_or_default())
    }
}

#[async_trait]
impl PaymentLedger for InMemoryEntityStore {
    async fn record(
        &self,
        payment: Payment,
        allocations: Vec<PaymentAllocation>,
    ) -> Result<Payment, RegistrationError> {
        let mut data = self.data.write().await;

        // re-check every share against the live debt before touching
        // anything; a racing allocation may have shrunk it since the engine
        // computed the shares
        for allocation in &allocations {
            let inscription = data
                .inscriptions
                .get(&allocation.inscription_id)
                .ok_or_else(|| {
                    RegistrationError::Rule(RuleError::UnknownInscriptions(vec![
                        allocation.inscription_id,
                    ]))
                })?;

            if allocation.value > inscription.debt() {
                return Err(RegistrationError::Rule(RuleError::DebtExceeded(
                    allocation.inscription_id,
                )));
            }
        }

        for allocation in &allocations {
            if let Some(inscription) = data.inscriptions.get_mut(&allocation.inscription_id) {
                inscription.total_paid += allocation.value;
            }
        }
        data.payments.insert(payment.id, payment.clone());
        data.allocations.extend(allocations);

        Ok(payment)
    }

    async fn find_payment(&self, id: Uuid) -> Result<Option<Payment>, RegistrationError> {
        Ok(self.data.read().await.payments.get(&id).cloned())
    }

    async fn find_allocations(
        &self,
        inscription_id: Uuid,
    ) -> Result<Vec<PaymentAllocation>, RegistrationError> {
        Ok(self
            .data
            .read()
            .await
            .allocations
            .iter()
            .filter(|a| a.inscription_id == inscription_id)
            .cloned()
            .collect())
    }
}
