use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{requires_review, Gender, StagedBatch, StagedItem};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InscriptionStatus {
    /// Blocked for payment until manually released.
    UnderReview,
    Pending,
    Paid,
    Cancelled,
    Expired,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// A committed group registration. Created once by the commit engine;
/// `total_paid` is the only field the payment side ever mutates, and it is
/// monotonically non-decreasing.
pub struct Inscription {
    pub id: Uuid,
    pub event_id: Uuid,
    /// Owning account; None for guest flows.
    pub account_id: Option<Uuid>,
    pub responsible: String,
    pub phone: String,
    pub email: String,
    /// Immutable once set.
    pub total_value: f64,
    /// Running paid counter. 0 <= total_paid <= total_value always.
    pub total_paid: f64,
    pub status: InscriptionStatus,
    /// The staged cache key this inscription was committed from. Doubles as
    /// the commit deduplication key.
    pub staging_key: String,
    pub created_at: DateTime<Utc>,
}

impl Inscription {
    /// Build the inscription a staged batch materializes into.
    ///
    /// Any item in the reserved exempt/service category puts the whole
    /// inscription under review; otherwise it is directly payable.
    pub fn from_staged(batch: &StagedBatch) -> Self {
        let status = if batch
            .items
            .iter()
            .any(|item| requires_review(&item.inscription_type_label))
        {
            InscriptionStatus::UnderReview
        } else {
            InscriptionStatus::Pending
        };

        Self {
            id: Uuid::new_v4(),
            event_id: batch.event_id,
            account_id: Some(batch.owner_id),
            responsible: batch.responsible.name.clone(),
            phone: batch.responsible.phone.clone(),
            email: batch.responsible.email.clone(),
            total_value: batch.total,
            total_paid: 0.0,
            status,
            staging_key: batch.cache_key.clone(),
            created_at: Utc::now(),
        }
    }

    /// Amount still owed.
    pub fn debt(&self) -> f64 {
        self.total_value - self.total_paid
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// One registered person. Never created independently of an inscription.
pub struct Participant {
    pub id: Uuid,
    pub inscription_id: Uuid,
    pub type_inscription_id: Uuid,
    pub name: String,
    pub birth_date: NaiveDate,
    pub gender: Gender,
}

impl Participant {
    pub fn from_item(inscription_id: Uuid, item: &StagedItem) -> Self {
        Self {
            id: Uuid::new_v4(),
            inscription_id,
            type_inscription_id: item.inscription_type_id,
            name: item.name.clone(),
            birth_date: item.birth_date,
            gender: item.gender,
        }
    }
}
