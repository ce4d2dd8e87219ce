use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Payer {
    Account(Uuid),
    Guest { name: String, email: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Received,
    Confirmed,
    Refunded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    BankTransfer,
    Card,
    Cash,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// One registered payment. Immutable after creation except status
/// transitions, which live outside this core.
pub struct Payment {
    pub id: Uuid,
    pub event_id: Uuid,
    pub payer: Payer,
    /// The amount actually being registered as paid.
    pub total_value: f64,
    pub status: PaymentStatus,
    pub method: PaymentMethod,
    /// Opaque reference to the uploaded receipt.
    pub proof_of_payment: String,
    pub created_at: DateTime<Utc>,
}

impl Payment {
    pub fn new(
        event_id: Uuid,
        payer: Payer,
        total_value: f64,
        method: PaymentMethod,
        proof_of_payment: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            event_id,
            payer,
            total_value,
            status: PaymentStatus::Received,
            method,
            proof_of_payment,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// The portion of one payment applied to one inscription's debt. Created in
/// a batch with its payment, immutable thereafter.
pub struct PaymentAllocation {
    pub id: Uuid,
    pub payment_id: Uuid,
    pub inscription_id: Uuid,
    pub value: f64,
}

impl PaymentAllocation {
    pub fn new(payment_id: Uuid, inscription_id: Uuid, value: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            payment_id,
            inscription_id,
            value,
        }
    }
}
