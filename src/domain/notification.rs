use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
/// Best-effort message dispatched to an event's responsibles after a commit
/// or a registered payment. Delivery failures never reach the caller.
pub enum Notification {
    InscriptionConfirmed {
        inscription_id: Uuid,
        event_id: Uuid,
        responsible: String,
        participants: u32,
        total_value: f64,
    },
    PaymentRegistered {
        payment_id: Uuid,
        event_id: Uuid,
        total_value: f64,
        inscription_ids: Vec<Uuid>,
    },
}
