use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::Gender;

/// Key prefix for staged group batches. Individual flows would use a
/// different prefix so the two batch shapes never collide behind one key
/// space.
pub const GROUP_KEY_PREFIX: &str = "group:inscription";

/// Generate a globally unique opaque cache key for a staged batch.
pub fn staged_key() -> String {
    format!("{}:{}", GROUP_KEY_PREFIX, Uuid::new_v4())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// A validated, not-yet-committed set of inscription rows parked behind an
/// opaque key.
///
/// Read-only until consumed; destroyed from both staged stores exactly once,
/// either by a successful commit or by expiry detection on the next read.
/// Never partially committed.
pub struct StagedBatch {
    pub cache_key: String,
    /// Account that staged the batch. Ownership is enforced on every read.
    pub owner_id: Uuid,
    pub event_id: Uuid,
    pub responsible: Responsible,
    pub items: Vec<StagedItem>,
    /// Sum of the items' unit values, precomputed at staging time.
    pub total: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// One normalized batch row: the free-text inscription-type label has been
/// resolved to an identifier and price at staging time.
pub struct StagedItem {
    pub name: String,
    pub birth_date: NaiveDate,
    pub gender: Gender,
    pub inscription_type_id: Uuid,
    pub inscription_type_label: String,
    pub unit_value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Contact details of the person answering for the batch.
pub struct Responsible {
    pub name: String,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Durable staging-store row. The payload is the JSON-serialized
/// [`StagedBatch`]; `expires_at` is the authoritative expiry for the key.
pub struct StagedRecord {
    pub key: String,
    pub owner_id: Uuid,
    pub payload: String,
    pub expires_at: DateTime<Utc>,
}
