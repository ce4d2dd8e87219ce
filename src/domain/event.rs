use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An event people register for. The core only reads its inscription types,
/// notifies its responsibles and bumps its participant counter; full event
/// CRUD lives outside.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub name: String,
    pub participant_count: u32,
    /// Contacts notified about new inscriptions and payments.
    pub responsibles: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InscriptionType {
    pub id: Uuid,
    pub description: String,
    pub unit_value: f64,
}

impl InscriptionType {
    pub fn new(description: impl Into<String>, unit_value: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            unit_value,
        }
    }
}

/// Reserved type labels that route an inscription to manual review before
/// payment is allowed.
pub const RESERVED_REVIEW_LABELS: [&str; 2] = ["exempt", "service"];

/// Whether an inscription-type label falls in the reserved exempt/service
/// category (trimmed, case-insensitive match).
pub fn requires_review(label: &str) -> bool {
    RESERVED_REVIEW_LABELS
        .iter()
        .any(|reserved| label.trim().eq_ignore_ascii_case(reserved))
}
