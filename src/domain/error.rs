use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Reason a single batch row was rejected.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum RowRule {
    #[error("Name must contain at least a first and a last name")]
    IncompleteName,
    #[error("Birth date '{0}' is not a valid date (expected DD/MM/YYYY)")]
    InvalidBirthDate(String),
    #[error("Gender '{0}' is not recognized")]
    InvalidGender(String),
    #[error("Inscription type '{0}' does not exist for this event")]
    UnknownInscriptionType(String),
}

/// A rejected batch row, pointing back at the source line it came from.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
#[error("line {line}: {reason}")]
pub struct RowError {
    pub line: u32,
    pub reason: RowRule,
}

#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum RuleError {
    #[error("Staged batch not found or expired")]
    StagedBatchNotFound,
    #[error("Staged batch has expired")]
    StagedBatchExpired,
    #[error("Staged batch belongs to another account")]
    AccessDenied,
    #[error("Invalid inscription id(s): {0:?}")]
    UnknownInscriptions(Vec<Uuid>),
    #[error("Inscription {0} is not released for payment")]
    NotReleasedForPayment(Uuid),
    #[error("Overpayment not allowed: {candidate:.2} exceeds outstanding debt {outstanding:.2}")]
    Overpayment { candidate: f64, outstanding: f64 },
    #[error("Allocation exceeds the remaining debt of inscription {0}")]
    DebtExceeded(Uuid),
    #[error("Proof of payment is required")]
    MissingProofOfPayment,
    #[error("Invalid amount (must be positive)")]
    InvalidAmount,
}

/// Infrastructure failures. Not retried by the core; an outer retry/backoff
/// policy decides what to do with them.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum StoreError {
    #[error("Cache error: {0}")]
    Cache(String),
    #[error("Staging store error: {0}")]
    Staging(String),
    #[error("Entity store error: {0}")]
    Entity(String),
    #[error("Corrupt staged payload: {0}")]
    CorruptPayload(String),
}

#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum RegistrationError {
    /// Line-indexed batch validation report; never partially applied.
    Validation(Vec<RowError>),
    Rule(RuleError),
    Store(StoreError),
}

impl Display for RegistrationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistrationError::Validation(errors) => {
                write!(f, "{} row(s) failed validation", errors.len())
            }
            RegistrationError::Rule(e) => e.fmt(f),
            RegistrationError::Store(e) => e.fmt(f),
        }
    }
}
