use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Payment, PaymentAllocation, RegistrationError};

/// Durable store for payments and their allocations.
#[async_trait]
pub trait PaymentLedger: Send + Sync {
    /// Persist a payment, its allocations and the per-inscription paid-total
    /// increments as one all-or-nothing unit.
    ///
    /// Every share must be re-checked against the inscription's live debt
    /// inside the same critical section; a share that no longer fits rejects
    /// the whole unit with `DebtExceeded` and nothing is written. This is
    /// what keeps two racing allocations from both reading a stale paid
    /// total and overshooting.
    async fn record(
        &self,
        payment: Payment,
        allocations: Vec<PaymentAllocation>,
    ) -> Result<Payment, RegistrationError>;

    async fn find_payment(&self, id: Uuid) -> Result<Option<Payment>, RegistrationError>;

    /// All allocations applied to one inscription, past and present.
    async fn find_allocations(
        &self,
        inscription_id: Uuid,
    ) -> Result<Vec<PaymentAllocation>, RegistrationError>;
}
