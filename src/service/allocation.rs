use std::sync::Arc;

use uuid::Uuid;

use crate::{
    domain::{
        greedy_fill, Debt, EnginePolicy, InscriptionStatus, Notification, Payer, Payment,
        PaymentAllocation, PaymentMethod, PaymentStatus, RegistrationError, RuleError,
    },
    port::{InscriptionStore, NotificationSink, PaymentLedger},
};

/// Receipt for a registered payment.
#[derive(Debug, Clone)]
pub struct PaymentReceipt {
    pub payment_id: Uuid,
    pub total_value: f64,
    pub status: PaymentStatus,
}

/// Distributes a single payment across outstanding inscription debts and
/// persists the result as one unit of work.
#[derive(Clone)]
pub struct PaymentAllocationEngine {
    inscriptions: Arc<dyn InscriptionStore>,
    ledger: Arc<dyn PaymentLedger>,
    notifier: Arc<dyn NotificationSink>,
    policy: EnginePolicy,
}

impl PaymentAllocationEngine {
    pub fn new(
        inscriptions: Arc<dyn InscriptionStore>,
        ledger: Arc<dyn PaymentLedger>,
        notifier: Arc<dyn NotificationSink>,
        policy: EnginePolicy,
    ) -> Self {
        Self {
            inscriptions,
            ledger,
            notifier,
            policy,
        }
    }

    /// Register a payment against the referenced inscriptions, in the
    /// caller-supplied order.
    ///
    /// Everything is rejected before any write: missing proof, non-positive
    /// amounts, unknown inscription ids (all of them reported), inscriptions
    /// still under review, and a candidate value exceeding the aggregate
    /// outstanding debt. The split itself is the pure greedy fill; the
    /// ledger then applies payment, allocations and paid-total increments
    /// atomically, re-checking each share against the live debt so two
    /// racing allocations cannot overshoot a debt.
    pub async fn allocate(
        &self,
        payer: Payer,
        event_id: Uuid,
        candidate_value: f64,
        proof_of_payment: &str,
        method: PaymentMethod,
        inscription_ids: &[Uuid],
    ) -> Result<PaymentReceipt, RegistrationError> {
        if proof_of_payment.trim().is_empty() {
            return Err(RegistrationError::Rule(RuleError::MissingProofOfPayment));
        }
        if candidate_value <= 0.0 {
            return Err(RegistrationError::Rule(RuleError::InvalidAmount));
        }

        let mut inscriptions = Vec::with_capacity(inscription_ids.len());
        let mut missing = Vec::new();
        for id in inscription_ids {
            match self.inscriptions.find(*id).await? {
                Some(inscription) => inscriptions.push(inscription),
                None => missing.push(*id),
            }
        }
        if !missing.is_empty() {
            return Err(RegistrationError::Rule(RuleError::UnknownInscriptions(
                missing,
            )));
        }

        if let Some(blocked) = inscriptions
            .iter()
            .find(|i| i.status == InscriptionStatus::UnderReview)
        {
            return Err(RegistrationError::Rule(RuleError::NotReleasedForPayment(
                blocked.id,
            )));
        }

        let debts: Vec<Debt> = inscriptions
            .iter()
            .map(|i| Debt {
                inscription_id: i.id,
                outstanding: i.debt(),
            })
            .collect();
        let outstanding: f64 = debts.iter().map(|d| d.outstanding).sum();
        if candidate_value > outstanding {
            return Err(RegistrationError::Rule(RuleError::Overpayment {
                candidate: candidate_value,
                outstanding,
            }));
        }

        let shares = greedy_fill(&debts, candidate_value);

        let payment = Payment::new(
            event_id,
            payer,
            candidate_value,
            method,
            proof_of_payment.to_string(),
        );
        let allocations: Vec<PaymentAllocation> = shares
            .iter()
            .map(|share| PaymentAllocation::new(payment.id, share.inscription_id, share.value))
            .collect();

        let payment = self.ledger.record(payment, allocations).await?;

        tracing::info!(
            payment = %payment.id,
            event = %event_id,
            total = payment.total_value,
            inscriptions = inscription_ids.len(),
            "payment allocated"
        );

        self.dispatch_notification(&payment, inscription_ids);

        Ok(PaymentReceipt {
            payment_id: payment.id,
            total_value: payment.total_value,
            status: payment.status,
        })
    }

    fn dispatch_notification(&self, payment: &Payment, inscription_ids: &[Uuid]) {
        let notifier = self.notifier.clone();
        let timeout = self.policy.notify_timeout;
        let event_id = payment.event_id;
        let notification = Notification::PaymentRegistered {
            payment_id: payment.id,
            event_id,
            total_value: payment.total_value,
            inscription_ids: inscription_ids.to_vec(),
        };

        tokio::spawn(async move {
            match tokio::time::timeout(timeout, notifier.notify(event_id, notification)).await {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    tracing::warn!(%event_id, error = %e, "payment notification failed")
                }
                Err(_) => tracing::warn!(%event_id, "payment notification timed out"),
            }
        });
    }
}
