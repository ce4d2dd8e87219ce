use uuid::Uuid;

/// Remaining balance of one inscription, in the order the caller wants it
/// filled.
#[derive(Debug, Clone)]
pub struct Debt {
    pub inscription_id: Uuid,
    pub outstanding: f64,
}

/// The share of a payment one debt receives.
#[derive(Debug, Clone, PartialEq)]
pub struct Share {
    pub inscription_id: Uuid,
    pub value: f64,
}

/// Deterministic greedy fill across caller-ordered debts.
///
/// Earlier entries are fully satisfied before later ones receive anything:
/// each debt gets `min(outstanding, remaining)`, zero shares are skipped,
/// and the walk stops once the amount is exhausted. No share ever exceeds
/// its debt's outstanding balance and the shares never sum past `amount`.
pub fn greedy_fill(debts: &[Debt], amount: f64) -> Vec<Share> {
    let mut remaining = amount;
    let mut shares = Vec::with_capacity(debts.len());

    for debt in debts {
        if remaining <= 0.0 {
            break;
        }
        let value = debt.outstanding.min(remaining);
        if value <= 0.0 {
            continue;
        }
        shares.push(Share {
            inscription_id: debt.inscription_id,
            value,
        });
        remaining -= value;
    }

    shares
}
