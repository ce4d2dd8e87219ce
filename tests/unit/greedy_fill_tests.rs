use inscription::domain::{greedy_fill, Debt};
use uuid::Uuid;

fn debt(outstanding: f64) -> Debt {
    Debt {
        inscription_id: Uuid::new_v4(),
        outstanding,
    }
}

#[test]
fn test_fills_earlier_debts_before_later_ones() {
    let debts = vec![debt(100.0), debt(50.0)];

    let shares = greedy_fill(&debts, 120.0);

    assert_eq!(shares.len(), 2);
    assert_eq!(shares[0].inscription_id, debts[0].inscription_id);
    assert_eq!(shares[0].value, 100.0);
    assert_eq!(shares[1].inscription_id, debts[1].inscription_id);
    assert_eq!(shares[1].value, 20.0);
}

#[test]
fn test_stops_once_the_amount_is_exhausted() {
    let debts = vec![debt(100.0), debt(50.0), debt(75.0)];

    let shares = greedy_fill(&debts, 100.0);

    assert_eq!(shares.len(), 1);
    assert_eq!(shares[0].value, 100.0);
}

#[test]
fn test_skips_zero_debts() {
    let debts = vec![debt(0.0), debt(50.0)];

    let shares = greedy_fill(&debts, 30.0);

    assert_eq!(shares.len(), 1);
    assert_eq!(shares[0].inscription_id, debts[1].inscription_id);
    assert_eq!(shares[0].value, 30.0);
}

#[test]
fn test_no_share_exceeds_its_debt() {
    let debts = vec![debt(10.0), debt(20.0), debt(30.0)];

    let shares = greedy_fill(&debts, 60.0);

    for (share, debt) in shares.iter().zip(debts.iter()) {
        assert!(share.value <= debt.outstanding);
    }
    let sum: f64 = shares.iter().map(|s| s.value).sum();
    assert_eq!(sum, 60.0);
}

#[test]
fn test_empty_debts_produce_no_shares() {
    assert!(greedy_fill(&[], 100.0).is_empty());
}

#[test]
fn test_amount_matching_total_debt_fills_everything() {
    let debts = vec![debt(40.0), debt(60.0)];

    let shares = greedy_fill(&debts, 100.0);

    assert_eq!(shares.len(), 2);
    assert_eq!(shares[0].value, 40.0);
    assert_eq!(shares[1].value, 60.0);
}

#[test]
fn test_order_determines_who_is_satisfied() {
    let a = debt(100.0);
    let b = debt(100.0);

    let forward = greedy_fill(&[a.clone(), b.clone()], 100.0);
    let backward = greedy_fill(&[b.clone(), a.clone()], 100.0);

    assert_eq!(forward[0].inscription_id, a.inscription_id);
    assert_eq!(backward[0].inscription_id, b.inscription_id);
    assert_eq!(forward.len(), 1);
    assert_eq!(backward.len(), 1);
}
