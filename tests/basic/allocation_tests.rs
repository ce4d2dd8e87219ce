use crate::context::*;
use inscription::domain::{
    Notification, PaymentStatus, RegistrationError, RuleError,
};
use inscription::port::{InscriptionStore, PaymentLedger};
use uuid::Uuid;

#[tokio::test]
async fn test_greedy_fill_satisfies_earlier_debts_first() {
    let ctx = TestContext::new().await;

    // A owes 100, B owes 50
    let a = ctx.committed_inscription(1).await;
    let b = ctx
        .stage_rows(&[row(1, "Carol Smith", "20/12/2012", "female", "Child")])
        .await
        .unwrap();
    let b = ctx.commit_key(&b.cache_key).await.unwrap().inscription_id;

    let receipt = ctx.pay(120.0, &[a, b]).await.unwrap();

    assert_eq!(receipt.total_value, 120.0);
    assert_eq!(receipt.status, PaymentStatus::Received);
    assert_eq!(ctx.total_paid(a).await, 100.0);
    assert_eq!(ctx.total_paid(b).await, 20.0);

    let payment = ctx
        .store
        .find_payment(receipt.payment_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(payment.total_value, 120.0);
}

#[tokio::test]
async fn test_overpayment_is_rejected_without_writes() {
    let ctx = TestContext::new().await;

    let a = ctx.committed_inscription(1).await;
    let b = ctx
        .stage_rows(&[row(1, "Carol Smith", "20/12/2012", "female", "Child")])
        .await
        .unwrap();
    let b = ctx.commit_key(&b.cache_key).await.unwrap().inscription_id;

    let result = ctx.pay(200.0, &[a, b]).await;
    assert!(matches!(
        result,
        Err(RegistrationError::Rule(RuleError::Overpayment { .. }))
    ));

    assert_eq!(ctx.total_paid(a).await, 0.0);
    assert_eq!(ctx.total_paid(b).await, 0.0);
    assert_eq!(ctx.store.payment_count().await, 0);
}

#[tokio::test]
async fn test_trailing_inscriptions_receive_nothing_once_exhausted() {
    let ctx = TestContext::new().await;

    let a = ctx.committed_inscription(1).await;
    let b = ctx.committed_inscription(1).await;

    ctx.pay(100.0, &[a, b]).await.unwrap();

    assert_eq!(ctx.total_paid(a).await, 100.0);
    assert_eq!(ctx.total_paid(b).await, 0.0);
    // no zero-valued allocation row is ever written
    assert!(ctx
        .store
        .find_allocations(b)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_exact_payment_settles_the_debt() {
    let ctx = TestContext::new().await;

    let a = ctx.committed_inscription(2).await;
    ctx.pay(200.0, &[a]).await.unwrap();

    assert_eq!(ctx.total_paid(a).await, 200.0);
    assert_eq!(ctx.allocated_sum(a).await, 200.0);
}

#[tokio::test]
async fn test_successive_payments_accumulate_up_to_the_debt() {
    let ctx = TestContext::new().await;

    let a = ctx.committed_inscription(1).await;

    ctx.pay(60.0, &[a]).await.unwrap();
    ctx.pay(40.0, &[a]).await.unwrap();

    assert_eq!(ctx.total_paid(a).await, 100.0);
    assert_eq!(ctx.allocated_sum(a).await, 100.0);

    // fully settled: any further payment is an overpayment
    let result = ctx.pay(1.0, &[a]).await;
    assert!(matches!(
        result,
        Err(RegistrationError::Rule(RuleError::Overpayment { .. }))
    ));
}

#[tokio::test]
async fn test_under_review_inscription_is_not_payable() {
    let ctx = TestContext::new().await;

    let preview = ctx
        .stage_rows(&[row(1, "Pastor Jones", "03/03/1970", "male", "Service")])
        .await
        .unwrap();
    let blocked = ctx
        .commit_key(&preview.cache_key)
        .await
        .unwrap()
        .inscription_id;

    let result = ctx.pay(10.0, &[blocked]).await;
    assert!(matches!(
        result,
        Err(RegistrationError::Rule(RuleError::NotReleasedForPayment(id))) if id == blocked
    ));
}

#[tokio::test]
async fn test_unknown_inscription_ids_are_all_reported() {
    let ctx = TestContext::new().await;

    let a = ctx.committed_inscription(1).await;
    let ghost1 = Uuid::new_v4();
    let ghost2 = Uuid::new_v4();

    let result = ctx.pay(50.0, &[a, ghost1, ghost2]).await;
    let Err(RegistrationError::Rule(RuleError::UnknownInscriptions(missing))) = result else {
        panic!("Expected UnknownInscriptions");
    };

    assert_eq!(missing, vec![ghost1, ghost2]);
    assert_eq!(ctx.total_paid(a).await, 0.0);
}

#[tokio::test]
async fn test_missing_proof_of_payment_is_rejected() {
    let ctx = TestContext::new().await;

    let a = ctx.committed_inscription(1).await;
    let result = ctx
        .allocation
        .allocate(
            inscription::domain::Payer::Account(ctx.owner_id),
            ctx.event_id,
            50.0,
            "   ",
            inscription::domain::PaymentMethod::BankTransfer,
            &[a],
        )
        .await;

    assert!(matches!(
        result,
        Err(RegistrationError::Rule(RuleError::MissingProofOfPayment))
    ));
    assert_eq!(ctx.store.payment_count().await, 0);
}

#[tokio::test]
async fn test_non_positive_amount_is_rejected() {
    let ctx = TestContext::new().await;

    let a = ctx.committed_inscription(1).await;
    let result = ctx.pay(0.0, &[a]).await;

    assert!(matches!(
        result,
        Err(RegistrationError::Rule(RuleError::InvalidAmount))
    ));
}

#[tokio::test]
async fn test_allocation_sums_always_match_total_paid() {
    let ctx = TestContext::new().await;

    let a = ctx.committed_inscription(2).await; // debt 200
    let b = ctx.committed_inscription(1).await; // debt 100

    ctx.pay(150.0, &[a, b]).await.unwrap();
    ctx.pay(90.0, &[b, a]).await.unwrap();

    for id in [a, b] {
        let inscription = ctx.store.find(id).await.unwrap().unwrap();
        assert!(inscription.total_paid <= inscription.total_value);
        assert_eq!(ctx.allocated_sum(id).await, inscription.total_paid);
    }

    // 150 fills A; 90 goes to B first (debt 100), nothing left for A's 50
    assert_eq!(ctx.total_paid(a).await, 150.0);
    assert_eq!(ctx.total_paid(b).await, 90.0);
}

#[tokio::test]
async fn test_payment_notifies_event_responsibles() {
    let ctx = TestContext::new().await;

    let a = ctx.committed_inscription(1).await;
    let receipt = ctx.pay(100.0, &[a]).await.unwrap();

    tokio::time::sleep(std::time::Duration::from_millis(50)).await;

    let sent = ctx.notifier.sent().await;
    let payment_notes: Vec<_> = sent
        .iter()
        .filter(|(_, n)| matches!(n, Notification::PaymentRegistered { .. }))
        .collect();
    assert_eq!(payment_notes.len(), 1);
    match &payment_notes[0].1 {
        Notification::PaymentRegistered {
            payment_id,
            total_value,
            inscription_ids,
            ..
        } => {
            assert_eq!(*payment_id, receipt.payment_id);
            assert_eq!(*total_value, 100.0);
            assert_eq!(inscription_ids, &vec![a]);
        }
        other => panic!("Expected PaymentRegistered, got {:?}", other),
    }
}
