use crate::context::*;
use inscription::domain::{RegistrationError, RowRule};
use inscription::port::{EphemeralCache, InscriptionStore, StagingStore};

#[tokio::test]
async fn test_stage_returns_priced_preview() {
    let ctx = TestContext::new().await;

    let preview = ctx
        .stage_rows(&[
            row(1, "Alice Smith", "01/02/1990", "female", "Adult"),
            row(2, "Bob Smith", "15/06/1988", "male", "Adult"),
            row(3, "Carol Smith", "20/12/2012", "female", "Child"),
        ])
        .await
        .unwrap();

    assert_eq!(preview.items.len(), 3);
    assert_eq!(preview.total, 250.0);

    let computed: f64 = preview.items.iter().map(|i| i.unit_value).sum();
    assert_eq!(preview.total, computed);
}

#[tokio::test]
async fn test_stage_writes_payload_to_both_stores() {
    let ctx = TestContext::new().await;

    let preview = ctx.stage_default().await;

    assert!(ctx
        .cache
        .get(&preview.cache_key)
        .await
        .unwrap()
        .is_some());
    assert!(ctx
        .staging_store
        .find_by_key(&preview.cache_key)
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
async fn test_invalid_rows_reported_with_line_numbers() {
    let ctx = TestContext::new().await;

    let result = ctx
        .stage_rows(&[
            row(1, "Alice Smith", "01/02/1990", "female", "Adult"),
            row(2, "Cher", "01/02/1990", "female", "Adult"),
            row(3, "Dana Smith", "31/02/2000", "female", "Adult"),
            row(4, "Erik Smith", "01/02/1990", "unknown", "Adult"),
            row(5, "Fay Smith", "01/02/1990", "female", "Senior"),
        ])
        .await;

    let Err(RegistrationError::Validation(errors)) = result else {
        panic!("Expected a validation report");
    };

    let lines: Vec<u32> = errors.iter().map(|e| e.line).collect();
    assert_eq!(lines, vec![2, 3, 4, 5]);

    assert!(matches!(errors[0].reason, RowRule::IncompleteName));
    assert!(matches!(errors[1].reason, RowRule::InvalidBirthDate(_)));
    assert!(matches!(errors[2].reason, RowRule::InvalidGender(_)));
    assert!(matches!(
        errors[3].reason,
        RowRule::UnknownInscriptionType(_)
    ));
}

#[tokio::test]
async fn test_stage_is_all_or_nothing() {
    let ctx = TestContext::new().await;

    let result = ctx
        .stage_rows(&[
            row(1, "Alice Smith", "01/02/1990", "female", "Adult"),
            row(2, "Cher", "01/02/1990", "female", "Adult"),
        ])
        .await;

    assert!(result.is_err());
    // a single bad row keeps the whole batch out of both stores
    assert!(ctx.staging_store.is_empty().await);
    assert!(ctx.cache.is_empty().await);
}

#[tokio::test]
async fn test_type_label_matches_case_insensitively_and_trimmed() {
    let ctx = TestContext::new().await;

    let preview = ctx
        .stage_rows(&[row(1, "Alice Smith", "01/02/1990", "female", "  aDuLt  ")])
        .await
        .unwrap();

    assert_eq!(preview.items[0].inscription_type_label, "Adult");
    assert_eq!(preview.items[0].unit_value, 100.0);
}

#[tokio::test]
async fn test_staged_total_reappears_on_commit() {
    let ctx = TestContext::new().await;

    let preview = ctx.stage_default().await;
    let receipt = ctx.commit_key(&preview.cache_key).await.unwrap();

    let inscription = ctx
        .store
        .find(receipt.inscription_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(inscription.total_value, preview.total);
}

#[tokio::test]
async fn test_staged_keys_are_unique_and_prefixed() {
    let ctx = TestContext::new().await;

    let first = ctx.stage_default().await;
    let second = ctx.stage_default().await;

    assert_ne!(first.cache_key, second.cache_key);
    assert!(first.cache_key.starts_with("group:inscription:"));
}
