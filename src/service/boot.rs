use std::sync::Arc;

use uuid::Uuid;

use crate::{
    adapter::{
        InMemoryCache, InMemoryDirectory, InMemoryEntityStore, InMemoryStagingStore,
        LoggingNotifier,
    },
    domain::{EnginePolicy, InscriptionType},
    service::{CommitEngine, PaymentAllocationEngine, StagingEngine},
};

/// Wired engine set over shared infrastructure.
pub struct Services {
    pub staging: StagingEngine,
    pub commit: CommitEngine,
    pub allocation: PaymentAllocationEngine,
    pub directory: Arc<InMemoryDirectory>,
    /// Demo event seeded at boot, the target of CSV batches.
    pub demo_event: Uuid,
    /// Demo account acting as the staging owner for CSV batches.
    pub demo_account: Uuid,
}

/// Set up the registration core and return the wired engines.
///
/// This creates all the infrastructure:
/// - InMemoryCache (staged payload fast path)
/// - InMemoryStagingStore (authoritative staged records)
/// - InMemoryEntityStore (inscriptions, participants, payments)
/// - InMemoryDirectory (seeded with a demo event and its inscription types)
///
/// Architecture:
/// - CSV → Orchestrator → StagingEngine → (cache + staging store)
/// - CommitEngine → InMemoryEntityStore, counter via InMemoryDirectory
/// - PaymentAllocationEngine → InMemoryEntityStore ledger
/// - Notifications logged, never awaited by the engines
pub async fn boot() -> Services {
    let cache = Arc::new(InMemoryCache::new());
    let staging_store = Arc::new(InMemoryStagingStore::new());
    let store = Arc::new(InMemoryEntityStore::new());
    let directory = Arc::new(InMemoryDirectory::new());
    let notifier = Arc::new(LoggingNotifier);
    let policy = EnginePolicy::default();

    let demo_event = directory
        .register_event(
            "Annual Meetup",
            vec!["organizers@example.org".to_string()],
            vec![
                InscriptionType::new("Adult", 120.0),
                InscriptionType::new("Child", 60.0),
                InscriptionType::new("Service", 0.0),
            ],
        )
        .await;
    let demo_account = Uuid::new_v4();

    tracing::info!(%demo_event, "registration core initialized");

    Services {
        staging: StagingEngine::new(
            directory.clone(),
            cache.clone(),
            staging_store.clone(),
            policy.clone(),
        ),
        commit: CommitEngine::new(
            cache.clone(),
            staging_store.clone(),
            store.clone(),
            store.clone(),
            directory.clone(),
            notifier.clone(),
            policy.clone(),
        ),
        allocation: PaymentAllocationEngine::new(store.clone(), store, notifier, policy),
        directory,
        demo_event,
        demo_account,
    }
}
