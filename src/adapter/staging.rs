use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    domain::{RegistrationError, StagedRecord},
    port::StagingStore,
};

/// In-memory staging record store.
///
/// For production, use a database-backed implementation; this adapter keeps
/// the same contract: records outlive cache eviction and are only removed by
/// an explicit delete.
pub struct InMemoryStagingStore {
    records: Arc<RwLock<HashMap<String, StagedRecord>>>,
}

impl InMemoryStagingStore {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

impl Default for InMemoryStagingStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StagingStore for InMemoryStagingStore {
    async fn create(&self, record: StagedRecord) -> Result<(), RegistrationError> {
        self.records
            .write()
            .await
            .insert(record.key.clone(), record);
        Ok(())
    }

    async fn find_by_key(&self, key: &str) -> Result<Option<StagedRecord>, RegistrationError> {
        Ok(self.records.read().await.get(key).cloned())
    }

    async fn delete_by_key(&self, key: &str) -> Result<(), RegistrationError> {
        self.records.write().await.remove(key);
        Ok(())
    }
}
