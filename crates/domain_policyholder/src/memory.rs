//! In-memory policyholder port
//!
//! Mock adapter for tests: the same contract as the PostgreSQL repository,
//! backed by a map guarded with a read-write lock.

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use core_kernel::{CoreError, PolicyholderId};

use crate::policyholder::Policyholder;
use crate::ports::PolicyholderPort;

/// Map-backed implementation of [`PolicyholderPort`]
#[derive(Debug, Default)]
pub struct MemoryPolicyholderPort {
    records: RwLock<BTreeMap<i64, Policyholder>>,
}

impl MemoryPolicyholderPort {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PolicyholderPort for MemoryPolicyholderPort {
    async fn insert(&self, record: &Policyholder) -> Result<bool, CoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| CoreError::storage("policyholder lock poisoned"))?;
        let key = record.policyholder_id.value();
        if records.contains_key(&key) {
            return Ok(false);
        }
        records.insert(key, record.clone());
        Ok(true)
    }

    async fn find(&self, id: PolicyholderId) -> Result<Option<Policyholder>, CoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| CoreError::storage("policyholder lock poisoned"))?;
        Ok(records.get(&id.value()).cloned())
    }

    async fn list(&self) -> Result<Vec<Policyholder>, CoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| CoreError::storage("policyholder lock poisoned"))?;
        Ok(records.values().cloned().collect())
    }

    async fn update(&self, record: &Policyholder) -> Result<bool, CoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| CoreError::storage("policyholder lock poisoned"))?;
        let key = record.policyholder_id.value();
        if !records.contains_key(&key) {
            return Ok(false);
        }
        records.insert(key, record.clone());
        Ok(true)
    }

    async fn delete(&self, id: PolicyholderId) -> Result<bool, CoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| CoreError::storage("policyholder lock poisoned"))?;
        Ok(records.remove(&id.value()).is_some())
    }
}
