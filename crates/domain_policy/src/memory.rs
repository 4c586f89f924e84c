//! In-memory policy port

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use core_kernel::{CoreError, PolicyId};

use crate::policy::Policy;
use crate::ports::PolicyPort;

/// Map-backed implementation of [`PolicyPort`]
#[derive(Debug, Default)]
pub struct MemoryPolicyPort {
    records: RwLock<BTreeMap<i64, Policy>>,
}

impl MemoryPolicyPort {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PolicyPort for MemoryPolicyPort {
    async fn insert(&self, record: &Policy) -> Result<bool, CoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| CoreError::storage("policy lock poisoned"))?;
        let key = record.policy_id.value();
        if records.contains_key(&key) {
            return Ok(false);
        }
        records.insert(key, record.clone());
        Ok(true)
    }

    async fn find(&self, id: PolicyId) -> Result<Option<Policy>, CoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| CoreError::storage("policy lock poisoned"))?;
        Ok(records.get(&id.value()).cloned())
    }

    async fn list(&self) -> Result<Vec<Policy>, CoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| CoreError::storage("policy lock poisoned"))?;
        Ok(records.values().cloned().collect())
    }

    async fn update(&self, record: &Policy) -> Result<bool, CoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| CoreError::storage("policy lock poisoned"))?;
        let key = record.policy_id.value();
        if !records.contains_key(&key) {
            return Ok(false);
        }
        records.insert(key, record.clone());
        Ok(true)
    }

    async fn delete(&self, id: PolicyId) -> Result<bool, CoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| CoreError::storage("policy lock poisoned"))?;
        Ok(records.remove(&id.value()).is_some())
    }
}
