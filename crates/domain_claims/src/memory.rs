//! In-memory claim port

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use core_kernel::{ClaimId, CoreError};

use crate::claim::Claim;
use crate::ports::ClaimPort;

/// Map-backed implementation of [`ClaimPort`]
#[derive(Debug, Default)]
pub struct MemoryClaimPort {
    records: RwLock<BTreeMap<i64, Claim>>,
}

impl MemoryClaimPort {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClaimPort for MemoryClaimPort {
    async fn insert(&self, record: &Claim) -> Result<bool, CoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| CoreError::storage("claim lock poisoned"))?;
        let key = record.claim_id.value();
        if records.contains_key(&key) {
            return Ok(false);
        }
        records.insert(key, record.clone());
        Ok(true)
    }

    async fn find(&self, id: ClaimId) -> Result<Option<Claim>, CoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| CoreError::storage("claim lock poisoned"))?;
        Ok(records.get(&id.value()).cloned())
    }

    async fn list(&self) -> Result<Vec<Claim>, CoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| CoreError::storage("claim lock poisoned"))?;
        Ok(records.values().cloned().collect())
    }

    async fn update(&self, record: &Claim) -> Result<bool, CoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| CoreError::storage("claim lock poisoned"))?;
        let key = record.claim_id.value();
        if !records.contains_key(&key) {
            return Ok(false);
        }
        records.insert(key, record.clone());
        Ok(true)
    }

    async fn delete(&self, id: ClaimId) -> Result<bool, CoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| CoreError::storage("claim lock poisoned"))?;
        Ok(records.remove(&id.value()).is_some())
    }
}
