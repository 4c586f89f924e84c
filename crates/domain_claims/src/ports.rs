//! Claim persistence port

use async_trait::async_trait;

use core_kernel::{ClaimId, CoreError};

use crate::claim::Claim;

/// Data-source operations for the claim collection
#[async_trait]
pub trait ClaimPort: Send + Sync {
    /// Conditionally inserts a record; returns `false` when the business ID
    /// is already taken
    async fn insert(&self, record: &Claim) -> Result<bool, CoreError>;

    /// Looks up a record by business ID
    async fn find(&self, id: ClaimId) -> Result<Option<Claim>, CoreError>;

    /// Returns all records
    async fn list(&self) -> Result<Vec<Claim>, CoreError>;

    /// Replaces a record; returns `false` when no record with that ID exists
    async fn update(&self, record: &Claim) -> Result<bool, CoreError>;

    /// Removes a record; returns `false` when no record with that ID exists
    async fn delete(&self, id: ClaimId) -> Result<bool, CoreError>;
}
