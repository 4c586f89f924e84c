//! Policy persistence port

use async_trait::async_trait;

use core_kernel::{CoreError, PolicyId};

use crate::policy::Policy;

/// Data-source operations for the policy collection
#[async_trait]
pub trait PolicyPort: Send + Sync {
    /// Conditionally inserts a record; returns `false` when the business ID
    /// is already taken
    async fn insert(&self, record: &Policy) -> Result<bool, CoreError>;

    /// Looks up a record by business ID
    async fn find(&self, id: PolicyId) -> Result<Option<Policy>, CoreError>;

    /// Returns all records
    async fn list(&self) -> Result<Vec<Policy>, CoreError>;

    /// Replaces a record; returns `false` when no record with that ID exists
    async fn update(&self, record: &Policy) -> Result<bool, CoreError>;

    /// Removes a record; returns `false` when no record with that ID exists
    async fn delete(&self, id: PolicyId) -> Result<bool, CoreError>;
}
