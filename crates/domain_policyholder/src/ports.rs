//! Policyholder persistence port
//!
//! The store receives this trait as an injected handle, so the backing
//! collection can be the PostgreSQL adapter in production or the in-memory
//! port in tests.

use async_trait::async_trait;

use core_kernel::{CoreError, PolicyholderId};

use crate::policyholder::Policyholder;

/// Data-source operations for the policyholder collection
#[async_trait]
pub trait PolicyholderPort: Send + Sync {
    /// Conditionally inserts a record; returns `false` when the business ID
    /// is already taken
    async fn insert(&self, record: &Policyholder) -> Result<bool, CoreError>;

    /// Looks up a record by business ID
    async fn find(&self, id: PolicyholderId) -> Result<Option<Policyholder>, CoreError>;

    /// Returns all records
    async fn list(&self) -> Result<Vec<Policyholder>, CoreError>;

    /// Replaces a record; returns `false` when no record with that ID exists
    async fn update(&self, record: &Policyholder) -> Result<bool, CoreError>;

    /// Removes a record; returns `false` when no record with that ID exists
    async fn delete(&self, id: PolicyholderId) -> Result<bool, CoreError>;
}
