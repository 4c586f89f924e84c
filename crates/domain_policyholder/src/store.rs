//! Policyholder store
//!
//! Applies the fail-fast pipeline for the leaf collection: field validation,
//! then uniqueness on create, then the write. Deletes are unconditional;
//! dependent policies and claims are left with dangling references that the
//! read paths mask.

use std::sync::Arc;

use tracing::debug;

use core_kernel::{CoreError, PolicyholderId};

use crate::policyholder::{Policyholder, PolicyholderDraft, PolicyholderUpdate};
use crate::ports::PolicyholderPort;

/// Resource manager for the policyholder collection
#[derive(Clone)]
pub struct PolicyholderStore {
    port: Arc<dyn PolicyholderPort>,
}

impl PolicyholderStore {
    pub fn new(port: Arc<dyn PolicyholderPort>) -> Self {
        Self { port }
    }

    /// Creates a policyholder; the business ID must be unused
    pub async fn create(&self, draft: PolicyholderDraft) -> Result<Policyholder, CoreError> {
        let record = draft.validate()?;

        if !self.port.insert(&record).await? {
            return Err(CoreError::duplicate_id(
                "Policyholder with this ID already exists",
            ));
        }

        debug!(policyholder_id = %record.policyholder_id, "policyholder created");
        Ok(record)
    }

    /// Returns all policyholders, no related-entity enrichment
    pub async fn list(&self) -> Result<Vec<Policyholder>, CoreError> {
        self.port.list().await
    }

    /// Replaces the name of an existing policyholder
    pub async fn update(
        &self,
        id: PolicyholderId,
        update: PolicyholderUpdate,
    ) -> Result<Policyholder, CoreError> {
        let name = update.validate()?;

        let record = Policyholder {
            policyholder_id: id,
            name,
        };
        if !self.port.update(&record).await? {
            return Err(CoreError::not_found("Policyholder not found"));
        }

        debug!(policyholder_id = %id, "policyholder updated");
        Ok(record)
    }

    /// Removes a policyholder; no cascade to dependent policies or claims
    pub async fn delete(&self, id: PolicyholderId) -> Result<(), CoreError> {
        if !self.port.delete(id).await? {
            return Err(CoreError::not_found("Policyholder not found"));
        }

        debug!(policyholder_id = %id, "policyholder deleted");
        Ok(())
    }
}
