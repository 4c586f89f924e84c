//! Policy store
//!
//! The pipeline for the policy collection checks, in order: field types and
//! formats, the policyholder reference, then business-ID uniqueness. The
//! first failing check is the reported error. Reference checks run on both
//! the create and the update path.

use std::sync::Arc;

use tracing::debug;

use core_kernel::{CoreError, PolicyId};
use domain_policyholder::PolicyholderPort;

use crate::policy::{Policy, PolicyDraft, PolicyUpdate, PolicyWithHolder};
use crate::ports::PolicyPort;

/// Name substituted when a policyholder reference no longer resolves
const UNKNOWN: &str = "Unknown";

/// Resource manager for the policy collection
#[derive(Clone)]
pub struct PolicyStore {
    policies: Arc<dyn PolicyPort>,
    policyholders: Arc<dyn PolicyholderPort>,
}

impl PolicyStore {
    pub fn new(policies: Arc<dyn PolicyPort>, policyholders: Arc<dyn PolicyholderPort>) -> Self {
        Self {
            policies,
            policyholders,
        }
    }

    /// Creates a policy; the policyholder must exist and the business ID
    /// must be unused
    pub async fn create(&self, draft: PolicyDraft) -> Result<Policy, CoreError> {
        let record = draft.validate()?;

        if self
            .policyholders
            .find(record.policyholder_id)
            .await?
            .is_none()
        {
            return Err(CoreError::reference_not_found("Policyholder not found"));
        }

        if !self.policies.insert(&record).await? {
            return Err(CoreError::duplicate_id("Policy with this ID already exists"));
        }

        debug!(policy_id = %record.policy_id, policyholder_id = %record.policyholder_id, "policy created");
        Ok(record)
    }

    /// Returns all policies, each enriched with the resolved policyholder
    /// name
    ///
    /// Enrichment never fails: a dangling reference renders `"Unknown"`.
    pub async fn list(&self) -> Result<Vec<PolicyWithHolder>, CoreError> {
        let policies = self.policies.list().await?;

        let mut enriched = Vec::with_capacity(policies.len());
        for policy in policies {
            let policyholder_name = match self.policyholders.find(policy.policyholder_id).await? {
                Some(holder) => holder.name,
                None => UNKNOWN.to_string(),
            };
            enriched.push(PolicyWithHolder {
                policy,
                policyholder_name,
            });
        }
        Ok(enriched)
    }

    /// Replaces all mutable fields of an existing policy
    pub async fn update(&self, id: PolicyId, update: PolicyUpdate) -> Result<Policy, CoreError> {
        let record = update.validate(id)?;

        if self.policies.find(id).await?.is_none() {
            return Err(CoreError::not_found("Policy not found"));
        }

        if self
            .policyholders
            .find(record.policyholder_id)
            .await?
            .is_none()
        {
            return Err(CoreError::reference_not_found("Policyholder not found"));
        }

        if !self.policies.update(&record).await? {
            return Err(CoreError::not_found("Policy not found"));
        }

        debug!(policy_id = %id, "policy updated");
        Ok(record)
    }

    /// Removes a policy; no cascade to dependent claims
    pub async fn delete(&self, id: PolicyId) -> Result<(), CoreError> {
        if !self.policies.delete(id).await? {
            return Err(CoreError::not_found("Policy not found"));
        }

        debug!(policy_id = %id, "policy deleted");
        Ok(())
    }
}
