//! Claim store
//!
//! The widest pipeline in the registry: field validation, then both
//! reference checks (policy first, then policyholder), then the
//! configurable amount rules, then business-ID uniqueness. The first
//! failing check is the reported error. Reference checks run on both the
//! create and the update path.

use std::sync::Arc;

use tracing::debug;

use core_kernel::{ClaimId, CoreError};
use domain_policy::{Policy, PolicyPort};
use domain_policyholder::PolicyholderPort;

use crate::claim::{Claim, ClaimDraft, ClaimUpdate, ClaimWithContext};
use crate::ports::ClaimPort;
use crate::rules::AmountRules;

/// Value substituted when a reference no longer resolves
const UNKNOWN: &str = "Unknown";

/// Resource manager for the claim collection
#[derive(Clone)]
pub struct ClaimStore {
    claims: Arc<dyn ClaimPort>,
    policies: Arc<dyn PolicyPort>,
    policyholders: Arc<dyn PolicyholderPort>,
    rules: AmountRules,
}

impl ClaimStore {
    pub fn new(
        claims: Arc<dyn ClaimPort>,
        policies: Arc<dyn PolicyPort>,
        policyholders: Arc<dyn PolicyholderPort>,
        rules: AmountRules,
    ) -> Self {
        Self {
            claims,
            policies,
            policyholders,
            rules,
        }
    }

    /// Creates a claim; both references must exist and the business ID
    /// must be unused
    pub async fn create(&self, draft: ClaimDraft) -> Result<Claim, CoreError> {
        let record = draft.validate()?;
        let policy = self.resolve_references(&record).await?;
        self.rules.check(record.amount, &policy)?;

        if !self.claims.insert(&record).await? {
            return Err(CoreError::duplicate_id("Claim with this ID already exists"));
        }

        debug!(claim_id = %record.claim_id, policy_id = %record.policy_id, "claim created");
        Ok(record)
    }

    /// Returns all claims, each enriched with the referenced policy's type
    /// and the policyholder's name
    ///
    /// Enrichment never fails: dangling references render `"Unknown"`.
    pub async fn list(&self) -> Result<Vec<ClaimWithContext>, CoreError> {
        let claims = self.claims.list().await?;

        let mut enriched = Vec::with_capacity(claims.len());
        for claim in claims {
            let policy_type = match self.policies.find(claim.policy_id).await? {
                Some(policy) => policy.policy_type,
                None => UNKNOWN.to_string(),
            };
            let policyholder_name = match self.policyholders.find(claim.policyholder_id).await? {
                Some(holder) => holder.name,
                None => UNKNOWN.to_string(),
            };
            enriched.push(ClaimWithContext {
                claim,
                policy_type,
                policyholder_name,
            });
        }
        Ok(enriched)
    }

    /// Replaces all mutable fields of an existing claim
    pub async fn update(&self, id: ClaimId, update: ClaimUpdate) -> Result<Claim, CoreError> {
        let record = update.validate(id)?;

        if self.claims.find(id).await?.is_none() {
            return Err(CoreError::not_found("Claim not found"));
        }

        let policy = self.resolve_references(&record).await?;
        self.rules.check(record.amount, &policy)?;

        if !self.claims.update(&record).await? {
            return Err(CoreError::not_found("Claim not found"));
        }

        debug!(claim_id = %id, "claim updated");
        Ok(record)
    }

    /// Removes a claim
    pub async fn delete(&self, id: ClaimId) -> Result<(), CoreError> {
        if !self.claims.delete(id).await? {
            return Err(CoreError::not_found("Claim not found"));
        }

        debug!(claim_id = %id, "claim deleted");
        Ok(())
    }

    /// Resolves both references, policy first, returning the policy for
    /// the ceiling rule
    async fn resolve_references(&self, record: &Claim) -> Result<Policy, CoreError> {
        let policy = self
            .policies
            .find(record.policy_id)
            .await?
            .ok_or_else(|| CoreError::reference_not_found("Policy not found"))?;

        if self
            .policyholders
            .find(record.policyholder_id)
            .await?
            .is_none()
        {
            return Err(CoreError::reference_not_found("Policyholder not found"));
        }

        Ok(policy)
    }
}
