//! Claim record, request drafts, and the enriched list view

use serde::{Deserialize, Serialize};
use serde_json::Value;

use core_kernel::fields;
use core_kernel::{ClaimId, CoreError, PolicyId, PolicyholderId};

/// A claim record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    /// Externally assigned business ID, unique across all claims
    pub claim_id: ClaimId,
    /// Claimed sum
    pub amount: f64,
    /// Processing status, purely alphabetic
    pub status: String,
    /// Reference to the policy the claim is filed against
    pub policy_id: PolicyId,
    /// Denormalized reference to the policyholder
    pub policyholder_id: PolicyholderId,
}

/// A claim as rendered by list: the record plus the resolved policy type
/// and policyholder name (`"Unknown"` when a reference dangles)
#[derive(Debug, Clone, Serialize)]
pub struct ClaimWithContext {
    #[serde(flatten)]
    pub claim: Claim,
    pub policy_type: String,
    pub policyholder_name: String,
}

/// Unvalidated create payload
#[derive(Debug, Clone, Default)]
pub struct ClaimDraft {
    pub claim_id: Value,
    pub amount: Value,
    pub status: Value,
    pub policy_id: Value,
    pub policyholder_id: Value,
}

impl ClaimDraft {
    /// Runs the field checks in pipeline order and produces a record
    pub fn validate(&self) -> Result<Claim, CoreError> {
        let claim_id = fields::require_int(&self.claim_id, "Claim ID must be a number")?;
        let policy_id = fields::require_int(&self.policy_id, "Policy ID must be a number")?;
        let policyholder_id =
            fields::require_int(&self.policyholder_id, "Policyholder ID must be a number")?;
        let amount = fields::require_number(&self.amount, "Amount must be a number")?;
        let status = fields::require_alpha(&self.status, "Status must contain only alphabets")?;

        Ok(Claim {
            claim_id: ClaimId::new(claim_id),
            amount,
            status,
            policy_id: PolicyId::new(policy_id),
            policyholder_id: PolicyholderId::new(policyholder_id),
        })
    }
}

/// Unvalidated update payload; all fields but the business ID are mutable
#[derive(Debug, Clone, Default)]
pub struct ClaimUpdate {
    pub amount: Value,
    pub status: Value,
    pub policy_id: Value,
    pub policyholder_id: Value,
}

impl ClaimUpdate {
    /// Runs the field checks and produces the replacement record for the
    /// claim at `claim_id`
    pub fn validate(&self, claim_id: ClaimId) -> Result<Claim, CoreError> {
        let amount = fields::require_number(&self.amount, "Amount must be a number")?;
        let policy_id = fields::require_int(&self.policy_id, "Policy ID must be a number")?;
        let policyholder_id =
            fields::require_int(&self.policyholder_id, "Policyholder ID must be a number")?;
        let status = fields::require_alpha(&self.status, "Status must contain only alphabets")?;

        Ok(Claim {
            claim_id,
            amount,
            status,
            policy_id: PolicyId::new(policy_id),
            policyholder_id: PolicyholderId::new(policyholder_id),
        })
    }
}
