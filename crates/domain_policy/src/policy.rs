//! Policy record, request drafts, and the enriched list view

use serde::{Deserialize, Serialize};
use serde_json::Value;

use core_kernel::fields;
use core_kernel::{CoreError, PolicyId, PolicyholderId};

/// A policy record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    /// Externally assigned business ID, unique across all policies
    pub policy_id: PolicyId,
    /// Coverage type, purely alphabetic
    #[serde(rename = "type")]
    pub policy_type: String,
    /// Coverage ceiling
    pub amount: f64,
    /// Reference to the owning policyholder
    pub policyholder_id: PolicyholderId,
}

/// A policy as rendered by list: the record plus the resolved
/// policyholder name (`"Unknown"` when the reference dangles)
#[derive(Debug, Clone, Serialize)]
pub struct PolicyWithHolder {
    #[serde(flatten)]
    pub policy: Policy,
    pub policyholder_name: String,
}

/// Unvalidated create payload
#[derive(Debug, Clone, Default)]
pub struct PolicyDraft {
    pub policy_id: Value,
    pub policy_type: Value,
    pub amount: Value,
    pub policyholder_id: Value,
}

impl PolicyDraft {
    /// Runs the field checks in pipeline order and produces a record
    pub fn validate(&self) -> Result<Policy, CoreError> {
        let policy_id = fields::require_int(&self.policy_id, "Policy ID must be a number")?;
        let policyholder_id =
            fields::require_int(&self.policyholder_id, "Policyholder ID must be a number")?;
        let amount = fields::require_number(&self.amount, "Amount must be a number")?;
        let policy_type =
            fields::require_alpha(&self.policy_type, "Policy type must contain only letters")?;

        Ok(Policy {
            policy_id: PolicyId::new(policy_id),
            policy_type,
            amount,
            policyholder_id: PolicyholderId::new(policyholder_id),
        })
    }
}

/// Unvalidated update payload; all fields but the business ID are mutable
#[derive(Debug, Clone, Default)]
pub struct PolicyUpdate {
    pub policy_type: Value,
    pub amount: Value,
    pub policyholder_id: Value,
}

impl PolicyUpdate {
    /// Runs the field checks and produces the replacement record for
    /// the policy at `policy_id`
    pub fn validate(&self, policy_id: PolicyId) -> Result<Policy, CoreError> {
        let policy_type =
            fields::require_alpha(&self.policy_type, "Policy type must contain only letters")?;
        let policyholder_id =
            fields::require_int(&self.policyholder_id, "Policyholder ID must be a number")?;
        let amount = fields::require_number(&self.amount, "Amount must be a number")?;

        Ok(Policy {
            policy_id,
            policy_type,
            amount,
            policyholder_id: PolicyholderId::new(policyholder_id),
        })
    }
}
