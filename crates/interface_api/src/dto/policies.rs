//! Policy DTOs

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use domain_policy::{PolicyDraft, PolicyUpdate, PolicyWithHolder};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePolicyRequest {
    #[serde(default)]
    #[schema(value_type = i64, example = 201)]
    pub policy_id: Value,
    #[serde(default, rename = "type")]
    #[schema(value_type = String, example = "Health")]
    pub policy_type: Value,
    #[serde(default)]
    #[schema(value_type = f64, example = 5000)]
    pub amount: Value,
    #[serde(default)]
    #[schema(value_type = i64, example = 101)]
    pub policyholder_id: Value,
}

impl From<CreatePolicyRequest> for PolicyDraft {
    fn from(request: CreatePolicyRequest) -> Self {
        PolicyDraft {
            policy_id: request.policy_id,
            policy_type: request.policy_type,
            amount: request.amount,
            policyholder_id: request.policyholder_id,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePolicyRequest {
    #[serde(default, rename = "type")]
    #[schema(value_type = String, example = "Auto")]
    pub policy_type: Value,
    #[serde(default)]
    #[schema(value_type = f64, example = 750.5)]
    pub amount: Value,
    #[serde(default)]
    #[schema(value_type = i64, example = 101)]
    pub policyholder_id: Value,
}

impl From<UpdatePolicyRequest> for PolicyUpdate {
    fn from(request: UpdatePolicyRequest) -> Self {
        PolicyUpdate {
            policy_type: request.policy_type,
            amount: request.amount,
            policyholder_id: request.policyholder_id,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PolicyResponse {
    #[schema(example = 201)]
    pub policy_id: i64,
    #[serde(rename = "type")]
    #[schema(example = "Health")]
    pub policy_type: String,
    #[schema(example = 5000)]
    pub amount: f64,
    #[schema(example = 101)]
    pub policyholder_id: i64,
    /// Resolved policyholder name, "Unknown" when the reference dangles
    #[schema(example = "John Doe")]
    pub policyholder_name: String,
}

impl From<PolicyWithHolder> for PolicyResponse {
    fn from(view: PolicyWithHolder) -> Self {
        Self {
            policy_id: view.policy.policy_id.value(),
            policy_type: view.policy.policy_type,
            amount: view.policy.amount,
            policyholder_id: view.policy.policyholder_id.value(),
            policyholder_name: view.policyholder_name,
        }
    }
}
