//! Claim DTOs

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use domain_claims::{ClaimDraft, ClaimUpdate, ClaimWithContext};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateClaimRequest {
    #[serde(default)]
    #[schema(value_type = i64, example = 301)]
    pub claim_id: Value,
    #[serde(default)]
    #[schema(value_type = f64, example = 2000)]
    pub amount: Value,
    #[serde(default)]
    #[schema(value_type = String, example = "Pending")]
    pub status: Value,
    #[serde(default)]
    #[schema(value_type = i64, example = 201)]
    pub policy_id: Value,
    #[serde(default)]
    #[schema(value_type = i64, example = 101)]
    pub policyholder_id: Value,
}

impl From<CreateClaimRequest> for ClaimDraft {
    fn from(request: CreateClaimRequest) -> Self {
        ClaimDraft {
            claim_id: request.claim_id,
            amount: request.amount,
            status: request.status,
            policy_id: request.policy_id,
            policyholder_id: request.policyholder_id,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateClaimRequest {
    #[serde(default)]
    #[schema(value_type = f64, example = 2500.5)]
    pub amount: Value,
    #[serde(default)]
    #[schema(value_type = String, example = "Approved")]
    pub status: Value,
    #[serde(default)]
    #[schema(value_type = i64, example = 201)]
    pub policy_id: Value,
    #[serde(default)]
    #[schema(value_type = i64, example = 101)]
    pub policyholder_id: Value,
}

impl From<UpdateClaimRequest> for ClaimUpdate {
    fn from(request: UpdateClaimRequest) -> Self {
        ClaimUpdate {
            amount: request.amount,
            status: request.status,
            policy_id: request.policy_id,
            policyholder_id: request.policyholder_id,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ClaimResponse {
    #[schema(example = 301)]
    pub claim_id: i64,
    #[schema(example = 2000)]
    pub amount: f64,
    #[schema(example = "Pending")]
    pub status: String,
    #[schema(example = 201)]
    pub policy_id: i64,
    #[schema(example = 101)]
    pub policyholder_id: i64,
    /// Resolved policy type, "Unknown" when the reference dangles
    #[schema(example = "Health")]
    pub policy_type: String,
    /// Resolved policyholder name, "Unknown" when the reference dangles
    #[schema(example = "John Doe")]
    pub policyholder_name: String,
}

impl From<ClaimWithContext> for ClaimResponse {
    fn from(view: ClaimWithContext) -> Self {
        Self {
            claim_id: view.claim.claim_id.value(),
            amount: view.claim.amount,
            status: view.claim.status,
            policy_id: view.claim.policy_id.value(),
            policyholder_id: view.claim.policyholder_id.value(),
            policy_type: view.policy_type,
            policyholder_name: view.policyholder_name,
        }
    }
}
