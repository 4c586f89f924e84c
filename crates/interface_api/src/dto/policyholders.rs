//! Policyholder DTOs

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use domain_policyholder::{Policyholder, PolicyholderDraft, PolicyholderUpdate};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePolicyholderRequest {
    #[serde(default)]
    #[schema(value_type = i64, example = 101)]
    pub policyholder_id: Value,
    #[serde(default)]
    #[schema(value_type = String, example = "John Doe")]
    pub name: Value,
}

impl From<CreatePolicyholderRequest> for PolicyholderDraft {
    fn from(request: CreatePolicyholderRequest) -> Self {
        PolicyholderDraft {
            policyholder_id: request.policyholder_id,
            name: request.name,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePolicyholderRequest {
    #[serde(default)]
    #[schema(value_type = String, example = "Jane Doe")]
    pub name: Value,
}

impl From<UpdatePolicyholderRequest> for PolicyholderUpdate {
    fn from(request: UpdatePolicyholderRequest) -> Self {
        PolicyholderUpdate { name: request.name }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PolicyholderResponse {
    #[schema(example = 101)]
    pub policyholder_id: i64,
    #[schema(example = "John Doe")]
    pub name: String,
}

impl From<Policyholder> for PolicyholderResponse {
    fn from(record: Policyholder) -> Self {
        Self {
            policyholder_id: record.policyholder_id.value(),
            name: record.name,
        }
    }
}
