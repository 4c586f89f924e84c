//! Policy handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use core_kernel::PolicyId;

use crate::dto::policies::{CreatePolicyRequest, PolicyResponse, UpdatePolicyRequest};
use crate::dto::MessageResponse;
use crate::error::{ApiError, ErrorResponse};
use crate::AppState;

/// Creates a new policy for a policyholder
#[utoipa::path(
    post,
    path = "/policies",
    request_body = CreatePolicyRequest,
    responses(
        (status = 201, description = "Policy created successfully", body = MessageResponse),
        (status = 400, description = "Validation failure, unresolved policyholder, or duplicate ID", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearer_auth" = [])),
    tag = "policies"
)]
pub async fn create_policy(
    State(state): State<AppState>,
    Json(request): Json<CreatePolicyRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    state.policies.create(request.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Policy created successfully")),
    ))
}

/// Lists all policies with their resolved policyholder names
#[utoipa::path(
    get,
    path = "/policies",
    responses(
        (status = 200, description = "All policies", body = [PolicyResponse]),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearer_auth" = [])),
    tag = "policies"
)]
pub async fn list_policies(
    State(state): State<AppState>,
) -> Result<Json<Vec<PolicyResponse>>, ApiError> {
    let records = state.policies.list().await?;
    Ok(Json(records.into_iter().map(PolicyResponse::from).collect()))
}

/// Updates all mutable fields of a policy
#[utoipa::path(
    put,
    path = "/policies/{id}",
    params(("id" = i64, Path, description = "Policy business ID")),
    request_body = UpdatePolicyRequest,
    responses(
        (status = 200, description = "Policy updated successfully", body = MessageResponse),
        (status = 400, description = "Validation failure or unresolved policyholder", body = ErrorResponse),
        (status = 404, description = "Policy not found", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearer_auth" = [])),
    tag = "policies"
)]
pub async fn update_policy(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdatePolicyRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .policies
        .update(PolicyId::new(id), request.into())
        .await?;
    Ok(Json(MessageResponse::new("Policy updated successfully")))
}

/// Deletes a policy
#[utoipa::path(
    delete,
    path = "/policies/{id}",
    params(("id" = i64, Path, description = "Policy business ID")),
    responses(
        (status = 200, description = "Policy deleted successfully", body = MessageResponse),
        (status = 404, description = "Policy not found", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearer_auth" = [])),
    tag = "policies"
)]
pub async fn delete_policy(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.policies.delete(PolicyId::new(id)).await?;
    Ok(Json(MessageResponse::new("Policy deleted successfully")))
}
