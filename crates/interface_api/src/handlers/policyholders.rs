//! Policyholder handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use core_kernel::PolicyholderId;

use crate::dto::policyholders::{
    CreatePolicyholderRequest, PolicyholderResponse, UpdatePolicyholderRequest,
};
use crate::dto::MessageResponse;
use crate::error::{ApiError, ErrorResponse};
use crate::AppState;

/// Creates a new policyholder
#[utoipa::path(
    post,
    path = "/policyholders",
    request_body = CreatePolicyholderRequest,
    responses(
        (status = 201, description = "Policyholder created successfully", body = MessageResponse),
        (status = 400, description = "Validation failure or duplicate ID", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearer_auth" = [])),
    tag = "policyholders"
)]
pub async fn create_policyholder(
    State(state): State<AppState>,
    Json(request): Json<CreatePolicyholderRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    state.policyholders.create(request.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Policyholder created successfully")),
    ))
}

/// Lists all policyholders
#[utoipa::path(
    get,
    path = "/policyholders",
    responses(
        (status = 200, description = "All policyholders", body = [PolicyholderResponse]),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearer_auth" = [])),
    tag = "policyholders"
)]
pub async fn list_policyholders(
    State(state): State<AppState>,
) -> Result<Json<Vec<PolicyholderResponse>>, ApiError> {
    let records = state.policyholders.list().await?;
    Ok(Json(
        records.into_iter().map(PolicyholderResponse::from).collect(),
    ))
}

/// Updates a policyholder's name
#[utoipa::path(
    put,
    path = "/policyholders/{id}",
    params(("id" = i64, Path, description = "Policyholder business ID")),
    request_body = UpdatePolicyholderRequest,
    responses(
        (status = 200, description = "Policyholder updated successfully", body = MessageResponse),
        (status = 404, description = "Policyholder not found", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearer_auth" = [])),
    tag = "policyholders"
)]
pub async fn update_policyholder(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdatePolicyholderRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .policyholders
        .update(PolicyholderId::new(id), request.into())
        .await?;
    Ok(Json(MessageResponse::new(
        "Policyholder updated successfully",
    )))
}

/// Deletes a policyholder
#[utoipa::path(
    delete,
    path = "/policyholders/{id}",
    params(("id" = i64, Path, description = "Policyholder business ID")),
    responses(
        (status = 200, description = "Policyholder deleted successfully", body = MessageResponse),
        (status = 404, description = "Policyholder not found", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearer_auth" = [])),
    tag = "policyholders"
)]
pub async fn delete_policyholder(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.policyholders.delete(PolicyholderId::new(id)).await?;
    Ok(Json(MessageResponse::new(
        "Policyholder deleted successfully",
    )))
}
