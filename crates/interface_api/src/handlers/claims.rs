//! Claim handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use core_kernel::ClaimId;

use crate::dto::claims::{ClaimResponse, CreateClaimRequest, UpdateClaimRequest};
use crate::dto::MessageResponse;
use crate::error::{ApiError, ErrorResponse};
use crate::AppState;

/// Files a new claim against a policy
#[utoipa::path(
    post,
    path = "/claims",
    request_body = CreateClaimRequest,
    responses(
        (status = 201, description = "Claim created successfully", body = MessageResponse),
        (status = 400, description = "Validation failure, unresolved reference, or duplicate ID", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearer_auth" = [])),
    tag = "claims"
)]
pub async fn create_claim(
    State(state): State<AppState>,
    Json(request): Json<CreateClaimRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    state.claims.create(request.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Claim created successfully")),
    ))
}

/// Lists all claims with their resolved policy types and policyholder names
#[utoipa::path(
    get,
    path = "/claims",
    responses(
        (status = 200, description = "All claims", body = [ClaimResponse]),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearer_auth" = [])),
    tag = "claims"
)]
pub async fn list_claims(
    State(state): State<AppState>,
) -> Result<Json<Vec<ClaimResponse>>, ApiError> {
    let records = state.claims.list().await?;
    Ok(Json(records.into_iter().map(ClaimResponse::from).collect()))
}

/// Updates all mutable fields of a claim
#[utoipa::path(
    put,
    path = "/claims/{id}",
    params(("id" = i64, Path, description = "Claim business ID")),
    request_body = UpdateClaimRequest,
    responses(
        (status = 200, description = "Claim updated successfully", body = MessageResponse),
        (status = 400, description = "Validation failure or unresolved reference", body = ErrorResponse),
        (status = 404, description = "Claim not found", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearer_auth" = [])),
    tag = "claims"
)]
pub async fn update_claim(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateClaimRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.claims.update(ClaimId::new(id), request.into()).await?;
    Ok(Json(MessageResponse::new("Claim updated successfully")))
}

/// Deletes a claim
#[utoipa::path(
    delete,
    path = "/claims/{id}",
    params(("id" = i64, Path, description = "Claim business ID")),
    responses(
        (status = 200, description = "Claim deleted successfully", body = MessageResponse),
        (status = 404, description = "Claim not found", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearer_auth" = [])),
    tag = "claims"
)]
pub async fn delete_claim(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.claims.delete(ClaimId::new(id)).await?;
    Ok(Json(MessageResponse::new("Claim deleted successfully")))
}
