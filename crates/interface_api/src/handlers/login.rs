//! Login handler

use axum::{extract::State, Json};
use tracing::warn;

use crate::auth::create_token;
use crate::dto::auth::{LoginRequest, TokenResponse};
use crate::error::{ApiError, ErrorResponse};
use crate::AppState;

/// Exchanges credentials for an access token
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Token issued", body = TokenResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    if request.username != state.config.admin_username
        || request.password != state.config.admin_password
    {
        warn!(username = %request.username, "login rejected");
        return Err(ApiError::InvalidCredentials);
    }

    let access_token = create_token(
        &request.username,
        &state.config.jwt_secret,
        state.config.jwt_expiration_secs,
    )
    .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(Json(TokenResponse { access_token }))
}
