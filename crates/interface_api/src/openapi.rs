//! OpenAPI document
//!
//! The generated specification covers the login flow, the twelve record
//! routes, and the observability endpoints, and is served as JSON at
//! `/api-docs/openapi.json`.

use axum::Json;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::dto;
use crate::error::ErrorResponse;
use crate::handlers;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::login::login,
        handlers::health::health_check,
        crate::metrics::render_metrics,
        handlers::policyholders::create_policyholder,
        handlers::policyholders::list_policyholders,
        handlers::policyholders::update_policyholder,
        handlers::policyholders::delete_policyholder,
        handlers::policies::create_policy,
        handlers::policies::list_policies,
        handlers::policies::update_policy,
        handlers::policies::delete_policy,
        handlers::claims::create_claim,
        handlers::claims::list_claims,
        handlers::claims::update_claim,
        handlers::claims::delete_claim,
    ),
    components(schemas(
        dto::MessageResponse,
        ErrorResponse,
        dto::auth::LoginRequest,
        dto::auth::TokenResponse,
        handlers::health::HealthResponse,
        dto::policyholders::CreatePolicyholderRequest,
        dto::policyholders::UpdatePolicyholderRequest,
        dto::policyholders::PolicyholderResponse,
        dto::policies::CreatePolicyRequest,
        dto::policies::UpdatePolicyRequest,
        dto::policies::PolicyResponse,
        dto::claims::CreateClaimRequest,
        dto::claims::UpdateClaimRequest,
        dto::claims::ClaimResponse,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Token issuance"),
        (name = "policyholders", description = "Policyholder records"),
        (name = "policies", description = "Policy records"),
        (name = "claims", description = "Claim records"),
        (name = "observability", description = "Health and metrics"),
    ),
    info(
        title = "Claims Registry API",
        description = "Record-keeping backend for policyholders, policies, and claims"
    )
)]
pub struct ApiDoc;

/// Registers the bearer-token security scheme referenced by the protected
/// paths
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Serves the OpenAPI document
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
