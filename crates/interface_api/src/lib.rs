//! HTTP API Layer
//!
//! This crate provides the REST API for the claims registry using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for each record collection
//! - **Middleware**: Authentication, request metrics, audit logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses carrying the domain
//!   error taxonomy
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let app = create_router(AppState::from_pool(pool, config, metrics));
//! axum::serve(listener, app).await?;
//! ```

pub mod auth;
pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod openapi;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{get, post, put},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_claims::{ClaimStore, MemoryClaimPort};
use domain_policy::{MemoryPolicyPort, PolicyStore};
use domain_policyholder::{MemoryPolicyholderPort, PolicyholderStore};
use infra_db::{ClaimRepository, DatabasePool, PolicyRepository, PolicyholderRepository};

use crate::config::ApiConfig;
use crate::handlers::{claims, health, login, policies, policyholders};
use crate::middleware::{audit_middleware, auth_middleware, metrics_middleware};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub policyholders: PolicyholderStore,
    pub policies: PolicyStore,
    pub claims: ClaimStore,
    pub config: ApiConfig,
    pub metrics: PrometheusHandle,
}

impl AppState {
    /// Wires the stores to PostgreSQL repositories
    pub fn from_pool(pool: DatabasePool, config: ApiConfig, metrics: PrometheusHandle) -> Self {
        let policyholder_port = Arc::new(PolicyholderRepository::new(pool.clone()));
        let policy_port = Arc::new(PolicyRepository::new(pool.clone()));
        let claim_port = Arc::new(ClaimRepository::new(pool));

        Self {
            policyholders: PolicyholderStore::new(policyholder_port.clone()),
            policies: PolicyStore::new(policy_port.clone(), policyholder_port.clone()),
            claims: ClaimStore::new(
                claim_port,
                policy_port,
                policyholder_port,
                config.amount_rules(),
            ),
            config,
            metrics,
        }
    }

    /// Wires the stores to in-memory ports; used by tests and ephemeral
    /// deployments
    pub fn in_memory(config: ApiConfig, metrics: PrometheusHandle) -> Self {
        let policyholder_port = Arc::new(MemoryPolicyholderPort::new());
        let policy_port = Arc::new(MemoryPolicyPort::new());
        let claim_port = Arc::new(MemoryClaimPort::new());

        Self {
            policyholders: PolicyholderStore::new(policyholder_port.clone()),
            policies: PolicyStore::new(policy_port.clone(), policyholder_port.clone()),
            claims: ClaimStore::new(
                claim_port,
                policy_port,
                policyholder_port,
                config.amount_rules(),
            ),
            config,
            metrics,
        }
    }
}

/// Creates the main API router
///
/// Public routes: welcome banner, health, login, metrics, OpenAPI document.
/// Everything under the three record collections requires a bearer token.
pub fn create_router(state: AppState) -> Router {
    let policyholder_routes = Router::new()
        .route(
            "/",
            post(policyholders::create_policyholder).get(policyholders::list_policyholders),
        )
        .route(
            "/:id",
            put(policyholders::update_policyholder).delete(policyholders::delete_policyholder),
        );

    let policy_routes = Router::new()
        .route("/", post(policies::create_policy).get(policies::list_policies))
        .route(
            "/:id",
            put(policies::update_policy).delete(policies::delete_policy),
        );

    let claim_routes = Router::new()
        .route("/", post(claims::create_claim).get(claims::list_claims))
        .route("/:id", put(claims::update_claim).delete(claims::delete_claim));

    // Protected routes: token check first, then audit logging
    let protected_routes = Router::new()
        .nest("/policyholders", policyholder_routes)
        .nest("/policies", policy_routes)
        .nest("/claims", claim_routes)
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            audit_middleware,
        ))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let public_routes = Router::new()
        .route("/", get(health::home))
        .route("/health", get(health::health_check))
        .route("/login", post(login::login))
        .route("/metrics", get(metrics::render_metrics))
        .route("/api-docs/openapi.json", get(openapi::openapi_json));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(axum_middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
