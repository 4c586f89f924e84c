//! End-to-end HTTP tests
//!
//! Drives the full router over in-memory ports: login, bearer gating, the
//! twelve record routes, enrichment, and the observability endpoints.

use axum::http::StatusCode;
use axum_test::TestServer;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::Lazy;
use serde_json::{json, Value};

use interface_api::{config::ApiConfig, create_router, AppState};

// The metrics recorder is global to the process; every test server shares it.
static METRICS: Lazy<PrometheusHandle> = Lazy::new(|| {
    PrometheusBuilder::new()
        .install_recorder()
        .expect("install prometheus recorder")
});

fn server() -> TestServer {
    server_with_config(ApiConfig::default())
}

fn server_with_config(config: ApiConfig) -> TestServer {
    let state = AppState::in_memory(config, METRICS.clone());
    TestServer::new(create_router(state)).expect("test server")
}

async fn login(server: &TestServer) -> String {
    let response = server
        .post("/login")
        .json(&json!({ "username": "admin", "password": "admin" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    response.json::<Value>()["access_token"]
        .as_str()
        .expect("access_token")
        .to_string()
}

#[tokio::test]
async fn home_is_public() {
    let server = server();
    let response = server.get("/").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "Welcome to the Claims Management System!");
}

#[tokio::test]
async fn login_with_wrong_credentials_is_401() {
    let server = server();
    let response = server
        .post("/login")
        .json(&json!({ "username": "admin", "password": "wrong" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.json::<Value>()["message"], "Invalid credentials");
}

#[tokio::test]
async fn record_routes_require_a_token() {
    let server = server();

    let response = server.get("/policyholders").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

    let response = server
        .get("/claims")
        .authorization_bearer("not-a-real-token")
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn full_crud_scenario_with_enrichment() {
    let server = server();
    let token = login(&server).await;

    let response = server
        .post("/policyholders")
        .authorization_bearer(&token)
        .json(&json!({ "policyholder_id": 101, "name": "John Doe" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    assert_eq!(
        response.json::<Value>()["message"],
        "Policyholder created successfully"
    );

    let response = server
        .post("/policies")
        .authorization_bearer(&token)
        .json(&json!({
            "policy_id": 201,
            "type": "Health",
            "amount": 5000,
            "policyholder_id": 101
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);

    let response = server
        .post("/claims")
        .authorization_bearer(&token)
        .json(&json!({
            "claim_id": 301,
            "amount": 2000,
            "status": "Pending",
            "policy_id": 201,
            "policyholder_id": 101
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);

    let response = server.get("/claims").authorization_bearer(&token).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let claims = response.json::<Vec<Value>>();
    assert_eq!(claims.len(), 1);
    assert_eq!(claims[0]["claim_id"], 301);
    assert_eq!(claims[0]["amount"], 2000.0);
    assert_eq!(claims[0]["status"], "Pending");
    assert_eq!(claims[0]["policy_type"], "Health");
    assert_eq!(claims[0]["policyholder_name"], "John Doe");

    let response = server.get("/policies").authorization_bearer(&token).await;
    let policies = response.json::<Vec<Value>>();
    assert_eq!(policies[0]["type"], "Health");
    assert_eq!(policies[0]["policyholder_name"], "John Doe");
}

#[tokio::test]
async fn policy_create_with_unknown_holder_is_400() {
    let server = server();
    let token = login(&server).await;

    let response = server
        .post("/policies")
        .authorization_bearer(&token)
        .json(&json!({
            "policy_id": 202,
            "type": "Auto",
            "amount": 1000,
            "policyholder_id": 999
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["error"], "reference_not_found");
    assert_eq!(body["message"], "Policyholder not found");
}

#[tokio::test]
async fn claim_create_with_unknown_policy_is_400() {
    let server = server();
    let token = login(&server).await;

    server
        .post("/policyholders")
        .authorization_bearer(&token)
        .json(&json!({ "policyholder_id": 101, "name": "John Doe" }))
        .await;

    let response = server
        .post("/claims")
        .authorization_bearer(&token)
        .json(&json!({
            "claim_id": 302,
            "amount": 500,
            "status": "Open",
            "policy_id": 999,
            "policyholder_id": 101
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["message"], "Policy not found");
}

#[tokio::test]
async fn duplicate_policyholder_is_400() {
    let server = server();
    let token = login(&server).await;

    let payload = json!({ "policyholder_id": 101, "name": "A" });
    let response = server
        .post("/policyholders")
        .authorization_bearer(&token)
        .json(&payload)
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);

    let response = server
        .post("/policyholders")
        .authorization_bearer(&token)
        .json(&payload)
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["error"], "duplicate_id");
    assert_eq!(body["message"], "Policyholder with this ID already exists");
}

#[tokio::test]
async fn non_alphabetic_policy_type_is_400() {
    let server = server();
    let token = login(&server).await;

    server
        .post("/policyholders")
        .authorization_bearer(&token)
        .json(&json!({ "policyholder_id": 101, "name": "John Doe" }))
        .await;

    let response = server
        .post("/policies")
        .authorization_bearer(&token)
        .json(&json!({
            "policy_id": 203,
            "type": "Health2",
            "amount": 100,
            "policyholder_id": 101
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["error"], "validation_error");
    assert_eq!(body["message"], "Policy type must contain only letters");
}

#[tokio::test]
async fn wrong_typed_fields_report_specific_messages() {
    let server = server();
    let token = login(&server).await;

    let response = server
        .post("/policies")
        .authorization_bearer(&token)
        .json(&json!({
            "policy_id": "201",
            "type": "Health",
            "amount": 100,
            "policyholder_id": 101
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["message"],
        "Policy ID must be a number"
    );

    // Missing fields fail the same checks as wrong-typed ones
    let response = server
        .post("/claims")
        .authorization_bearer(&token)
        .json(&json!({ "claim_id": 301 }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["message"],
        "Policy ID must be a number"
    );
}

#[tokio::test]
async fn update_and_delete_on_missing_records_are_404() {
    let server = server();
    let token = login(&server).await;

    let response = server
        .put("/policyholders/999")
        .authorization_bearer(&token)
        .json(&json!({ "name": "Nobody" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>()["message"],
        "Policyholder not found"
    );

    let response = server
        .put("/policies/999")
        .authorization_bearer(&token)
        .json(&json!({ "type": "Auto", "amount": 1, "policyholder_id": 101 }))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let response = server
        .delete("/claims/999")
        .authorization_bearer(&token)
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["message"], "Claim not found");
}

#[tokio::test]
async fn policyholder_update_and_delete_round_trip() {
    let server = server();
    let token = login(&server).await;

    server
        .post("/policyholders")
        .authorization_bearer(&token)
        .json(&json!({ "policyholder_id": 101, "name": "John Doe" }))
        .await;

    let response = server
        .put("/policyholders/101")
        .authorization_bearer(&token)
        .json(&json!({ "name": "Jane Doe" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let response = server
        .get("/policyholders")
        .authorization_bearer(&token)
        .await;
    let holders = response.json::<Vec<Value>>();
    assert_eq!(holders[0]["name"], "Jane Doe");

    let response = server
        .delete("/policyholders/101")
        .authorization_bearer(&token)
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let response = server
        .get("/policyholders")
        .authorization_bearer(&token)
        .await;
    assert!(response.json::<Vec<Value>>().is_empty());
}

#[tokio::test]
async fn dangling_references_render_unknown_over_http() {
    let server = server();
    let token = login(&server).await;

    server
        .post("/policyholders")
        .authorization_bearer(&token)
        .json(&json!({ "policyholder_id": 101, "name": "John Doe" }))
        .await;
    server
        .post("/policies")
        .authorization_bearer(&token)
        .json(&json!({
            "policy_id": 201,
            "type": "Health",
            "amount": 5000,
            "policyholder_id": 101
        }))
        .await;
    server
        .post("/claims")
        .authorization_bearer(&token)
        .json(&json!({
            "claim_id": 301,
            "amount": 2000,
            "status": "Pending",
            "policy_id": 201,
            "policyholder_id": 101
        }))
        .await;

    server
        .delete("/policyholders/101")
        .authorization_bearer(&token)
        .await;
    server
        .delete("/policies/201")
        .authorization_bearer(&token)
        .await;

    let response = server.get("/claims").authorization_bearer(&token).await;
    let claims = response.json::<Vec<Value>>();
    assert_eq!(claims[0]["policy_type"], "Unknown");
    assert_eq!(claims[0]["policyholder_name"], "Unknown");
}

#[tokio::test]
async fn configured_amount_rules_apply_over_http() {
    let server = server_with_config(ApiConfig {
        require_non_negative_amounts: true,
        enforce_policy_ceiling: true,
        ..ApiConfig::default()
    });
    let token = login(&server).await;

    server
        .post("/policyholders")
        .authorization_bearer(&token)
        .json(&json!({ "policyholder_id": 101, "name": "John Doe" }))
        .await;
    server
        .post("/policies")
        .authorization_bearer(&token)
        .json(&json!({
            "policy_id": 201,
            "type": "Health",
            "amount": 5000,
            "policyholder_id": 101
        }))
        .await;

    let response = server
        .post("/claims")
        .authorization_bearer(&token)
        .json(&json!({
            "claim_id": 301,
            "amount": -1,
            "status": "Pending",
            "policy_id": 201,
            "policyholder_id": 101
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["message"],
        "Claim amount cannot be negative"
    );

    let response = server
        .post("/claims")
        .authorization_bearer(&token)
        .json(&json!({
            "claim_id": 301,
            "amount": 6000,
            "status": "Pending",
            "policy_id": 201,
            "policyholder_id": 101
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["message"],
        "Claim amount cannot exceed policy amount"
    );
}

#[tokio::test]
async fn metrics_endpoint_exposes_request_counters() {
    let server = server();

    // Serve at least one request before scraping.
    server.get("/health").await;

    let response = server.get("/metrics").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("http_requests_total"));
}

#[tokio::test]
async fn openapi_document_is_served() {
    let server = server();
    let response = server.get("/api-docs/openapi.json").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let doc = response.json::<Value>();
    assert!(doc["paths"]["/policyholders"].is_object());
    assert!(doc["paths"]["/claims/{id}"].is_object());
}
