//! Claim store tests

use std::sync::Arc;

use serde_json::json;

use core_kernel::{ClaimId, CoreError, PolicyId, PolicyholderId};
use domain_claims::{AmountRules, ClaimDraft, ClaimStore, ClaimUpdate, MemoryClaimPort};
use domain_policy::{MemoryPolicyPort, PolicyDraft, PolicyStore};
use domain_policyholder::{MemoryPolicyholderPort, PolicyholderDraft, PolicyholderStore};

struct Fixture {
    policyholders: PolicyholderStore,
    policies: PolicyStore,
    claims: ClaimStore,
}

fn fixture_with_rules(rules: AmountRules) -> Fixture {
    let holder_port: Arc<MemoryPolicyholderPort> = Arc::new(MemoryPolicyholderPort::new());
    let policy_port: Arc<MemoryPolicyPort> = Arc::new(MemoryPolicyPort::new());
    let claim_port = Arc::new(MemoryClaimPort::new());
    Fixture {
        policyholders: PolicyholderStore::new(holder_port.clone()),
        policies: PolicyStore::new(policy_port.clone(), holder_port.clone()),
        claims: ClaimStore::new(claim_port, policy_port, holder_port, rules),
    }
}

fn fixture() -> Fixture {
    fixture_with_rules(AmountRules::default())
}

/// Seeds the policyholder 101/"John Doe" and policy 201/"Health"/5000
async fn seed_graph(f: &Fixture) {
    f.policyholders
        .create(PolicyholderDraft {
            policyholder_id: json!(101),
            name: json!("John Doe"),
        })
        .await
        .unwrap();
    f.policies
        .create(PolicyDraft {
            policy_id: json!(201),
            policy_type: json!("Health"),
            amount: json!(5000),
            policyholder_id: json!(101),
        })
        .await
        .unwrap();
}

fn draft(claim_id: i64, amount: f64, status: &str, policy_id: i64, holder_id: i64) -> ClaimDraft {
    ClaimDraft {
        claim_id: json!(claim_id),
        amount: json!(amount),
        status: json!(status),
        policy_id: json!(policy_id),
        policyholder_id: json!(holder_id),
    }
}

#[tokio::test]
async fn create_then_list_enriches_with_policy_type_and_holder_name() {
    let f = fixture();
    seed_graph(&f).await;

    f.claims
        .create(draft(301, 2000.0, "Pending", 201, 101))
        .await
        .unwrap();

    let all = f.claims.list().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].claim.claim_id, ClaimId::new(301));
    assert_eq!(all[0].claim.amount, 2000.0);
    assert_eq!(all[0].claim.status, "Pending");
    assert_eq!(all[0].policy_type, "Health");
    assert_eq!(all[0].policyholder_name, "John Doe");
}

#[tokio::test]
async fn create_with_unknown_policy_is_reference_not_found() {
    let f = fixture();
    seed_graph(&f).await;

    let err = f
        .claims
        .create(draft(302, 500.0, "Open", 999, 101))
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::ReferenceNotFound(_)));
    assert_eq!(err.message(), "Policy not found");
    assert!(f.claims.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn create_with_unknown_policyholder_is_reference_not_found() {
    let f = fixture();
    seed_graph(&f).await;

    let err = f
        .claims
        .create(draft(302, 500.0, "Open", 201, 999))
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::ReferenceNotFound(_)));
    assert_eq!(err.message(), "Policyholder not found");
}

#[tokio::test]
async fn policy_reference_is_checked_before_policyholder() {
    let f = fixture();

    // Both references dangle; the policy check reports first.
    let err = f
        .claims
        .create(draft(302, 500.0, "Open", 999, 998))
        .await
        .unwrap_err();
    assert_eq!(err.message(), "Policy not found");
}

#[tokio::test]
async fn create_rejects_wrong_typed_fields_with_specific_messages() {
    let f = fixture();
    seed_graph(&f).await;

    let err = f
        .claims
        .create(ClaimDraft {
            claim_id: json!("301"),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert_eq!(err.message(), "Claim ID must be a number");

    let err = f
        .claims
        .create(ClaimDraft {
            claim_id: json!(301),
            policy_id: json!(201),
            policyholder_id: json!(101),
            amount: json!("lots"),
            status: json!("Pending"),
        })
        .await
        .unwrap_err();
    assert_eq!(err.message(), "Amount must be a number");

    let err = f
        .claims
        .create(draft(301, 2000.0, "In Review", 201, 101))
        .await
        .unwrap_err();
    assert_eq!(err.message(), "Status must contain only alphabets");
}

#[tokio::test]
async fn duplicate_claim_id_is_rejected() {
    let f = fixture();
    seed_graph(&f).await;
    f.claims
        .create(draft(301, 2000.0, "Pending", 201, 101))
        .await
        .unwrap();

    let err = f
        .claims
        .create(draft(301, 1.0, "Open", 201, 101))
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::DuplicateId(_)));
    assert_eq!(err.message(), "Claim with this ID already exists");
}

#[tokio::test]
async fn update_replaces_all_mutable_fields() {
    let f = fixture();
    seed_graph(&f).await;
    f.claims
        .create(draft(301, 2000.0, "Pending", 201, 101))
        .await
        .unwrap();

    f.claims
        .update(
            ClaimId::new(301),
            ClaimUpdate {
                amount: json!(2500.5),
                status: json!("Approved"),
                policy_id: json!(201),
                policyholder_id: json!(101),
            },
        )
        .await
        .unwrap();

    let all = f.claims.list().await.unwrap();
    assert_eq!(all[0].claim.amount, 2500.5);
    assert_eq!(all[0].claim.status, "Approved");
}

#[tokio::test]
async fn update_missing_claim_is_not_found_regardless_of_payload() {
    let f = fixture();
    seed_graph(&f).await;

    let err = f
        .claims
        .update(
            ClaimId::new(999),
            ClaimUpdate {
                amount: json!(1.0),
                status: json!("Open"),
                policy_id: json!(201),
                policyholder_id: json!(101),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::NotFound(_)));
    assert_eq!(err.message(), "Claim not found");
}

#[tokio::test]
async fn update_rechecks_both_references() {
    let f = fixture();
    seed_graph(&f).await;
    f.claims
        .create(draft(301, 2000.0, "Pending", 201, 101))
        .await
        .unwrap();

    let err = f
        .claims
        .update(
            ClaimId::new(301),
            ClaimUpdate {
                amount: json!(1.0),
                status: json!("Open"),
                policy_id: json!(999),
                policyholder_id: json!(101),
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.message(), "Policy not found");

    let err = f
        .claims
        .update(
            ClaimId::new(301),
            ClaimUpdate {
                amount: json!(1.0),
                status: json!("Open"),
                policy_id: json!(201),
                policyholder_id: json!(999),
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.message(), "Policyholder not found");
}

#[tokio::test]
async fn dangling_references_render_unknown_in_list() {
    let f = fixture();
    seed_graph(&f).await;
    f.claims
        .create(draft(301, 2000.0, "Pending", 201, 101))
        .await
        .unwrap();

    f.policies.delete(PolicyId::new(201)).await.unwrap();
    f.policyholders
        .delete(PolicyholderId::new(101))
        .await
        .unwrap();

    let all = f.claims.list().await.unwrap();
    assert_eq!(all[0].policy_type, "Unknown");
    assert_eq!(all[0].policyholder_name, "Unknown");
}

#[tokio::test]
async fn default_rules_accept_negative_and_oversized_amounts() {
    let f = fixture();
    seed_graph(&f).await;

    f.claims
        .create(draft(301, -50.0, "Pending", 201, 101))
        .await
        .unwrap();
    f.claims
        .create(draft(302, 99999.0, "Pending", 201, 101))
        .await
        .unwrap();
}

#[tokio::test]
async fn strict_rules_reject_negative_amount() {
    let f = fixture_with_rules(AmountRules::strict());
    seed_graph(&f).await;

    let err = f
        .claims
        .create(draft(301, -50.0, "Pending", 201, 101))
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::Validation(_)));
    assert_eq!(err.message(), "Claim amount cannot be negative");
}

#[tokio::test]
async fn strict_rules_reject_amount_above_policy_ceiling() {
    let f = fixture_with_rules(AmountRules::strict());
    seed_graph(&f).await;

    let err = f
        .claims
        .create(draft(301, 5000.01, "Pending", 201, 101))
        .await
        .unwrap_err();
    assert_eq!(err.message(), "Claim amount cannot exceed policy amount");

    // At the ceiling is fine.
    f.claims
        .create(draft(301, 5000.0, "Pending", 201, 101))
        .await
        .unwrap();
}

#[tokio::test]
async fn strict_rules_apply_on_update_too() {
    let f = fixture_with_rules(AmountRules::strict());
    seed_graph(&f).await;
    f.claims
        .create(draft(301, 100.0, "Pending", 201, 101))
        .await
        .unwrap();

    let err = f
        .claims
        .update(
            ClaimId::new(301),
            ClaimUpdate {
                amount: json!(5000.01),
                status: json!("Approved"),
                policy_id: json!(201),
                policyholder_id: json!(101),
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.message(), "Claim amount cannot exceed policy amount");
}

#[tokio::test]
async fn delete_missing_claim_is_not_found() {
    let f = fixture();
    let err = f.claims.delete(ClaimId::new(999)).await.unwrap_err();
    assert!(matches!(err, CoreError::NotFound(_)));
}
