//! Store wiring and the canonical record graph

use std::sync::Arc;

use domain_claims::{AmountRules, ClaimStore, MemoryClaimPort};
use domain_policy::{MemoryPolicyPort, PolicyStore};
use domain_policyholder::{MemoryPolicyholderPort, PolicyholderStore};

use crate::builders::{ClaimBuilder, PolicyBuilder, PolicyholderBuilder};

/// The three stores wired to shared in-memory ports
pub struct RegistryStores {
    pub policyholders: PolicyholderStore,
    pub policies: PolicyStore,
    pub claims: ClaimStore,
}

/// Wires the stores to fresh in-memory ports with the given amount rules
pub fn memory_stores_with_rules(rules: AmountRules) -> RegistryStores {
    let policyholder_port: Arc<MemoryPolicyholderPort> = Arc::new(MemoryPolicyholderPort::new());
    let policy_port: Arc<MemoryPolicyPort> = Arc::new(MemoryPolicyPort::new());
    let claim_port = Arc::new(MemoryClaimPort::new());

    RegistryStores {
        policyholders: PolicyholderStore::new(policyholder_port.clone()),
        policies: PolicyStore::new(policy_port.clone(), policyholder_port.clone()),
        claims: ClaimStore::new(claim_port, policy_port, policyholder_port, rules),
    }
}

/// Wires the stores to fresh in-memory ports with default (permissive)
/// amount rules
pub fn memory_stores() -> RegistryStores {
    memory_stores_with_rules(AmountRules::default())
}

/// Seeds the canonical graph: policyholder 101 "John Doe", policy 201
/// "Health"/5000, claim 301 2000/"Pending"
pub async fn seed_canonical_graph(stores: &RegistryStores) {
    stores
        .policyholders
        .create(PolicyholderBuilder::new().build())
        .await
        .expect("seed policyholder");
    stores
        .policies
        .create(PolicyBuilder::new().build())
        .await
        .expect("seed policy");
    stores
        .claims
        .create(ClaimBuilder::new().build())
        .await
        .expect("seed claim");
}
