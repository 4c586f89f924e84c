//! Test Data Builders
//!
//! Builder patterns for constructing request drafts with sensible defaults.
//! Tests specify only the fields they care about; the `with_raw_*` variants
//! take arbitrary JSON values for wrong-type scenarios.

use serde_json::{json, Value};

use domain_claims::ClaimDraft;
use domain_policy::PolicyDraft;
use domain_policyholder::PolicyholderDraft;

/// Builder for policyholder create drafts
pub struct PolicyholderBuilder {
    policyholder_id: Value,
    name: Value,
}

impl Default for PolicyholderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PolicyholderBuilder {
    pub fn new() -> Self {
        Self {
            policyholder_id: json!(101),
            name: json!("John Doe"),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.policyholder_id = json!(id);
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = json!(name);
        self
    }

    pub fn with_raw_id(mut self, value: Value) -> Self {
        self.policyholder_id = value;
        self
    }

    pub fn build(self) -> PolicyholderDraft {
        PolicyholderDraft {
            policyholder_id: self.policyholder_id,
            name: self.name,
        }
    }
}

/// Builder for policy create drafts
pub struct PolicyBuilder {
    policy_id: Value,
    policy_type: Value,
    amount: Value,
    policyholder_id: Value,
}

impl Default for PolicyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PolicyBuilder {
    pub fn new() -> Self {
        Self {
            policy_id: json!(201),
            policy_type: json!("Health"),
            amount: json!(5000),
            policyholder_id: json!(101),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.policy_id = json!(id);
        self
    }

    pub fn with_type(mut self, policy_type: &str) -> Self {
        self.policy_type = json!(policy_type);
        self
    }

    pub fn with_amount(mut self, amount: f64) -> Self {
        self.amount = json!(amount);
        self
    }

    pub fn with_policyholder(mut self, id: i64) -> Self {
        self.policyholder_id = json!(id);
        self
    }

    pub fn with_raw_amount(mut self, value: Value) -> Self {
        self.amount = value;
        self
    }

    pub fn build(self) -> PolicyDraft {
        PolicyDraft {
            policy_id: self.policy_id,
            policy_type: self.policy_type,
            amount: self.amount,
            policyholder_id: self.policyholder_id,
        }
    }
}

/// Builder for claim create drafts
pub struct ClaimBuilder {
    claim_id: Value,
    amount: Value,
    status: Value,
    policy_id: Value,
    policyholder_id: Value,
}

impl Default for ClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimBuilder {
    pub fn new() -> Self {
        Self {
            claim_id: json!(301),
            amount: json!(2000),
            status: json!("Pending"),
            policy_id: json!(201),
            policyholder_id: json!(101),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.claim_id = json!(id);
        self
    }

    pub fn with_amount(mut self, amount: f64) -> Self {
        self.amount = json!(amount);
        self
    }

    pub fn with_status(mut self, status: &str) -> Self {
        self.status = json!(status);
        self
    }

    pub fn with_policy(mut self, id: i64) -> Self {
        self.policy_id = json!(id);
        self
    }

    pub fn with_policyholder(mut self, id: i64) -> Self {
        self.policyholder_id = json!(id);
        self
    }

    pub fn build(self) -> ClaimDraft {
        ClaimDraft {
            claim_id: self.claim_id,
            amount: self.amount,
            status: self.status,
            policy_id: self.policy_id,
            policyholder_id: self.policyholder_id,
        }
    }
}
