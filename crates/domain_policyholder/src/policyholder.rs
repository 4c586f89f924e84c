//! Policyholder record and request drafts

use serde::{Deserialize, Serialize};
use serde_json::Value;

use core_kernel::fields;
use core_kernel::{CoreError, PolicyholderId};

/// A policyholder record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Policyholder {
    /// Externally assigned business ID, unique across all policyholders
    pub policyholder_id: PolicyholderId,
    /// Free-text display name
    pub name: String,
}

/// Unvalidated create payload
///
/// Fields come straight from the request body; missing fields are `Null`.
#[derive(Debug, Clone, Default)]
pub struct PolicyholderDraft {
    pub policyholder_id: Value,
    pub name: Value,
}

impl PolicyholderDraft {
    /// Runs the field checks and produces a record
    pub fn validate(&self) -> Result<Policyholder, CoreError> {
        let policyholder_id =
            fields::require_int(&self.policyholder_id, "Policyholder ID must be a number")?;
        let name = fields::require_string(&self.name, "Name must be a string")?;

        Ok(Policyholder {
            policyholder_id: PolicyholderId::new(policyholder_id),
            name,
        })
    }
}

/// Unvalidated update payload; only the name is mutable
#[derive(Debug, Clone, Default)]
pub struct PolicyholderUpdate {
    pub name: Value,
}

impl PolicyholderUpdate {
    pub fn validate(&self) -> Result<String, CoreError> {
        fields::require_string(&self.name, "Name must be a string")
    }
}
