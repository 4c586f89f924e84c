//! Configurable amount business rules
//!
//! Non-negativity and the policy-ceiling bound are policy, not hard-coded
//! invariants. Both default to off; deployments opt in through
//! configuration. The checks run after reference resolution (the ceiling
//! needs the referenced policy) and before the uniqueness check.

use core_kernel::CoreError;
use domain_policy::Policy;

/// Toggles for the claim-amount business rules
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AmountRules {
    /// Reject claims with a negative amount
    pub require_non_negative: bool,
    /// Reject claims whose amount exceeds the referenced policy's coverage
    /// ceiling
    pub enforce_policy_ceiling: bool,
}

impl AmountRules {
    /// Both rules enabled
    pub fn strict() -> Self {
        Self {
            require_non_negative: true,
            enforce_policy_ceiling: true,
        }
    }

    /// Applies the enabled rules to a claimed amount
    pub fn check(&self, amount: f64, policy: &Policy) -> Result<(), CoreError> {
        if self.require_non_negative && amount < 0.0 {
            return Err(CoreError::validation("Claim amount cannot be negative"));
        }
        if self.enforce_policy_ceiling && amount > policy.amount {
            return Err(CoreError::validation(
                "Claim amount cannot exceed policy amount",
            ));
        }
        Ok(())
    }
}
