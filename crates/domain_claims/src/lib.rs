//! Claims domain - monetary requests against policies
//!
//! A claim references both a policy and, denormalized, a policyholder.
//! Both references must resolve at create and update time. The amount
//! business rules (non-negativity, policy-ceiling bound) are a
//! configurable policy, disabled by default.

pub mod claim;
pub mod memory;
pub mod ports;
pub mod rules;
pub mod store;

pub use claim::{Claim, ClaimDraft, ClaimUpdate, ClaimWithContext};
pub use memory::MemoryClaimPort;
pub use ports::ClaimPort;
pub use rules::AmountRules;
pub use store::ClaimStore;
