//! Policy domain - coverage contracts owned by policyholders
//!
//! Every policy carries a `policyholder_id` reference that must resolve at
//! create and update time. The reference is a lookup by business ID, not
//! ownership: deleting the policyholder later leaves the policy in place
//! with a dangling reference that list enrichment masks as `"Unknown"`.

pub mod memory;
pub mod policy;
pub mod ports;
pub mod store;

pub use memory::MemoryPolicyPort;
pub use policy::{Policy, PolicyDraft, PolicyUpdate, PolicyWithHolder};
pub use ports::PolicyPort;
pub use store::PolicyStore;
