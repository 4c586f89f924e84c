//! Repository implementations
//!
//! One repository per record collection, each implementing the matching
//! domain port on PostgreSQL.

pub mod claims;
pub mod policies;
pub mod policyholders;

pub use claims::ClaimRepository;
pub use policies::PolicyRepository;
pub use policyholders::PolicyholderRepository;
