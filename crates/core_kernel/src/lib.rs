//! Core Kernel - Foundational types for the claims registry
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - The shared error taxonomy for record operations
//! - Strongly-typed business identifiers
//! - Field-level validation of loosely-typed request payloads

pub mod error;
pub mod fields;
pub mod identifiers;

pub use error::CoreError;
pub use identifiers::{ClaimId, PolicyId, PolicyholderId};
