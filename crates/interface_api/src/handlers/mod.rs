//! Request handlers

pub mod claims;
pub mod health;
pub mod login;
pub mod policies;
pub mod policyholders;
