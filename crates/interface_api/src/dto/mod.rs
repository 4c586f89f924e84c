//! Request/Response data transfer objects
//!
//! Create and update request bodies keep their fields as raw JSON values:
//! the stores own type and format validation, so a wrong-typed field
//! reaches the pipeline and comes back with its field-specific message
//! instead of dying in the deserializer.

pub mod auth;
pub mod claims;
pub mod policies;
pub mod policyholders;

use serde::Serialize;
use utoipa::ToSchema;

/// Body returned by successful mutations
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    /// Outcome description, e.g. "Policy created successfully"
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
