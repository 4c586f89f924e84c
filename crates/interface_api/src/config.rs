//! API configuration

use serde::Deserialize;

use domain_claims::AmountRules;

/// API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// JWT secret for authentication
    pub jwt_secret: String,
    /// JWT expiration in seconds
    pub jwt_expiration_secs: u64,
    /// Database URL
    pub database_url: String,
    /// Log level
    pub log_level: String,
    /// Username accepted by the login endpoint
    pub admin_username: String,
    /// Password accepted by the login endpoint
    pub admin_password: String,
    /// Reject claims with a negative amount
    pub require_non_negative_amounts: bool,
    /// Reject claims whose amount exceeds the policy coverage ceiling
    pub enforce_policy_ceiling: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            jwt_secret: "change-me-in-production".to_string(),
            jwt_expiration_secs: 3600,
            database_url: "postgres://localhost/claims_registry".to_string(),
            log_level: "info".to_string(),
            admin_username: "admin".to_string(),
            admin_password: "admin".to_string(),
            require_non_negative_amounts: false,
            enforce_policy_ceiling: false,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("API"))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the configured claim-amount rules
    pub fn amount_rules(&self) -> AmountRules {
        AmountRules {
            require_non_negative: self.require_non_negative_amounts,
            enforce_policy_ceiling: self.enforce_policy_ceiling,
        }
    }
}
