//! Schema bootstrap
//!
//! Creates the three record collections if they are missing. Each table is
//! keyed by the externally assigned business ID; reference columns carry no
//! foreign-key constraints because deletes never cascade and dangling
//! references are masked at read time.

use sqlx::PgPool;
use tracing::info;

use crate::error::DatabaseError;

const CREATE_POLICYHOLDERS: &str = r#"
CREATE TABLE IF NOT EXISTS policyholders (
    policyholder_id BIGINT PRIMARY KEY,
    name            TEXT NOT NULL
)
"#;

const CREATE_POLICIES: &str = r#"
CREATE TABLE IF NOT EXISTS policies (
    policy_id       BIGINT PRIMARY KEY,
    policy_type     TEXT NOT NULL,
    amount          DOUBLE PRECISION NOT NULL,
    policyholder_id BIGINT NOT NULL
)
"#;

const CREATE_CLAIMS: &str = r#"
CREATE TABLE IF NOT EXISTS claims (
    claim_id        BIGINT PRIMARY KEY,
    amount          DOUBLE PRECISION NOT NULL,
    status          TEXT NOT NULL,
    policy_id       BIGINT NOT NULL,
    policyholder_id BIGINT NOT NULL
)
"#;

/// Creates the record collections idempotently
pub async fn ensure_schema(pool: &PgPool) -> Result<(), DatabaseError> {
    for statement in [CREATE_POLICYHOLDERS, CREATE_POLICIES, CREATE_CLAIMS] {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Schema ready");
    Ok(())
}
