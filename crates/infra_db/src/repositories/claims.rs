//! Claim repository

use async_trait::async_trait;
use sqlx::PgPool;

use core_kernel::{ClaimId, CoreError, PolicyId, PolicyholderId};
use domain_claims::{Claim, ClaimPort};

use crate::error::DatabaseError;

/// PostgreSQL-backed implementation of [`ClaimPort`]
#[derive(Debug, Clone)]
pub struct ClaimRepository {
    pool: PgPool,
}

impl ClaimRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row for a claim record
#[derive(Debug, sqlx::FromRow)]
struct ClaimRow {
    claim_id: i64,
    amount: f64,
    status: String,
    policy_id: i64,
    policyholder_id: i64,
}

impl From<ClaimRow> for Claim {
    fn from(row: ClaimRow) -> Self {
        Claim {
            claim_id: ClaimId::new(row.claim_id),
            amount: row.amount,
            status: row.status,
            policy_id: PolicyId::new(row.policy_id),
            policyholder_id: PolicyholderId::new(row.policyholder_id),
        }
    }
}

#[async_trait]
impl ClaimPort for ClaimRepository {
    async fn insert(&self, record: &Claim) -> Result<bool, CoreError> {
        let result = sqlx::query(
            r#"
            INSERT INTO claims (claim_id, amount, status, policy_id, policyholder_id)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (claim_id) DO NOTHING
            "#,
        )
        .bind(record.claim_id.value())
        .bind(record.amount)
        .bind(&record.status)
        .bind(record.policy_id.value())
        .bind(record.policyholder_id.value())
        .execute(&self.pool)
        .await
        .map_err(DatabaseError::from)?;

        Ok(result.rows_affected() > 0)
    }

    async fn find(&self, id: ClaimId) -> Result<Option<Claim>, CoreError> {
        let row = sqlx::query_as::<_, ClaimRow>(
            r#"
            SELECT claim_id, amount, status, policy_id, policyholder_id
            FROM claims
            WHERE claim_id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::from)?;

        Ok(row.map(Claim::from))
    }

    async fn list(&self) -> Result<Vec<Claim>, CoreError> {
        let rows = sqlx::query_as::<_, ClaimRow>(
            r#"
            SELECT claim_id, amount, status, policy_id, policyholder_id
            FROM claims
            ORDER BY claim_id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(DatabaseError::from)?;

        Ok(rows.into_iter().map(Claim::from).collect())
    }

    async fn update(&self, record: &Claim) -> Result<bool, CoreError> {
        let result = sqlx::query(
            r#"
            UPDATE claims
            SET amount = $2, status = $3, policy_id = $4, policyholder_id = $5
            WHERE claim_id = $1
            "#,
        )
        .bind(record.claim_id.value())
        .bind(record.amount)
        .bind(&record.status)
        .bind(record.policy_id.value())
        .bind(record.policyholder_id.value())
        .execute(&self.pool)
        .await
        .map_err(DatabaseError::from)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: ClaimId) -> Result<bool, CoreError> {
        let result = sqlx::query(
            r#"
            DELETE FROM claims
            WHERE claim_id = $1
            "#,
        )
        .bind(id.value())
        .execute(&self.pool)
        .await
        .map_err(DatabaseError::from)?;

        Ok(result.rows_affected() > 0)
    }
}
