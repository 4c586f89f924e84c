//! Policy repository

use async_trait::async_trait;
use sqlx::PgPool;

use core_kernel::{CoreError, PolicyId, PolicyholderId};
use domain_policy::{Policy, PolicyPort};

use crate::error::DatabaseError;

/// PostgreSQL-backed implementation of [`PolicyPort`]
#[derive(Debug, Clone)]
pub struct PolicyRepository {
    pool: PgPool,
}

impl PolicyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row for a policy record
#[derive(Debug, sqlx::FromRow)]
struct PolicyRow {
    policy_id: i64,
    policy_type: String,
    amount: f64,
    policyholder_id: i64,
}

impl From<PolicyRow> for Policy {
    fn from(row: PolicyRow) -> Self {
        Policy {
            policy_id: PolicyId::new(row.policy_id),
            policy_type: row.policy_type,
            amount: row.amount,
            policyholder_id: PolicyholderId::new(row.policyholder_id),
        }
    }
}

#[async_trait]
impl PolicyPort for PolicyRepository {
    async fn insert(&self, record: &Policy) -> Result<bool, CoreError> {
        let result = sqlx::query(
            r#"
            INSERT INTO policies (policy_id, policy_type, amount, policyholder_id)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (policy_id) DO NOTHING
            "#,
        )
        .bind(record.policy_id.value())
        .bind(&record.policy_type)
        .bind(record.amount)
        .bind(record.policyholder_id.value())
        .execute(&self.pool)
        .await
        .map_err(DatabaseError::from)?;

        Ok(result.rows_affected() > 0)
    }

    async fn find(&self, id: PolicyId) -> Result<Option<Policy>, CoreError> {
        let row = sqlx::query_as::<_, PolicyRow>(
            r#"
            SELECT policy_id, policy_type, amount, policyholder_id
            FROM policies
            WHERE policy_id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::from)?;

        Ok(row.map(Policy::from))
    }

    async fn list(&self) -> Result<Vec<Policy>, CoreError> {
        let rows = sqlx::query_as::<_, PolicyRow>(
            r#"
            SELECT policy_id, policy_type, amount, policyholder_id
            FROM policies
            ORDER BY policy_id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(DatabaseError::from)?;

        Ok(rows.into_iter().map(Policy::from).collect())
    }

    async fn update(&self, record: &Policy) -> Result<bool, CoreError> {
        let result = sqlx::query(
            r#"
            UPDATE policies
            SET policy_type = $2, amount = $3, policyholder_id = $4
            WHERE policy_id = $1
            "#,
        )
        .bind(record.policy_id.value())
        .bind(&record.policy_type)
        .bind(record.amount)
        .bind(record.policyholder_id.value())
        .execute(&self.pool)
        .await
        .map_err(DatabaseError::from)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: PolicyId) -> Result<bool, CoreError> {
        let result = sqlx::query(
            r#"
            DELETE FROM policies
            WHERE policy_id = $1
            "#,
        )
        .bind(id.value())
        .execute(&self.pool)
        .await
        .map_err(DatabaseError::from)?;

        Ok(result.rows_affected() > 0)
    }
}
