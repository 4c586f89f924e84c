//! Policyholder repository

use async_trait::async_trait;
use sqlx::PgPool;

use core_kernel::{CoreError, PolicyholderId};
use domain_policyholder::{Policyholder, PolicyholderPort};

use crate::error::DatabaseError;

/// PostgreSQL-backed implementation of [`PolicyholderPort`]
#[derive(Debug, Clone)]
pub struct PolicyholderRepository {
    pool: PgPool,
}

impl PolicyholderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row for a policyholder record
#[derive(Debug, sqlx::FromRow)]
struct PolicyholderRow {
    policyholder_id: i64,
    name: String,
}

impl From<PolicyholderRow> for Policyholder {
    fn from(row: PolicyholderRow) -> Self {
        Policyholder {
            policyholder_id: PolicyholderId::new(row.policyholder_id),
            name: row.name,
        }
    }
}

#[async_trait]
impl PolicyholderPort for PolicyholderRepository {
    async fn insert(&self, record: &Policyholder) -> Result<bool, CoreError> {
        let result = sqlx::query(
            r#"
            INSERT INTO policyholders (policyholder_id, name)
            VALUES ($1, $2)
            ON CONFLICT (policyholder_id) DO NOTHING
            "#,
        )
        .bind(record.policyholder_id.value())
        .bind(&record.name)
        .execute(&self.pool)
        .await
        .map_err(DatabaseError::from)?;

        Ok(result.rows_affected() > 0)
    }

    async fn find(&self, id: PolicyholderId) -> Result<Option<Policyholder>, CoreError> {
        let row = sqlx::query_as::<_, PolicyholderRow>(
            r#"
            SELECT policyholder_id, name
            FROM policyholders
            WHERE policyholder_id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::from)?;

        Ok(row.map(Policyholder::from))
    }

    async fn list(&self) -> Result<Vec<Policyholder>, CoreError> {
        let rows = sqlx::query_as::<_, PolicyholderRow>(
            r#"
            SELECT policyholder_id, name
            FROM policyholders
            ORDER BY policyholder_id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(DatabaseError::from)?;

        Ok(rows.into_iter().map(Policyholder::from).collect())
    }

    async fn update(&self, record: &Policyholder) -> Result<bool, CoreError> {
        let result = sqlx::query(
            r#"
            UPDATE policyholders
            SET name = $2
            WHERE policyholder_id = $1
            "#,
        )
        .bind(record.policyholder_id.value())
        .bind(&record.name)
        .execute(&self.pool)
        .await
        .map_err(DatabaseError::from)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: PolicyholderId) -> Result<bool, CoreError> {
        let result = sqlx::query(
            r#"
            DELETE FROM policyholders
            WHERE policyholder_id = $1
            "#,
        )
        .bind(id.value())
        .execute(&self.pool)
        .await
        .map_err(DatabaseError::from)?;

        Ok(result.rows_affected() > 0)
    }
}
