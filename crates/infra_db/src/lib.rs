//! Infrastructure Database Layer
//!
//! PostgreSQL adapters for the three record collections, implemented with
//! SQLx runtime queries behind the domain port traits.
//!
//! # Architecture
//!
//! The crate follows the repository pattern: one repository per collection,
//! each implementing its domain's port so stores never see SQLx types.
//! Collections are keyed by the externally assigned business ID
//! (`BIGINT PRIMARY KEY`), which doubles as the unique index that closes
//! the duplicate-create race: inserts are conditional
//! (`ON CONFLICT DO NOTHING`) and report the collision through their row
//! count. There are no foreign-key constraints between collections;
//! dangling references are legal and masked at read time.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, ensure_schema, DatabaseConfig, PolicyholderRepository};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/claims")).await?;
//! ensure_schema(&pool).await?;
//! let repo = PolicyholderRepository::new(pool);
//! ```

pub mod error;
pub mod pool;
pub mod repositories;
pub mod schema;

pub use error::DatabaseError;
pub use pool::{create_pool, create_pool_from_url, DatabaseConfig, DatabasePool};
pub use repositories::{ClaimRepository, PolicyRepository, PolicyholderRepository};
pub use schema::ensure_schema;
