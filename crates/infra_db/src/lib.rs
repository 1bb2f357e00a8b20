//! Infrastructure Database Layer
//!
//! This crate provides PostgreSQL data access for companies and their jobs
//! using SQLx.
//!
//! # Architecture
//!
//! - [`executor`]: the [`QueryExecutor`] seam. Repositories only ever hand
//!   it a SQL template and positional bind values, and get field-keyed rows
//!   back. [`PgExecutor`] runs them on a connection pool.
//! - [`partial_update`]: compiles a sparse list of field assignments into a
//!   `SET` clause and its ordered bind values.
//! - [`repositories`]: `CompanyRepository` and `JobRepository`.
//! - [`adapters`]: implements the domain's `CompanyPort` on top of the
//!   repositories.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{DatabaseConfig, create_pool, PostgresCompanyAdapter};
//!
//! let pool = create_pool(DatabaseConfig::from_env()?).await?;
//! let companies = PostgresCompanyAdapter::new(pool);
//! ```

pub mod pool;
pub mod error;
pub mod executor;
pub mod partial_update;
pub mod repositories;
pub mod adapters;

pub use pool::{DatabasePool, create_pool, DatabaseConfig};
pub use error::DatabaseError;
pub use executor::{QueryExecutor, PgExecutor, SqlValue, Row};
pub use partial_update::{compile_partial_update, PartialUpdate};
pub use repositories::{CompanyRepository, CompanyRow, JobRepository, JobRow};
pub use adapters::{SqlCompanyAdapter, PostgresCompanyAdapter};
