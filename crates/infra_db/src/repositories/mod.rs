//! Repository implementations for domain entities
//!
//! Repositories own the SQL for their table and map between executor rows
//! and row structs. They are generic over the [`QueryExecutor`](crate::executor::QueryExecutor)
//! so the same code runs on a pool or on a test double.

pub mod company;
pub mod job;

pub use company::{CompanyRepository, CompanyRow};
pub use job::{JobRepository, JobRow};
