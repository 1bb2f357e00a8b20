//! Domain Adapters
//!
//! Adapter implementations connecting domain ports to the database layer.
//! Each adapter implements its domain's port trait, translates between
//! domain models and row structs, and uses the repository layer for queries.

pub mod company;

pub use company::{SqlCompanyAdapter, PostgresCompanyAdapter};
