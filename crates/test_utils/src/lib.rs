//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! company data-access test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data for common entities
//! - `builders`: Builder patterns for test data construction
//! - `database`: Database test helpers and container management
//! - `generators`: Property-based test data generators
//! - `tracing`: Log capture for tests

pub mod fixtures;
pub mod builders;
pub mod database;
pub mod generators;
pub mod tracing;

pub use fixtures::*;
pub use builders::*;
pub use database::*;
pub use generators::*;
pub use self::tracing::init_test_tracing;
