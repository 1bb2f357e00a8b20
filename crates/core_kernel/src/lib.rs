//! Core Kernel - Foundational types shared by the Jobly crates
//!
//! This crate provides the building blocks used by the domain and
//! infrastructure layers:
//! - Strongly-typed identifiers (company handles, job ids)
//! - The port error type and port marker traits
//! - Health check types for adapters

pub mod identifiers;
pub mod error;
pub mod ports;

pub use identifiers::{CompanyHandle, JobId, MAX_HANDLE_LEN};
pub use error::CoreError;
pub use ports::{
    PortError, DomainPort, HealthCheckable, HealthCheckResult, AdapterHealth,
};
