//! Company domain errors

use thiserror::Error;

use core_kernel::{CoreError, PortError};

/// Errors that can occur in the company domain
#[derive(Debug, Error)]
pub enum CompanyError {
    /// No company has the given handle
    #[error("Company not found: {0}")]
    CompanyNotFound(String),

    /// A company with the given handle already exists
    #[error("Duplicate company: {0}")]
    DuplicateCompany(String),

    /// The handle breaks the handle rules
    #[error("Invalid handle: {0}")]
    InvalidHandle(String),

    /// Search bounds are negative or inverted
    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    /// A partial update supplied no fields
    #[error("No data")]
    EmptyUpdate,

    /// Field-level validation failed
    #[error("Company validation failed: {}", .0.join("; "))]
    ValidationFailed(Vec<String>),
}

impl From<CoreError> for CompanyError {
    fn from(error: CoreError) -> Self {
        CompanyError::InvalidHandle(error.to_string())
    }
}

impl From<CompanyError> for PortError {
    fn from(error: CompanyError) -> Self {
        match error {
            CompanyError::CompanyNotFound(handle) => PortError::not_found("Company", handle),
            CompanyError::DuplicateCompany(handle) => {
                PortError::conflict(format!("Duplicate company: {}", handle))
            }
            CompanyError::InvalidHandle(msg) => PortError::validation_field(msg, "handle"),
            CompanyError::InvalidFilter(msg) => PortError::validation(msg),
            CompanyError::EmptyUpdate => PortError::validation("No data"),
            CompanyError::ValidationFailed(errors) => PortError::validation(errors.join("; ")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_maps_to_conflict() {
        let port: PortError = CompanyError::DuplicateCompany("acme".into()).into();
        assert!(matches!(port, PortError::Conflict { .. }));
        assert!(port.to_string().contains("acme"));
    }

    #[test]
    fn test_not_found_maps_to_not_found() {
        let port: PortError = CompanyError::CompanyNotFound("acme".into()).into();
        assert!(port.is_not_found());
    }

    #[test]
    fn test_validation_failed_display_joins_errors() {
        let error = CompanyError::ValidationFailed(vec!["a".into(), "b".into()]);
        assert_eq!(error.to_string(), "Company validation failed: a; b");
    }
}
