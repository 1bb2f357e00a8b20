//! Database error types
//!
//! This module defines the errors raised by the data-access layer. Client
//! errors (not found, duplicate, bad filter, empty update) are raised by the
//! repositories themselves; everything else comes from the store.

use thiserror::Error;

use core_kernel::PortError;
use domain_company::CompanyError;

/// Errors that can occur during database operations
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Failed to establish a database connection
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Entity not found in database
    #[error("Entity not found: {0}")]
    NotFound(String),

    /// Unique constraint violation or failed duplicate pre-check
    #[error("Duplicate entry: {0}")]
    DuplicateEntry(String),

    /// Search bounds rejected before querying
    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    /// Malformed request, such as an update with no fields
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Foreign key constraint violation
    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    /// Check constraint violation
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// A returned row did not have the expected shape
    #[error("Row mapping failed: {0}")]
    Mapping(String),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Pool exhaustion - no available connections
    #[error("Connection pool exhausted")]
    PoolExhausted,
}

impl DatabaseError {
    /// Creates a not found error for a specific entity type and identifier
    ///
    /// # Example
    ///
    /// ```rust
    /// use infra_db::DatabaseError;
    ///
    /// let error = DatabaseError::not_found("Company", "acme");
    /// assert!(error.to_string().contains("Company"));
    /// ```
    pub fn not_found(entity: &str, id: impl std::fmt::Display) -> Self {
        DatabaseError::NotFound(format!("{} with id '{}' not found", entity, id))
    }

    /// Creates a duplicate entry error
    pub fn duplicate(entity: &str, field: &str, value: impl std::fmt::Display) -> Self {
        DatabaseError::DuplicateEntry(format!(
            "{} with {} '{}' already exists",
            entity, field, value
        ))
    }

    /// Creates a row mapping error for a column
    pub fn mapping(column: &str, problem: impl std::fmt::Display) -> Self {
        DatabaseError::Mapping(format!("column '{}': {}", column, problem))
    }

    /// Checks if this error indicates a record was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, DatabaseError::NotFound(_))
    }

    /// Checks if this error is a constraint violation
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            DatabaseError::DuplicateEntry(_)
                | DatabaseError::ForeignKeyViolation(_)
                | DatabaseError::ConstraintViolation(_)
        )
    }

    /// Checks if this error is a connection-related issue
    pub fn is_connection_error(&self) -> bool {
        matches!(
            self,
            DatabaseError::ConnectionFailed(_) | DatabaseError::PoolExhausted
        )
    }

    /// Checks if the request itself was at fault
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            DatabaseError::NotFound(_)
                | DatabaseError::DuplicateEntry(_)
                | DatabaseError::InvalidFilter(_)
                | DatabaseError::BadRequest(_)
        )
    }
}

/// Converts SQLx errors to more specific DatabaseError variants
///
/// PostgreSQL error codes:
/// https://www.postgresql.org/docs/current/errcodes-appendix.html
impl From<&sqlx::Error> for DatabaseError {
    fn from(error: &sqlx::Error) -> Self {
        match error {
            sqlx::Error::RowNotFound => {
                DatabaseError::NotFound("Record not found".to_string())
            }
            sqlx::Error::PoolTimedOut => DatabaseError::PoolExhausted,
            sqlx::Error::Io(e) => DatabaseError::ConnectionFailed(e.to_string()),
            sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
                Some("23505") => DatabaseError::DuplicateEntry(db_err.message().to_string()),
                Some("23503") => DatabaseError::ForeignKeyViolation(db_err.message().to_string()),
                Some("23514") => DatabaseError::ConstraintViolation(db_err.message().to_string()),
                _ => DatabaseError::QueryFailed(db_err.message().to_string()),
            },
            _ => DatabaseError::QueryFailed(error.to_string()),
        }
    }
}

impl From<CompanyError> for DatabaseError {
    fn from(error: CompanyError) -> Self {
        match error {
            CompanyError::InvalidFilter(msg) => DatabaseError::InvalidFilter(msg),
            CompanyError::CompanyNotFound(handle) => DatabaseError::not_found("Company", handle),
            CompanyError::DuplicateCompany(handle) => DatabaseError::duplicate("Company", "handle", handle),
            CompanyError::EmptyUpdate => DatabaseError::BadRequest("No data".to_string()),
            other => DatabaseError::BadRequest(other.to_string()),
        }
    }
}

/// Translates a database error into the port error seen by callers
pub fn db_to_port_error(error: DatabaseError) -> PortError {
    match error {
        DatabaseError::NotFound(msg) => PortError::NotFound {
            entity_type: "Record".to_string(),
            id: msg,
        },
        DatabaseError::DuplicateEntry(msg) => PortError::conflict(msg),
        DatabaseError::InvalidFilter(msg) | DatabaseError::BadRequest(msg) => PortError::validation(msg),
        DatabaseError::ForeignKeyViolation(msg) | DatabaseError::ConstraintViolation(msg) => {
            PortError::validation(msg)
        }
        DatabaseError::ConnectionFailed(msg) => PortError::connection(msg),
        DatabaseError::PoolExhausted => PortError::connection("connection pool exhausted"),
        other => PortError::Internal {
            message: other.to_string(),
            source: Some(Box::new(other)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_constructor() {
        let error = DatabaseError::not_found("Company", "acme");
        assert!(error.is_not_found());
        assert!(error.is_client_error());
        assert_eq!(error.to_string(), "Entity not found: Company with id 'acme' not found");
    }

    #[test]
    fn test_sqlx_errors_are_classified() {
        assert!(DatabaseError::from(&sqlx::Error::RowNotFound).is_not_found());
        assert!(matches!(
            DatabaseError::from(&sqlx::Error::Protocol("bad frame".to_string())),
            DatabaseError::QueryFailed(ref msg) if msg.contains("bad frame")
        ));
    }

    #[test]
    fn test_duplicate_constructor() {
        let error = DatabaseError::duplicate("Company", "handle", "acme");
        assert!(error.is_constraint_violation());
        assert!(error.to_string().contains("already exists"));
    }

    #[test]
    fn test_pool_timeout_maps_to_exhausted() {
        let error = DatabaseError::from(&sqlx::Error::PoolTimedOut);
        assert!(error.is_connection_error());
    }

    #[test]
    fn test_company_error_conversion() {
        let error: DatabaseError = CompanyError::InvalidFilter("min > max".into()).into();
        assert!(matches!(error, DatabaseError::InvalidFilter(ref m) if m == "min > max"));

        let error: DatabaseError = CompanyError::EmptyUpdate.into();
        assert!(matches!(error, DatabaseError::BadRequest(ref m) if m == "No data"));
    }

    #[test]
    fn test_port_mapping() {
        assert!(db_to_port_error(DatabaseError::not_found("Company", "x")).is_not_found());
        assert!(matches!(
            db_to_port_error(DatabaseError::duplicate("Company", "handle", "x")),
            PortError::Conflict { .. }
        ));
        assert!(matches!(
            db_to_port_error(DatabaseError::InvalidFilter("bad".into())),
            PortError::Validation { .. }
        ));
        assert!(db_to_port_error(DatabaseError::PoolExhausted).is_transient());
        assert!(matches!(
            db_to_port_error(DatabaseError::Mapping("x".into())),
            PortError::Internal { .. }
        ));
    }
}
