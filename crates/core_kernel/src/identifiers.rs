//! Strongly-typed identifiers for domain entities
//!
//! Companies are keyed by a human-readable handle (a slug such as
//! `"acme-widgets"`); jobs by a database-assigned integer. Wrapping both in
//! newtypes keeps them from being mixed up with arbitrary strings and numbers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Maximum length of a company handle, matching the `companies.handle` column
pub const MAX_HANDLE_LEN: usize = 25;

/// The unique business key of a company
///
/// A handle is non-empty, at most [`MAX_HANDLE_LEN`] characters long, and
/// lowercase. These are the rules the `companies.handle` column enforces, so
/// every stored handle can be read back.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CompanyHandle(String);

impl CompanyHandle {
    /// Parses and validates a handle
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidIdentifier` when the value breaks any of the
    /// handle rules.
    pub fn parse(value: impl Into<String>) -> Result<Self, CoreError> {
        let value = value.into();

        if value.is_empty() {
            return Err(CoreError::invalid_identifier("handle must not be empty"));
        }
        if value.chars().count() > MAX_HANDLE_LEN {
            return Err(CoreError::invalid_identifier(format!(
                "handle '{}' exceeds {} characters",
                value, MAX_HANDLE_LEN
            )));
        }
        if value != value.to_lowercase() {
            return Err(CoreError::invalid_identifier(format!(
                "handle '{}' must be lowercase",
                value
            )));
        }

        Ok(Self(value))
    }

    /// Returns the handle as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the handle, returning the inner string
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CompanyHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CompanyHandle {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CompanyHandle {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<CompanyHandle> for String {
    fn from(handle: CompanyHandle) -> String {
        handle.0
    }
}

impl AsRef<str> for CompanyHandle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Database-assigned identifier of a job posting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(i32);

impl JobId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JOB-{}", self.0)
    }
}

impl From<i32> for JobId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}
