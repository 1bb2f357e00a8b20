//! Company search filters
//!
//! A caller may narrow a listing by a case-insensitive name fragment, by an
//! employee count range, or both. Missing bounds fall back to
//! [`DEFAULT_MIN_EMPLOYEES`] and [`DEFAULT_MAX_EMPLOYEES`]. Companies without a
//! recorded head count never fall inside a range.

use serde::{Deserialize, Serialize};

use crate::company::Company;
use crate::error::CompanyError;

/// Lower employee bound used when only a maximum is supplied
pub const DEFAULT_MIN_EMPLOYEES: i32 = 0;

/// Upper employee bound used when only a minimum is supplied
pub const DEFAULT_MAX_EMPLOYEES: i32 = 1_000_000;

/// Optional search criteria supplied by the caller
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyFilter {
    /// Case-insensitive substring of the company name
    pub name: Option<String>,
    /// Inclusive lower bound on head count
    pub min_employees: Option<i32>,
    /// Inclusive upper bound on head count
    pub max_employees: Option<i32>,
}

/// Inclusive employee count range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmployeeRange {
    pub min: i32,
    pub max: i32,
}

impl EmployeeRange {
    /// Returns true if a recorded head count falls within the range
    pub fn contains(&self, num_employees: Option<i32>) -> bool {
        num_employees.map_or(false, |n| n >= self.min && n <= self.max)
    }
}

/// The single query shape a filter resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind<'a> {
    /// No criteria: every company
    All,
    /// Name fragment only
    Name(&'a str),
    /// Employee range only
    Range(EmployeeRange),
    /// Name fragment and employee range
    NameAndRange { name: &'a str, range: EmployeeRange },
}

impl<'a> FilterKind<'a> {
    /// Returns true if the company satisfies this filter
    pub fn matches(&self, company: &Company) -> bool {
        match self {
            FilterKind::All => true,
            FilterKind::Name(name) => name_contains(&company.name, name),
            FilterKind::Range(range) => range.contains(company.num_employees),
            FilterKind::NameAndRange { name, range } => {
                name_contains(&company.name, name) && range.contains(company.num_employees)
            }
        }
    }
}

/// Case-insensitive substring test
pub fn name_contains(name: &str, fragment: &str) -> bool {
    name.to_lowercase().contains(&fragment.to_lowercase())
}

impl CompanyFilter {
    /// A filter with no criteria
    pub fn all() -> Self {
        Self::default()
    }

    /// A filter on the name fragment only
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// A filter on the employee range only
    pub fn by_employees(min: Option<i32>, max: Option<i32>) -> Self {
        Self {
            name: None,
            min_employees: min,
            max_employees: max,
        }
    }

    pub fn with_min_employees(mut self, min: i32) -> Self {
        self.min_employees = Some(min);
        self
    }

    pub fn with_max_employees(mut self, max: i32) -> Self {
        self.max_employees = Some(max);
        self
    }

    /// Validates the bounds and picks the query shape
    ///
    /// An empty name fragment counts as absent.
    ///
    /// # Errors
    ///
    /// Returns `CompanyError::InvalidFilter` if a bound is negative or if the
    /// minimum exceeds the maximum.
    pub fn resolve(&self) -> Result<FilterKind<'_>, CompanyError> {
        for (label, bound) in [("minEmployees", self.min_employees), ("maxEmployees", self.max_employees)] {
            if let Some(value) = bound {
                if value < 0 {
                    return Err(CompanyError::InvalidFilter(format!(
                        "{} must not be negative, got {}",
                        label, value
                    )));
                }
            }
        }

        if let (Some(min), Some(max)) = (self.min_employees, self.max_employees) {
            if min > max {
                return Err(CompanyError::InvalidFilter(format!(
                    "minEmployees ({}) cannot be greater than maxEmployees ({})",
                    min, max
                )));
            }
        }

        let name = self.name.as_deref().filter(|n| !n.is_empty());
        let range = if self.min_employees.is_some() || self.max_employees.is_some() {
            Some(EmployeeRange {
                min: self.min_employees.unwrap_or(DEFAULT_MIN_EMPLOYEES),
                max: self.max_employees.unwrap_or(DEFAULT_MAX_EMPLOYEES),
            })
        } else {
            None
        };

        Ok(match (name, range) {
            (Some(name), Some(range)) => FilterKind::NameAndRange { name, range },
            (None, Some(range)) => FilterKind::Range(range),
            (Some(name), None) => FilterKind::Name(name),
            (None, None) => FilterKind::All,
        })
    }
}
