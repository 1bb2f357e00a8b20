//! Company entity and request types
//!
//! A company is identified by its handle, which never changes after creation.
//! Every other column can be replaced through a partial update.

use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use core_kernel::CompanyHandle;
use crate::job::Job;

/// A persisted company
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    /// Unique, immutable business key
    pub handle: CompanyHandle,
    /// Display name
    pub name: String,
    /// Free-form description
    pub description: String,
    /// Head count, when known
    pub num_employees: Option<i32>,
    /// Logo location, when known
    pub logo_url: Option<String>,
}

impl Company {
    /// Applies a partial update in place, leaving absent fields untouched
    pub fn apply(&mut self, update: &CompanyUpdate) {
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(description) = &update.description {
            self.description = description.clone();
        }
        if let Some(num_employees) = update.num_employees {
            self.num_employees = num_employees;
        }
        if let Some(logo_url) = &update.logo_url {
            self.logo_url = logo_url.clone();
        }
    }
}

/// Data required to create a company
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewCompany {
    pub handle: CompanyHandle,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: String,
    #[validate(range(min = 0, message = "numEmployees must not be negative"))]
    pub num_employees: Option<i32>,
    #[validate(url(message = "logoUrl must be a valid URL"))]
    pub logo_url: Option<String>,
}

impl NewCompany {
    /// Creates a request with the required fields and no optional data
    pub fn new(handle: CompanyHandle, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            handle,
            name: name.into(),
            description: description.into(),
            num_employees: None,
            logo_url: None,
        }
    }

    pub fn with_num_employees(mut self, num_employees: i32) -> Self {
        self.num_employees = Some(num_employees);
        self
    }

    pub fn with_logo_url(mut self, logo_url: impl Into<String>) -> Self {
        self.logo_url = Some(logo_url.into());
        self
    }

    /// The record the store is expected to hold after a successful insert
    pub fn into_company(self) -> Company {
        Company {
            handle: self.handle,
            name: self.name,
            description: self.description,
            num_employees: self.num_employees,
            logo_url: self.logo_url,
        }
    }
}

/// A sparse set of column changes for an existing company
///
/// The nullable columns use a nested `Option`: the outer level says whether
/// the field was supplied, the inner level whether it is being cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "supplied",
        skip_serializing_if = "Option::is_none"
    )]
    pub num_employees: Option<Option<i32>>,
    #[serde(
        default,
        deserialize_with = "supplied",
        skip_serializing_if = "Option::is_none"
    )]
    pub logo_url: Option<Option<String>>,
}

/// Distinguishes an explicit `null` from an absent key
fn supplied<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl CompanyUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn num_employees(mut self, num_employees: Option<i32>) -> Self {
        self.num_employees = Some(num_employees);
        self
    }

    pub fn logo_url(mut self, logo_url: Option<String>) -> Self {
        self.logo_url = Some(logo_url);
        self
    }

    /// Returns true when no field was supplied
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.num_employees.is_none()
            && self.logo_url.is_none()
    }
}

/// A company together with its job postings, ordered by job id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyDetail {
    #[serde(flatten)]
    pub company: Company,
    pub jobs: Vec<Job>,
}
