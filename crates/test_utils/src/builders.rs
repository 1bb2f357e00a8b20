//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! Handles are unique per builder so tests sharing a database do not collide.

use fake::faker::company::en::{CatchPhrase, CompanyName};
use fake::Fake;
use uuid::Uuid;

use core_kernel::CompanyHandle;
use domain_company::{Company, CompanyUpdate, NewCompany};

/// Generates a handle that is valid and unlikely to repeat
pub fn unique_handle() -> CompanyHandle {
    let suffix = Uuid::new_v4().simple().to_string();
    CompanyHandle::parse(format!("co-{}", &suffix[..12])).expect("generated handle must be valid")
}

/// Builder for constructing test companies
pub struct TestCompanyBuilder {
    handle: CompanyHandle,
    name: String,
    description: String,
    num_employees: Option<i32>,
    logo_url: Option<String>,
}

impl Default for TestCompanyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestCompanyBuilder {
    /// Creates a new builder with a unique handle and fake name
    pub fn new() -> Self {
        let handle = unique_handle();
        let company_name: String = CompanyName().fake();
        Self {
            name: format!("{} {}", company_name, handle),
            description: CatchPhrase().fake(),
            num_employees: Some((1..1000).fake()),
            logo_url: None,
            handle,
        }
    }

    /// Sets the handle
    pub fn with_handle(mut self, handle: CompanyHandle) -> Self {
        self.handle = handle;
        self
    }

    /// Sets the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the head count, `None` for unknown
    pub fn with_num_employees(mut self, num_employees: Option<i32>) -> Self {
        self.num_employees = num_employees;
        self
    }

    /// Sets the logo URL
    pub fn with_logo_url(mut self, logo_url: impl Into<String>) -> Self {
        self.logo_url = Some(logo_url.into());
        self
    }

    /// Builds a creation request
    pub fn build_new(self) -> NewCompany {
        NewCompany {
            handle: self.handle,
            name: self.name,
            description: self.description,
            num_employees: self.num_employees,
            logo_url: self.logo_url,
        }
    }

    /// Builds the stored entity
    pub fn build(self) -> Company {
        self.build_new().into_company()
    }
}

/// Builds an update touching every field
pub fn full_update() -> CompanyUpdate {
    let name: String = CompanyName().fake();
    CompanyUpdate::new()
        .name(format!("{} Renamed", name))
        .description(CatchPhrase().fake::<String>())
        .num_employees(Some((1..1000).fake()))
        .logo_url(Some("https://renamed.test/logo.png".to_string()))
}
