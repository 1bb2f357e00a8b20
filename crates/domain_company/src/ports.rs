//! Company Domain Ports
//!
//! The `CompanyPort` trait is what the route layer holds on to. Two adapters
//! implement it:
//!
//! - **PostgreSQL Adapter**: `infra_db::adapters::PostgresCompanyAdapter`
//! - **Mock Adapter**: [`mock::MockCompanyPort`], in memory, for tests
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_company::{CompanyPort, CompanyFilter};
//! use std::sync::Arc;
//!
//! pub struct CompanyService {
//!     companies: Arc<dyn CompanyPort>,
//! }
//!
//! impl CompanyService {
//!     pub async fn small_companies(&self) -> Result<Vec<Company>, PortError> {
//!         self.companies
//!             .find_companies(CompanyFilter::by_employees(None, Some(50)))
//!             .await
//!     }
//! }
//! ```

use async_trait::async_trait;

use core_kernel::{CompanyHandle, DomainPort, HealthCheckable, PortError};

use crate::company::{Company, CompanyDetail, CompanyUpdate, NewCompany};
use crate::filter::CompanyFilter;

/// The port trait for company operations
///
/// Every method either returns plain records or fails with a `PortError`:
/// `Conflict` for a duplicate handle, `NotFound` for a missing handle, and
/// `Validation` for inverted filter bounds, empty updates or invalid fields.
#[async_trait]
pub trait CompanyPort: DomainPort + HealthCheckable {
    /// Creates a company, failing with `Conflict` if the handle is taken
    async fn create_company(&self, company: NewCompany) -> Result<Company, PortError>;

    /// Lists companies matching the filter, ordered by name
    async fn find_companies(&self, filter: CompanyFilter) -> Result<Vec<Company>, PortError>;

    /// Fetches a company by handle
    async fn get_company(&self, handle: &CompanyHandle) -> Result<Company, PortError>;

    /// Fetches a company together with its jobs
    async fn get_company_detail(&self, handle: &CompanyHandle) -> Result<CompanyDetail, PortError>;

    /// Applies a partial update and returns the updated company
    async fn update_company(
        &self,
        handle: &CompanyHandle,
        update: CompanyUpdate,
    ) -> Result<Company, PortError>;

    /// Permanently deletes a company
    async fn remove_company(&self, handle: &CompanyHandle) -> Result<(), PortError>;
}

/// In-memory implementation of CompanyPort for testing
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    use core_kernel::HealthCheckResult;

    use crate::error::CompanyError;
    use crate::job::Job;
    use crate::validation::CompanyValidator;

    /// In-memory mock implementation of CompanyPort
    ///
    /// Listings are ordered by byte-wise comparison of names, not by a
    /// database collation; mixed-case or non-ASCII names may sort differently
    /// than `ORDER BY name` does in PostgreSQL.
    #[derive(Debug, Default)]
    pub struct MockCompanyPort {
        companies: Arc<RwLock<HashMap<CompanyHandle, Company>>>,
        jobs: Arc<RwLock<Vec<Job>>>,
    }

    impl MockCompanyPort {
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates with companies for testing
        pub async fn with_companies(companies: Vec<Company>) -> Self {
            let port = Self::new();
            {
                let mut map = port.companies.write().await;
                for company in companies {
                    map.insert(company.handle.clone(), company);
                }
            }
            port
        }

        /// Adds job postings returned by `get_company_detail`
        pub async fn add_jobs(&self, jobs: Vec<Job>) {
            self.jobs.write().await.extend(jobs);
        }

        /// Number of stored companies
        pub async fn len(&self) -> usize {
            self.companies.read().await.len()
        }

        pub async fn is_empty(&self) -> bool {
            self.companies.read().await.is_empty()
        }
    }

    impl DomainPort for MockCompanyPort {}

    #[async_trait]
    impl HealthCheckable for MockCompanyPort {
        async fn health_check(&self) -> HealthCheckResult {
            HealthCheckResult::healthy("mock-company-port", 0)
        }
    }

    #[async_trait]
    impl CompanyPort for MockCompanyPort {
        async fn create_company(&self, company: NewCompany) -> Result<Company, PortError> {
            CompanyValidator::validate_new(&company).into_result()?;

            let mut companies = self.companies.write().await;
            if companies.contains_key(&company.handle) {
                return Err(CompanyError::DuplicateCompany(company.handle.to_string()).into());
            }

            let company = company.into_company();
            companies.insert(company.handle.clone(), company.clone());
            Ok(company)
        }

        async fn find_companies(&self, filter: CompanyFilter) -> Result<Vec<Company>, PortError> {
            let kind = filter.resolve()?;

            let companies = self.companies.read().await;
            let mut results: Vec<Company> = companies
                .values()
                .filter(|c| kind.matches(c))
                .cloned()
                .collect();
            // byte order, see the type docs
            results.sort_by(|a, b| a.name.cmp(&b.name));

            Ok(results)
        }

        async fn get_company(&self, handle: &CompanyHandle) -> Result<Company, PortError> {
            self.companies
                .read()
                .await
                .get(handle)
                .cloned()
                .ok_or_else(|| PortError::not_found("Company", handle))
        }

        async fn get_company_detail(&self, handle: &CompanyHandle) -> Result<CompanyDetail, PortError> {
            let company = self.get_company(handle).await?;

            let mut jobs: Vec<Job> = self
                .jobs
                .read()
                .await
                .iter()
                .filter(|j| &j.company_handle == handle)
                .cloned()
                .collect();
            jobs.sort_by_key(|j| j.id);

            Ok(CompanyDetail { company, jobs })
        }

        async fn update_company(
            &self,
            handle: &CompanyHandle,
            update: CompanyUpdate,
        ) -> Result<Company, PortError> {
            CompanyValidator::validate_update(&update)?.into_result()?;

            let mut companies = self.companies.write().await;
            let company = companies
                .get_mut(handle)
                .ok_or_else(|| PortError::not_found("Company", handle))?;

            company.apply(&update);
            Ok(company.clone())
        }

        async fn remove_company(&self, handle: &CompanyHandle) -> Result<(), PortError> {
            self.companies
                .write()
                .await
                .remove(handle)
                .ok_or_else(|| PortError::not_found("Company", handle))?;

            self.jobs.write().await.retain(|j| &j.company_handle != handle);
            Ok(())
        }
    }
}
