//! SQL Company Adapter
//!
//! Implements the domain's `CompanyPort` on top of [`CompanyRepository`] and
//! [`JobRepository`]. The adapter:
//!
//! - Validates requests before they reach the store
//! - Converts row structs back to domain models
//! - Translates `DatabaseError` into `PortError`
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::PostgresCompanyAdapter;
//! use domain_company::CompanyPort;
//! use std::sync::Arc;
//!
//! let port: Arc<dyn CompanyPort> = Arc::new(PostgresCompanyAdapter::new(pool));
//! let company = port.get_company(&handle).await?;
//! ```

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, instrument};

use core_kernel::{CompanyHandle, DomainPort, HealthCheckResult, HealthCheckable, PortError};
use domain_company::{
    Company, CompanyDetail, CompanyFilter, CompanyPort, CompanyUpdate, CompanyValidator, Job,
    NewCompany,
};

use crate::error::{db_to_port_error, DatabaseError};
use crate::executor::{PgExecutor, QueryExecutor};
use crate::repositories::{CompanyRepository, CompanyRow, JobRepository, JobRow};

const ADAPTER_ID: &str = "sql-company-adapter";

/// `CompanyPort` implementation over any [`QueryExecutor`]
///
/// # Error Handling
///
/// - `DatabaseError::NotFound` -> `PortError::NotFound`
/// - `DatabaseError::DuplicateEntry` -> `PortError::Conflict`
/// - `DatabaseError::InvalidFilter` / `BadRequest` -> `PortError::Validation`
/// - connection failures -> `PortError::Connection`
/// - everything else -> `PortError::Internal`
#[derive(Debug)]
pub struct SqlCompanyAdapter<E> {
    companies: CompanyRepository<Arc<E>>,
    jobs: JobRepository<Arc<E>>,
    executor: Arc<E>,
}

/// The adapter wired to a PostgreSQL pool
pub type PostgresCompanyAdapter = SqlCompanyAdapter<PgExecutor>;

impl PostgresCompanyAdapter {
    /// Creates a new PostgreSQL company adapter
    pub fn new(pool: PgPool) -> Self {
        Self::with_executor(Arc::new(PgExecutor::new(pool)))
    }
}

impl<E: QueryExecutor> SqlCompanyAdapter<E> {
    /// Creates an adapter sharing one executor between both repositories
    pub fn with_executor(executor: Arc<E>) -> Self {
        Self {
            companies: CompanyRepository::new(Arc::clone(&executor)),
            jobs: JobRepository::new(Arc::clone(&executor)),
            executor,
        }
    }

    /// Returns the company repository, for operations the port does not expose
    pub fn repository(&self) -> &CompanyRepository<Arc<E>> {
        &self.companies
    }
}

impl<E> Clone for SqlCompanyAdapter<E> {
    fn clone(&self) -> Self {
        Self {
            companies: self.companies.clone(),
            jobs: self.jobs.clone(),
            executor: Arc::clone(&self.executor),
        }
    }
}

impl<E: QueryExecutor + 'static> DomainPort for SqlCompanyAdapter<E> {}

#[async_trait]
impl<E: QueryExecutor + 'static> HealthCheckable for SqlCompanyAdapter<E> {
    async fn health_check(&self) -> HealthCheckResult {
        let start = Instant::now();
        let result = self.executor.execute("SELECT 1", &[]).await;
        let latency_ms = start.elapsed().as_millis() as u64;

        match result {
            Ok(_) => HealthCheckResult::healthy(ADAPTER_ID, latency_ms),
            Err(e) => HealthCheckResult::unhealthy(ADAPTER_ID, latency_ms, format!("Database error: {}", e)),
        }
    }
}

#[async_trait]
impl<E: QueryExecutor + 'static> CompanyPort for SqlCompanyAdapter<E> {
    #[instrument(skip(self, company), fields(handle = %company.handle))]
    async fn create_company(&self, company: NewCompany) -> Result<Company, PortError> {
        CompanyValidator::validate_new(&company).into_result()?;

        let handle = company.handle.clone();
        let row = self
            .companies
            .create(company)
            .await
            .map_err(|e| to_port_error(e, &handle))?;

        debug!("Company created");
        row_to_company(row)
    }

    #[instrument(skip(self))]
    async fn find_companies(&self, filter: CompanyFilter) -> Result<Vec<Company>, PortError> {
        let rows = self.companies.find_all(&filter).await.map_err(db_to_port_error)?;

        debug!(count = rows.len(), "Companies found");
        rows.into_iter().map(row_to_company).collect()
    }

    #[instrument(skip(self, handle), fields(handle = %handle))]
    async fn get_company(&self, handle: &CompanyHandle) -> Result<Company, PortError> {
        let row = self
            .companies
            .get(handle.as_str())
            .await
            .map_err(|e| to_port_error(e, handle))?;

        row_to_company(row)
    }

    #[instrument(skip(self, handle), fields(handle = %handle))]
    async fn get_company_detail(&self, handle: &CompanyHandle) -> Result<CompanyDetail, PortError> {
        let company = self.get_company(handle).await?;

        let jobs = self
            .jobs
            .find_by_company(handle.as_str())
            .await
            .map_err(db_to_port_error)?
            .into_iter()
            .map(row_to_job)
            .collect::<Result<Vec<Job>, PortError>>()?;

        debug!(jobs = jobs.len(), "Company detail loaded");
        Ok(CompanyDetail { company, jobs })
    }

    #[instrument(skip(self, handle, update), fields(handle = %handle))]
    async fn update_company(
        &self,
        handle: &CompanyHandle,
        update: CompanyUpdate,
    ) -> Result<Company, PortError> {
        CompanyValidator::validate_update(&update)?.into_result()?;

        let row = self
            .companies
            .update(handle.as_str(), &update)
            .await
            .map_err(|e| to_port_error(e, handle))?;

        row_to_company(row)
    }

    #[instrument(skip(self, handle), fields(handle = %handle))]
    async fn remove_company(&self, handle: &CompanyHandle) -> Result<(), PortError> {
        self.companies
            .remove(handle.as_str())
            .await
            .map_err(|e| to_port_error(e, handle))
    }
}

/// Maps a database error, naming the company on NotFound
fn to_port_error(error: DatabaseError, handle: &CompanyHandle) -> PortError {
    if error.is_not_found() {
        PortError::not_found("Company", handle)
    } else {
        db_to_port_error(error)
    }
}

fn row_to_company(row: CompanyRow) -> Result<Company, PortError> {
    row.into_company()
        .map_err(|e| PortError::internal(format!("Invalid company row: {}", e)))
}

fn row_to_job(row: JobRow) -> Result<Job, PortError> {
    row.into_job()
        .map_err(|e| PortError::internal(format!("Invalid job row: {}", e)))
}
