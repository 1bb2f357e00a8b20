//! Job repository implementation
//!
//! Read-only access to the `jobs` table, used to list a company's postings.

use rust_decimal::Decimal;

use core_kernel::{CompanyHandle, CoreError, JobId};
use domain_company::Job;

use crate::error::DatabaseError;
use crate::executor::{QueryExecutor, Row, SqlValue};

/// Repository for the `jobs` table
#[derive(Debug, Clone)]
pub struct JobRepository<E> {
    executor: E,
}

impl<E: QueryExecutor> JobRepository<E> {
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    /// Lists the jobs of a company, ordered by id
    ///
    /// An unknown handle yields an empty list; existence of the company is
    /// the caller's concern.
    pub async fn find_by_company(&self, handle: &str) -> Result<Vec<JobRow>, DatabaseError> {
        let rows = self
            .executor
            .execute(
                "SELECT id, title, salary, equity, company_handle \
                 FROM jobs \
                 WHERE company_handle = $1 \
                 ORDER BY id",
                &[SqlValue::text(handle)],
            )
            .await?;

        rows.iter().map(JobRow::try_from).collect()
    }
}

/// A row of the `jobs` table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRow {
    pub id: i32,
    pub title: String,
    pub salary: Option<i32>,
    pub equity: Option<Decimal>,
    pub company_handle: String,
}

impl JobRow {
    pub fn into_job(self) -> Result<Job, CoreError> {
        Ok(Job {
            id: JobId::new(self.id),
            title: self.title,
            salary: self.salary,
            equity: self.equity,
            company_handle: CompanyHandle::parse(self.company_handle)?,
        })
    }
}

impl TryFrom<&Row> for JobRow {
    type Error = DatabaseError;

    fn try_from(row: &Row) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.int("id")?,
            title: row.text("title")?,
            salary: row.opt_int("salary")?,
            equity: row.opt_decimal("equity")?,
            company_handle: row.text("company_handle")?,
        })
    }
}
