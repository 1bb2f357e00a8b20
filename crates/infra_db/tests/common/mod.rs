//! Shared helpers for the infra_db test binaries

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use domain_company::{Company, Job};
use infra_db::{DatabaseError, QueryExecutor, Row, SqlValue};

/// A statement seen by the scripted executor
#[derive(Debug, Clone, PartialEq)]
pub struct Recorded {
    pub sql: String,
    pub params: Vec<SqlValue>,
}

/// Executor that records every statement and replays canned responses
///
/// Responses are consumed in order; once exhausted, every statement
/// returns no rows.
#[derive(Default)]
pub struct ScriptedExecutor {
    responses: Mutex<VecDeque<Result<Vec<Row>, DatabaseError>>>,
    recorded: Mutex<Vec<Recorded>>,
}

impl ScriptedExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the rows returned by the next unanswered statement
    pub fn returns(self, rows: Vec<Row>) -> Self {
        self.responses.lock().unwrap().push_back(Ok(rows));
        self
    }

    /// Queues a failure for the next unanswered statement
    pub fn fails(self, error: DatabaseError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn recorded(&self) -> Vec<Recorded> {
        self.recorded.lock().unwrap().clone()
    }

    pub fn statement_count(&self) -> usize {
        self.recorded.lock().unwrap().len()
    }
}

#[async_trait]
impl QueryExecutor for ScriptedExecutor {
    async fn execute(&self, sql: &str, params: &[SqlValue]) -> Result<Vec<Row>, DatabaseError> {
        self.recorded.lock().unwrap().push(Recorded {
            sql: sql.to_string(),
            params: params.to_vec(),
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// Builds the row a company query would return for `company`
pub fn company_row(company: &Company) -> Row {
    Row::new()
        .with("handle", company.handle.as_str())
        .with("name", company.name.as_str())
        .with("description", company.description.as_str())
        .with("num_employees", company.num_employees)
        .with("logo_url", company.logo_url.clone())
}

/// Builds the row a job query would return for `job`
pub fn job_row(job: &Job) -> Row {
    Row::new()
        .with("id", job.id.value())
        .with("title", job.title.as_str())
        .with("salary", job.salary)
        .with("equity", SqlValue::Numeric(job.equity))
        .with("company_handle", job.company_handle.as_str())
}

pub const COMPANY_COLUMNS: &str = "handle, name, description, num_employees, logo_url";
