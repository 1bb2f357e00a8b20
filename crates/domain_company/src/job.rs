//! Job postings
//!
//! Jobs are read-only from the company domain's point of view: they are only
//! listed as part of a [`CompanyDetail`](crate::company::CompanyDetail).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{CompanyHandle, JobId};

/// A job posting owned by a company
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: JobId,
    pub title: String,
    /// Yearly salary, when advertised
    pub salary: Option<i32>,
    /// Fraction of the company offered, between 0 and 1
    pub equity: Option<Decimal>,
    pub company_handle: CompanyHandle,
}

impl Job {
    /// Returns true if the posting offers a non-zero equity stake
    pub fn has_equity(&self) -> bool {
        self.equity.map(|e| !e.is_zero()).unwrap_or(false)
    }
}
