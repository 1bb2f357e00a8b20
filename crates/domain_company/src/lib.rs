//! Company Domain
//!
//! This crate models companies and the job postings that reference them,
//! and defines the port through which the route layer reads and writes them.
//!
//! # Model
//!
//! - **Company**: keyed by an immutable [`CompanyHandle`](core_kernel::CompanyHandle),
//!   with a name, description, optional head count and optional logo URL
//! - **Job**: a posting owned by a company through `company_handle`
//!
//! # Filtering
//!
//! [`CompanyFilter`] carries the optional name fragment and employee bounds
//! supplied by a caller. [`CompanyFilter::resolve`] validates the bounds and
//! settles on exactly one [`FilterKind`], which both the PostgreSQL
//! repository and the in-memory mock dispatch on.
//!
//! # Examples
//!
//! ```rust
//! use domain_company::{CompanyFilter, FilterKind};
//!
//! let filter = CompanyFilter::by_name("net").with_min_employees(10);
//! match filter.resolve().unwrap() {
//!     FilterKind::NameAndRange { name, range } => {
//!         assert_eq!(name, "net");
//!         assert_eq!(range.min, 10);
//!         assert_eq!(range.max, 1_000_000);
//!     }
//!     other => panic!("unexpected filter kind {:?}", other),
//! }
//! ```

pub mod company;
pub mod job;
pub mod filter;
pub mod error;
pub mod validation;
pub mod ports;

pub use company::{Company, NewCompany, CompanyUpdate, CompanyDetail};
pub use job::Job;
pub use filter::{
    CompanyFilter, FilterKind, EmployeeRange,
    DEFAULT_MIN_EMPLOYEES, DEFAULT_MAX_EMPLOYEES,
};
pub use error::CompanyError;
pub use validation::{CompanyValidator, ValidationResult};
pub use ports::CompanyPort;
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::MockCompanyPort;
