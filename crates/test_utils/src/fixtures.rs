//! Pre-built Test Fixtures
//!
//! Provides a small, predictable data set shared by the repository and
//! adapter tests. Names sort as: Acme, Ghost Corp, Internet Co, Network Inc,
//! Software LLC.

use core_kernel::{CompanyHandle, JobId};
use domain_company::{Company, Job, NewCompany};
use rust_decimal_macros::dec;

/// Parses a handle known to be valid
///
/// # Panics
///
/// Panics if `value` is not a valid handle
pub fn handle(value: &str) -> CompanyHandle {
    CompanyHandle::parse(value).expect("fixture handle must be valid")
}

/// Fixture for company test data
pub struct CompanyFixtures;

impl CompanyFixtures {
    /// Mid-sized company, 50 employees
    pub fn network() -> Company {
        company("network", "Network Inc", Some(50))
    }

    /// Largest company, 500 employees
    pub fn internet() -> Company {
        company("internet", "Internet Co", Some(500))
    }

    /// Smallest company, 5 employees
    pub fn software() -> Company {
        company("software", "Software LLC", Some(5))
    }

    /// Company with 10 employees and a logo
    pub fn acme() -> Company {
        Company {
            logo_url: Some("https://acme.test/logo.png".to_string()),
            ..company("acme", "Acme", Some(10))
        }
    }

    /// Company with an unknown head count
    pub fn ghost() -> Company {
        company("ghost", "Ghost Corp", None)
    }

    /// Every fixture company, in insertion order
    pub fn all() -> Vec<Company> {
        vec![
            Self::network(),
            Self::internet(),
            Self::software(),
            Self::acme(),
            Self::ghost(),
        ]
    }

    /// A creation request for a company absent from the fixture set
    pub fn new_company() -> NewCompany {
        NewCompany::new(handle("baker"), "Baker Santos", "Artisan bakery")
            .with_num_employees(225)
            .with_logo_url("https://baker.test/logo.png")
    }
}

/// Fixture for job test data
pub struct JobFixtures;

impl JobFixtures {
    /// Jobs owned by the fixture companies; `network` has two, `acme` one
    pub fn all() -> Vec<Job> {
        vec![
            Job {
                id: JobId::new(1),
                title: "Network Engineer".to_string(),
                salary: Some(120_000),
                equity: Some(dec!(0.01)),
                company_handle: handle("network"),
            },
            Job {
                id: JobId::new(2),
                title: "Support Technician".to_string(),
                salary: Some(55_000),
                equity: None,
                company_handle: handle("network"),
            },
            Job {
                id: JobId::new(3),
                title: "Widget Designer".to_string(),
                salary: None,
                equity: Some(dec!(0)),
                company_handle: handle("acme"),
            },
        ]
    }

    /// Jobs of one fixture company, ordered by id
    pub fn for_company(company_handle: &str) -> Vec<Job> {
        Self::all()
            .into_iter()
            .filter(|job| job.company_handle.as_str() == company_handle)
            .collect()
    }
}

fn company(h: &str, name: &str, num_employees: Option<i32>) -> Company {
    Company {
        handle: handle(h),
        name: name.to_string(),
        description: format!("{} description", name),
        num_employees,
        logo_url: None,
    }
}
