//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use proptest::prelude::*;

use core_kernel::CompanyHandle;
use domain_company::{CompanyFilter, CompanyUpdate, NewCompany};

/// Strategy for generating valid handles
pub fn handle_strategy() -> impl Strategy<Value = CompanyHandle> {
    "[a-z0-9][a-z0-9_-]{0,24}".prop_map(|s| CompanyHandle::parse(s).expect("pattern yields valid handles"))
}

/// Strategy for generating non-empty display names
pub fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-zA-Z ]{0,30}"
}

/// Strategy for generating head counts, including unknown
pub fn num_employees_strategy() -> impl Strategy<Value = Option<i32>> {
    prop::option::of(0i32..1_000_000)
}

/// Strategy for generating valid creation requests
pub fn new_company_strategy() -> impl Strategy<Value = NewCompany> {
    (handle_strategy(), name_strategy(), name_strategy(), num_employees_strategy()).prop_map(
        |(handle, name, description, num_employees)| NewCompany {
            handle,
            name,
            description,
            num_employees,
            logo_url: None,
        },
    )
}

/// Strategy for generating updates with any subset of fields supplied
pub fn company_update_strategy() -> impl Strategy<Value = CompanyUpdate> {
    (
        prop::option::of(name_strategy()),
        prop::option::of(name_strategy()),
        prop::option::of(num_employees_strategy()),
        prop::option::of(prop::option::of(Just("https://logo.test/a.png".to_string()))),
    )
        .prop_map(|(name, description, num_employees, logo_url)| CompanyUpdate {
            name,
            description,
            num_employees,
            logo_url,
        })
}

/// Strategy for generating filters that resolve successfully
pub fn valid_filter_strategy() -> impl Strategy<Value = CompanyFilter> {
    (
        prop::option::of("[a-z]{0,4}"),
        prop::option::of(0i32..1000),
        prop::option::of(0i32..1000),
    )
        .prop_map(|(name, min, max)| {
            let (min, max) = match (min, max) {
                (Some(a), Some(b)) if a > b => (Some(b), Some(a)),
                bounds => bounds,
            };
            CompanyFilter {
                name,
                min_employees: min,
                max_employees: max,
            }
        })
}
