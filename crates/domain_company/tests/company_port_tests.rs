//! Behavioral tests for the company port, run against the in-memory mock

use rust_decimal_macros::dec;

use core_kernel::{CompanyHandle, JobId, PortError};
use domain_company::{
    Company, CompanyFilter, CompanyPort, CompanyUpdate, Job, MockCompanyPort, NewCompany,
};

fn handle(value: &str) -> CompanyHandle {
    CompanyHandle::parse(value).unwrap()
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

async fn seeded_port() -> MockCompanyPort {
    MockCompanyPort::with_companies(vec![
        company("network", "Network Inc", Some(50)),
        company("internet", "Internet Co", Some(500)),
        company("software", "Software LLC", Some(5)),
        company("acme", "Acme", Some(10)),
        company("ghost", "Ghost Corp", None),
    ])
    .await
}

fn names(companies: &[Company]) -> Vec<&str> {
    companies.iter().map(|c| c.name.as_str()).collect()
}

// ============================================================================
// Create / Get
// ============================================================================

mod create_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_then_get_returns_equal_record() {
        let port = MockCompanyPort::new();
        let request = NewCompany::new(handle("baker"), "Baker Santos", "Bakery")
            .with_num_employees(225)
            .with_logo_url("https://baker.test/logo.png");

        let created = port.create_company(request.clone()).await.unwrap();
        assert_eq!(created, request.into_company());

        let fetched = port.get_company(&handle("baker")).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_create_duplicate_handle_conflicts_without_insert() {
        let port = seeded_port().await;
        let before = port.len().await;

        let err = port
            .create_company(NewCompany::new(handle("acme"), "Other Acme", "Another one"))
            .await
            .unwrap_err();

        assert!(matches!(err, PortError::Conflict { .. }));
        assert_eq!(port.len().await, before);

        let existing = port.get_company(&handle("acme")).await.unwrap();
        assert_eq!(existing.name, "Acme");
    }

    #[tokio::test]
    async fn test_create_invalid_fields_rejected() {
        let port = MockCompanyPort::new();
        let err = port
            .create_company(NewCompany::new(handle("acme"), "", "Widgets"))
            .await
            .unwrap_err();

        assert!(matches!(err, PortError::Validation { .. }));
        assert!(port.is_empty().await);
    }

    #[tokio::test]
    async fn test_get_nonexistent_not_found() {
        let port = seeded_port().await;
        let err = port.get_company(&handle("nonexistent")).await.unwrap_err();
        assert!(err.is_not_found());
    }
}

// ============================================================================
// Find
// ============================================================================

mod find_tests {
    use super::*;

    #[tokio::test]
    async fn test_find_all_ordered_by_name() {
        let port = seeded_port().await;
        let all = port.find_companies(CompanyFilter::all()).await.unwrap();

        assert_eq!(
            names(&all),
            vec!["Acme", "Ghost Corp", "Internet Co", "Network Inc", "Software LLC"]
        );
    }

    #[tokio::test]
    async fn test_mock_orders_names_bytewise() {
        let port = MockCompanyPort::with_companies(vec![
            company("lower", "acme labs", Some(1)),
            company("upper", "Zeta", Some(1)),
        ])
        .await;

        let all = port.find_companies(CompanyFilter::all()).await.unwrap();
        assert_eq!(names(&all), vec!["Zeta", "acme labs"]);
    }

    #[tokio::test]
    async fn test_find_inverted_bounds_is_invalid() {
        let port = seeded_port().await;
        let err = port
            .find_companies(CompanyFilter::by_employees(Some(50), Some(10)))
            .await
            .unwrap_err();

        assert!(matches!(err, PortError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_find_by_name_is_case_insensitive_substring() {
        let port = seeded_port().await;
        let found = port.find_companies(CompanyFilter::by_name("net")).await.unwrap();

        assert_eq!(names(&found), vec!["Internet Co", "Network Inc"]);
    }

    #[tokio::test]
    async fn test_find_by_range_is_inclusive() {
        let port = seeded_port().await;
        let found = port
            .find_companies(CompanyFilter::by_employees(Some(10), Some(100)))
            .await
            .unwrap();

        assert_eq!(names(&found), vec!["Acme", "Network Inc"]);
    }

    #[tokio::test]
    async fn test_find_range_skips_unknown_head_count() {
        let port = seeded_port().await;
        let found = port
            .find_companies(CompanyFilter::by_employees(Some(0), None))
            .await
            .unwrap();

        assert!(!names(&found).contains(&"Ghost Corp"));
        assert_eq!(found.len(), 4);
    }

    #[tokio::test]
    async fn test_find_name_with_single_bound() {
        let port = seeded_port().await;
        let found = port
            .find_companies(CompanyFilter::by_name("NET").with_max_employees(100))
            .await
            .unwrap();

        assert_eq!(names(&found), vec!["Network Inc"]);
    }
}

// ============================================================================
// Update / Remove
// ============================================================================

mod update_tests {
    use super::*;

    #[tokio::test]
    async fn test_update_changes_only_supplied_field() {
        let port = seeded_port().await;
        let before = port.get_company(&handle("acme")).await.unwrap();

        let updated = port
            .update_company(&handle("acme"), CompanyUpdate::new().num_employees(Some(42)))
            .await
            .unwrap();

        assert_eq!(updated.num_employees, Some(42));
        assert_eq!(updated.name, before.name);
        assert_eq!(updated.description, before.description);
        assert_eq!(updated.logo_url, before.logo_url);

        let fetched = port.get_company(&handle("acme")).await.unwrap();
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn test_update_nonexistent_not_found() {
        let port = seeded_port().await;
        let err = port
            .update_company(&handle("nonexistent"), CompanyUpdate::new().name("X"))
            .await
            .unwrap_err();

        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_update_empty_is_bad_request() {
        let port = seeded_port().await;
        let err = port
            .update_company(&handle("acme"), CompanyUpdate::new())
            .await
            .unwrap_err();

        match err {
            PortError::Validation { message, .. } => assert_eq!(message, "No data"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_remove_then_get_not_found() {
        let port = seeded_port().await;
        port.remove_company(&handle("acme")).await.unwrap();

        let err = port.get_company(&handle("acme")).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_remove_nonexistent_not_found() {
        let port = seeded_port().await;
        let err = port.remove_company(&handle("nonexistent")).await.unwrap_err();
        assert!(err.is_not_found());
    }
}

// ============================================================================
// Detail
// ============================================================================

mod detail_tests {
    use super::*;

    fn job(id: i32, title: &str, company_handle: &str) -> Job {
        Job {
            id: JobId::new(id),
            title: title.to_string(),
            salary: Some(100_000),
            equity: Some(dec!(0.05)),
            company_handle: handle(company_handle),
        }
    }

    #[tokio::test]
    async fn test_detail_lists_company_jobs_by_id() {
        let port = seeded_port().await;
        port.add_jobs(vec![
            job(3, "Engineer", "acme"),
            job(1, "Designer", "acme"),
            job(2, "Accountant", "software"),
        ])
        .await;

        let detail = port.get_company_detail(&handle("acme")).await.unwrap();
        assert_eq!(detail.company.handle, handle("acme"));

        let ids: Vec<i32> = detail.jobs.iter().map(|j| j.id.value()).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(detail.jobs.iter().all(|j| j.has_equity()));
    }

    #[tokio::test]
    async fn test_detail_nonexistent_not_found() {
        let port = seeded_port().await;
        let err = port.get_company_detail(&handle("nonexistent")).await.unwrap_err();
        assert!(err.is_not_found());
    }
}
