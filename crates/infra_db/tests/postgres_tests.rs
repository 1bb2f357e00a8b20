//! End-to-end tests against a PostgreSQL container
//!
//! Require Docker. Run with `cargo test -p infra_db -- --ignored`.

use domain_company::{CompanyFilter, CompanyPort, CompanyUpdate};
use infra_db::{PgExecutor, PostgresCompanyAdapter, QueryExecutor, SqlValue};
use test_utils::{
    create_seeded_test_database, handle, init_test_tracing, CompanyFixtures, JobFixtures,
    TestCompanyBuilder,
};

fn names(companies: &[domain_company::Company]) -> Vec<&str> {
    companies.iter().map(|c| c.name.as_str()).collect()
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_crud_lifecycle() {
    init_test_tracing();
    let db = create_seeded_test_database().await.unwrap();
    let port = PostgresCompanyAdapter::new(db.pool().clone());

    let request = TestCompanyBuilder::new().with_num_employees(None).build_new();
    let created = port.create_company(request.clone()).await.unwrap();
    assert_eq!(created, request.clone().into_company());

    let duplicate = port.create_company(request.clone()).await.unwrap_err();
    assert!(duplicate.to_string().contains("already exists"));

    let updated = port
        .update_company(&request.handle, CompanyUpdate::new().num_employees(Some(12)))
        .await
        .unwrap();
    assert_eq!(updated.num_employees, Some(12));
    assert_eq!(updated.name, request.name);

    port.remove_company(&request.handle).await.unwrap();
    assert!(port.get_company(&request.handle).await.unwrap_err().is_not_found());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_filters_against_seeded_data() {
    let db = create_seeded_test_database().await.unwrap();
    let port = PostgresCompanyAdapter::new(db.pool().clone());

    let all = port.find_companies(CompanyFilter::all()).await.unwrap();
    assert_eq!(
        names(&all),
        vec!["Acme", "Ghost Corp", "Internet Co", "Network Inc", "Software LLC"]
    );

    let by_name = port.find_companies(CompanyFilter::by_name("NET")).await.unwrap();
    assert_eq!(names(&by_name), vec!["Internet Co", "Network Inc"]);

    let ranged = port
        .find_companies(CompanyFilter::by_employees(Some(10), Some(50)))
        .await
        .unwrap();
    assert_eq!(names(&ranged), vec!["Acme", "Network Inc"]);

    let combined = port
        .find_companies(CompanyFilter::by_name("co").with_min_employees(100))
        .await
        .unwrap();
    assert_eq!(names(&combined), vec!["Internet Co"]);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_detail_and_cascade() {
    let db = create_seeded_test_database().await.unwrap();
    let port = PostgresCompanyAdapter::new(db.pool().clone());

    let detail = port.get_company_detail(&handle("network")).await.unwrap();
    assert_eq!(detail.company, CompanyFixtures::network());
    assert_eq!(detail.jobs, JobFixtures::for_company("network"));

    port.remove_company(&handle("network")).await.unwrap();

    let executor = PgExecutor::new(db.pool().clone());
    let remaining = executor
        .execute(
            "SELECT id FROM jobs WHERE company_handle = $1",
            &[SqlValue::text("network")],
        )
        .await
        .unwrap();
    assert!(remaining.is_empty());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_clearing_logo_writes_null() {
    let db = create_seeded_test_database().await.unwrap();
    let port = PostgresCompanyAdapter::new(db.pool().clone());

    let updated = port
        .update_company(&handle("acme"), CompanyUpdate::new().logo_url(None))
        .await
        .unwrap();
    assert_eq!(updated.logo_url, None);

    let fetched = port.get_company(&handle("acme")).await.unwrap();
    assert_eq!(fetched, updated);
}
