//! Database Test Utilities
//!
//! Provides helpers for database testing including testcontainer management,
//! schema setup and seeding of the standard company fixtures.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use testcontainers::{
    core::{IntoContainerPort, WaitFor},
    runners::AsyncRunner,
    ContainerAsync, GenericImage, ImageExt,
};
use tokio::sync::OnceCell;

use domain_company::{Company, Job};

use crate::fixtures::{CompanyFixtures, JobFixtures};

const POSTGRES_IMAGE: &str = "postgres";
const POSTGRES_TAG: &str = "16-alpine";
const POSTGRES_USER: &str = "test_user";
const POSTGRES_PASSWORD: &str = "test_password";
const POSTGRES_DB: &str = "jobly_test";

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Configuration for test database
#[derive(Debug, Clone)]
pub struct TestDatabaseConfig {
    pub user: String,
    pub password: String,
    pub database: String,
    pub host: String,
    pub port: u16,
}

impl Default for TestDatabaseConfig {
    fn default() -> Self {
        Self {
            user: POSTGRES_USER.to_string(),
            password: POSTGRES_PASSWORD.to_string(),
            database: POSTGRES_DB.to_string(),
            host: "localhost".to_string(),
            port: 5432,
        }
    }
}

impl TestDatabaseConfig {
    /// Creates the database connection URL
    pub fn connection_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.database
        )
    }
}

/// A wrapper around a PostgreSQL test container
pub struct TestDatabase {
    _container: ContainerAsync<GenericImage>,
    pub config: TestDatabaseConfig,
    pub pool: PgPool,
}

impl TestDatabase {
    /// Starts a new PostgreSQL container with the schema applied
    ///
    /// # Errors
    ///
    /// Returns an error if the container fails to start or the schema fails to apply
    pub async fn new() -> Result<Self, BoxError> {
        let container = GenericImage::new(POSTGRES_IMAGE, POSTGRES_TAG)
            .with_exposed_port(5432.tcp())
            .with_wait_for(WaitFor::message_on_stderr("database system is ready to accept connections"))
            .with_env_var("POSTGRES_USER", POSTGRES_USER)
            .with_env_var("POSTGRES_PASSWORD", POSTGRES_PASSWORD)
            .with_env_var("POSTGRES_DB", POSTGRES_DB)
            .start()
            .await?;

        let port = container.get_host_port_ipv4(5432).await?;
        let host = container.get_host().await?.to_string();

        let config = TestDatabaseConfig {
            host,
            port,
            ..TestDatabaseConfig::default()
        };

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(30))
            .connect(&config.connection_url())
            .await?;

        let test_db = Self {
            _container: container,
            config,
            pool,
        };
        test_db.init_schema().await?;

        Ok(test_db)
    }

    async fn init_schema(&self) -> Result<(), BoxError> {
        let schema = include_str!("../../../migrations/20240101_000001_initial_schema.sql");
        sqlx::raw_sql(schema).execute(&self.pool).await?;
        Ok(())
    }

    /// Returns a reference to the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Clears all rows while preserving the schema
    pub async fn clear_data(&self) -> Result<(), BoxError> {
        sqlx::query("TRUNCATE TABLE jobs, companies RESTART IDENTITY CASCADE")
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Clears the tables and loads the standard fixture companies and jobs
    pub async fn seed(&self) -> Result<(), BoxError> {
        self.clear_data().await?;
        for company in CompanyFixtures::all() {
            insert_company(&self.pool, &company).await?;
        }
        for job in JobFixtures::all() {
            insert_job(&self.pool, &job).await?;
        }
        Ok(())
    }
}

/// Inserts a company row directly, bypassing the repository
pub async fn insert_company(pool: &PgPool, company: &Company) -> Result<(), BoxError> {
    sqlx::query(
        "INSERT INTO companies (handle, name, description, num_employees, logo_url) \
         VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(company.handle.as_str())
    .bind(&company.name)
    .bind(&company.description)
    .bind(company.num_employees)
    .bind(&company.logo_url)
    .execute(pool)
    .await?;
    Ok(())
}

/// Inserts a job row with the given id, bypassing the repository
pub async fn insert_job(pool: &PgPool, job: &Job) -> Result<(), BoxError> {
    sqlx::query(
        "INSERT INTO jobs (id, title, salary, equity, company_handle) \
         VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(job.id.value())
    .bind(&job.title)
    .bind(job.salary)
    .bind(job.equity)
    .bind(job.company_handle.as_str())
    .execute(pool)
    .await?;
    Ok(())
}

static SHARED_TEST_DB: OnceCell<Arc<TestDatabase>> = OnceCell::const_new();

/// Gets or creates a shared test database instance
///
/// # Panics
///
/// Panics if the database fails to initialize
pub async fn get_shared_test_database() -> Arc<TestDatabase> {
    SHARED_TEST_DB
        .get_or_init(|| async {
            Arc::new(
                TestDatabase::new()
                    .await
                    .expect("Failed to create shared test database"),
            )
        })
        .await
        .clone()
}

/// Creates an isolated, seeded test database for a single test
pub async fn create_seeded_test_database() -> Result<TestDatabase, BoxError> {
    let db = TestDatabase::new().await?;
    db.seed().await?;
    Ok(db)
}
