//! Company repository implementation
//!
//! Database access for the `companies` table. Each operation issues one or
//! two queries through the injected [`QueryExecutor`]; nothing is cached and
//! no transaction spans operations.
//!
//! # Duplicate handles
//!
//! `create` checks for an existing handle before inserting. The check and the
//! insert are separate statements, so two concurrent creates with the same
//! handle can both pass the check; the primary key then rejects the second
//! insert, which surfaces as `DatabaseError::DuplicateEntry` as well.

use core_kernel::{CompanyHandle, CoreError};
use domain_company::{Company, CompanyFilter, CompanyUpdate, FilterKind, NewCompany};
use tracing::debug;

use crate::error::DatabaseError;
use crate::executor::{QueryExecutor, Row, SqlValue};
use crate::partial_update::compile_partial_update;

/// Columns returned by every company query
const COMPANY_COLUMNS: &str = "handle, name, description, num_employees, logo_url";

/// Update field names whose column name differs
const COLUMN_ALIASES: &[(&str, &str)] = &[
    ("numEmployees", "num_employees"),
    ("logoUrl", "logo_url"),
];

/// Repository for the `companies` table
#[derive(Debug, Clone)]
pub struct CompanyRepository<E> {
    executor: E,
}

impl<E: QueryExecutor> CompanyRepository<E> {
    /// Creates a new CompanyRepository on top of the given executor
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    /// Returns the underlying executor
    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Creates a new company
    ///
    /// # Errors
    ///
    /// Returns `DuplicateEntry` if a company with the same handle exists; no
    /// insert is attempted in that case.
    pub async fn create(&self, company: NewCompany) -> Result<CompanyRow, DatabaseError> {
        let duplicate_check = self
            .executor
            .execute(
                "SELECT handle FROM companies WHERE handle = $1",
                &[SqlValue::text(company.handle.as_str())],
            )
            .await?;

        if !duplicate_check.is_empty() {
            return Err(DatabaseError::duplicate("Company", "handle", &company.handle));
        }

        let sql = format!(
            "INSERT INTO companies (handle, name, description, num_employees, logo_url) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {}",
            COMPANY_COLUMNS
        );
        let params = [
            SqlValue::from(company.handle.into_inner()),
            SqlValue::from(company.name),
            SqlValue::from(company.description),
            SqlValue::from(company.num_employees),
            SqlValue::from(company.logo_url),
        ];

        let rows = self.executor.execute(&sql, &params).await?;
        first_company(rows)?.ok_or_else(|| DatabaseError::QueryFailed("insert returned no row".to_string()))
    }

    /// Lists companies matching the filter, ordered by name
    ///
    /// # Errors
    ///
    /// Returns `InvalidFilter` without querying if a bound is negative or the
    /// minimum exceeds the maximum.
    pub async fn find_all(&self, filter: &CompanyFilter) -> Result<Vec<CompanyRow>, DatabaseError> {
        let kind = filter.resolve()?;
        let (where_clause, params) = filter_clause(&kind);

        let sql = format!(
            "SELECT {} FROM companies{} ORDER BY name",
            COMPANY_COLUMNS, where_clause
        );
        debug!(?kind, %sql, "Finding companies");

        let rows = self.executor.execute(&sql, &params).await?;
        rows.iter().map(CompanyRow::try_from).collect()
    }

    /// Retrieves a company by handle
    pub async fn get(&self, handle: &str) -> Result<CompanyRow, DatabaseError> {
        let sql = format!("SELECT {} FROM companies WHERE handle = $1", COMPANY_COLUMNS);
        let rows = self.executor.execute(&sql, &[SqlValue::text(handle)]).await?;

        first_company(rows)?.ok_or_else(|| DatabaseError::not_found("Company", handle))
    }

    /// Applies a partial update and returns the updated company
    ///
    /// Only supplied fields are written. `handle` is bound after the `SET`
    /// values as the last parameter.
    ///
    /// # Errors
    ///
    /// Returns `BadRequest` if no field was supplied and `NotFound` if no
    /// company has the handle.
    pub async fn update(&self, handle: &str, update: &CompanyUpdate) -> Result<CompanyRow, DatabaseError> {
        let assignments = company_assignments(update);
        let compiled = compile_partial_update(&assignments, COLUMN_ALIASES)?;

        let sql = format!(
            "UPDATE companies SET {} WHERE handle = ${} RETURNING {}",
            compiled.set_cols,
            compiled.next_placeholder(),
            COMPANY_COLUMNS
        );
        let mut params = compiled.values;
        params.push(SqlValue::text(handle));

        let rows = self.executor.execute(&sql, &params).await?;
        first_company(rows)?.ok_or_else(|| DatabaseError::not_found("Company", handle))
    }

    /// Permanently deletes a company
    pub async fn remove(&self, handle: &str) -> Result<(), DatabaseError> {
        let rows = self
            .executor
            .execute(
                "DELETE FROM companies WHERE handle = $1 RETURNING handle",
                &[SqlValue::text(handle)],
            )
            .await?;

        if rows.is_empty() {
            return Err(DatabaseError::not_found("Company", handle));
        }
        Ok(())
    }
}

/// Enumerates the supplied update fields in column order
fn company_assignments(update: &CompanyUpdate) -> Vec<(&'static str, SqlValue)> {
    let mut fields = Vec::with_capacity(4);
    if let Some(name) = &update.name {
        fields.push(("name", SqlValue::text(name.as_str())));
    }
    if let Some(description) = &update.description {
        fields.push(("description", SqlValue::text(description.as_str())));
    }
    if let Some(num_employees) = update.num_employees {
        fields.push(("numEmployees", SqlValue::Int(num_employees)));
    }
    if let Some(logo_url) = &update.logo_url {
        fields.push(("logoUrl", SqlValue::Text(logo_url.clone())));
    }
    fields
}

/// Builds the WHERE clause and its parameters for a resolved filter
fn filter_clause(kind: &FilterKind<'_>) -> (String, Vec<SqlValue>) {
    match kind {
        FilterKind::All => (String::new(), Vec::new()),
        FilterKind::Name(name) => (
            " WHERE name ILIKE $1".to_string(),
            vec![SqlValue::text(contains_pattern(name))],
        ),
        FilterKind::Range(range) => (
            " WHERE num_employees BETWEEN $1 AND $2".to_string(),
            vec![SqlValue::int(range.min), SqlValue::int(range.max)],
        ),
        FilterKind::NameAndRange { name, range } => (
            " WHERE name ILIKE $1 AND num_employees BETWEEN $2 AND $3".to_string(),
            vec![
                SqlValue::text(contains_pattern(name)),
                SqlValue::int(range.min),
                SqlValue::int(range.max),
            ],
        ),
    }
}

/// Wraps a name fragment for a LIKE match, escaping LIKE metacharacters
fn contains_pattern(fragment: &str) -> String {
    let mut pattern = String::with_capacity(fragment.len() + 2);
    pattern.push('%');
    for c in fragment.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn first_company(rows: Vec<Row>) -> Result<Option<CompanyRow>, DatabaseError> {
    rows.first().map(CompanyRow::try_from).transpose()
}

/// A row of the `companies` table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyRow {
    pub handle: String,
    pub name: String,
    pub description: String,
    pub num_employees: Option<i32>,
    pub logo_url: Option<String>,
}

impl CompanyRow {
    /// Converts the row into the domain entity, validating the handle
    pub fn into_company(self) -> Result<Company, CoreError> {
        Ok(Company {
            handle: CompanyHandle::parse(self.handle)?,
            name: self.name,
            description: self.description,
            num_employees: self.num_employees,
            logo_url: self.logo_url,
        })
    }
}

impl TryFrom<&Row> for CompanyRow {
    type Error = DatabaseError;

    fn try_from(row: &Row) -> Result<Self, Self::Error> {
        Ok(Self {
            handle: row.text("handle")?,
            name: row.text("name")?,
            description: row.text("description")?,
            num_employees: row.opt_int("num_employees")?,
            logo_url: row.opt_text("logo_url")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("net"), "%net%");
        assert_eq!(contains_pattern("100%_a\\b"), "%100\\%\\_a\\\\b%");
    }

    #[test]
    fn test_assignments_follow_column_order() {
        let update = CompanyUpdate::new()
            .logo_url(None)
            .name("New")
            .num_employees(Some(42));

        let fields = company_assignments(&update);
        let names: Vec<&str> = fields.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["name", "numEmployees", "logoUrl"]);
        assert_eq!(fields[2].1, SqlValue::Text(None));
    }

    #[test]
    fn test_assignments_empty_for_empty_update() {
        assert!(company_assignments(&CompanyUpdate::new()).is_empty());
    }

    #[test]
    fn test_row_conversion_rejects_bad_handle() {
        let row = CompanyRow {
            handle: "Not Valid".to_string(),
            name: "X".to_string(),
            description: "Y".to_string(),
            num_employees: None,
            logo_url: None,
        };
        assert!(row.into_company().is_err());
    }
}
