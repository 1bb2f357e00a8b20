//! Query execution
//!
//! Repositories never talk to SQLx directly. They hand a SQL template with
//! positional placeholders (`$1`, `$2`, ...) and the matching bind values to a
//! [`QueryExecutor`], and get back zero or more field-keyed [`Row`]s. This keeps
//! the SQL each operation issues observable in tests without a database.
//!
//! Values are typed even when null, because PostgreSQL infers parameter
//! types from the bound value: a text-typed NULL cannot be assigned to an
//! integer column.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::Query;
use sqlx::{Column, PgPool, Postgres, Row as _, TypeInfo};
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::DatabaseError;

/// A bind parameter or a decoded column value
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Bool(Option<bool>),
    Int(Option<i32>),
    BigInt(Option<i64>),
    Text(Option<String>),
    Numeric(Option<Decimal>),
}

impl SqlValue {
    pub fn text(value: impl Into<String>) -> Self {
        SqlValue::Text(Some(value.into()))
    }

    pub fn int(value: i32) -> Self {
        SqlValue::Int(Some(value))
    }

    pub fn is_null(&self) -> bool {
        match self {
            SqlValue::Bool(v) => v.is_none(),
            SqlValue::Int(v) => v.is_none(),
            SqlValue::BigInt(v) => v.is_none(),
            SqlValue::Text(v) => v.is_none(),
            SqlValue::Numeric(v) => v.is_none(),
        }
    }

    fn bind_to<'q>(self, query: Query<'q, Postgres, PgArguments>) -> Query<'q, Postgres, PgArguments> {
        match self {
            SqlValue::Bool(v) => query.bind(v),
            SqlValue::Int(v) => query.bind(v),
            SqlValue::BigInt(v) => query.bind(v),
            SqlValue::Text(v) => query.bind(v),
            SqlValue::Numeric(v) => query.bind(v),
        }
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(Some(value.to_string()))
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(Some(value))
    }
}

impl From<Option<String>> for SqlValue {
    fn from(value: Option<String>) -> Self {
        SqlValue::Text(value)
    }
}

impl From<i32> for SqlValue {
    fn from(value: i32) -> Self {
        SqlValue::Int(Some(value))
    }
}

impl From<Option<i32>> for SqlValue {
    fn from(value: Option<i32>) -> Self {
        SqlValue::Int(value)
    }
}

impl From<Decimal> for SqlValue {
    fn from(value: Decimal) -> Self {
        SqlValue::Numeric(Some(value))
    }
}

/// A single result row keyed by column name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    values: HashMap<String, SqlValue>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a column, returning the row for chaining
    pub fn with(mut self, column: impl Into<String>, value: impl Into<SqlValue>) -> Self {
        self.values.insert(column.into(), value.into());
        self
    }

    pub fn get(&self, column: &str) -> Option<&SqlValue> {
        self.values.get(column)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn require(&self, column: &str) -> Result<&SqlValue, DatabaseError> {
        self.values
            .get(column)
            .ok_or_else(|| DatabaseError::mapping(column, "missing from row"))
    }

    /// Reads a nullable text column
    pub fn opt_text(&self, column: &str) -> Result<Option<String>, DatabaseError> {
        match self.require(column)? {
            SqlValue::Text(v) => Ok(v.clone()),
            other => Err(DatabaseError::mapping(column, format!("expected text, found {:?}", other))),
        }
    }

    /// Reads a non-null text column
    pub fn text(&self, column: &str) -> Result<String, DatabaseError> {
        self.opt_text(column)?
            .ok_or_else(|| DatabaseError::mapping(column, "unexpected NULL"))
    }

    /// Reads a nullable integer column, accepting any integer width that fits
    pub fn opt_int(&self, column: &str) -> Result<Option<i32>, DatabaseError> {
        match self.require(column)? {
            SqlValue::Int(v) => Ok(*v),
            SqlValue::BigInt(None) => Ok(None),
            SqlValue::BigInt(Some(v)) => i32::try_from(*v)
                .map(Some)
                .map_err(|_| DatabaseError::mapping(column, format!("{} does not fit in i32", v))),
            other => Err(DatabaseError::mapping(column, format!("expected integer, found {:?}", other))),
        }
    }

    /// Reads a non-null integer column
    pub fn int(&self, column: &str) -> Result<i32, DatabaseError> {
        self.opt_int(column)?
            .ok_or_else(|| DatabaseError::mapping(column, "unexpected NULL"))
    }

    /// Reads a nullable numeric column
    pub fn opt_decimal(&self, column: &str) -> Result<Option<Decimal>, DatabaseError> {
        match self.require(column)? {
            SqlValue::Numeric(v) => Ok(*v),
            other => Err(DatabaseError::mapping(column, format!("expected numeric, found {:?}", other))),
        }
    }
}

impl FromIterator<(String, SqlValue)> for Row {
    fn from_iter<I: IntoIterator<Item = (String, SqlValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Issues parameterized SQL and returns the resulting rows
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    /// Executes `sql`, binding `params` to `$1..$n` in order
    async fn execute(&self, sql: &str, params: &[SqlValue]) -> Result<Vec<Row>, DatabaseError>;
}

#[async_trait]
impl<E: QueryExecutor + ?Sized> QueryExecutor for Arc<E> {
    async fn execute(&self, sql: &str, params: &[SqlValue]) -> Result<Vec<Row>, DatabaseError> {
        (**self).execute(sql, params).await
    }
}

#[async_trait]
impl<'a, E: QueryExecutor + ?Sized> QueryExecutor for &'a E {
    async fn execute(&self, sql: &str, params: &[SqlValue]) -> Result<Vec<Row>, DatabaseError> {
        (**self).execute(sql, params).await
    }
}

/// Executes queries on a PostgreSQL connection pool
#[derive(Debug, Clone)]
pub struct PgExecutor {
    pool: PgPool,
}

impl PgExecutor {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl QueryExecutor for PgExecutor {
    async fn execute(&self, sql: &str, params: &[SqlValue]) -> Result<Vec<Row>, DatabaseError> {
        let query = params
            .iter()
            .cloned()
            .fold(sqlx::query(sql), |query, value| value.bind_to(query));

        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DatabaseError::from(&e))?;

        rows.iter().map(decode_row).collect()
    }
}

fn decode_row(row: &PgRow) -> Result<Row, DatabaseError> {
    row.columns()
        .iter()
        .map(|column| {
            let name = column.name();
            let ordinal = column.ordinal();
            let type_name = column.type_info().name();
            let decode_err = |e: sqlx::Error| DatabaseError::mapping(name, e);

            let value = match type_name {
                "BOOL" => SqlValue::Bool(row.try_get(ordinal).map_err(decode_err)?),
                "INT2" => SqlValue::Int(
                    row.try_get::<Option<i16>, _>(ordinal)
                        .map_err(decode_err)?
                        .map(i32::from),
                ),
                "INT4" => SqlValue::Int(row.try_get(ordinal).map_err(decode_err)?),
                "INT8" => SqlValue::BigInt(row.try_get(ordinal).map_err(decode_err)?),
                "TEXT" | "VARCHAR" | "BPCHAR" | "NAME" => {
                    SqlValue::Text(row.try_get(ordinal).map_err(decode_err)?)
                }
                "NUMERIC" => SqlValue::Numeric(row.try_get(ordinal).map_err(decode_err)?),
                other => {
                    return Err(DatabaseError::mapping(
                        name,
                        format!("unsupported column type {}", other),
                    ))
                }
            };

            Ok((name.to_string(), value))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn company_row() -> Row {
        Row::new()
            .with("handle", "acme")
            .with("num_employees", SqlValue::Int(None))
            .with("logo_url", None::<String>)
            .with("equity", dec!(0.5))
    }

    #[test]
    fn test_row_accessors() {
        let row = company_row();
        assert_eq!(row.text("handle").unwrap(), "acme");
        assert_eq!(row.opt_int("num_employees").unwrap(), None);
        assert_eq!(row.opt_text("logo_url").unwrap(), None);
        assert_eq!(row.opt_decimal("equity").unwrap(), Some(dec!(0.5)));
    }

    #[test]
    fn test_row_missing_column() {
        let err = company_row().text("name").unwrap_err();
        assert!(matches!(err, DatabaseError::Mapping(ref m) if m.contains("name")));
    }

    #[test]
    fn test_row_type_mismatch() {
        let err = company_row().opt_int("handle").unwrap_err();
        assert!(matches!(err, DatabaseError::Mapping(_)));
    }

    #[test]
    fn test_row_null_in_required_column() {
        let err = company_row().int("num_employees").unwrap_err();
        assert!(matches!(err, DatabaseError::Mapping(ref m) if m.contains("NULL")));
    }

    #[test]
    fn test_bigint_narrowing() {
        let row = Row::new()
            .with("small", SqlValue::BigInt(Some(7)))
            .with("large", SqlValue::BigInt(Some(i64::MAX)));
        assert_eq!(row.opt_int("small").unwrap(), Some(7));
        assert!(row.opt_int("large").is_err());
    }

    #[test]
    fn test_sql_value_null_detection() {
        assert!(SqlValue::Text(None).is_null());
        assert!(!SqlValue::int(0).is_null());
    }
}
