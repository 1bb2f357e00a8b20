//! Partial update compilation
//!
//! Turns an ordered list of `(field, value)` assignments into the body of an
//! `UPDATE ... SET` clause. Field names are mapped to column names through an
//! alias table; fields without an alias are used verbatim.
//!
//! ```rust
//! use infra_db::{compile_partial_update, SqlValue};
//!
//! let update = compile_partial_update(
//!     &[("name", SqlValue::text("Acme")), ("numEmployees", SqlValue::int(42))],
//!     &[("numEmployees", "num_employees")],
//! ).unwrap();
//!
//! assert_eq!(update.set_cols, r#""name"=$1, "num_employees"=$2"#);
//! assert_eq!(update.next_placeholder(), 3);
//! ```

use crate::error::DatabaseError;
use crate::executor::SqlValue;

/// A compiled `SET` clause with its bind values in placeholder order
#[derive(Debug, Clone, PartialEq)]
pub struct PartialUpdate {
    /// Comma-separated `"column"=$n` fragments
    pub set_cols: String,
    /// Values for `$1..$n`
    pub values: Vec<SqlValue>,
}

impl PartialUpdate {
    /// Index of the first placeholder after the `SET` values
    pub fn next_placeholder(&self) -> usize {
        self.values.len() + 1
    }
}

/// Compiles assignments into a `SET` clause
///
/// # Errors
///
/// Returns `DatabaseError::BadRequest("No data")` if `fields` is empty.
pub fn compile_partial_update(
    fields: &[(&str, SqlValue)],
    aliases: &[(&str, &str)],
) -> Result<PartialUpdate, DatabaseError> {
    if fields.is_empty() {
        return Err(DatabaseError::BadRequest("No data".to_string()));
    }

    let set_cols = fields
        .iter()
        .enumerate()
        .map(|(idx, (field, _))| {
            let column = aliases
                .iter()
                .find(|(name, _)| name == field)
                .map(|(_, column)| *column)
                .unwrap_or(*field);
            format!("\"{}\"=${}", column, idx + 1)
        })
        .collect::<Vec<_>>()
        .join(", ");

    let values = fields.iter().map(|(_, value)| value.clone()).collect();

    Ok(PartialUpdate { set_cols, values })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_single_field_without_alias() {
        let update = compile_partial_update(&[("name", SqlValue::text("Acme"))], &[]).unwrap();
        assert_eq!(update.set_cols, "\"name\"=$1");
        assert_eq!(update.values, vec![SqlValue::text("Acme")]);
    }

    #[test]
    fn test_aliases_applied_in_order() {
        let update = compile_partial_update(
            &[
                ("logoUrl", SqlValue::Text(None)),
                ("description", SqlValue::text("New")),
                ("numEmployees", SqlValue::int(3)),
            ],
            &[("numEmployees", "num_employees"), ("logoUrl", "logo_url")],
        )
        .unwrap();

        assert_eq!(
            update.set_cols,
            "\"logo_url\"=$1, \"description\"=$2, \"num_employees\"=$3"
        );
        assert_eq!(
            update.values,
            vec![SqlValue::Text(None), SqlValue::text("New"), SqlValue::int(3)]
        );
        assert_eq!(update.next_placeholder(), 4);
    }

    #[test]
    fn test_empty_fields_is_bad_request() {
        let err = compile_partial_update(&[], &[("numEmployees", "num_employees")]).unwrap_err();
        assert!(matches!(err, DatabaseError::BadRequest(ref m) if m == "No data"));
    }

    proptest! {
        #[test]
        fn prop_one_fragment_per_field(count in 1usize..8) {
            let names: Vec<String> = (0..count).map(|i| format!("f{}", i)).collect();
            let fields: Vec<(&str, SqlValue)> = names
                .iter()
                .enumerate()
                .map(|(i, n)| (n.as_str(), SqlValue::int(i as i32)))
                .collect();

            let update = compile_partial_update(&fields, &[]).unwrap();
            prop_assert_eq!(update.set_cols.split(", ").count(), count);
            prop_assert_eq!(update.values.len(), count);
            let expected_last = format!("\"f{}\"=${}", count - 1, count);
            prop_assert!(update.set_cols.ends_with(&expected_last));
        }
    }
}
