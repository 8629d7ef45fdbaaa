//! Tests for the type info view

mod common;

use common::{column_strings, column_values, engine};
use vibesql_catalog::Catalog;
use vibesql_types::{visible_descriptors, SqlValue};

#[test]
fn test_type_info_follows_declaration_order() {
    let catalog = Catalog::new();
    let result = engine(&catalog).type_info().unwrap();
    assert_eq!(result.columns().len(), 18);
    let expected: Vec<String> = visible_descriptors().map(|d| d.name.to_string()).collect();
    assert_eq!(column_strings(&result, "TYPE_NAME"), expected);
    assert_eq!(column_strings(&result, "LOCAL_TYPE_NAME"), expected);
    assert!(!expected.contains(&"NULL".to_string()));
}

#[test]
fn test_type_info_columns() {
    let catalog = Catalog::new();
    let result = engine(&catalog).type_info().unwrap();
    let names = column_strings(&result, "TYPE_NAME");
    let row = |name: &str| names.iter().position(|n| n == name).unwrap();

    let varchar = row("CHARACTER VARYING");
    assert_eq!(result.value(varchar, "LITERAL_PREFIX"), Some(&SqlValue::varchar("'")));
    assert_eq!(result.value(varchar, "CREATE_PARAMS"), Some(&SqlValue::varchar("LENGTH")));
    assert_eq!(result.value(varchar, "CASE_SENSITIVE"), Some(&SqlValue::Boolean(true)));
    assert_eq!(result.value(varchar, "NUM_PREC_RADIX"), Some(&SqlValue::Null));
    assert_eq!(result.value(varchar, "DATA_TYPE"), Some(&SqlValue::Integer(12)));

    let decimal = row("DECIMAL");
    assert_eq!(result.value(decimal, "FIXED_PREC_SCALE"), Some(&SqlValue::Boolean(true)));
    assert_eq!(result.value(decimal, "MAXIMUM_SCALE"), Some(&SqlValue::Smallint(100)));
    assert_eq!(result.value(decimal, "NUM_PREC_RADIX"), Some(&SqlValue::Integer(10)));

    let integer = row("INTEGER");
    assert_eq!(result.value(integer, "AUTO_INCREMENT"), Some(&SqlValue::Boolean(true)));
    assert_eq!(result.value(integer, "FIXED_PREC_SCALE"), Some(&SqlValue::Boolean(false)));

    // Large object lengths are clamped to the INTEGER range
    let clob = row("CHARACTER LARGE OBJECT");
    assert_eq!(result.value(clob, "PRECISION"), Some(&SqlValue::Integer(i32::MAX)));

    assert!(column_values(&result, "NULLABLE").iter().all(|v| *v == SqlValue::Smallint(1)));
    assert!(column_values(&result, "SEARCHABLE").iter().all(|v| *v == SqlValue::Smallint(3)));
    assert!(column_values(&result, "SQL_DATA_TYPE").iter().all(SqlValue::is_null));
}
