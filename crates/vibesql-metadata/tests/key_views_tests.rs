//! Tests for primary key, best-row identifier and foreign key views

mod common;

use common::{column_strings, column_values, engine, int, sample_catalog, simple_catalog};
use vibesql_catalog::{ColumnSchema, ForeignKeyConstraint, ReferentialAction, TableSchema};
use vibesql_metadata::{MetadataError, ResultTable};
use vibesql_types::{DataType, SqlValue};

fn strings(columns: &[&str]) -> Vec<String> {
    columns.iter().map(|c| c.to_string()).collect()
}

fn key_seqs(result: &ResultTable) -> Vec<SqlValue> {
    column_values(result, "KEY_SEQ")
}

// ============================================================================
// Primary keys
// ============================================================================

#[test]
fn test_primary_key_scenario() {
    let catalog = simple_catalog();
    let result = engine(&catalog).primary_keys(None, None, Some("T")).unwrap();
    assert_eq!(
        result.column_names(),
        vec!["TABLE_CAT", "TABLE_SCHEM", "TABLE_NAME", "COLUMN_NAME", "KEY_SEQ", "PK_NAME"]
    );
    assert_eq!(column_strings(&result, "COLUMN_NAME"), vec!["A"]);
    assert_eq!(key_seqs(&result), vec![SqlValue::Smallint(1)]);
    assert_eq!(column_strings(&result, "PK_NAME"), vec!["PK_T"]);
}

#[test]
fn test_composite_primary_key_is_ordered_by_column_name() {
    let catalog = sample_catalog();
    let result = engine(&catalog).primary_keys(None, Some("SALES"), Some("ORDER_LINES")).unwrap();
    assert_eq!(column_strings(&result, "COLUMN_NAME"), vec!["LINE_NO", "ORDER_ID"]);
    assert_eq!(key_seqs(&result), vec![SqlValue::Smallint(2), SqlValue::Smallint(1)]);
}

#[test]
fn test_primary_keys_schema_filter() {
    let catalog = sample_catalog();
    let engine = engine(&catalog);
    assert_eq!(engine.primary_keys(None, Some(""), Some("CUSTOMERS")).unwrap().row_count(), 1);
    assert_eq!(engine.primary_keys(None, Some("PUBLIC"), Some("CUSTOMERS")).unwrap().row_count(), 1);
    assert!(engine.primary_keys(None, Some("SALES"), Some("CUSTOMERS")).unwrap().is_empty());
    assert!(engine.primary_keys(None, Some("NOPE"), Some("CUSTOMERS")).unwrap().is_empty());
    assert!(engine.primary_keys(None, None, Some("SHIPMENTS")).unwrap().is_empty());
}

#[test]
fn test_primary_keys_through_synonym_report_target() {
    let catalog = sample_catalog();
    let result = engine(&catalog).primary_keys(None, Some("PUBLIC"), Some("ORD")).unwrap();
    assert_eq!(column_strings(&result, "TABLE_SCHEM"), vec!["SALES"]);
    assert_eq!(column_strings(&result, "TABLE_NAME"), vec!["ORDERS"]);
}

#[test]
fn test_hidden_table_has_no_keys() {
    let catalog = sample_catalog();
    let engine = engine(&catalog);
    assert!(engine.primary_keys(None, None, Some("SYS_STATS")).unwrap().is_empty());
    assert!(engine.primary_keys(None, None, Some("SECRET")).unwrap().is_empty());
}

#[test]
fn test_missing_table_argument() {
    let catalog = sample_catalog();
    let engine = engine(&catalog);
    engine.session().lock().close();

    // The argument check comes before the session check
    let checks = [
        engine.primary_keys(None, None, None),
        engine.best_row_identifier(None, None, None),
        engine.imported_keys(None, None, None),
        engine.exported_keys(None, None, None),
        engine.index_info(None, None, None, false, false),
    ];
    for result in checks {
        assert!(matches!(result, Err(MetadataError::MissingArgument { name: "table" })));
    }
    assert!(matches!(
        engine.cross_reference(None, None, None, None, None, Some("ORDERS")),
        Err(MetadataError::MissingArgument { name: "primaryTable" })
    ));
    assert!(matches!(
        engine.cross_reference(None, None, Some("CUSTOMERS"), None, None, None),
        Err(MetadataError::MissingArgument { name: "foreignTable" })
    ));
    assert!(matches!(
        engine.primary_keys(None, None, Some("CUSTOMERS")),
        Err(MetadataError::SessionClosed)
    ));
}

// ============================================================================
// Best row identifier
// ============================================================================

#[test]
fn test_best_row_identifier_scenario() {
    let catalog = simple_catalog();
    let result = engine(&catalog).best_row_identifier(None, None, Some("T")).unwrap();
    assert_eq!(
        result.column_names(),
        vec![
            "SCOPE",
            "COLUMN_NAME",
            "DATA_TYPE",
            "TYPE_NAME",
            "COLUMN_SIZE",
            "BUFFER_LENGTH",
            "DECIMAL_DIGITS",
            "PSEUDO_COLUMN",
        ]
    );
    assert_eq!(result.row_count(), 1);
    assert_eq!(column_strings(&result, "COLUMN_NAME"), vec!["A"]);
    assert_eq!(column_values(&result, "SCOPE"), vec![SqlValue::Smallint(2)]);
    assert_eq!(column_values(&result, "PSEUDO_COLUMN"), vec![SqlValue::Smallint(1)]);
    assert_eq!(column_values(&result, "DECIMAL_DIGITS"), vec![SqlValue::Null]);
    assert_eq!(column_values(&result, "BUFFER_LENGTH"), vec![SqlValue::Null]);
    assert_eq!(column_values(&result, "COLUMN_SIZE"), vec![SqlValue::Integer(10)]);
}

#[test]
fn test_best_row_identifier_keeps_key_order() {
    let catalog = sample_catalog();
    let result = engine(&catalog).best_row_identifier(None, Some("SALES"), Some("ORDER_LINES")).unwrap();
    assert_eq!(column_strings(&result, "COLUMN_NAME"), vec!["ORDER_ID", "LINE_NO"]);
}

#[test]
fn test_best_row_identifier_reports_scale_only_when_supported() {
    let mut catalog = simple_catalog();
    catalog
        .create_table(TableSchema::with_primary_key(
            "LEDGER".to_string(),
            vec![ColumnSchema::new(
                "AMOUNT_KEY".to_string(),
                DataType::Decimal { precision: 12, scale: 3 },
                false,
            )],
            strings(&["AMOUNT_KEY"]),
        ))
        .unwrap();
    let result = engine(&catalog).best_row_identifier(None, None, Some("LEDGER")).unwrap();
    assert_eq!(column_values(&result, "DECIMAL_DIGITS"), vec![SqlValue::Smallint(3)]);
    assert_eq!(column_strings(&result, "TYPE_NAME"), vec!["DECIMAL"]);
}

// ============================================================================
// Imported and exported keys
// ============================================================================

#[test]
fn test_imported_keys_row() {
    let catalog = sample_catalog();
    let result = engine(&catalog).imported_keys(None, Some("SALES"), Some("ORDERS")).unwrap();
    assert_eq!(result.columns().len(), 14);
    assert_eq!(result.row_count(), 1);
    let row = &result.rows()[0];
    let text: Vec<String> = row.iter().map(|v| v.to_string()).collect();
    assert_eq!(
        text,
        vec![
            "VIBESQL",
            "PUBLIC",
            "CUSTOMERS",
            "ID",
            "VIBESQL",
            "SALES",
            "ORDERS",
            "CUSTOMER_ID",
            "1",
            "1",
            "0",
            "FK_ORDERS_CUSTOMER",
            "PK_CUSTOMERS",
            "7",
        ]
    );
    assert_eq!(row[8], SqlValue::Smallint(1));
    assert_eq!(row[13], SqlValue::Smallint(7));
}

#[test]
fn test_composite_foreign_key_emits_one_row_per_pair() {
    let catalog = sample_catalog();
    let engine = engine(&catalog);

    let imported = engine.imported_keys(None, Some("SALES"), Some("SHIPMENTS")).unwrap();
    let exported = engine.exported_keys(None, Some("SALES"), Some("ORDER_LINES")).unwrap();
    let cross = engine
        .cross_reference(None, Some("SALES"), Some("ORDER_LINES"), None, Some("SALES"), Some("SHIPMENTS"))
        .unwrap();

    for result in [&imported, &exported, &cross] {
        assert_eq!(key_seqs(result), vec![SqlValue::Smallint(1), SqlValue::Smallint(2)]);
        assert_eq!(column_strings(result, "PKCOLUMN_NAME"), vec!["ORDER_ID", "LINE_NO"]);
        assert_eq!(column_strings(result, "FKCOLUMN_NAME"), vec!["ORDER_REF", "LINE_REF"]);
        assert_eq!(column_strings(result, "PK_NAME"), vec!["PK_ORDER_LINES", "PK_ORDER_LINES"]);
        assert_eq!(column_values(result, "UPDATE_RULE"), vec![SqlValue::Smallint(4); 2]);
        assert_eq!(column_values(result, "DELETE_RULE"), vec![SqlValue::Smallint(1); 2]);
    }
}

#[test]
fn test_self_referencing_foreign_key() {
    let catalog = sample_catalog();
    let engine = engine(&catalog);
    let imported = engine.imported_keys(None, None, Some("EMPLOYEES")).unwrap();
    let exported = engine.exported_keys(None, None, Some("EMPLOYEES")).unwrap();

    for result in [&imported, &exported] {
        assert_eq!(result.row_count(), 1);
        assert_eq!(column_strings(result, "PKTABLE_NAME"), vec!["EMPLOYEES"]);
        assert_eq!(column_strings(result, "FKTABLE_NAME"), vec!["EMPLOYEES"]);
        assert_eq!(column_strings(result, "PKCOLUMN_NAME"), vec!["ID"]);
        assert_eq!(column_strings(result, "FKCOLUMN_NAME"), vec!["MANAGER_ID"]);
        assert_eq!(column_values(result, "DELETE_RULE"), vec![SqlValue::Smallint(2)]);
    }
}

#[test]
fn test_exported_keys_are_ordered_by_referencing_table() {
    let mut catalog = sample_catalog();
    catalog
        .create_table(TableSchema::new("INVOICES".to_string(), vec![int("ID", false), int("CUST", true)]))
        .unwrap();
    catalog
        .add_foreign_key(
            "PUBLIC",
            "INVOICES",
            ForeignKeyConstraint::new("FK_INVOICE_CUSTOMER", strings(&["CUST"]), "CUSTOMERS", strings(&["ID"])),
        )
        .unwrap();

    let result = engine(&catalog).exported_keys(None, None, Some("CUSTOMERS")).unwrap();
    let referencing: Vec<String> = result.rows().iter().map(|r| format!("{}.{}", r[5], r[6])).collect();
    assert_eq!(referencing, vec!["PUBLIC.INVOICES", "SALES.ORDERS"]);
    assert!(column_strings(&result, "PKTABLE_NAME").iter().all(|t| t == "CUSTOMERS"));
}

#[test]
fn test_imported_keys_are_ordered_by_referenced_table() {
    let mut catalog = sample_catalog();
    catalog
        .create_table(TableSchema::new(
            "AUDIT_LOG".to_string(),
            vec![int("EMPLOYEE_ID", true), int("CUSTOMER_ID", true)],
        ))
        .unwrap();
    for (name, column, parent) in
        [("FK_AUDIT_EMPLOYEE", "EMPLOYEE_ID", "EMPLOYEES"), ("FK_AUDIT_CUSTOMER", "CUSTOMER_ID", "CUSTOMERS")]
    {
        catalog
            .add_foreign_key(
                "PUBLIC",
                "AUDIT_LOG",
                ForeignKeyConstraint::new(name, strings(&[column]), parent, strings(&["ID"])),
            )
            .unwrap();
    }

    let result = engine(&catalog).imported_keys(None, None, Some("AUDIT_LOG")).unwrap();
    assert_eq!(column_strings(&result, "PKTABLE_NAME"), vec!["CUSTOMERS", "EMPLOYEES"]);
    assert_eq!(column_strings(&result, "FK_NAME"), vec!["FK_AUDIT_CUSTOMER", "FK_AUDIT_EMPLOYEE"]);
}

#[test]
fn test_referenced_unique_constraint_name() {
    let mut catalog = sample_catalog();
    catalog
        .create_table(TableSchema::new(
            "NEWSLETTER".to_string(),
            vec![ColumnSchema::new("EMAIL".to_string(), DataType::Varchar { max_length: Some(100) }, false)],
        ))
        .unwrap();
    catalog
        .add_foreign_key(
            "PUBLIC",
            "NEWSLETTER",
            ForeignKeyConstraint::new("FK_NEWSLETTER_EMAIL", strings(&["EMAIL"]), "CUSTOMERS", strings(&["EMAIL"])),
        )
        .unwrap();

    let result = engine(&catalog).imported_keys(None, None, Some("NEWSLETTER")).unwrap();
    assert_eq!(column_strings(&result, "PK_NAME"), vec!["UQ_EMAIL"]);
}

#[test]
fn test_referenced_key_name_with_reordered_columns() {
    let mut catalog = simple_catalog();
    catalog
        .create_table(TableSchema::with_primary_key(
            "PAIRS".to_string(),
            vec![int("A", false), int("B", false)],
            strings(&["A", "B"]),
        ))
        .unwrap();
    catalog
        .create_table(TableSchema::new("PAIR_REFS".to_string(), vec![int("REF_B", true), int("REF_A", true)]))
        .unwrap();
    catalog
        .add_foreign_key(
            "PUBLIC",
            "PAIR_REFS",
            ForeignKeyConstraint::new("FK_PAIR_REFS", strings(&["REF_B", "REF_A"]), "PAIRS", strings(&["B", "A"])),
        )
        .unwrap();

    let result = engine(&catalog).imported_keys(None, None, Some("PAIR_REFS")).unwrap();
    assert_eq!(column_strings(&result, "PKCOLUMN_NAME"), vec!["B", "A"]);
    assert_eq!(column_strings(&result, "PK_NAME"), vec!["PK_PAIRS", "PK_PAIRS"]);
    assert_eq!(key_seqs(&result), vec![SqlValue::Smallint(1), SqlValue::Smallint(2)]);
}

#[test]
fn test_no_action_is_an_internal_error() {
    let mut catalog = simple_catalog();
    catalog
        .create_table(TableSchema::new("CHILD".to_string(), vec![int("T_A", true)]))
        .unwrap();
    catalog
        .add_foreign_key(
            "PUBLIC",
            "CHILD",
            ForeignKeyConstraint::new("FK_CHILD", strings(&["T_A"]), "T", strings(&["A"]))
                .on_delete(ReferentialAction::NoAction),
        )
        .unwrap();

    let engine = engine(&catalog);
    let result = engine.imported_keys(None, None, Some("CHILD"));
    assert!(matches!(result, Err(MetadataError::UnknownAction { action }) if action == "NO ACTION"));
    assert!(matches!(engine.exported_keys(None, None, Some("T")), Err(MetadataError::UnknownAction { .. })));
}

#[test]
fn test_foreign_key_to_dropped_table_is_skipped() {
    let mut catalog = sample_catalog();
    catalog.drop_table("PUBLIC.CUSTOMERS").unwrap();
    let result = engine(&catalog).imported_keys(None, Some("SALES"), Some("ORDERS")).unwrap();
    assert!(result.is_empty());
}

// ============================================================================
// Cross reference
// ============================================================================

#[test]
fn test_cross_reference_filters_by_primary_table() {
    let catalog = sample_catalog();
    let engine = engine(&catalog);

    let result = engine.cross_reference(None, None, Some("CUSTOMERS"), None, None, Some("ORDERS")).unwrap();
    assert_eq!(result.row_count(), 1);
    assert_eq!(column_strings(&result, "FK_NAME"), vec!["FK_ORDERS_CUSTOMER"]);

    let result = engine.cross_reference(None, None, Some("EMPLOYEES"), None, None, Some("ORDERS")).unwrap();
    assert!(result.is_empty());

    // Identifier comparison on the primary table name
    let result = engine.cross_reference(None, None, Some("customers"), None, None, Some("ORDERS")).unwrap();
    assert_eq!(result.row_count(), 1);
}

#[test]
fn test_cross_reference_primary_schema() {
    let catalog = sample_catalog();
    let engine = engine(&catalog);
    let rows = |schema: Option<&str>| {
        engine
            .cross_reference(None, schema, Some("CUSTOMERS"), None, Some("SALES"), Some("ORDERS"))
            .unwrap()
            .row_count()
    };
    assert_eq!(rows(None), 1);
    assert_eq!(rows(Some("PUBLIC")), 1);
    assert_eq!(rows(Some("")), 1);
    assert_eq!(rows(Some("SALES")), 0);
}

#[test]
fn test_cross_reference_foreign_schema() {
    let catalog = sample_catalog();
    let engine = engine(&catalog);
    let result = engine
        .cross_reference(None, None, Some("CUSTOMERS"), None, Some("PUBLIC"), Some("ORDERS"))
        .unwrap();
    assert!(result.is_empty());
    // The synonym in PUBLIC resolves to SALES.ORDERS
    let result =
        engine.cross_reference(None, None, Some("CUSTOMERS"), None, Some("PUBLIC"), Some("ORD")).unwrap();
    assert_eq!(column_strings(&result, "FKTABLE_SCHEM"), vec!["SALES"]);
}
