//! Common fixtures for metadata view tests

use std::sync::Arc;

use parking_lot::Mutex;
use thiserror::Error;
use vibesql_catalog::{
    Catalog, ColumnSchema, ForeignKeyConstraint, IndexMetadata, IndexStatistics, IndexType,
    IndexedColumn, ReferentialAction, TableKind, TableSchema, TableSynonym, UniqueConstraint,
};
use vibesql_metadata::{
    DetachedSession, HelpTopic, MetadataConfig, MetadataEngine, QuerySession, ResultTable,
    SharedSession,
};
use vibesql_types::{DataType, SqlValue};

pub fn int(name: &str, nullable: bool) -> ColumnSchema {
    ColumnSchema::new(name.to_string(), DataType::Integer, nullable)
}

pub fn varchar(name: &str, length: usize, nullable: bool) -> ColumnSchema {
    ColumnSchema::new(name.to_string(), DataType::Varchar { max_length: Some(length) }, nullable)
}

fn names(columns: &[&str]) -> Vec<String> {
    columns.iter().map(|c| c.to_string()).collect()
}

/// PUBLIC.T(A INTEGER NOT NULL, B INTEGER) with PRIMARY KEY (A)
#[allow(dead_code)] // Test helper - available for all test modules
pub fn simple_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog
        .create_table(TableSchema::with_primary_key(
            "T".to_string(),
            vec![int("A", false), int("B", true)],
            names(&["A"]),
        ))
        .unwrap();
    catalog
}

/// Two schemas with keys, synonyms, a view, a hidden table and indexes.
///
/// PUBLIC
///   CUSTOMERS(ID, EMAIL, NAME)        PK_CUSTOMERS(ID), UQ_EMAIL(EMAIL)
///   EMPLOYEES(ID, MANAGER_ID)         FK_MANAGER -> EMPLOYEES(ID)
///   ACTIVE_CUSTOMERS                  view
///   SYS_STATS                         hidden
///   ORD                               synonym for SALES.ORDERS
///   SECRET                            synonym for PUBLIC.SYS_STATS
/// SALES
///   ORDERS(ID, CUSTOMER_ID, REGION, PRIORITY)
///                                     FK_ORDERS_CUSTOMER -> PUBLIC.CUSTOMERS(ID)
///   ORDER_LINES(ORDER_ID, LINE_NO, QTY)
///                                     PK_ORDER_LINES(ORDER_ID, LINE_NO)
///   SHIPMENTS(ID, ORDER_REF, LINE_REF)
///                                     FK_SHIPMENT_LINE -> ORDER_LINES(ORDER_ID, LINE_NO)
#[allow(dead_code)]
pub fn sample_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.create_schema("SALES".to_string()).unwrap();

    let mut customers = TableSchema::with_primary_key(
        "CUSTOMERS".to_string(),
        vec![int("ID", false), varchar("EMAIL", 100, false), varchar("NAME", 50, true)],
        names(&["ID"]),
    )
    .with_comment("Customer master");
    customers.columns[2].set_default("'anonymous'");
    catalog.create_table(customers).unwrap();
    catalog
        .add_unique_constraint("PUBLIC", "CUSTOMERS", UniqueConstraint::new("UQ_EMAIL", names(&["EMAIL"])))
        .unwrap();

    catalog
        .create_table(TableSchema::with_primary_key(
            "EMPLOYEES".to_string(),
            vec![int("ID", false), int("MANAGER_ID", true)],
            names(&["ID"]),
        ))
        .unwrap();
    catalog
        .add_foreign_key(
            "PUBLIC",
            "EMPLOYEES",
            ForeignKeyConstraint::new("FK_MANAGER", names(&["MANAGER_ID"]), "EMPLOYEES", names(&["ID"]))
                .on_delete(ReferentialAction::SetNull),
        )
        .unwrap();

    catalog
        .create_table(
            TableSchema::new("ACTIVE_CUSTOMERS".to_string(), vec![int("ID", false)])
                .with_kind(TableKind::View),
        )
        .unwrap();
    catalog
        .create_table(
            TableSchema::new("SYS_STATS".to_string(), vec![int("HITS", false)])
                .with_comment("internal counters")
                .hidden(),
        )
        .unwrap();

    let mut orders = TableSchema::with_primary_key(
        "ORDERS".to_string(),
        vec![
            int("ID", false),
            int("CUSTOMER_ID", false),
            ColumnSchema::new("REGION".to_string(), DataType::Character { length: 2 }, true),
            int("PRIORITY", false),
        ],
        names(&["ID"]),
    );
    orders.columns[3].set_generated("ID % 10");
    catalog.create_table_in_schema("SALES", orders).unwrap();
    catalog
        .add_foreign_key(
            "SALES",
            "ORDERS",
            ForeignKeyConstraint::new("FK_ORDERS_CUSTOMER", names(&["CUSTOMER_ID"]), "CUSTOMERS", names(&["ID"]))
                .in_schema("PUBLIC")
                .on_delete(ReferentialAction::Cascade)
                .on_update(ReferentialAction::Restrict),
        )
        .unwrap();

    catalog
        .create_table_in_schema(
            "SALES",
            TableSchema::with_primary_key(
                "ORDER_LINES".to_string(),
                vec![
                    int("ORDER_ID", false),
                    int("LINE_NO", false),
                    ColumnSchema::new("QTY".to_string(), DataType::Numeric { precision: 10, scale: 2 }, true),
                ],
                names(&["ORDER_ID", "LINE_NO"]),
            ),
        )
        .unwrap();

    catalog
        .create_table_in_schema(
            "SALES",
            TableSchema::new(
                "SHIPMENTS".to_string(),
                vec![int("ID", false), int("ORDER_REF", false), int("LINE_REF", false)],
            ),
        )
        .unwrap();
    catalog
        .add_foreign_key(
            "SALES",
            "SHIPMENTS",
            ForeignKeyConstraint::new(
                "FK_SHIPMENT_LINE",
                names(&["ORDER_REF", "LINE_REF"]),
                "ORDER_LINES",
                names(&["ORDER_ID", "LINE_NO"]),
            )
            .on_update(ReferentialAction::SetDefault),
        )
        .unwrap();

    catalog
        .add_index(
            "SALES",
            IndexMetadata::new(
                "IDX_ORDERS_CUSTOMER".to_string(),
                "ORDERS".to_string(),
                IndexType::BTree,
                vec![IndexedColumn::descending("CUSTOMER_ID")],
                false,
            )
            .with_statistics(IndexStatistics {
                row_count: 1000,
                row_count_approximation: 990,
                disk_space_used: 40960,
            }),
        )
        .unwrap();
    catalog
        .add_index(
            "SALES",
            IndexMetadata::new(
                "IDX_ORDERS_ID".to_string(),
                "ORDERS".to_string(),
                IndexType::Hash,
                vec![IndexedColumn::ascending("ID")],
                true,
            ),
        )
        .unwrap();
    catalog
        .add_index(
            "SALES",
            IndexMetadata::new(
                "SYS_IDX_ORDERS".to_string(),
                "ORDERS".to_string(),
                IndexType::BTree,
                vec![IndexedColumn::ascending("ID")],
                true,
            )
            .system_generated(),
        )
        .unwrap();

    catalog.create_synonym("PUBLIC", TableSynonym::new("ORD", "SALES", "ORDERS")).unwrap();
    catalog.create_synonym("PUBLIC", TableSynonym::new("SECRET", "PUBLIC", "SYS_STATS")).unwrap();
    catalog
}

/// Engine over `catalog` with a session that has no SQL engine
#[allow(dead_code)]
pub fn engine(catalog: &Catalog) -> MetadataEngine<'_, Catalog, DetachedSession> {
    MetadataEngine::new(catalog, DetachedSession::new().into_shared(), MetadataConfig::default())
}

#[derive(Debug, Error)]
#[error("{0}")]
pub struct SessionFailure(pub String);

/// Query session double that records every statement it is asked to run
#[derive(Debug, Default)]
pub struct RecordingSession {
    pub closed: bool,
    pub lazy: bool,
    pub fail_with: Option<String>,
    pub response: ResultTable,
    pub executed: Vec<(String, Vec<SqlValue>)>,
    /// Lazy flag observed while each statement ran
    pub lazy_during_execution: Vec<bool>,
    pub help: Vec<HelpTopic>,
}

impl QuerySession for RecordingSession {
    type Error = SessionFailure;

    fn is_closed(&self) -> bool {
        self.closed
    }

    fn is_lazy_query_execution(&self) -> bool {
        self.lazy
    }

    fn set_lazy_query_execution(&mut self, lazy: bool) {
        self.lazy = lazy;
    }

    fn execute_query(&mut self, sql: &str, params: &[SqlValue]) -> Result<ResultTable, Self::Error> {
        self.executed.push((sql.to_string(), params.to_vec()));
        self.lazy_during_execution.push(self.lazy);
        match &self.fail_with {
            Some(message) => Err(SessionFailure(message.clone())),
            None => Ok(self.response.clone()),
        }
    }

    fn help_topics(&self) -> Vec<HelpTopic> {
        self.help.clone()
    }
}

#[allow(dead_code)]
pub fn shared(session: RecordingSession) -> SharedSession<RecordingSession> {
    Arc::new(Mutex::new(session))
}

/// Text of every cell in the column called `name`
#[allow(dead_code)]
pub fn column_strings(result: &ResultTable, name: &str) -> Vec<String> {
    let index = result.column_index(name).unwrap_or_else(|| panic!("no column {}", name));
    result.rows().iter().map(|row| row[index].to_string()).collect()
}

#[allow(dead_code)]
pub fn column_values(result: &ResultTable, name: &str) -> Vec<SqlValue> {
    let index = result.column_index(name).unwrap_or_else(|| panic!("no column {}", name));
    result.rows().iter().map(|row| row[index].clone()).collect()
}
