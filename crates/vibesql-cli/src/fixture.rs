//! Catalog fixtures
//!
//! A fixture is a TOML document describing a catalog:
//!
//! ```toml
//! catalog = "SHOP"
//!
//! [[schemas]]
//! name = "PUBLIC"
//!
//! [[schemas.tables]]
//! name = "CUSTOMERS"
//! primary_key = ["ID"]
//! columns = [
//!     { name = "ID", type = "INTEGER", nullable = false },
//!     { name = "EMAIL", type = "VARCHAR(255)" },
//! ]
//! ```
//!
//! Schemas are created first, then tables with their keys, then foreign keys
//! and indexes, and synonyms last, so references may point forward in the
//! document.

use std::{fs, path::Path};

use serde::Deserialize;
use tracing::debug;
use vibesql_catalog::{
    Catalog, ColumnSchema, ForeignKeyConstraint, IndexMetadata, IndexStatistics, IndexType,
    IndexedColumn, PrimaryKey, ReferentialAction, TableKind, TableSchema, TableSynonym,
    UniqueConstraint, DEFAULT_CATALOG_NAME,
};
use vibesql_types::DataType;

use crate::error::FixtureError;

#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    #[serde(default = "default_catalog_name")]
    pub catalog: String,
    #[serde(default)]
    pub case_sensitive_identifiers: bool,
    /// Identifier collation, e.g. `NOCASE`
    #[serde(default)]
    pub collation: Option<String>,
    #[serde(default)]
    pub schemas: Vec<SchemaFixture>,
}

#[derive(Debug, Deserialize)]
pub struct SchemaFixture {
    pub name: String,
    #[serde(default)]
    pub tables: Vec<TableFixture>,
    #[serde(default)]
    pub synonyms: Vec<SynonymFixture>,
}

#[derive(Debug, Deserialize)]
pub struct TableFixture {
    pub name: String,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub columns: Vec<ColumnFixture>,
    #[serde(default)]
    pub primary_key: Vec<String>,
    /// Defaults to `PK_<table>`
    #[serde(default)]
    pub primary_key_name: Option<String>,
    #[serde(default)]
    pub unique: Vec<UniqueFixture>,
    #[serde(default)]
    pub foreign_keys: Vec<ForeignKeyFixture>,
    #[serde(default)]
    pub indexes: Vec<IndexFixture>,
}

#[derive(Debug, Deserialize)]
pub struct ColumnFixture {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: String,
    #[serde(default = "default_true")]
    pub nullable: bool,
    #[serde(default)]
    pub auto_increment: bool,
    /// Generation expression of a computed column
    #[serde(default)]
    pub generated: Option<String>,
    #[serde(default)]
    pub default: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UniqueFixture {
    pub name: String,
    pub columns: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ForeignKeyFixture {
    pub name: String,
    pub columns: Vec<String>,
    /// Defaults to the table's own schema
    #[serde(default)]
    pub references_schema: Option<String>,
    pub references_table: String,
    pub references_columns: Vec<String>,
    #[serde(default)]
    pub on_delete: Option<String>,
    #[serde(default)]
    pub on_update: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct IndexFixture {
    pub name: String,
    pub columns: Vec<String>,
    /// Columns of `columns` sorted descending
    #[serde(default)]
    pub descending: Vec<String>,
    #[serde(default)]
    pub unique: bool,
    #[serde(default)]
    pub hash: bool,
    #[serde(default)]
    pub system_generated: bool,
    #[serde(default)]
    pub row_count: u64,
    #[serde(default)]
    pub row_count_approximation: u64,
    #[serde(default)]
    pub disk_space_used: u64,
}

#[derive(Debug, Deserialize)]
pub struct SynonymFixture {
    pub name: String,
    pub schema: String,
    pub table: String,
}

fn default_catalog_name() -> String {
    DEFAULT_CATALOG_NAME.to_string()
}

fn default_true() -> bool {
    true
}

impl CatalogFixture {
    pub fn from_toml_str(content: &str) -> Result<Self, FixtureError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read fixture '{}': {}", path.display(), e))?;
        Ok(Self::from_toml_str(&content)?)
    }

    /// Build the catalog the fixture describes
    pub fn build(&self) -> Result<Catalog, FixtureError> {
        let mut catalog = Catalog::with_name(self.catalog.clone());
        catalog.set_case_sensitive_identifiers(self.case_sensitive_identifiers);
        catalog.set_collation(self.collation.clone());

        for schema in &self.schemas {
            if catalog.get_schema(&schema.name).is_none() {
                catalog.create_schema(schema.name.clone())?;
            }
        }

        for schema in &self.schemas {
            for table in &schema.tables {
                catalog.create_table_in_schema(&schema.name, table.table_schema()?)?;
                if !table.primary_key.is_empty() {
                    let name = table.primary_key_name.clone().unwrap_or_else(|| format!("PK_{}", table.name));
                    catalog.set_primary_key(
                        &schema.name,
                        &table.name,
                        PrimaryKey::new(name, table.primary_key.clone()),
                    )?;
                }
                for unique in &table.unique {
                    catalog.add_unique_constraint(
                        &schema.name,
                        &table.name,
                        UniqueConstraint::new(unique.name.clone(), unique.columns.clone()),
                    )?;
                }
            }
        }

        for schema in &self.schemas {
            for table in &schema.tables {
                for fk in &table.foreign_keys {
                    catalog.add_foreign_key(&schema.name, &table.name, fk.constraint()?)?;
                }
                for index in &table.indexes {
                    catalog.add_index(&schema.name, index.metadata(&table.name))?;
                }
            }
        }

        for schema in &self.schemas {
            for synonym in &schema.synonyms {
                catalog.create_synonym(
                    &schema.name,
                    TableSynonym::new(synonym.name.clone(), synonym.schema.clone(), synonym.table.clone()),
                )?;
            }
        }

        debug!(catalog = %self.catalog, schemas = self.schemas.len(), "fixture loaded");
        Ok(catalog)
    }
}

impl TableFixture {
    fn table_schema(&self) -> Result<TableSchema, FixtureError> {
        let columns = self.columns.iter().map(ColumnFixture::column_schema).collect::<Result<Vec<_>, _>>()?;
        let mut table = TableSchema::new(self.name.clone(), columns)
            .with_kind(parse_table_kind(self.kind.as_deref())?);
        table.hidden = self.hidden;
        table.comment = self.comment.clone();
        Ok(table)
    }
}

impl ColumnFixture {
    fn column_schema(&self) -> Result<ColumnSchema, FixtureError> {
        let mut column = ColumnSchema::new(self.name.clone(), parse_data_type(&self.data_type)?, self.nullable);
        if self.auto_increment {
            column = column.with_auto_increment();
        }
        if let Some(comment) = &self.comment {
            column = column.with_comment(comment.clone());
        }
        match (&self.generated, &self.default) {
            (Some(expression), _) => column.set_generated(expression.clone()),
            (None, Some(default)) => column.set_default(default.clone()),
            (None, None) => {}
        }
        Ok(column)
    }
}

impl ForeignKeyFixture {
    fn constraint(&self) -> Result<ForeignKeyConstraint, FixtureError> {
        let mut fk = ForeignKeyConstraint::new(
            self.name.clone(),
            self.columns.clone(),
            self.references_table.clone(),
            self.references_columns.clone(),
        );
        if let Some(schema) = &self.references_schema {
            fk = fk.in_schema(schema.clone());
        }
        if let Some(action) = &self.on_delete {
            fk = fk.on_delete(parse_action(action)?);
        }
        if let Some(action) = &self.on_update {
            fk = fk.on_update(parse_action(action)?);
        }
        Ok(fk)
    }
}

impl IndexFixture {
    fn metadata(&self, table_name: &str) -> IndexMetadata {
        let columns = self
            .columns
            .iter()
            .map(|name| {
                if self.descending.contains(name) {
                    IndexedColumn::descending(name.clone())
                } else {
                    IndexedColumn::ascending(name.clone())
                }
            })
            .collect();
        let index_type = if self.hash { IndexType::Hash } else { IndexType::BTree };
        let index = IndexMetadata::new(self.name.clone(), table_name.to_string(), index_type, columns, self.unique)
            .with_statistics(IndexStatistics {
                row_count: self.row_count,
                row_count_approximation: self.row_count_approximation,
                disk_space_used: self.disk_space_used,
            });
        if self.system_generated {
            index.system_generated()
        } else {
            index
        }
    }
}

fn parse_table_kind(kind: Option<&str>) -> Result<TableKind, FixtureError> {
    let Some(kind) = kind else {
        return Ok(TableKind::BaseTable);
    };
    match kind.trim().to_uppercase().as_str() {
        "TABLE" | "BASE TABLE" => Ok(TableKind::BaseTable),
        "VIEW" => Ok(TableKind::View),
        "GLOBAL TEMPORARY" => Ok(TableKind::GlobalTemporary),
        "LOCAL TEMPORARY" => Ok(TableKind::LocalTemporary),
        _ => Err(FixtureError::UnknownTableKind(kind.to_string())),
    }
}

fn parse_action(action: &str) -> Result<ReferentialAction, FixtureError> {
    match action.trim().to_uppercase().as_str() {
        "CASCADE" => Ok(ReferentialAction::Cascade),
        // NO ACTION is reported as RESTRICT
        "RESTRICT" | "NO ACTION" => Ok(ReferentialAction::Restrict),
        "SET NULL" => Ok(ReferentialAction::SetNull),
        "SET DEFAULT" => Ok(ReferentialAction::SetDefault),
        _ => Err(FixtureError::UnknownAction(action.to_string())),
    }
}

/// Parse a column type such as `VARCHAR(64)` or `NUMERIC(10,2)`
pub fn parse_data_type(source: &str) -> Result<DataType, FixtureError> {
    let unknown = || FixtureError::UnknownType(source.to_string());
    let normalized = source.trim().to_uppercase();
    let (name, args) = match normalized.split_once('(') {
        Some((name, rest)) => {
            let args = rest.strip_suffix(')').ok_or_else(unknown)?;
            let args = args
                .split(',')
                .map(|arg| arg.trim().parse::<usize>().map_err(|_| unknown()))
                .collect::<Result<Vec<_>, _>>()?;
            (name.trim().to_string(), args)
        }
        None => (normalized, Vec::new()),
    };
    let name = name.split_whitespace().collect::<Vec<_>>().join(" ");

    let precision = |index: usize, default: u8| -> Result<u8, FixtureError> {
        args.get(index).map_or(Ok(default), |&value| u8::try_from(value).map_err(|_| unknown()))
    };

    let data_type = match (name.as_str(), args.len()) {
        ("INTEGER" | "INT", 0) => DataType::Integer,
        ("SMALLINT", 0) => DataType::Smallint,
        ("BIGINT", 0) => DataType::Bigint,
        ("BIGINT UNSIGNED", 0) => DataType::Unsigned,
        ("BOOLEAN", 0) => DataType::Boolean,
        ("VARCHAR" | "CHARACTER VARYING", 0) => DataType::Varchar { max_length: None },
        ("VARCHAR" | "CHARACTER VARYING", 1) => DataType::Varchar { max_length: Some(args[0]) },
        ("CHAR" | "CHARACTER", 0) => DataType::Character { length: 1 },
        ("CHAR" | "CHARACTER", 1) => DataType::Character { length: args[0] },
        ("NUMERIC", 0..=2) => DataType::Numeric { precision: precision(0, 38)?, scale: precision(1, 0)? },
        ("DECIMAL", 0..=2) => DataType::Decimal { precision: precision(0, 38)?, scale: precision(1, 0)? },
        ("FLOAT", 0..=1) => DataType::Float { precision: precision(0, 53)? },
        ("REAL", 0) => DataType::Real,
        ("DOUBLE PRECISION" | "DOUBLE", 0) => DataType::DoublePrecision,
        ("DATE", 0) => DataType::Date,
        ("TIME", 0) => DataType::Time { with_timezone: false },
        ("TIME WITH TIME ZONE", 0) => DataType::Time { with_timezone: true },
        ("TIMESTAMP", 0) => DataType::Timestamp { with_timezone: false },
        ("TIMESTAMP WITH TIME ZONE", 0) => DataType::Timestamp { with_timezone: true },
        ("CLOB", 0) => DataType::CharacterLargeObject,
        ("BLOB", 0) => DataType::BinaryLargeObject,
        _ => return Err(unknown()),
    };
    Ok(data_type)
}
