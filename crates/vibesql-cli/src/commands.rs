//! Subcommands, one per metadata view

use clap::{Args, Subcommand};
use vibesql_metadata::{CatalogAccessor, MetadataEngine, QuerySession, ResultTable};

/// Catalog and schema selectors shared by most views
#[derive(Args, Debug, Clone, Default)]
pub struct Scope {
    /// Catalog name; absent or empty matches the catalog
    #[arg(long)]
    pub catalog: Option<String>,

    /// Schema name or LIKE pattern
    #[arg(long)]
    pub schema: Option<String>,
}

/// A single named table
#[derive(Args, Debug, Clone)]
pub struct TableRef {
    #[command(flatten)]
    pub scope: Scope,

    /// Table name (exact)
    #[arg(long)]
    pub table: String,
}

#[derive(Subcommand, Debug, Clone)]
pub enum MetaCommand {
    /// List the catalog name
    Catalogs,

    /// List schemas
    Schemas {
        #[command(flatten)]
        scope: Scope,
    },

    /// List the supported table types
    TableTypes,

    /// List tables, views and synonyms
    Tables {
        #[command(flatten)]
        scope: Scope,

        /// Table name LIKE pattern
        #[arg(long)]
        table: Option<String>,

        /// Comma-separated table types, e.g. "TABLE,VIEW"
        #[arg(long, value_delimiter = ',')]
        types: Option<Vec<String>>,
    },

    /// List columns
    Columns {
        #[command(flatten)]
        scope: Scope,

        /// Table name LIKE pattern
        #[arg(long)]
        table: Option<String>,

        /// Column name LIKE pattern
        #[arg(long)]
        column: Option<String>,
    },

    /// Primary key columns of a table
    PrimaryKeys(TableRef),

    /// Foreign keys declared on a table
    ImportedKeys(TableRef),

    /// Foreign keys referencing a table
    ExportedKeys(TableRef),

    /// Foreign keys between two tables
    CrossReference {
        #[arg(long)]
        primary_catalog: Option<String>,

        #[arg(long)]
        primary_schema: Option<String>,

        /// Referenced table
        #[arg(long)]
        primary_table: String,

        #[arg(long)]
        foreign_catalog: Option<String>,

        #[arg(long)]
        foreign_schema: Option<String>,

        /// Referencing table
        #[arg(long)]
        foreign_table: String,
    },

    /// Indexes of a table
    IndexInfo {
        #[command(flatten)]
        table: TableRef,

        /// Only unique indexes
        #[arg(long)]
        unique: bool,

        /// Report estimated row counts
        #[arg(long)]
        approximate: bool,
    },

    /// Best row identifier of a table
    BestRow(TableRef),

    /// Supported data types
    TypeInfo,
}

impl MetaCommand {
    /// Name used in log lines
    pub fn name(&self) -> &'static str {
        match self {
            MetaCommand::Catalogs => "catalogs",
            MetaCommand::Schemas { .. } => "schemas",
            MetaCommand::TableTypes => "table-types",
            MetaCommand::Tables { .. } => "tables",
            MetaCommand::Columns { .. } => "columns",
            MetaCommand::PrimaryKeys(_) => "primary-keys",
            MetaCommand::ImportedKeys(_) => "imported-keys",
            MetaCommand::ExportedKeys(_) => "exported-keys",
            MetaCommand::CrossReference { .. } => "cross-reference",
            MetaCommand::IndexInfo { .. } => "index-info",
            MetaCommand::BestRow(_) => "best-row",
            MetaCommand::TypeInfo => "type-info",
        }
    }

    /// Run the view against `engine`
    pub fn run<C, S>(&self, engine: &MetadataEngine<'_, C, S>) -> vibesql_metadata::Result<ResultTable>
    where
        C: CatalogAccessor + ?Sized,
        S: QuerySession,
    {
        match self {
            MetaCommand::Catalogs => engine.catalogs(),
            MetaCommand::Schemas { scope } => engine.list_schemas(scope.catalog.as_deref(), scope.schema.as_deref()),
            MetaCommand::TableTypes => engine.table_types(),
            MetaCommand::Tables { scope, table, types } => {
                let types: Option<Vec<&str>> = types.as_ref().map(|t| t.iter().map(|s| s.trim()).collect());
                engine.tables(scope.catalog.as_deref(), scope.schema.as_deref(), table.as_deref(), types.as_deref())
            }
            MetaCommand::Columns { scope, table, column } => engine.columns(
                scope.catalog.as_deref(),
                scope.schema.as_deref(),
                table.as_deref(),
                column.as_deref(),
            ),
            MetaCommand::PrimaryKeys(t) => engine.primary_keys(t.catalog(), t.schema(), Some(t.table.as_str())),
            MetaCommand::ImportedKeys(t) => engine.imported_keys(t.catalog(), t.schema(), Some(t.table.as_str())),
            MetaCommand::ExportedKeys(t) => engine.exported_keys(t.catalog(), t.schema(), Some(t.table.as_str())),
            MetaCommand::CrossReference {
                primary_catalog,
                primary_schema,
                primary_table,
                foreign_catalog,
                foreign_schema,
                foreign_table,
            } => engine.cross_reference(
                primary_catalog.as_deref(),
                primary_schema.as_deref(),
                Some(primary_table.as_str()),
                foreign_catalog.as_deref(),
                foreign_schema.as_deref(),
                Some(foreign_table.as_str()),
            ),
            MetaCommand::IndexInfo { table: t, unique, approximate } => {
                engine.index_info(t.catalog(), t.schema(), Some(t.table.as_str()), *unique, *approximate)
            }
            MetaCommand::BestRow(t) => engine.best_row_identifier(t.catalog(), t.schema(), Some(t.table.as_str())),
            MetaCommand::TypeInfo => engine.type_info(),
        }
    }
}

impl TableRef {
    fn catalog(&self) -> Option<&str> {
        self.scope.catalog.as_deref()
    }

    fn schema(&self) -> Option<&str> {
        self.scope.schema.as_deref()
    }
}
