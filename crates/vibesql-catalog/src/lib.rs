//! Catalog - Schema Metadata Storage
//!
//! Provides metadata structures for schemas, tables, columns, constraints,
//! indexes and synonyms along with the catalog registry that owns them.
//! Everything here is built and mutated by the owner of the database; the
//! metadata views only ever read it.

mod column;
mod constraint;
pub mod errors;
mod foreign_key;
mod index;
mod schema;
mod store;
mod synonym;
mod table;

pub use column::ColumnSchema;
pub use constraint::{PrimaryKey, UniqueConstraint};
pub use errors::CatalogError;
pub use foreign_key::{ForeignKeyConstraint, ReferentialAction};
pub use index::{IndexMetadata, IndexStatistics, IndexType, IndexedColumn, SortOrder};
pub use schema::Schema;
pub use store::{Catalog, DEFAULT_CATALOG_NAME, MAIN_SCHEMA_NAME};
pub use synonym::TableSynonym;
pub use table::{TableKind, TableSchema};
