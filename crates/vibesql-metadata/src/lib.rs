//! Catalog metadata views
//!
//! This crate answers client metadata queries (the `DatabaseMetaData`
//! family: tables, columns, keys, indexes, type info) over a read-only
//! catalog. It provides:
//! - LIKE pattern matching with a configurable escape character
//! - Identifier ordering derived from the catalog collation
//! - A read-only accessor trait over the catalog model
//! - The metadata view engine producing typed, sorted result tables

pub mod accessor;
pub mod comparator;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod pattern;
pub mod result;
pub mod session;

pub use accessor::{CatalogAccessor, SchemaEntry};
pub use comparator::{Collation, IdentifierComparator};
pub use config::{ConfigError, MetadataConfig};
pub use engine::MetadataEngine;
pub use error::{MetadataError, Result};
pub use pattern::LikePattern;
pub use result::{column_type, ResultColumn, ResultTable};
pub use session::{DetachedSession, HelpTopic, NoQueryEngine, QuerySession, SharedSession};
