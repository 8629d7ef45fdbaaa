//! VibeSQL - catalog metadata views
//!
//! This is the root crate that re-exports all components.

pub use vibesql_catalog as catalog;
pub use vibesql_metadata as metadata;
pub use vibesql_types as types;
