//! Database catalog store - manages all schemas and their objects.
//!
//! This module provides the main `Catalog` struct and is organized into
//! submodules by responsibility:
//!
//! - `tables` - Table creation, deletion, and lookup
//! - `schemas` - Schema management operations
//! - `synonyms` - Table synonyms and their resolution
//! - `constraints` - Primary key, unique and foreign key registration
//! - `indexes` - Index registration
//! - `settings` - Catalog name, collation and identifier case mode

use std::collections::HashMap;

use crate::schema::Schema;

mod constraints;
mod indexes;
mod schemas;
mod settings;
mod synonyms;
mod tables;

/// Name of the catalog when none is configured.
pub const DEFAULT_CATALOG_NAME: &str = "VIBESQL";

/// Name of the main schema, which always exists.
pub const MAIN_SCHEMA_NAME: &str = "PUBLIC";

/// Database catalog - manages all schemas and their objects.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub(crate) name: String,
    pub(crate) schemas: HashMap<String, Schema>,
    pub(crate) current_schema: String,
    /// Collation used to order identifiers; `None` is binary ordering
    pub(crate) collation: Option<String>,
    /// When true, identifier lookups are case-sensitive (SQL standard).
    /// When false (default), identifier lookups are case-insensitive.
    pub(crate) case_sensitive_identifiers: bool,
}

impl Catalog {
    /// Create a new catalog holding only the main schema.
    pub fn new() -> Self {
        Self::with_name(DEFAULT_CATALOG_NAME)
    }

    pub fn with_name(name: impl Into<String>) -> Self {
        let mut schemas = HashMap::new();
        schemas.insert(MAIN_SCHEMA_NAME.to_string(), Schema::new(MAIN_SCHEMA_NAME.to_string()));
        Catalog {
            name: name.into(),
            schemas,
            current_schema: MAIN_SCHEMA_NAME.to_string(),
            collation: None,
            case_sensitive_identifiers: false,
        }
    }

    /// Set whether identifier lookups should be case-sensitive.
    ///
    /// Objects are keyed by their lookup form when created, so the mode
    /// must be chosen before anything is added.
    pub fn set_case_sensitive_identifiers(&mut self, case_sensitive: bool) {
        self.case_sensitive_identifiers = case_sensitive;
    }

    /// Check if identifier lookups are case-sensitive
    pub fn is_case_sensitive_identifiers(&self) -> bool {
        self.case_sensitive_identifiers
    }

    /// Normalize an identifier for lookup (applies case folding if case-insensitive mode)
    pub(crate) fn normalize_identifier(&self, identifier: &str) -> String {
        if self.case_sensitive_identifiers {
            identifier.to_string()
        } else {
            identifier.to_uppercase()
        }
    }

    /// Compare two identifiers under the catalog's case mode
    pub fn equals_identifiers(&self, a: &str, b: &str) -> bool {
        self.normalize_identifier(a) == self.normalize_identifier(b)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
