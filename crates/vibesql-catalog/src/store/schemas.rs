//! Schema management operations for the catalog.
//!
//! This module handles creation, deletion, and querying of database schemas.

use super::MAIN_SCHEMA_NAME;
use crate::{errors::CatalogError, schema::Schema};

impl super::Catalog {
    /// Create a new schema.
    pub fn create_schema(&mut self, name: String) -> Result<(), CatalogError> {
        if self.get_schema(&name).is_some() {
            return Err(CatalogError::SchemaAlreadyExists(name));
        }
        self.schemas.insert(name.clone(), Schema::new(name));
        Ok(())
    }

    /// Drop a schema.
    pub fn drop_schema(&mut self, name: &str, cascade: bool) -> Result<(), CatalogError> {
        let key = self.schema_key(name).ok_or_else(|| CatalogError::SchemaNotFound(name.to_string()))?;

        // The main schema always exists
        if key == MAIN_SCHEMA_NAME {
            return Err(CatalogError::SchemaNotEmpty(key));
        }

        let schema =
            self.schemas.get(&key).ok_or_else(|| CatalogError::SchemaNotFound(name.to_string()))?;
        if !cascade && !schema.is_empty() {
            return Err(CatalogError::SchemaNotEmpty(name.to_string()));
        }

        self.schemas.remove(&key);
        if self.current_schema == key {
            self.current_schema = MAIN_SCHEMA_NAME.to_string();
        }
        Ok(())
    }

    /// Key of the schema named `name` under the catalog's case mode
    pub(crate) fn schema_key(&self, name: &str) -> Option<String> {
        if self.schemas.contains_key(name) {
            return Some(name.to_string());
        }
        if self.case_sensitive_identifiers {
            return None;
        }
        let normalized = name.to_uppercase();
        self.schemas.keys().find(|key| key.to_uppercase() == normalized).cloned()
    }

    /// Get a schema by name, respecting the catalog's case mode.
    pub fn get_schema(&self, name: &str) -> Option<&Schema> {
        self.schema_key(name).and_then(|key| self.schemas.get(&key))
    }

    pub(crate) fn get_schema_mut(&mut self, name: &str) -> Result<&mut Schema, CatalogError> {
        let key = self.schema_key(name).ok_or_else(|| CatalogError::SchemaNotFound(name.to_string()))?;
        self.schemas.get_mut(&key).ok_or(CatalogError::SchemaNotFound(key))
    }

    /// The main schema
    pub fn main_schema(&self) -> Option<&Schema> {
        self.schemas.get(MAIN_SCHEMA_NAME)
    }

    /// All schemas in unspecified order
    pub fn schemas(&self) -> impl Iterator<Item = &Schema> {
        self.schemas.values()
    }

    /// List all schema names.
    pub fn list_schemas(&self) -> Vec<String> {
        self.schemas.values().map(|schema| schema.name.clone()).collect()
    }

    /// Check if schema exists.
    pub fn schema_exists(&self, name: &str) -> bool {
        self.get_schema(name).is_some()
    }

    /// Set the current schema for unqualified table references.
    pub fn set_current_schema(&mut self, name: &str) -> Result<(), CatalogError> {
        let key = self.schema_key(name).ok_or_else(|| CatalogError::SchemaNotFound(name.to_string()))?;
        self.current_schema = key;
        Ok(())
    }

    /// Get the current schema name.
    pub fn get_current_schema(&self) -> &str {
        &self.current_schema
    }
}
