//! Table management operations for the catalog.
//!
//! This module handles table creation, deletion, and queries.

use crate::{errors::CatalogError, table::TableSchema};

impl super::Catalog {
    /// Create a table schema in the current schema.
    pub fn create_table(&mut self, schema: TableSchema) -> Result<(), CatalogError> {
        let current = self.current_schema.clone();
        self.create_table_in_schema(&current, schema)
    }

    /// Create a table schema in a specific schema.
    pub fn create_table_in_schema(
        &mut self,
        schema_name: &str,
        schema: TableSchema,
    ) -> Result<(), CatalogError> {
        let case_sensitive = self.case_sensitive_identifiers;
        self.get_schema_mut(schema_name)?.create_table_with_case_mode(schema, case_sensitive)
    }

    /// Get a table schema by name (supports qualified names like "schema.table").
    pub fn get_table(&self, name: &str) -> Option<&TableSchema> {
        match name.split_once('.') {
            Some((schema_name, table_name)) => self.get_table_in_schema(schema_name, table_name),
            None => self.get_table_in_schema(&self.current_schema, name),
        }
    }

    /// Get a table schema from a specific schema.
    pub fn get_table_in_schema(&self, schema_name: &str, table_name: &str) -> Option<&TableSchema> {
        self.get_schema(schema_name)
            .and_then(|schema| schema.get_table(table_name, self.case_sensitive_identifiers))
    }

    pub(crate) fn get_table_mut(
        &mut self,
        schema_name: &str,
        table_name: &str,
    ) -> Result<&mut TableSchema, CatalogError> {
        let case_sensitive = self.case_sensitive_identifiers;
        self.get_schema_mut(schema_name)?
            .get_table_mut(table_name, case_sensitive)
            .ok_or_else(|| CatalogError::TableNotFound { table_name: table_name.to_string() })
    }

    /// Drop a table schema (supports qualified names like "schema.table").
    pub fn drop_table(&mut self, name: &str) -> Result<(), CatalogError> {
        let (schema_name, table_name) = match name.split_once('.') {
            Some((schema_part, table_part)) => (schema_part.to_string(), table_part),
            None => (self.current_schema.clone(), name),
        };
        let case_sensitive = self.case_sensitive_identifiers;
        self.get_schema_mut(&schema_name)?.drop_table(table_name, case_sensitive).map(|_| ())
    }

    /// List all table names in the current schema.
    pub fn list_tables(&self) -> Vec<String> {
        self.schemas
            .get(&self.current_schema)
            .map(|schema| schema.list_tables())
            .unwrap_or_default()
    }

    /// Check if table exists (supports qualified names).
    pub fn table_exists(&self, name: &str) -> bool {
        self.get_table(name).is_some()
    }
}
