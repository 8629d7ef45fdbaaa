//! Schema - Named collection of database objects

use std::collections::HashMap;

use crate::{errors::CatalogError, synonym::TableSynonym, table::TableSchema};

/// A schema - named collection of tables and table synonyms.
///
/// Tables and synonyms share one namespace. Map keys are the lookup form of
/// the name (uppercased unless the catalog is case-sensitive); the stored
/// objects keep their declared names.
#[derive(Debug, Clone)]
pub struct Schema {
    pub name: String,
    tables: HashMap<String, TableSchema>,
    synonyms: HashMap<String, TableSynonym>,
}

fn lookup_key(name: &str, case_sensitive: bool) -> String {
    if case_sensitive {
        name.to_string()
    } else {
        name.to_uppercase()
    }
}

impl Schema {
    /// Create a new empty schema
    pub fn new(name: String) -> Self {
        Schema { name, tables: HashMap::new(), synonyms: HashMap::new() }
    }

    fn name_taken(&self, key: &str) -> bool {
        self.tables.contains_key(key) || self.synonyms.contains_key(key)
    }

    /// Create a table in this schema
    pub fn create_table_with_case_mode(
        &mut self,
        schema: TableSchema,
        case_sensitive: bool,
    ) -> Result<(), CatalogError> {
        let key = lookup_key(&schema.name, case_sensitive);
        if self.name_taken(&key) {
            return Err(CatalogError::TableAlreadyExists(schema.name.clone()));
        }
        self.tables.insert(key, schema);
        Ok(())
    }

    /// Create a table in this schema (assumes case-insensitive)
    pub fn create_table(&mut self, schema: TableSchema) -> Result<(), CatalogError> {
        self.create_table_with_case_mode(schema, false)
    }

    /// Get a table schema by name with optional case-insensitive lookup
    pub fn get_table(&self, name: &str, case_sensitive: bool) -> Option<&TableSchema> {
        self.tables.get(&lookup_key(name, case_sensitive))
    }

    pub(crate) fn get_table_mut(&mut self, name: &str, case_sensitive: bool) -> Option<&mut TableSchema> {
        self.tables.get_mut(&lookup_key(name, case_sensitive))
    }

    /// Drop a table from this schema with optional case-insensitive lookup
    pub fn drop_table(&mut self, name: &str, case_sensitive: bool) -> Result<TableSchema, CatalogError> {
        self.tables
            .remove(&lookup_key(name, case_sensitive))
            .ok_or_else(|| CatalogError::TableNotFound { table_name: name.to_string() })
    }

    /// Register a synonym in this schema
    pub fn create_synonym_with_case_mode(
        &mut self,
        synonym: TableSynonym,
        case_sensitive: bool,
    ) -> Result<(), CatalogError> {
        let key = lookup_key(&synonym.name, case_sensitive);
        if self.name_taken(&key) {
            return Err(CatalogError::TableAlreadyExists(synonym.name.clone()));
        }
        self.synonyms.insert(key, synonym);
        Ok(())
    }

    pub fn get_synonym(&self, name: &str, case_sensitive: bool) -> Option<&TableSynonym> {
        self.synonyms.get(&lookup_key(name, case_sensitive))
    }

    pub fn drop_synonym(&mut self, name: &str, case_sensitive: bool) -> Result<TableSynonym, CatalogError> {
        self.synonyms
            .remove(&lookup_key(name, case_sensitive))
            .ok_or_else(|| CatalogError::SynonymNotFound(name.to_string()))
    }

    /// All tables, views included, in unspecified order
    pub fn tables(&self) -> impl Iterator<Item = &TableSchema> {
        self.tables.values()
    }

    /// All synonyms in unspecified order
    pub fn synonyms(&self) -> impl Iterator<Item = &TableSynonym> {
        self.synonyms.values()
    }

    /// List all table names in this schema
    pub fn list_tables(&self) -> Vec<String> {
        self.tables.values().map(|t| t.name.clone()).collect()
    }

    /// Check if table exists in this schema (case-insensitive)
    pub fn table_exists(&self, name: &str) -> bool {
        self.get_table(name, false).is_some()
    }

    /// Check if schema is empty (no tables or synonyms)
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty() && self.synonyms.is_empty()
    }

    /// Get the number of tables in this schema
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }
}
