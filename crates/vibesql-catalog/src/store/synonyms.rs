//! Table synonym operations for the catalog.

use crate::{errors::CatalogError, schema::Schema, synonym::TableSynonym, table::TableSchema};

impl super::Catalog {
    /// Create a synonym in `schema_name`. The target must exist now but may
    /// be dropped later, leaving the synonym dangling.
    pub fn create_synonym(
        &mut self,
        schema_name: &str,
        synonym: TableSynonym,
    ) -> Result<(), CatalogError> {
        if self.get_table_in_schema(&synonym.target_schema, &synonym.target_table).is_none() {
            return Err(CatalogError::TableNotFound {
                table_name: format!("{}.{}", synonym.target_schema, synonym.target_table),
            });
        }
        let case_sensitive = self.case_sensitive_identifiers;
        self.get_schema_mut(schema_name)?.create_synonym_with_case_mode(synonym, case_sensitive)
    }

    /// Drop a synonym from `schema_name`.
    pub fn drop_synonym(&mut self, schema_name: &str, name: &str) -> Result<(), CatalogError> {
        let case_sensitive = self.case_sensitive_identifiers;
        self.get_schema_mut(schema_name)?.drop_synonym(name, case_sensitive).map(|_| ())
    }

    /// Resolve a synonym to its target schema and table, if both still exist.
    pub fn resolve_synonym(&self, synonym: &TableSynonym) -> Option<(&Schema, &TableSchema)> {
        let schema = self.get_schema(&synonym.target_schema)?;
        let table = schema.get_table(&synonym.target_table, self.case_sensitive_identifiers)?;
        Some((schema, table))
    }
}
