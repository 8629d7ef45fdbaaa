//! Index management operations for the catalog
//!
//! Indexes are owned by their table; these methods validate and attach them.

use crate::{index::IndexMetadata, Catalog, CatalogError};

impl Catalog {
    /// Add an index to the table named by `index.table_name` in `schema_name`
    pub fn add_index(&mut self, schema_name: &str, index: IndexMetadata) -> Result<(), CatalogError> {
        let case_sensitive = self.case_sensitive_identifiers;
        let table = self.get_table_mut(schema_name, &index.table_name)?;

        if table.get_index(&index.name).is_some() {
            return Err(CatalogError::IndexAlreadyExists {
                index_name: index.name.clone(),
                table_name: index.table_name.clone(),
            });
        }

        // Verify all columns exist in the table
        let mut index = index;
        for col in &mut index.columns {
            let column = table.find_column(&col.column_name, case_sensitive).ok_or_else(|| {
                CatalogError::ColumnNotFound {
                    column_name: col.column_name.clone(),
                    table_name: table.name.clone(),
                }
            })?;
            col.column_name = column.name.clone();
        }
        index.table_name = table.name.clone();

        table.indexes.push(index);
        Ok(())
    }

    /// Remove an index from its table
    pub fn drop_index(
        &mut self,
        schema_name: &str,
        table_name: &str,
        index_name: &str,
    ) -> Result<IndexMetadata, CatalogError> {
        let table = self.get_table_mut(schema_name, table_name)?;
        let position = table.indexes.iter().position(|index| index.name == index_name).ok_or_else(|| {
            CatalogError::IndexNotFound {
                index_name: index_name.to_string(),
                table_name: table_name.to_string(),
            }
        })?;
        Ok(table.indexes.remove(position))
    }

    /// Get all indexes for a specific table
    pub fn get_table_indexes(&self, schema_name: &str, table_name: &str) -> Vec<&IndexMetadata> {
        self.get_table_in_schema(schema_name, table_name)
            .map(|table| table.indexes.iter().collect())
            .unwrap_or_default()
    }
}
