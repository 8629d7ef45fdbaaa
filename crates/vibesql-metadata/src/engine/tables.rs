use std::collections::HashSet;

use log::debug;
use vibesql_types::SqlValue;

use super::MetadataEngine;
use crate::{
    accessor::{CatalogAccessor, SchemaEntry},
    constants::{SYNONYM_TABLE_TYPE, TABLE_TYPES, TABLE_TYPE_ALIAS},
    error::Result,
    result::{column_type, ResultTable},
    session::QuerySession,
};

/// TABLE_TYPE, TABLE_CAT, TABLE_SCHEM, TABLE_NAME
const SORT_KEY: [usize; 4] = [3, 0, 1, 2];

impl<'a, C: CatalogAccessor + ?Sized, S: QuerySession> MetadataEngine<'a, C, S> {
    /// Tables, views and synonyms matching the schema and table patterns.
    ///
    /// `types` restricts the reported table types; `TABLE` is accepted for
    /// `BASE TABLE`. A filter naming no known type yields no rows.
    pub fn tables(
        &self,
        catalog: Option<&str>,
        schema_pattern: Option<&str>,
        table_pattern: Option<&str>,
        types: Option<&[&str]>,
    ) -> Result<ResultTable> {
        self.check_closed()?;
        let mut result = ResultTable::with_columns([
            ("TABLE_CAT", column_type::VARCHAR),
            ("TABLE_SCHEM", column_type::VARCHAR),
            ("TABLE_NAME", column_type::VARCHAR),
            ("TABLE_TYPE", column_type::VARCHAR),
            ("REMARKS", column_type::VARCHAR),
            ("TYPE_CAT", column_type::VARCHAR),
            ("TYPE_SCHEM", column_type::VARCHAR),
            ("TYPE_NAME", column_type::VARCHAR),
            ("SELF_REFERENCING_COL_NAME", column_type::VARCHAR),
            ("REF_GENERATION", column_type::VARCHAR),
        ]);
        if !self.catalog.matches_catalog(catalog) {
            return Ok(result);
        }

        let type_filter = match types {
            Some(types) => {
                let accepted = accepted_table_types(types);
                if accepted.is_empty() {
                    return Ok(result);
                }
                Some(accepted)
            }
            None => None,
        };

        let schema_like = self.like(schema_pattern)?;
        let table_like = self.like(table_pattern)?;
        for schema in self.catalog.schemas_matching(schema_like.as_ref()) {
            for entry in self.catalog.tables_and_synonyms(schema, table_like.as_ref()) {
                let table_type = match entry {
                    SchemaEntry::Table(table) if table.hidden => continue,
                    SchemaEntry::Table(table) => table.kind.sql_table_type(),
                    // Reported even when the target is hidden
                    SchemaEntry::Synonym { .. } => SYNONYM_TABLE_TYPE,
                };
                if type_filter.as_ref().is_some_and(|accepted| !accepted.contains(table_type)) {
                    continue;
                }
                result.add_row(vec![
                    self.catalog_value(),
                    SqlValue::varchar(&schema.name),
                    SqlValue::varchar(entry.name()),
                    SqlValue::varchar(table_type),
                    SqlValue::nullable_varchar(entry.table().comment.as_deref()),
                    SqlValue::Null,
                    SqlValue::Null,
                    SqlValue::Null,
                    SqlValue::Null,
                    SqlValue::Null,
                ]);
            }
        }

        result.sort_rows(&SORT_KEY, &self.comparator);
        debug!("tables: {} rows", result.row_count());
        Ok(result)
    }
}

/// Resolve requested type names against the known table types
fn accepted_table_types(types: &[&str]) -> HashSet<&'static str> {
    let mut accepted = HashSet::new();
    for requested in types {
        match TABLE_TYPES.binary_search(requested) {
            Ok(index) => {
                accepted.insert(TABLE_TYPES[index]);
            }
            Err(_) if *requested == TABLE_TYPE_ALIAS => {
                accepted.insert(TABLE_TYPES[0]);
            }
            Err(_) => {}
        }
    }
    accepted
}
