use log::debug;
use vibesql_catalog::TableSchema;
use vibesql_types::SqlValue;

use super::{clamp_to_i32, yes_no, MetadataEngine};
use crate::{
    accessor::{CatalogAccessor, SchemaEntry},
    constants::{COLUMN_NO_NULLS, COLUMN_NULLABLE},
    error::Result,
    pattern::LikePattern,
    result::{column_type, ResultTable},
    session::QuerySession,
};

/// TABLE_CAT, TABLE_SCHEM, TABLE_NAME, ORDINAL_POSITION
const SORT_KEY: [usize; 4] = [0, 1, 2, 16];

impl<'a, C: CatalogAccessor + ?Sized, S: QuerySession> MetadataEngine<'a, C, S> {
    /// Columns of every matching table, synonyms reported with their
    /// target's columns under the synonym's name.
    pub fn columns(
        &self,
        catalog: Option<&str>,
        schema_pattern: Option<&str>,
        table_pattern: Option<&str>,
        column_pattern: Option<&str>,
    ) -> Result<ResultTable> {
        self.check_closed()?;
        let mut result = ResultTable::with_columns([
            ("TABLE_CAT", column_type::VARCHAR),
            ("TABLE_SCHEM", column_type::VARCHAR),
            ("TABLE_NAME", column_type::VARCHAR),
            ("COLUMN_NAME", column_type::VARCHAR),
            ("DATA_TYPE", column_type::INTEGER),
            ("TYPE_NAME", column_type::VARCHAR),
            ("COLUMN_SIZE", column_type::INTEGER),
            ("BUFFER_LENGTH", column_type::INTEGER),
            ("DECIMAL_DIGITS", column_type::INTEGER),
            ("NUM_PREC_RADIX", column_type::INTEGER),
            ("NULLABLE", column_type::INTEGER),
            ("REMARKS", column_type::VARCHAR),
            ("COLUMN_DEF", column_type::VARCHAR),
            ("SQL_DATA_TYPE", column_type::INTEGER),
            ("SQL_DATETIME_SUB", column_type::INTEGER),
            ("CHAR_OCTET_LENGTH", column_type::INTEGER),
            ("ORDINAL_POSITION", column_type::INTEGER),
            ("IS_NULLABLE", column_type::VARCHAR),
            ("SCOPE_CATALOG", column_type::VARCHAR),
            ("SCOPE_SCHEMA", column_type::VARCHAR),
            ("SCOPE_TABLE", column_type::VARCHAR),
            ("SOURCE_DATA_TYPE", column_type::SMALLINT),
            ("IS_AUTOINCREMENT", column_type::VARCHAR),
            ("IS_GENERATEDCOLUMN", column_type::VARCHAR),
        ]);
        if !self.catalog.matches_catalog(catalog) {
            return Ok(result);
        }

        let schema_like = self.like(schema_pattern)?;
        let table_like = self.like(table_pattern)?;
        let column_like = self.like(column_pattern)?;
        for schema in self.catalog.schemas_matching(schema_like.as_ref()) {
            for entry in self.catalog.tables_and_synonyms(schema, table_like.as_ref()) {
                if let SchemaEntry::Table(table) = entry {
                    if table.hidden {
                        continue;
                    }
                }
                self.add_column_rows(
                    &mut result,
                    &schema.name,
                    entry.name(),
                    entry.table(),
                    column_like.as_ref(),
                );
            }
        }

        result.sort_rows(&SORT_KEY, &self.comparator);
        debug!("columns: {} rows", result.row_count());
        Ok(result)
    }

    fn add_column_rows(
        &self,
        result: &mut ResultTable,
        schema_name: &str,
        table_name: &str,
        table: &TableSchema,
        column_like: Option<&LikePattern>,
    ) {
        for (i, column) in table.columns.iter().enumerate() {
            if column_like.is_some_and(|like| !like.matches(&column.name)) {
                continue;
            }
            let descriptor = column.data_type.descriptor();
            let precision = SqlValue::Integer(clamp_to_i32(column.data_type.precision()));
            let radix =
                if column.data_type.is_numeric() { SqlValue::Integer(10) } else { SqlValue::Null };
            let nullable = if column.nullable { COLUMN_NULLABLE } else { COLUMN_NO_NULLS };
            let default = if column.generated {
                SqlValue::Null
            } else {
                SqlValue::nullable_varchar(column.default_sql.as_deref())
            };
            result.add_row(vec![
                self.catalog_value(),
                SqlValue::varchar(schema_name),
                SqlValue::varchar(table_name),
                SqlValue::varchar(&column.name),
                SqlValue::Integer(descriptor.sql_type),
                SqlValue::varchar(descriptor.name),
                precision.clone(),
                SqlValue::Null,
                SqlValue::Integer(column.data_type.scale()),
                radix,
                SqlValue::Integer(nullable),
                SqlValue::nullable_varchar(column.comment.as_deref()),
                default,
                SqlValue::Null,
                SqlValue::Null,
                precision,
                SqlValue::Integer(clamp_to_i32(i as i64 + 1)),
                yes_no(column.nullable),
                SqlValue::Null,
                SqlValue::Null,
                SqlValue::Null,
                SqlValue::Null,
                yes_no(column.auto_increment),
                yes_no(column.generated),
            ]);
        }
    }
}
