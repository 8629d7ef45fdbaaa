use log::{debug, warn};
use vibesql_catalog::{IndexMetadata, Schema, SortOrder, TableSchema};
use vibesql_types::SqlValue;

use super::{ordinal, required, MetadataEngine};
use crate::{
    accessor::CatalogAccessor,
    constants::{TABLE_INDEX_HASHED, TABLE_INDEX_OTHER, TABLE_INDEX_STATISTIC},
    error::Result,
    result::{column_type, ResultTable},
    session::QuerySession,
};

/// NON_UNIQUE, TYPE, INDEX_NAME, ORDINAL_POSITION
const SORT_KEY: [usize; 4] = [3, 6, 5, 7];

impl<'a, C: CatalogAccessor + ?Sized, S: QuerySession> MetadataEngine<'a, C, S> {
    /// Indexes of `table`, one row per indexed column.
    ///
    /// With `unique` only unique indexes are listed. `approximate` reports
    /// the estimated instead of the exact row count as CARDINALITY.
    pub fn index_info(
        &self,
        catalog: Option<&str>,
        schema: Option<&str>,
        table: Option<&str>,
        unique: bool,
        approximate: bool,
    ) -> Result<ResultTable> {
        let table = required(table, "table")?;
        self.check_closed()?;
        let mut result = ResultTable::with_columns([
            ("TABLE_CAT", column_type::VARCHAR),
            ("TABLE_SCHEM", column_type::VARCHAR),
            ("TABLE_NAME", column_type::VARCHAR),
            ("NON_UNIQUE", column_type::BOOLEAN),
            ("INDEX_QUALIFIER", column_type::VARCHAR),
            ("INDEX_NAME", column_type::VARCHAR),
            ("TYPE", column_type::SMALLINT),
            ("ORDINAL_POSITION", column_type::SMALLINT),
            ("COLUMN_NAME", column_type::VARCHAR),
            ("ASC_OR_DESC", column_type::VARCHAR),
            ("CARDINALITY", column_type::BIGINT),
            ("PAGES", column_type::BIGINT),
            ("FILTER_CONDITION", column_type::VARCHAR),
        ]);
        if !self.catalog.matches_catalog(catalog) {
            return Ok(result);
        }

        for (owner, found) in self.find_tables(schema, table) {
            for index in found.indexes.iter().filter(|index| index.is_materialized()) {
                if unique && !index.is_unique {
                    continue;
                }
                self.add_index_rows(&mut result, owner, found, index, approximate);
            }
        }

        result.sort_rows(&SORT_KEY, &self.comparator);
        debug!("index_info({}): {} rows", table, result.row_count());
        Ok(result)
    }

    fn add_index_rows(
        &self,
        result: &mut ResultTable,
        schema: &Schema,
        table: &TableSchema,
        index: &IndexMetadata,
        approximate: bool,
    ) {
        let index_type = self.classify_index(table, index);
        let statistics = &index.statistics;
        let row_count =
            if approximate { statistics.row_count_approximation } else { statistics.row_count };
        // Unknown without a page size
        let pages = statistics
            .disk_space_used
            .checked_div(self.config.page_size)
            .map_or(SqlValue::Null, |pages| SqlValue::Bigint(to_bigint(pages)));

        for (i, column) in index.columns.iter().enumerate() {
            let direction = match column.order {
                SortOrder::Ascending => "A",
                SortOrder::Descending => "D",
            };
            result.add_row(vec![
                self.catalog_value(),
                SqlValue::varchar(&schema.name),
                SqlValue::varchar(&table.name),
                SqlValue::Boolean(!index.is_unique),
                self.catalog_value(),
                SqlValue::varchar(&index.name),
                SqlValue::Smallint(index_type),
                SqlValue::Smallint(ordinal(i)),
                SqlValue::varchar(&column.column_name),
                SqlValue::varchar(direction),
                SqlValue::Bigint(to_bigint(row_count)),
                pages.clone(),
                SqlValue::Null,
            ]);
        }
    }

    /// A unique index over non-nullable columns is hashed or other,
    /// anything else is a statistic.
    fn classify_index(&self, table: &TableSchema, index: &IndexMetadata) -> i16 {
        if !index.is_unique {
            return TABLE_INDEX_STATISTIC;
        }
        let case_sensitive = self.catalog.case_sensitive();
        let all_not_null = index.columns.iter().all(|indexed| {
            match table.find_column(&indexed.column_name, case_sensitive) {
                Some(column) => !column.nullable,
                None => {
                    warn!("index {} names missing column {}", index.name, indexed.column_name);
                    false
                }
            }
        });
        match (all_not_null, index.index_type.is_hash()) {
            (false, _) => TABLE_INDEX_STATISTIC,
            (true, true) => TABLE_INDEX_HASHED,
            (true, false) => TABLE_INDEX_OTHER,
        }
    }
}

fn to_bigint(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
