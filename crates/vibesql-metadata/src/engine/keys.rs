//! Primary key, best-row identifier and foreign key views

use log::{debug, warn};
use vibesql_catalog::{ForeignKeyConstraint, ReferentialAction, Schema, TableSchema};
use vibesql_types::SqlValue;

use super::{clamp_to_i16, clamp_to_i32, ordinal, required, MetadataEngine};
use crate::{
    accessor::CatalogAccessor,
    constants::{
        BEST_ROW_NOT_PSEUDO, BEST_ROW_SESSION, IMPORTED_KEY_CASCADE, IMPORTED_KEY_NOT_DEFERRABLE,
        IMPORTED_KEY_RESTRICT, IMPORTED_KEY_SET_DEFAULT, IMPORTED_KEY_SET_NULL,
    },
    error::{MetadataError, Result},
    result::{column_type, ResultTable},
    session::QuerySession,
};

/// COLUMN_NAME
const PRIMARY_KEY_SORT_KEY: [usize; 1] = [3];
/// PKTABLE_CAT, PKTABLE_SCHEM, PKTABLE_NAME, KEY_SEQ
const IMPORTED_SORT_KEY: [usize; 4] = [0, 1, 2, 8];
/// FKTABLE_CAT, FKTABLE_SCHEM, FKTABLE_NAME, KEY_SEQ
const EXPORTED_SORT_KEY: [usize; 4] = [4, 5, 6, 8];

/// Rule code reported for a referential action
pub(crate) fn ref_action(action: ReferentialAction) -> Result<i16> {
    match action {
        ReferentialAction::Cascade => Ok(IMPORTED_KEY_CASCADE),
        ReferentialAction::Restrict => Ok(IMPORTED_KEY_RESTRICT),
        ReferentialAction::SetDefault => Ok(IMPORTED_KEY_SET_DEFAULT),
        ReferentialAction::SetNull => Ok(IMPORTED_KEY_SET_NULL),
        other => Err(MetadataError::UnknownAction { action: other.to_string() }),
    }
}

fn cross_reference_result() -> ResultTable {
    ResultTable::with_columns([
        ("PKTABLE_CAT", column_type::VARCHAR),
        ("PKTABLE_SCHEM", column_type::VARCHAR),
        ("PKTABLE_NAME", column_type::VARCHAR),
        ("PKCOLUMN_NAME", column_type::VARCHAR),
        ("FKTABLE_CAT", column_type::VARCHAR),
        ("FKTABLE_SCHEM", column_type::VARCHAR),
        ("FKTABLE_NAME", column_type::VARCHAR),
        ("FKCOLUMN_NAME", column_type::VARCHAR),
        ("KEY_SEQ", column_type::SMALLINT),
        ("UPDATE_RULE", column_type::SMALLINT),
        ("DELETE_RULE", column_type::SMALLINT),
        ("FK_NAME", column_type::VARCHAR),
        ("PK_NAME", column_type::VARCHAR),
        ("DEFERRABILITY", column_type::SMALLINT),
    ])
}

impl<'a, C: CatalogAccessor + ?Sized, S: QuerySession> MetadataEngine<'a, C, S> {
    /// Tables named `table` in the schemas selected by `schema`, synonyms
    /// resolved and hidden tables dropped.
    pub(super) fn find_tables(&self, schema: Option<&str>, table: &str) -> Vec<(&'a Schema, &'a TableSchema)> {
        let catalog = self.catalog;
        catalog
            .schemas_by_name(schema)
            .into_iter()
            .filter_map(|s| catalog.find_table(s, table))
            .filter(|(_, t)| !t.hidden)
            .collect()
    }

    /// Referenced table of a foreign key declared on a table of `owner`
    fn parent_of(&self, owner: &Schema, fk: &ForeignKeyConstraint) -> Option<(&'a Schema, &'a TableSchema)> {
        let parent_schema = fk.parent_schema.as_deref().unwrap_or(&owner.name);
        let catalog: &'a C = self.catalog;
        let parent = catalog.find_table_in(parent_schema, &fk.parent_table);
        if parent.is_none() {
            warn!(
                "foreign key {} refers to missing table {}.{}",
                fk.name, parent_schema, fk.parent_table
            );
        }
        parent
    }

    /// `None` accepts any schema, `""` only the main schema
    fn schema_matches(&self, name: Option<&str>, schema: &Schema) -> bool {
        match name {
            None => true,
            Some("") => self.catalog.main_schema().is_some_and(|main| std::ptr::eq(main, schema)),
            Some(name) => self.catalog.equals_identifiers(name, &schema.name),
        }
    }

    /// Primary key columns of `table`, ordered by column name
    pub fn primary_keys(
        &self,
        catalog: Option<&str>,
        schema: Option<&str>,
        table: Option<&str>,
    ) -> Result<ResultTable> {
        let table = required(table, "table")?;
        self.check_closed()?;
        let mut result = ResultTable::with_columns([
            ("TABLE_CAT", column_type::VARCHAR),
            ("TABLE_SCHEM", column_type::VARCHAR),
            ("TABLE_NAME", column_type::VARCHAR),
            ("COLUMN_NAME", column_type::VARCHAR),
            ("KEY_SEQ", column_type::SMALLINT),
            ("PK_NAME", column_type::VARCHAR),
        ]);
        if !self.catalog.matches_catalog(catalog) {
            return Ok(result);
        }

        for (owner, found) in self.find_tables(schema, table) {
            let Some(primary_key) = &found.primary_key else {
                continue;
            };
            for (i, column) in primary_key.columns.iter().enumerate() {
                result.add_row(vec![
                    self.catalog_value(),
                    SqlValue::varchar(&owner.name),
                    SqlValue::varchar(&found.name),
                    SqlValue::varchar(column),
                    SqlValue::Smallint(ordinal(i)),
                    SqlValue::varchar(&primary_key.name),
                ]);
            }
        }

        result.sort_rows(&PRIMARY_KEY_SORT_KEY, &self.comparator);
        debug!("primary_keys({}): {} rows", table, result.row_count());
        Ok(result)
    }

    /// Columns that uniquely identify a row of `table`: its primary key.
    ///
    /// Scope is always the session and no pseudo columns are reported.
    pub fn best_row_identifier(
        &self,
        catalog: Option<&str>,
        schema: Option<&str>,
        table: Option<&str>,
    ) -> Result<ResultTable> {
        let table = required(table, "table")?;
        self.check_closed()?;
        let mut result = ResultTable::with_columns([
            ("SCOPE", column_type::SMALLINT),
            ("COLUMN_NAME", column_type::VARCHAR),
            ("DATA_TYPE", column_type::INTEGER),
            ("TYPE_NAME", column_type::VARCHAR),
            ("COLUMN_SIZE", column_type::INTEGER),
            ("BUFFER_LENGTH", column_type::INTEGER),
            ("DECIMAL_DIGITS", column_type::SMALLINT),
            ("PSEUDO_COLUMN", column_type::SMALLINT),
        ]);
        if !self.catalog.matches_catalog(catalog) {
            return Ok(result);
        }

        let case_sensitive = self.catalog.case_sensitive();
        for (_, found) in self.find_tables(schema, table) {
            let Some(primary_key) = &found.primary_key else {
                continue;
            };
            for name in &primary_key.columns {
                let Some(column) = found.find_column(name, case_sensitive) else {
                    warn!("primary key {} names missing column {}", primary_key.name, name);
                    continue;
                };
                let descriptor = column.data_type.descriptor();
                let decimal_digits = if descriptor.supports_scale {
                    SqlValue::Smallint(clamp_to_i16(column.data_type.scale()))
                } else {
                    SqlValue::Null
                };
                result.add_row(vec![
                    SqlValue::Smallint(BEST_ROW_SESSION),
                    SqlValue::varchar(&column.name),
                    SqlValue::Integer(descriptor.sql_type),
                    SqlValue::varchar(descriptor.name),
                    SqlValue::Integer(clamp_to_i32(column.data_type.precision())),
                    SqlValue::Null,
                    decimal_digits,
                    SqlValue::Smallint(BEST_ROW_NOT_PSEUDO),
                ]);
            }
        }

        debug!("best_row_identifier({}): {} rows", table, result.row_count());
        Ok(result)
    }

    /// Foreign keys declared on `table`, one row per column pair
    pub fn imported_keys(
        &self,
        catalog: Option<&str>,
        schema: Option<&str>,
        table: Option<&str>,
    ) -> Result<ResultTable> {
        let table = required(table, "table")?;
        self.check_closed()?;
        let mut result = cross_reference_result();
        if !self.catalog.matches_catalog(catalog) {
            return Ok(result);
        }

        for (owner, child) in self.find_tables(schema, table) {
            for fk in &child.foreign_keys {
                let Some((parent_schema, parent)) = self.parent_of(owner, fk) else {
                    continue;
                };
                self.add_cross_reference_rows(&mut result, (parent_schema, parent), (owner, child), fk)?;
            }
        }

        result.sort_rows(&IMPORTED_SORT_KEY, &self.comparator);
        debug!("imported_keys({}): {} rows", table, result.row_count());
        Ok(result)
    }

    /// Foreign keys of any table that reference `table`
    pub fn exported_keys(
        &self,
        catalog: Option<&str>,
        schema: Option<&str>,
        table: Option<&str>,
    ) -> Result<ResultTable> {
        let table = required(table, "table")?;
        self.check_closed()?;
        let mut result = cross_reference_result();
        if !self.catalog.matches_catalog(catalog) {
            return Ok(result);
        }

        for (parent_schema, parent) in self.find_tables(schema, table) {
            for owner in self.catalog.all_schemas() {
                for child in owner.tables().filter(|t| !t.hidden) {
                    for fk in &child.foreign_keys {
                        let references_parent = self
                            .parent_of(owner, fk)
                            .is_some_and(|(_, referenced)| std::ptr::eq(referenced, parent));
                        if references_parent {
                            self.add_cross_reference_rows(
                                &mut result,
                                (parent_schema, parent),
                                (owner, child),
                                fk,
                            )?;
                        }
                    }
                }
            }
        }

        result.sort_rows(&EXPORTED_SORT_KEY, &self.comparator);
        debug!("exported_keys({}): {} rows", table, result.row_count());
        Ok(result)
    }

    /// Foreign keys of `foreign_table` that reference `primary_table`
    pub fn cross_reference(
        &self,
        primary_catalog: Option<&str>,
        primary_schema: Option<&str>,
        primary_table: Option<&str>,
        foreign_catalog: Option<&str>,
        foreign_schema: Option<&str>,
        foreign_table: Option<&str>,
    ) -> Result<ResultTable> {
        let primary_table = required(primary_table, "primaryTable")?;
        let foreign_table = required(foreign_table, "foreignTable")?;
        self.check_closed()?;
        let mut result = cross_reference_result();
        if !self.catalog.matches_catalog(primary_catalog) || !self.catalog.matches_catalog(foreign_catalog) {
            return Ok(result);
        }

        for (owner, child) in self.find_tables(foreign_schema, foreign_table) {
            for fk in &child.foreign_keys {
                let Some((parent_schema, parent)) = self.parent_of(owner, fk) else {
                    continue;
                };
                if !self.catalog.equals_identifiers(&parent.name, primary_table)
                    || !self.schema_matches(primary_schema, parent_schema)
                {
                    continue;
                }
                self.add_cross_reference_rows(&mut result, (parent_schema, parent), (owner, child), fk)?;
            }
        }

        result.sort_rows(&EXPORTED_SORT_KEY, &self.comparator);
        debug!(
            "cross_reference({} -> {}): {} rows",
            foreign_table,
            primary_table,
            result.row_count()
        );
        Ok(result)
    }

    /// One row per column pair, KEY_SEQ counting from 1
    fn add_cross_reference_rows(
        &self,
        result: &mut ResultTable,
        (parent_schema, parent): (&Schema, &TableSchema),
        (child_schema, child): (&Schema, &TableSchema),
        fk: &ForeignKeyConstraint,
    ) -> Result<()> {
        let update_rule = ref_action(fk.on_update)?;
        let delete_rule = ref_action(fk.on_delete)?;
        let pk_name = fk.referenced_constraint.as_deref();
        for (j, (fk_column, pk_column)) in fk.column_pairs().enumerate() {
            result.add_row(vec![
                self.catalog_value(),
                SqlValue::varchar(&parent_schema.name),
                SqlValue::varchar(&parent.name),
                SqlValue::varchar(pk_column),
                self.catalog_value(),
                SqlValue::varchar(&child_schema.name),
                SqlValue::varchar(&child.name),
                SqlValue::varchar(fk_column),
                SqlValue::Smallint(ordinal(j)),
                SqlValue::Smallint(update_rule),
                SqlValue::Smallint(delete_rule),
                SqlValue::varchar(&fk.name),
                SqlValue::nullable_varchar(pk_name),
                SqlValue::Smallint(IMPORTED_KEY_NOT_DEFERRABLE),
            ]);
        }
        Ok(())
    }
}
