//! Views answered by the SQL layer
//!
//! Procedures and privileges live in the information schema, so these views
//! run a fixed statement through the session instead of walking the catalog.
//! The function lists come from the session's help table.

use log::debug;
use vibesql_types::SqlValue;

use super::MetadataEngine;
use crate::{
    accessor::CatalogAccessor,
    constants::{
        percent, NUMERIC_FUNCTIONS_SECTION, STRING_FUNCTIONS_SECTION, SYSTEM_FUNCTIONS_SECTION,
        TIME_DATE_FUNCTIONS_SECTION, YES,
    },
    error::{MetadataError, Result},
    result::ResultTable,
    session::QuerySession,
};

pub const PROCEDURES_SQL: &str = "SELECT \
ALIAS_CATALOG PROCEDURE_CAT, \
ALIAS_SCHEMA PROCEDURE_SCHEM, \
ALIAS_NAME PROCEDURE_NAME, \
COLUMN_COUNT NUM_INPUT_PARAMS, \
ZERO() NUM_OUTPUT_PARAMS, \
ZERO() NUM_RESULT_SETS, \
REMARKS, \
RETURNS_RESULT PROCEDURE_TYPE, \
ALIAS_NAME SPECIFIC_NAME \
FROM INFORMATION_SCHEMA.FUNCTION_ALIASES \
WHERE ALIAS_CATALOG LIKE ?1 ESCAPE ?4 \
AND ALIAS_SCHEMA LIKE ?2 ESCAPE ?4 \
AND ALIAS_NAME LIKE ?3 ESCAPE ?4 \
ORDER BY PROCEDURE_SCHEM, PROCEDURE_NAME, NUM_INPUT_PARAMS";

pub const PROCEDURE_COLUMNS_SQL: &str = "SELECT \
ALIAS_CATALOG PROCEDURE_CAT, \
ALIAS_SCHEMA PROCEDURE_SCHEM, \
ALIAS_NAME PROCEDURE_NAME, \
COLUMN_NAME, \
COLUMN_TYPE, \
DATA_TYPE, \
TYPE_NAME, \
PRECISION, \
PRECISION LENGTH, \
SCALE, \
RADIX, \
NULLABLE, \
REMARKS, \
COLUMN_DEFAULT COLUMN_DEF, \
ZERO() SQL_DATA_TYPE, \
ZERO() SQL_DATETIME_SUB, \
ZERO() CHAR_OCTET_LENGTH, \
POS ORDINAL_POSITION, \
?1 IS_NULLABLE, \
ALIAS_NAME SPECIFIC_NAME \
FROM INFORMATION_SCHEMA.FUNCTION_COLUMNS \
WHERE ALIAS_CATALOG LIKE ?2 ESCAPE ?6 \
AND ALIAS_SCHEMA LIKE ?3 ESCAPE ?6 \
AND ALIAS_NAME LIKE ?4 ESCAPE ?6 \
AND COLUMN_NAME LIKE ?5 ESCAPE ?6 \
ORDER BY PROCEDURE_SCHEM, PROCEDURE_NAME, ORDINAL_POSITION";

pub const COLUMN_PRIVILEGES_SQL: &str = "SELECT \
TABLE_CATALOG TABLE_CAT, \
TABLE_SCHEMA TABLE_SCHEM, \
TABLE_NAME, \
COLUMN_NAME, \
GRANTOR, \
GRANTEE, \
PRIVILEGE_TYPE PRIVILEGE, \
IS_GRANTABLE \
FROM INFORMATION_SCHEMA.COLUMN_PRIVILEGES \
WHERE TABLE_CATALOG LIKE ?1 ESCAPE ?5 \
AND TABLE_SCHEMA LIKE ?2 ESCAPE ?5 \
AND TABLE_NAME = ?3 \
AND COLUMN_NAME LIKE ?4 ESCAPE ?5 \
ORDER BY COLUMN_NAME, PRIVILEGE";

pub const TABLE_PRIVILEGES_SQL: &str = "SELECT \
TABLE_CATALOG TABLE_CAT, \
TABLE_SCHEMA TABLE_SCHEM, \
TABLE_NAME, \
GRANTOR, \
GRANTEE, \
PRIVILEGE_TYPE PRIVILEGE, \
IS_GRANTABLE \
FROM INFORMATION_SCHEMA.TABLE_PRIVILEGES \
WHERE TABLE_CATALOG LIKE ?1 ESCAPE ?4 \
AND TABLE_SCHEMA LIKE ?2 ESCAPE ?4 \
AND TABLE_NAME LIKE ?3 ESCAPE ?4 \
ORDER BY TABLE_SCHEM, TABLE_NAME, PRIVILEGE";

impl<'a, C: CatalogAccessor + ?Sized, S: QuerySession> MetadataEngine<'a, C, S> {
    /// Stored procedures (function aliases) matching the patterns
    pub fn procedures(
        &self,
        catalog: Option<&str>,
        schema_pattern: Option<&str>,
        procedure_pattern: Option<&str>,
    ) -> Result<ResultTable> {
        self.execute_query(
            PROCEDURES_SQL,
            &[
                catalog_bind(catalog),
                self.schema_bind(schema_pattern),
                pattern_bind(procedure_pattern),
                self.escape_bind(),
            ],
        )
    }

    /// Parameters of the matching procedures
    pub fn procedure_columns(
        &self,
        catalog: Option<&str>,
        schema_pattern: Option<&str>,
        procedure_pattern: Option<&str>,
        column_pattern: Option<&str>,
    ) -> Result<ResultTable> {
        self.execute_query(
            PROCEDURE_COLUMNS_SQL,
            &[
                SqlValue::varchar(YES),
                catalog_bind(catalog),
                self.schema_bind(schema_pattern),
                pattern_bind(procedure_pattern),
                pattern_bind(column_pattern),
                self.escape_bind(),
            ],
        )
    }

    /// Column grants on one table; the table name is compared exactly
    pub fn column_privileges(
        &self,
        catalog: Option<&str>,
        schema: Option<&str>,
        table: Option<&str>,
        column_pattern: Option<&str>,
    ) -> Result<ResultTable> {
        self.execute_query(
            COLUMN_PRIVILEGES_SQL,
            &[
                catalog_bind(catalog),
                self.schema_bind(schema),
                SqlValue::nullable_varchar(table),
                pattern_bind(column_pattern),
                self.escape_bind(),
            ],
        )
    }

    /// Table grants matching the patterns
    pub fn table_privileges(
        &self,
        catalog: Option<&str>,
        schema_pattern: Option<&str>,
        table_pattern: Option<&str>,
    ) -> Result<ResultTable> {
        self.execute_query(
            TABLE_PRIVILEGES_SQL,
            &[
                catalog_bind(catalog),
                self.schema_bind(schema_pattern),
                pattern_bind(table_pattern),
                self.escape_bind(),
            ],
        )
    }

    pub fn numeric_functions(&self) -> Result<String> {
        self.functions(NUMERIC_FUNCTIONS_SECTION)
    }

    pub fn string_functions(&self) -> Result<String> {
        self.functions(STRING_FUNCTIONS_SECTION)
    }

    pub fn system_functions(&self) -> Result<String> {
        self.functions(SYSTEM_FUNCTIONS_SECTION)
    }

    pub fn time_date_functions(&self) -> Result<String> {
        self.functions(TIME_DATE_FUNCTIONS_SECTION)
    }

    /// Comma-separated function names of one help section.
    /// `INSERT Function` is listed as `INSERT`.
    fn functions(&self, section: &str) -> Result<String> {
        self.check_closed()?;
        let topics = self.session.lock().help_topics();
        let names: Vec<&str> = topics
            .iter()
            .filter(|entry| entry.section.trim() == section)
            .map(|entry| {
                let topic = entry.topic.trim();
                topic.split_once(' ').map_or(topic, |(name, _)| name)
            })
            .collect();
        Ok(names.join(","))
    }

    /// Run `sql` with the session locked and lazy execution switched off
    fn execute_query(&self, sql: &str, params: &[SqlValue]) -> Result<ResultTable> {
        self.check_closed()?;
        let mut session = self.session.lock();
        let lazy = session.is_lazy_query_execution();
        session.set_lazy_query_execution(false);
        let result = session.execute_query(sql, params);
        session.set_lazy_query_execution(lazy);
        drop(session);

        let result = result.map_err(|e| MetadataError::Query(Box::new(e)))?;
        debug!("pass-through query: {} rows", result.row_count());
        Ok(result)
    }

    /// Empty schema pattern selects the main schema
    fn schema_bind(&self, pattern: Option<&str>) -> SqlValue {
        match pattern {
            None => percent(),
            Some("") => self.catalog.main_schema().map_or_else(percent, |main| SqlValue::varchar(&main.name)),
            Some(pattern) => SqlValue::varchar(pattern),
        }
    }

    fn escape_bind(&self) -> SqlValue {
        SqlValue::varchar(self.config.search_escape.to_string())
    }
}

fn catalog_bind(pattern: Option<&str>) -> SqlValue {
    match pattern {
        None | Some("") => percent(),
        Some(pattern) => SqlValue::varchar(pattern),
    }
}

fn pattern_bind(pattern: Option<&str>) -> SqlValue {
    pattern.map_or_else(percent, SqlValue::varchar)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binds() {
        assert_eq!(catalog_bind(None), SqlValue::varchar("%"));
        assert_eq!(catalog_bind(Some("")), SqlValue::varchar("%"));
        assert_eq!(catalog_bind(Some("DB")), SqlValue::varchar("DB"));
        assert_eq!(pattern_bind(None), SqlValue::varchar("%"));
        assert_eq!(pattern_bind(Some("")), SqlValue::varchar(""));
    }

    #[test]
    fn test_statements_use_every_bind() {
        for (sql, binds) in [
            (PROCEDURES_SQL, 4),
            (PROCEDURE_COLUMNS_SQL, 6),
            (COLUMN_PRIVILEGES_SQL, 5),
            (TABLE_PRIVILEGES_SQL, 4),
        ] {
            for i in 1..=binds {
                assert!(sql.contains(&format!("?{}", i)), "{} lacks ?{}", sql, i);
            }
            assert!(!sql.contains(&format!("?{}", binds + 1)));
            assert!(!sql.contains("  "));
        }
    }
}
