//! Metadata view engine
//!
//! Each operation builds a [`ResultTable`] with the fixed column shape of the
//! corresponding client metadata call, fills it from the catalog and sorts it
//! by that call's sort key.
//!
//! Shared rules:
//! - a catalog filter naming another catalog yields an empty, correctly
//!   shaped table, never an error
//! - a missing required identifier fails with
//!   [`MetadataError::MissingArgument`] before anything else is checked
//! - every operation fails with [`MetadataError::SessionClosed`] once the
//!   session is closed

mod columns;
mod indexes;
mod keys;
mod passthrough;
mod tables;
mod types;

use log::debug;
use vibesql_types::SqlValue;

use crate::{
    accessor::CatalogAccessor,
    comparator::{Collation, IdentifierComparator},
    config::MetadataConfig,
    constants::{SQL_KEYWORDS, TABLE_TYPES},
    error::{MetadataError, Result},
    pattern::LikePattern,
    result::{column_type, ResultTable},
    session::{QuerySession, SharedSession},
};

/// Answers metadata queries over one catalog and session
pub struct MetadataEngine<'a, C: CatalogAccessor + ?Sized, S: QuerySession> {
    catalog: &'a C,
    session: SharedSession<S>,
    config: MetadataConfig,
    comparator: IdentifierComparator,
}

impl<'a, C: CatalogAccessor + ?Sized, S: QuerySession> MetadataEngine<'a, C, S> {
    /// Create an engine. The identifier comparator is built once, here, from
    /// the catalog's collation.
    pub fn new(catalog: &'a C, session: SharedSession<S>, config: MetadataConfig) -> Self {
        let comparator = IdentifierComparator::new(Collation::from_name(catalog.identifier_collation()));
        MetadataEngine { catalog, session, config, comparator }
    }

    /// Replace the identifier comparator
    pub fn with_comparator(mut self, comparator: IdentifierComparator) -> Self {
        self.comparator = comparator;
        self
    }

    pub fn comparator(&self) -> &IdentifierComparator {
        &self.comparator
    }

    pub fn config(&self) -> &MetadataConfig {
        &self.config
    }

    pub fn session(&self) -> &SharedSession<S> {
        &self.session
    }

    fn check_closed(&self) -> Result<()> {
        if self.session.lock().is_closed() {
            return Err(MetadataError::SessionClosed);
        }
        Ok(())
    }

    /// Compile an optional name pattern with the configured escape
    fn like(&self, pattern: Option<&str>) -> Result<Option<LikePattern>> {
        let ignore_case = !self.catalog.case_sensitive();
        Ok(LikePattern::compile_optional(pattern, self.config.search_escape)?
            .map(|p| p.ignore_case(ignore_case)))
    }

    fn catalog_value(&self) -> SqlValue {
        SqlValue::varchar(self.catalog.catalog_name())
    }

    /// List the single catalog
    pub fn catalogs(&self) -> Result<ResultTable> {
        self.check_closed()?;
        let mut result = ResultTable::with_columns([("TABLE_CAT", column_type::VARCHAR)]);
        result.add_row(vec![self.catalog_value()]);
        Ok(result)
    }

    /// All schemas of the catalog
    pub fn schemas(&self) -> Result<ResultTable> {
        self.list_schemas(None, None)
    }

    /// Schemas whose name matches `schema_pattern`, ordered by name
    pub fn list_schemas(&self, catalog: Option<&str>, schema_pattern: Option<&str>) -> Result<ResultTable> {
        self.check_closed()?;
        let mut result = ResultTable::with_columns([
            ("TABLE_SCHEM", column_type::VARCHAR),
            ("TABLE_CATALOG", column_type::VARCHAR),
        ]);
        if !self.catalog.matches_catalog(catalog) {
            return Ok(result);
        }

        let like = self.like(schema_pattern)?;
        let mut names: Vec<&str> =
            self.catalog.schemas_matching(like.as_ref()).into_iter().map(|s| s.name.as_str()).collect();
        self.comparator.sort(&mut names);
        for name in names {
            result.add_row(vec![SqlValue::varchar(name), self.catalog_value()]);
        }
        debug!("list_schemas: {} rows", result.row_count());
        Ok(result)
    }

    /// The fixed list of table types
    pub fn table_types(&self) -> Result<ResultTable> {
        self.check_closed()?;
        let mut result = ResultTable::with_columns([("TABLE_TYPE", column_type::VARCHAR)]);
        for table_type in TABLE_TYPES {
            result.add_row(vec![SqlValue::varchar(table_type)]);
        }
        Ok(result)
    }

    /// Escape character accepted by every pattern argument
    pub fn search_string_escape(&self) -> Result<String> {
        self.check_closed()?;
        Ok(self.config.search_escape.to_string())
    }

    /// Comma-separated keywords the dialect reserves beyond SQL:2003
    pub fn sql_keywords(&self) -> Result<String> {
        self.check_closed()?;
        Ok(SQL_KEYWORDS.to_string())
    }
}

/// Reject an absent required identifier
fn required<'v>(value: Option<&'v str>, name: &'static str) -> Result<&'v str> {
    value.ok_or(MetadataError::MissingArgument { name })
}

fn clamp_to_i32(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}

fn clamp_to_i16(value: i32) -> i16 {
    i16::try_from(value).unwrap_or(if value < 0 { i16::MIN } else { i16::MAX })
}

/// 1-based position as a SMALLINT cell value
fn ordinal(index: usize) -> i16 {
    i16::try_from(index + 1).unwrap_or(i16::MAX)
}

fn yes_no(flag: bool) -> SqlValue {
    SqlValue::varchar(if flag { crate::constants::YES } else { crate::constants::NO })
}
