//! Read-only access to the catalog model
//!
//! The metadata views only ever read the catalog. They reach it through
//! [`CatalogAccessor`] so any catalog representation can back them; the
//! in-memory [`Catalog`] implements it directly.

use log::warn;
use vibesql_catalog::{Catalog, Schema, TableSchema, TableSynonym};

use crate::pattern::LikePattern;

/// A table or a synonym as listed by a schema.
///
/// A synonym carries its resolved target but is reported under its own name.
#[derive(Debug, Clone, Copy)]
pub enum SchemaEntry<'a> {
    Table(&'a TableSchema),
    Synonym { synonym: &'a TableSynonym, target: &'a TableSchema },
}

impl<'a> SchemaEntry<'a> {
    /// Name the entry is listed under
    pub fn name(&self) -> &'a str {
        match self {
            SchemaEntry::Table(table) => &table.name,
            SchemaEntry::Synonym { synonym, .. } => &synonym.name,
        }
    }

    /// The table whose definition is reported
    pub fn table(&self) -> &'a TableSchema {
        match self {
            SchemaEntry::Table(table) => table,
            SchemaEntry::Synonym { target, .. } => target,
        }
    }

    pub fn is_synonym(&self) -> bool {
        matches!(self, SchemaEntry::Synonym { .. })
    }
}

/// Read-only enumeration over a catalog.
pub trait CatalogAccessor {
    /// Name of the singleton catalog
    fn catalog_name(&self) -> &str;

    /// The schema an empty schema filter refers to
    fn main_schema(&self) -> Option<&Schema>;

    /// Every schema, in no particular order
    fn all_schemas(&self) -> Vec<&Schema>;

    /// Look a schema up by exact (identifier-equal) name
    fn find_schema(&self, name: &str) -> Option<&Schema>;

    /// Compare identifiers under the catalog's case rules
    fn equals_identifiers(&self, a: &str, b: &str) -> bool;

    fn case_sensitive(&self) -> bool;

    /// Collation name configured for identifier ordering, if any
    fn identifier_collation(&self) -> Option<&str>;

    /// Target of a synonym, with the schema that owns it
    fn resolve_synonym(&self, synonym: &TableSynonym) -> Option<(&Schema, &TableSchema)>;

    /// True for an absent or empty name, or one naming this catalog
    fn matches_catalog(&self, name: Option<&str>) -> bool {
        match name {
            None | Some("") => true,
            Some(name) => self.equals_identifiers(name, self.catalog_name()),
        }
    }

    /// `None` gives all schemas, `""` the main schema, anything else the named
    /// schema if it exists.
    fn schemas_by_name(&self, name: Option<&str>) -> Vec<&Schema> {
        match name {
            None => self.all_schemas(),
            Some("") => self.main_schema().into_iter().collect(),
            Some(name) => self.find_schema(name).into_iter().collect(),
        }
    }

    /// `None` gives all schemas, an empty pattern the main schema, anything
    /// else the schemas whose name matches.
    fn schemas_matching(&self, pattern: Option<&LikePattern>) -> Vec<&Schema> {
        match pattern {
            None => self.all_schemas(),
            Some(pattern) if pattern.as_str().is_empty() => self.main_schema().into_iter().collect(),
            Some(pattern) => {
                self.all_schemas().into_iter().filter(|schema| pattern.matches(&schema.name)).collect()
            }
        }
    }

    /// Tables then synonyms of `schema` whose name matches `pattern`.
    ///
    /// Hidden tables are included; callers decide whether to report them.
    /// Synonyms whose target no longer exists are skipped.
    fn tables_and_synonyms<'a>(
        &'a self,
        schema: &'a Schema,
        pattern: Option<&LikePattern>,
    ) -> Vec<SchemaEntry<'a>> {
        let name_matches = |name: &str| pattern.map_or(true, |p| p.matches(name));

        let mut entries: Vec<SchemaEntry<'a>> =
            schema.tables().filter(|t| name_matches(&t.name)).map(SchemaEntry::Table).collect();

        for synonym in schema.synonyms().filter(|s| name_matches(&s.name)) {
            match self.resolve_synonym(synonym) {
                Some((_, target)) => entries.push(SchemaEntry::Synonym { synonym, target }),
                None => warn!(
                    "synonym {}.{} refers to missing table {}.{}",
                    schema.name, synonym.name, synonym.target_schema, synonym.target_table
                ),
            }
        }
        entries
    }

    /// Find a table by exact name in `schema`, resolving synonyms.
    /// Returns the schema that owns the table together with the table.
    fn find_table<'a>(&'a self, schema: &'a Schema, name: &str) -> Option<(&'a Schema, &'a TableSchema)> {
        if let Some(table) = schema.get_table(name, self.case_sensitive()) {
            return Some((schema, table));
        }
        let synonym = schema.get_synonym(name, self.case_sensitive())?;
        let resolved = self.resolve_synonym(synonym);
        if resolved.is_none() {
            warn!(
                "synonym {}.{} refers to missing table {}.{}",
                schema.name, synonym.name, synonym.target_schema, synonym.target_table
            );
        }
        resolved
    }

    /// Find a table by schema name and table name
    fn find_table_in(&self, schema_name: &str, table_name: &str) -> Option<(&Schema, &TableSchema)> {
        let schema = self.find_schema(schema_name)?;
        self.find_table(schema, table_name)
    }
}

impl CatalogAccessor for Catalog {
    fn catalog_name(&self) -> &str {
        self.name()
    }

    fn main_schema(&self) -> Option<&Schema> {
        Catalog::main_schema(self)
    }

    fn all_schemas(&self) -> Vec<&Schema> {
        self.schemas().collect()
    }

    fn find_schema(&self, name: &str) -> Option<&Schema> {
        self.get_schema(name)
    }

    fn equals_identifiers(&self, a: &str, b: &str) -> bool {
        Catalog::equals_identifiers(self, a, b)
    }

    fn case_sensitive(&self) -> bool {
        self.is_case_sensitive_identifiers()
    }

    fn identifier_collation(&self) -> Option<&str> {
        self.collation()
    }

    fn resolve_synonym(&self, synonym: &TableSynonym) -> Option<(&Schema, &TableSchema)> {
        Catalog::resolve_synonym(self, synonym)
    }
}
