use crate::{
    column::ColumnSchema,
    constraint::{PrimaryKey, UniqueConstraint},
    foreign_key::ForeignKeyConstraint,
    index::IndexMetadata,
};

/// Kind of a table as reported by SQL table-type listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableKind {
    #[default]
    BaseTable,
    GlobalTemporary,
    LocalTemporary,
    View,
}

impl TableKind {
    /// SQL-standard table type name
    pub fn sql_table_type(&self) -> &'static str {
        match self {
            TableKind::BaseTable => "BASE TABLE",
            TableKind::GlobalTemporary => "GLOBAL TEMPORARY",
            TableKind::LocalTemporary => "LOCAL TEMPORARY",
            TableKind::View => "VIEW",
        }
    }
}

/// Table schema definition.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSchema {
    pub name: String,
    pub kind: TableKind,
    /// Hidden tables are internal and never listed
    pub hidden: bool,
    pub comment: Option<String>,
    pub columns: Vec<ColumnSchema>,
    pub primary_key: Option<PrimaryKey>,
    pub unique_constraints: Vec<UniqueConstraint>,
    /// Foreign keys declared on this table (this table is the child)
    pub foreign_keys: Vec<ForeignKeyConstraint>,
    pub indexes: Vec<IndexMetadata>,
}

impl TableSchema {
    pub fn new(name: String, columns: Vec<ColumnSchema>) -> Self {
        TableSchema {
            name,
            kind: TableKind::BaseTable,
            hidden: false,
            comment: None,
            columns,
            primary_key: None,
            unique_constraints: Vec::new(),
            foreign_keys: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Create a table schema with a primary key named `PK_<table>`
    pub fn with_primary_key(name: String, columns: Vec<ColumnSchema>, primary_key: Vec<String>) -> Self {
        let mut schema = TableSchema::new(name, columns);
        let pk_name = format!("PK_{}", schema.name);
        schema.set_primary_key(PrimaryKey::new(pk_name, primary_key));
        schema
    }

    pub fn with_kind(mut self, kind: TableKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Install the primary key. Key columns become NOT NULL.
    pub fn set_primary_key(&mut self, primary_key: PrimaryKey) {
        for key_column in &primary_key.columns {
            if let Some(column) = self.columns.iter_mut().find(|c| &c.name == key_column) {
                column.set_nullable(false);
            }
        }
        self.primary_key = Some(primary_key);
    }

    /// Get column by name.
    pub fn get_column(&self, name: &str) -> Option<&ColumnSchema> {
        self.columns.iter().find(|col| col.name == name)
    }

    /// Get column by name, folding case unless `case_sensitive`.
    pub fn find_column(&self, name: &str, case_sensitive: bool) -> Option<&ColumnSchema> {
        if case_sensitive {
            self.get_column(name)
        } else {
            let folded = name.to_uppercase();
            self.columns.iter().find(|col| col.name.to_uppercase() == folded)
        }
    }

    /// Name of the PRIMARY KEY or UNIQUE constraint over the column set
    /// `columns`, in any order. The primary key is preferred.
    pub fn key_constraint_for(&self, columns: &[String]) -> Option<&str> {
        let covers = |key: &[String]| key.len() == columns.len() && key.iter().all(|c| columns.contains(c));
        if let Some(pk) = &self.primary_key {
            if covers(&pk.columns) {
                return Some(&pk.name);
            }
        }
        self.unique_constraints.iter().find(|uc| covers(&uc.columns)).map(|uc| uc.name.as_str())
    }

    pub fn get_index(&self, name: &str) -> Option<&IndexMetadata> {
        self.indexes.iter().find(|index| index.name == name)
    }
}
