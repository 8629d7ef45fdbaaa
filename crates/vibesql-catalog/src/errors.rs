/// Errors returned by catalog operations.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    TableAlreadyExists(String),
    TableNotFound {
        table_name: String,
    },
    ColumnNotFound {
        column_name: String,
        table_name: String,
    },
    SchemaAlreadyExists(String),
    SchemaNotFound(String),
    SchemaNotEmpty(String),
    SynonymNotFound(String),
    ConstraintAlreadyExists(String),
    ConstraintNotFound(String),
    ForeignKeyColumnMismatch {
        constraint_name: String,
        columns: usize,
        parent_columns: usize,
    },
    /// The referenced columns are not a primary key or UNIQUE constraint
    ReferencedKeyNotFound {
        constraint_name: String,
        table_name: String,
    },
    IndexAlreadyExists {
        index_name: String,
        table_name: String,
    },
    IndexNotFound {
        index_name: String,
        table_name: String,
    },
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::TableAlreadyExists(name) => {
                write!(f, "Table '{}' already exists", name)
            }
            CatalogError::TableNotFound { table_name } => {
                write!(f, "Table '{}' not found", table_name)
            }
            CatalogError::ColumnNotFound { column_name, table_name } => {
                write!(f, "Column '{}' not found in table '{}'", column_name, table_name)
            }
            CatalogError::SchemaAlreadyExists(name) => {
                write!(f, "Schema '{}' already exists", name)
            }
            CatalogError::SchemaNotFound(name) => write!(f, "Schema '{}' not found", name),
            CatalogError::SchemaNotEmpty(name) => {
                write!(f, "Schema '{}' is not empty", name)
            }
            CatalogError::SynonymNotFound(name) => write!(f, "Synonym '{}' not found", name),
            CatalogError::ConstraintAlreadyExists(name) => {
                write!(f, "Constraint '{}' already exists", name)
            }
            CatalogError::ConstraintNotFound(name) => {
                write!(f, "Constraint '{}' not found", name)
            }
            CatalogError::ForeignKeyColumnMismatch { constraint_name, columns, parent_columns } => {
                write!(
                    f,
                    "Foreign key '{}' has {} column(s) but references {} column(s)",
                    constraint_name, columns, parent_columns
                )
            }
            CatalogError::ReferencedKeyNotFound { constraint_name, table_name } => {
                write!(
                    f,
                    "Foreign key '{}' references no primary or unique key of table '{}'",
                    constraint_name, table_name
                )
            }
            CatalogError::IndexAlreadyExists { index_name, table_name } => {
                write!(f, "Index '{}' on table '{}' already exists", index_name, table_name)
            }
            CatalogError::IndexNotFound { index_name, table_name } => {
                write!(f, "Index '{}' on table '{}' not found", index_name, table_name)
            }
        }
    }
}

impl std::error::Error for CatalogError {}
