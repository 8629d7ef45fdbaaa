use vibesql_types::DataType;

/// Column definition in a table schema.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSchema {
    pub name: String,
    pub data_type: DataType,
    pub nullable: bool,
    pub auto_increment: bool,
    /// Generated (computed) column; its expression lives in `default_sql`
    pub generated: bool,
    /// SQL text of the default or generation expression
    pub default_sql: Option<String>,
    pub comment: Option<String>,
}

impl ColumnSchema {
    pub fn new(name: String, data_type: DataType, nullable: bool) -> Self {
        ColumnSchema {
            name,
            data_type,
            nullable,
            auto_increment: false,
            generated: false,
            default_sql: None,
            comment: None,
        }
    }

    /// Set the nullable property
    pub fn set_nullable(&mut self, nullable: bool) {
        self.nullable = nullable;
    }

    /// Set the default value
    pub fn set_default(&mut self, default_sql: impl Into<String>) {
        self.default_sql = Some(default_sql.into());
        self.generated = false;
    }

    /// Turn the column into a generated column computed from `expression`
    pub fn set_generated(&mut self, expression: impl Into<String>) {
        self.default_sql = Some(expression.into());
        self.generated = true;
    }

    /// Drop the default value
    pub fn drop_default(&mut self) {
        self.default_sql = None;
        self.generated = false;
    }

    pub fn with_auto_increment(mut self) -> Self {
        self.auto_increment = true;
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}
