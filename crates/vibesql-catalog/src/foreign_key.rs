/// Foreign key constraint definition.
///
/// Stored on the referencing (child) table. `column_names[i]` references
/// `parent_column_names[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ForeignKeyConstraint {
    pub name: String,
    pub column_names: Vec<String>,
    /// Schema of the referenced table; `None` means the child's own schema
    pub parent_schema: Option<String>,
    pub parent_table: String,
    pub parent_column_names: Vec<String>,
    /// PRIMARY KEY or UNIQUE constraint of the parent this key references;
    /// resolved by `Catalog::add_foreign_key`
    pub referenced_constraint: Option<String>,
    pub on_delete: ReferentialAction,
    pub on_update: ReferentialAction,
}

impl ForeignKeyConstraint {
    pub fn new(
        name: impl Into<String>,
        column_names: Vec<String>,
        parent_table: impl Into<String>,
        parent_column_names: Vec<String>,
    ) -> Self {
        ForeignKeyConstraint {
            name: name.into(),
            column_names,
            parent_schema: None,
            parent_table: parent_table.into(),
            parent_column_names,
            referenced_constraint: None,
            on_delete: ReferentialAction::default(),
            on_update: ReferentialAction::default(),
        }
    }

    pub fn in_schema(mut self, parent_schema: impl Into<String>) -> Self {
        self.parent_schema = Some(parent_schema.into());
        self
    }

    pub fn on_delete(mut self, action: ReferentialAction) -> Self {
        self.on_delete = action;
        self
    }

    pub fn on_update(mut self, action: ReferentialAction) -> Self {
        self.on_update = action;
        self
    }

    /// Column pairs in key order: (child column, parent column)
    pub fn column_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.column_names
            .iter()
            .zip(self.parent_column_names.iter())
            .map(|(child, parent)| (child.as_str(), parent.as_str()))
    }
}

/// Referential action for foreign key constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReferentialAction {
    NoAction,
    #[default]
    Restrict,
    Cascade,
    SetNull,
    SetDefault,
}

impl std::fmt::Display for ReferentialAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ReferentialAction::NoAction => "NO ACTION",
            ReferentialAction::Restrict => "RESTRICT",
            ReferentialAction::Cascade => "CASCADE",
            ReferentialAction::SetNull => "SET NULL",
            ReferentialAction::SetDefault => "SET DEFAULT",
        };
        f.write_str(name)
    }
}
