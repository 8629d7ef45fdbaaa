/// A named alias for a table, possibly in another schema.
///
/// Resolution happens at lookup time, so a synonym can outlive its target.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSynonym {
    pub name: String,
    pub target_schema: String,
    pub target_table: String,
}

impl TableSynonym {
    pub fn new(
        name: impl Into<String>,
        target_schema: impl Into<String>,
        target_table: impl Into<String>,
    ) -> Self {
        TableSynonym {
            name: name.into(),
            target_schema: target_schema.into(),
            target_table: target_table.into(),
        }
    }
}
