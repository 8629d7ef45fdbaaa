//! In-memory result table
//!
//! Every metadata view answers with a [`ResultTable`]: an ordered list of
//! named, typed columns and an ordered list of rows.

use std::cmp::Ordering;

use vibesql_types::{DataType, SqlValue};

use crate::comparator::IdentifierComparator;

/// Column types used by the metadata views
pub mod column_type {
    use vibesql_types::DataType;

    pub const VARCHAR: DataType = DataType::Varchar { max_length: None };
    pub const INTEGER: DataType = DataType::Integer;
    pub const SMALLINT: DataType = DataType::Smallint;
    pub const BIGINT: DataType = DataType::Bigint;
    pub const BOOLEAN: DataType = DataType::Boolean;
}

/// Name and type of a result column
#[derive(Debug, Clone, PartialEq)]
pub struct ResultColumn {
    pub name: String,
    pub data_type: DataType,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultTable {
    columns: Vec<ResultColumn>,
    rows: Vec<Vec<SqlValue>>,
}

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty table with the given column shape
    pub fn with_columns<'n>(columns: impl IntoIterator<Item = (&'n str, DataType)>) -> Self {
        let mut table = ResultTable::new();
        for (name, data_type) in columns {
            table.add_column(name, data_type);
        }
        table
    }

    pub fn add_column(&mut self, name: impl Into<String>, data_type: DataType) {
        self.columns.push(ResultColumn { name: name.into(), data_type });
    }

    pub fn add_row(&mut self, row: Vec<SqlValue>) {
        debug_assert_eq!(row.len(), self.columns.len(), "row arity must match the column count");
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[ResultColumn] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn rows(&self) -> &[Vec<SqlValue>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of the column called `name`
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Cell at `row` in the column called `name`
    pub fn value(&self, row: usize, name: &str) -> Option<&SqlValue> {
        let column = self.column_index(name)?;
        self.rows.get(row).and_then(|r| r.get(column))
    }

    /// Stable sort on the given column positions, ascending.
    ///
    /// String cells compare with `comparator`; everything else by value with
    /// NULLs first.
    pub fn sort_rows(&mut self, keys: &[usize], comparator: &IdentifierComparator) {
        self.rows.sort_by(|a, b| {
            keys.iter()
                .map(|&key| compare_cells(&a[key], &b[key], comparator))
                .find(|ordering| *ordering != Ordering::Equal)
                .unwrap_or(Ordering::Equal)
        });
    }

    pub fn into_rows(self) -> Vec<Vec<SqlValue>> {
        self.rows
    }
}

fn compare_cells(a: &SqlValue, b: &SqlValue, comparator: &IdentifierComparator) -> Ordering {
    match (a.as_str(), b.as_str()) {
        (Some(a), Some(b)) => comparator.compare(a, b),
        _ => a.total_cmp(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparator::Collation;

    fn table() -> ResultTable {
        let mut table = ResultTable::with_columns([
            ("NAME", column_type::VARCHAR),
            ("SEQ", column_type::SMALLINT),
        ]);
        table.add_row(vec![SqlValue::varchar("b"), SqlValue::Smallint(2)]);
        table.add_row(vec![SqlValue::varchar("a"), SqlValue::Smallint(2)]);
        table.add_row(vec![SqlValue::varchar("B"), SqlValue::Smallint(1)]);
        table.add_row(vec![SqlValue::Null, SqlValue::Smallint(3)]);
        table
    }

    fn names(table: &ResultTable) -> Vec<String> {
        table.rows().iter().map(|r| r[0].to_string()).collect()
    }

    #[test]
    fn test_shape() {
        let table = table();
        assert_eq!(table.column_names(), vec!["NAME", "SEQ"]);
        assert_eq!(table.row_count(), 4);
        assert_eq!(table.column_index("SEQ"), Some(1));
        assert_eq!(table.value(2, "NAME"), Some(&SqlValue::varchar("B")));
        assert_eq!(table.value(9, "NAME"), None);
    }

    #[test]
    fn test_sort_binary() {
        let mut table = table();
        table.sort_rows(&[0], &IdentifierComparator::new(Collation::Binary));
        assert_eq!(names(&table), vec!["NULL", "B", "a", "b"]);
    }

    #[test]
    fn test_sort_case_insensitive() {
        let mut table = table();
        table.sort_rows(&[0], &IdentifierComparator::new(Collation::CaseInsensitive));
        assert_eq!(names(&table), vec!["NULL", "a", "B", "b"]);
    }

    #[test]
    fn test_sort_is_stable_on_equal_keys() {
        let mut table = table();
        table.sort_rows(&[1], &IdentifierComparator::default());
        // "b" and "a" share SEQ = 2 and keep their insertion order
        assert_eq!(names(&table), vec!["B", "b", "a", "NULL"]);
    }

    #[test]
    fn test_multi_key_sort() {
        let mut table = table();
        table.sort_rows(&[1, 0], &IdentifierComparator::default());
        assert_eq!(names(&table), vec!["B", "a", "b", "NULL"]);
    }
}
