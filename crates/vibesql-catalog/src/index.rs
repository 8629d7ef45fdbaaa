//! Index metadata definitions for catalog management
//!
//! This module provides the structures for tracking index metadata
//! in the database catalog, independent of the physical index storage.

/// Index metadata stored in the catalog
#[derive(Debug, Clone, PartialEq)]
pub struct IndexMetadata {
    /// Name of the index
    pub name: String,
    /// Name of the table this index belongs to
    pub table_name: String,
    /// Type of index
    pub index_type: IndexType,
    /// Columns included in the index
    pub columns: Vec<IndexedColumn>,
    /// Whether this index enforces uniqueness
    pub is_unique: bool,
    /// Synthesized by the engine (e.g. the scan index of a table) rather
    /// than created by a statement; such indexes have no definition to report
    pub system_generated: bool,
    pub statistics: IndexStatistics,
}

/// Type of physical index structure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexType {
    /// B-tree index for general-purpose indexing
    BTree,
    /// Hash index for equality lookups
    Hash,
}

impl IndexType {
    pub fn is_hash(&self) -> bool {
        matches!(self, IndexType::Hash)
    }
}

/// Column entry within an index
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedColumn {
    /// Column name
    pub column_name: String,
    /// Sort order for ordered indexes
    pub order: SortOrder,
}

impl IndexedColumn {
    pub fn ascending(column_name: impl Into<String>) -> Self {
        IndexedColumn { column_name: column_name.into(), order: SortOrder::Ascending }
    }

    pub fn descending(column_name: impl Into<String>) -> Self {
        IndexedColumn { column_name: column_name.into(), order: SortOrder::Descending }
    }
}

/// Sort order for indexed columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Size statistics maintained by the storage layer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexStatistics {
    /// Exact number of rows
    pub row_count: u64,
    /// Cheap estimate of the number of rows
    pub row_count_approximation: u64,
    /// Bytes of disk space used by the index
    pub disk_space_used: u64,
}

impl IndexMetadata {
    /// Create a new index metadata entry
    pub fn new(
        name: String,
        table_name: String,
        index_type: IndexType,
        columns: Vec<IndexedColumn>,
        is_unique: bool,
    ) -> Self {
        Self {
            name,
            table_name,
            index_type,
            columns,
            is_unique,
            system_generated: false,
            statistics: IndexStatistics::default(),
        }
    }

    pub fn with_statistics(mut self, statistics: IndexStatistics) -> Self {
        self.statistics = statistics;
        self
    }

    pub fn system_generated(mut self) -> Self {
        self.system_generated = true;
        self
    }

    /// Whether the index was created by a statement (and so has a definition)
    pub fn is_materialized(&self) -> bool {
        !self.system_generated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_generated_indexes_are_not_materialized() {
        let index = IndexMetadata::new(
            "scan".to_string(),
            "users".to_string(),
            IndexType::BTree,
            vec![],
            false,
        );
        assert!(index.is_materialized());
        assert!(!index.system_generated().is_materialized());
    }

    #[test]
    fn test_statistics_default_to_zero() {
        let index = IndexMetadata::new(
            "idx_hash".to_string(),
            "users".to_string(),
            IndexType::Hash,
            vec![IndexedColumn::descending("id")],
            true,
        );
        assert!(index.index_type.is_hash());
        assert_eq!(index.statistics, IndexStatistics::default());
        assert_eq!(index.columns[0].order, SortOrder::Descending);
    }
}
