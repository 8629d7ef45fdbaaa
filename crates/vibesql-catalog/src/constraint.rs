//! Key constraints (PRIMARY KEY, UNIQUE)

/// Primary key constraint. Column order is the key order.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimaryKey {
    pub name: String,
    pub columns: Vec<String>,
}

impl PrimaryKey {
    pub fn new(name: impl Into<String>, columns: Vec<String>) -> Self {
        PrimaryKey { name: name.into(), columns }
    }
}

/// UNIQUE constraint.
#[derive(Debug, Clone, PartialEq)]
pub struct UniqueConstraint {
    pub name: String,
    pub columns: Vec<String>,
}

impl UniqueConstraint {
    pub fn new(name: impl Into<String>, columns: Vec<String>) -> Self {
        UniqueConstraint { name: name.into(), columns }
    }
}
