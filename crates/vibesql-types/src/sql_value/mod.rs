//! SQL Value runtime representation

mod comparison;
mod display;

use crate::DataType;

/// SQL Values - cells of a metadata result table
///
/// Represents actual values in SQL, including NULL.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Integer(i32),
    Smallint(i16),
    Bigint(i64),
    Unsigned(u64),
    Numeric(f64),

    Real(f32),
    Double(f64),

    Character(String),
    Varchar(String),

    Boolean(bool),

    Null,
}

impl SqlValue {
    /// VARCHAR cell from anything string-like
    pub fn varchar(value: impl Into<String>) -> Self {
        SqlValue::Varchar(value.into())
    }

    /// VARCHAR cell, or NULL when absent
    pub fn nullable_varchar<S: Into<String>>(value: Option<S>) -> Self {
        value.map_or(SqlValue::Null, |v| SqlValue::Varchar(v.into()))
    }

    /// Check if this value is NULL
    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }

    /// Borrow the text of a string value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SqlValue::Character(s) | SqlValue::Varchar(s) => Some(s),
            _ => None,
        }
    }

    /// Widen any integer value to i64
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            SqlValue::Integer(i) => Some(i64::from(*i)),
            SqlValue::Smallint(i) => Some(i64::from(*i)),
            SqlValue::Bigint(i) => Some(*i),
            SqlValue::Unsigned(u) => i64::try_from(*u).ok(),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SqlValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the type name as a string (for error messages)
    pub fn type_name(&self) -> &'static str {
        match self {
            SqlValue::Integer(_) => "INTEGER",
            SqlValue::Smallint(_) => "SMALLINT",
            SqlValue::Bigint(_) => "BIGINT",
            SqlValue::Unsigned(_) => "UNSIGNED",
            SqlValue::Numeric(_) => "NUMERIC",
            SqlValue::Real(_) => "REAL",
            SqlValue::Double(_) => "DOUBLE PRECISION",
            SqlValue::Character(_) => "CHAR",
            SqlValue::Varchar(_) => "VARCHAR",
            SqlValue::Boolean(_) => "BOOLEAN",
            SqlValue::Null => "NULL",
        }
    }

    /// Get the data type of this value
    pub fn get_type(&self) -> DataType {
        match self {
            SqlValue::Integer(_) => DataType::Integer,
            SqlValue::Smallint(_) => DataType::Smallint,
            SqlValue::Bigint(_) => DataType::Bigint,
            SqlValue::Unsigned(_) => DataType::Unsigned,
            SqlValue::Numeric(_) => DataType::Numeric { precision: 38, scale: 0 },
            SqlValue::Real(_) => DataType::Real,
            SqlValue::Double(_) => DataType::DoublePrecision,
            SqlValue::Character(s) => DataType::Character { length: s.chars().count() },
            SqlValue::Varchar(_) => DataType::Varchar { max_length: None },
            SqlValue::Boolean(_) => DataType::Boolean,
            SqlValue::Null => DataType::Null,
        }
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Varchar(value.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Varchar(value)
    }
}

impl From<i32> for SqlValue {
    fn from(value: i32) -> Self {
        SqlValue::Integer(value)
    }
}

impl From<i16> for SqlValue {
    fn from(value: i16) -> Self {
        SqlValue::Smallint(value)
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::Bigint(value)
    }
}

impl From<bool> for SqlValue {
    fn from(value: bool) -> Self {
        SqlValue::Boolean(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nullable_varchar() {
        assert_eq!(SqlValue::nullable_varchar(Some("x")), SqlValue::varchar("x"));
        assert_eq!(SqlValue::nullable_varchar::<&str>(None), SqlValue::Null);
    }

    #[test]
    fn test_accessors() {
        assert_eq!(SqlValue::Smallint(7).as_i64(), Some(7));
        assert_eq!(SqlValue::Unsigned(u64::MAX).as_i64(), None);
        assert_eq!(SqlValue::from("T").as_str(), Some("T"));
        assert_eq!(SqlValue::Integer(1).as_str(), None);
        assert_eq!(SqlValue::from(true).as_bool(), Some(true));
    }

    #[test]
    fn test_get_type() {
        assert_eq!(SqlValue::Integer(1).get_type(), DataType::Integer);
        assert_eq!(SqlValue::Character("ab".into()).get_type(), DataType::Character { length: 2 });
        assert_eq!(SqlValue::Null.type_name(), "NULL");
    }
}
