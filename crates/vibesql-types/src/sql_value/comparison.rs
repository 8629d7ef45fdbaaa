//! Comparison implementations for SqlValue

use std::cmp::Ordering;

use crate::sql_value::SqlValue;

/// PartialOrd implementation for SQL value comparison
///
/// - NULL comparisons return None (SQL UNKNOWN)
/// - Type mismatches return None
impl PartialOrd for SqlValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        use SqlValue::*;
        match (self, other) {
            (Null, _) | (_, Null) => None,

            (Integer(a), Integer(b)) => a.partial_cmp(b),
            (Smallint(a), Smallint(b)) => a.partial_cmp(b),
            (Bigint(a), Bigint(b)) => a.partial_cmp(b),
            (Unsigned(a), Unsigned(b)) => a.partial_cmp(b),

            // IEEE 754: NaN is incomparable
            (Real(a), Real(b)) => a.partial_cmp(b),
            (Double(a), Double(b)) | (Numeric(a), Numeric(b)) => a.partial_cmp(b),

            (Character(a), Character(b)) | (Varchar(a), Varchar(b)) => a.partial_cmp(b),

            // false < true
            (Boolean(a), Boolean(b)) => a.partial_cmp(b),

            _ => None,
        }
    }
}

impl SqlValue {
    /// Total ordering for sorting result rows.
    ///
    /// - NULL sorts before every other value (NULLS FIRST)
    /// - NaN sorts after every other float
    /// - Integer widths compare by value
    /// - Remaining type mismatches fall back to a fixed type-tag order
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        use SqlValue::*;

        match (self, other) {
            (Null, Null) => return Ordering::Equal,
            (Null, _) => return Ordering::Less,
            (_, Null) => return Ordering::Greater,
            _ => {}
        }

        if let Some(ordering) = self.partial_cmp(other) {
            return ordering;
        }

        if let (Some(a), Some(b)) = (self.as_i64(), other.as_i64()) {
            return a.cmp(&b);
        }

        match (self, other) {
            (Real(a), Real(b)) => a.total_cmp(b),
            (Double(a), Double(b)) | (Numeric(a), Numeric(b)) => a.total_cmp(b),
            _ => type_tag(self).cmp(&type_tag(other)),
        }
    }
}

fn type_tag(value: &SqlValue) -> u8 {
    match value {
        SqlValue::Null => 0,
        SqlValue::Integer(_) => 1,
        SqlValue::Smallint(_) => 2,
        SqlValue::Bigint(_) => 3,
        SqlValue::Unsigned(_) => 4,
        SqlValue::Numeric(_) => 5,
        SqlValue::Real(_) => 6,
        SqlValue::Double(_) => 7,
        SqlValue::Character(_) => 8,
        SqlValue::Varchar(_) => 9,
        SqlValue::Boolean(_) => 10,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_is_unknown_but_sorts_first() {
        assert_eq!(SqlValue::Null.partial_cmp(&SqlValue::Integer(1)), None);
        assert_eq!(SqlValue::Null.total_cmp(&SqlValue::Integer(1)), Ordering::Less);
        assert_eq!(SqlValue::Null.total_cmp(&SqlValue::Null), Ordering::Equal);
    }

    #[test]
    fn test_integer_widths_compare_by_value() {
        assert_eq!(SqlValue::Smallint(3).partial_cmp(&SqlValue::Integer(2)), None);
        assert_eq!(SqlValue::Smallint(3).total_cmp(&SqlValue::Integer(2)), Ordering::Greater);
        assert_eq!(SqlValue::Bigint(2).total_cmp(&SqlValue::Smallint(2)), Ordering::Equal);
    }

    #[test]
    fn test_strings_compare_lexicographically() {
        assert_eq!(
            SqlValue::varchar("A").partial_cmp(&SqlValue::varchar("B")),
            Some(Ordering::Less)
        );
    }

    #[test]
    fn test_nan_sorts_last() {
        let nan = SqlValue::Double(f64::NAN);
        assert_eq!(nan.partial_cmp(&SqlValue::Double(1.0)), None);
        assert_eq!(nan.total_cmp(&SqlValue::Double(1.0)), Ordering::Greater);
    }

    #[test]
    fn test_type_mismatch_uses_tag_order() {
        assert_eq!(SqlValue::Integer(9).total_cmp(&SqlValue::varchar("0")), Ordering::Less);
    }
}
