//! SQL Data Type definitions

use std::fmt;

use crate::type_descriptor::{self as descriptors, TypeDescriptor, MAX_LOB_LENGTH, MAX_STRING_LENGTH};

/// Leading/trailing field of an INTERVAL type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalField {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl fmt::Display for IntervalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IntervalField::Year => "YEAR",
            IntervalField::Month => "MONTH",
            IntervalField::Day => "DAY",
            IntervalField::Hour => "HOUR",
            IntervalField::Minute => "MINUTE",
            IntervalField::Second => "SECOND",
        };
        f.write_str(name)
    }
}

/// SQL:1999 Data Types
///
/// Represents the semantic type of a column: the logical type together with
/// its declared precision and scale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataType {
    // Exact numeric types
    Integer,
    Smallint,
    Bigint,
    Unsigned, // 64-bit unsigned integer (MySQL compatibility)
    Numeric { precision: u8, scale: u8 },
    Decimal { precision: u8, scale: u8 },

    // Approximate numeric types
    Float { precision: u8 }, // SQL:1999 FLOAT(p), default 53 (double precision)
    Real,
    DoublePrecision,

    // Character string types
    Character { length: usize },
    Varchar { max_length: Option<usize> }, // None = unbounded
    CharacterLargeObject,                  // CLOB
    Name,                                  // SQL identifier type, maps to VARCHAR(128)

    Boolean,

    // Date/time types
    Date,
    Time { with_timezone: bool },
    Timestamp { with_timezone: bool },

    // Single field: INTERVAL YEAR (end_field is None)
    // Multi-field: INTERVAL DAY TO SECOND
    Interval { start_field: IntervalField, end_field: Option<IntervalField> },

    // Binary types
    BinaryLargeObject,             // BLOB
    Bit { length: Option<usize> }, // BIT or BIT(n), default length is 1

    UserDefined { type_name: String },

    // Type of the NULL literal
    Null,
}

impl DataType {
    /// The type descriptor this type is reported under.
    pub fn descriptor(&self) -> &'static TypeDescriptor {
        match self {
            DataType::Integer => &descriptors::INTEGER,
            DataType::Smallint => &descriptors::SMALLINT,
            DataType::Bigint => &descriptors::BIGINT,
            DataType::Unsigned => &descriptors::BIGINT_UNSIGNED,
            DataType::Numeric { .. } => &descriptors::NUMERIC,
            DataType::Decimal { .. } => &descriptors::DECIMAL,
            DataType::Float { .. } => &descriptors::FLOAT,
            DataType::Real => &descriptors::REAL,
            DataType::DoublePrecision => &descriptors::DOUBLE_PRECISION,
            DataType::Character { .. } => &descriptors::CHARACTER,
            DataType::Varchar { .. } | DataType::Name => &descriptors::CHARACTER_VARYING,
            DataType::CharacterLargeObject => &descriptors::CHARACTER_LARGE_OBJECT,
            DataType::Boolean => &descriptors::BOOLEAN,
            DataType::Date => &descriptors::DATE,
            DataType::Time { with_timezone: false } => &descriptors::TIME,
            DataType::Time { with_timezone: true } => &descriptors::TIME_WITH_TIME_ZONE,
            DataType::Timestamp { with_timezone: false } => &descriptors::TIMESTAMP,
            DataType::Timestamp { with_timezone: true } => &descriptors::TIMESTAMP_WITH_TIME_ZONE,
            DataType::Interval { .. } => &descriptors::INTERVAL,
            DataType::BinaryLargeObject => &descriptors::BINARY_LARGE_OBJECT,
            DataType::Bit { .. } => &descriptors::BIT,
            DataType::UserDefined { .. } => &descriptors::OTHER,
            DataType::Null => &descriptors::NULL,
        }
    }

    /// Declared precision: maximum digits for numeric types, maximum length in
    /// characters (or bytes) for string types, display width for temporal types.
    pub fn precision(&self) -> i64 {
        match self {
            DataType::Smallint => 5,
            DataType::Integer => 10,
            DataType::Bigint => 19,
            DataType::Unsigned => 20,
            DataType::Numeric { precision, .. } | DataType::Decimal { precision, .. } => {
                i64::from(*precision)
            }
            DataType::Float { precision } => i64::from(*precision),
            DataType::Real => 7,
            DataType::DoublePrecision => 17,
            DataType::Character { length } => *length as i64,
            DataType::Varchar { max_length } => {
                max_length.map(|len| len as i64).unwrap_or(MAX_STRING_LENGTH)
            }
            DataType::Name => 128,
            DataType::CharacterLargeObject | DataType::BinaryLargeObject => MAX_LOB_LENGTH,
            DataType::Boolean => 1,
            DataType::Date => 10,
            DataType::Time { with_timezone } => {
                if *with_timezone {
                    14
                } else {
                    8
                }
            }
            DataType::Timestamp { with_timezone } => {
                if *with_timezone {
                    32
                } else {
                    26
                }
            }
            DataType::Interval { .. } => 18,
            DataType::Bit { length } => length.unwrap_or(1) as i64,
            DataType::UserDefined { .. } => MAX_STRING_LENGTH,
            DataType::Null => 1,
        }
    }

    /// Declared scale. Zero for every type without a fractional part.
    pub fn scale(&self) -> i32 {
        match self {
            DataType::Numeric { scale, .. } | DataType::Decimal { scale, .. } => i32::from(*scale),
            // Microsecond resolution
            DataType::Timestamp { .. } => 6,
            _ => 0,
        }
    }

    /// Whether values of this type are numbers (NUM_PREC_RADIX is reported for them).
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            DataType::Integer
                | DataType::Smallint
                | DataType::Bigint
                | DataType::Unsigned
                | DataType::Numeric { .. }
                | DataType::Decimal { .. }
                | DataType::Float { .. }
                | DataType::Real
                | DataType::DoublePrecision
        )
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::Numeric { precision, scale } => write!(f, "NUMERIC({}, {})", precision, scale),
            DataType::Decimal { precision, scale } => write!(f, "DECIMAL({}, {})", precision, scale),
            DataType::Float { precision } => write!(f, "FLOAT({})", precision),
            DataType::Character { length } => write!(f, "CHARACTER({})", length),
            DataType::Varchar { max_length: Some(len) } => write!(f, "CHARACTER VARYING({})", len),
            DataType::Bit { length: Some(len) } => write!(f, "BIT({})", len),
            DataType::Interval { start_field, end_field: Some(end) } => {
                write!(f, "INTERVAL {} TO {}", start_field, end)
            }
            DataType::Interval { start_field, end_field: None } => {
                write!(f, "INTERVAL {}", start_field)
            }
            DataType::Name => f.write_str("NAME"),
            DataType::UserDefined { type_name } => f.write_str(type_name),
            other => f.write_str(other.descriptor().name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_mapping_follows_timezone_flag() {
        assert_eq!(DataType::Time { with_timezone: false }.descriptor().name, "TIME");
        assert_eq!(
            DataType::Timestamp { with_timezone: true }.descriptor().name,
            "TIMESTAMP WITH TIME ZONE"
        );
        assert_eq!(DataType::Name.descriptor().name, "CHARACTER VARYING");
    }

    #[test]
    fn test_precision_and_scale() {
        let numeric = DataType::Numeric { precision: 12, scale: 3 };
        assert_eq!(numeric.precision(), 12);
        assert_eq!(numeric.scale(), 3);
        assert_eq!(DataType::Varchar { max_length: Some(40) }.precision(), 40);
        assert_eq!(DataType::Varchar { max_length: None }.precision(), MAX_STRING_LENGTH);
        assert_eq!(DataType::Integer.scale(), 0);
    }

    #[test]
    fn test_numeric_classification() {
        assert!(DataType::Integer.is_numeric());
        assert!(DataType::DoublePrecision.is_numeric());
        assert!(!DataType::Boolean.is_numeric());
        assert!(!DataType::Varchar { max_length: None }.is_numeric());
    }

    #[test]
    fn test_display() {
        assert_eq!(DataType::Integer.to_string(), "INTEGER");
        assert_eq!(DataType::Varchar { max_length: Some(10) }.to_string(), "CHARACTER VARYING(10)");
        assert_eq!(DataType::Decimal { precision: 10, scale: 2 }.to_string(), "DECIMAL(10, 2)");
        assert_eq!(
            DataType::Interval {
                start_field: IntervalField::Day,
                end_field: Some(IntervalField::Second)
            }
            .to_string(),
            "INTERVAL DAY TO SECOND"
        );
    }
}
