//! Static type descriptor table
//!
//! One descriptor per supported logical type, in declaration order. This is
//! the data behind the `getTypeInfo` view and behind the DATA_TYPE/TYPE_NAME
//! columns of every other view. The order is part of the reported contract,
//! so entries are never sorted.

/// Maximum length of a character or binary string.
pub const MAX_STRING_LENGTH: i64 = 1_000_000;

/// Maximum length of a large object.
pub const MAX_LOB_LENGTH: i64 = i64::MAX;

/// Standard SQL type codes (the `java.sql.Types` numbering used by
/// database-client metadata contracts).
pub mod sql_type {
    pub const BIT: i32 = -7;
    pub const BIGINT: i32 = -5;
    pub const NULL: i32 = 0;
    pub const CHAR: i32 = 1;
    pub const NUMERIC: i32 = 2;
    pub const DECIMAL: i32 = 3;
    pub const INTEGER: i32 = 4;
    pub const SMALLINT: i32 = 5;
    pub const FLOAT: i32 = 6;
    pub const REAL: i32 = 7;
    pub const DOUBLE: i32 = 8;
    pub const VARCHAR: i32 = 12;
    pub const BOOLEAN: i32 = 16;
    pub const DATE: i32 = 91;
    pub const TIME: i32 = 92;
    pub const TIMESTAMP: i32 = 93;
    pub const OTHER: i32 = 1111;
    pub const BLOB: i32 = 2004;
    pub const CLOB: i32 = 2005;
    pub const TIME_WITH_TIMEZONE: i32 = 2013;
    pub const TIMESTAMP_WITH_TIMEZONE: i32 = 2014;
}

/// Description of one supported SQL type.
#[derive(Debug, PartialEq, Eq)]
pub struct TypeDescriptor {
    pub name: &'static str,
    /// Standard type code, see [`sql_type`]
    pub sql_type: i32,
    pub max_precision: i64,
    pub min_scale: i32,
    pub max_scale: i32,
    /// Literal quoting, e.g. `DATE '` / `'`
    pub prefix: Option<&'static str>,
    pub suffix: Option<&'static str>,
    /// Parameters accepted in a type declaration, e.g. `PRECISION,SCALE`
    pub params: Option<&'static str>,
    pub case_sensitive: bool,
    /// Whether DECIMAL_DIGITS is meaningful for columns of this type
    pub supports_scale: bool,
    /// Whether the type has a decimal radix (NUM_PREC_RADIX = 10)
    pub decimal: bool,
    /// Exact numeric with fixed precision and scale (NUMERIC/DECIMAL)
    pub fixed_prec_scale: bool,
    pub auto_increment: bool,
    pub unsigned: bool,
    /// Internal-only types are never reported
    pub hidden: bool,
}

impl TypeDescriptor {
    const fn base(name: &'static str, sql_type: i32, max_precision: i64) -> Self {
        TypeDescriptor {
            name,
            sql_type,
            max_precision,
            min_scale: 0,
            max_scale: 0,
            prefix: None,
            suffix: None,
            params: None,
            case_sensitive: false,
            supports_scale: false,
            decimal: false,
            fixed_prec_scale: false,
            auto_increment: false,
            unsigned: false,
            hidden: false,
        }
    }

    const fn integer(name: &'static str, sql_type: i32, max_precision: i64) -> Self {
        TypeDescriptor { decimal: true, auto_increment: true, ..Self::base(name, sql_type, max_precision) }
    }

    const fn string(name: &'static str, sql_type: i32, max_precision: i64) -> Self {
        TypeDescriptor {
            prefix: Some("'"),
            suffix: Some("'"),
            params: Some("LENGTH"),
            case_sensitive: true,
            ..Self::base(name, sql_type, max_precision)
        }
    }

    const fn exact_numeric(name: &'static str, sql_type: i32) -> Self {
        TypeDescriptor {
            params: Some("PRECISION,SCALE"),
            max_scale: 100,
            supports_scale: true,
            decimal: true,
            fixed_prec_scale: true,
            ..Self::base(name, sql_type, 100)
        }
    }

    const fn approximate(name: &'static str, sql_type: i32, max_precision: i64) -> Self {
        TypeDescriptor { decimal: true, ..Self::base(name, sql_type, max_precision) }
    }

    const fn temporal(name: &'static str, sql_type: i32, max_precision: i64, prefix: &'static str) -> Self {
        TypeDescriptor { prefix: Some(prefix), suffix: Some("'"), ..Self::base(name, sql_type, max_precision) }
    }

    const fn fractional(self) -> Self {
        TypeDescriptor { params: Some("SCALE"), max_scale: 9, supports_scale: true, ..self }
    }
}

pub static NULL: TypeDescriptor =
    TypeDescriptor { hidden: true, ..TypeDescriptor::base("NULL", sql_type::NULL, 1) };
pub static CHARACTER: TypeDescriptor =
    TypeDescriptor::string("CHARACTER", sql_type::CHAR, MAX_STRING_LENGTH);
pub static CHARACTER_VARYING: TypeDescriptor =
    TypeDescriptor::string("CHARACTER VARYING", sql_type::VARCHAR, MAX_STRING_LENGTH);
pub static CHARACTER_LARGE_OBJECT: TypeDescriptor =
    TypeDescriptor::string("CHARACTER LARGE OBJECT", sql_type::CLOB, MAX_LOB_LENGTH);
pub static BIT: TypeDescriptor = TypeDescriptor {
    prefix: Some("B'"),
    suffix: Some("'"),
    params: Some("LENGTH"),
    ..TypeDescriptor::base("BIT", sql_type::BIT, MAX_STRING_LENGTH)
};
pub static BINARY_LARGE_OBJECT: TypeDescriptor = TypeDescriptor {
    prefix: Some("X'"),
    suffix: Some("'"),
    params: Some("LENGTH"),
    ..TypeDescriptor::base("BINARY LARGE OBJECT", sql_type::BLOB, MAX_LOB_LENGTH)
};
pub static BOOLEAN: TypeDescriptor = TypeDescriptor::base("BOOLEAN", sql_type::BOOLEAN, 1);
pub static SMALLINT: TypeDescriptor = TypeDescriptor::integer("SMALLINT", sql_type::SMALLINT, 5);
pub static INTEGER: TypeDescriptor = TypeDescriptor::integer("INTEGER", sql_type::INTEGER, 10);
pub static BIGINT: TypeDescriptor = TypeDescriptor::integer("BIGINT", sql_type::BIGINT, 19);
pub static BIGINT_UNSIGNED: TypeDescriptor = TypeDescriptor {
    unsigned: true,
    ..TypeDescriptor::integer("BIGINT UNSIGNED", sql_type::BIGINT, 20)
};
pub static NUMERIC: TypeDescriptor = TypeDescriptor::exact_numeric("NUMERIC", sql_type::NUMERIC);
pub static DECIMAL: TypeDescriptor = TypeDescriptor::exact_numeric("DECIMAL", sql_type::DECIMAL);
pub static REAL: TypeDescriptor = TypeDescriptor::approximate("REAL", sql_type::REAL, 7);
pub static FLOAT: TypeDescriptor = TypeDescriptor {
    params: Some("PRECISION"),
    ..TypeDescriptor::approximate("FLOAT", sql_type::FLOAT, 17)
};
pub static DOUBLE_PRECISION: TypeDescriptor =
    TypeDescriptor::approximate("DOUBLE PRECISION", sql_type::DOUBLE, 17);
pub static DATE: TypeDescriptor = TypeDescriptor::temporal("DATE", sql_type::DATE, 10, "DATE '");
pub static TIME: TypeDescriptor =
    TypeDescriptor::temporal("TIME", sql_type::TIME, 18, "TIME '").fractional();
pub static TIME_WITH_TIME_ZONE: TypeDescriptor = TypeDescriptor::temporal(
    "TIME WITH TIME ZONE",
    sql_type::TIME_WITH_TIMEZONE,
    24,
    "TIME WITH TIME ZONE '",
)
.fractional();
pub static TIMESTAMP: TypeDescriptor =
    TypeDescriptor::temporal("TIMESTAMP", sql_type::TIMESTAMP, 29, "TIMESTAMP '").fractional();
pub static TIMESTAMP_WITH_TIME_ZONE: TypeDescriptor = TypeDescriptor::temporal(
    "TIMESTAMP WITH TIME ZONE",
    sql_type::TIMESTAMP_WITH_TIMEZONE,
    35,
    "TIMESTAMP WITH TIME ZONE '",
)
.fractional();
pub static INTERVAL: TypeDescriptor =
    TypeDescriptor::temporal("INTERVAL", sql_type::OTHER, 18, "INTERVAL '").fractional();
pub static OTHER: TypeDescriptor = TypeDescriptor::base("OTHER", sql_type::OTHER, MAX_STRING_LENGTH);

/// Every descriptor in declaration order, hidden ones included.
pub static TYPE_DESCRIPTORS: &[&TypeDescriptor] = &[
    &NULL,
    &CHARACTER,
    &CHARACTER_VARYING,
    &CHARACTER_LARGE_OBJECT,
    &BIT,
    &BINARY_LARGE_OBJECT,
    &BOOLEAN,
    &SMALLINT,
    &INTEGER,
    &BIGINT,
    &BIGINT_UNSIGNED,
    &NUMERIC,
    &DECIMAL,
    &REAL,
    &FLOAT,
    &DOUBLE_PRECISION,
    &DATE,
    &TIME,
    &TIME_WITH_TIME_ZONE,
    &TIMESTAMP,
    &TIMESTAMP_WITH_TIME_ZONE,
    &INTERVAL,
    &OTHER,
];

/// Descriptors visible to clients, in declaration order.
pub fn visible_descriptors() -> impl Iterator<Item = &'static TypeDescriptor> {
    TYPE_DESCRIPTORS.iter().copied().filter(|descriptor| !descriptor.hidden)
}
