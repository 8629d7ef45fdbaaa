//! Fixed values reported by the metadata views

use vibesql_types::SqlValue;

/// Table types, sorted; `tables` binary-searches this list.
pub const TABLE_TYPES: [&str; 5] = ["BASE TABLE", "GLOBAL TEMPORARY", "LOCAL TEMPORARY", "SYNONYM", "VIEW"];

/// Accepted in a table-type filter as an alias of `BASE TABLE`
pub const TABLE_TYPE_ALIAS: &str = "TABLE";

pub const SYNONYM_TABLE_TYPE: &str = "SYNONYM";

/// Keywords reserved by the dialect beyond SQL:2003
pub const SQL_KEYWORDS: &str = "CURRENT_CATALOG,CURRENT_SCHEMA,GROUPS,IF,ILIKE,INTERSECTS,LIMIT,MINUS,\
OFFSET,QUALIFY,REGEXP,ROWNUM,SYSDATE,SYSTIME,SYSTIMESTAMP,TODAY,TOP,_ROWID_";

pub const YES: &str = "YES";
pub const NO: &str = "NO";

// columnNoNulls / columnNullable
pub const COLUMN_NO_NULLS: i32 = 0;
pub const COLUMN_NULLABLE: i32 = 1;

pub const BEST_ROW_SESSION: i16 = 2;
pub const BEST_ROW_NOT_PSEUDO: i16 = 1;

// importedKey* rule codes
pub const IMPORTED_KEY_CASCADE: i16 = 0;
pub const IMPORTED_KEY_RESTRICT: i16 = 1;
pub const IMPORTED_KEY_SET_NULL: i16 = 2;
pub const IMPORTED_KEY_SET_DEFAULT: i16 = 4;
pub const IMPORTED_KEY_NOT_DEFERRABLE: i16 = 7;

pub const TABLE_INDEX_STATISTIC: i16 = 0;
pub const TABLE_INDEX_HASHED: i16 = 2;
pub const TABLE_INDEX_OTHER: i16 = 3;

pub const TYPE_NULLABLE: i16 = 1;
pub const TYPE_SEARCHABLE: i16 = 3;

/// Help sections the function lists are built from
pub const NUMERIC_FUNCTIONS_SECTION: &str = "Functions (Numeric)";
pub const STRING_FUNCTIONS_SECTION: &str = "Functions (String)";
pub const SYSTEM_FUNCTIONS_SECTION: &str = "Functions (System)";
pub const TIME_DATE_FUNCTIONS_SECTION: &str = "Functions (Time and Date)";

/// Bind value matching any name in a pass-through LIKE filter
pub(crate) fn percent() -> SqlValue {
    SqlValue::varchar("%")
}
