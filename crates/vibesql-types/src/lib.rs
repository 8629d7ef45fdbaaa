//! SQL:1999 Type System
//!
//! This crate provides the type vocabulary shared by the catalog and the
//! metadata views:
//! - Data type definitions (INTEGER, VARCHAR, BOOLEAN, etc.)
//! - SQL values used as result-table cells
//! - The static type descriptor table reported by `getTypeInfo`

mod data_type;
mod sql_value;
mod type_descriptor;

pub use data_type::{DataType, IntervalField};
pub use sql_value::SqlValue;
pub use type_descriptor::{
    sql_type, visible_descriptors, TypeDescriptor, MAX_LOB_LENGTH, MAX_STRING_LENGTH,
    TYPE_DESCRIPTORS,
};
