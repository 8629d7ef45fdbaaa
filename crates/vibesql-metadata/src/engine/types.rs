use log::debug;
use vibesql_types::{visible_descriptors, SqlValue};

use super::{clamp_to_i16, clamp_to_i32, MetadataEngine};
use crate::{
    accessor::CatalogAccessor,
    constants::{TYPE_NULLABLE, TYPE_SEARCHABLE},
    error::Result,
    result::{column_type, ResultTable},
    session::QuerySession,
};

impl<'a, C: CatalogAccessor + ?Sized, S: QuerySession> MetadataEngine<'a, C, S> {
    /// Every supported data type, in declaration order
    pub fn type_info(&self) -> Result<ResultTable> {
        self.check_closed()?;
        let mut result = ResultTable::with_columns([
            ("TYPE_NAME", column_type::VARCHAR),
            ("DATA_TYPE", column_type::INTEGER),
            ("PRECISION", column_type::INTEGER),
            ("LITERAL_PREFIX", column_type::VARCHAR),
            ("LITERAL_SUFFIX", column_type::VARCHAR),
            ("CREATE_PARAMS", column_type::VARCHAR),
            ("NULLABLE", column_type::SMALLINT),
            ("CASE_SENSITIVE", column_type::BOOLEAN),
            ("SEARCHABLE", column_type::SMALLINT),
            ("UNSIGNED_ATTRIBUTE", column_type::BOOLEAN),
            ("FIXED_PREC_SCALE", column_type::BOOLEAN),
            ("AUTO_INCREMENT", column_type::BOOLEAN),
            ("LOCAL_TYPE_NAME", column_type::VARCHAR),
            ("MINIMUM_SCALE", column_type::SMALLINT),
            ("MAXIMUM_SCALE", column_type::SMALLINT),
            ("SQL_DATA_TYPE", column_type::INTEGER),
            ("SQL_DATETIME_SUB", column_type::INTEGER),
            ("NUM_PREC_RADIX", column_type::INTEGER),
        ]);

        for descriptor in visible_descriptors() {
            result.add_row(vec![
                SqlValue::varchar(descriptor.name),
                SqlValue::Integer(descriptor.sql_type),
                SqlValue::Integer(clamp_to_i32(descriptor.max_precision)),
                SqlValue::nullable_varchar(descriptor.prefix),
                SqlValue::nullable_varchar(descriptor.suffix),
                SqlValue::nullable_varchar(descriptor.params),
                SqlValue::Smallint(TYPE_NULLABLE),
                SqlValue::Boolean(descriptor.case_sensitive),
                SqlValue::Smallint(TYPE_SEARCHABLE),
                SqlValue::Boolean(descriptor.unsigned),
                SqlValue::Boolean(descriptor.fixed_prec_scale),
                SqlValue::Boolean(descriptor.auto_increment),
                SqlValue::varchar(descriptor.name),
                SqlValue::Smallint(clamp_to_i16(descriptor.min_scale)),
                SqlValue::Smallint(clamp_to_i16(descriptor.max_scale)),
                SqlValue::Null,
                SqlValue::Null,
                if descriptor.decimal { SqlValue::Integer(10) } else { SqlValue::Null },
            ]);
        }

        debug!("type_info: {} rows", result.row_count());
        Ok(result)
    }
}
