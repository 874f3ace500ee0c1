use mysql_async::{consts::ColumnType, Value as MysqlValue};
use squill_core::{schema, stmt::Value as CoreValue, Error, Result};

/// The parameter form of a core value.
pub(crate) fn to_mysql(value: &CoreValue) -> MysqlValue {
    match value {
        CoreValue::Null => MysqlValue::NULL,
        CoreValue::I64(v) => MysqlValue::Int(*v),
        CoreValue::Text(v) => MysqlValue::Bytes(v.clone().into_bytes()),
        CoreValue::Bool(v) => MysqlValue::Int(i64::from(*v)),
    }
}

/// Maps a wire column type onto the canonical vocabulary.
pub(crate) fn normalize_wire_type(ty: ColumnType) -> &'static str {
    match ty {
        ColumnType::MYSQL_TYPE_TINY => schema::BOOL,
        ColumnType::MYSQL_TYPE_SHORT
        | ColumnType::MYSQL_TYPE_INT24
        | ColumnType::MYSQL_TYPE_LONG
        | ColumnType::MYSQL_TYPE_LONGLONG => schema::INTEGER,
        ColumnType::MYSQL_TYPE_VARCHAR | ColumnType::MYSQL_TYPE_VAR_STRING => schema::VARCHAR,
        ColumnType::MYSQL_TYPE_STRING => schema::CHAR,
        _ => schema::VARCHAR,
    }
}

/// Coerces a wire value into the core union, guided by the column's
/// normalized type. The text protocol hands most scalars back as byte
/// strings, so integers and booleans are parsed out of them.
pub(crate) fn from_mysql(value: &MysqlValue, ty: &str) -> Result<CoreValue> {
    match value {
        MysqlValue::NULL => Ok(CoreValue::Null),
        MysqlValue::Int(v) => Ok(CoreValue::I64(*v)),
        MysqlValue::UInt(v) => Ok(CoreValue::I64(*v as i64)),
        MysqlValue::Bytes(bytes) => {
            let text = std::str::from_utf8(bytes)
                .map_err(|_| Error::type_conversion("non-utf8 bytes", ty.to_string()))?;
            match ty {
                schema::INTEGER => text
                    .parse::<i64>()
                    .map(CoreValue::I64)
                    .map_err(|_| Error::type_conversion(text, schema::INTEGER)),
                schema::BOOL => Ok(CoreValue::Bool(text == "1" || text == "true")),
                _ => Ok(CoreValue::Text(text.to_string())),
            }
        }
        other => Err(Error::type_conversion(format!("{other:?}"), ty.to_string())),
    }
}
