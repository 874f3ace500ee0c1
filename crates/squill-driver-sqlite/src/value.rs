use rusqlite::types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef};
use squill_core::{schema, stmt::Value as CoreValue, Error, Result};

/// Bridges the core value union and rusqlite's parameter/row values.
#[derive(Debug)]
pub(crate) struct Value(CoreValue);

impl From<CoreValue> for Value {
    fn from(value: CoreValue) -> Self {
        Self(value)
    }
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match &self.0 {
            CoreValue::Null => Ok(ToSqlOutput::Owned(SqlValue::Null)),
            CoreValue::I64(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v))),
            CoreValue::Text(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes()))),
            CoreValue::Bool(true) => Ok(ToSqlOutput::Owned(SqlValue::Integer(1))),
            CoreValue::Bool(false) => Ok(ToSqlOutput::Owned(SqlValue::Integer(0))),
        }
    }
}

/// Coerces a raw row value into the core union, guided by the column's
/// normalized type. Byte-string forms of integers and booleans are
/// parsed; anything the vocabulary cannot express is a conversion error
/// that aborts the row scan.
pub(crate) fn from_sql(raw: SqlValue, ty: &str) -> Result<CoreValue> {
    match raw {
        SqlValue::Null => Ok(CoreValue::Null),
        SqlValue::Integer(v) => Ok(CoreValue::I64(v)),
        SqlValue::Text(text) => match ty {
            schema::INTEGER => text
                .parse::<i64>()
                .map(CoreValue::I64)
                .map_err(|_| Error::type_conversion(text, schema::INTEGER)),
            schema::BOOL => Ok(CoreValue::Bool(text == "1" || text == "true")),
            _ => Ok(CoreValue::Text(text)),
        },
        SqlValue::Real(v) => Err(Error::type_conversion(v.to_string(), schema::VARCHAR)),
        SqlValue::Blob(_) => Err(Error::type_conversion("blob", schema::VARCHAR)),
    }
}
