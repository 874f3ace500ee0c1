use crate::stmt::Value;

/// One column descriptor: the schema definition plus, when the column is
/// part of a row being written or read, its current value.
///
/// Columns are plain data. The serializer never mutates them; the owning
/// [`Model`](super::Model) updates values in place on name lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Column {
    /// Column name in the database.
    pub name: String,

    /// SQL type name. Free-form; see [`super::normalize_column_type`].
    pub ty: String,

    /// Current value, bound on INSERT and UPDATE.
    pub value: Value,

    /// DEFAULT clause value. `Value::Null` means no default.
    pub default: Value,

    /// Display length, rendered as `(N)` by the networked dialect when
    /// greater than zero.
    pub length: i64,

    pub nullable: bool,

    pub unsigned: bool,

    /// At most one column per model carries this flag.
    pub primary_key: bool,

    pub auto_increment: bool,
}

impl Column {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            ..Default::default()
        }
    }
}
