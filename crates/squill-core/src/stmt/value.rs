/// A literal value carried by a column, a DEFAULT clause, or a bind
/// parameter. The set is closed: anything a backend hands back that does
/// not fit is rejected during row normalization rather than stringified.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    I64(i64),
    Text(String),
    Bool(bool),
}

impl Value {
    /// True when the value is unset. An unset value on an auto-increment
    /// column is what keeps the column out of INSERT statements.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::I64(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::I64(value as i64)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}
