use super::Value;

/// A deferred literal paired with the placeholder token emitted in its
/// place. Binds are collected on the statement in discovery order, which
/// must match the parameter order the driver sees at execution time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bind {
    pub field: String,
    pub value: Value,
}

impl Bind {
    /// A bind rendered as a bare `?` placeholder.
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            field: "?".to_string(),
            value: value.into(),
        }
    }

    /// A bind carrying an explicit placeholder token.
    pub fn named(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}
