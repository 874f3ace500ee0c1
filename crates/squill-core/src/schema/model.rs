use super::Column;
use crate::stmt::Value;

/// Schema descriptor for one table: a mutable table name, an optional
/// primary key, and the ordered non-key fields.
///
/// Insertion order is significant: it fixes the column order in CREATE
/// statements and the parameter order in INSERT/UPDATE. A model is
/// typically constructed once per logical table and reused across
/// statements, with field values mutated between calls to reflect the
/// row currently being operated on. Builders copy column descriptors out
/// at build time, so mutating the model after handing it to a statement
/// does not alter that statement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model {
    table_name: String,
    primary_key: Option<Column>,
    fields: Vec<Column>,
}

impl Model {
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            ..Default::default()
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn set_table_name(&mut self, name: impl Into<String>) {
        self.table_name = name.into();
    }

    /// Installs the primary key, forcing its `primary_key` flag so at
    /// most one flagged column exists per model.
    pub fn set_primary_key(&mut self, mut column: Column) {
        column.primary_key = true;
        self.primary_key = Some(column);
    }

    pub fn primary_key(&self) -> Option<&Column> {
        self.primary_key.as_ref()
    }

    /// The ordered non-key fields.
    pub fn fields(&self) -> &[Column] {
        &self.fields
    }

    /// All columns in statement order: the primary key (when present)
    /// followed by the fields.
    pub fn columns(&self) -> Vec<Column> {
        let mut columns = Vec::with_capacity(self.fields.len() + 1);
        if let Some(pk) = &self.primary_key {
            columns.push(pk.clone());
        }
        columns.extend(self.fields.iter().cloned());
        columns
    }

    pub fn field(&self, name: &str) -> Option<&Column> {
        if let Some(pk) = &self.primary_key {
            if pk.name == name {
                return Some(pk);
            }
        }
        self.fields.iter().find(|field| field.name == name)
    }

    /// Adds a field, keeping names unique: re-adding an existing name
    /// updates that field's value in place instead of duplicating it,
    /// and a name matching the primary key refreshes the cached key's
    /// value.
    pub fn add_field(&mut self, column: Column) {
        if let Some(pk) = &mut self.primary_key {
            if pk.name == column.name {
                pk.value = column.value;
                return;
            }
        }

        if let Some(existing) = self.fields.iter_mut().find(|field| field.name == column.name) {
            existing.value = column.value;
            return;
        }

        self.fields.push(column);
    }

    /// Updates a named non-key field's value in place. The primary key
    /// is never written through this path.
    pub fn set_field(&mut self, name: &str, value: impl Into<Value>) {
        if let Some(field) = self.fields.iter_mut().find(|field| field.name == name) {
            field.value = value.into();
        }
    }
}
