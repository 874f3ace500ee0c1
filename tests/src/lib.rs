//! Shared fixtures for the dialect rendering and execution suites.

use squill::prelude::*;
use squill::schema::{INTEGER, VARCHAR};

/// A row-shaped model with bound values, used by the INSERT/UPDATE and
/// execution suites.
pub fn test_model(table: &str) -> Model {
    let mut model = Model::new(table);
    model.set_primary_key(Column {
        name: "id".to_string(),
        ty: INTEGER.to_string(),
        auto_increment: true,
        ..Default::default()
    });
    model.add_field(Column {
        name: "relation_id".to_string(),
        ty: INTEGER.to_string(),
        value: Value::I64(1),
        ..Default::default()
    });
    model.add_field(Column {
        name: "col1".to_string(),
        ty: INTEGER.to_string(),
        value: Value::I64(1),
        ..Default::default()
    });
    model.add_field(Column {
        name: "col2".to_string(),
        ty: INTEGER.to_string(),
        value: Value::I64(2),
        ..Default::default()
    });
    model.add_field(Column {
        name: "col3".to_string(),
        ty: VARCHAR.to_string(),
        value: Value::Text("Test".to_string()),
        ..Default::default()
    });
    model
}

/// A schema-shaped model without bound values, used by the CREATE suites.
pub fn schema_model(table: &str) -> Model {
    let mut model = Model::new(table);
    model.set_primary_key(Column {
        name: "id".to_string(),
        ty: INTEGER.to_string(),
        auto_increment: true,
        ..Default::default()
    });
    model.add_field(Column {
        name: "relation_id".to_string(),
        ty: INTEGER.to_string(),
        ..Default::default()
    });
    model.add_field(Column {
        name: "relation_id2".to_string(),
        ty: INTEGER.to_string(),
        ..Default::default()
    });
    model.add_field(Column {
        name: "title".to_string(),
        ty: VARCHAR.to_string(),
        default: Value::Text("test".to_string()),
        ..Default::default()
    });
    model.add_field(Column {
        name: "description".to_string(),
        ty: VARCHAR.to_string(),
        nullable: true,
        ..Default::default()
    });
    model
}

/// The join used throughout the SELECT suites:
/// `LEFT JOIN <target> ON (<target>.id = <with>.relation_id)`.
pub fn relation_join(target: &Model, with: &Model) -> Join {
    Join::left(
        Reference::new(target.table_name(), "id"),
        Reference::new(with.table_name(), "relation_id"),
        "=",
    )
}
