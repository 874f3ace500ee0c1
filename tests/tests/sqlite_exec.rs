#![cfg(feature = "sqlite")]

use std::fs;
use std::path::PathBuf;

use squill::prelude::*;
use tests::test_model;

struct TempDb {
    path: PathBuf,
}

impl TempDb {
    /// Creates an empty database file; the embedded adapter refuses to
    /// open paths that do not exist.
    fn create(name: &str) -> Self {
        let path = std::env::temp_dir().join(format!("squill-{}-{name}.sqlite", std::process::id()));
        let _ = fs::remove_file(&path);
        fs::File::create(&path).expect("failed to create database file");
        Self { path }
    }

    fn config(&self) -> Config {
        Config {
            host: self.path.display().to_string(),
            ..Default::default()
        }
    }
}

impl Drop for TempDb {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

#[tokio::test]
async fn connect_fails_when_the_file_is_missing() {
    let config = Config {
        host: "/nonexistent/squill.sqlite".to_string(),
        ..Default::default()
    };

    let err = squill::connect(config).await.unwrap_err();
    assert!(err.is_connect());
}

#[tokio::test]
async fn empty_statements_are_rejected_before_the_driver() {
    let db = TempDb::create("empty-guard");
    let mut conn = squill::connect(db.config()).await.unwrap();

    // SELECT with no destination renders to empty SQL.
    let err = conn.execute(&Query::select(["id"])).await.unwrap_err();
    assert!(err.is_empty_statement());

    let err = conn.execute(&Query::default()).await.unwrap_err();
    assert!(err.is_empty_statement());

    conn.close().await.unwrap();
}

#[tokio::test]
async fn round_trip_create_insert_select_update_delete() {
    let db = TempDb::create("round-trip");
    let mut conn = squill::connect(db.config()).await.unwrap();

    let mut model = test_model("testing");

    let result = conn.execute(&Query::create(&model)).await.unwrap();
    assert!(result.rows().is_empty());

    let result = conn.execute(&Query::insert(&model)).await.unwrap();
    assert_eq!(result.last_insert_id(), 1);

    // The inserted row comes back with coerced, typed values.
    let query = Query::select(model.columns()).from(&model);
    let result = conn.execute(&query).await.unwrap();
    assert_eq!(result.rows().len(), 1);

    let row = &result.rows()[0];
    assert_eq!(row.field("id").unwrap().value, Value::I64(1));
    assert_eq!(row.field("relation_id").unwrap().value, Value::I64(1));
    assert_eq!(row.field("col1").unwrap().value, Value::I64(1));
    assert_eq!(row.field("col2").unwrap().value, Value::I64(2));
    assert_eq!(
        row.field("col3").unwrap().value,
        Value::Text("Test".to_string())
    );

    // Update through the same model instance.
    model.set_field("relation_id", 2);
    let result = conn.execute(&Query::update(&model)).await.unwrap();
    assert_eq!(result.last_insert_id(), 1);

    let query = Query::select(["id", "relation_id"]).from(&model);
    let result = conn.execute(&query).await.unwrap();
    assert_eq!(result.rows().len(), 1);
    assert_eq!(
        result.rows()[0].field("relation_id").unwrap().value,
        Value::I64(2)
    );

    // Delete and verify through a bound lookup.
    conn.execute(&Query::delete().from(&model)).await.unwrap();

    let query = Query::select(model.columns())
        .from(&model)
        .filter(Where::new("id", "=", Bind::named("id", 1)));
    let result = conn.execute(&query).await.unwrap();
    assert!(result.rows().is_empty());

    conn.close().await.unwrap();
}

#[tokio::test]
async fn create_if_not_exists_is_idempotent() {
    let db = TempDb::create("if-not-exists");
    let mut conn = squill::connect(db.config()).await.unwrap();

    let model = test_model("testing");
    conn.execute(&Query::create(&model).if_not_exists())
        .await
        .unwrap();
    conn.execute(&Query::create(&model).if_not_exists())
        .await
        .unwrap();

    conn.close().await.unwrap();
}

#[tokio::test]
async fn rolled_back_updates_do_not_stick() {
    let db = TempDb::create("rollback");
    let mut conn = squill::connect(db.config()).await.unwrap();

    let mut model = test_model("testing");
    conn.execute(&Query::create(&model)).await.unwrap();
    conn.execute(&Query::insert(&model)).await.unwrap();

    // Committed update.
    conn.execute(&Query::begin_transaction()).await.unwrap();
    model.set_field("col3", "committed");
    conn.execute(&Query::update(&model)).await.unwrap();
    conn.execute(&Query::commit_transaction()).await.unwrap();

    // Rolled-back update.
    conn.execute(&Query::begin_transaction()).await.unwrap();
    model.set_field("col3", "__SHOULD_NOT_BE_UPDATED__");
    conn.execute(&Query::update(&model)).await.unwrap();
    conn.execute(&Query::rollback_transaction()).await.unwrap();

    let query = Query::select(()).from(&model).filter(Where::new(
        "col3",
        "=",
        Bind::named("col3", "__SHOULD_NOT_BE_UPDATED__"),
    ));
    let result = conn.execute(&query).await.unwrap();
    assert!(result.rows().is_empty());

    let query = Query::select(()).from(&model).filter(Where::new(
        "col3",
        "=",
        Bind::named("col3", "committed"),
    ));
    let result = conn.execute(&query).await.unwrap();
    assert_eq!(result.rows().len(), 1);

    conn.close().await.unwrap();
}

#[tokio::test]
async fn alter_rebuild_preserves_surviving_columns() {
    let db = TempDb::create("rebuild");
    let mut conn = squill::connect(db.config()).await.unwrap();

    let model = test_model("testing");
    conn.execute(&Query::create(&model)).await.unwrap();
    conn.execute(&Query::insert(&model)).await.unwrap();

    // Dropping a column is not expressible natively and runs the
    // create-temp / copy / rename-swap / drop sequence.
    let alter = Query::alter(&model).drop_column(Column {
        name: "col2".to_string(),
        ..Default::default()
    });
    conn.execute(&alter).await.unwrap();

    let result = conn
        .execute(&Query::select(()).from("testing"))
        .await
        .unwrap();
    assert_eq!(result.rows().len(), 1);

    let row = &result.rows()[0];
    assert_eq!(row.field("col1").unwrap().value, Value::I64(1));
    assert_eq!(
        row.field("col3").unwrap().value,
        Value::Text("Test".to_string())
    );
    assert!(row.field("col2").is_none());

    conn.close().await.unwrap();
}
