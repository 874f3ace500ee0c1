use pretty_assertions::assert_eq;

use squill::prelude::*;
use squill::TableOptions;
use tests::{relation_join, schema_model, test_model};

fn to_sql(query: &Query) -> String {
    Serializer::mysql().serialize(query)
}

#[test]
fn select_clauses_match_the_shared_rules() {
    let model = test_model("test_table_name");
    let model2 = test_model("test_table_name2");

    assert_eq!(
        to_sql(&Query::select(["col1", "col2"]).from(&model)),
        "SELECT col1, col2 FROM test_table_name"
    );

    assert_eq!(
        to_sql(&Query::select(()).from(&model)),
        "SELECT * FROM test_table_name"
    );

    assert_eq!(
        to_sql(&Query::select(()).from(&model).join(relation_join(&model2, &model))),
        "SELECT * FROM test_table_name LEFT JOIN test_table_name2 ON \
         (test_table_name2.id = test_table_name.relation_id)"
    );
}

#[test]
fn or_predicates_use_their_kind_keyword() {
    let model = test_model("test_table_name");
    let query = Query::select(())
        .from(&model)
        .filter(Where::new("test_table_name2.relation_id", "=", "2"))
        .filter(Where::new("col1", "=", "\"test\"").with_kind(WhereKind::Or));

    assert_eq!(
        to_sql(&query),
        "SELECT * FROM test_table_name WHERE test_table_name2.relation_id = 2 \
         OR col1 = \"test\""
    );
}

#[test]
fn not_predicates_use_their_kind_keyword() {
    let model = test_model("test_table_name");
    let query = Query::select(())
        .from(&model)
        .filter(Where::new("test_table_name2.relation_id", "=", "2"))
        .filter(Where::new("col1", "=", "\"test\"").with_kind(WhereKind::Or))
        .filter(Where::new("col2", "=", "\"test\"").with_kind(WhereKind::Not));

    assert_eq!(
        to_sql(&query),
        "SELECT * FROM test_table_name WHERE test_table_name2.relation_id = 2 \
         OR col1 = \"test\" NOT col2 = \"test\""
    );
}

#[test]
fn a_fully_nested_node_is_parenthesized() {
    let model = test_model("test_table_name");
    let query = Query::select(())
        .from(&model)
        .filter(Where::new(
            Where::new("test_table_name2.relation_id", "=", "2"),
            "",
            Where::new("col1", "=", "\"test\"").with_kind(WhereKind::Or),
        ))
        .filter(Where::new("col2", "=", "\"test\""));

    assert_eq!(
        to_sql(&query),
        "SELECT * FROM test_table_name WHERE (test_table_name2.relation_id = 2 \
         OR col1 = \"test\") AND col2 = \"test\""
    );
}

#[test]
fn nesting_recurses_to_arbitrary_depth() {
    let model = test_model("test_table_name");
    let query = Query::select(())
        .from(&model)
        .filter(Where::new(
            Where::new(
                Where::new("test_table_name2.relation_id", "=", "2"),
                "",
                Where::new("col1", "=", "\"test\""),
            ),
            "",
            Where::new("col1", "=", "\"test\"").with_kind(WhereKind::Or),
        ))
        .filter(Where::new("col2", "=", "\"test\""));

    assert_eq!(
        to_sql(&query),
        "SELECT * FROM test_table_name WHERE ((test_table_name2.relation_id = 2 \
         AND col1 = \"test\") OR col1 = \"test\") AND col2 = \"test\""
    );
}

#[test]
fn insert_binds_every_non_key_column() {
    let model = test_model("test_table_name");
    assert_eq!(
        to_sql(&Query::insert(&model)),
        "INSERT INTO test_table_name (relation_id, col1, col2, col3) VALUES (?, ?, ?, ?)"
    );
}

#[test]
fn insert_from_select() {
    let model = test_model("test_table_name");
    let query =
        Query::insert(&model).values(Query::select(()).from("test_table_name1"));

    assert_eq!(
        to_sql(&query),
        "INSERT INTO test_table_name (relation_id, col1, col2, col3) \
         SELECT * FROM test_table_name1"
    );
}

#[test]
fn create_uses_a_trailing_primary_key_clause() {
    let model = schema_model("test_table_name");

    assert_eq!(
        to_sql(&Query::create(&model)),
        "CREATE TABLE test_table_name (id INTEGER NOT NULL AUTO_INCREMENT, \
         relation_id INTEGER NOT NULL, relation_id2 INTEGER NOT NULL, \
         title VARCHAR DEFAULT \"test\" NOT NULL, description VARCHAR NULL,\n\
         PRIMARY KEY (id));"
    );
}

#[test]
fn create_renders_foreign_keys_and_keys_inline() {
    let model = schema_model("test_table_name");
    let query = Query::create(&model)
        .add_foreign_key(ForeignKey {
            name: "fk_test".to_string(),
            target: Reference::new("test_table_name2", "id"),
            with: Reference::new("test_table_name", "relation_id"),
            on_delete: RefAction::Cascade,
            ..Default::default()
        })
        .add_index(Index {
            name: "the_index_name".to_string(),
            target: model.table_name().to_string(),
            key: "relation_id".to_string(),
            unique: true,
        });

    assert_eq!(
        to_sql(&query),
        "CREATE TABLE test_table_name (id INTEGER NOT NULL AUTO_INCREMENT, \
         relation_id INTEGER NOT NULL, relation_id2 INTEGER NOT NULL, \
         title VARCHAR DEFAULT \"test\" NOT NULL, description VARCHAR NULL,\n\
         PRIMARY KEY (id),\n\
         CONSTRAINT fk_test FOREIGN KEY (relation_id) REFERENCES test_table_name2 (id) \
         ON DELETE CASCADE ON UPDATE NO ACTION,\n\
         UNIQUE KEY the_index_name (relation_id));"
    );
}

#[test]
fn create_appends_configured_table_options() {
    let model = schema_model("accounts");
    let serializer = Serializer::mysql_with_options(TableOptions {
        engine: "InnoDB".to_string(),
        charset: "utf8mb4".to_string(),
        collate: "utf8mb4_unicode_ci".to_string(),
    });

    let sql = serializer.serialize(&Query::create(&model));
    assert!(sql.ends_with(
        ") ENGINE=InnoDB DEFAULT CHARSET=utf8mb4 COLLATE=utf8mb4_unicode_ci;"
    ));
}

#[test]
fn create_respects_if_not_exists() {
    let model = schema_model("accounts");
    let sql = to_sql(&Query::create(&model).if_not_exists());
    assert!(sql.starts_with("CREATE TABLE IF NOT EXISTS accounts ("));
}

#[test]
fn column_lengths_render_on_this_dialect() {
    let mut model = Model::new("notes");
    model.add_field(Column {
        name: "body".to_string(),
        ty: "varchar".to_string(),
        length: 255,
        nullable: true,
        ..Default::default()
    });

    assert_eq!(
        to_sql(&Query::create(&model)),
        "CREATE TABLE notes (body varchar(255) NULL);"
    );
}

#[test]
fn alter_add_column_is_native() {
    let model = test_model("test_table_name");
    let query = Query::alter(&model).add_column(Column {
        name: "new_field".to_string(),
        ty: "integer".to_string(),
        default: Value::I64(1),
        length: 10,
        ..Default::default()
    });

    assert_eq!(
        to_sql(&query),
        "ALTER TABLE test_table_name\nADD new_field integer(10) NULL DEFAULT 1"
    );
}

#[test]
fn alter_drop_column_is_native() {
    let model = test_model("test_table_name");
    let query = Query::alter(&model).drop_column(Column {
        name: "old_field".to_string(),
        ..Default::default()
    });

    assert_eq!(to_sql(&query), "ALTER TABLE test_table_name\nDROP old_field");
}

#[test]
fn alter_index_changes_are_native() {
    let model = test_model("test_table_name");

    let query = Query::alter(&model).add_index(Index {
        name: "my_brand_new_index".to_string(),
        target: model.table_name().to_string(),
        key: "key_id".to_string(),
        unique: false,
    });
    assert_eq!(
        to_sql(&query),
        "ALTER TABLE test_table_name\nADD INDEX my_brand_new_index (key_id)"
    );

    let query = Query::alter(&model).add_index(Index {
        name: "my_brand_unique_new_index".to_string(),
        target: model.table_name().to_string(),
        key: "key_id".to_string(),
        unique: true,
    });
    assert_eq!(
        to_sql(&query),
        "ALTER TABLE test_table_name\nADD UNIQUE INDEX my_brand_unique_new_index (key_id)"
    );

    let query = Query::alter(&model).drop_index(Index {
        name: "my_brand_new_index".to_string(),
        ..Default::default()
    });
    assert_eq!(
        to_sql(&query),
        "ALTER TABLE test_table_name\nDROP INDEX my_brand_new_index"
    );
}

#[test]
fn alter_foreign_key_changes_are_native() {
    let model = test_model("test_table_name");

    let query = Query::alter(&model).add_foreign_key(ForeignKey {
        name: "fk_test".to_string(),
        target: Reference::new("other", "id"),
        with: Reference::new("test_table_name", "relation_id"),
        on_delete: RefAction::Cascade,
        ..Default::default()
    });
    assert_eq!(
        to_sql(&query),
        "ALTER TABLE test_table_name\nADD CONSTRAINT fk_test FOREIGN KEY (relation_id) \
         REFERENCES other (id) ON DELETE CASCADE ON UPDATE NO ACTION"
    );

    let query = Query::alter(&model).drop_foreign_key(ForeignKey {
        name: "fk_test".to_string(),
        ..Default::default()
    });
    assert_eq!(
        to_sql(&query),
        "ALTER TABLE test_table_name\nDROP FOREIGN KEY fk_test"
    );
}

#[test]
fn alter_changes_join_with_commas() {
    let model = test_model("test_table_name");
    let query = Query::alter(&model)
        .add_column(Column {
            name: "new_field".to_string(),
            ty: "integer".to_string(),
            ..Default::default()
        })
        .drop_column(Column {
            name: "old_field".to_string(),
            ..Default::default()
        })
        .drop_index(Index {
            key: "key_id".to_string(),
            ..Default::default()
        });

    assert_eq!(
        to_sql(&query),
        "ALTER TABLE test_table_name\n\
         ADD new_field integer NULL DEFAULT NULL,DROP old_field,DROP INDEX key_id"
    );
}

#[test]
fn rename_quotes_both_identifiers() {
    assert_eq!(
        to_sql(&Query::rename("test_table_name", "new_test_table")),
        "ALTER TABLE `test_table_name` RENAME TO `new_test_table`"
    );
    assert_eq!(
        to_sql(&Query::rename("test_table", "new_test_table")),
        "ALTER TABLE `test_table` RENAME TO `new_test_table`"
    );
}

#[test]
fn transaction_control_keywords() {
    assert_eq!(to_sql(&Query::begin_transaction()), "START TRANSACTION;");
    assert_eq!(to_sql(&Query::commit_transaction()), "COMMIT;");
    assert_eq!(to_sql(&Query::rollback_transaction()), "ROLLBACK;");
}

#[test]
fn incomplete_statements_render_empty() {
    assert_eq!(to_sql(&Query::select(["id"])), "");
    assert_eq!(to_sql(&Query::default()), "");
}
