use std::collections::HashSet;

use super::{
    column_def::{ColumnDef, ForeignKeyDef},
    value::Literal,
    Flavor, Formatter, ToSql,
};

use squill_core::{
    schema::{Index, Model},
    stmt::{ColumnExpr, Query},
};

pub(super) struct AlterTableStmt<'a>(pub(super) &'a Query);

impl ToSql for AlterTableStmt<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let Some(destination) = self.0.destination() else {
            return;
        };

        match f.serializer.flavor {
            Flavor::Sqlite => {
                if rebuild_required(self.0) {
                    sqlite_rebuild(self.0, destination, f);
                } else {
                    sqlite_native(self.0, destination, f);
                }
            }
            Flavor::Mysql => mysql_native(self.0, destination, f),
        }
    }
}

/// The embedded engine can only add columns and add/drop indexes in
/// place. Dropping a column or touching foreign keys forces the
/// rebuild-copy-swap sequence.
fn rebuild_required(query: &Query) -> bool {
    !query.columns_to_drop().is_empty()
        || !query.foreign_keys_to_add().is_empty()
        || !query.foreign_keys_to_drop().is_empty()
}

fn sqlite_native(query: &Query, destination: &Model, f: &mut Formatter<'_>) {
    let serializer = f.serializer;
    let mut parts: Vec<String> = Vec::new();

    for column in query.columns() {
        let ColumnExpr::Field(field) = column else {
            continue;
        };
        parts.push(
            serializer.render_fragment(|f| fmt!(f, "ADD COLUMN " ColumnDef(field))),
        );
    }

    for index in query.indexes_to_add() {
        let mut part = String::from("CREATE");
        if index.unique {
            part.push_str(" UNIQUE");
        }
        part.push_str(" INDEX");
        if !index.name.is_empty() {
            part.push(' ');
            part.push_str(&index.name);
        }
        part.push_str(" on ");
        part.push_str(destination.table_name());
        part.push_str(" (");
        part.push_str(&index.key);
        part.push(')');
        parts.push(part);
    }

    for index in query.indexes_to_drop() {
        parts.push(format!("DROP INDEX {}", index.drop_name()));
    }

    if !query.columns().is_empty() {
        fmt!(f, "ALTER TABLE " destination.table_name() "\n");
    }

    f.dst.push_str(&parts.join(";\n"));
}

/// The rebuild emulator. The statement order is load-bearing: create the
/// replacement, copy the data, move the original out of the way, move
/// the replacement into place, then drop the original. Reordering any of
/// these corrupts the table.
fn sqlite_rebuild(query: &Query, destination: &Model, f: &mut Formatter<'_>) {
    let serializer = f.serializer;
    let original = destination.table_name();
    let temp_name = format!("temp_{original}");
    let old_name = format!("old_{original}");

    let dropped: HashSet<&str> = query
        .columns_to_drop()
        .iter()
        .map(|column| column.name.as_str())
        .collect();

    // The replacement schema: the destination's current columns minus
    // the requested drops, plus the requested additions. Foreign keys are
    // only the ones explicitly requested here; constraints this model
    // does not describe are not carried over.
    let mut temp = Model::new(&temp_name);
    if let Some(pk) = destination.primary_key() {
        if !dropped.contains(pk.name.as_str()) {
            temp.set_primary_key(pk.clone());
        }
    }
    for field in destination.fields() {
        if !dropped.contains(field.name.as_str()) {
            temp.add_field(field.clone());
        }
    }
    for column in query.columns() {
        if let ColumnExpr::Field(field) = column {
            temp.add_field(field.clone());
        }
    }

    let mut create = Query::create(&temp);
    for foreign_key in query.foreign_keys_to_add() {
        create = create.add_foreign_key(foreign_key.clone());
    }
    for index in query.indexes_to_add() {
        // Retargeted at the replacement table so the index survives the
        // rename swap.
        create = create.add_index(Index {
            target: temp_name.clone(),
            ..index.clone()
        });
    }

    f.dst.push_str(&serializer.serialize(&create));
    f.dst.push('\n');

    // Copy every surviving, non-auto-increment column across.
    let copy_columns: Vec<String> = temp
        .columns()
        .iter()
        .filter(|column| !column.auto_increment)
        .map(|column| column.name.clone())
        .collect();
    let copy = Query::select(copy_columns).from(destination);
    let insert = Query::insert(&temp).values(copy);
    f.dst.push_str(&serializer.serialize(&insert));
    f.dst.push_str(";\n");

    f.dst
        .push_str(&serializer.serialize(&Query::rename(original, &old_name)));
    f.dst.push_str(";\n");
    f.dst
        .push_str(&serializer.serialize(&Query::rename(&temp_name, original)));
    f.dst.push_str(";\n");
    f.dst
        .push_str(&serializer.serialize(&Query::drop(old_name.as_str())));
    f.dst.push(';');
}

/// The networked engine alters everything natively in one comma-joined
/// statement.
fn mysql_native(query: &Query, destination: &Model, f: &mut Formatter<'_>) {
    let serializer = f.serializer;

    fmt!(f, "ALTER TABLE " destination.table_name());

    let mut parts: Vec<String> = Vec::new();

    for column in query.columns() {
        let ColumnExpr::Field(field) = column else {
            continue;
        };
        let mut part = format!("ADD {} {}", field.name, field.ty);
        if field.length > 0 {
            part.push_str(&format!("({})", field.length));
        }
        part.push(' ');
        part.push_str(&serializer.render_fragment(|f| fmt!(f, Literal(&field.value))));
        part.push_str(" DEFAULT ");
        part.push_str(&serializer.render_fragment(|f| fmt!(f, Literal(&field.default))));
        parts.push(part);
    }

    for column in query.columns_to_drop() {
        parts.push(format!("DROP {}", column.name));
    }

    for index in query.indexes_to_add() {
        let mut part = String::from("ADD");
        if index.unique {
            part.push_str(" UNIQUE");
        }
        part.push_str(" INDEX");
        if !index.name.is_empty() {
            part.push(' ');
            part.push_str(&index.name);
        }
        part.push_str(&format!(" ({})", index.key));
        parts.push(part);
    }

    for index in query.indexes_to_drop() {
        parts.push(format!("DROP INDEX {}", index.drop_name()));
    }

    for foreign_key in query.foreign_keys_to_add() {
        let fragment =
            serializer.render_fragment(|f| fmt!(f, ForeignKeyDef(foreign_key)));
        parts.push(format!("ADD {fragment}"));
    }

    for foreign_key in query.foreign_keys_to_drop() {
        parts.push(format!("DROP FOREIGN KEY {}", foreign_key.name));
    }

    if !parts.is_empty() {
        fmt!(f, "\n");
        f.dst.push_str(&parts.join(","));
    }
}
