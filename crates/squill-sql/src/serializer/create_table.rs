use super::{
    column_def::{ColumnDef, ForeignKeyDef, IndexDef},
    Comma, Delimited, Flavor, Formatter, ToSql,
};

use squill_core::{schema::Model, stmt::Query};

pub(super) struct CreateTableStmt<'a>(pub(super) &'a Query);

impl ToSql for CreateTableStmt<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let Some(destination) = self.0.destination() else {
            return;
        };

        match f.serializer.flavor {
            Flavor::Sqlite => sqlite_create(self.0, destination, f),
            Flavor::Mysql => mysql_create(self.0, destination, f),
        }
    }
}

/// Embedded dialect: the primary key is declared inline as a named
/// constraint, and requested indexes become standalone CREATE INDEX
/// statements appended after the closing `);`.
fn sqlite_create(query: &Query, destination: &Model, f: &mut Formatter<'_>) {
    fmt!(f, "CREATE TABLE ");
    if query.is_if_not_exists() {
        fmt!(f, "IF NOT EXISTS ");
    }
    fmt!(f, destination.table_name() " (");

    if let Some(pk) = destination.primary_key() {
        fmt!(
            f,
            pk.name.as_str() " " pk.ty.as_str()
            " CONSTRAINT " destination.table_name() "_pk primary key"
        );
        if pk.auto_increment {
            fmt!(f, " autoincrement");
        }
    }

    if !destination.fields().is_empty() {
        if destination.primary_key().is_some() {
            fmt!(f, ", ");
        }
        fmt!(f, Comma(destination.fields().iter().map(ColumnDef)));
    }

    if !query.foreign_keys_to_add().is_empty() {
        fmt!(
            f,
            ",\n" Delimited(query.foreign_keys_to_add().iter().map(ForeignKeyDef), ",\n")
        );
    }

    fmt!(f, ");");

    if !query.indexes_to_add().is_empty() {
        fmt!(
            f,
            " " Delimited(query.indexes_to_add().iter().map(IndexDef), "\n")
        );
    }
}

/// Networked dialect: columns are comma-joined with a trailing
/// `PRIMARY KEY (...)` clause, constraints and keys are inline, and the
/// statement closes with the configured table options.
fn mysql_create(query: &Query, destination: &Model, f: &mut Formatter<'_>) {
    fmt!(f, "CREATE TABLE ");
    if query.is_if_not_exists() {
        fmt!(f, "IF NOT EXISTS ");
    }
    fmt!(f, destination.table_name() " (");

    if let Some(pk) = destination.primary_key() {
        ColumnDef(pk).to_sql(f);
        if !destination.fields().is_empty() {
            fmt!(f, ", ");
        }
    }

    if !destination.fields().is_empty() {
        fmt!(f, Comma(destination.fields().iter().map(ColumnDef)));
    }

    if let Some(pk) = destination.primary_key() {
        fmt!(f, ",\nPRIMARY KEY (" pk.name.as_str() ")");
    }

    if !query.foreign_keys_to_add().is_empty() {
        fmt!(
            f,
            ",\n" Delimited(query.foreign_keys_to_add().iter().map(ForeignKeyDef), ",\n")
        );
    }

    if !query.indexes_to_add().is_empty() {
        fmt!(
            f,
            ",\n" Delimited(query.indexes_to_add().iter().map(IndexDef), ",\n")
        );
    }

    fmt!(f, ")");

    let serializer = f.serializer;
    let options = &serializer.options;
    if !options.engine.is_empty() {
        fmt!(f, " ENGINE=" options.engine.as_str());
    }
    if !options.charset.is_empty() {
        fmt!(f, " DEFAULT CHARSET=" options.charset.as_str());
    }
    if !options.collate.is_empty() {
        fmt!(f, " COLLATE=" options.collate.as_str());
    }

    fmt!(f, ";");
}
