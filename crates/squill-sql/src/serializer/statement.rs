use super::{
    alter_table::AlterTableStmt,
    create_table::CreateTableStmt,
    expr::{GroupByClause, JoinClause, LimitClause, OrderByClause, WhereClause},
    Comma, Flavor, Formatter, Ident, ToSql,
};

use squill_core::stmt::{ColumnExpr, Query, QueryKind};

impl ToSql for &Query {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let Some(kind) = self.kind() else {
            // No statement kind was ever set; the empty output is turned
            // into an error at execute time.
            return;
        };

        match kind {
            QueryKind::Create => CreateTableStmt(self).to_sql(f),
            QueryKind::Alter => AlterTableStmt(self).to_sql(f),
            QueryKind::Drop => DropStmt(self).to_sql(f),
            QueryKind::Rename => RenameStmt(self).to_sql(f),
            QueryKind::Select => SelectStmt(self).to_sql(f),
            QueryKind::Insert => InsertStmt(self).to_sql(f),
            QueryKind::Update => UpdateStmt(self).to_sql(f),
            QueryKind::Delete => DeleteStmt(self).to_sql(f),
            QueryKind::BeginTransaction => match f.serializer.flavor {
                Flavor::Sqlite => fmt!(f, "BEGIN TRANSACTION;"),
                Flavor::Mysql => fmt!(f, "START TRANSACTION;"),
            },
            QueryKind::CommitTransaction => fmt!(f, "COMMIT;"),
            QueryKind::RollbackTransaction => fmt!(f, "ROLLBACK;"),
        }
    }
}

/// The projected column list of a SELECT: `*` when empty, otherwise the
/// comma-joined names (bare names pass through verbatim, descriptors
/// contribute their name only).
struct SelectColumns<'a>(&'a [ColumnExpr]);

impl ToSql for SelectColumns<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        if self.0.is_empty() {
            fmt!(f, "*");
        } else {
            fmt!(f, Comma(self.0.iter().map(ColumnExpr::name)));
        }
    }
}

/// Appends the optional JOIN and WHERE clauses shared by SELECT, UPDATE
/// and DELETE, each preceded by a single space.
fn joins_and_filters(query: &Query, f: &mut Formatter<'_>) {
    if !query.joins().is_empty() {
        fmt!(f, " " JoinClause(query.joins()));
    }

    if !query.filters().is_empty() {
        fmt!(f, " " WhereClause(query.filters()));
    }
}

/// Appends the optional GROUP BY, ORDER BY and LIMIT clauses shared by
/// SELECT and DELETE.
fn grouping_and_bounds(query: &Query, f: &mut Formatter<'_>) {
    if !query.group_bys().is_empty() {
        fmt!(f, " " GroupByClause(query.group_bys()));
    }

    if !query.order_bys().is_empty() {
        fmt!(f, " " OrderByClause(query.order_bys()));
    }

    if !query.limit_bounds().is_unset() {
        fmt!(f, " " LimitClause(query.limit_bounds()));
    }
}

struct SelectStmt<'a>(&'a Query);

impl ToSql for SelectStmt<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let Some(destination) = self.0.destination() else {
            return;
        };

        fmt!(
            f,
            "SELECT " SelectColumns(self.0.columns()) " FROM " destination.table_name()
        );

        joins_and_filters(self.0, f);
        grouping_and_bounds(self.0, f);
    }
}

struct InsertStmt<'a>(&'a Query);

impl ToSql for InsertStmt<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let Some(destination) = self.0.destination() else {
            return;
        };

        // Auto-increment columns never appear in the column list; the
        // backend assigns them.
        let names = self.0.columns().iter().filter_map(|column| match column {
            ColumnExpr::Field(field) if field.auto_increment => None,
            column => Some(column.name()),
        });

        fmt!(
            f,
            "INSERT INTO " destination.table_name() " (" Comma(names) ")"
        );

        match self.0.values_payload() {
            Some(nested) => {
                // `INSERT INTO t (...) SELECT ...` — the payload is a
                // full nested statement.
                fmt!(f, " ");
                nested.to_sql(f);
            }
            None => {
                let placeholders = self.0.bindings().iter().map(|bind| bind.field.as_str());
                fmt!(f, " VALUES (" Comma(placeholders) ")");
            }
        }
    }
}

struct UpdateStmt<'a>(&'a Query);

impl ToSql for UpdateStmt<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let Some(destination) = self.0.destination() else {
            return;
        };

        fmt!(f, "UPDATE " destination.table_name() " SET ");

        let mut separator = "";
        for (i, column) in self.0.columns().iter().enumerate() {
            let Some(field) = column.as_field() else {
                continue;
            };
            if field.primary_key {
                continue;
            }

            // Assignments pair column i with binding i; a column with no
            // corresponding non-empty binding is skipped.
            let Some(bind) = self.0.bindings().get(i) else {
                continue;
            };
            if bind.field.is_empty() {
                continue;
            }

            fmt!(f, separator field.name.as_str() " = " bind.field.as_str());
            separator = ", ";
        }

        joins_and_filters(self.0, f);
    }
}

struct DeleteStmt<'a>(&'a Query);

impl ToSql for DeleteStmt<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let Some(destination) = self.0.destination() else {
            return;
        };

        fmt!(f, "DELETE FROM " destination.table_name());

        joins_and_filters(self.0, f);
        grouping_and_bounds(self.0, f);
    }
}

struct DropStmt<'a>(&'a Query);

impl ToSql for DropStmt<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let Some(destination) = self.0.destination() else {
            return;
        };

        fmt!(f, "DROP TABLE " destination.table_name());
    }
}

struct RenameStmt<'a>(&'a Query);

impl ToSql for RenameStmt<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let Some(destination) = self.0.destination() else {
            return;
        };
        let Some(new_table_name) = self.0.new_table_name() else {
            return;
        };

        fmt!(
            f,
            "ALTER TABLE " Ident(destination.table_name())
            " RENAME TO " Ident(new_table_name)
        );
    }
}
