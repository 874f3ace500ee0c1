use super::{value::Literal, Flavor, Formatter, ToSql};

use squill_core::schema::{Column, ForeignKey, Index};

/// A full column definition inside CREATE TABLE or an add-column ALTER.
pub(super) struct ColumnDef<'a>(pub(super) &'a Column);

impl ToSql for ColumnDef<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let column = self.0;

        match f.serializer.flavor {
            Flavor::Sqlite => {
                fmt!(f, column.name.as_str() " " column.ty.as_str());

                if column.unsigned {
                    fmt!(f, " unsigned");
                }

                if !column.default.is_null() {
                    fmt!(f, " DEFAULT " Literal(&column.default));
                }

                if column.nullable {
                    fmt!(f, " NULL");
                } else {
                    fmt!(f, " NOT NULL");
                }

                if column.auto_increment {
                    fmt!(f, " autoincrement");
                }
            }
            Flavor::Mysql => {
                fmt!(f, column.name.as_str() " " column.ty.as_str());

                if column.length > 0 {
                    fmt!(f, "(" column.length ")");
                }

                if column.unsigned {
                    fmt!(f, " unsigned");
                }

                if !column.default.is_null() {
                    fmt!(f, " DEFAULT " Literal(&column.default));
                }

                if column.nullable {
                    fmt!(f, " NULL");
                } else {
                    fmt!(f, " NOT NULL");
                }

                if column.auto_increment {
                    fmt!(f, " AUTO_INCREMENT");
                }
            }
        }
    }
}

/// A foreign-key constraint fragment. The embedded dialect spreads the
/// clause across lines inside CREATE TABLE; the networked dialect uses
/// the single-line form shared by CREATE and ALTER.
pub(super) struct ForeignKeyDef<'a>(pub(super) &'a ForeignKey);

impl ToSql for ForeignKeyDef<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let fk = self.0;

        match f.serializer.flavor {
            Flavor::Sqlite => {
                if !fk.name.is_empty() {
                    fmt!(f, "CONSTRAINT " fk.name.as_str() "\n");
                }

                fmt!(
                    f,
                    "FOREIGN KEY (" fk.with.key.as_str() ")\n"
                    " REFERENCES " fk.target.table.as_str() " (" fk.target.key.as_str() ")\n"
                    "ON DELETE " fk.on_delete.keyword() "\n"
                    "ON UPDATE " fk.on_update.keyword()
                );
            }
            Flavor::Mysql => {
                if !fk.name.is_empty() {
                    fmt!(f, "CONSTRAINT " fk.name.as_str() " ");
                }

                fmt!(
                    f,
                    "FOREIGN KEY (" fk.with.key.as_str() ")"
                    " REFERENCES " fk.target.table.as_str() " (" fk.target.key.as_str() ")"
                    " ON DELETE " fk.on_delete.keyword()
                    " ON UPDATE " fk.on_update.keyword()
                );
            }
        }
    }
}

/// An index fragment inside CREATE TABLE: the embedded dialect emits a
/// standalone CREATE INDEX statement appended after the table, the
/// networked dialect an inline KEY clause.
pub(super) struct IndexDef<'a>(pub(super) &'a Index);

impl ToSql for IndexDef<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let index = self.0;

        match f.serializer.flavor {
            Flavor::Sqlite => {
                fmt!(f, "CREATE ");
                if index.unique {
                    fmt!(f, "UNIQUE ");
                }
                fmt!(
                    f,
                    "INDEX " index.name.as_str() " \nON " index.target.as_str()
                    " (" index.key.as_str() ");"
                );
            }
            Flavor::Mysql => {
                if index.unique {
                    fmt!(f, "UNIQUE ");
                }
                fmt!(f, "KEY " index.name.as_str() " (" index.key.as_str() ")");
            }
        }
    }
}
