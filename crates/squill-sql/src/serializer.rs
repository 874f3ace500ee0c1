#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Delimited};

mod flavor;
use flavor::Flavor;

mod ident;
use ident::Ident;

// Fragment serializers
mod alter_table;
mod column_def;
mod create_table;
mod expr;
mod statement;
mod value;

use squill_core::stmt::Query;

/// Table-level options appended to networked-engine CREATE TABLE
/// statements. Sourced from the connection configuration; empty values
/// emit nothing.
#[derive(Debug, Clone, Default)]
pub struct TableOptions {
    pub engine: String,
    pub charset: String,
    pub collate: String,
}

/// Serializes a statement to SQL text for one backend dialect.
///
/// The serializer is a pure text renderer: bindings are fixed by the
/// builder at build time, and a statement the dialect cannot express (or
/// that is missing its destination) renders to the empty string, which
/// execution turns into an error.
#[derive(Debug)]
pub struct Serializer {
    /// The database flavor handles the differences between SQL dialects
    /// and supported features.
    flavor: Flavor,

    /// CREATE TABLE suffixes for the networked engine.
    options: TableOptions,
}

struct Formatter<'a> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,
}

impl Serializer {
    pub fn serialize(&self, query: &Query) -> String {
        let mut ret = String::new();

        let mut f = Formatter {
            serializer: self,
            dst: &mut ret,
        };

        query.to_sql(&mut f);

        ret
    }

    fn is_sqlite(&self) -> bool {
        matches!(self.flavor, Flavor::Sqlite)
    }

    fn is_mysql(&self) -> bool {
        matches!(self.flavor, Flavor::Mysql)
    }

    /// Renders a fragment into its own string, for clause lists that are
    /// joined with statement-level separators.
    fn render_fragment(&self, write: impl FnOnce(&mut Formatter<'_>)) -> String {
        let mut out = String::new();
        let mut f = Formatter {
            serializer: self,
            dst: &mut out,
        };
        write(&mut f);
        out
    }
}
