use super::{Formatter, ToSql};

use squill_core::stmt::Value;

/// SQL literal form of a value, used by DEFAULT clauses and inline
/// literals: integers in decimal, strings double-quote wrapped, booleans
/// as `true`/`false`, null as `NULL`.
pub(super) struct Literal<'a>(pub(super) &'a Value);

impl ToSql for Literal<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self.0 {
            Value::Null => f.dst.push_str("NULL"),
            Value::I64(v) => (*v).to_sql(f),
            Value::Text(s) => {
                f.dst.push('"');
                f.dst.push_str(s);
                f.dst.push('"');
            }
            Value::Bool(b) => f.dst.push_str(if *b { "true" } else { "false" }),
        }
    }
}
