use super::{Formatter, ToSql};

/// Backtick-quoted identifier.
pub(super) struct Ident<'a>(pub(super) &'a str);

impl ToSql for Ident<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        f.dst.push('`');
        f.dst.push_str(self.0);
        f.dst.push('`');
    }
}
