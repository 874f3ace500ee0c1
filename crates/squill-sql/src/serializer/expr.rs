use super::{Comma, Formatter, ToSql};

use squill_core::stmt::{Join, Limit, Operand, OrderBy, Where};

/// `WHERE` plus the predicate list. Predicates are joined left to right;
/// every predicate after the first is preceded by its own kind keyword.
pub(super) struct WhereClause<'a>(pub(super) &'a [Where]);

impl ToSql for WhereClause<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, "WHERE ");

        for (i, predicate) in self.0.iter().enumerate() {
            if i > 0 {
                fmt!(f, " " predicate.kind.keyword() " ");
            }
            predicate.to_sql(f);
        }
    }
}

impl ToSql for &Where {
    fn to_sql(self, f: &mut Formatter<'_>) {
        // A node is parenthesized only when both of its sides are nested
        // nodes; a single nested side stays bare.
        let parenthesized = matches!(self.first, Operand::Nested(_))
            && matches!(self.second, Operand::Nested(_));

        if parenthesized {
            f.dst.push('(');
        }

        match &self.first {
            Operand::Nested(inner) => inner.as_ref().to_sql(f),
            operand => fmt!(f, operand " " self.operator.as_str() " "),
        }

        match &self.second {
            Operand::Nested(inner) => {
                fmt!(f, " " inner.kind.keyword() " ");
                inner.as_ref().to_sql(f);
            }
            operand => operand.to_sql(f),
        }

        if parenthesized {
            f.dst.push(')');
        }
    }
}

impl ToSql for &Operand {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            Operand::Expr(expr) => f.dst.push_str(expr),
            Operand::Placeholder => f.dst.push('?'),
            // A bind that was never registered renders its token; the
            // statement is malformed either way.
            Operand::Bind(bind) => f.dst.push_str(&bind.field),
            Operand::Nested(inner) => inner.as_ref().to_sql(f),
        }
    }
}

pub(super) struct JoinClause<'a>(pub(super) &'a [Join]);

impl ToSql for JoinClause<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        for (i, join) in self.0.iter().enumerate() {
            if i > 0 {
                f.dst.push(' ');
            }
            join.to_sql(f);
        }
    }
}

impl ToSql for &Join {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(
            f,
            self.kind.keyword() " JOIN " self.target.table.as_str()
            " ON (" self.target.table.as_str() "." self.target.key.as_str()
            " " self.condition.as_str()
            " " self.with.table.as_str() "." self.with.key.as_str() ")"
        );
    }
}

pub(super) struct OrderByClause<'a>(pub(super) &'a [OrderBy]);

impl ToSql for OrderByClause<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, "ORDER BY " Comma(self.0));
    }
}

impl ToSql for &OrderBy {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, self.column.as_str() " " self.direction.keyword());
    }
}

pub(super) struct GroupByClause<'a>(pub(super) &'a [String]);

impl ToSql for GroupByClause<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, "GROUP BY " Comma(self.0.iter().map(String::as_str)));
    }
}

/// LIMIT with one or two bounds. The caller skips the clause entirely
/// when both bounds are zero.
pub(super) struct LimitClause(pub(super) Limit);

impl ToSql for LimitClause {
    fn to_sql(self, f: &mut Formatter<'_>) {
        if self.0.from == 0 && self.0.to > 0 {
            fmt!(f, "LIMIT " self.0.to);
        } else {
            fmt!(f, "LIMIT " self.0.from ", " self.0.to);
        }
    }
}
