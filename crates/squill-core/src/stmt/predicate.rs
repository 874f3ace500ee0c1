use super::Bind;

/// How a predicate combines with the one before it, and how a nested
/// second side announces itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WhereKind {
    #[default]
    And,
    Or,
    Not,
}

impl WhereKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            WhereKind::And => "AND",
            WhereKind::Or => "OR",
            WhereKind::Not => "NOT",
        }
    }
}

/// One side of a predicate.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// A column reference or literal fragment, rendered verbatim.
    Expr(String),
    /// A deferred value. Replaced by [`Operand::Placeholder`] when the
    /// predicate is attached to a statement.
    Bind(Bind),
    /// The token left behind once a bind has been registered.
    Placeholder,
    /// A nested predicate.
    Nested(Box<Where>),
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Operand::Expr(value.to_string())
    }
}

impl From<String> for Operand {
    fn from(value: String) -> Self {
        Operand::Expr(value)
    }
}

impl From<Bind> for Operand {
    fn from(value: Bind) -> Self {
        Operand::Bind(value)
    }
}

impl From<Where> for Operand {
    fn from(value: Where) -> Self {
        Operand::Nested(Box::new(value))
    }
}

/// A WHERE predicate. Either side may itself be a predicate, nesting to
/// arbitrary depth. A node is parenthesized in output only when both
/// sides are nested nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Where {
    pub first: Operand,
    pub operator: String,
    pub second: Operand,
    pub kind: WhereKind,
}

impl Where {
    pub fn new(
        first: impl Into<Operand>,
        operator: impl Into<String>,
        second: impl Into<Operand>,
    ) -> Self {
        Self {
            first: first.into(),
            operator: operator.into(),
            second: second.into(),
            kind: WhereKind::And,
        }
    }

    pub fn with_kind(mut self, kind: WhereKind) -> Self {
        self.kind = kind;
        self
    }
}
