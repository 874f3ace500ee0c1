use crate::schema::Column;

/// An output column: either a bare name passed through verbatim or a full
/// column descriptor contributing its name (and, for ALTER adds, its
/// definition).
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnExpr {
    Name(String),
    Field(Column),
}

impl ColumnExpr {
    pub fn name(&self) -> &str {
        match self {
            ColumnExpr::Name(name) => name,
            ColumnExpr::Field(column) => &column.name,
        }
    }

    pub fn as_field(&self) -> Option<&Column> {
        match self {
            ColumnExpr::Field(column) => Some(column),
            ColumnExpr::Name(_) => None,
        }
    }
}

impl From<&str> for ColumnExpr {
    fn from(value: &str) -> Self {
        ColumnExpr::Name(value.to_string())
    }
}

impl From<String> for ColumnExpr {
    fn from(value: String) -> Self {
        ColumnExpr::Name(value)
    }
}

impl From<Column> for ColumnExpr {
    fn from(value: Column) -> Self {
        ColumnExpr::Field(value)
    }
}

/// Column-list argument for `Query::select`: nothing (select `*`), one
/// name, or an ordered list of names or descriptors.
pub trait IntoColumns {
    fn into_columns(self) -> Vec<ColumnExpr>;
}

impl IntoColumns for () {
    fn into_columns(self) -> Vec<ColumnExpr> {
        Vec::new()
    }
}

impl IntoColumns for &str {
    fn into_columns(self) -> Vec<ColumnExpr> {
        vec![self.into()]
    }
}

impl IntoColumns for String {
    fn into_columns(self) -> Vec<ColumnExpr> {
        vec![self.into()]
    }
}

impl IntoColumns for Column {
    fn into_columns(self) -> Vec<ColumnExpr> {
        vec![self.into()]
    }
}

impl<T> IntoColumns for Vec<T>
where
    T: Into<ColumnExpr>,
{
    fn into_columns(self) -> Vec<ColumnExpr> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<const N: usize> IntoColumns for [&str; N] {
    fn into_columns(self) -> Vec<ColumnExpr> {
        self.iter().map(|name| (*name).into()).collect()
    }
}

impl IntoColumns for &[&str] {
    fn into_columns(self) -> Vec<ColumnExpr> {
        self.iter().map(|name| (*name).into()).collect()
    }
}
