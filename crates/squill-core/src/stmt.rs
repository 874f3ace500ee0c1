mod bind;
pub use bind::Bind;

mod column_expr;
pub use column_expr::{ColumnExpr, IntoColumns};

mod join;
pub use join::{Join, JoinKind, Reference};

mod limit;
pub use limit::Limit;

mod order_by;
pub use order_by::{Direction, OrderBy};

mod predicate;
pub use predicate::{Operand, Where, WhereKind};

mod query;
pub use query::{IntoModel, Query, QueryKind};

mod value;
pub use value::Value;
