mod db;
pub use db::connect;

pub use squill_core::{driver, schema, stmt, Error, Result};
pub use squill_sql::{Serializer, TableOptions};

pub mod prelude {
    pub use crate::driver::{Config, Connection, DatabaseKind, QueryResult};
    pub use crate::schema::{Column, ForeignKey, Index, Model, RefAction};
    pub use crate::stmt::{
        Bind, Direction, Join, JoinKind, Limit, Operand, OrderBy, Query, Reference, Value, Where,
        WhereKind,
    };
    pub use crate::{connect, Serializer};
}
