use std::mem;

use super::{
    Bind, ColumnExpr, Direction, IntoColumns, Join, Limit, Operand, OrderBy, Where,
};
use crate::schema::{Column, ForeignKey, Index, Model};

/// The statement kind captured by a [`Query`]. Exactly one kind is active
/// per statement; fields irrelevant to that kind are simply never read by
/// the corresponding serializer branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    Create,
    Alter,
    Drop,
    Rename,
    Select,
    Insert,
    Update,
    Delete,
    BeginTransaction,
    CommitTransaction,
    RollbackTransaction,
}

/// Destination argument for the builder: a full model, or a bare table
/// name wrapped into a minimal one.
pub trait IntoModel {
    fn into_model(self) -> Model;
}

impl IntoModel for Model {
    fn into_model(self) -> Model {
        self
    }
}

impl IntoModel for &Model {
    fn into_model(self) -> Model {
        self.clone()
    }
}

impl IntoModel for &str {
    fn into_model(self) -> Model {
        Model::new(self)
    }
}

impl IntoModel for String {
    fn into_model(self) -> Model {
        Model::new(self)
    }
}

/// The accumulated intent of one SQL statement.
///
/// A query is built through chained mutators, consumed once by a
/// serializer and execution adapter, then discarded. The mutators perform
/// no I/O and no validation: an incompletely specified statement renders
/// to empty SQL and is rejected at execute time.
#[derive(Debug, Clone, Default)]
pub struct Query {
    kind: Option<QueryKind>,
    destination: Option<Model>,
    new_table_name: Option<String>,
    columns: Vec<ColumnExpr>,
    columns_drop: Vec<Column>,
    if_not_exists: bool,
    indexes_add: Vec<Index>,
    indexes_drop: Vec<Index>,
    foreign_keys_add: Vec<ForeignKey>,
    foreign_keys_drop: Vec<ForeignKey>,
    filters: Vec<Where>,
    joins: Vec<Join>,
    order_bys: Vec<OrderBy>,
    group_bys: Vec<String>,
    bindings: Vec<Bind>,
    values: Option<Box<Query>>,
    limit: Limit,
}

impl Query {
    /// A CREATE TABLE statement for the model's schema.
    pub fn create(model: impl IntoModel) -> Self {
        Self {
            kind: Some(QueryKind::Create),
            destination: Some(model.into_model()),
            ..Default::default()
        }
    }

    /// A DROP TABLE statement.
    pub fn drop(model: impl IntoModel) -> Self {
        Self {
            kind: Some(QueryKind::Drop),
            destination: Some(model.into_model()),
            ..Default::default()
        }
    }

    /// An ALTER TABLE statement. Nothing is copied from the model's
    /// schema; only explicit `add_column`/`drop_column`/index/foreign-key
    /// calls populate the change lists. On the embedded backend, any
    /// change beyond add-column and index add/drop is emulated by a
    /// table rebuild that carries over only the columns the destination
    /// model currently describes and the constraints explicitly
    /// requested here.
    pub fn alter(model: impl IntoModel) -> Self {
        Self {
            kind: Some(QueryKind::Alter),
            destination: Some(model.into_model()),
            ..Default::default()
        }
    }

    /// Renames `table` to `new_table_name`.
    pub fn rename(table: &str, new_table_name: &str) -> Self {
        Self {
            kind: Some(QueryKind::Rename),
            destination: Some(Model::new(table)),
            new_table_name: Some(new_table_name.to_string()),
            ..Default::default()
        }
    }

    /// A SELECT statement. An empty column list selects `*`. The
    /// destination is supplied separately through [`Query::from`].
    pub fn select(columns: impl IntoColumns) -> Self {
        Self {
            kind: Some(QueryKind::Select),
            columns: columns.into_columns(),
            ..Default::default()
        }
    }

    /// An INSERT statement over the model's columns. Each column is
    /// registered together with a bind of its current value, except an
    /// auto-increment column whose value is unset, which stays out of
    /// both lists.
    pub fn insert(model: impl IntoModel) -> Self {
        let model = model.into_model();
        let mut query = Self {
            kind: Some(QueryKind::Insert),
            ..Default::default()
        };

        for column in model.columns() {
            if column.auto_increment && column.value.is_null() {
                continue;
            }
            query.bindings.push(Bind {
                field: "?".to_string(),
                value: column.value.clone(),
            });
            query.columns.push(ColumnExpr::Field(column));
        }

        query.destination = Some(model);
        query
    }

    /// An UPDATE statement over the model's columns. Primary-key fields
    /// are never written through a SET clause.
    pub fn update(model: impl IntoModel) -> Self {
        let model = model.into_model();
        let mut query = Self {
            kind: Some(QueryKind::Update),
            ..Default::default()
        };

        for column in model.columns() {
            if column.primary_key {
                continue;
            }
            query.bindings.push(Bind {
                field: "?".to_string(),
                value: column.value.clone(),
            });
            query.columns.push(ColumnExpr::Field(column));
        }

        query.destination = Some(model);
        query
    }

    /// A DELETE statement. The destination is supplied through
    /// [`Query::from`].
    pub fn delete() -> Self {
        Self {
            kind: Some(QueryKind::Delete),
            ..Default::default()
        }
    }

    pub fn begin_transaction() -> Self {
        Self {
            kind: Some(QueryKind::BeginTransaction),
            ..Default::default()
        }
    }

    pub fn commit_transaction() -> Self {
        Self {
            kind: Some(QueryKind::CommitTransaction),
            ..Default::default()
        }
    }

    pub fn rollback_transaction() -> Self {
        Self {
            kind: Some(QueryKind::RollbackTransaction),
            ..Default::default()
        }
    }

    /// Sets the destination table. The model is copied, so later
    /// mutations of the caller's instance do not alter this statement.
    pub fn from(mut self, model: impl IntoModel) -> Self {
        self.destination = Some(model.into_model());
        self
    }

    /// Requests `CREATE TABLE IF NOT EXISTS`.
    pub fn if_not_exists(mut self) -> Self {
        self.if_not_exists = true;
        self
    }

    /// Appends a predicate. Bind operands anywhere in the predicate tree
    /// are replaced by placeholders, depth first, and their values
    /// registered on the statement in discovery order.
    pub fn filter(mut self, mut predicate: Where) -> Self {
        Self::register_binds(&mut predicate, &mut self.bindings);
        self.filters.push(predicate);
        self
    }

    fn register_binds(node: &mut Where, bindings: &mut Vec<Bind>) {
        Self::register_operand(&mut node.first, bindings);
        Self::register_operand(&mut node.second, bindings);
    }

    fn register_operand(operand: &mut Operand, bindings: &mut Vec<Bind>) {
        match operand {
            Operand::Bind(_) => {
                if let Operand::Bind(bind) = mem::replace(operand, Operand::Placeholder) {
                    bindings.push(bind);
                }
            }
            Operand::Nested(inner) => Self::register_binds(inner, bindings),
            Operand::Expr(_) | Operand::Placeholder => {}
        }
    }

    pub fn join(mut self, join: Join) -> Self {
        self.joins.push(join);
        self
    }

    pub fn order_by(mut self, column: impl Into<String>, direction: Direction) -> Self {
        self.order_bys.push(OrderBy {
            column: column.into(),
            direction,
        });
        self
    }

    pub fn group_by(mut self, column: impl Into<String>) -> Self {
        self.group_bys.push(column.into());
        self
    }

    pub fn limit(mut self, limit: Limit) -> Self {
        self.limit = limit;
        self
    }

    /// Overrides the VALUES payload with a nested statement, turning an
    /// INSERT into `INSERT INTO t (...) <rendered nested statement>`.
    pub fn values(mut self, values: Query) -> Self {
        self.values = Some(Box::new(values));
        self
    }

    /// Registers a column to add (ALTER) or project (SELECT).
    pub fn add_column(mut self, column: Column) -> Self {
        self.columns.push(ColumnExpr::Field(column));
        self
    }

    /// Registers a column to drop in an ALTER statement.
    pub fn drop_column(mut self, column: Column) -> Self {
        self.columns_drop.push(column);
        self
    }

    pub fn add_foreign_key(mut self, foreign_key: ForeignKey) -> Self {
        self.foreign_keys_add.push(foreign_key);
        self
    }

    pub fn drop_foreign_key(mut self, foreign_key: ForeignKey) -> Self {
        self.foreign_keys_drop.push(foreign_key);
        self
    }

    pub fn add_index(mut self, index: Index) -> Self {
        self.indexes_add.push(index);
        self
    }

    pub fn drop_index(mut self, index: Index) -> Self {
        self.indexes_drop.push(index);
        self
    }

    /// Appends a bind directly, outside of predicate processing.
    pub fn add_binding(mut self, bind: Bind) -> Self {
        self.bindings.push(bind);
        self
    }

    // Read-only accessors: the immutable view consumed by the dialect
    // serializers and execution adapters.

    pub fn kind(&self) -> Option<QueryKind> {
        self.kind
    }

    pub fn destination(&self) -> Option<&Model> {
        self.destination.as_ref()
    }

    pub fn new_table_name(&self) -> Option<&str> {
        self.new_table_name.as_deref()
    }

    pub fn columns(&self) -> &[ColumnExpr] {
        &self.columns
    }

    pub fn columns_to_drop(&self) -> &[Column] {
        &self.columns_drop
    }

    pub fn is_if_not_exists(&self) -> bool {
        self.if_not_exists
    }

    pub fn indexes_to_add(&self) -> &[Index] {
        &self.indexes_add
    }

    pub fn indexes_to_drop(&self) -> &[Index] {
        &self.indexes_drop
    }

    pub fn foreign_keys_to_add(&self) -> &[ForeignKey] {
        &self.foreign_keys_add
    }

    pub fn foreign_keys_to_drop(&self) -> &[ForeignKey] {
        &self.foreign_keys_drop
    }

    pub fn filters(&self) -> &[Where] {
        &self.filters
    }

    pub fn joins(&self) -> &[Join] {
        &self.joins
    }

    pub fn order_bys(&self) -> &[OrderBy] {
        &self.order_bys
    }

    pub fn group_bys(&self) -> &[String] {
        &self.group_bys
    }

    pub fn limit_bounds(&self) -> Limit {
        self.limit
    }

    pub fn bindings(&self) -> &[Bind] {
        &self.bindings
    }

    pub fn values_payload(&self) -> Option<&Query> {
        self.values.as_deref()
    }
}
