mod value;

use mysql_async::{prelude::Queryable, Conn, OptsBuilder, Params, Row};
use squill_core::{
    async_trait,
    driver::{self, Config, QueryResult},
    schema::{Column, Model},
    stmt::{Bind, Query, QueryKind},
    Error, Result,
};
use squill_sql::{Serializer, TableOptions};
use tracing::debug;

/// Networked MySQL backend.
#[derive(Debug)]
pub struct Connection {
    conn: Conn,
    options: TableOptions,
}

impl Connection {
    /// Opens a connection from the structured config: host/port,
    /// credentials and database select the server; engine, charset and
    /// collation feed the CREATE TABLE suffixes.
    pub async fn connect(config: &Config) -> Result<Self> {
        let mut builder = OptsBuilder::default()
            .ip_or_hostname(config.host.clone())
            .user(non_empty(&config.username))
            .pass(non_empty(&config.password))
            .db_name(non_empty(&config.database));

        if config.port != 0 {
            builder = builder.tcp_port(config.port);
        }

        let conn = Conn::new(builder)
            .await
            .map_err(Error::driver_operation_failed)?;

        Ok(Self {
            conn,
            options: TableOptions {
                engine: config.engine.clone(),
                charset: config.charset.clone(),
                collate: config.collate.clone(),
            },
        })
    }

    fn serializer(&self) -> Serializer {
        Serializer::mysql_with_options(self.options.clone())
    }

    async fn execute_select(&mut self, sql: &str, bindings: &[Bind]) -> Result<QueryResult> {
        let rows: Vec<Row> = if bindings.is_empty() {
            let mut result = self
                .conn
                .query_iter(sql)
                .await
                .map_err(Error::driver_operation_failed)?;
            result
                .collect()
                .await
                .map_err(Error::driver_operation_failed)?
        } else {
            let mut result = self
                .conn
                .exec_iter(sql, Params::Positional(to_params(bindings)))
                .await
                .map_err(Error::driver_operation_failed)?;
            result
                .collect()
                .await
                .map_err(Error::driver_operation_failed)?
        };

        rows_to_result(&rows)
    }

    async fn execute_command(&mut self, sql: &str, bindings: &[Bind]) -> Result<QueryResult> {
        let last_insert_id = if bindings.is_empty() {
            // Text protocol: tolerant of the trailing semicolons DDL
            // statements carry.
            let mut result = self
                .conn
                .query_iter(sql)
                .await
                .map_err(Error::driver_operation_failed)?;
            let last_insert_id = result.last_insert_id().unwrap_or(0) as i64;
            result
                .drop_result()
                .await
                .map_err(Error::driver_operation_failed)?;
            last_insert_id
        } else {
            let mut result = self
                .conn
                .exec_iter(sql, Params::Positional(to_params(bindings)))
                .await
                .map_err(Error::driver_operation_failed)?;
            let last_insert_id = result.last_insert_id().unwrap_or(0) as i64;
            result
                .drop_result()
                .await
                .map_err(Error::driver_operation_failed)?;
            last_insert_id
        };

        Ok(QueryResult::with_last_insert_id(last_insert_id))
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn to_params(bindings: &[Bind]) -> Vec<mysql_async::Value> {
    bindings
        .iter()
        .map(|bind| value::to_mysql(&bind.value))
        .collect()
}

fn rows_to_result(rows: &[Row]) -> Result<QueryResult> {
    let mut result = QueryResult::default();

    for row in rows {
        let mut model = Model::default();

        for (index, column) in row.columns_ref().iter().enumerate() {
            let ty = value::normalize_wire_type(column.column_type());
            let raw = row.as_ref(index).ok_or_else(|| {
                Error::driver_operation_failed(anyhow::anyhow!(
                    "row is missing column {index}"
                ))
            })?;
            let coerced = value::from_mysql(raw, ty)?;

            model.add_field(Column {
                name: column.name_str().to_string(),
                ty: ty.to_string(),
                value: coerced,
                ..Default::default()
            });
        }

        result.push_row(model);
    }

    Ok(result)
}

#[async_trait]
impl driver::Connection for Connection {
    fn to_sql(&self, query: &Query) -> String {
        self.serializer().serialize(query)
    }

    async fn execute(&mut self, query: &Query) -> Result<QueryResult> {
        let sql = self.to_sql(query);
        if sql.is_empty() {
            return Err(Error::empty_statement());
        }

        debug!(sql = %sql, bindings = query.bindings().len(), "executing statement");

        match query.kind() {
            Some(QueryKind::Select) => self.execute_select(&sql, query.bindings()).await,
            _ => self.execute_command(&sql, query.bindings()).await,
        }
    }

    async fn close(self: Box<Self>) -> Result<()> {
        self.conn
            .disconnect()
            .await
            .map_err(Error::driver_operation_failed)
    }
}
