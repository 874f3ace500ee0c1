mod value;
use value::Value;

use std::path::Path;

use rusqlite::Connection as RusqliteConnection;
use squill_core::{
    async_trait,
    driver::{self, Config, QueryResult},
    schema::{normalize_column_type, Column, Model},
    stmt::{Bind, Query, QueryKind},
    Error, Result,
};
use squill_sql::Serializer;
use tracing::debug;

/// Embedded SQLite backend.
///
/// `Config::host` names the database file, which must already exist —
/// this adapter never creates databases implicitly.
#[derive(Debug)]
pub struct Connection {
    conn: RusqliteConnection,
}

impl Connection {
    pub fn connect(config: &Config) -> Result<Self> {
        let path = Path::new(&config.host);
        if !path.exists() {
            return Err(Error::connect(format!(
                "database file not found: {}",
                config.host
            )));
        }

        let conn = RusqliteConnection::open(path).map_err(Error::driver_operation_failed)?;
        Ok(Self { conn })
    }

    fn execute_select(&mut self, sql: &str, bindings: &[Bind]) -> Result<QueryResult> {
        let mut stmt = self.conn.prepare(sql).map_err(Error::driver_operation_failed)?;

        // Collect names and normalized declared types up front; the
        // borrow cannot outlive the row iteration below.
        let columns: Vec<(String, &'static str)> = stmt
            .columns()
            .iter()
            .map(|column| {
                (
                    column.name().to_string(),
                    normalize_column_type(column.decl_type().unwrap_or("")),
                )
            })
            .collect();

        let params: Vec<Value> = bindings
            .iter()
            .map(|bind| Value::from(bind.value.clone()))
            .collect();

        let mut rows = stmt
            .query(rusqlite::params_from_iter(params.iter()))
            .map_err(Error::driver_operation_failed)?;

        let mut result = QueryResult::default();
        loop {
            match rows.next() {
                Ok(Some(row)) => {
                    let mut model = Model::default();
                    for (index, (name, ty)) in columns.iter().enumerate() {
                        let raw: rusqlite::types::Value =
                            row.get(index).map_err(Error::driver_operation_failed)?;
                        let value = value::from_sql(raw, ty)?;
                        model.add_field(Column {
                            name: name.clone(),
                            ty: (*ty).to_string(),
                            value,
                            ..Default::default()
                        });
                    }
                    result.push_row(model);
                }
                Ok(None) => break,
                Err(err) => return Err(Error::driver_operation_failed(err)),
            }
        }

        Ok(result)
    }

    fn execute_command(&mut self, sql: &str, bindings: &[Bind]) -> Result<QueryResult> {
        if bindings.is_empty() {
            // DDL can span several statements (CREATE plus its indexes,
            // the ALTER rebuild sequence); run them as a batch.
            self.conn
                .execute_batch(sql)
                .map_err(Error::driver_operation_failed)?;
        } else {
            let params: Vec<Value> = bindings
                .iter()
                .map(|bind| Value::from(bind.value.clone()))
                .collect();
            self.conn
                .execute(sql, rusqlite::params_from_iter(params.iter()))
                .map_err(Error::driver_operation_failed)?;
        }

        Ok(QueryResult::with_last_insert_id(
            self.conn.last_insert_rowid(),
        ))
    }
}

#[async_trait]
impl driver::Connection for Connection {
    fn to_sql(&self, query: &Query) -> String {
        Serializer::sqlite().serialize(query)
    }

    async fn execute(&mut self, query: &Query) -> Result<QueryResult> {
        let sql = self.to_sql(query);
        if sql.is_empty() {
            return Err(Error::empty_statement());
        }

        debug!(sql = %sql, bindings = query.bindings().len(), "executing statement");

        match query.kind() {
            Some(QueryKind::Select) => self.execute_select(&sql, query.bindings()),
            _ => self.execute_command(&sql, query.bindings()),
        }
    }

    async fn close(self: Box<Self>) -> Result<()> {
        self.conn
            .close()
            .map_err(|(_, err)| Error::driver_operation_failed(err))
    }
}
