use std::str::FromStr;

use crate::Error;

/// Selects the backend a [`Config`] connects to. Defaults to the
/// embedded engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DatabaseKind {
    #[default]
    Sqlite,
    Mysql,
}

impl FromStr for DatabaseKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sqlite" => Ok(DatabaseKind::Sqlite),
            "mysql" => Ok(DatabaseKind::Mysql),
            other => Err(Error::unknown_backend(other)),
        }
    }
}

/// Connection configuration shared by both backends.
///
/// The embedded engine reads only `host` (the database file path). The
/// networked engine additionally uses the credentials, `database` and
/// `port`, and feeds `engine`/`charset`/`collate` into CREATE TABLE
/// suffixes.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub host: String,
    pub database: String,
    pub username: String,
    pub password: String,
    pub port: u16,
    pub engine: String,
    pub charset: String,
    pub collate: String,
    pub kind: DatabaseKind,
}
