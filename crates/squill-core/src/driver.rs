mod config;
pub use config::{Config, DatabaseKind};

mod connection;
pub use connection::Connection;

mod result;
pub use result::QueryResult;
