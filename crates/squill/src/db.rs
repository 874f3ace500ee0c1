use squill_core::{
    driver::{Config, Connection, DatabaseKind},
    Result,
};

#[cfg(not(all(feature = "sqlite", feature = "mysql")))]
use squill_core::Error;

/// Opens a connection to the backend selected by `config.kind` and hands
/// back a boxed [`Connection`]. The embedded engine is the default; a
/// backend whose driver feature is disabled yields a configuration
/// error.
pub async fn connect(config: Config) -> Result<Box<dyn Connection>> {
    match config.kind {
        DatabaseKind::Sqlite => {
            #[cfg(feature = "sqlite")]
            {
                let connection = squill_driver_sqlite::Connection::connect(&config)?;
                Ok(Box::new(connection))
            }
            #[cfg(not(feature = "sqlite"))]
            {
                Err(Error::unknown_backend("sqlite"))
            }
        }
        DatabaseKind::Mysql => {
            #[cfg(feature = "mysql")]
            {
                let connection = squill_driver_mysql::Connection::connect(&config).await?;
                Ok(Box::new(connection))
            }
            #[cfg(not(feature = "mysql"))]
            {
                Err(Error::unknown_backend("mysql"))
            }
        }
    }
}
