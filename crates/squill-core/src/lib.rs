pub mod driver;
pub mod schema;
pub mod stmt;

mod error;
pub use error::{Error, Result};

pub use async_trait::async_trait;
