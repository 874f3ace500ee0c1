use async_trait::async_trait;

use super::QueryResult;
use crate::{stmt::Query, Result};

/// A live backend connection.
///
/// One request is issued at a time per call; there is no pooling, no
/// retry, and no cancellation here. Transaction semantics are delegated
/// entirely to the backend — the connection only dispatches the three
/// control statements when asked.
#[async_trait]
pub trait Connection: std::fmt::Debug + Send {
    /// Renders the statement in this backend's dialect without executing
    /// it.
    fn to_sql(&self, query: &Query) -> String;

    /// Renders and executes the statement. A statement that renders to
    /// empty SQL fails with [`Error::empty_statement`] before any driver
    /// call is made.
    ///
    /// [`Error::empty_statement`]: crate::Error::empty_statement
    async fn execute(&mut self, query: &Query) -> Result<QueryResult>;

    /// Closes the underlying driver handle.
    async fn close(self: Box<Self>) -> Result<()>;
}
