//! Asynchronous ports to the query engine.
//!
//! Implementations may use `async fn` for each method as long as the
//! returned futures are `Send`.

use std::future::Future;

use crate::error::Result;
use crate::result::ExecResult;

/// Sends literal queries to the engine.
pub trait RequestSink: Send {
    /// Send a query that does not return rows.
    fn write_exec(&mut self, query: &str) -> impl Future<Output = Result<()>> + Send;

    /// Send a query that returns rows.
    fn write_query(&mut self, query: &str) -> impl Future<Output = Result<()>> + Send;
}

/// Receives the engine's answer to the last request.
pub trait ResponseSource: Send {
    /// Row stream produced by a row-returning query.
    type Rows: Send;

    /// Read the outcome of a query sent with [`RequestSink::write_exec`].
    fn read_result(&mut self) -> impl Future<Output = Result<ExecResult>> + Send;

    /// Read the rows of a query sent with [`RequestSink::write_query`].
    fn read_rows(&mut self) -> impl Future<Output = Result<Self::Rows>> + Send;
}

/// A connection's request sink and response source.
pub trait Transport: RequestSink + ResponseSource {}

impl<T: RequestSink + ResponseSource> Transport for T {}
