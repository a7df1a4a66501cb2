//! Blocking ports to the query engine.

use crate::error::Result;
use crate::result::ExecResult;

/// Sends literal queries to the engine.
pub trait RequestSink {
    /// Send a query that does not return rows.
    fn write_exec(&mut self, query: &str) -> Result<()>;

    /// Send a query that returns rows.
    fn write_query(&mut self, query: &str) -> Result<()>;
}

/// Receives the engine's answer to the last request.
pub trait ResponseSource {
    /// Row stream produced by a row-returning query.
    type Rows;

    /// Read the outcome of a query sent with [`RequestSink::write_exec`].
    fn read_result(&mut self) -> Result<ExecResult>;

    /// Read the rows of a query sent with [`RequestSink::write_query`].
    fn read_rows(&mut self) -> Result<Self::Rows>;
}

/// A connection's request sink and response source.
pub trait Transport: RequestSink + ResponseSource {}

impl<T: RequestSink + ResponseSource> Transport for T {}
