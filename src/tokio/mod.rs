//! Asynchronous RamSQL client using Tokio.

mod conn;
mod statement;
mod transport;

pub use conn::Conn;
pub use statement::Statement;
pub use transport::{RequestSink, ResponseSource, Transport};
