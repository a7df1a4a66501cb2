//! Blocking RamSQL client.

mod conn;
mod statement;
mod transport;

pub use conn::Conn;
pub use statement::Statement;
pub use transport::{RequestSink, ResponseSource, Transport};
