//! Error types for ramsql-client.

use thiserror::Error;

/// Result type for ramsql-client operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Error type for ramsql-client.
#[derive(Debug, Error)]
pub enum Error {
    /// The request sink failed to transmit a query
    #[error("Cannot send query to server: {0}")]
    Send(#[source] Box<Error>),

    /// The response source failed after a successful send
    #[error("Cannot read response from server: {0}")]
    Receive(#[source] Box<Error>),

    /// A numbered placeholder has no corresponding argument
    #[error("Placeholder ${index} out of range: {supplied} argument(s) supplied")]
    PlaceholderIndexOutOfRange { index: usize, supplied: usize },

    /// A numbered placeholder whose index cannot be parsed
    #[error("Matched {marker} as a placeholder but cannot get index")]
    PlaceholderParse { marker: String },

    /// Argument count does not match the statement's placeholders
    #[error("Expected {expected} argument(s), got {supplied}")]
    ArgumentCount { expected: usize, supplied: usize },

    /// Error reported by the SQL engine
    #[error("Engine error: {0}")]
    Engine(String),

    /// Protocol error (malformed or unexpected response)
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Connection is broken and cannot be reused
    #[error("Connection is broken")]
    ConnectionBroken,

    /// Invalid usage (e.g., malformed options)
    #[error("Invalid usage: {0}")]
    InvalidUsage(String),

    /// Unsupported operation
    #[error("Unsupported: {0}")]
    Unsupported(String),
}

impl Error {
    /// Returns true if the error indicates the connection is broken and cannot be reused.
    pub fn is_connection_broken(&self) -> bool {
        match self {
            Error::Io(_) | Error::ConnectionBroken => true,
            Error::Send(inner) | Error::Receive(inner) => inner.is_connection_broken(),
            _ => false,
        }
    }

    /// Returns true if the error was raised while binding arguments,
    /// before anything reached the connection.
    pub fn is_binding(&self) -> bool {
        matches!(
            self,
            Error::PlaceholderIndexOutOfRange { .. }
                | Error::PlaceholderParse { .. }
                | Error::ArgumentCount { .. }
        )
    }
}

impl From<std::convert::Infallible> for Error {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}
