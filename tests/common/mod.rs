//! In-memory engine used by the integration tests.
//!
//! Records every literal query it receives and can be told to fail the next
//! send or receive.

#![allow(dead_code)]

use ramsql_client::{Error, ExecResult, Result, Value};

/// Which step of the round trip should fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Failure {
    #[default]
    None,
    /// The request sink reports an engine error
    Send,
    /// The request sink reports an I/O error
    SendIo,
    /// The response source reports an engine error
    Receive,
}

#[derive(Debug, Default)]
pub struct MockEngine {
    pub sent: Vec<String>,
    pub rows: Vec<Vec<Value>>,
    pub failure: Failure,
    next_id: i64,
}

impl MockEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: Vec<Vec<Value>>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    pub fn failing(failure: Failure) -> Self {
        Self {
            failure,
            ..Self::default()
        }
    }

    fn send(&mut self, query: &str) -> Result<()> {
        match self.failure {
            Failure::Send => Err(Error::Engine("rejected".into())),
            Failure::SendIo => Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "engine gone",
            ))),
            _ => {
                self.sent.push(query.to_owned());
                Ok(())
            }
        }
    }

    fn result(&mut self) -> Result<ExecResult> {
        if self.failure == Failure::Receive {
            return Err(Error::Engine("table not found".into()));
        }
        self.next_id += 1;
        Ok(ExecResult::new(self.next_id, 1))
    }

    fn rows(&mut self) -> Result<Vec<Vec<Value>>> {
        if self.failure == Failure::Receive {
            return Err(Error::Engine("table not found".into()));
        }
        Ok(self.rows.clone())
    }
}

impl ramsql_client::sync::RequestSink for MockEngine {
    fn write_exec(&mut self, query: &str) -> Result<()> {
        self.send(query)
    }

    fn write_query(&mut self, query: &str) -> Result<()> {
        self.send(query)
    }
}

impl ramsql_client::sync::ResponseSource for MockEngine {
    type Rows = Vec<Vec<Value>>;

    fn read_result(&mut self) -> Result<ExecResult> {
        self.result()
    }

    fn read_rows(&mut self) -> Result<Self::Rows> {
        self.rows()
    }
}

impl ramsql_client::tokio::RequestSink for MockEngine {
    async fn write_exec(&mut self, query: &str) -> Result<()> {
        self.send(query)
    }

    async fn write_query(&mut self, query: &str) -> Result<()> {
        self.send(query)
    }
}

impl ramsql_client::tokio::ResponseSource for MockEngine {
    type Rows = Vec<Vec<Value>>;

    async fn read_result(&mut self) -> Result<ExecResult> {
        self.result()
    }

    async fn read_rows(&mut self) -> Result<Self::Rows> {
        self.rows()
    }
}
