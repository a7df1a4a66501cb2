//! Client-side prepared statements for RamSQL.
//!
//! # Features
//!
//! - **Placeholder detection**: ODBC-style `?` and PostgreSQL-style `$N` markers
//! - **Literal rewriting**: bound arguments are substituted into the query text
//! - **Exclusive connection use**: a prepared statement holds its connection
//!   until its first execution returns
//! - **Sync and async APIs**: Choose between blocking and tokio-based async
//!
//! The wire protocol and the engine sit behind two ports, a request sink and
//! a response source (see [`sync::Transport`] and [`tokio::Transport`]).
//!
//! # Example
//!
//! ```no_run
//! use ramsql_client::sync::{Conn, RequestSink, ResponseSource};
//! use ramsql_client::ExecResult;
//!
//! struct Engine;
//!
//! impl RequestSink for Engine {
//!     fn write_exec(&mut self, query: &str) -> ramsql_client::Result<()> {
//!         println!("exec: {query}");
//!         Ok(())
//!     }
//!
//!     fn write_query(&mut self, query: &str) -> ramsql_client::Result<()> {
//!         println!("query: {query}");
//!         Ok(())
//!     }
//! }
//!
//! impl ResponseSource for Engine {
//!     type Rows = Vec<Vec<String>>;
//!
//!     fn read_result(&mut self) -> ramsql_client::Result<ExecResult> {
//!         Ok(ExecResult::new(1, 1))
//!     }
//!
//!     fn read_rows(&mut self) -> ramsql_client::Result<Self::Rows> {
//!         Ok(Vec::new())
//!     }
//! }
//!
//! fn main() -> ramsql_client::Result<()> {
//!     let conn = Conn::with_opts(Engine, "ramsql://testdb")?;
//!
//!     let mut stmt = conn.prepare("INSERT INTO account (id, email) VALUES ($1, $2)")?;
//!     let result = stmt.exec((1_i64, "foo@bar.com"))?;
//!     println!("Rows affected: {}", result.rows_affected);
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod opts;
pub mod placeholder;
pub mod result;
pub mod rewrite;
pub mod state;
pub mod statement;
pub mod types;
pub mod value;

#[cfg(feature = "sync")]
pub mod sync;

#[cfg(feature = "tokio")]
pub mod tokio;

pub use error::{Error, Result};
pub use opts::Opts;
pub use placeholder::{Dialect, ParamCount, Placeholders};
pub use result::ExecResult;
pub use rewrite::{Rewritten, rewrite};
pub use state::StatementState;
pub use statement::Template;
pub use types::{ToParams, ToValue};
pub use value::Value;
