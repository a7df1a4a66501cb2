//! Asynchronous RamSQL connection.

use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::{Mutex, MutexGuard};

use crate::error::{Error, Result};
use crate::opts::Opts;
use crate::result::ExecResult;
use crate::statement::Template;
use crate::types::ToParams;

use super::statement::Statement;
use super::transport::Transport;

/// Asynchronous RamSQL connection.
///
/// Statements prepared on the connection take turns: [`Conn::prepare`]
/// waits until the previous statement has executed (or been dropped).
pub struct Conn<T> {
    transport: Mutex<T>,
    opts: Opts,
    is_broken: AtomicBool,
}

impl<T: Transport> Conn<T> {
    /// Wrap a transport with default options.
    pub fn new(transport: T) -> Self {
        Self {
            transport: Mutex::new(transport),
            opts: Opts::default(),
            is_broken: AtomicBool::new(false),
        }
    }

    /// Wrap a transport with options (an `Opts`, a URL or a database name).
    pub fn with_opts<O: TryInto<Opts>>(transport: T, opts: O) -> Result<Self>
    where
        Error: From<O::Error>,
    {
        let opts = opts.try_into()?;
        Ok(Self {
            transport: Mutex::new(transport),
            opts,
            is_broken: AtomicBool::new(false),
        })
    }

    /// Get the connection options.
    pub fn opts(&self) -> &Opts {
        &self.opts
    }

    /// Check if the connection is broken.
    pub fn is_broken(&self) -> bool {
        self.is_broken.load(Ordering::Acquire)
    }

    /// Check if a statement currently holds the connection.
    pub fn is_claimed(&self) -> bool {
        self.transport.try_lock().is_err()
    }

    /// Prepare a statement.
    ///
    /// Waits until no other statement holds the connection, then keeps the
    /// claim until the statement's first execution returns.
    pub async fn prepare(&self, query: &str) -> Result<Statement<'_, T>> {
        let template = Template::new(query);
        let claim = self.claim().await;
        Ok(Statement::new(self, template, claim))
    }

    /// Prepare and execute a statement that does not return rows.
    pub async fn exec<P: ToParams>(&self, query: &str, params: P) -> Result<ExecResult> {
        self.prepare(query).await?.exec(params).await
    }

    /// Prepare and execute a statement that returns rows.
    pub async fn query<P: ToParams>(&self, query: &str, params: P) -> Result<T::Rows> {
        self.prepare(query).await?.query(params).await
    }

    /// Consume the connection and return the transport.
    pub fn into_inner(self) -> T {
        self.transport.into_inner()
    }

    pub(super) async fn claim(&self) -> MutexGuard<'_, T> {
        self.transport.lock().await
    }

    pub(super) fn mark_broken(&self) {
        self.is_broken.store(true, Ordering::Release);
    }
}
