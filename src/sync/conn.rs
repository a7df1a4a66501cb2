//! Synchronous RamSQL connection.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, TryLockError};

use crate::error::{Error, Result};
use crate::opts::Opts;
use crate::result::ExecResult;
use crate::statement::Template;
use crate::types::ToParams;

use super::statement::Statement;
use super::transport::Transport;

/// Synchronous RamSQL connection.
///
/// The transport is shared by every statement prepared on the connection,
/// but only one statement may use it at a time: [`Conn::prepare`] blocks
/// until the previous statement has executed (or been dropped).
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
        matches!(self.transport.try_lock(), Err(TryLockError::WouldBlock))
    }

    /// Prepare a statement.
    ///
    /// Blocks until no other statement holds the connection, then keeps the
    /// claim until the statement's first execution returns.
    ///
    /// # Errors
    ///
    /// Returns `Error::ConnectionBroken` if a thread panicked while holding
    /// the connection.
    pub fn prepare(&self, query: &str) -> Result<Statement<'_, T>> {
        let template = Template::new(query);
        let claim = self.claim()?;
        Ok(Statement::new(self, template, claim))
    }

    /// Prepare and execute a statement that does not return rows.
    pub fn exec<P: ToParams>(&self, query: &str, params: P) -> Result<ExecResult> {
        self.prepare(query)?.exec(params)
    }

    /// Prepare and execute a statement that returns rows.
    pub fn query<P: ToParams>(&self, query: &str, params: P) -> Result<T::Rows> {
        self.prepare(query)?.query(params)
    }

    /// Consume the connection and return the transport.
    pub fn into_inner(self) -> Result<T> {
        self.transport
            .into_inner()
            .map_err(|_poisoned| Error::ConnectionBroken)
    }

    pub(super) fn claim(&self) -> Result<MutexGuard<'_, T>> {
        self.transport
            .lock()
            .map_err(|_poisoned| Error::ConnectionBroken)
    }

    pub(super) fn mark_broken(&self) {
        self.is_broken.store(true, Ordering::Release);
    }
}
