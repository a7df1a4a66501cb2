//! Prepared statements on a synchronous connection.

use std::sync::MutexGuard;

use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::placeholder::{Dialect, ParamCount};
use crate::result::ExecResult;
use crate::state::StatementState;
use crate::statement::Template;
use crate::types::ToParams;

use super::conn::Conn;
use super::transport::Transport;

/// A prepared statement holding exclusive use of its connection.
///
/// The claim taken by [`Conn::prepare`] is released when the first call to
/// [`Statement::exec`] or [`Statement::query`] returns, whatever the outcome.
/// Later calls on the same statement claim the connection again for their
/// own duration. Dropping an unexecuted statement also releases the claim.
pub struct Statement<'c, T> {
    conn: &'c Conn<T>,
    template: Template,
    claim: Option<MutexGuard<'c, T>>,
    state: StatementState,
}

impl<'c, T: Transport> Statement<'c, T> {
    pub(super) fn new(conn: &'c Conn<T>, template: Template, claim: MutexGuard<'c, T>) -> Self {
        Self {
            conn,
            template,
            claim: Some(claim),
            state: StatementState::Prepared,
        }
    }

    /// The query template.
    pub fn query_text(&self) -> &str {
        self.template.query()
    }

    /// Placeholder dialect of the template.
    pub fn dialect(&self) -> Dialect {
        self.template.dialect()
    }

    /// Number of placeholder parameters.
    pub fn param_count(&self) -> ParamCount {
        self.template.param_count()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> StatementState {
        self.state
    }

    /// Closing a statement is not supported.
    ///
    /// # Errors
    ///
    /// Always returns `Error::Unsupported`.
    pub fn close(&self) -> Result<()> {
        Err(Error::Unsupported("closing a prepared statement".into()))
    }

    /// Execute a statement that does not return rows, such as an INSERT or UPDATE.
    pub fn exec<P: ToParams>(&mut self, params: P) -> Result<ExecResult> {
        let mut transport = self.take_claim()?;
        self.state = StatementState::Executing;
        let result = self.exec_inner(&mut transport, &params);
        self.finish(&result);
        result
    }

    fn exec_inner<P: ToParams>(&self, transport: &mut T, params: &P) -> Result<ExecResult> {
        let query = self.template.bind(params, self.conn.opts().check_arg_count)?;
        info!("Exec <{}>", query);

        if let Err(e) = transport.write_exec(&query) {
            warn!("Exec: Cannot send query to server: {}", e);
            return Err(Error::Send(Box::new(e)));
        }

        transport
            .read_result()
            .map_err(|e| Error::Receive(Box::new(e)))
    }

    /// Execute a statement that returns rows, such as a SELECT.
    pub fn query<P: ToParams>(&mut self, params: P) -> Result<T::Rows> {
        let mut transport = self.take_claim()?;
        self.state = StatementState::Executing;
        let result = self.query_inner(&mut transport, &params);
        self.finish(&result);
        result
    }

    fn query_inner<P: ToParams>(&self, transport: &mut T, params: &P) -> Result<T::Rows> {
        let query = self.template.bind(params, self.conn.opts().check_arg_count)?;
        info!("Query <{}>", query);

        if let Err(e) = transport.write_query(&query) {
            warn!("Query: Cannot send query to server: {}", e);
            return Err(Error::Send(Box::new(e)));
        }

        transport
            .read_rows()
            .map_err(|e| Error::Receive(Box::new(e)))
    }

    fn take_claim(&mut self) -> Result<MutexGuard<'c, T>> {
        match self.claim.take() {
            Some(claim) => Ok(claim),
            None => self.conn.claim(),
        }
    }

    fn finish<R>(&mut self, result: &Result<R>) {
        self.state = StatementState::Idle;
        if let Err(e) = result
            && e.is_connection_broken()
        {
            self.conn.mark_broken();
        }
    }
}
