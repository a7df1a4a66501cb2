//! Statement lifecycle.

/// Lifecycle state of a prepared statement.
///
/// ```text
/// Prepared --exec/query--> Executing --done--> Idle
/// ```
///
/// There is no closed state: closing a statement is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementState {
    /// Exclusivity claim held, nothing executed yet.
    Prepared,
    /// A request is in flight. Observed afterwards only if the
    /// execution was interrupted (e.g. its future was dropped).
    Executing,
    /// The claim has been released.
    Idle,
}

impl StatementState {
    /// Returns true if the statement still holds the claim taken at prepare time.
    pub fn holds_claim(self) -> bool {
        matches!(self, StatementState::Prepared)
    }
}
