//! Outcome of a statement that does not return rows.

/// Result of an INSERT, UPDATE, DELETE or DDL statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExecResult {
    /// Identifier of the last inserted row, if the engine reports one
    pub last_insert_id: i64,
    /// Number of rows affected
    pub rows_affected: i64,
}

impl ExecResult {
    /// Create a new result.
    pub fn new(last_insert_id: i64, rows_affected: i64) -> Self {
        Self {
            last_insert_id,
            rows_affected,
        }
    }
}
