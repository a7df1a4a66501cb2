//! Placeholder detection and counting.
//!
//! Two mutually exclusive placeholder dialects are recognized:
//!
//! - **Sequential** (ODBC style): `?`, consumed left to right.
//! - **Numbered** (PostgreSQL style): `$1`, `$2`, ..., explicit 1-based index,
//!   may repeat or appear out of order.
//!
//! A template containing at least one `?` is sequential and numbered markers
//! are not scanned at all.

use memchr::memmem;

/// The sequential marker.
pub const SEQUENTIAL_MARKER: u8 = b'?';

/// The prefix of a numbered marker.
pub const NUMBERED_PREFIX: u8 = b'$';

/// Placeholder style used by a query template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// No placeholders detected
    None,
    /// `?` markers
    Sequential,
    /// `$N` markers
    Numbered,
}

/// Number of parameters a statement expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamCount {
    /// The statement expects exactly this many arguments
    Known(usize),
    /// The count could not be determined; argument lists are not checked
    Unknown,
}

impl ParamCount {
    /// Get the count if known.
    pub fn known(self) -> Option<usize> {
        match self {
            ParamCount::Known(n) => Some(n),
            ParamCount::Unknown => None,
        }
    }

    /// Returns the count as `database/sql`-style integer: `-1` when unknown.
    pub fn as_i64(self) -> i64 {
        match self {
            ParamCount::Known(n) => i64::try_from(n).unwrap_or(i64::MAX),
            ParamCount::Unknown => -1,
        }
    }
}

/// Result of scanning a template for placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholders {
    pub dialect: Dialect,
    pub count: ParamCount,
}

/// Count occurrences of the sequential marker.
pub fn count_sequential(query: &str) -> usize {
    memchr::memchr_iter(SEQUENTIAL_MARKER, query.as_bytes()).count()
}

/// Count contiguous numbered markers starting at `$1`.
///
/// Probing stops at the first absent index, so `$1 $3` counts as 1.
/// Presence is a substring test: `$10` also satisfies the probe for `$1`.
/// Returns `Unknown` only if the probe index overflows.
pub fn count_numbered(query: &str) -> ParamCount {
    let haystack = query.as_bytes();
    let mut marker = String::with_capacity(8);
    let mut index: usize = 1;
    loop {
        marker.clear();
        marker.push(char::from(NUMBERED_PREFIX));
        marker.push_str(&index.to_string());
        if memmem::find(haystack, marker.as_bytes()).is_none() {
            return ParamCount::Known(index - 1);
        }
        index = match index.checked_add(1) {
            Some(next) => next,
            None => return ParamCount::Unknown,
        };
    }
}

/// Detect the dialect of `query` and count its parameters.
///
/// Never fails: a template without placeholders has zero parameters.
pub fn count(query: &str) -> Placeholders {
    let sequential = count_sequential(query);
    if sequential > 0 {
        return Placeholders {
            dialect: Dialect::Sequential,
            count: ParamCount::Known(sequential),
        };
    }

    let count = count_numbered(query);
    let dialect = if count != ParamCount::Known(0) || has_numbered_marker(query) {
        Dialect::Numbered
    } else {
        Dialect::None
    };
    Placeholders { dialect, count }
}

/// Returns true if `query` contains any `$<digit>` marker, even one the
/// contiguous count does not reach.
fn has_numbered_marker(query: &str) -> bool {
    let bytes = query.as_bytes();
    memchr::memchr_iter(NUMBERED_PREFIX, bytes)
        .any(|pos| bytes.get(pos + 1).is_some_and(u8::is_ascii_digit))
}
