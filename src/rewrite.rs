//! Placeholder substitution.
//!
//! Turns a query template and its bound arguments into a literal query string.
//! The dialect is detected once by [`crate::placeholder::count`] and passed in,
//! so counting and rewriting always agree on how a template is read.

use memchr::memchr;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::placeholder::{self, Dialect, NUMBERED_PREFIX, SEQUENTIAL_MARKER};
use crate::value::Value;

/// Outcome of a rewrite.
#[derive(Debug, Clone, PartialEq)]
pub enum Rewritten {
    /// Every placeholder was substituted.
    Complete(String),
    /// A numbered marker's index could not be parsed. `query` holds the
    /// substitutions made before `marker`; the rest of the template is untouched.
    Partial { query: String, marker: String },
}

impl Rewritten {
    /// The rewritten text, complete or not.
    pub fn query(&self) -> &str {
        match self {
            Rewritten::Complete(q) | Rewritten::Partial { query: q, .. } => q,
        }
    }

    /// Returns true if every placeholder was substituted.
    pub fn is_complete(&self) -> bool {
        matches!(self, Rewritten::Complete(_))
    }

    /// Convert into the literal query, failing on a partial rewrite.
    pub fn into_result(self) -> Result<String> {
        match self {
            Rewritten::Complete(q) => Ok(q),
            Rewritten::Partial { marker, .. } => Err(Error::PlaceholderParse { marker }),
        }
    }
}

/// Rewrite `query`, detecting its dialect first.
pub fn rewrite(query: &str, args: &[Value]) -> Result<Rewritten> {
    rewrite_with(query, placeholder::count(query).dialect, args)
}

/// Rewrite `query` using an already detected dialect.
///
/// # Errors
///
/// - `Error::ArgumentCount` if a sequential template's marker count differs
///   from the number of arguments.
/// - `Error::PlaceholderIndexOutOfRange` if a numbered marker has no argument.
pub fn rewrite_with(query: &str, dialect: Dialect, args: &[Value]) -> Result<Rewritten> {
    match dialect {
        Dialect::None => Ok(Rewritten::Complete(query.to_owned())),
        Dialect::Sequential => rewrite_sequential(query, args).map(Rewritten::Complete),
        Dialect::Numbered => rewrite_numbered(query, args),
    }
}

/// Interleave the segments between `?` markers with the arguments.
///
/// An argument whose text contains a space is wrapped in single quotes,
/// anything else is inserted as is. Embedded quotes are not escaped.
fn rewrite_sequential(query: &str, args: &[Value]) -> Result<String> {
    let expected = placeholder::count_sequential(query);
    if expected != args.len() {
        return Err(Error::ArgumentCount {
            expected,
            supplied: args.len(),
        });
    }

    let mut parts = query.split(char::from(SEQUENTIAL_MARKER));
    let mut out = String::with_capacity(query.len() + args.len() * 8);
    out.push_str(parts.next().unwrap_or_default());
    for (arg, part) in args.iter().zip(parts) {
        let text = arg.to_string();
        if text.contains(' ') {
            out.push('\'');
            out.push_str(&text);
            out.push('\'');
        } else {
            out.push_str(&text);
        }
        out.push_str(part);
    }
    Ok(out)
}

/// Substitute `$N` markers left to right.
///
/// Textual arguments are quoted unless the marker already sits inside a
/// single-quoted literal of the template (odd number of `'` before it).
/// Every other value is emitted in its default string form.
fn rewrite_numbered(query: &str, args: &[Value]) -> Result<Rewritten> {
    let bytes = query.as_bytes();
    let mut out = String::with_capacity(query.len() + args.len() * 8);
    let mut copied = 0;
    let mut in_literal = false;
    let mut search = 0;

    while let Some(offset) = memchr(NUMBERED_PREFIX, &bytes[search..]) {
        let start = search + offset;
        let digits = bytes[start + 1..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if digits == 0 {
            search = start + 1;
            continue;
        }
        let end = start + 1 + digits;
        let marker = &query[start..end];

        let index: usize = match marker[1..].parse() {
            Ok(index) => index,
            Err(e) => {
                warn!("Matched {} as a placeholder but cannot get index: {}", marker, e);
                out.push_str(&query[copied..]);
                return Ok(Rewritten::Partial {
                    query: out,
                    marker: marker.to_owned(),
                });
            }
        };

        let value = index
            .checked_sub(1)
            .and_then(|i| args.get(i))
            .ok_or(Error::PlaceholderIndexOutOfRange {
                index,
                supplied: args.len(),
            })?;

        let preceding = &query[copied..start];
        for _ in memchr::memchr_iter(b'\'', preceding.as_bytes()) {
            in_literal = !in_literal;
        }
        out.push_str(preceding);

        let literal = match value {
            Value::Text(s) if !in_literal => format!("'{}'", s),
            v => v.to_string(),
        };
        debug!("Replacing {} with {}", marker, literal);
        out.push_str(&literal);

        copied = end;
        search = end;
    }

    out.push_str(&query[copied..]);
    Ok(Rewritten::Complete(out))
}
