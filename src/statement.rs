//! Query templates shared by the sync and tokio statements.

use crate::error::{Error, Result};
use crate::placeholder::{self, Dialect, ParamCount, Placeholders};
use crate::rewrite;
use crate::types::ToParams;

/// A query template and its placeholders, scanned once at prepare time.
#[derive(Debug, Clone)]
pub struct Template {
    query: String,
    placeholders: Placeholders,
}

impl Template {
    /// Scan `query` for placeholders.
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_owned(),
            placeholders: placeholder::count(query),
        }
    }

    /// The template text.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn dialect(&self) -> Dialect {
        self.placeholders.dialect
    }

    pub fn param_count(&self) -> ParamCount {
        self.placeholders.count
    }

    /// Produce the literal query for `params`.
    ///
    /// With `check_arg_count`, a known parameter count must match the number
    /// of arguments exactly.
    pub fn bind<P: ToParams + ?Sized>(&self, params: &P, check_arg_count: bool) -> Result<String> {
        let args = params.collect_values();
        if check_arg_count
            && let Some(expected) = self.param_count().known()
            && expected != args.len()
        {
            return Err(Error::ArgumentCount {
                expected,
                supplied: args.len(),
            });
        }
        rewrite::rewrite_with(&self.query, self.dialect(), &args)?.into_result()
    }
}
