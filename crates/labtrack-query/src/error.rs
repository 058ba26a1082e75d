//! Error types for the query crate.

use thiserror::Error;

use crate::mode::MatchMode;

/// Errors that can occur when compiling a query against a field table.
///
/// Filter *values* never produce errors; a value that does not parse for
/// its field's match mode compiles to a predicate that matches nothing.
/// These errors describe requests that name fields the table does not
/// know how to filter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The filter names a field that is not in the entity's table.
    #[error("unknown filter field '{field}' for {entity}")]
    UnknownField { entity: &'static str, field: String },

    /// The field exists but is only sortable.
    #[error("field '{field}' of {entity} is not filterable")]
    NotFilterable { entity: &'static str, field: String },
}

/// A raw filter value that could not be parsed for its match mode.
///
/// Never returned to callers of [`Query::compile`](crate::Query::compile);
/// the compiler logs it and fails closed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot parse '{raw}' for {mode} matching")]
pub struct ValueParseError {
    pub mode: MatchMode,
    pub raw: String,
}

impl ValueParseError {
    pub(crate) fn new(mode: MatchMode, raw: &str) -> Self {
        ValueParseError {
            mode,
            raw: raw.to_string(),
        }
    }
}

/// Result type for query compilation.
pub type Result<T> = std::result::Result<T, QueryError>;
