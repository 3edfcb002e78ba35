//! Error types for building specs from text.
//!
//! Running a query never fails; only turning user input (filter clauses,
//! sort keys, regex patterns) into a spec does.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewError {
    /// Invalid regular expression pattern.
    #[error("invalid regex pattern: {0}")]
    InvalidRegex(#[from] regex::Error),

    /// A filter clause could not be parsed.
    #[error("invalid filter clause '{input}': {reason}")]
    InvalidClause { input: String, reason: &'static str },

    /// A sort key could not be parsed.
    #[error("invalid sort key '{0}'")]
    InvalidSortKey(String),

    /// Operator is not valid for the given value kind.
    #[error("operator '{op}' is not valid for {value_kind} values")]
    InvalidOperatorForKind {
        op: &'static str,
        value_kind: &'static str,
    },
}

/// Result type for spec-building operations.
pub type Result<T> = std::result::Result<T, ViewError>;
