//! Error types for sqlgen.

use miette::Diagnostic;
use thiserror::Error;

/// Error type for statement building operations.
#[derive(Error, Diagnostic, Debug)]
pub enum BuildError {
    #[error("select statements must have at least one result column")]
    #[diagnostic(
        code(sqlgen::missing_columns),
        help("Add at least one column with `columns()` before calling `to_sql()`")
    )]
    MissingColumns,

    #[error("failed to render expression: {0}")]
    #[diagnostic(
        code(sqlgen::expression),
        help("Check the embedded expression for invalid state")
    )]
    Expression(String),
}

/// Result type alias for statement building operations.
pub type Result<T> = std::result::Result<T, BuildError>;
