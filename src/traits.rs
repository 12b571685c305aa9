//! Core trait that powers predicate composition.
//!
//! [`Expression`] defines the contract for anything that can render itself
//! into a SQL fragment with bound parameters: raw fragments, equality maps,
//! logical combinators, and whole sub-selects.

use rusqlite::types::Value;

use crate::error::Result;

/// A type that can render itself as a SQL fragment.
///
/// When `append_sql` is called, the implementation appends its bound
/// parameters to the provided `params` vector and returns the SQL fragment
/// (with `?` placeholders). Parameters must be pushed in the same order the
/// corresponding placeholders appear in the returned text, so that the
/// caller's flat parameter list stays correlated with the final statement.
///
/// Implementors include [`crate::Predicate`], [`crate::EqMap`],
/// [`crate::And`], [`crate::Or`], and [`crate::SelectQuery`] itself (for
/// embedding sub-selects). Any external type implementing this trait can be
/// embedded as a nested predicate via [`crate::Predicate::nested`].
///
/// # Example
///
/// ```rust
/// use sqlgen::{EqMap, Expression};
///
/// let expr = EqMap::new().value("name", "soar".to_string());
/// let mut params = vec![];
/// let sql = expr.append_sql(&mut params).unwrap();
/// assert_eq!(sql, "name = ?");
/// assert_eq!(params.len(), 1);
/// ```
pub trait Expression {
    /// Renders this expression into a SQL string fragment, appending its
    /// bound parameters to `params`.
    ///
    /// Errors raised here propagate unchanged out of
    /// [`crate::SelectQuery::to_sql`].
    fn append_sql(&self, params: &mut Vec<Value>) -> Result<String>;
}
