//! Logical combinators over predicates.
//!
//! [`And`] and [`Or`] combine any number of predicates into a single
//! parenthesized expression, so callers can mix `OR` branches into a
//! WHERE/HAVING clause without breaking operator precedence.

use rusqlite::types::Value;

use crate::{error::Result, query::clause::Predicate, traits::Expression};

/// Joins predicate fragments with the given operator, skipping fragments
/// that render empty. The result is parenthesized so it stays a single
/// operand wherever it is embedded.
fn join_with(parts: &[Predicate], op: &str, params: &mut Vec<Value>) -> Result<String> {
    let mut fragments = Vec::with_capacity(parts.len());
    for part in parts {
        let sql = part.append_sql(params)?;
        if !sql.is_empty() {
            fragments.push(sql);
        }
    }

    if fragments.is_empty() {
        return Ok(String::new());
    }
    Ok(format!("({})", fragments.join(op)))
}

/// Combines predicates with `AND`, rendered as one parenthesized group.
#[derive(Clone, Default)]
pub struct And(Vec<Predicate>);

impl And {
    pub fn new<I, P>(parts: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Predicate>,
    {
        Self(parts.into_iter().map(Into::into).collect())
    }
}

impl Expression for And {
    fn append_sql(&self, params: &mut Vec<Value>) -> Result<String> {
        join_with(&self.0, " AND ", params)
    }
}

/// Combines predicates with `OR`, rendered as one parenthesized group.
///
/// # Example
///
/// ```rust
/// use sqlgen::{Expression, Or, Predicate};
///
/// let or = Or::new([
///     Predicate::raw("age < ?", [13]),
///     Predicate::raw("age > ?", [65]),
/// ]);
/// let mut params = vec![];
/// let sql = or.append_sql(&mut params).unwrap();
/// assert_eq!(sql, "(age < ? OR age > ?)");
/// assert_eq!(params.len(), 2);
/// ```
#[derive(Clone, Default)]
pub struct Or(Vec<Predicate>);

impl Or {
    pub fn new<I, P>(parts: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Predicate>,
    {
        Self(parts.into_iter().map(Into::into).collect())
    }
}

impl Expression for Or {
    fn append_sql(&self, params: &mut Vec<Value>) -> Result<String> {
        join_with(&self.0, " OR ", params)
    }
}
