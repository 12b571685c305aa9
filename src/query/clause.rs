//! Predicate normalization and composition.
//!
//! Every condition attached to a WHERE or HAVING clause is normalized into a
//! [`Predicate`] first, so the renderer only ever deals with one shape.

use std::sync::Arc;

use rusqlite::types::Value;

use crate::{
    error::Result,
    expr::{
        eq::EqMap,
        logic::{And, Or},
    },
    traits::Expression,
};

/// A single condition attached to a WHERE or HAVING clause.
///
/// The three forms cover the accepted condition inputs:
///
/// - [`Predicate::Raw`]: a literal SQL fragment with its ordered parameters,
///   passed through verbatim.
/// - [`Predicate::Eq`]: a column-to-value equality map, see [`EqMap`].
/// - [`Predicate::Nested`]: any [`Expression`] implementor, embedded as-is
///   with its parameters spliced in at that position.
#[derive(Clone)]
pub enum Predicate {
    Raw { sql: String, params: Vec<Value> },
    Eq(EqMap),
    Nested(Arc<dyn Expression + Send + Sync>),
}

impl Predicate {
    /// Creates a raw predicate from a SQL fragment and its parameters.
    ///
    /// The fragment is not inspected; the caller is responsible for matching
    /// each `?` placeholder with one parameter, in order.
    pub fn raw<S, I, V>(sql: S, params: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::Raw {
            sql: sql.into(),
            params: params.into_iter().map(Into::into).collect(),
        }
    }

    /// Wraps any [`Expression`] implementor as a nested predicate.
    pub fn nested<E: Expression + Send + Sync + 'static>(expr: E) -> Self {
        Self::Nested(Arc::new(expr))
    }
}

impl Expression for Predicate {
    fn append_sql(&self, params: &mut Vec<Value>) -> Result<String> {
        match self {
            Self::Raw { sql, params: bound } => {
                params.extend(bound.iter().cloned());
                Ok(sql.clone())
            }
            Self::Eq(map) => map.append_sql(params),
            Self::Nested(expr) => expr.append_sql(params),
        }
    }
}

impl From<&str> for Predicate {
    fn from(sql: &str) -> Self {
        Self::Raw {
            sql: sql.to_string(),
            params: vec![],
        }
    }
}

impl From<String> for Predicate {
    fn from(sql: String) -> Self {
        Self::Raw {
            sql,
            params: vec![],
        }
    }
}

impl From<EqMap> for Predicate {
    fn from(map: EqMap) -> Self {
        Self::Eq(map)
    }
}

impl From<And> for Predicate {
    fn from(and: And) -> Self {
        Self::nested(and)
    }
}

impl From<Or> for Predicate {
    fn from(or: Or) -> Self {
        Self::nested(or)
    }
}

/// Renders the predicates of one clause, joined with `AND` in attachment
/// order. Predicates that render empty are skipped; an empty result means
/// the caller should omit the clause keyword entirely.
pub(crate) fn predicates_to_sql(parts: &[Predicate], params: &mut Vec<Value>) -> Result<String> {
    let mut fragments = Vec::with_capacity(parts.len());
    for part in parts {
        let sql = part.append_sql(params)?;
        if !sql.is_empty() {
            fragments.push(sql);
        }
    }
    Ok(fragments.join(" AND "))
}
