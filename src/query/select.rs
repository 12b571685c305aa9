//! The SELECT statement builder and renderer.

use rusqlite::types::Value;
use tracing::trace;

use crate::{
    error::{BuildError, Result},
    query::clause::{predicates_to_sql, Predicate},
    traits::Expression,
};

/// Starts a new SELECT statement with the given result columns.
///
/// Equivalent to `SelectQuery::new().columns(columns)`. Emptiness is only
/// checked at render time: an empty column list is accepted here and fails
/// later in [`SelectQuery::to_sql`].
pub fn select<I, S>(columns: I) -> SelectQuery
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    SelectQuery::new().columns(columns)
}

/// An immutable builder for SQL SELECT statements.
///
/// Constructed via [`select`] or [`SelectQuery::new`], then chained with
/// `.from()`, `.filter()`, `.order_by()`, etc. Every method takes `&self`
/// and returns a new value, so a builder can serve as the shared ancestor
/// for independently-evolving statements, from any number of threads,
/// without synchronization.
///
/// [`SelectQuery::to_sql`] is the terminal call: it renders the accumulated
/// clauses into one SQL string plus the flat list of bound parameters, in
/// strict left-to-right placeholder order.
///
/// Column, table, GROUP BY, and ORDER BY expressions pass through verbatim
/// and unescaped; only predicate values are bound as parameters. Do not
/// feed untrusted input into the expression positions.
///
/// # Example
///
/// ```rust
/// use sqlgen::{select, Predicate};
///
/// let (sql, params) = select(["id", "name"])
///     .from("users")
///     .filter(Predicate::raw("age > ?", [18]))
///     .order_by(["name"])
///     .limit(10)
///     .to_sql()
///     .unwrap();
///
/// assert_eq!(
///     sql,
///     "SELECT id, name FROM users WHERE age > ? ORDER BY name LIMIT 10"
/// );
/// assert_eq!(params.len(), 1);
/// ```
#[derive(Clone, Default)]
pub struct SelectQuery {
    distinct: bool,
    columns: Vec<String>,
    from: Option<String>,
    wheres: Vec<Predicate>,
    group_bys: Vec<String>,
    havings: Vec<Predicate>,
    order_bys: Vec<String>,
    limit: Option<u64>,
    offset: Option<u64>,
}

impl SelectQuery {
    /// Creates an empty statement with no clauses set.
    pub const fn new() -> Self {
        Self {
            distinct: false,
            columns: Vec::new(),
            from: None,
            wheres: Vec::new(),
            group_bys: Vec::new(),
            havings: Vec::new(),
            order_bys: Vec::new(),
            limit: None,
            offset: None,
        }
    }

    /// Sets the DISTINCT flag.
    pub fn distinct(&self) -> Self {
        let mut next = self.clone();
        next.distinct = true;
        next
    }

    /// Appends result columns, preserving insertion order. Repeated calls
    /// are cumulative: `columns(["a"]).columns(["b"])` is the same as
    /// `columns(["a", "b"])`.
    pub fn columns<I, S>(&self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut next = self.clone();
        next.columns.extend(columns.into_iter().map(Into::into));
        next
    }

    /// Sets the FROM target. A later call replaces the earlier one.
    pub fn from(&self, target: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.from = Some(target.into());
        next
    }

    /// Appends a WHERE condition. Conditions are joined with `AND` in
    /// attachment order at render time.
    pub fn filter(&self, pred: impl Into<Predicate>) -> Self {
        let mut next = self.clone();
        next.wheres.push(pred.into());
        next
    }

    /// Appends GROUP BY expressions.
    pub fn group_by<I, S>(&self, exprs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut next = self.clone();
        next.group_bys.extend(exprs.into_iter().map(Into::into));
        next
    }

    /// Appends a HAVING condition, joined like [`SelectQuery::filter`].
    pub fn having(&self, pred: impl Into<Predicate>) -> Self {
        let mut next = self.clone();
        next.havings.push(pred.into());
        next
    }

    /// Appends ORDER BY expressions.
    pub fn order_by<I, S>(&self, exprs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut next = self.clone();
        next.order_bys.extend(exprs.into_iter().map(Into::into));
        next
    }

    /// Sets the LIMIT. A later call replaces the earlier one.
    pub fn limit(&self, limit: u64) -> Self {
        let mut next = self.clone();
        next.limit = Some(limit);
        next
    }

    /// Sets the OFFSET. A later call replaces the earlier one.
    pub fn offset(&self, offset: u64) -> Self {
        let mut next = self.clone();
        next.offset = Some(offset);
        next
    }

    /// Renders the statement into a SQL string and its bound parameters.
    ///
    /// Clauses are emitted in fixed order, each only when its backing state
    /// is non-empty. Parameters are collected clause by clause, so the
    /// returned list always matches the left-to-right placeholder order of
    /// the returned text.
    ///
    /// Fails with [`BuildError::MissingColumns`] when no result column was
    /// set; errors from nested expressions propagate unchanged.
    pub fn to_sql(&self) -> Result<(String, Vec<Value>)> {
        if self.columns.is_empty() {
            return Err(BuildError::MissingColumns);
        }

        let mut params = vec![];
        let mut sql = String::from("SELECT ");

        if self.distinct {
            sql.push_str("DISTINCT ");
        }

        sql.push_str(&self.columns.join(", "));

        if let Some(from) = &self.from {
            if !from.is_empty() {
                sql.push_str(" FROM ");
                sql.push_str(from);
            }
        }

        if !self.wheres.is_empty() {
            let conditions = predicates_to_sql(&self.wheres, &mut params)?;
            if !conditions.is_empty() {
                sql.push_str(" WHERE ");
                sql.push_str(&conditions);
            }
        }

        if !self.group_bys.is_empty() {
            sql.push_str(" GROUP BY ");
            sql.push_str(&self.group_bys.join(", "));
        }

        if !self.havings.is_empty() {
            let conditions = predicates_to_sql(&self.havings, &mut params)?;
            if !conditions.is_empty() {
                sql.push_str(" HAVING ");
                sql.push_str(&conditions);
            }
        }

        if !self.order_bys.is_empty() {
            sql.push_str(" ORDER BY ");
            sql.push_str(&self.order_bys.join(", "));
        }

        if let Some(limit) = self.limit {
            sql.push_str(&format!(" LIMIT {}", limit));
        }

        if let Some(offset) = self.offset {
            sql.push_str(&format!(" OFFSET {}", offset));
        }

        trace!(%sql, params = params.len(), "built select statement");
        Ok((sql, params))
    }
}

/// Embeds a whole SELECT as a sub-expression. The statement text is
/// embedded as-is; wrap it yourself (e.g. `IN (...)`) where the surrounding
/// syntax requires parentheses.
impl Expression for SelectQuery {
    fn append_sql(&self, params: &mut Vec<Value>) -> Result<String> {
        let (sql, mut bound) = self.to_sql()?;
        params.append(&mut bound);
        Ok(sql)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::eq::EqMap;

    #[test]
    fn renders_columns_after_select_keyword() {
        let (sql, params) = select(["id", "name", "email"]).to_sql().unwrap();

        assert_eq!(sql, "SELECT id, name, email");
        assert!(params.is_empty());
    }

    #[test]
    fn fails_without_result_columns() {
        let err = SelectQuery::new().from("users").to_sql().unwrap_err();

        assert!(matches!(err, BuildError::MissingColumns));
        assert_eq!(
            err.to_string(),
            "select statements must have at least one result column"
        );
    }

    #[test]
    fn distinct_follows_select_keyword() {
        let (sql, _) = select(["name"]).distinct().from("users").to_sql().unwrap();

        assert_eq!(sql, "SELECT DISTINCT name FROM users");
    }

    #[test]
    fn repeated_columns_calls_are_cumulative() {
        let chained = select(["a"]).columns(["b"]).to_sql().unwrap();
        let single = select(["a", "b"]).to_sql().unwrap();

        assert_eq!(chained, single);
    }

    #[test]
    fn later_from_replaces_earlier_one() {
        let (sql, _) = select(["id"]).from("users").from("accounts").to_sql().unwrap();

        assert_eq!(sql, "SELECT id FROM accounts");
    }

    #[test]
    fn where_conditions_join_with_and_in_attachment_order() {
        let (sql, params) = select(["id"])
            .from("users")
            .filter(Predicate::raw("a = ?", [1]))
            .filter(Predicate::raw("b = ?", [2]))
            .to_sql()
            .unwrap();

        assert_eq!(sql, "SELECT id FROM users WHERE a = ? AND b = ?");
        assert_eq!(params, vec![Value::Integer(1), Value::Integer(2)]);
    }

    #[test]
    fn group_by_and_having_render_between_where_and_order_by() {
        let (sql, params) = select(["city", "COUNT(*)"])
            .from("users")
            .filter(Predicate::raw("active = ?", [1]))
            .group_by(["city"])
            .having(Predicate::raw("COUNT(*) > ?", [5]))
            .order_by(["city"])
            .to_sql()
            .unwrap();

        assert_eq!(
            sql,
            "SELECT city, COUNT(*) FROM users WHERE active = ? \
             GROUP BY city HAVING COUNT(*) > ? ORDER BY city"
        );
        assert_eq!(params, vec![Value::Integer(1), Value::Integer(5)]);
    }

    #[test]
    fn limit_and_offset_render_as_decimal_text_without_parameters() {
        let (sql, params) = select(["id"]).from("users").limit(10).offset(20).to_sql().unwrap();

        assert_eq!(sql, "SELECT id FROM users LIMIT 10 OFFSET 20");
        assert!(params.is_empty());
    }

    #[test]
    fn unset_clauses_are_omitted() {
        let (sql, params) = select(["1"]).to_sql().unwrap();

        assert_eq!(sql, "SELECT 1");
        assert!(params.is_empty());
    }

    #[test]
    fn later_limit_replaces_earlier_one() {
        let (sql, _) = select(["id"]).from("users").limit(10).limit(5).to_sql().unwrap();

        assert_eq!(sql, "SELECT id FROM users LIMIT 5");
    }

    #[test]
    fn derived_builders_do_not_affect_their_ancestor() {
        let base = select(["id"]).from("users");
        let forked = base.filter(Predicate::raw("age > ?", [18])).limit(1);

        let (base_sql, base_params) = base.to_sql().unwrap();
        let (forked_sql, forked_params) = forked.to_sql().unwrap();

        assert_eq!(base_sql, "SELECT id FROM users");
        assert!(base_params.is_empty());
        assert_eq!(forked_sql, "SELECT id FROM users WHERE age > ? LIMIT 1");
        assert_eq!(forked_params, vec![Value::Integer(18)]);
    }

    #[test]
    fn where_clause_with_only_empty_predicates_is_omitted() {
        let (sql, params) = select(["id"])
            .from("users")
            .filter(EqMap::new())
            .to_sql()
            .unwrap();

        assert_eq!(sql, "SELECT id FROM users");
        assert!(params.is_empty());
    }

    #[test]
    fn sub_select_embeds_with_its_parameters_in_position() {
        let ids = select(["user_id"])
            .from("orders")
            .filter(Predicate::raw("total > ?", [100]));

        let (inner_sql, _) = ids.to_sql().unwrap();
        let (sql, params) = select(["name"])
            .from("users")
            .filter(Predicate::raw("status = ?", ["active".to_string()]))
            .filter(Predicate::nested(ids))
            .to_sql()
            .unwrap();

        assert_eq!(
            sql,
            format!("SELECT name FROM users WHERE status = ? AND {}", inner_sql)
        );
        assert_eq!(
            params,
            vec![Value::Text("active".to_string()), Value::Integer(100)]
        );
    }
}
