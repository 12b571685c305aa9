//! Column-to-value equality maps.
//!
//! [`EqMap`] is the map form of a WHERE/HAVING condition: each entry renders
//! as `column = ?` (or `column IS NULL` for null values), joined with `AND`.

use std::collections::BTreeMap;

use rusqlite::types::Value;

use crate::{error::Result, traits::Expression};

/// An equality condition over one or more columns.
///
/// Entries render in key-sorted order so the output is deterministic
/// regardless of insertion order. A [`Value::Null`] entry renders as
/// `column IS NULL` and contributes no parameter.
///
/// # Example
///
/// ```rust
/// use sqlgen::{EqMap, Expression};
///
/// let eq = EqMap::new()
///     .value("status", "active".to_string())
///     .value("deleted_at", rusqlite::types::Value::Null);
/// let mut params = vec![];
/// let sql = eq.append_sql(&mut params).unwrap();
/// assert_eq!(sql, "deleted_at IS NULL AND status = ?");
/// assert_eq!(params.len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct EqMap(BTreeMap<String, Value>);

impl EqMap {
    /// Creates an empty equality map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a `column = value` entry. A later entry for the same column
    /// replaces the earlier one.
    pub fn value<K: Into<String>, V: Into<Value>>(mut self, column: K, value: V) -> Self {
        self.0.insert(column.into(), value.into());
        self
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for EqMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl Expression for EqMap {
    fn append_sql(&self, params: &mut Vec<Value>) -> Result<String> {
        let mut parts = Vec::with_capacity(self.0.len());
        for (column, value) in &self.0 {
            if matches!(value, Value::Null) {
                parts.push(format!("{} IS NULL", column));
            } else {
                params.push(value.clone());
                parts.push(format!("{} = ?", column));
            }
        }
        Ok(parts.join(" AND "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_entries_in_key_order() {
        let eq = EqMap::new()
            .value("b", 2)
            .value("a", 1)
            .value("c", 3);

        let mut params = vec![];
        let sql = eq.append_sql(&mut params).unwrap();

        assert_eq!(sql, "a = ? AND b = ? AND c = ?");
        assert_eq!(
            params,
            vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)]
        );
    }

    #[test]
    fn null_value_renders_is_null_without_parameter() {
        let eq = EqMap::new().value("deleted_at", Value::Null).value("id", 7);

        let mut params = vec![];
        let sql = eq.append_sql(&mut params).unwrap();

        assert_eq!(sql, "deleted_at IS NULL AND id = ?");
        assert_eq!(params, vec![Value::Integer(7)]);
    }

    #[test]
    fn later_entry_replaces_earlier_one() {
        let eq = EqMap::new().value("id", 1).value("id", 2);

        let mut params = vec![];
        let sql = eq.append_sql(&mut params).unwrap();

        assert_eq!(sql, "id = ?");
        assert_eq!(params, vec![Value::Integer(2)]);
    }

    #[test]
    fn empty_map_renders_nothing() {
        let mut params = vec![];
        let sql = EqMap::new().append_sql(&mut params).unwrap();

        assert!(sql.is_empty());
        assert!(params.is_empty());
    }

    #[test]
    fn builds_from_iterator() {
        let eq: EqMap = [("name", "soar".to_string())].into_iter().collect();

        let mut params = vec![];
        let sql = eq.append_sql(&mut params).unwrap();

        assert_eq!(sql, "name = ?");
        assert_eq!(params, vec![Value::Text("soar".to_string())]);
    }
}
