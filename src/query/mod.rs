//! The statement builder.
//!
//! This module provides a strongly-typed interface for constructing SQL
//! SELECT statements without manually concatenating strings. The builder is
//! immutable: every chainable method returns a new value, leaving its
//! receiver untouched, and the final [`SelectQuery::to_sql`] call produces
//! the SQL text together with its bound parameter list.
//!
//! # Example
//!
//! ```rust
//! use sqlgen::{select, Predicate};
//!
//! let (sql, params) = select(["id", "username", "email"])
//!     .from("users")
//!     .filter("active = 1")
//!     .filter(Predicate::raw("created_at > ?", ["2024-01-01".to_string()]))
//!     .order_by(["created_at DESC"])
//!     .limit(10)
//!     .to_sql()
//!     .unwrap();
//!
//! assert!(sql.starts_with("SELECT id, username, email FROM users WHERE"));
//! assert_eq!(params.len(), 1);
//! ```
//!
//! # Submodules
//!
//! - [`clause`] — predicate normalization and AND-joining shared by the
//!   WHERE and HAVING clauses.
//! - [`select`] — implementation of [`SelectQuery`].

pub mod clause;
pub mod select;

pub use clause::Predicate;
pub use select::{select, SelectQuery};
