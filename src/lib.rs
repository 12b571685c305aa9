//! Programmatic builder for SQL SELECT statements.
//!
//! Statements are assembled clause by clause through an immutable builder
//! and rendered to a text string plus an ordered list of bound parameters.
//! Nothing here connects to a database or executes anything; the output is
//! ready to hand to a driver such as `rusqlite` (whose
//! [`Value`](rusqlite::types::Value) type is used for parameters).
//!
//! ```rust
//! use sqlgen::{select, Predicate};
//!
//! let (sql, params) = select(["id", "name"])
//!     .from("users")
//!     .filter(Predicate::raw("age > ?", [18]))
//!     .order_by(["name"])
//!     .limit(10)
//!     .to_sql()
//!     .unwrap();
//!
//! assert_eq!(
//!     sql,
//!     "SELECT id, name FROM users WHERE age > ? ORDER BY name LIMIT 10"
//! );
//! ```

pub mod error;
pub mod expr;
pub mod helpers;
pub mod query;
pub mod traits;

pub use error::{BuildError, Result};
pub use expr::{And, EqMap, Or};
pub use helpers::*;
pub use query::*;
pub use traits::Expression;
