//! Expression types for building SQL conditions.
//!
//! This module contains the building blocks of query filters.

pub mod eq;
pub mod logic;

pub use eq::EqMap;
pub use logic::{And, Or};
