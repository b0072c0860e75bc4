//! Predicate prelude for convenient imports
//!
//! This module re-exports the most commonly used predicate types and functions.
//!
//! # Example
//!
//! ```rust
//! use curie::predicate::prelude::*;
//!
//! let small = is(|x: &i32| *x < 10).and(is_not(is_equal(3)));
//! assert!(small.check(&4));
//! assert!(!small.check(&3));
//! ```

// Core trait
pub use super::combinators::{BoxedPredicate, Predicate, PredicateExt};

// Logical combinators
pub use super::combinators::{all_of, any_of, none_of, And, Not, Or, Xor};

// Constants and construction
pub use super::common::{enrich, ever_false, ever_true, is, is_equal, is_not};
