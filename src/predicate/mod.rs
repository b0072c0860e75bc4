//! Predicate combinators for composable boolean tests
//!
//! This module provides composable predicate combinators. Predicates can be
//! combined using logical operators (`and`, `or`, `xor`, `negate`) or
//! aggregated (`all_of`, `any_of`, `none_of`) to build complex tests from
//! simple, reusable pieces, and applied with `satisfy` to obtain a
//! [`Satisfaction`](crate::Satisfaction) that keeps the tested value.
//!
//! # Philosophy
//!
//! Instead of writing verbose boolean expressions or ad-hoc helper functions,
//! predicate combinators allow you to:
//!
//! - Build complex predicates from simple, reusable pieces
//! - Compose predicates using familiar logical operators
//! - Reify the outcome of a test and route the value on from there
//!
//! # Example
//!
//! ```rust
//! use curie::predicate::*;
//! use curie::Maybe;
//!
//! let reserved = any_of([is_equal("root"), is_equal("admin")]);
//! let valid = is_not(reserved).and(|name: &&str| !name.is_empty());
//!
//! assert_eq!(valid.satisfy("alice").preserve(), Maybe::just("alice"));
//! assert_eq!(valid.satisfy("root").preserve(), Maybe::none());
//! ```

mod combinators;
mod common;

pub mod prelude;

// Re-export core trait
pub use combinators::{BoxedPredicate, Predicate, PredicateExt};

// Re-export combinator types
pub use combinators::{all_of, any_of, none_of, AllOf, And, AnyOf, NoneOf, Not, Or, Xor};

// Re-export constant and construction helpers
pub use common::{enrich, ever_false, ever_true, is, is_equal, is_not, EverFalse, EverTrue, IsEqual};
