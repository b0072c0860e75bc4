//! # Curie
//!
//! Small algebraic data types for total, explicit handling of absence and of
//! either/or outcomes.
//!
//! ## What's inside
//!
//! - [`Maybe`] - a value that is present (`Just`) or absent (`None`)
//! - [`Either`] - one of two alternatives, with no bias toward either side
//! - [`Satisfaction`] - the verdict of a predicate, still carrying the tested value
//! - [`Pair`] - an immutable pair, with [`FirstFocus`] and [`SecondFocus`] views
//! - [`predicate`] - composable boolean tests (`and`, `or`, `all_of`, `satisfy`, ...)
//! - [`maybe_to_either`] and [`either_to_pair`] - bridges between the shapes
//!
//! ## Quick Example
//!
//! ```rust
//! use curie::predicate::*;
//! use curie::{either_to_pair, maybe_to_either, Either, Maybe, Pair};
//!
//! // Absence is a value, not a panic
//! let port = Maybe::just(8080).preserve_if(|p: &i32| *p > 1024).collapse(80);
//! assert_eq!(port, 8080);
//!
//! // Either stays symmetric until you collapse it
//! let parsed: Either<String, i32> = Either::right(42);
//! let label = parsed.map_r(|n| n * 2).collapse_into_l(|n| n.to_string());
//! assert_eq!(label, "84");
//!
//! // Predicates compose and reify their verdict
//! let verdict = ever_true().and(ever_false()).satisfy("x");
//! assert!(!verdict.is_satisfied());
//!
//! // Conversions between the shapes
//! assert_eq!(maybe_to_either(Maybe::<i32>::none()), Either::right(()));
//! assert_eq!(
//!     either_to_pair(Either::<_, i32>::left("x")),
//!     Pair::of(Maybe::just("x"), Maybe::none())
//! );
//! ```
//!
//! ## Features
//!
//! - `serde` - `Serialize`/`Deserialize` for `Maybe`, `Either`, `Pair` and `Alternative`
//! - `proptest` - `Arbitrary` impls for `Maybe`, `Either` and `Pair`
//! - `tracing` - debug events when an assumption fails

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod conversion;
pub mod either;
pub mod error;
pub mod maybe;
pub mod pair;
pub mod predicate;
pub mod satisfaction;
pub mod testing;

// Re-exports
pub use conversion::{either_to_pair, maybe_to_either};
pub use either::{partition, Either};
pub use error::{Alternative, AssumptionError};
pub use maybe::Maybe;
pub use pair::{AsPair, FirstFocus, Pair, SecondFocus};
pub use satisfaction::Satisfaction;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::conversion::{either_to_pair, maybe_to_either};
    pub use crate::either::Either;
    pub use crate::error::{Alternative, AssumptionError};
    pub use crate::maybe::Maybe;
    pub use crate::pair::{FirstFocus, Pair, SecondFocus};
    pub use crate::predicate::{Predicate, PredicateExt};
    pub use crate::satisfaction::Satisfaction;
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn maybe_serializes_externally_tagged() {
        assert_eq!(
            serde_json::to_string(&Maybe::just(3)).unwrap(),
            r#"{"Just":3}"#
        );
        assert_eq!(
            serde_json::to_string(&Maybe::<i32>::none()).unwrap(),
            r#""None""#
        );
    }

    #[test]
    fn either_round_trips() {
        let value: Either<String, u8> = Either::left("l".to_string());
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#"{"Left":"l"}"#);
        let back: Either<String, u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn pair_serializes_as_struct() {
        let json = serde_json::to_string(&Pair::of("a", 1)).unwrap();
        assert_eq!(json, r#"{"first":"a","second":1}"#);
        let back: Pair<String, i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Pair::of("a".to_string(), 1));
    }

    #[test]
    fn alternative_serializes_as_name() {
        assert_eq!(
            serde_json::to_string(&Alternative::Right).unwrap(),
            r#""Right""#
        );
    }
}
