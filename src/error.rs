//! Errors raised when a value is assumed to be present but is not.
//!
//! Only two operations in this crate can fail on their own: assuming the payload
//! of a [`Maybe`](crate::Maybe) that is `None`, and assuming one side of an
//! [`Either`](crate::Either) that holds the other. Both report an
//! [`AssumptionError`]. Callers who prefer their own error type use the
//! `*_or_else` variants, whose producer is only invoked on the failing path.
//!
//! # Example
//!
//! ```rust
//! use curie::{Alternative, AssumptionError, Either, Maybe};
//!
//! let missing: Maybe<i32> = Maybe::none();
//! assert_eq!(missing.assume(), Err(AssumptionError::AbsentValue));
//!
//! let left: Either<i32, &str> = Either::left(1);
//! assert_eq!(
//!     left.assume_r(),
//!     Err(AssumptionError::WrongAlternative(Alternative::Right))
//! );
//! ```

use std::fmt;

use thiserror::Error;

/// One of the two sides of an [`Either`](crate::Either).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Alternative {
    /// The left side.
    Left,
    /// The right side.
    Right,
}

impl fmt::Display for Alternative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alternative::Left => f.write_str("Left"),
            Alternative::Right => f.write_str("Right"),
        }
    }
}

/// Error returned when a payload is assumed but not held.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AssumptionError {
    /// A `Maybe` was assumed to be `Just` but was `None`.
    #[error("cannot provide value from a None-type Maybe")]
    AbsentValue,
    /// An `Either` was assumed to hold the given alternative but held the other.
    #[error("attempted to get value of alternative {0} when it was not present")]
    WrongAlternative(Alternative),
}

impl AssumptionError {
    /// The alternative that was expected, if this is a wrong-alternative error.
    pub fn expected_alternative(&self) -> Option<Alternative> {
        match self {
            AssumptionError::AbsentValue => None,
            AssumptionError::WrongAlternative(alternative) => Some(*alternative),
        }
    }

    pub(crate) fn absent_value(operation: &'static str) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "curie::assume", operation, "assumed value was absent");
        #[cfg(not(feature = "tracing"))]
        let _ = operation;
        AssumptionError::AbsentValue
    }

    pub(crate) fn wrong_alternative(operation: &'static str, expected: Alternative) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "curie::assume",
            operation,
            %expected,
            "assumed alternative was not present"
        );
        #[cfg(not(feature = "tracing"))]
        let _ = operation;
        AssumptionError::WrongAlternative(expected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_value_message() {
        assert_eq!(
            AssumptionError::AbsentValue.to_string(),
            "cannot provide value from a None-type Maybe"
        );
    }

    #[test]
    fn test_wrong_alternative_message_names_expected_side() {
        assert_eq!(
            AssumptionError::WrongAlternative(Alternative::Left).to_string(),
            "attempted to get value of alternative Left when it was not present"
        );
        assert_eq!(
            AssumptionError::WrongAlternative(Alternative::Right).to_string(),
            "attempted to get value of alternative Right when it was not present"
        );
    }

    #[test]
    fn test_expected_alternative() {
        assert_eq!(AssumptionError::AbsentValue.expected_alternative(), None);
        assert_eq!(
            AssumptionError::wrong_alternative("assume_l", Alternative::Left)
                .expected_alternative(),
            Some(Alternative::Left)
        );
    }

    #[test]
    fn test_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(AssumptionError::absent_value("assume"));
        assert!(err.source().is_none());
    }
}

#[cfg(all(test, feature = "tracing"))]
mod tracing_tests {
    use super::*;
    use crate::{Either, Maybe};
    use tracing_test::traced_test;

    #[traced_test]
    #[test]
    fn test_absent_value_is_logged() {
        let _ = AssumptionError::absent_value("assume");
        assert!(logs_contain("assumed value was absent"));
    }

    #[traced_test]
    #[test]
    fn test_wrong_alternative_is_logged() {
        let _ = AssumptionError::wrong_alternative("assume_r", Alternative::Right);
        assert!(logs_contain("assumed alternative was not present"));
    }

    #[traced_test]
    #[test]
    fn test_maybe_assume_logs_operation() {
        assert_eq!(Maybe::<i32>::none().assume(), Err(AssumptionError::AbsentValue));
        assert!(logs_contain("operation=\"assume\""));
    }

    #[traced_test]
    #[test]
    fn test_either_assume_logs_operation_and_expected_side() {
        assert_eq!(
            Either::<i32, i32>::left(1).assume_r(),
            Err(AssumptionError::WrongAlternative(Alternative::Right))
        );
        assert!(logs_contain("operation=\"assume_r\""));
        assert!(logs_contain("expected=Right"));

        let _ = Either::<i32, i32>::right(1).assume_l();
        assert!(logs_contain("operation=\"assume_l\""));
        assert!(logs_contain("expected=Left"));
    }

    #[traced_test]
    #[test]
    fn test_successful_assume_is_not_logged() {
        assert_eq!(Maybe::just(3).assume(), Ok(3));
        assert_eq!(Either::<i32, i32>::right(4).assume_r(), Ok(4));
        assert!(!logs_contain("operation="));
    }

    #[traced_test]
    #[test]
    fn test_custom_producer_is_not_logged() {
        assert_eq!(Maybe::<i32>::none().assume_or_else(|| "absent"), Err("absent"));
        assert_eq!(
            Either::<i32, i32>::left(1).assume_r_or_else(|| "left"),
            Err("left")
        );
        assert!(!logs_contain("curie::assume"));
        assert!(!logs_contain("operation="));
    }
}
