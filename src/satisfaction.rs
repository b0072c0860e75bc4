//! The reified outcome of testing a value against a predicate.
//!
//! A `Satisfaction<T>` carries the tested value together with the verdict. It
//! is meant to be transient: produced by
//! [`PredicateExt::satisfy`](crate::predicate::PredicateExt::satisfy) and
//! immediately piped into a concrete value through `preserve`, `reject` or one
//! of the collapse operations.
//!
//! # Example
//!
//! ```rust
//! use curie::predicate::*;
//!
//! let adult = |age: &u32| *age >= 18;
//! let label = adult.satisfy(21).pipe_collapse(
//!     |age| format!("{age}: admitted"),
//!     |age| format!("{age}: refused"),
//! );
//! assert_eq!(label, "21: admitted");
//! ```

use crate::maybe::Maybe;

/// A value that either satisfied or dissatisfied some predicate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Satisfaction<T> {
    /// The value passed the test.
    Satisfied(T),
    /// The value failed the test.
    Dissatisfied(T),
}

impl<T> Satisfaction<T> {
    /// Record that `value` satisfied a predicate.
    #[inline]
    pub fn satisfies(value: T) -> Self {
        Satisfaction::Satisfied(value)
    }

    /// Record that `value` dissatisfied a predicate.
    #[inline]
    pub fn dissatisfies(value: T) -> Self {
        Satisfaction::Dissatisfied(value)
    }

    /// Returns `true` for a satisfied verdict.
    #[inline]
    pub fn is_satisfied(&self) -> bool {
        matches!(self, Satisfaction::Satisfied(_))
    }

    /// `Just(value)` if satisfied, otherwise `None`.
    #[inline]
    pub fn preserve(self) -> Maybe<T> {
        match self {
            Satisfaction::Satisfied(value) => Maybe::Just(value),
            Satisfaction::Dissatisfied(_) => Maybe::None,
        }
    }

    /// `Just(value)` if dissatisfied, otherwise `None`.
    #[inline]
    pub fn reject(self) -> Maybe<T> {
        match self {
            Satisfaction::Satisfied(_) => Maybe::None,
            Satisfaction::Dissatisfied(value) => Maybe::Just(value),
        }
    }

    /// Select one of two already computed values by verdict.
    #[inline]
    pub fn collapse<S>(self, if_satisfied: S, if_dissatisfied: S) -> S {
        match self {
            Satisfaction::Satisfied(_) => if_satisfied,
            Satisfaction::Dissatisfied(_) => if_dissatisfied,
        }
    }

    /// Select by verdict and invoke only the matching supplier.
    #[inline]
    pub fn lazy_collapse<S, F, G>(self, if_satisfied: F, if_dissatisfied: G) -> S
    where
        F: FnOnce() -> S,
        G: FnOnce() -> S,
    {
        match self {
            Satisfaction::Satisfied(_) => if_satisfied(),
            Satisfaction::Dissatisfied(_) => if_dissatisfied(),
        }
    }

    /// Select by verdict and pass the tested value to the matching function.
    #[inline]
    pub fn pipe_collapse<S, F, G>(self, if_satisfied: F, if_dissatisfied: G) -> S
    where
        F: FnOnce(T) -> S,
        G: FnOnce(T) -> S,
    {
        match self {
            Satisfaction::Satisfied(value) => if_satisfied(value),
            Satisfaction::Dissatisfied(value) => if_dissatisfied(value),
        }
    }

    /// Run `f` on the value if it satisfied the predicate; return `self` unchanged.
    #[inline]
    pub fn when_satisfied_do<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Satisfaction::Satisfied(value) = &self {
            f(value);
        }
        self
    }

    /// Run `f` on the value if it dissatisfied the predicate; return `self` unchanged.
    #[inline]
    pub fn when_dissatisfied_do<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Satisfaction::Dissatisfied(value) = &self {
            f(value);
        }
        self
    }
}
