//! An optional value with total, explicit handling of absence.
//!
//! `Maybe<T>` is either `Just(value)` or `None`. Every operation is defined for
//! both variants, so absence never surfaces as an unexpected panic: it is either
//! threaded through (`map`, `flat_map`, `preserve_if`), collapsed to a default
//! (`collapse`, `collapse_with`), or reported as an [`AssumptionError`] by
//! [`Maybe::assume`].
//!
//! # Laws
//!
//! ```text
//! m.map(|x| x) == m                                  (functor identity)
//! m.map(f).map(g) == m.map(|x| g(f(x)))              (functor composition)
//! Maybe::just(v).flat_map(f) == f(v)                 (left identity)
//! m.flat_map(Maybe::just) == m                       (right identity)
//! ```
//!
//! # Example
//!
//! ```rust
//! use curie::Maybe;
//!
//! let port = Maybe::just("8080")
//!     .map(|s| s.parse::<u16>())
//!     .flat_map(|parsed| parsed.map(Maybe::just).unwrap_or(Maybe::none()))
//!     .preserve_if(|p: &u16| *p > 1024)
//!     .collapse(80);
//!
//! assert_eq!(port, 8080);
//! ```

use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::AssumptionError;
use crate::predicate::Predicate;

/// A value that is either present (`Just`) or absent (`None`).
///
/// Equality is structural. `None` hashes identically for every type parameter,
/// and [`Maybe::erased_eq`] compares across type parameters the way a
/// type-erased runtime would: any `None` equals any other `None`.
///
/// # Example
///
/// ```rust
/// use curie::Maybe;
///
/// let present = Maybe::just(4);
/// let absent: Maybe<i32> = Maybe::none();
///
/// assert_eq!(present.map(|x| x + 1), Maybe::just(5));
/// assert_eq!(absent.map(|x| x + 1), Maybe::none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// A present value.
    Just(T),
    /// No value.
    None,
}

impl<T> Maybe<T> {
    // ========== Constructors ==========

    /// Create a `Just` holding `value`.
    #[inline]
    pub fn just(value: T) -> Self {
        Maybe::Just(value)
    }

    /// Create a `None`.
    #[inline]
    pub fn none() -> Self {
        Maybe::None
    }

    /// Returns `true` if this is a `Just`.
    #[inline]
    pub fn is_just(&self) -> bool {
        matches!(self, Maybe::Just(_))
    }

    /// Returns `true` if this is a `None`.
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Maybe::None)
    }

    /// Convert to `Maybe<&T>`.
    #[inline]
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Just(value) => Maybe::Just(value),
            Maybe::None => Maybe::None,
        }
    }

    // ========== Transformations ==========

    /// Transform the payload of a `Just`; a `None` stays `None`.
    ///
    /// `f` is never invoked on `None`.
    #[inline]
    pub fn map<S, F>(self, f: F) -> Maybe<S>
    where
        F: FnOnce(T) -> S,
    {
        match self {
            Maybe::Just(value) => Maybe::Just(f(value)),
            Maybe::None => Maybe::None,
        }
    }

    /// Chain a computation that may itself produce no value.
    ///
    /// `None` short-circuits without invoking `f`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use curie::Maybe;
    ///
    /// let half = |x: i32| if x % 2 == 0 { Maybe::just(x / 2) } else { Maybe::none() };
    ///
    /// assert_eq!(Maybe::just(8).flat_map(half).flat_map(half), Maybe::just(2));
    /// assert_eq!(Maybe::just(6).flat_map(half).flat_map(half), Maybe::none());
    /// ```
    #[inline]
    pub fn flat_map<S, F>(self, f: F) -> Maybe<S>
    where
        F: FnOnce(T) -> Maybe<S>,
    {
        match self {
            Maybe::Just(value) => f(value),
            Maybe::None => Maybe::None,
        }
    }

    // ========== Extraction ==========

    /// Return the payload, or [`AssumptionError::AbsentValue`] if there is none.
    ///
    /// # Example
    ///
    /// ```rust
    /// use curie::{AssumptionError, Maybe};
    ///
    /// assert_eq!(Maybe::just(3).assume(), Ok(3));
    /// assert_eq!(Maybe::<i32>::none().assume(), Err(AssumptionError::AbsentValue));
    /// ```
    #[inline]
    pub fn assume(self) -> Result<T, AssumptionError> {
        match self {
            Maybe::Just(value) => Ok(value),
            Maybe::None => Err(AssumptionError::absent_value("assume")),
        }
    }

    /// Return the payload, or the error built by `on_absent`.
    ///
    /// `on_absent` is invoked at most once, and only when this is `None`.
    #[inline]
    pub fn assume_or_else<E, F>(self, on_absent: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Maybe::Just(value) => Ok(value),
            Maybe::None => Err(on_absent()),
        }
    }

    /// Return the payload, or `default` when there is none.
    #[inline]
    pub fn collapse(self, default: T) -> T {
        match self {
            Maybe::Just(value) => value,
            Maybe::None => default,
        }
    }

    /// Return the payload, or the value produced by `default` when there is none.
    ///
    /// `default` is never invoked on a `Just`.
    #[inline]
    pub fn collapse_with<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Maybe::Just(value) => value,
            Maybe::None => default(),
        }
    }

    // ========== Predicates ==========

    /// Test the payload. A `None` never satisfies anything, and the predicate is
    /// not consulted.
    #[inline]
    pub fn satisfies<P>(&self, predicate: P) -> bool
    where
        P: Predicate<T>,
    {
        match self {
            Maybe::Just(value) => predicate.check(value),
            Maybe::None => false,
        }
    }

    /// Keep a `Just` only if its payload satisfies `predicate`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use curie::Maybe;
    ///
    /// assert_eq!(Maybe::just(4).preserve_if(|x: &i32| x % 2 == 0), Maybe::just(4));
    /// assert_eq!(Maybe::just(3).preserve_if(|x: &i32| x % 2 == 0), Maybe::none());
    /// ```
    #[inline]
    pub fn preserve_if<P>(self, predicate: P) -> Self
    where
        P: Predicate<T>,
    {
        match self {
            Maybe::Just(value) if predicate.check(&value) => Maybe::Just(value),
            _ => Maybe::None,
        }
    }

    /// Drop a `Just` if its payload satisfies `predicate`.
    #[inline]
    pub fn reject_if<P>(self, predicate: P) -> Self
    where
        P: Predicate<T>,
    {
        match self {
            Maybe::Just(value) if !predicate.check(&value) => Maybe::Just(value),
            _ => Maybe::None,
        }
    }

    // ========== Side Effects ==========

    /// Run `f` on the payload if present, then return `self` unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use curie::Maybe;
    ///
    /// let mut seen = Vec::new();
    /// let m = Maybe::just(7).when_present_do(|x| seen.push(*x));
    ///
    /// assert_eq!(m, Maybe::just(7));
    /// assert_eq!(seen, vec![7]);
    /// ```
    #[inline]
    pub fn when_present_do<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Maybe::Just(value) = &self {
            f(value);
        }
        self
    }

    /// Run `f` if there is no payload, then return `self` unchanged.
    #[inline]
    pub fn when_missing_do<F>(self, f: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_none() {
            f();
        }
        self
    }
}

impl<T: 'static> Maybe<T> {
    /// Compare with a `Maybe` of any type parameter.
    ///
    /// Two `None`s are always equal, whatever they were declared to hold. Two
    /// `Just`s are equal when their payloads have the same type and compare equal.
    /// Both payload types must be `'static`, so `Maybe`s borrowing non-`'static`
    /// data (such as `Maybe<&'a str>`) cannot be compared this way.
    ///
    /// # Example
    ///
    /// ```rust
    /// use curie::Maybe;
    ///
    /// assert!(Maybe::<i32>::none().erased_eq(&Maybe::<String>::none()));
    /// assert!(Maybe::just(1).erased_eq(&Maybe::just(1)));
    /// assert!(!Maybe::just(1).erased_eq(&Maybe::just(1u8)));
    /// ```
    pub fn erased_eq<U: 'static>(&self, other: &Maybe<U>) -> bool
    where
        T: PartialEq,
    {
        match (self, other) {
            (Maybe::None, Maybe::None) => true,
            (Maybe::Just(mine), Maybe::Just(theirs)) => (theirs as &dyn Any)
                .downcast_ref::<T>()
                .is_some_and(|theirs| mine == theirs),
            _ => false,
        }
    }
}

// `None` must hash the same for every `T`, so only the tag and payload are fed in.
impl<T: Hash> Hash for Maybe<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Maybe::Just(value) => {
                state.write_u8(1);
                value.hash(state);
            }
            Maybe::None => state.write_u8(0),
        }
    }
}

impl<T> Default for Maybe<T> {
    /// Returns `Maybe::None`.
    fn default() -> Self {
        Maybe::None
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Maybe::Just(value) => write!(f, "Just{{{}}}", value),
            Maybe::None => f.write_str("None{}"),
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Maybe::Just(value),
            None => Maybe::None,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Maybe::Just(value) => Some(value),
            Maybe::None => None,
        }
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        Option::from(self).into_iter()
    }
}
