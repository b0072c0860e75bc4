//! A semantically neutral sum type for representing one of two possible values.
//!
//! # Either vs Result
//!
//! `Either<L, R>` is a general-purpose sum type with no inherent success/failure semantics.
//! Unlike `Result`, neither variant implies an error condition.
//!
//! # Symmetry
//!
//! `Either` has no bias. Every operation on the left side (`map_l`, `flat_map_l`,
//! `isolate_l`, `assume_l`, ...) has a right-side mirror with the same behavior,
//! and an operation aimed at one side leaves a value on the other side untouched.
//!
//! ```text
//! Either::left(v).swap() == Either::right(v)
//! Either::left(v).map_r(f) == Either::left(v)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use curie::Either;
//!
//! // Representing two valid data sources
//! fn get_data(from_cache: bool) -> Either<String, i32> {
//!     if from_cache {
//!         Either::left("cached".to_string())
//!     } else {
//!         Either::right(42)
//!     }
//! }
//!
//! // Unify both sources into one type
//! let description = get_data(false)
//!     .map_l(|cached| format!("From cache: {}", cached))
//!     .collapse_into_l(|fresh| format!("Fresh value: {}", fresh));
//! assert_eq!(description, "Fresh value: 42");
//! ```

use std::fmt;

use crate::error::{Alternative, AssumptionError};
use crate::maybe::Maybe;
use crate::predicate::Predicate;

/// A value that is either `Left(L)` or `Right(R)`.
///
/// Equality requires the same side and equal payloads: a `Left(x)` never equals
/// a `Right(x)`.
///
/// # Example
///
/// ```rust
/// use curie::Either;
///
/// let left: Either<i32, &str> = Either::left(42);
/// let right: Either<i32, &str> = Either::right("hello");
///
/// // Pattern matching works naturally
/// match left {
///     Either::Left(n) => println!("Got left: {}", n),
///     Either::Right(s) => println!("Got right: {}", s),
/// }
///
/// assert_eq!(right.collapse_into_r(|n| if n > 0 { "positive" } else { "other" }), "hello");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left variant
    Left(L),
    /// The right variant
    Right(R),
}

impl<L, R> Either<L, R> {
    // ========== Constructors ==========

    /// Create a Left value.
    #[inline]
    pub fn left(value: L) -> Self {
        Either::Left(value)
    }

    /// Create a Right value.
    #[inline]
    pub fn right(value: R) -> Self {
        Either::Right(value)
    }

    // ========== Inspection ==========

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// The side this value is on.
    #[inline]
    pub fn alternative(&self) -> Alternative {
        match self {
            Either::Left(_) => Alternative::Left,
            Either::Right(_) => Alternative::Right,
        }
    }

    /// Convert to `Either<&L, &R>`.
    #[inline]
    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    // ========== Transformations ==========

    /// Swap Left and Right, keeping the payload.
    ///
    /// # Example
    ///
    /// ```rust
    /// use curie::Either;
    ///
    /// let left: Either<i32, &str> = Either::left(42);
    /// let right: Either<i32, &str> = Either::right("hello");
    ///
    /// assert_eq!(left.swap(), Either::right(42));
    /// assert_eq!(right.swap(), Either::left("hello"));
    /// ```
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Either::Left(l) => Either::Right(l),
            Either::Right(r) => Either::Left(r),
        }
    }

    /// Transform the left value, passing right values through unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use curie::Either;
    ///
    /// let left: Either<i32, &str> = Either::left(21);
    /// let right: Either<i32, &str> = Either::right("hello");
    ///
    /// assert_eq!(left.map_l(|x| x * 2), Either::left(42));
    /// assert_eq!(right.map_l(|x| x * 2), Either::right("hello"));
    /// ```
    #[inline]
    pub fn map_l<L2, F>(self, f: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> L2,
    {
        match self {
            Either::Left(l) => Either::Left(f(l)),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Transform the right value, passing left values through unchanged.
    #[inline]
    pub fn map_r<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> R2,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(f(r)),
        }
    }

    /// Chain a computation on the left value.
    ///
    /// If this is a `Left`, applies `f` to the value. If this is a `Right`,
    /// passes the right value through unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use curie::Either;
    ///
    /// let left: Either<&str, usize> = Either::left("a");
    /// assert_eq!(left.flat_map_l(|l| Either::<&str, usize>::right(l.len())), Either::right(1));
    ///
    /// let right: Either<&str, usize> = Either::right(7);
    /// assert_eq!(right.flat_map_l(|l| Either::<&str, usize>::right(l.len())), Either::right(7));
    /// ```
    #[inline]
    pub fn flat_map_l<L2, F>(self, f: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> Either<L2, R>,
    {
        match self {
            Either::Left(l) => f(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Chain a computation on the right value.
    ///
    /// If this is a `Right`, applies `f` to the value. If this is a `Left`,
    /// passes the left value through unchanged.
    #[inline]
    pub fn flat_map_r<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> Either<L, R2>,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => f(r),
        }
    }

    // ========== Collapsing ==========

    /// Return the left value, or convert the right value into one.
    ///
    /// # Example
    ///
    /// ```rust
    /// use curie::Either;
    ///
    /// let left: Either<i32, &str> = Either::left(42);
    /// let right: Either<i32, &str> = Either::right("hello");
    ///
    /// assert_eq!(left.collapse_into_l(|s| s.len() as i32), 42);
    /// assert_eq!(right.collapse_into_l(|s| s.len() as i32), 5);
    /// ```
    #[inline]
    pub fn collapse_into_l<F>(self, f: F) -> L
    where
        F: FnOnce(R) -> L,
    {
        match self {
            Either::Left(l) => l,
            Either::Right(r) => f(r),
        }
    }

    /// Return the right value, or convert the left value into one.
    #[inline]
    pub fn collapse_into_r<F>(self, f: F) -> R
    where
        F: FnOnce(L) -> R,
    {
        match self {
            Either::Left(l) => f(l),
            Either::Right(r) => r,
        }
    }

    /// `Just` the left value if this is a `Left`, otherwise `None`.
    #[inline]
    pub fn isolate_l(self) -> Maybe<L> {
        match self {
            Either::Left(l) => Maybe::Just(l),
            Either::Right(_) => Maybe::None,
        }
    }

    /// `Just` the right value if this is a `Right`, otherwise `None`.
    #[inline]
    pub fn isolate_r(self) -> Maybe<R> {
        match self {
            Either::Left(_) => Maybe::None,
            Either::Right(r) => Maybe::Just(r),
        }
    }

    // ========== Predicates ==========

    /// Test the left value; a `Right` never satisfies and the predicate is not consulted.
    #[inline]
    pub fn satisfies_l<P>(&self, predicate: P) -> bool
    where
        P: Predicate<L>,
    {
        match self {
            Either::Left(l) => predicate.check(l),
            Either::Right(_) => false,
        }
    }

    /// Test the right value; a `Left` never satisfies and the predicate is not consulted.
    #[inline]
    pub fn satisfies_r<P>(&self, predicate: P) -> bool
    where
        P: Predicate<R>,
    {
        match self {
            Either::Left(_) => false,
            Either::Right(r) => predicate.check(r),
        }
    }

    /// Test whichever side is present with the predicate for that side.
    ///
    /// # Example
    ///
    /// ```rust
    /// use curie::Either;
    ///
    /// let short = |s: &String| s.len() < 4;
    /// let small = |n: &i32| *n < 4;
    ///
    /// assert!(Either::<String, i32>::left("abc".into()).satisfies(short, small));
    /// assert!(!Either::<String, i32>::right(10).satisfies(short, small));
    /// ```
    #[inline]
    pub fn satisfies<P, Q>(&self, left_predicate: P, right_predicate: Q) -> bool
    where
        P: Predicate<L>,
        Q: Predicate<R>,
    {
        match self {
            Either::Left(l) => left_predicate.check(l),
            Either::Right(r) => right_predicate.check(r),
        }
    }

    // ========== Side Effects ==========

    /// Run `f` on the left value if present, then return `self` unchanged.
    #[inline]
    pub fn when_l_do<F>(self, f: F) -> Self
    where
        F: FnOnce(&L),
    {
        if let Either::Left(l) = &self {
            f(l);
        }
        self
    }

    /// Run `f` on the right value if present, then return `self` unchanged.
    #[inline]
    pub fn when_r_do<F>(self, f: F) -> Self
    where
        F: FnOnce(&R),
    {
        if let Either::Right(r) = &self {
            f(r);
        }
        self
    }

    // ========== Extraction ==========

    /// Return the left value, or [`AssumptionError::WrongAlternative`] naming
    /// `Left` if this is a `Right`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use curie::{Alternative, AssumptionError, Either};
    ///
    /// let left: Either<i32, &str> = Either::left(42);
    /// let right: Either<i32, &str> = Either::right("hello");
    ///
    /// assert_eq!(left.assume_l(), Ok(42));
    /// assert_eq!(
    ///     right.assume_l(),
    ///     Err(AssumptionError::WrongAlternative(Alternative::Left))
    /// );
    /// ```
    #[inline]
    pub fn assume_l(self) -> Result<L, AssumptionError> {
        match self {
            Either::Left(l) => Ok(l),
            Either::Right(_) => Err(AssumptionError::wrong_alternative(
                "assume_l",
                Alternative::Left,
            )),
        }
    }

    /// Return the left value, or the error built by `on_wrong`.
    ///
    /// `on_wrong` is invoked at most once, and only when this is a `Right`.
    #[inline]
    pub fn assume_l_or_else<E, F>(self, on_wrong: F) -> Result<L, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Either::Left(l) => Ok(l),
            Either::Right(_) => Err(on_wrong()),
        }
    }

    /// Return the right value, or [`AssumptionError::WrongAlternative`] naming
    /// `Right` if this is a `Left`.
    #[inline]
    pub fn assume_r(self) -> Result<R, AssumptionError> {
        match self {
            Either::Left(_) => Err(AssumptionError::wrong_alternative(
                "assume_r",
                Alternative::Right,
            )),
            Either::Right(r) => Ok(r),
        }
    }

    /// Return the right value, or the error built by `on_wrong`.
    ///
    /// `on_wrong` is invoked at most once, and only when this is a `Left`.
    #[inline]
    pub fn assume_r_or_else<E, F>(self, on_wrong: F) -> Result<R, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Either::Left(_) => Err(on_wrong()),
            Either::Right(r) => Ok(r),
        }
    }
}

// ========== Trait Implementations ==========

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Either::Left(l) => write!(f, "Left{{{}}}", l),
            Either::Right(r) => write!(f, "Right{{{}}}", r),
        }
    }
}

/// `Ok` becomes `Right`, `Err` becomes `Left`.
impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(r) => Either::Right(r),
            Err(l) => Either::Left(l),
        }
    }
}

/// `Right` becomes `Ok`, `Left` becomes `Err`.
impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(l) => Err(l),
            Either::Right(r) => Ok(r),
        }
    }
}

// ========== Collection Utilities ==========

/// Partition an iterator of Either into two vectors.
///
/// # Example
///
/// ```rust
/// use curie::either::{Either, partition};
///
/// let items = vec![
///     Either::left(1),
///     Either::right("a"),
///     Either::left(2),
///     Either::right("b"),
/// ];
///
/// let (lefts, rights) = partition(items);
/// assert_eq!(lefts, vec![1, 2]);
/// assert_eq!(rights, vec!["a", "b"]);
/// ```
pub fn partition<L, R, I>(iter: I) -> (Vec<L>, Vec<R>)
where
    I: IntoIterator<Item = Either<L, R>>,
{
    let mut lefts = Vec::new();
    let mut rights = Vec::new();

    for item in iter {
        match item {
            Either::Left(l) => lefts.push(l),
            Either::Right(r) => rights.push(r),
        }
    }

    (lefts, rights)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Slot, Toggle};

    #[test]
    fn test_constructors() {
        assert!(Either::<i32, &str>::left(42).is_left());
        assert!(Either::<i32, &str>::right("hello").is_right());
    }

    #[test]
    fn test_alternative() {
        assert_eq!(Either::<i32, i32>::left(1).alternative(), Alternative::Left);
        assert_eq!(Either::<i32, i32>::right(1).alternative(), Alternative::Right);
    }

    #[test]
    fn test_equality_requires_same_side() {
        let left: Either<i32, i32> = Either::left(1);
        let right: Either<i32, i32> = Either::right(1);
        assert_ne!(left, right);
        assert_eq!(left, Either::left(1));
        assert_ne!(left, Either::left(2));
    }

    #[test]
    fn test_swap() {
        let e: Either<i32, &str> = Either::left(42);
        assert_eq!(e.swap(), Either::right(42));

        let e: Either<i32, &str> = Either::right("hello");
        assert_eq!(e.swap(), Either::left("hello"));
    }

    #[test]
    fn test_map_l() {
        let e: Either<i32, &str> = Either::left(21);
        assert_eq!(e.map_l(|x| x * 2), Either::left(42));

        let e: Either<i32, &str> = Either::right("hello");
        assert_eq!(e.map_l(|x| x * 2), Either::right("hello"));
    }

    #[test]
    fn test_map_r() {
        let e: Either<i32, i32> = Either::right(21);
        assert_eq!(e.map_r(|x| x * 2), Either::right(42));

        let e: Either<i32, i32> = Either::left(100);
        assert_eq!(e.map_r(|x| x * 2), Either::left(100));
    }

    #[test]
    fn test_map_on_other_side_never_invokes() {
        let invoked = Toggle::off();
        let e: Either<i32, i32> = Either::left(1);
        let _ = e.map_r(|x| {
            invoked.turn_on();
            x
        });
        assert!(!invoked.is_on());
    }

    #[test]
    fn test_flat_map_l() {
        let e: Either<&str, usize> = Either::left("a");
        assert_eq!(e.flat_map_l(|l| Either::<&str, usize>::right(l.len())), Either::right(1));

        let e: Either<&str, usize> = Either::left("a");
        assert_eq!(e.flat_map_l(|l| Either::<usize, usize>::left(l.len())), Either::left(1));

        let e: Either<&str, usize> = Either::right(9);
        assert_eq!(e.flat_map_l(|l| Either::<usize, usize>::left(l.len())), Either::right(9));
    }

    #[test]
    fn test_flat_map_r() {
        let e: Either<usize, &str> = Either::right("ab");
        assert_eq!(e.flat_map_r(|r| Either::<usize, &str>::left(r.len())), Either::left(2));

        let e: Either<usize, &str> = Either::left(9);
        assert_eq!(e.flat_map_r(|r| Either::<usize, usize>::right(r.len())), Either::left(9));
    }

    #[test]
    fn test_collapse_into() {
        let left: Either<i32, &str> = Either::left(42);
        let right: Either<i32, &str> = Either::right("hello");

        assert_eq!(left.collapse_into_l(|s| s.len() as i32), 42);
        assert_eq!(right.collapse_into_l(|s| s.len() as i32), 5);

        let left: Either<i32, String> = Either::left(42);
        let right: Either<i32, String> = Either::right("hello".to_string());

        assert_eq!(left.collapse_into_r(|n| n.to_string()), "42");
        assert_eq!(right.collapse_into_r(|n| n.to_string()), "hello");
    }

    #[test]
    fn test_isolate() {
        let left: Either<i32, &str> = Either::left(42);
        assert_eq!(left.isolate_l(), Maybe::just(42));
        assert_eq!(left.isolate_r(), Maybe::none());

        let right: Either<i32, &str> = Either::right("hello");
        assert_eq!(right.isolate_l(), Maybe::none());
        assert_eq!(right.isolate_r(), Maybe::just("hello"));
    }

    #[test]
    fn test_satisfies_sides() {
        let left: Either<i32, &str> = Either::left(4);
        assert!(left.satisfies_l(|x: &i32| *x == 4));
        assert!(!left.satisfies_l(|x: &i32| *x == 5));

        let consulted = Toggle::off();
        assert!(!left.satisfies_r(|_: &&str| {
            consulted.turn_on();
            true
        }));
        assert!(!consulted.is_on());

        let right: Either<i32, &str> = Either::right("x");
        assert!(right.satisfies_r(|s: &&str| *s == "x"));
        assert!(!right.satisfies_l(|_: &i32| true));
    }

    #[test]
    fn test_satisfies_uses_matching_predicate_only() {
        let consulted = Toggle::off();
        let left: Either<i32, i32> = Either::left(1);
        let result = left.satisfies(
            |x: &i32| *x == 1,
            |_: &i32| {
                consulted.turn_on();
                false
            },
        );
        assert!(result);
        assert!(!consulted.is_on());

        let right: Either<i32, i32> = Either::right(1);
        assert!(!right.satisfies(|_: &i32| true, |x: &i32| *x == 2));
    }

    #[test]
    fn test_when_l_do() {
        let slot = Slot::new(0);
        let e: Either<i32, &str> = Either::left(3);
        assert_eq!(e.when_l_do(|l| slot.overwrite(*l)), Either::left(3));
        assert!(slot.matches(&3));

        let slot = Slot::new(0);
        let e: Either<i32, &str> = Either::right("x");
        assert_eq!(e.when_l_do(|l| slot.overwrite(*l)), Either::right("x"));
        assert!(slot.matches(&0));
    }

    #[test]
    fn test_when_r_do() {
        let slot = Slot::new("");
        let e: Either<i32, &str> = Either::right("x");
        assert_eq!(e.when_r_do(|r| slot.overwrite(*r)), Either::right("x"));
        assert!(slot.matches(&"x"));

        let slot = Slot::new("");
        let e: Either<i32, &str> = Either::left(3);
        assert_eq!(e.when_r_do(|r| slot.overwrite(*r)), Either::left(3));
        assert!(slot.matches(&""));
    }

    #[test]
    fn test_assume_l() {
        let left: Either<i32, &str> = Either::left(42);
        assert_eq!(left.assume_l(), Ok(42));

        let right: Either<i32, &str> = Either::right("hello");
        assert_eq!(
            right.assume_l(),
            Err(AssumptionError::WrongAlternative(Alternative::Left))
        );
    }

    #[test]
    fn test_assume_r() {
        let right: Either<i32, &str> = Either::right("hello");
        assert_eq!(right.assume_r(), Ok("hello"));

        let left: Either<i32, &str> = Either::left(42);
        assert_eq!(
            left.assume_r(),
            Err(AssumptionError::WrongAlternative(Alternative::Right))
        );
    }

    #[test]
    fn test_assume_or_else_is_lazy() {
        let produced = Toggle::off();
        let left: Either<i32, &str> = Either::left(42);
        let result: Result<i32, &str> = left.assume_l_or_else(|| {
            produced.turn_on();
            "custom"
        });
        assert_eq!(result, Ok(42));
        assert!(!produced.is_on());

        let result: Result<&str, &str> = left.assume_r_or_else(|| {
            produced.turn_on();
            "custom"
        });
        assert_eq!(result, Err("custom"));
        assert!(produced.is_on());
    }

    #[test]
    fn test_display() {
        assert_eq!(Either::<i32, &str>::left(1).to_string(), "Left{1}");
        assert_eq!(Either::<i32, &str>::right("x").to_string(), "Right{x}");
    }

    #[test]
    fn test_result_conversion() {
        let ok: Result<i32, &str> = Ok(42);
        let either: Either<&str, i32> = ok.into();
        assert_eq!(either, Either::right(42));

        let err: Result<i32, &str> = Err("error");
        let either: Either<&str, i32> = err.into();
        assert_eq!(either, Either::left("error"));

        let result: Result<i32, &str> = Either::<&str, i32>::right(42).into();
        assert_eq!(result, Ok(42));
    }

    #[test]
    fn test_partition() {
        let items = vec![
            Either::left(1),
            Either::right("a"),
            Either::left(2),
            Either::right("b"),
        ];

        let (lefts, rights) = partition(items);
        assert_eq!(lefts, vec![1, 2]);
        assert_eq!(rights, vec!["a", "b"]);
    }
}
