//! Core predicate trait and logical combinators
//!
//! This module provides the foundational `Predicate` trait, the `PredicateExt`
//! combinator methods, and the aggregation functions `all_of`, `any_of` and
//! `none_of`.

use crate::satisfaction::Satisfaction;

/// A composable predicate over values of type T.
///
/// Every `Fn(&T) -> bool` is a `Predicate<T>`, so closures and function items
/// can be passed anywhere a predicate is expected. Predicates can be combined
/// using logical operators:
/// - `and`: Both predicates must be true
/// - `or`: Either predicate must be true
/// - `xor`: Exactly one predicate must be true
/// - `negate`: Inverts the predicate
///
/// # Example
///
/// ```rust
/// use curie::predicate::*;
///
/// let short_word = (|s: &str| s.len() < 5).and(|s: &str| s.chars().all(char::is_alphabetic));
/// assert!(short_word.check("word"));
/// assert!(!short_word.check("words"));
/// assert!(!short_word.check("w0rd"));
/// ```
pub trait Predicate<T: ?Sized> {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &T) -> bool;
}

// Blanket impl for closures
impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// A predicate behind a trait object.
///
/// Lets predicates of different concrete types share one array, for example
/// when aggregating them with [`all_of`].
pub type BoxedPredicate<'a, T> = Box<dyn Fn(&T) -> bool + 'a>;

/// Extension trait for predicate combinators.
///
/// Provides method chaining for combining predicates with logical operators.
/// All combinators return concrete types; nothing is boxed unless
/// [`boxed`](PredicateExt::boxed) is called.
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// Combine with AND logic.
    ///
    /// `other` is only consulted when `self` holds.
    ///
    /// # Example
    ///
    /// ```rust
    /// use curie::predicate::*;
    ///
    /// let p = (|x: &i32| *x > 0).and(|x: &i32| *x < 100);
    /// assert!(p.check(&50));
    /// assert!(!p.check(&0));
    /// assert!(!p.check(&100));
    /// ```
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// Combine with OR logic.
    ///
    /// `other` is only consulted when `self` does not hold.
    ///
    /// # Example
    ///
    /// ```rust
    /// use curie::predicate::*;
    ///
    /// let p = (|x: &i32| *x < 0).or(|x: &i32| *x > 100);
    /// assert!(p.check(&-5));
    /// assert!(p.check(&150));
    /// assert!(!p.check(&50));
    /// ```
    fn or<P: Predicate<T>>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Combine with exclusive-OR logic.
    ///
    /// Both predicates are always consulted.
    ///
    /// # Example
    ///
    /// ```rust
    /// use curie::predicate::*;
    ///
    /// let p = (|s: &str| s.contains('x')).xor(|s: &str| s.len() == 2);
    /// assert!(p.check("x"));
    /// assert!(p.check("yy"));
    /// assert!(!p.check("xy"));
    /// assert!(!p.check(""));
    /// ```
    fn xor<P: Predicate<T>>(self, other: P) -> Xor<Self, P> {
        Xor(self, other)
    }

    /// Invert the predicate.
    ///
    /// # Example
    ///
    /// ```rust
    /// use curie::predicate::*;
    ///
    /// let p = (|x: &i32| *x > 0).negate();
    /// assert!(p.check(&-5));
    /// assert!(p.check(&0));
    /// assert!(!p.check(&5));
    /// ```
    fn negate(self) -> Not<Self> {
        Not(self)
    }

    /// Apply the predicate and keep the verdict together with the tested value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use curie::{predicate::*, Maybe};
    ///
    /// let even = |x: &i32| x % 2 == 0;
    /// assert_eq!(even.satisfy(4).preserve(), Maybe::just(4));
    /// assert_eq!(even.satisfy(3).reject(), Maybe::just(3));
    /// ```
    fn satisfy(&self, value: T) -> Satisfaction<T>
    where
        T: Sized,
    {
        if self.check(&value) {
            Satisfaction::satisfies(value)
        } else {
            Satisfaction::dissatisfies(value)
        }
    }

    /// Erase the concrete type of this predicate.
    fn boxed<'a>(self) -> BoxedPredicate<'a, T>
    where
        Self: 'a,
    {
        Box::new(move |value: &T| self.check(value))
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// AND combinator - both predicates must be true.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for And<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) && self.1.check(value)
    }
}

/// OR combinator - either predicate must be true.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Or<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) || self.1.check(value)
    }
}

/// XOR combinator - exactly one predicate must be true.
#[derive(Clone, Copy, Debug)]
pub struct Xor<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Xor<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) ^ self.1.check(value)
    }
}

/// NOT combinator - inverts the predicate.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.check(value)
    }
}

/// Check if all predicates are satisfied.
///
/// An empty set of predicates is always satisfied.
#[derive(Clone, Copy, Debug)]
pub struct AllOf<P, const N: usize>(pub [P; N]);

impl<T: ?Sized, P: Predicate<T>, const N: usize> Predicate<T> for AllOf<P, N> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.iter().all(|p| p.check(value))
    }
}

/// Create a predicate that checks if all given predicates are satisfied.
///
/// The predicates share one type; use [`PredicateExt::boxed`] to mix
/// different ones. With no predicates at all the result always holds.
///
/// # Example
///
/// ```rust
/// use curie::predicate::*;
///
/// let bounded = all_of([
///     (|x: &i32| *x > 0).boxed(),
///     is_equal(7).negate().boxed(),
///     (|x: &i32| *x < 10).boxed(),
/// ]);
/// assert!(bounded.check(&5));
/// assert!(!bounded.check(&7));
/// assert!(!bounded.check(&-1));
///
/// let empty = all_of::<EverFalse<i32>, 0>([]);
/// assert!(empty.check(&5));
/// ```
pub fn all_of<P, const N: usize>(predicates: [P; N]) -> AllOf<P, N> {
    AllOf(predicates)
}

/// Check if any predicate is satisfied.
///
/// An empty set of predicates is never satisfied.
#[derive(Clone, Copy, Debug)]
pub struct AnyOf<P, const N: usize>(pub [P; N]);

impl<T: ?Sized, P: Predicate<T>, const N: usize> Predicate<T> for AnyOf<P, N> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.iter().any(|p| p.check(value))
    }
}

/// Create a predicate that checks if any given predicate is satisfied.
///
/// With no predicates at all the result never holds.
///
/// # Example
///
/// ```rust
/// use curie::predicate::*;
///
/// let special_values = any_of([is_equal(1), is_equal(5), is_equal(10)]);
/// assert!(special_values.check(&5));
/// assert!(!special_values.check(&7));
/// ```
pub fn any_of<P, const N: usize>(predicates: [P; N]) -> AnyOf<P, N> {
    AnyOf(predicates)
}

/// Check if no predicates are satisfied.
///
/// Equivalent to `any_of(...).negate()`; an empty set is always satisfied.
#[derive(Clone, Copy, Debug)]
pub struct NoneOf<P, const N: usize>(pub [P; N]);

impl<T: ?Sized, P: Predicate<T>, const N: usize> Predicate<T> for NoneOf<P, N> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.iter().any(|p| p.check(value))
    }
}

/// Create a predicate that checks if no given predicates are satisfied.
///
/// # Example
///
/// ```rust
/// use curie::predicate::*;
///
/// let no_special = none_of([is_equal(1), is_equal(5), is_equal(10)]);
/// assert!(no_special.check(&7));
/// assert!(!no_special.check(&5));
/// ```
pub fn none_of<P, const N: usize>(predicates: [P; N]) -> NoneOf<P, N> {
    NoneOf(predicates)
}
