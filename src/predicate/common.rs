//! Constant predicates, equality, and predicate construction helpers.

use std::fmt;
use std::marker::PhantomData;

use super::combinators::{Not, Predicate};

/// Predicate that holds for every input.
pub struct EverTrue<T: ?Sized>(PhantomData<fn(&T)>);

impl<T: ?Sized> Predicate<T> for EverTrue<T> {
    #[inline]
    fn check(&self, _value: &T) -> bool {
        true
    }
}

/// Predicate that holds for no input.
pub struct EverFalse<T: ?Sized>(PhantomData<fn(&T)>);

impl<T: ?Sized> Predicate<T> for EverFalse<T> {
    #[inline]
    fn check(&self, _value: &T) -> bool {
        false
    }
}

// Derives would demand `T: Clone` and friends, which unsized inputs never meet.
macro_rules! impl_constant_predicate {
    ($name:ident) => {
        impl<T: ?Sized> Clone for $name<T> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<T: ?Sized> Copy for $name<T> {}

        impl<T: ?Sized> Default for $name<T> {
            fn default() -> Self {
                $name(PhantomData)
            }
        }

        impl<T: ?Sized> fmt::Debug for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(stringify!($name))
            }
        }
    };
}

impl_constant_predicate!(EverTrue);
impl_constant_predicate!(EverFalse);

/// Create a predicate that ignores its input and always holds.
///
/// # Example
///
/// ```rust
/// use curie::predicate::*;
///
/// assert!(ever_true().check(&0));
/// assert!(ever_true().check(&None::<i32>));
/// ```
pub fn ever_true<T: ?Sized>() -> EverTrue<T> {
    EverTrue(PhantomData)
}

/// Create a predicate that ignores its input and never holds.
pub fn ever_false<T: ?Sized>() -> EverFalse<T> {
    EverFalse(PhantomData)
}

/// Predicate for equality with a target value.
#[derive(Clone, Copy, Debug)]
pub struct IsEqual<T>(pub T);

impl<T: PartialEq> Predicate<T> for IsEqual<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value == self.0
    }
}

/// Create a predicate that checks for equality with `target`.
///
/// Absence is compared like any other value, so `is_equal(None)` holds exactly
/// for `None` inputs.
///
/// # Example
///
/// ```rust
/// use curie::predicate::*;
///
/// assert!(is_equal("x").check(&"x"));
/// assert!(!is_equal(1).check(&2));
///
/// assert!(is_equal(None::<&str>).check(&None));
/// assert!(!is_equal(None).check(&Some("x")));
/// assert!(!is_equal(Some("x")).check(&None));
/// ```
pub fn is_equal<T: PartialEq>(target: T) -> IsEqual<T> {
    IsEqual(target)
}

/// Use `predicate` as is; reads naturally at the head of a combinator chain.
///
/// # Example
///
/// ```rust
/// use curie::predicate::*;
///
/// let p = is(|s: &str| s.contains('x')).and(|s: &str| s.len() == 2);
/// assert!(p.check("xy"));
/// ```
#[inline]
pub fn is<T: ?Sized, P: Predicate<T>>(predicate: P) -> P {
    predicate
}

/// Negate `predicate`.
#[inline]
pub fn is_not<T: ?Sized, P: Predicate<T>>(predicate: P) -> Not<P> {
    Not(predicate)
}

/// Turn any predicate into one with the combinator methods available.
///
/// Every `Fn(&T) -> bool` already is a [`Predicate`], and every predicate
/// already has the [`PredicateExt`](super::PredicateExt) methods, so the
/// argument comes back as is: no wrapper is ever built around it.
///
/// # Example
///
/// ```rust
/// use curie::predicate::*;
///
/// fn starts_lower(s: &str) -> bool {
///     s.chars().next().is_some_and(char::is_lowercase)
/// }
///
/// let p = enrich(starts_lower).and(|s: &str| s.len() > 2);
/// assert!(p.check("abc"));
/// assert!(!p.check("Abc"));
/// ```
#[inline]
pub fn enrich<T: ?Sized, P: Predicate<T>>(base: P) -> P {
    base
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::PredicateExt;

    #[test]
    fn test_ever_true() {
        assert!(ever_true().check(&0));
        assert!(ever_true().check(&None::<i32>));
        assert!(ever_true().check(""));
    }

    #[test]
    fn test_constants_combine() {
        let verdict = ever_true().and(ever_false()).satisfy("x");
        assert!(!verdict.is_satisfied());
        assert!(ever_true().or(ever_false()).check(&1));
        assert_eq!(format!("{:?}", ever_true::<u8>()), "EverTrue");
    }

    #[test]
    fn test_ever_false() {
        assert!(!ever_false().check(&1));
        assert!(!ever_false().check(&None::<i32>));
    }

    #[test]
    fn test_is_equal() {
        assert!(is_equal("x").check(&"x"));
        assert!(!is_equal(1).check(&2));
    }

    #[test]
    fn test_is_equal_handles_absence() {
        assert!(!is_equal(None).check(&Some("x")));
        assert!(!is_equal(Some("x")).check(&None));
        assert!(is_equal(None::<&str>).check(&None));
    }

    #[test]
    fn test_is() {
        assert!(is(|s: &str| s == "x").check("x"));
        assert!(!is(|s: &str| s == "x").check("y"));
    }

    #[test]
    fn test_is_not() {
        assert!(!is_not(|s: &str| s == "x").check("x"));
        assert!(is_not(|s: &str| s == "x").check("y"));
    }

    #[test]
    fn test_enrich_adds_combinators() {
        fn is_x(s: &str) -> bool {
            s == "x"
        }
        assert!(enrich(is_x).check("x"));
        assert!(enrich(is_x).or(|s: &str| s == "y").check("y"));
    }

    #[test]
    fn test_enrich_returns_same_predicate() {
        let base = |s: &str| s == "x";
        let enriched = enrich(&base);
        assert!(std::ptr::eq(enriched, &base));

        let combined = is_equal(3).and(ever_true());
        let enriched: crate::predicate::And<IsEqual<i32>, EverTrue<i32>> = enrich(combined);
        assert!(enriched.check(&3));
    }
}
