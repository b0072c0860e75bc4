//! Views on a single slot of a [`Pair`].
//!
//! A focus owns the pair it was built from and adds nothing to it, so it is
//! equal to that pair, to the other focus on it, and hashes the same.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::{sealed, AsPair, Pair};

/// A view of a [`Pair`] through its first slot.
///
/// # Example
///
/// ```rust
/// use curie::{FirstFocus, Pair};
///
/// let focus = FirstFocus::on(Pair::of("String", 5));
///
/// assert_eq!(*focus.isolate(), "String");
/// assert_eq!(focus.replace(99), Pair::of(99, 5));
/// assert_eq!(focus.map(str::len).unfocus(), Pair::of(6, 5));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct FirstFocus<F, S> {
    pair: Pair<F, S>,
}

impl<F, S> FirstFocus<F, S> {
    /// Focus on the first slot of `pair`.
    #[inline]
    pub fn on(pair: Pair<F, S>) -> Self {
        FirstFocus { pair }
    }

    /// Give back the underlying pair.
    #[inline]
    pub fn unfocus(self) -> Pair<F, S> {
        self.pair
    }

    /// Replace the first value, keeping the focus.
    #[inline]
    pub fn replace<F2>(self, new_first: F2) -> FirstFocus<F2, S> {
        FirstFocus::on(self.pair.replace_first(new_first))
    }

    /// The first value.
    #[inline]
    pub fn isolate(&self) -> &F {
        self.pair.isolate_first()
    }

    /// Transform the first value, keeping the focus.
    #[inline]
    pub fn map<F2, G>(self, f: G) -> FirstFocus<F2, S>
    where
        G: FnOnce(F) -> F2,
    {
        FirstFocus::on(self.pair.map_first(f))
    }

    /// Run `f` on the first value, then return `self` unchanged.
    #[inline]
    pub fn with_do<G>(self, f: G) -> Self
    where
        G: FnOnce(&F),
    {
        FirstFocus::on(self.pair.with_first_do(f))
    }
}

/// A view of a [`Pair`] through its second slot.
#[derive(Clone, Copy, Debug)]
pub struct SecondFocus<F, S> {
    pair: Pair<F, S>,
}

impl<F, S> SecondFocus<F, S> {
    /// Focus on the second slot of `pair`.
    #[inline]
    pub fn on(pair: Pair<F, S>) -> Self {
        SecondFocus { pair }
    }

    /// Give back the underlying pair.
    #[inline]
    pub fn unfocus(self) -> Pair<F, S> {
        self.pair
    }

    /// Replace the second value, keeping the focus.
    #[inline]
    pub fn replace<S2>(self, new_second: S2) -> SecondFocus<F, S2> {
        SecondFocus::on(self.pair.replace_second(new_second))
    }

    /// The second value.
    #[inline]
    pub fn isolate(&self) -> &S {
        self.pair.isolate_second()
    }

    /// Transform the second value, keeping the focus.
    #[inline]
    pub fn map<S2, G>(self, f: G) -> SecondFocus<F, S2>
    where
        G: FnOnce(S) -> S2,
    {
        SecondFocus::on(self.pair.map_second(f))
    }

    /// Run `f` on the second value, then return `self` unchanged.
    #[inline]
    pub fn with_do<G>(self, f: G) -> Self
    where
        G: FnOnce(&S),
    {
        SecondFocus::on(self.pair.with_second_do(f))
    }
}

macro_rules! impl_pair_view {
    ($view:ident, $label:literal) => {
        impl<F, S> sealed::Sealed for $view<F, S> {}

        impl<F, S> AsPair<F, S> for $view<F, S> {
            #[inline]
            fn as_pair(&self) -> &Pair<F, S> {
                &self.pair
            }
        }

        impl<F, S, O> PartialEq<O> for $view<F, S>
        where
            F: PartialEq,
            S: PartialEq,
            O: AsPair<F, S>,
        {
            fn eq(&self, other: &O) -> bool {
                self.pair.eq(other.as_pair())
            }
        }

        impl<F: Eq, S: Eq> Eq for $view<F, S> {}

        impl<F: Hash, S: Hash> Hash for $view<F, S> {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.pair.hash(state);
            }
        }

        impl<F: fmt::Display, S: fmt::Display> fmt::Display for $view<F, S> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($label, "{{{}}}"), self.pair)
            }
        }

        impl<F, S> From<Pair<F, S>> for $view<F, S> {
            fn from(pair: Pair<F, S>) -> Self {
                $view::on(pair)
            }
        }
    };
}

impl_pair_view!(FirstFocus, "FirstFocus");
impl_pair_view!(SecondFocus, "SecondFocus");
