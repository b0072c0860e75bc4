//! An immutable two-element product and views that focus on one of its slots.
//!
//! `Pair<F, S>` holds exactly one `F` and one `S`. Operations never modify a
//! pair in place: replacing or mapping a slot produces a new pair and moves the
//! untouched slot across.
//!
//! [`FirstFocus`] and [`SecondFocus`] redirect `replace`, `isolate`, `map` and
//! `with_do` to one slot while remaining interchangeable with the pair itself:
//! a pair, its first focus and its second focus all compare equal and hash
//! identically. Every comparison goes through [`AsPair`], which exposes the
//! underlying pair of each of the three shapes.
//!
//! # Example
//!
//! ```rust
//! use curie::{FirstFocus, Pair, SecondFocus};
//!
//! let pair = Pair::with("s").and(5);
//! assert_eq!(pair.replace_first(99), Pair::of(99, 5));
//!
//! assert_eq!(FirstFocus::on(pair), pair);
//! assert_eq!(SecondFocus::on(pair), FirstFocus::on(pair));
//!
//! let doubled = pair.focus_second().map(|n| n * 2).unfocus();
//! assert_eq!(doubled, Pair::of("s", 10));
//! ```

mod focus;

pub use focus::{FirstFocus, SecondFocus};

use std::fmt;
use std::hash::{Hash, Hasher};

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// Access to the pair behind a `Pair`, `FirstFocus` or `SecondFocus`.
///
/// Equality and hashing of all three shapes are defined on the pair returned
/// here, which is what makes them interchangeable.
pub trait AsPair<F, S>: sealed::Sealed {
    /// The underlying pair.
    fn as_pair(&self) -> &Pair<F, S>;
}

/// An immutable pair of values.
///
/// Three construction orders are available and all produce the same pair:
///
/// ```rust
/// use curie::Pair;
///
/// let a = Pair::of("x", 1);
/// let b = Pair::with("x").and(1);
/// let c = Pair::first("x").second(1);
/// let d = Pair::second(1).first("x");
///
/// assert_eq!(a, b);
/// assert_eq!(b, c);
/// assert_eq!(c, d);
/// ```
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pair<F, S> {
    first: F,
    second: S,
}

impl<F, S> Pair<F, S> {
    /// Create a pair from both values.
    #[inline]
    pub fn of(first: F, second: S) -> Self {
        Pair { first, second }
    }

    /// Return a pair with the first value replaced; the second is moved across.
    #[inline]
    pub fn replace_first<F2>(self, new_first: F2) -> Pair<F2, S> {
        Pair::of(new_first, self.second)
    }

    /// Return a pair with the second value replaced; the first is moved across.
    #[inline]
    pub fn replace_second<S2>(self, new_second: S2) -> Pair<F, S2> {
        Pair::of(self.first, new_second)
    }

    /// View this pair through its first slot.
    #[inline]
    pub fn focus_first(self) -> FirstFocus<F, S> {
        FirstFocus::on(self)
    }

    /// View this pair through its second slot.
    #[inline]
    pub fn focus_second(self) -> SecondFocus<F, S> {
        SecondFocus::on(self)
    }

    /// The first value.
    #[inline]
    pub fn isolate_first(&self) -> &F {
        &self.first
    }

    /// The second value.
    #[inline]
    pub fn isolate_second(&self) -> &S {
        &self.second
    }

    /// Transform the first value.
    #[inline]
    pub fn map_first<F2, G>(self, f: G) -> Pair<F2, S>
    where
        G: FnOnce(F) -> F2,
    {
        Pair::of(f(self.first), self.second)
    }

    /// Transform the second value.
    #[inline]
    pub fn map_second<S2, G>(self, f: G) -> Pair<F, S2>
    where
        G: FnOnce(S) -> S2,
    {
        Pair::of(self.first, f(self.second))
    }

    /// Reduce both values to one.
    ///
    /// # Example
    ///
    /// ```rust
    /// use curie::Pair;
    ///
    /// let total = Pair::of(2, 3).collapse(|a, b| a * b);
    /// assert_eq!(total, 6);
    /// ```
    #[inline]
    pub fn collapse<T, G>(self, f: G) -> T
    where
        G: FnOnce(F, S) -> T,
    {
        f(self.first, self.second)
    }

    /// Test both values jointly.
    #[inline]
    pub fn satisfies<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&F, &S) -> bool,
    {
        predicate(&self.first, &self.second)
    }

    /// Run `f` on the first value, then return `self` unchanged.
    #[inline]
    pub fn with_first_do<G>(self, f: G) -> Self
    where
        G: FnOnce(&F),
    {
        f(&self.first);
        self
    }

    /// Run `f` on the second value, then return `self` unchanged.
    #[inline]
    pub fn with_second_do<G>(self, f: G) -> Self
    where
        G: FnOnce(&S),
    {
        f(&self.second);
        self
    }

    /// Run `f` on both values, then return `self` unchanged.
    #[inline]
    pub fn with_both_do<G>(self, f: G) -> Self
    where
        G: FnOnce(&F, &S),
    {
        f(&self.first, &self.second);
        self
    }

    /// Split into a tuple.
    #[inline]
    pub fn into_tuple(self) -> (F, S) {
        (self.first, self.second)
    }
}

impl Pair<(), ()> {
    /// Start a pair from its first value; finish with [`OfAndBuilder::and`].
    #[inline]
    pub fn with<F>(first: F) -> OfAndBuilder<F> {
        OfAndBuilder { first }
    }

    /// Start a pair from its first value; finish with [`MissingSecond::second`].
    #[inline]
    pub fn first<F>(first: F) -> MissingSecond<F> {
        MissingSecond { first }
    }

    /// Start a pair from its second value; finish with [`MissingFirst::first`].
    #[inline]
    pub fn second<S>(second: S) -> MissingFirst<S> {
        MissingFirst { second }
    }
}

/// Builder produced by [`Pair::with`].
#[derive(Clone, Copy, Debug)]
pub struct OfAndBuilder<F> {
    first: F,
}

impl<F> OfAndBuilder<F> {
    /// Supply the second value.
    #[inline]
    pub fn and<S>(self, second: S) -> Pair<F, S> {
        Pair::of(self.first, second)
    }
}

/// Builder produced by [`Pair::first`].
#[derive(Clone, Copy, Debug)]
pub struct MissingSecond<F> {
    first: F,
}

impl<F> MissingSecond<F> {
    /// Supply the second value.
    #[inline]
    pub fn second<S>(self, second: S) -> Pair<F, S> {
        Pair::of(self.first, second)
    }
}

/// Builder produced by [`Pair::second`].
#[derive(Clone, Copy, Debug)]
pub struct MissingFirst<S> {
    second: S,
}

impl<S> MissingFirst<S> {
    /// Supply the first value.
    #[inline]
    pub fn first<F>(self, first: F) -> Pair<F, S> {
        Pair::of(first, self.second)
    }
}

impl<F, S> sealed::Sealed for Pair<F, S> {}

impl<F, S> AsPair<F, S> for Pair<F, S> {
    #[inline]
    fn as_pair(&self) -> &Pair<F, S> {
        self
    }
}

impl<F, S, O> PartialEq<O> for Pair<F, S>
where
    F: PartialEq,
    S: PartialEq,
    O: AsPair<F, S>,
{
    fn eq(&self, other: &O) -> bool {
        let other = other.as_pair();
        self.first == other.first && self.second == other.second
    }
}

impl<F: Eq, S: Eq> Eq for Pair<F, S> {}

impl<F: Hash, S: Hash> Hash for Pair<F, S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.first.hash(state);
        self.second.hash(state);
    }
}

impl<F: fmt::Display, S: fmt::Display> fmt::Display for Pair<F, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pair{{{},{}}}", self.first, self.second)
    }
}

impl<F, S> From<(F, S)> for Pair<F, S> {
    fn from((first, second): (F, S)) -> Self {
        Pair::of(first, second)
    }
}

impl<F, S> From<Pair<F, S>> for (F, S) {
    fn from(pair: Pair<F, S>) -> Self {
        pair.into_tuple()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Slot, Toggle};
    use std::hash::DefaultHasher;

    fn hash_of<H: Hash>(value: &H) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_builders_agree() {
        let expected = Pair::of("String", 5);
        assert_eq!(Pair::with("String").and(5), expected);
        assert_eq!(Pair::first("String").second(5), expected);
        assert_eq!(Pair::second(5).first("String"), expected);
    }

    #[test]
    fn test_equality() {
        assert_eq!(Pair::of(1, "a"), Pair::of(1, "a"));
        assert_ne!(Pair::of(1, "a"), Pair::of(2, "a"));
        assert_ne!(Pair::of(1, "a"), Pair::of(1, "b"));
    }

    #[test]
    fn test_hash_is_structural() {
        assert_eq!(hash_of(&Pair::of(1, "a")), hash_of(&Pair::with(1).and("a")));
    }

    #[test]
    fn test_replace() {
        let pair = Pair::with("s").and(5);
        assert_eq!(pair.replace_first(99), Pair::of(99, 5));
        assert_eq!(pair.replace_second("t"), Pair::of("s", "t"));
    }

    #[test]
    fn test_replace_moves_other_slot() {
        let payload = vec![1, 2, 3];
        let address = payload.as_ptr();
        let pair = Pair::of("s", payload).replace_first(0);
        assert_eq!(pair.isolate_second().as_ptr(), address);
    }

    #[test]
    fn test_isolate() {
        let pair = Pair::of("s", 5);
        assert_eq!(*pair.isolate_first(), "s");
        assert_eq!(*pair.isolate_second(), 5);
    }

    #[test]
    fn test_map() {
        let pair = Pair::of("abc", 5);
        assert_eq!(pair.map_first(str::len), Pair::of(3, 5));
        assert_eq!(pair.map_second(|n| n * 2), Pair::of("abc", 10));
    }

    #[test]
    fn test_collapse() {
        assert_eq!(
            Pair::of("n", 5).collapse(|s, n| format!("{s}={n}")),
            "n=5"
        );
    }

    #[test]
    fn test_satisfies() {
        let pair = Pair::of("abc", 3);
        assert!(pair.satisfies(|s, n| s.len() == *n));
        assert!(!pair.satisfies(|s, n| s.len() > *n));
    }

    #[test]
    fn test_with_first_do() {
        let slot = Slot::new("");
        let pair = Pair::of("a", 1).with_first_do(|f| slot.overwrite(*f));
        assert!(slot.matches(&"a"));
        assert_eq!(pair, Pair::of("a", 1));
    }

    #[test]
    fn test_with_second_do() {
        let slot = Slot::new(0);
        let pair = Pair::of("a", 1).with_second_do(|s| slot.overwrite(*s));
        assert!(slot.matches(&1));
        assert_eq!(pair, Pair::of("a", 1));
    }

    #[test]
    fn test_with_both_do() {
        let flag = Toggle::off();
        let pair = Pair::of("a", 1).with_both_do(|f, s| {
            if *f == "a" && *s == 1 {
                flag.turn_on();
            }
        });
        assert!(flag.is_on());
        assert_eq!(pair, Pair::of("a", 1));
    }

    #[test]
    fn test_display() {
        assert_eq!(Pair::of("a", 1).to_string(), "Pair{a,1}");
    }

    #[test]
    fn test_tuple_conversion() {
        assert_eq!(Pair::from(("a", 1)), Pair::of("a", 1));
        let (first, second): (&str, i32) = Pair::of("a", 1).into();
        assert_eq!((first, second), ("a", 1));
    }
}
