//! Bridges between the union types and the product type.

use crate::either::Either;
use crate::maybe::Maybe;
use crate::pair::Pair;

/// Turn a `Maybe` into an `Either`, with absence on the right.
///
/// `Just(v)` becomes `Left(v)` and `None` becomes `Right(())`.
///
/// # Example
///
/// ```rust
/// use curie::{maybe_to_either, Either, Maybe};
///
/// assert_eq!(maybe_to_either(Maybe::just(3)), Either::left(3));
/// assert_eq!(maybe_to_either(Maybe::<i32>::none()), Either::right(()));
/// ```
pub fn maybe_to_either<T>(maybe: Maybe<T>) -> Either<T, ()> {
    match maybe {
        Maybe::Just(value) => Either::Left(value),
        Maybe::None => Either::Right(()),
    }
}

/// Spread an `Either` over a pair of `Maybe`s.
///
/// The slot matching the active side is `Just`, the other is `None`.
///
/// # Example
///
/// ```rust
/// use curie::{either_to_pair, Either, Maybe, Pair};
///
/// let spread = either_to_pair(Either::<_, i32>::left("x"));
/// assert_eq!(spread, Pair::of(Maybe::just("x"), Maybe::none()));
/// ```
pub fn either_to_pair<L, R>(either: Either<L, R>) -> Pair<Maybe<L>, Maybe<R>> {
    match either {
        Either::Left(value) => Pair::of(Maybe::Just(value), Maybe::None),
        Either::Right(value) => Pair::of(Maybe::None, Maybe::Just(value)),
    }
}
