//! Testing utilities and helpers for curie
//!
//! This module provides small collaborators for observing what callbacks did,
//! assertion macros for the sum types, and property-based testing support.
//!
//! # Examples
//!
//! ## Observing callbacks
//!
//! ```rust
//! use curie::testing::{Slot, Toggle};
//! use curie::Maybe;
//!
//! let seen = Slot::new(0);
//! let missing = Toggle::off();
//!
//! Maybe::just(7)
//!     .when_present_do(|v| seen.overwrite(*v))
//!     .when_missing_do(|| missing.turn_on());
//!
//! assert!(seen.matches(&7));
//! assert!(!missing.is_on());
//! ```
//!
//! ## Assertion Macros
//!
//! ```rust
//! use curie::{assert_just, assert_left, assert_none, Either, Maybe};
//!
//! assert_just!(Maybe::just(42));
//! assert_none!(Maybe::<i32>::none());
//! assert_left!(Either::<_, String>::left(1));
//! ```

use std::cell::{Cell, RefCell};

/// A cell that records the last value written to it.
///
/// `Slot` is usable through a shared reference, so it can be captured by
/// `Fn` predicates as well as `FnOnce` callbacks.
///
/// # Example
///
/// ```rust
/// use curie::testing::Slot;
///
/// let calls = Slot::new(0);
/// let counted = |x: &i32| {
///     calls.overwrite(calls.read() + 1);
///     *x > 0
/// };
///
/// assert!(counted(&1));
/// assert!(!counted(&-1));
/// assert_eq!(calls.read(), 2);
/// ```
#[derive(Debug, Default)]
pub struct Slot<T> {
    value: RefCell<T>,
}

impl<T> Slot<T> {
    /// Create a slot holding `initial`.
    pub fn new(initial: T) -> Self {
        Self {
            value: RefCell::new(initial),
        }
    }

    /// A copy of the current value.
    pub fn read(&self) -> T
    where
        T: Clone,
    {
        self.value.borrow().clone()
    }

    /// Replace the current value.
    pub fn overwrite(&self, value: T) {
        *self.value.borrow_mut() = value;
    }

    /// Whether the current value equals `candidate`.
    pub fn matches(&self, candidate: &T) -> bool
    where
        T: PartialEq,
    {
        *self.value.borrow() == *candidate
    }

    /// Take the value out of the slot.
    pub fn into_inner(self) -> T {
        self.value.into_inner()
    }
}

/// A two-state flag, usable through a shared reference.
#[derive(Debug, Default)]
pub struct Toggle {
    state: Cell<bool>,
}

impl Toggle {
    /// A flag that starts on.
    pub fn on() -> Self {
        Self {
            state: Cell::new(true),
        }
    }

    /// A flag that starts off.
    pub fn off() -> Self {
        Self {
            state: Cell::new(false),
        }
    }

    /// Flip the flag.
    pub fn toggle(&self) {
        self.state.set(!self.state.get());
    }

    /// Switch the flag on.
    pub fn turn_on(&self) {
        self.state.set(true);
    }

    /// Switch the flag off.
    pub fn turn_off(&self) {
        self.state.set(false);
    }

    /// Whether the flag is on.
    pub fn is_on(&self) -> bool {
        self.state.get()
    }
}

/// Assert that a maybe holds a value.
///
/// This macro will panic if the maybe is `None`.
///
/// # Example
///
/// ```rust
/// use curie::{assert_just, Maybe};
///
/// assert_just!(Maybe::just(42));
/// ```
#[macro_export]
macro_rules! assert_just {
    ($maybe:expr) => {
        match $maybe {
            $crate::Maybe::Just(_) => {}
            $crate::Maybe::None => {
                panic!("Expected Just, got None");
            }
        }
    };
}

/// Assert that a maybe is empty.
///
/// This macro will panic if the maybe is `Just`.
///
/// # Example
///
/// ```rust
/// use curie::{assert_none, Maybe};
///
/// assert_none!(Maybe::<u8>::none());
/// ```
#[macro_export]
macro_rules! assert_none {
    ($maybe:expr) => {
        match $maybe {
            $crate::Maybe::None => {}
            $crate::Maybe::Just(v) => {
                panic!("Expected None, got Just: {:?}", v);
            }
        }
    };
}

/// Assert that an either holds its left alternative.
///
/// # Example
///
/// ```rust
/// use curie::{assert_left, Either};
///
/// assert_left!(Either::<_, ()>::left("l"));
/// ```
#[macro_export]
macro_rules! assert_left {
    ($either:expr) => {
        match $either {
            $crate::Either::Left(_) => {}
            $crate::Either::Right(v) => {
                panic!("Expected Left, got Right: {:?}", v);
            }
        }
    };
}

/// Assert that an either holds its right alternative.
///
/// # Example
///
/// ```rust
/// use curie::{assert_right, Either};
///
/// assert_right!(Either::<(), _>::right("r"));
/// ```
#[macro_export]
macro_rules! assert_right {
    ($either:expr) => {
        match $either {
            $crate::Either::Right(_) => {}
            $crate::Either::Left(v) => {
                panic!("Expected Right, got Left: {:?}", v);
            }
        }
    };
}

#[cfg(feature = "proptest")]
use crate::{Either, Maybe, Pair};
#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl<T> Arbitrary for Maybe<T>
where
    T: Arbitrary + 'static,
{
    type Parameters = T::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            any_with::<T>(args).prop_map(Maybe::just),
            Just(()).prop_map(|_| Maybe::none()),
        ]
        .boxed()
    }
}

#[cfg(feature = "proptest")]
impl<L, R> Arbitrary for Either<L, R>
where
    L: Arbitrary + 'static,
    R: Arbitrary + 'static,
{
    type Parameters = (L::Parameters, R::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (l_params, r_params) = args;
        prop_oneof![
            any_with::<L>(l_params).prop_map(Either::left),
            any_with::<R>(r_params).prop_map(Either::right),
        ]
        .boxed()
    }
}

#[cfg(feature = "proptest")]
impl<F, S> Arbitrary for Pair<F, S>
where
    F: Arbitrary + 'static,
    S: Arbitrary + 'static,
{
    type Parameters = (F::Parameters, S::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (f_params, s_params) = args;
        (any_with::<F>(f_params), any_with::<S>(s_params))
            .prop_map(|(first, second)| Pair::of(first, second))
            .boxed()
    }
}
