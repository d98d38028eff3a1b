use std::mem;

use derive_more::IsVariant;

use super::{Iter, IterMut};
use crate::error::{ExpectFailed, UnwrapOnNone};
use crate::outcome::Outcome;
use crate::util::panic::throw;

/// A value that is either present ([`Some`](Maybe::Some)) or absent ([`None`](Maybe::None)).
///
/// Maybe is immutable in the sense that none of its combinators modify it in place: each consumes
/// the Maybe and returns a new one, or hands back the same one untouched when the combinator has
/// nothing to do for the current variant. The only exceptions are the explicit `&mut self`
/// methods, [`take`](Maybe::take), [`replace`](Maybe::replace) and [`as_mut`](Maybe::as_mut).
///
/// Absence is a variant, not a sentinel value, so a `Maybe<T>` can wrap any `T`. Sources that use
/// [`Option`] to signal absence are normalized with [`from_nullable`](Maybe::from_nullable) (or
/// [`From`]).
///
/// Two Maybes are equal when they are the same variant holding equal values, all `None`s are equal
/// to one another.
///
/// # Examples
/// ```
/// # use fallible::{none, some, Maybe};
/// let name = some("ferris");
/// let greeting = name.map(|n| format!("hello {n}")).unwrap_or_else(|| String::from("hello?"));
/// assert_eq!(greeting, "hello ferris");
///
/// let missing: Maybe<&str> = none();
/// assert_eq!(missing.unwrap_or("default"), "default");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, IsVariant)]
pub enum Maybe<T> {
    /// No value.
    None,
    /// Some value of type `T`.
    Some(T),
}

/// Creates a [`Maybe::Some`] holding the provided value.
pub const fn some<T>(value: T) -> Maybe<T> {
    Maybe::Some(value)
}

/// Creates a [`Maybe::None`].
pub const fn none<T>() -> Maybe<T> {
    Maybe::None
}

impl<T> Maybe<T> {
    /// Creates a [`Maybe::Some`] holding the provided value.
    pub const fn some(value: T) -> Maybe<T> {
        Maybe::Some(value)
    }

    /// Creates a [`Maybe::None`].
    pub const fn none() -> Maybe<T> {
        Maybe::None
    }

    /// Normalizes an [`Option`] into a Maybe. Only [`Option::None`] is treated as absent, so
    /// "falsy" values like `0` or `""` produce a [`Some`](Maybe::Some).
    ///
    /// # Examples
    /// ```
    /// # use fallible::Maybe;
    /// assert!(Maybe::from_nullable(Some(0)).is_some());
    /// assert!(Maybe::<u8>::from_nullable(None).is_none());
    /// ```
    pub fn from_nullable(value: Option<T>) -> Maybe<T> {
        match value {
            Some(value) => Maybe::Some(value),
            None => Maybe::None,
        }
    }

    /// Converts an [`Outcome`] into a Maybe, discarding the error of a
    /// [`Failure`](Outcome::Failure).
    pub fn from_outcome<E>(outcome: Outcome<T, E>) -> Maybe<T> {
        outcome.ok()
    }

    /// Converts this Maybe into an [`Outcome`], using the provided error for a
    /// [`None`](Maybe::None). This is the inverse of [`from_outcome`](Maybe::from_outcome),
    /// reintroducing the error that it discarded, and is identical to [`ok_or`](Maybe::ok_or).
    ///
    /// # Examples
    /// ```
    /// # use fallible::{none, some, Maybe, Outcome};
    /// let there_and_back = Maybe::from_outcome(Maybe::to_outcome(some(4), "lost"));
    /// assert_eq!(there_and_back, some(4));
    /// assert_eq!(Maybe::to_outcome(none::<u8>(), "lost"), Outcome::Failure("lost"));
    /// ```
    pub fn to_outcome<E>(self, error: E) -> Outcome<T, E> {
        self.ok_or(error)
    }

    /// Returns true if this is a [`Some`](Maybe::Some) and the contained value satisfies the
    /// provided predicate. The predicate is not invoked for [`None`](Maybe::None).
    ///
    /// # Examples
    /// ```
    /// # use fallible::{none, some};
    /// assert!(some(3).is_some_and(|v| v > 2));
    /// assert!(!some(1).is_some_and(|v| v > 2));
    /// assert!(!none::<u8>().is_some_and(|_| unreachable!()));
    /// ```
    pub fn is_some_and(self, f: impl FnOnce(T) -> bool) -> bool {
        match self {
            Maybe::Some(value) => f(value),
            Maybe::None => false,
        }
    }

    /// Returns true if this is a [`None`](Maybe::None), otherwise delegates to the provided
    /// predicate.
    pub fn is_none_or(self, f: impl FnOnce(T) -> bool) -> bool {
        match self {
            Maybe::Some(value) => f(value),
            Maybe::None => true,
        }
    }

    /// Converts from `&Maybe<T>` to `Maybe<&T>`.
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Some(value) => Maybe::Some(value),
            Maybe::None => Maybe::None,
        }
    }

    /// Converts from `&mut Maybe<T>` to `Maybe<&mut T>`.
    pub fn as_mut(&mut self) -> Maybe<&mut T> {
        match self {
            Maybe::Some(value) => Maybe::Some(value),
            Maybe::None => Maybe::None,
        }
    }

    /// Applies the provided function to the contained value, if there is one. Panics raised by the
    /// function propagate to the caller.
    ///
    /// # Examples
    /// ```
    /// # use fallible::{none, some, Maybe};
    /// assert_eq!(some(2).map(|v| v * 10), some(20));
    /// assert_eq!(none::<u8>().map(|_| -> u8 { unreachable!() }), Maybe::None);
    /// ```
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Maybe<U> {
        match self {
            Maybe::Some(value) => Maybe::Some(f(value)),
            Maybe::None => Maybe::None,
        }
    }

    /// Applies the provided function to the contained value or returns the provided default.
    pub fn map_or<U, F: FnOnce(T) -> U>(self, default: U, f: F) -> U {
        match self {
            Maybe::Some(value) => f(value),
            Maybe::None => default,
        }
    }

    /// Applies the provided function to the contained value or computes a default.
    pub fn map_or_else<U, D: FnOnce() -> U, F: FnOnce(T) -> U>(self, default: D, f: F) -> U {
        match self {
            Maybe::Some(value) => f(value),
            Maybe::None => default(),
        }
    }

    /// Chains another optional step onto this one, flattening the result.
    ///
    /// # Examples
    /// ```
    /// # use fallible::{none, some, Maybe};
    /// let half = |v: u32| if v % 2 == 0 { some(v / 2) } else { none() };
    /// assert_eq!(some(8).and_then(half).and_then(half), some(2));
    /// assert_eq!(some(6).and_then(half).and_then(half), Maybe::None);
    /// ```
    pub fn and_then<U, F: FnOnce(T) -> Maybe<U>>(self, f: F) -> Maybe<U> {
        match self {
            Maybe::Some(value) => f(value),
            Maybe::None => Maybe::None,
        }
    }

    /// An alias of [`and_then`](Maybe::and_then).
    pub fn flat_map<U, F: FnOnce(T) -> Maybe<U>>(self, f: F) -> Maybe<U> {
        self.and_then(f)
    }

    /// Keeps the contained value only if it satisfies the provided predicate.
    pub fn filter<P: FnOnce(&T) -> bool>(self, predicate: P) -> Maybe<T> {
        if let Maybe::Some(value) = self {
            if predicate(&value) {
                return Maybe::Some(value);
            }
        }
        Maybe::None
    }

    /// Returns `other` if this is a [`Some`](Maybe::Some), otherwise [`None`](Maybe::None).
    ///
    /// `other` is evaluated eagerly by the caller, use [`and_then`](Maybe::and_then) to defer it.
    pub fn and<U>(self, other: Maybe<U>) -> Maybe<U> {
        match self {
            Maybe::Some(_) => other,
            Maybe::None => Maybe::None,
        }
    }

    /// Returns this Maybe if it is a [`Some`](Maybe::Some), otherwise `other`.
    pub fn or(self, other: Maybe<T>) -> Maybe<T> {
        match self {
            Maybe::Some(value) => Maybe::Some(value),
            Maybe::None => other,
        }
    }

    /// Returns this Maybe if it is a [`Some`](Maybe::Some), otherwise the result of the provided
    /// function.
    pub fn or_else<F: FnOnce() -> Maybe<T>>(self, f: F) -> Maybe<T> {
        match self {
            Maybe::Some(value) => Maybe::Some(value),
            Maybe::None => f(),
        }
    }

    /// Returns whichever of the two Maybes is a [`Some`](Maybe::Some), provided that exactly one
    /// of them is.
    ///
    /// # Examples
    /// ```
    /// # use fallible::{none, some, Maybe};
    /// assert_eq!(some(1).xor(none()), some(1));
    /// assert_eq!(none().xor(some(2)), some(2));
    /// assert_eq!(some(1).xor(some(2)), Maybe::None);
    /// assert_eq!(none::<u8>().xor(none()), Maybe::None);
    /// ```
    pub fn xor(self, other: Maybe<T>) -> Maybe<T> {
        match (self, other) {
            (Maybe::Some(value), Maybe::None) | (Maybe::None, Maybe::Some(value)) => {
                Maybe::Some(value)
            },
            _ => Maybe::None,
        }
    }

    /// Pairs the values of two [`Some`](Maybe::Some)s, or returns [`None`](Maybe::None) if either
    /// is absent.
    pub fn zip<U>(self, other: Maybe<U>) -> Maybe<(T, U)> {
        match (self, other) {
            (Maybe::Some(a), Maybe::Some(b)) => Maybe::Some((a, b)),
            _ => Maybe::None,
        }
    }

    /// Returns the contained value.
    ///
    /// # Panics
    /// Panics with [`UnwrapOnNone`] if this is a [`None`](Maybe::None).
    ///
    /// # Examples
    /// ```should_panic
    /// # use fallible::{none, Maybe};
    /// let missing: Maybe<u8> = none();
    /// missing.unwrap(); // Called unwrap on None
    /// ```
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Maybe::Some(value) => value,
            Maybe::None => throw(UnwrapOnNone),
        }
    }

    /// Returns the contained value or the provided default. The default is always constructed by
    /// the caller, see [`unwrap_or_else`](Maybe::unwrap_or_else) for a lazy alternative.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Maybe::Some(value) => value,
            Maybe::None => default,
        }
    }

    /// Returns the contained value, only invoking the provided function if there isn't one.
    pub fn unwrap_or_else<F: FnOnce() -> T>(self, f: F) -> T {
        match self {
            Maybe::Some(value) => value,
            Maybe::None => f(),
        }
    }

    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Maybe::Some(value) => value,
            Maybe::None => T::default(),
        }
    }

    /// Returns the contained value.
    ///
    /// # Panics
    /// Panics with [`ExpectFailed`] carrying exactly the provided message if this is a
    /// [`None`](Maybe::None).
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Maybe::Some(value) => value,
            Maybe::None => throw(ExpectFailed { message: message.to_owned() }),
        }
    }

    /// Calls the provided function with a reference to the contained value, if there is one, and
    /// returns this Maybe unchanged.
    pub fn inspect<F: FnOnce(&T)>(self, f: F) -> Maybe<T> {
        if let Maybe::Some(value) = &self {
            f(value);
        }
        self
    }

    /// Returns true if this is a [`Some`](Maybe::Some) holding a value equal to the one provided.
    ///
    /// # Examples
    /// ```
    /// # use fallible::{none, some};
    /// assert!(some(String::from("a")).contains("a"));
    /// assert!(!some(1).contains(&2));
    /// assert!(!none::<u8>().contains(&1));
    /// ```
    pub fn contains<U: ?Sized>(&self, value: &U) -> bool
    where
        T: PartialEq<U>,
    {
        match self {
            Maybe::Some(contained) => contained == value,
            Maybe::None => false,
        }
    }

    /// Converts this Maybe into an [`Outcome`], with [`None`](Maybe::None) becoming a
    /// [`Failure`](Outcome::Failure) of the provided error.
    pub fn ok_or<E>(self, error: E) -> Outcome<T, E> {
        match self {
            Maybe::Some(value) => Outcome::Success(value),
            Maybe::None => Outcome::Failure(error),
        }
    }

    /// Like [`ok_or`](Maybe::ok_or), but the error is only constructed if it is needed.
    pub fn ok_or_else<E, F: FnOnce() -> E>(self, f: F) -> Outcome<T, E> {
        match self {
            Maybe::Some(value) => Outcome::Success(value),
            Maybe::None => Outcome::Failure(f()),
        }
    }

    /// Dispatches on the variant, calling exactly one of the provided handlers.
    ///
    /// # Examples
    /// ```
    /// # use fallible::{none, some};
    /// let describe = |m: fallible::Maybe<u8>| m.match_with(|v| format!("got {v}"), || "nothing".into());
    /// assert_eq!(describe(some(1)), "got 1");
    /// assert_eq!(describe(none()), "nothing");
    /// ```
    pub fn match_with<U, S, N>(self, some: S, none: N) -> U
    where
        S: FnOnce(T) -> U,
        N: FnOnce() -> U,
    {
        match self {
            Maybe::Some(value) => some(value),
            Maybe::None => none(),
        }
    }

    /// Takes the value out of this Maybe, leaving a [`None`](Maybe::None) in its place.
    pub const fn take(&mut self) -> Maybe<T> {
        mem::replace(self, Maybe::None)
    }

    /// Replaces the value in this Maybe with the one provided, returning the old value.
    pub const fn replace(&mut self, value: T) -> Maybe<T> {
        mem::replace(self, Maybe::Some(value))
    }

    /// Converts this Maybe into the equivalent [`Option`].
    pub fn into_std(self) -> Option<T> {
        match self {
            Maybe::Some(value) => Some(value),
            Maybe::None => None,
        }
    }

    /// Returns an iterator over the contained value. The iterator yields at most one item, and
    /// each call produces a fresh iterator starting from the beginning.
    ///
    /// # Examples
    /// ```
    /// # use fallible::some;
    /// let value = some(4);
    /// assert_eq!(value.iter().sum::<i32>(), 4);
    /// assert_eq!(value.iter().count(), 1);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter(self.as_ref().into_std().into_iter())
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut(self.as_mut().into_std().into_iter())
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Removes one level of nesting.
    pub fn flatten(self) -> Maybe<T> {
        match self {
            Maybe::Some(inner) => inner,
            Maybe::None => Maybe::None,
        }
    }
}

impl<T, E> Maybe<Outcome<T, E>> {
    /// Swaps a Maybe of an [`Outcome`] into an Outcome of a Maybe. [`None`](Maybe::None) becomes
    /// a [`Success`](Outcome::Success) of [`None`](Maybe::None).
    pub fn transpose(self) -> Outcome<Maybe<T>, E> {
        match self {
            Maybe::Some(Outcome::Success(value)) => Outcome::Success(Maybe::Some(value)),
            Maybe::Some(Outcome::Failure(error)) => Outcome::Failure(error),
            Maybe::None => Outcome::Success(Maybe::None),
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Maybe::None
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Maybe::from_nullable(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.into_std()
    }
}
