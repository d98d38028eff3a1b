use std::fmt::Debug;

use derive_more::IsVariant;

use super::{Iter, IterMut};
use crate::error::{ExpectFailed, PreconditionViolated, UnwrapErrOnSuccess, UnwrapOnFailure};
use crate::maybe::Maybe;
use crate::util::panic::throw;

/// The outcome of a fallible operation: either a [`Success`](Outcome::Success) holding a value of
/// type `T` or a [`Failure`](Outcome::Failure) holding an error of type `E`.
///
/// Combinators consume the Outcome and produce a new one. When a combinator has nothing to do for
/// the current variant (e.g. [`map`](Outcome::map) on a Failure) the payload is moved through
/// untouched rather than rebuilt.
///
/// A Success may hold any value, including a [`Maybe::None`] or `()`, having run successfully is
/// independent of what the operation produced.
///
/// # Examples
/// ```
/// # use fallible::{err, ok, Outcome};
/// let doubled = ok::<_, String>(5).map(|x| x * 2);
/// assert_eq!(doubled.unwrap(), 10);
///
/// let recovered = err::<String, _>("e").or_else(|e| ok::<_, ()>(format!("recovered {e}")));
/// assert_eq!(recovered.unwrap(), "recovered e");
/// ```
#[must_use = "this `Outcome` may be a `Failure`, which should be handled"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, IsVariant)]
pub enum Outcome<T, E> {
    /// The operation succeeded with a value of type `T`.
    Success(T),
    /// The operation failed with an error of type `E`.
    Failure(E),
}

/// Creates a [`Outcome::Success`] holding the provided value.
pub const fn ok<T, E>(data: T) -> Outcome<T, E> {
    Outcome::Success(data)
}

/// Creates a [`Outcome::Failure`] holding the provided error.
pub const fn err<T, E>(error: E) -> Outcome<T, E> {
    Outcome::Failure(error)
}

impl<T, E> Outcome<T, E> {
    pub const fn success(data: T) -> Outcome<T, E> {
        Outcome::Success(data)
    }

    pub const fn failure(error: E) -> Outcome<T, E> {
        Outcome::Failure(error)
    }

    /// Returns true if this is a [`Success`](Outcome::Success). Exactly one of `is_ok` and
    /// [`is_err`](Outcome::is_err) is true for any Outcome.
    pub const fn is_ok(&self) -> bool {
        self.is_success()
    }

    pub const fn is_err(&self) -> bool {
        self.is_failure()
    }

    /// Returns true if this is a [`Success`](Outcome::Success) whose value satisfies the provided
    /// predicate. The predicate is only invoked for a Success.
    pub fn is_ok_and(self, f: impl FnOnce(T) -> bool) -> bool {
        match self {
            Outcome::Success(data) => f(data),
            Outcome::Failure(_) => false,
        }
    }

    /// Returns true if this is a [`Failure`](Outcome::Failure) whose error satisfies the provided
    /// predicate. The predicate is only invoked for a Failure.
    pub fn is_err_and(self, f: impl FnOnce(E) -> bool) -> bool {
        match self {
            Outcome::Success(_) => false,
            Outcome::Failure(error) => f(error),
        }
    }

    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Success(data) => Outcome::Success(data),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match self {
            Outcome::Success(data) => Outcome::Success(data),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transforms the success value, leaving a [`Failure`](Outcome::Failure) as it is. Panics
    /// raised by the function propagate to the caller, they are not captured as a Failure.
    ///
    /// # Examples
    /// ```
    /// # use fallible::{err, ok, Outcome};
    /// assert_eq!(ok::<u8, ()>(2).map(|v| v + 1), ok(3));
    /// assert_eq!(err::<u8, _>("nope").map(|v| v + 1), err("nope"));
    /// ```
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U, E> {
        match self {
            Outcome::Success(data) => Outcome::Success(f(data)),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transforms the error, leaving a [`Success`](Outcome::Success) as it is.
    pub fn map_err<F2, O: FnOnce(E) -> F2>(self, f: O) -> Outcome<T, F2> {
        match self {
            Outcome::Success(data) => Outcome::Success(data),
            Outcome::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    pub fn map_or<U, F: FnOnce(T) -> U>(self, default: U, f: F) -> U {
        match self {
            Outcome::Success(data) => f(data),
            Outcome::Failure(_) => default,
        }
    }

    /// Collapses the Outcome into a single value by applying exactly one of the two provided
    /// functions: `default` to the error or `f` to the success value.
    ///
    /// # Examples
    /// ```
    /// # use fallible::{err, ok};
    /// let render = |o: fallible::Outcome<u8, &str>| o.map_or_else(|e| e.len(), usize::from);
    /// assert_eq!(render(ok(7)), 7);
    /// assert_eq!(render(err("four")), 4);
    /// ```
    pub fn map_or_else<U, D: FnOnce(E) -> U, F: FnOnce(T) -> U>(self, default: D, f: F) -> U {
        match self {
            Outcome::Success(data) => f(data),
            Outcome::Failure(error) => default(error),
        }
    }

    /// Chains another fallible step onto this one. A [`Failure`](Outcome::Failure) short-circuits
    /// without invoking the function.
    ///
    /// # Examples
    /// ```
    /// # use fallible::{err, ok, Outcome};
    /// let parse = |s: &str| Outcome::from(s.parse::<u8>()).map_err(|_| "not a number");
    /// assert_eq!(ok("12").and_then(parse), ok(12));
    /// assert_eq!(ok("twelve").and_then(parse), err("not a number"));
    /// ```
    pub fn and_then<U, F: FnOnce(T) -> Outcome<U, E>>(self, f: F) -> Outcome<U, E> {
        match self {
            Outcome::Success(data) => f(data),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// An alias of [`and_then`](Outcome::and_then).
    pub fn flat_map<U, F: FnOnce(T) -> Outcome<U, E>>(self, f: F) -> Outcome<U, E> {
        self.and_then(f)
    }

    /// Recovers from a [`Failure`](Outcome::Failure) by invoking the provided function with the
    /// error. The recovery may itself fail, possibly with a different error type.
    pub fn or_else<F2, O: FnOnce(E) -> Outcome<T, F2>>(self, f: O) -> Outcome<T, F2> {
        match self {
            Outcome::Success(data) => Outcome::Success(data),
            Outcome::Failure(error) => f(error),
        }
    }

    /// Returns `other` if this is a [`Success`](Outcome::Success), otherwise this Failure.
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Outcome::Success(_) => other,
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Returns this Outcome if it is a [`Success`](Outcome::Success), otherwise `other`.
    pub fn or<F2>(self, other: Outcome<T, F2>) -> Outcome<T, F2> {
        match self {
            Outcome::Success(data) => Outcome::Success(data),
            Outcome::Failure(_) => other,
        }
    }

    pub fn contains<U: ?Sized>(&self, value: &U) -> bool
    where
        T: PartialEq<U>,
    {
        match self {
            Outcome::Success(data) => data == value,
            Outcome::Failure(_) => false,
        }
    }

    pub fn contains_err<F2: ?Sized>(&self, error: &F2) -> bool
    where
        E: PartialEq<F2>,
    {
        match self {
            Outcome::Success(_) => false,
            Outcome::Failure(contained) => contained == error,
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    /// Panics with [`UnwrapOnFailure`] if this is a [`Failure`](Outcome::Failure), with the
    /// message including the [`Debug`] form of the error.
    ///
    /// # Examples
    /// ```should_panic
    /// # use fallible::err;
    /// err::<u8, _>("boom").unwrap(); // Called unwrap on Failure: "boom"
    /// ```
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: Debug,
    {
        match self {
            Outcome::Success(data) => data,
            Outcome::Failure(error) => throw(UnwrapOnFailure { error: format!("{:?}", error) }),
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Outcome::Success(data) => data,
            Outcome::Failure(_) => default,
        }
    }

    /// Returns the success value, only invoking the provided function (with the error) on a
    /// [`Failure`](Outcome::Failure).
    pub fn unwrap_or_else<F: FnOnce(E) -> T>(self, f: F) -> T {
        match self {
            Outcome::Success(data) => data,
            Outcome::Failure(error) => f(error),
        }
    }

    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Outcome::Success(data) => data,
            Outcome::Failure(_) => T::default(),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    /// Panics with [`ExpectFailed`] if this is a [`Failure`](Outcome::Failure). The panic message
    /// has the form `"{message}: {error:?}"`.
    #[track_caller]
    pub fn expect(self, message: &str) -> T
    where
        E: Debug,
    {
        match self {
            Outcome::Success(data) => data,
            Outcome::Failure(error) => throw(ExpectFailed {
                message: format!("{}: {:?}", message, error),
            }),
        }
    }

    /// Returns the error.
    ///
    /// # Panics
    /// Panics with [`UnwrapErrOnSuccess`] if this is a [`Success`](Outcome::Success).
    #[track_caller]
    pub fn unwrap_err(self) -> E
    where
        T: Debug,
    {
        match self {
            Outcome::Success(data) => throw(UnwrapErrOnSuccess { value: format!("{:?}", data) }),
            Outcome::Failure(error) => error,
        }
    }

    /// Returns the error.
    ///
    /// # Panics
    /// Panics with [`ExpectFailed`] if this is a [`Success`](Outcome::Success), with the message
    /// `"{message}: {value:?}"`.
    #[track_caller]
    pub fn expect_err(self, message: &str) -> E
    where
        T: Debug,
    {
        match self {
            Outcome::Success(data) => throw(ExpectFailed {
                message: format!("{}: {:?}", message, data),
            }),
            Outcome::Failure(error) => error,
        }
    }

    /// Returns the error of an Outcome already known to be a [`Failure`](Outcome::Failure).
    ///
    /// # Panics
    /// Panics with [`PreconditionViolated`] if this is a [`Success`](Outcome::Success), which
    /// always indicates a bug in the caller.
    #[track_caller]
    pub(crate) fn into_error(self) -> E {
        match self {
            Outcome::Success(_) => throw(PreconditionViolated {
                reason: "error accessed on a Success",
            }),
            Outcome::Failure(error) => error,
        }
    }

    /// Calls the provided function with a reference to the success value, if there is one, and
    /// returns this Outcome unchanged.
    pub fn inspect<F: FnOnce(&T)>(self, f: F) -> Outcome<T, E> {
        if let Outcome::Success(data) = &self {
            f(data);
        }
        self
    }

    /// Calls the provided function with a reference to the error, if there is one, and returns
    /// this Outcome unchanged.
    pub fn inspect_err<F: FnOnce(&E)>(self, f: F) -> Outcome<T, E> {
        if let Outcome::Failure(error) = &self {
            f(error);
        }
        self
    }

    /// Dispatches on the variant, calling exactly one of the provided handlers.
    pub fn match_with<U, S, F>(self, ok: S, err: F) -> U
    where
        S: FnOnce(T) -> U,
        F: FnOnce(E) -> U,
    {
        match self {
            Outcome::Success(data) => ok(data),
            Outcome::Failure(error) => err(error),
        }
    }

    /// Converts into a [`Maybe`] of the success value, discarding any error.
    ///
    /// # Examples
    /// ```
    /// # use fallible::{err, ok, Maybe};
    /// assert_eq!(ok::<_, ()>(1).ok(), Maybe::Some(1));
    /// assert_eq!(err::<u8, _>("gone").ok(), Maybe::None);
    /// ```
    pub fn ok(self) -> Maybe<T> {
        match self {
            Outcome::Success(data) => Maybe::Some(data),
            Outcome::Failure(_) => Maybe::None,
        }
    }

    /// Converts into a [`Maybe`] of the error, discarding any success value.
    pub fn err(self) -> Maybe<E> {
        match self {
            Outcome::Success(_) => Maybe::None,
            Outcome::Failure(error) => Maybe::Some(error),
        }
    }

    pub fn into_std(self) -> Result<T, E> {
        match self {
            Outcome::Success(data) => Ok(data),
            Outcome::Failure(error) => Err(error),
        }
    }

    /// Returns an iterator over the success value. The iterator yields at most one item and a
    /// [`Failure`](Outcome::Failure) yields nothing.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter(self.as_ref().ok().into_std().into_iter())
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut(self.as_mut().ok().into_std().into_iter())
    }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Removes one level of nesting. Only available when the success value is itself an Outcome
    /// with the same error type.
    ///
    /// # Examples
    /// ```
    /// # use fallible::{err, ok, Outcome};
    /// let nested: Outcome<Outcome<u8, &str>, &str> = ok(err("inner"));
    /// assert_eq!(nested.flatten(), err("inner"));
    /// ```
    pub fn flatten(self) -> Outcome<T, E> {
        match self {
            Outcome::Success(inner) => inner,
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }
}

impl<T, E> Outcome<Maybe<T>, E> {
    /// Swaps an Outcome of a [`Maybe`] into a Maybe of an Outcome.
    pub fn transpose(self) -> Maybe<Outcome<T, E>> {
        match self {
            Outcome::Success(Maybe::Some(data)) => Maybe::Some(Outcome::Success(data)),
            Outcome::Success(Maybe::None) => Maybe::None,
            Outcome::Failure(error) => Maybe::Some(Outcome::Failure(error)),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(data) => Outcome::Success(data),
            Err(error) => Outcome::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(value: Outcome<T, E>) -> Self {
        value.into_std()
    }
}
