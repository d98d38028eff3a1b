use std::panic::{self, AssertUnwindSafe};

use tracing::trace;

use super::Outcome;
use crate::error::Panic;
use crate::maybe::Maybe;

/// The error used by [`Outcome::from_nullable`] when the value is absent.
pub const MISSING_VALUE: &str = "missing_value";

impl<T> Outcome<T, Panic> {
    /// Runs the provided function, converting a panic into a [`Failure`](Outcome::Failure).
    ///
    /// This is the only synchronous way that a panic becomes a value, every other combinator lets
    /// panics propagate. The panic hook still runs as normal, so the panic is reported on stderr
    /// unless the hook has been replaced.
    ///
    /// # Examples
    /// ```
    /// # use fallible::Outcome;
    /// assert_eq!(Outcome::safe_try(|| 2 + 2).unwrap(), 4);
    ///
    /// let caught = Outcome::<u8, _>::safe_try(|| panic!("kaboom"));
    /// assert_eq!(caught.unwrap_err().message, "kaboom");
    /// ```
    pub fn safe_try<F: FnOnce() -> T>(f: F) -> Outcome<T, Panic> {
        match panic::catch_unwind(AssertUnwindSafe(f)) {
            Ok(data) => Outcome::Success(data),
            Err(payload) => {
                let panic = Panic::from_payload(payload);
                trace!(panic = %panic.message, "caught panic");
                Outcome::Failure(panic)
            },
        }
    }

    /// Wraps the provided function so that every call goes through
    /// [`safe_try`](Outcome::safe_try).
    ///
    /// # Examples
    /// ```
    /// # use fallible::Outcome;
    /// let checked_div = Outcome::from_throwable(|(a, b): (u32, u32)| a / b);
    /// assert!(checked_div((6, 3)).is_ok());
    /// assert!(checked_div((6, 0)).is_err());
    /// ```
    pub fn from_throwable<A, F>(f: F) -> impl Fn(A) -> Outcome<T, Panic>
    where
        F: Fn(A) -> T,
    {
        move |arg| Outcome::safe_try(|| f(arg))
    }
}

impl<T> Outcome<T, &'static str> {
    /// Converts an [`Option`] into an Outcome, using [`MISSING_VALUE`] as the error when it is
    /// [`None`]. Only `None` counts as absent: `Some(0)`, `Some("")` and `Some(false)` are all
    /// successes.
    ///
    /// # Examples
    /// ```
    /// # use fallible::{err, ok, Outcome};
    /// assert_eq!(Outcome::from_nullable(None::<u8>), err("missing_value"));
    /// assert_eq!(Outcome::from_nullable(Some(0)), ok(0));
    /// ```
    pub fn from_nullable(value: Option<T>) -> Outcome<T, &'static str> {
        Outcome::from_nullable_or(value, MISSING_VALUE)
    }
}

impl<T, E> Outcome<T, E> {
    /// Converts an [`Option`] into an Outcome, using the provided error when it is [`None`].
    pub fn from_nullable_or(value: Option<T>, error: E) -> Outcome<T, E> {
        match value {
            Some(data) => Outcome::Success(data),
            None => Outcome::Failure(error),
        }
    }

    /// Resolves a Go-style `(value, error)` pair. Only the error slot is inspected: if it is
    /// [`Some`](Maybe::Some) the result is a [`Failure`](Outcome::Failure) and the value is
    /// dropped, otherwise the value becomes a [`Success`](Outcome::Success) as is, even when it is
    /// itself an absent [`Maybe`].
    ///
    /// # Examples
    /// ```
    /// # use fallible::{err, none, ok, some, Maybe, Outcome};
    /// assert_eq!(Outcome::from_tuple((1, none::<&str>())), ok(1));
    /// assert_eq!(Outcome::from_tuple((0, some("bad"))), err("bad"));
    /// assert_eq!(Outcome::from_tuple((none::<u8>(), none::<&str>())), ok(Maybe::None));
    /// ```
    pub fn from_tuple(pair: (T, Maybe<E>)) -> Outcome<T, E> {
        match pair {
            (_, Maybe::Some(error)) => Outcome::Failure(error),
            (data, Maybe::None) => Outcome::Success(data),
        }
    }

    /// Returns a [`Success`](Outcome::Success) of `data` if the condition holds, otherwise a
    /// [`Failure`](Outcome::Failure) of `error`.
    pub fn when(condition: bool, data: T, error: E) -> Outcome<T, E> {
        if condition {
            Outcome::Success(data)
        } else {
            Outcome::Failure(error)
        }
    }

    /// The inverse of [`when`](Outcome::when).
    pub fn unless(condition: bool, data: T, error: E) -> Outcome<T, E> {
        Outcome::when(!condition, data, error)
    }

    /// Passes the value through as a [`Success`](Outcome::Success) if it satisfies the provided
    /// predicate.
    ///
    /// # Examples
    /// ```
    /// # use fallible::{err, ok, Outcome};
    /// let adult = |age: u8| Outcome::validate(age, |a| *a >= 18, "too young");
    /// assert_eq!(adult(30), ok(30));
    /// assert_eq!(adult(12), err("too young"));
    /// ```
    pub fn validate<P: FnOnce(&T) -> bool>(value: T, predicate: P, error: E) -> Outcome<T, E> {
        if predicate(&value) {
            Outcome::Success(value)
        } else {
            Outcome::Failure(error)
        }
    }

    /// Composes steps that each take and return the same type into a single function, running them
    /// in order and stopping at the first [`Failure`](Outcome::Failure). With no steps, the
    /// composed function wraps its input in a [`Success`](Outcome::Success).
    ///
    /// All steps must share a type, the [`chain!`](crate::chain) macro boxes distinct closures for
    /// you.
    ///
    /// # Examples
    /// ```
    /// # use fallible::{err, ok, Outcome};
    /// let checked_add = |n: u8| move |v: u8| Outcome::from_nullable_or(v.checked_add(n), "overflow");
    /// let pipeline = Outcome::chain([checked_add(100), checked_add(100)]);
    /// assert_eq!(pipeline(10), ok(210));
    /// assert_eq!(pipeline(60), err("overflow"));
    /// ```
    pub fn chain<I, F>(steps: I) -> impl Fn(T) -> Outcome<T, E>
    where
        I: IntoIterator<Item = F>,
        F: Fn(T) -> Outcome<T, E>,
    {
        let steps: Vec<F> = steps.into_iter().collect();
        move |input| {
            let mut current = input;
            for step in &steps {
                match step(current) {
                    Outcome::Success(data) => current = data,
                    failure => return failure,
                }
            }
            Outcome::Success(current)
        }
    }
}

/// Composes any number of distinct closures with [`Outcome::chain`], boxing each of them.
///
/// # Examples
/// ```
/// # use fallible::{chain, err, ok, Outcome};
/// let trim = chain!(
///     |s: String| ok::<_, &str>(s.trim().to_owned()),
///     |s: String| if s.is_empty() { err("empty") } else { ok(s) },
/// );
/// assert_eq!(trim(String::from("  hi ")), ok(String::from("hi")));
/// assert_eq!(trim(String::from("   ")), err("empty"));
/// ```
#[macro_export]
macro_rules! chain {
    () => {
        $crate::Outcome::chain(::std::vec::Vec::<::std::boxed::Box<dyn Fn(_) -> $crate::Outcome<_, _>>>::new())
    };
    ($($step:expr),+ $(,)?) => {
        $crate::Outcome::chain(::std::vec![
            $(::std::boxed::Box::new($step) as ::std::boxed::Box<dyn Fn(_) -> $crate::Outcome<_, _>>),+
        ])
    };
}
