//! Operations over many Outcomes at once.
//!
//! [`collect`](Outcome::collect) and [`all`](Outcome::all) fail fast, returning the first
//! [`Failure`](Outcome::Failure) in input order and consuming nothing after it. The fail-slow
//! variants, [`combine_with_all_errors`](Outcome::combine_with_all_errors),
//! [`partition`](Outcome::partition) and [`all_settled`](Outcome::all_settled), always visit every
//! input. None of these start any work of their own, they only inspect Outcomes that already
//! exist.

use super::Outcome;

/// Outcomes split into two buckets, each preserving the relative input order of its members.
///
/// Produced by [`Outcome::partition`] (holding unwrapped values and errors) and
/// [`Outcome::all_settled`] (holding the original Outcomes).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Partition<S, F> {
    pub successes: Vec<S>,
    pub failures: Vec<F>,
}

impl<S, F> Partition<S, F> {
    pub const fn new() -> Partition<S, F> {
        Partition {
            successes: Vec::new(),
            failures: Vec::new(),
        }
    }

    /// Returns the total number of items across both buckets.
    pub fn len(&self) -> usize {
        self.successes.len() + self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S, F> Default for Partition<S, F> {
    fn default() -> Self {
        Partition::new()
    }
}

/// A tuple of Outcomes sharing an error type, which can be combined into an Outcome of a tuple.
/// Implemented for tuples of up to 8 elements.
///
/// See [`Outcome::all`].
pub trait OutcomeTuple {
    type Output;
    type Error;

    fn all(self) -> Outcome<Self::Output, Self::Error>;
}

macro_rules! impl_outcome_tuple {
    ($($ty:ident $var:ident),+) => {
        impl<E, $($ty),+> OutcomeTuple for ($(Outcome<$ty, E>,)+) {
            type Output = ($($ty,)+);
            type Error = E;

            fn all(self) -> Outcome<Self::Output, E> {
                let ($($var,)+) = self;
                $(
                    let $var = match $var {
                        Outcome::Success(data) => data,
                        Outcome::Failure(error) => return Outcome::Failure(error),
                    };
                )+
                Outcome::Success(($($var,)+))
            }
        }
    };
}

impl_outcome_tuple!(A a);
impl_outcome_tuple!(A a, B b);
impl_outcome_tuple!(A a, B b, C c);
impl_outcome_tuple!(A a, B b, C c, D d);
impl_outcome_tuple!(A a, B b, C c, D d, F f);
impl_outcome_tuple!(A a, B b, C c, D d, F f, G g);
impl_outcome_tuple!(A a, B b, C c, D d, F f, G g, H h);
impl_outcome_tuple!(A a, B b, C c, D d, F f, G g, H h, I i);

impl<T, E> Outcome<T, E> {
    /// Combines a tuple of Outcomes into an Outcome of a tuple, returning the first
    /// [`Failure`](Outcome::Failure) in tuple order if there is one.
    ///
    /// # Examples
    /// ```
    /// # use fallible::{err, ok, Outcome};
    /// let both: Outcome<(u8, &str), ()> = Outcome::all((ok(1), ok("one")));
    /// assert_eq!(both, ok((1, "one")));
    ///
    /// let first_failure = Outcome::all((ok::<u8, _>(1), err::<u8, _>("x"), err::<u8, _>("y")));
    /// assert_eq!(first_failure, err("x"));
    /// ```
    pub fn all<O>(outcomes: O) -> Outcome<T, E>
    where
        O: OutcomeTuple<Output = T, Error = E>,
    {
        outcomes.all()
    }

    /// An alias of [`all`](Outcome::all).
    pub fn combine<O>(outcomes: O) -> Outcome<T, E>
    where
        O: OutcomeTuple<Output = T, Error = E>,
    {
        outcomes.all()
    }

    /// Collects a homogeneous sequence of Outcomes into an Outcome of a [`Vec`], returning the
    /// first [`Failure`](Outcome::Failure) if there is one. Items after that Failure are never
    /// pulled from the iterator.
    ///
    /// For other collection types, Outcome also implements [`FromIterator`].
    ///
    /// # Examples
    /// ```
    /// # use fallible::{err, ok, Outcome};
    /// assert_eq!(Outcome::collect([ok::<_, &str>(1), ok(2)]), ok(vec![1, 2]));
    /// assert_eq!(Outcome::collect([ok(1), ok(2), err("x"), ok(3)]), err("x"));
    /// ```
    pub fn collect<I>(outcomes: I) -> Outcome<Vec<T>, E>
    where
        I: IntoIterator<Item = Outcome<T, E>>,
    {
        outcomes.into_iter().collect()
    }

    /// Collects every success value or, if there are any failures, every error.
    ///
    /// # Examples
    /// ```
    /// # use fallible::{err, ok, Outcome};
    /// let errors = Outcome::combine_with_all_errors([ok(1), err("a"), err("b")]);
    /// assert_eq!(errors, err(vec!["a", "b"]));
    /// ```
    pub fn combine_with_all_errors<I>(outcomes: I) -> Outcome<Vec<T>, Vec<E>>
    where
        I: IntoIterator<Item = Outcome<T, E>>,
    {
        let mut successes = Vec::new();
        let mut errors = Vec::new();

        for outcome in outcomes {
            match outcome {
                Outcome::Success(data) => successes.push(data),
                failure => errors.push(failure.into_error()),
            }
        }

        if errors.is_empty() {
            Outcome::Success(successes)
        } else {
            Outcome::Failure(errors)
        }
    }

    /// Splits Outcomes into their success values and their errors, never short-circuiting.
    pub fn partition<I>(outcomes: I) -> Partition<T, E>
    where
        I: IntoIterator<Item = Outcome<T, E>>,
    {
        let mut partition = Partition::new();

        for outcome in outcomes {
            match outcome {
                Outcome::Success(data) => partition.successes.push(data),
                failure => partition.failures.push(failure.into_error()),
            }
        }

        partition
    }

    /// Like [`partition`](Outcome::partition), but keeps the Outcomes themselves rather than
    /// unwrapping them.
    pub fn all_settled<I>(outcomes: I) -> Partition<Outcome<T, E>, Outcome<T, E>>
    where
        I: IntoIterator<Item = Outcome<T, E>>,
    {
        let mut partition = Partition::new();

        for outcome in outcomes {
            if outcome.is_ok() {
                partition.successes.push(outcome);
            } else {
                partition.failures.push(outcome);
            }
        }

        partition
    }
}

impl<A, E, V: FromIterator<A>> FromIterator<Outcome<A, E>> for Outcome<V, E> {
    fn from_iter<I: IntoIterator<Item = Outcome<A, E>>>(iter: I) -> Self {
        iter.into_iter().map(Outcome::into_std).collect::<Result<V, E>>().into()
    }
}
