//! Error kinds raised or returned by this crate.
//!
//! There are two families here. The first are the panic payloads used by the extracting methods
//! ([`unwrap`](crate::Maybe::unwrap), [`expect`](crate::Outcome::expect) and friends), which signal
//! programmer errors and are never returned as values. The second are the errors that utilities
//! such as [`Outcome::retry`](crate::Outcome::retry) report through the
//! [`Failure`](crate::Outcome::Failure) channel.
use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use derive_more::{Display, Error, IsVariant};

use crate::maybe::Maybe;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("Called unwrap on None")]
pub struct UnwrapOnNone;

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("Called unwrap on Failure: {error}")]
pub struct UnwrapOnFailure {
    /// The [`Debug`] form of the contained error.
    pub error: String,
}

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("Called unwrap_err on Success: {value}")]
pub struct UnwrapErrOnSuccess {
    /// The [`Debug`] form of the contained value.
    pub value: String,
}

/// Raised by `expect`. The message is exactly what is displayed, callers that want the contained
/// error included get it appended by [`Outcome::expect`](crate::Outcome::expect).
#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("{message}")]
pub struct ExpectFailed {
    pub message: String,
}

/// Raised when a method is called on a variant it is never valid for, such as reading the error
/// out of a [`Success`](crate::Outcome::Success).
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("precondition violated: {reason}")]
pub struct PreconditionViolated {
    pub reason: &'static str,
}

/// A panic caught by [`Outcome::safe_try`](crate::Outcome::safe_try) or one of its relatives,
/// with the payload rendered as a string where possible.
#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("caught panic: {message}")]
pub struct Panic {
    pub message: String,
}

impl Panic {
    pub(crate) fn from_payload(payload: Box<dyn std::any::Any + Send>) -> Panic {
        let message = match payload.downcast::<String>() {
            Ok(message) => *message,
            Err(payload) => match payload.downcast::<&'static str>() {
                Ok(message) => (*message).to_owned(),
                Err(_) => String::from("Box<dyn Any>"),
            },
        };
        Panic { message }
    }
}

/// Invalid arguments passed to one of the static utilities.
#[derive(Debug, Display, Clone, Copy, PartialEq, Error, IsVariant)]
pub enum ValidationError {
    #[display("max_attempts must be a positive integer, got {value}")]
    MaxAttempts { value: usize },
    #[display("exponential_base must be finite and strictly positive, got {value}")]
    ExponentialBase { value: f64 },
}

/// The failure type of [`Outcome::retry`](crate::Outcome::retry).
///
/// A `Validation` error means that the wrapped function was never invoked, an `Exhausted` error
/// carries the number of attempts made and the error from the last of them.
#[derive(Debug, Clone, PartialEq, IsVariant)]
pub enum RetryError<E> {
    Validation(ValidationError),
    Exhausted { attempts: usize, last_error: E },
}

impl<E> RetryError<E> {
    /// Returns the number of times the wrapped function was invoked.
    pub const fn attempts(&self) -> usize {
        match self {
            RetryError::Validation(_) => 0,
            RetryError::Exhausted { attempts, .. } => *attempts,
        }
    }

    /// Returns the error from the final attempt, if any attempt was made.
    pub fn into_last_error(self) -> Maybe<E> {
        match self {
            RetryError::Validation(_) => Maybe::None,
            RetryError::Exhausted { last_error, .. } => Maybe::Some(last_error),
        }
    }
}

impl<E> From<ValidationError> for RetryError<E> {
    fn from(value: ValidationError) -> Self {
        RetryError::Validation(value)
    }
}

impl<E: Debug> Display for RetryError<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            RetryError::Validation(e) => write!(f, "invalid retry options: {}", e),
            RetryError::Exhausted { attempts, last_error } => {
                write!(f, "gave up after {} attempts, last error: {:?}", attempts, last_error)
            },
        }
    }
}

impl<E: Debug> Error for RetryError<E> {}
