use std::future::Future;
use std::time::Duration;

use tracing::{debug, warn};

use super::{Sleeper, TokioSleeper};
use crate::error::{RetryError, ValidationError};
use crate::outcome::Outcome;

/// Configuration for [`Outcome::retry`].
///
/// The delay before attempt `n + 1` is `base_delay * exponential_base^(n - 1)`, capped at
/// `max_delay`. Durations can't be negative, so only `max_attempts` and `exponential_base` are
/// checked by [`validate`](RetryOptions::validate).
///
/// # Examples
/// ```
/// # use std::time::Duration;
/// # use fallible::task::RetryOptions;
/// let options = RetryOptions::new().max_attempts(5).base_delay(Duration::from_millis(10));
/// assert_eq!(options.delay_for(1), Duration::from_millis(10));
/// assert_eq!(options.delay_for(3), Duration::from_millis(40));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryOptions {
    pub max_attempts: usize,
    pub base_delay: Duration,
    pub max_delay: Duration,
    pub exponential_base: f64,
}

impl RetryOptions {
    /// Creates the default options: 3 attempts, with delays starting at 100ms, doubling each time
    /// and capped at 5s.
    pub const fn new() -> RetryOptions {
        RetryOptions {
            max_attempts: 3,
            base_delay: Duration::from_millis(100),
            max_delay: Duration::from_millis(5000),
            exponential_base: 2.0,
        }
    }

    pub const fn max_attempts(mut self, max_attempts: usize) -> RetryOptions {
        self.max_attempts = max_attempts;
        self
    }

    pub const fn base_delay(mut self, base_delay: Duration) -> RetryOptions {
        self.base_delay = base_delay;
        self
    }

    pub const fn max_delay(mut self, max_delay: Duration) -> RetryOptions {
        self.max_delay = max_delay;
        self
    }

    pub const fn exponential_base(mut self, exponential_base: f64) -> RetryOptions {
        self.exponential_base = exponential_base;
        self
    }

    /// Checks that at least one attempt will be made and that the exponential base is a finite,
    /// strictly positive number.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_attempts == 0 {
            return Err(ValidationError::MaxAttempts { value: self.max_attempts });
        }
        if !self.exponential_base.is_finite() || self.exponential_base <= 0.0 {
            return Err(ValidationError::ExponentialBase { value: self.exponential_base });
        }
        Ok(())
    }

    /// Returns the delay to wait after the provided (1-based) attempt fails.
    pub fn delay_for(&self, attempt: usize) -> Duration {
        let exponent = i32::try_from(attempt.saturating_sub(1)).unwrap_or(i32::MAX);
        let nanos = self.base_delay.as_nanos() as f64 * self.exponential_base.powi(exponent);

        if !nanos.is_finite() || nanos >= self.max_delay.as_nanos() as f64 {
            self.max_delay
        } else {
            Duration::try_from_secs_f64(nanos / 1e9).unwrap_or(self.max_delay)
        }
    }
}

impl Default for RetryOptions {
    fn default() -> Self {
        RetryOptions::new()
    }
}

impl<T, E> Outcome<T, RetryError<E>> {
    /// Calls the provided function until the future it returns resolves to [`Ok`], backing off
    /// exponentially between attempts using [`tokio::time::sleep`].
    ///
    /// The options are validated before the first attempt. If they are invalid, the function is
    /// never called and the result is a [`RetryError::Validation`]. If every attempt fails, the
    /// result is a [`RetryError::Exhausted`] holding the last error. No delay follows the final
    /// attempt.
    ///
    /// # Examples
    /// ```
    /// # use std::cell::Cell;
    /// # use std::time::Duration;
    /// # use fallible::{ok, Outcome};
    /// # use fallible::task::RetryOptions;
    /// # #[tokio::main(flavor = "current_thread", start_paused = true)]
    /// # async fn main() {
    /// let calls = Cell::new(0);
    /// let options = RetryOptions::new().base_delay(Duration::from_millis(10));
    /// let outcome = Outcome::retry(|| {
    ///     calls.set(calls.get() + 1);
    ///     let attempt = calls.get();
    ///     async move { if attempt < 3 { Err("not yet") } else { Ok("done") } }
    /// }, options).await;
    ///
    /// assert_eq!(outcome, ok("done"));
    /// assert_eq!(calls.get(), 3);
    /// # }
    /// ```
    pub async fn retry<F, Fut>(f: F, options: RetryOptions) -> Outcome<T, RetryError<E>>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        Outcome::retry_with(f, options, &TokioSleeper).await
    }

    /// Like [`retry`](Outcome::retry), but backs off using the provided [`Sleeper`].
    pub async fn retry_with<F, Fut, S>(
        mut f: F,
        options: RetryOptions,
        sleeper: &S,
    ) -> Outcome<T, RetryError<E>>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        S: Sleeper,
    {
        if let Err(error) = options.validate() {
            warn!(%error, "invalid retry options, no attempts made");
            return Outcome::Failure(error.into());
        }

        let mut attempt = 1;
        loop {
            match f().await {
                Ok(data) => return Outcome::Success(data),
                Err(last_error) if attempt >= options.max_attempts => {
                    warn!(attempts = attempt, "retry attempts exhausted");
                    return Outcome::Failure(RetryError::Exhausted {
                        attempts: attempt,
                        last_error,
                    });
                },
                Err(_) => {
                    let delay = options.delay_for(attempt);
                    debug!(attempt, ?delay, "attempt failed, backing off");
                    sleeper.sleep(delay).await;
                    attempt += 1;
                },
            }
        }
    }
}
