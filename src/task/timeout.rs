use std::future::Future;
use std::pin::pin;
use std::time::Duration;

use futures::future::{self, Either};
use tracing::debug;

use super::{Sleeper, TokioSleeper};
use crate::outcome::Outcome;

impl<T, E> Outcome<T, E> {
    /// Races the provided future against a timer. Whichever completes first decides the Outcome:
    /// the future's own result, or a [`Failure`](Outcome::Failure) of `timeout_error` if the timer
    /// fires first. If both are ready on the same poll, the future wins.
    ///
    /// A zero timeout can never be met, so it fails immediately without polling the future.
    ///
    /// The losing future is dropped when this returns. Anything it was doing is abandoned at its
    /// last suspension point, no further cleanup happens beyond its [`Drop`] implementation.
    ///
    /// # Examples
    /// ```
    /// # use std::future;
    /// # use std::time::Duration;
    /// # use fallible::{err, ok, Outcome};
    /// # #[tokio::main(flavor = "current_thread", start_paused = true)]
    /// # async fn main() {
    /// let never = future::pending::<Result<u8, &str>>();
    /// let timed_out = Outcome::with_timeout(never, Duration::from_millis(50), "timeout").await;
    /// assert_eq!(timed_out, err("timeout"));
    ///
    /// let quick = async { Ok::<u8, &str>(1) };
    /// assert_eq!(Outcome::with_timeout(quick, Duration::from_millis(50), "timeout").await, ok(1));
    /// # }
    /// ```
    pub async fn with_timeout<Fut>(future: Fut, timeout: Duration, timeout_error: E) -> Outcome<T, E>
    where
        Fut: Future<Output = Result<T, E>>,
    {
        Outcome::with_timeout_with(future, timeout, timeout_error, &TokioSleeper).await
    }

    /// Like [`with_timeout`](Outcome::with_timeout), but runs the timer on the provided
    /// [`Sleeper`].
    pub async fn with_timeout_with<Fut, S>(
        future: Fut,
        timeout: Duration,
        timeout_error: E,
        sleeper: &S,
    ) -> Outcome<T, E>
    where
        Fut: Future<Output = Result<T, E>>,
        S: Sleeper,
    {
        if timeout.is_zero() {
            debug!("zero timeout, failing without polling");
            return Outcome::Failure(timeout_error);
        }

        let future = pin!(future);
        let timer = pin!(sleeper.sleep(timeout));

        match future::select(future, timer).await {
            Either::Left((result, _)) => result.into(),
            Either::Right(((), _)) => {
                debug!(?timeout, "timed out");
                Outcome::Failure(timeout_error)
            },
        }
    }
}
