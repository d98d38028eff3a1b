use std::future::Future;
use std::panic::{self, AssertUnwindSafe};

use futures::FutureExt;
use tracing::trace;

use crate::error::Panic;
use crate::outcome::Outcome;

impl<T, E> Outcome<T, E> {
    /// Awaits a future of a [`Result`], converting it into an Outcome.
    pub async fn from_future<Fut>(future: Fut) -> Outcome<T, E>
    where
        Fut: Future<Output = Result<T, E>>,
    {
        future.await.into()
    }
}

impl<T> Outcome<T, Panic> {
    /// The asynchronous counterpart of [`safe_try`](Outcome::safe_try). Calls the provided
    /// function and awaits the future it returns, converting a panic in either into a
    /// [`Failure`](Outcome::Failure).
    ///
    /// Only a panic counts as a failure here: a future resolving to `Err(e)` produces
    /// `Success(Err(e))`. Use [`from_future`](Outcome::from_future) to treat `Err` as a
    /// [`Failure`](Outcome::Failure) instead.
    ///
    /// # Examples
    /// ```
    /// # use fallible::{ok, Outcome};
    /// # futures::executor::block_on(async {
    /// assert_eq!(Outcome::try_catch(|| async { 7 }).await, ok(7));
    ///
    /// let caught = Outcome::<u8, _>::try_catch(|| async { panic!("lost") }).await;
    /// assert_eq!(caught.unwrap_err().message, "lost");
    /// # });
    /// ```
    pub async fn try_catch<F, Fut>(f: F) -> Outcome<T, Panic>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        let caught = match panic::catch_unwind(AssertUnwindSafe(f)) {
            Ok(future) => AssertUnwindSafe(future).catch_unwind().await,
            Err(payload) => Err(payload),
        };

        match caught {
            Ok(data) => Outcome::Success(data),
            Err(payload) => {
                let panic = Panic::from_payload(payload);
                trace!(panic = %panic.message, "caught panic in future");
                Outcome::Failure(panic)
            },
        }
    }
}
