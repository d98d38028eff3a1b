//! Asynchronous adapters for [`Outcome`](crate::Outcome).
//!
//! These are the only places in the crate where execution can suspend: awaiting the wrapped future
//! in [`try_catch`](crate::Outcome::try_catch) and [`from_future`](crate::Outcome::from_future),
//! the backoff between attempts of [`retry`](crate::Outcome::retry) and the timer raced by
//! [`with_timeout`](crate::Outcome::with_timeout). Everything else in the crate is synchronous.
//!
//! None of these spawn tasks or run anything concurrently, so they work on any executor. Only the
//! default [`TokioSleeper`] requires a tokio runtime with the time driver enabled, other
//! [`Sleeper`]s can be supplied through the `_with` variants.
//!
//! There is no cancellation token: once started, a retry loop only stops when it succeeds, runs
//! out of attempts or is dropped.

mod catch;
mod retry;
mod sleeper;
mod tests;
mod timeout;

pub use retry::*;
pub use sleeper::*;
