use std::future::{self, Future};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

/// A single-shot delay, used for the backoff in [`Outcome::retry`](crate::Outcome::retry) and the
/// timer in [`Outcome::with_timeout`](crate::Outcome::with_timeout).
///
/// The returned future must complete once the requested duration has elapsed and may be raced
/// against other futures.
pub trait Sleeper {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send;
}

/// Sleeps using [`tokio::time::sleep`]. This is the default for all of the async adapters.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioSleeper;

impl Sleeper for TokioSleeper {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        tokio::time::sleep(duration)
    }
}

/// Completes immediately, regardless of the requested duration.
#[derive(Debug, Default, Clone, Copy)]
pub struct InstantSleeper;

impl Sleeper for InstantSleeper {
    fn sleep(&self, _duration: Duration) -> impl Future<Output = ()> + Send {
        future::ready(())
    }
}

/// Completes immediately but records every requested duration. Clones share the same record.
///
/// # Examples
/// ```
/// # use std::time::Duration;
/// # use fallible::task::{Sleeper, TrackingSleeper};
/// # futures::executor::block_on(async {
/// let sleeper = TrackingSleeper::new();
/// sleeper.sleep(Duration::from_millis(5)).await;
/// sleeper.sleep(Duration::from_millis(10)).await;
/// assert_eq!(sleeper.total(), Duration::from_millis(15));
/// # });
/// ```
#[derive(Debug, Default, Clone)]
pub struct TrackingSleeper {
    delays: Arc<Mutex<Vec<Duration>>>,
}

impl TrackingSleeper {
    pub fn new() -> TrackingSleeper {
        TrackingSleeper::default()
    }

    /// Returns every requested duration, in the order they were requested.
    pub fn delays(&self) -> Vec<Duration> {
        self.delays.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn total(&self) -> Duration {
        self.delays().into_iter().sum()
    }
}

impl Sleeper for TrackingSleeper {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        self.delays.lock().unwrap_or_else(PoisonError::into_inner).push(duration);
        future::ready(())
    }
}
