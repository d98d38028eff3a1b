#![cfg(test)]

use std::cell::Cell;
use std::future;
use std::time::Duration;

use tokio::time::Instant;

use super::*;
use crate::error::{Panic, RetryError, ValidationError};
use crate::maybe::Maybe;
use crate::outcome::{Outcome, err, ok};

fn failing_until<'a>(
    calls: &'a Cell<usize>,
    succeed_on: usize,
) -> impl FnMut() -> future::Ready<Result<&'static str, String>> + 'a {
    move || {
        calls.set(calls.get() + 1);
        let attempt = calls.get();
        if attempt >= succeed_on {
            future::ready(Ok("done"))
        } else {
            future::ready(Err(format!("attempt {attempt} failed")))
        }
    }
}

#[test]
fn test_retry_options() {
    let options = RetryOptions::default();
    assert_eq!(options.max_attempts, 3);
    assert_eq!(options.base_delay, Duration::from_millis(100));
    assert_eq!(options.max_delay, Duration::from_millis(5000));
    assert_eq!(options.exponential_base, 2.0);
    assert!(options.validate().is_ok());

    assert_eq!(options.delay_for(1), Duration::from_millis(100));
    assert_eq!(options.delay_for(2), Duration::from_millis(200));
    assert_eq!(options.delay_for(6), Duration::from_millis(3200));
    assert_eq!(options.delay_for(7), Duration::from_millis(5000), "Delay should be capped.");
    assert_eq!(options.delay_for(10_000), Duration::from_millis(5000), "Huge exponents should cap too.");

    let flat = options.exponential_base(1.0);
    assert_eq!(flat.delay_for(5), Duration::from_millis(100));

    assert_eq!(
        options.max_attempts(0).validate(),
        Err(ValidationError::MaxAttempts { value: 0 })
    );
    assert!(options.exponential_base(0.0).validate().is_err());
    assert!(options.exponential_base(-2.0).validate().is_err());
    assert!(options.exponential_base(f64::NAN).validate().is_err());
    assert!(options.exponential_base(f64::INFINITY).validate().is_err());
}

#[test]
fn test_delay_beyond_u64_nanos() {
    let options = RetryOptions::new()
        .base_delay(Duration::from_secs(1))
        .max_delay(Duration::MAX)
        .exponential_base(10.0);

    assert_eq!(options.delay_for(1), Duration::from_secs(1));
    assert_eq!(
        options.delay_for(13),
        Duration::from_secs(1_000_000_000_000),
        "Delays past u64::MAX nanoseconds shouldn't saturate below the cap."
    );
    assert_eq!(options.delay_for(40), Duration::MAX, "Delays past the cap should be capped.");
}

#[tokio::test(start_paused = true)]
async fn test_retry_succeeds_after_failures() {
    let calls = Cell::new(0);
    let options = RetryOptions::new().base_delay(Duration::from_millis(10));

    let start = Instant::now();
    let outcome = Outcome::retry(failing_until(&calls, 3), options).await;

    assert_eq!(outcome, ok("done"));
    assert_eq!(calls.get(), 3, "Should take exactly 3 attempts.");
    assert!(
        start.elapsed() >= Duration::from_millis(30),
        "Should back off for at least 10ms + 20ms."
    );
}

#[tokio::test]
async fn test_retry_stops_on_first_success() {
    let calls = Cell::new(0);
    let sleeper = TrackingSleeper::new();

    let outcome = Outcome::retry_with(failing_until(&calls, 1), RetryOptions::new(), &sleeper).await;

    assert_eq!(outcome, ok("done"));
    assert_eq!(calls.get(), 1);
    assert!(sleeper.delays().is_empty(), "No delay should follow a success.");
}

#[tokio::test]
async fn test_retry_exhaustion() {
    let calls = Cell::new(0);
    let sleeper = TrackingSleeper::new();
    let options = RetryOptions::new()
        .max_attempts(4)
        .base_delay(Duration::from_millis(100))
        .max_delay(Duration::from_millis(250));

    let outcome = Outcome::retry_with(failing_until(&calls, usize::MAX), options, &sleeper).await;

    assert_eq!(
        outcome,
        err(RetryError::Exhausted {
            attempts: 4,
            last_error: String::from("attempt 4 failed"),
        })
    );
    assert_eq!(calls.get(), 4);
    assert_eq!(
        sleeper.delays(),
        vec![
            Duration::from_millis(100),
            Duration::from_millis(200),
            Duration::from_millis(250),
        ],
        "Delays should grow exponentially up to the cap, with none after the last attempt."
    );
}

#[tokio::test]
async fn test_retry_validation_skips_calls() {
    let calls = Cell::new(0);

    let outcome = Outcome::retry_with(
        failing_until(&calls, 1),
        RetryOptions::new().max_attempts(0),
        &InstantSleeper,
    )
    .await;

    let error = outcome.unwrap_err();
    assert!(error.is_validation());
    assert_eq!(error.attempts(), 0);
    assert_eq!(error.into_last_error(), Maybe::None);
    assert_eq!(calls.get(), 0, "The function shouldn't be invoked with invalid options.");
}

#[tokio::test(start_paused = true)]
async fn test_with_timeout() {
    let start = Instant::now();
    let never = future::pending::<Result<u8, &str>>();
    let outcome = Outcome::with_timeout(never, Duration::from_millis(50), "timeout").await;

    assert_eq!(outcome, err("timeout"));
    assert!(start.elapsed() >= Duration::from_millis(50));
    assert!(start.elapsed() < Duration::from_millis(60), "Should fail at the deadline, not later.");

    let quick = async { Ok::<_, &str>(1) };
    assert_eq!(Outcome::with_timeout(quick, Duration::from_millis(50), "timeout").await, ok(1));

    let rejected = async { Err::<u8, _>("rejected") };
    assert_eq!(
        Outcome::with_timeout(rejected, Duration::from_millis(50), "timeout").await,
        err("rejected")
    );

    let slow = async {
        tokio::time::sleep(Duration::from_millis(20)).await;
        Ok::<_, &str>(2)
    };
    assert_eq!(Outcome::with_timeout(slow, Duration::from_millis(50), "timeout").await, ok(2));
}

#[tokio::test]
async fn test_zero_timeout_fails_immediately() {
    let polled = Cell::new(false);
    let watched = async {
        polled.set(true);
        Ok::<_, &str>(1)
    };

    let outcome = Outcome::with_timeout_with(watched, Duration::ZERO, "invalid", &InstantSleeper).await;

    assert_eq!(outcome, err("invalid"));
    assert!(!polled.get(), "The future shouldn't be polled with a zero timeout.");
}

#[tokio::test]
async fn test_try_catch() {
    assert_eq!(Outcome::try_catch(|| async { 3 }).await, ok(3));

    let caught = Outcome::<u8, Panic>::try_catch(|| async { panic!("async boom") }).await;
    assert_eq!(caught, err(Panic { message: String::from("async boom") }));

    let caught = Outcome::<u8, Panic>::try_catch(|| -> future::Ready<u8> { panic!("before await") }).await;
    assert_eq!(caught, err(Panic { message: String::from("before await") }));
}

#[tokio::test]
async fn test_try_catch_keeps_errors_as_values() {
    let caught = Outcome::<Result<u8, &str>, Panic>::try_catch(|| async { Err("rejected") }).await;
    assert_eq!(caught, ok(Err("rejected")), "Only panics should become a Failure.");

    let flattened = Outcome::from_future(async { Err::<u8, _>("rejected") }).await;
    assert_eq!(flattened, err("rejected"));
}

#[tokio::test]
async fn test_from_future() {
    assert_eq!(Outcome::from_future(async { Ok::<_, &str>(1) }).await, ok(1));
    assert_eq!(Outcome::from_future(async { Err::<u8, _>("no") }).await, err("no"));
}
