use std::error::Error;

/// Panics with the [`Display`](std::fmt::Display) form of the provided error. All of the
/// extracting methods in this crate route through here, so the panic message of an `unwrap` is
/// always the message of the matching error kind.
#[track_caller]
pub(crate) fn throw<E: Error>(error: E) -> ! {
    panic!("{}", error)
}

#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "assertion failed to panic")
    };
    ($run:block, $msg:literal) => {
        assert!(std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run)).is_err(), $msg);
        println!("^ panic caught");
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;

/// Runs the provided block, asserting that it panics with exactly the provided message.
#[allow(unused_macros)]
macro_rules! assert_panics_with {
    ($run:block, $expected:expr) => {
        let message = match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run)) {
            Ok(_) => panic!("assertion failed to panic"),
            Err(payload) => crate::error::Panic::from_payload(payload).message,
        };
        assert_eq!(message, $expected, "panic message should match");
        println!("^ panic caught");
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics_with;
