//! This crate is my take on expressing fallibility and optionality as plain values, with a pair of
//! containers and the combinators to compose them.
//!
//! # Purpose
//! [`Maybe`] holds a value or nothing, [`Outcome`] holds the value of a successful operation or
//! the error of a failed one. Rust already has [`Option`] and [`Result`] of course, so this is
//! partly an exercise, but it also lets me give the pair a slightly wider surface: batch operations
//! over many Outcomes, adapters that turn panics into values, and async helpers for retrying and
//! timing out futures.
//!
//! Both types convert losslessly to and from their [`std`] counterparts, so they can be used at a
//! boundary and then handed off to code that expects `?`.
//!
//! # Method
//! Each type is a closed enum with exactly two variants, and every combinator takes `self` by
//! value and returns a new container. When a combinator has nothing to do for the current variant
//! it hands the payload straight back, so no clones are made. Where a fallback can be expensive,
//! there's a lazy `_else` version taking a closure next to the eager version taking a value.
//!
//! # Error Handling
//! There are two very different kinds of error here. Errors that an operation can recover from go
//! through the [`Failure`](Outcome::Failure) channel like any other value. Misuse, like calling
//! [`unwrap`](Maybe::unwrap) on a [`None`](Maybe::None), panics with one of the strongly typed
//! errors from [`error`], and the panic message is always that error's message. Nothing in the
//! combinators catches panics, only [`Outcome::safe_try`] and its relatives do that.
//!
//! # Dependencies
//! The error types are declared with `derive_more`, as are the `is_*` variant checks. The
//! [`task`] module sits behind the (default) `async` feature and depends on `tokio` for its timer
//! and `futures` for racing and catching panics in futures. `tracing` is used for the handful of
//! events the async helpers emit, this crate never installs a subscriber itself.
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod error;
pub mod maybe;
pub mod outcome;
#[cfg(feature = "async")]
pub mod task;

pub(crate) mod util;

#[doc(inline)]
pub use maybe::{Maybe, none, some};
#[doc(inline)]
pub use outcome::{Outcome, Partition, err, ok};
