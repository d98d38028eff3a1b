//! A module containing [`Outcome`] and associated types.
//!
//! Besides the type itself, this covers the iterators over its success channel, the batch
//! operations in [`batch`] and the adapters that turn panics, [`Option`]s and Go-style pairs into
//! Outcomes. The asynchronous adapters live in [`task`](crate::task) but are still associated
//! functions of [`Outcome`].
//!
//! [`Outcome`] and [`Partition`] are also re-exported at the crate root, along with the [`ok`]
//! and [`err`] constructors.

mod adapt;
pub mod batch;
mod iter;
mod outcome;
mod tests;

pub use adapt::*;
pub use batch::{OutcomeTuple, Partition};
pub use iter::*;
pub use outcome::*;
