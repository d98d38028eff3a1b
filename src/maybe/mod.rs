//! A module containing [`Maybe`] and its associated iterators.
//!
//! [`Maybe`] is also re-exported at the crate root, along with the [`some`] and [`none`]
//! constructors.

mod iter;
mod maybe;

pub use iter::*;
pub use maybe::*;
