//! Steady-Ant: the `O(k log k)` divide-and-conquer merge that reconciles
//! two independently-split sticky products into the true one, and the
//! recursive driver that uses it (§4.3, §4.4).

#![deny(missing_docs)]

mod error;
mod steady_ant;
mod sticky;

pub use error::MultiplyError;
pub use sticky::{multiply_sparse, sticky_multiply};
