//! Sparse and dense representations of a (sub)permutation matrix (§3, §4.1).
//!
//! [`Permutation`] is the sparse "two index-sorted views" representation:
//! cheap to split and to grow, and the type the divide-and-conquer sticky
//! multiplication in `semi-lcs-multiply` operates on. [`PermutationMatrix`]
//! is its dense-ish counterpart — one column index per row — which is what
//! `semi-lcs-monge` converts to and from a `MongeMatrix`.

#![deny(missing_docs)]

mod error;
mod matrix;
mod sparse;

pub use error::PermutationError;
pub use matrix::PermutationMatrix;
pub use sparse::Permutation;
