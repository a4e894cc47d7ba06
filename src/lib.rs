//! Semi-local LCS over plain and grammar-compressed strings.
//!
//! This crate is a thin facade over the workspace's member crates: each
//! one owns a layer of the algorithm (symbols, permutations, Monge
//! matrices, sticky multiplication, the plain-string kernel, grammar
//! rules and their kernel, grammar sources, and a DP oracle), and this
//! crate just re-exports their public surface plus an [`Error`] that
//! unifies their error types (§1 overview, §7 error handling).

#![deny(missing_docs)]

use std::fmt;

pub use semi_lcs_dp::lcs_length;
pub use semi_lcs_grammar::{GrammarError, GrammarKernel, GrammarRule, GrammarRuleSet};
pub use semi_lcs_kernel::{comb_kernel, calculate_kernel, KernelError, LCSKernel};
pub use semi_lcs_monge::{MongeError, MongeMatrix};
pub use semi_lcs_multiply::{multiply_sparse, sticky_multiply, MultiplyError};
pub use semi_lcs_permutation::{Permutation, PermutationError, PermutationMatrix};
pub use semi_lcs_sources::{
    decompress_unix_compress, fibonacci_grammar, ingest_unix_compress, lz78_grammar, lzw_grammar,
    SourceError, UnixCompressIngest,
};
pub use semi_lcs_symbol::Symbol;

/// Unifies every member crate's error type behind one `?`-friendly enum.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// A permutation representation error (§7).
    Permutation(PermutationError),
    /// A Monge matrix error (§7).
    Monge(MongeError),
    /// A sticky multiplication shape error (§7).
    Multiply(MultiplyError),
    /// A plain-string kernel query error (§7).
    Kernel(KernelError),
    /// A grammar validation or construction error (§7).
    Grammar(GrammarError),
    /// A grammar source parsing error (§7).
    Source(SourceError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Permutation(e) => write!(f, "{e}"),
            Error::Monge(e) => write!(f, "{e}"),
            Error::Multiply(e) => write!(f, "{e}"),
            Error::Kernel(e) => write!(f, "{e}"),
            Error::Grammar(e) => write!(f, "{e}"),
            Error::Source(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<PermutationError> for Error {
    fn from(e: PermutationError) -> Self {
        Error::Permutation(e)
    }
}

impl From<MongeError> for Error {
    fn from(e: MongeError) -> Self {
        Error::Monge(e)
    }
}

impl From<MultiplyError> for Error {
    fn from(e: MultiplyError) -> Self {
        Error::Multiply(e)
    }
}

impl From<KernelError> for Error {
    fn from(e: KernelError) -> Self {
        Error::Kernel(e)
    }
}

impl From<GrammarError> for Error {
    fn from(e: GrammarError) -> Self {
        Error::Grammar(e)
    }
}

impl From<SourceError> for Error {
    fn from(e: SourceError) -> Self {
        Error::Source(e)
    }
}
