//! Straight-line grammar rules and the memoized semi-local LCS kernel
//! over grammar-compressed text (§4.6, §4.7).

#![deny(missing_docs)]

mod error;
mod kernel;
mod rule;

pub use error::GrammarError;
pub use kernel::GrammarKernel;
pub use rule::{GrammarRule, GrammarRuleSet};
