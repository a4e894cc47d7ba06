use std::fmt;

/// Errors raised by the sparse/dense permutation representations (§7).
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PermutationError {
    /// An element query used a row or column outside the matrix's declared
    /// dimensions.
    OutOfRange {
        /// 0-based row queried.
        row: u32,
        /// 0-based column queried.
        col: u32,
        /// Declared row count.
        rows: u32,
        /// Declared column count.
        cols: u32,
    },
    /// `grow_front`/`grow_back` was asked for a size not larger than the
    /// current dimension.
    GrowInvalid {
        /// The rejected new size.
        requested: u32,
        /// The current size it would have had to exceed.
        current: u32,
    },
    /// `expand` was asked to place a pair outside the declared dimensions.
    ShapeMismatch {
        /// What was being expanded.
        context: &'static str,
    },
}

impl fmt::Display for PermutationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PermutationError::OutOfRange { row, col, rows, cols } => write!(
                f,
                "element query ({row}, {col}) out of range for a {rows}x{cols} matrix"
            ),
            PermutationError::GrowInvalid { requested, current } => write!(
                f,
                "grow requested new size {requested} which does not exceed current size {current}"
            ),
            PermutationError::ShapeMismatch { context } => {
                write!(f, "shape mismatch while expanding: {context}")
            }
        }
    }
}

impl std::error::Error for PermutationError {}
