use std::fmt;

/// Errors raised while working with Monge matrices (§7).
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MongeError {
    /// The cross-difference of a matrix handed to [`crate::MongeMatrix::to_permutation`]
    /// was not a 0/1 matrix with at most one 1 per row and per column — the
    /// input was not a simple subunit-Monge matrix.
    IllFormedMonge {
        /// Row at which the violation was detected.
        row: u32,
        /// Column at which the violation was detected.
        col: u32,
    },
    /// An element query used indices outside the matrix's declared shape.
    OutOfRange {
        /// 0-based row queried.
        row: u32,
        /// 0-based column queried.
        col: u32,
    },
    /// Tropical multiplication received operands with incompatible inner
    /// dimension.
    ShapeMismatch {
        /// Column count of the left operand.
        left_cols: u32,
        /// Row count of the right operand.
        right_rows: u32,
    },
}

impl fmt::Display for MongeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MongeError::IllFormedMonge { row, col } => write!(
                f,
                "cross-difference at ({row}, {col}) is not a simple subunit-Monge density"
            ),
            MongeError::OutOfRange { row, col } => {
                write!(f, "Monge matrix element query ({row}, {col}) out of range")
            }
            MongeError::ShapeMismatch { left_cols, right_rows } => write!(
                f,
                "tropical multiplication shape mismatch: {left_cols} columns vs {right_rows} rows"
            ),
        }
    }
}

impl std::error::Error for MongeError {}
