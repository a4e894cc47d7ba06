use std::fmt;

/// Errors raised by sticky multiplication (§7).
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MultiplyError {
    /// The left operand's column count didn't match the right operand's
    /// row count.
    ShapeMismatch {
        /// Column count of the left operand.
        left_cols: u32,
        /// Row count of the right operand.
        right_rows: u32,
    },
}

impl fmt::Display for MultiplyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MultiplyError::ShapeMismatch { left_cols, right_rows } => write!(
                f,
                "sticky multiplication shape mismatch: {left_cols} columns vs {right_rows} rows"
            ),
        }
    }
}

impl std::error::Error for MultiplyError {}
