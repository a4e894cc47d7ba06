use std::fmt;

/// Errors raised while building or querying an [`crate::LCSKernel`] (§7).
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum KernelError {
    /// A semi-local query used indices outside the string's domain.
    OutOfRange {
        /// Name of the offending argument, for diagnostics.
        what: &'static str,
        /// The value that was out of range.
        value: u32,
        /// The inclusive upper bound the value had to respect.
        bound: u32,
    },
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::OutOfRange { what, value, bound } => {
                write!(f, "{what} = {value} is out of range (expected <= {bound})")
            }
        }
    }
}

impl std::error::Error for KernelError {}
