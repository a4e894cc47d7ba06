use std::fmt;

/// Errors raised while parsing or ingesting a grammar source (§7).
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SourceError {
    /// The input is shorter than the 3-byte `.Z` header.
    TruncatedHeader,
    /// The input does not start with the `.Z` magic bytes `1F 9D`.
    BadMagic,
    /// The header's code-width field is outside `9..=16`.
    BadMaxWidth {
        /// The out-of-range width read from the header.
        max_bits: u32,
    },
    /// A code appeared in the stream before the dictionary defined it.
    BadCode {
        /// The unexpected code.
        code: u32,
    },
    /// The compressed stream held no codes at all.
    EmptyStream,
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::TruncatedHeader => write!(f, "input shorter than the 3-byte compress header"),
            SourceError::BadMagic => write!(f, "input does not start with the compress magic bytes"),
            SourceError::BadMaxWidth { max_bits } => {
                write!(f, "header code width {max_bits} is outside 9..=16")
            }
            SourceError::BadCode { code } => write!(f, "code {code} precedes its own dictionary entry"),
            SourceError::EmptyStream => write!(f, "compressed stream held no codes"),
        }
    }
}

impl std::error::Error for SourceError {}
