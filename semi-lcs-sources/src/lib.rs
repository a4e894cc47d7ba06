//! Grammar sources: ways to build a [`semi_lcs_grammar::GrammarRuleSet`]
//! without ever materializing the text it expands to (§4.7).

#![deny(missing_docs)]

mod error;
mod fibonacci;
mod lz;
mod unix_compress;

pub use error::SourceError;
pub use fibonacci::fibonacci_grammar;
pub use lz::{lz78_grammar, lzw_grammar};
pub use unix_compress::{decompress_unix_compress, ingest_unix_compress, UnixCompressIngest};
