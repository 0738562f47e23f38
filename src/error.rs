use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SwapError {
    /// A pair-file line without two space-separated fields.
    #[error("unable to parse line: {0}")]
    MalformedPair(String),

    #[error("could not locate pair file: {0}")]
    PairFileNotFound(String),

    #[error("error occurred reading pair file {path}: {source}")]
    PairFileRead { path: String, source: io::Error },

    #[error("encoding errors in pair file: {0}")]
    PairFileEncoding(String),

    /// I/O failure on the main processing stream. The only fatal variant;
    /// everything above is reported and skipped over.
    #[error("unexpected error while processing input: {0}")]
    Input(#[from] io::Error),
}
