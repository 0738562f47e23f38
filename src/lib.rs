//! Streaming word substitution driven by a two-column pair file.

pub mod diag;
pub mod error;
pub mod files;
pub mod pairs;
pub mod substitute;

pub use diag::{Diagnostics, TracingDiagnostics};
pub use error::SwapError;
pub use pairs::PairMap;
pub use substitute::{process, rewrite_line, TERMINATORS};
