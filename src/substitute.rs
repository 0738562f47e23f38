use std::io::{BufRead, Write};

use crate::error::SwapError;
use crate::pairs::PairMap;

/// Trailing marks recognized on a token, checked in this order.
pub const TERMINATORS: [char; 6] = ['.', '!', '?', ',', ':', ';'];

/// Splits a token into its core and at most one trailing mark.
fn split_trailing(token: &str) -> (&str, &str) {
    for mark in TERMINATORS {
        if let Some(core) = token.strip_suffix(mark) {
            return (core, &token[core.len()..]);
        }
    }
    (token, "")
}

/// Rewrites one line: each whitespace-delimited token is decomposed, its
/// core resolved through the map, and its trailing mark reattached with no
/// space in between. Tokens are joined with single spaces, so whitespace
/// runs collapse and an all-whitespace line comes back empty.
pub fn rewrite_line(line: &str, pairs: &PairMap) -> String {
    let mut out = String::with_capacity(line.len());
    for (i, token) in line.split_whitespace().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let (core, mark) = split_trailing(token);
        out.push_str(pairs.resolve(core));
        out.push_str(mark);
    }
    out
}

/// Streams `input` to `output` until end of input, rewriting line by line.
/// Every input line produces exactly one output line; reaching end of input
/// is normal termination, and only a failure on the streams themselves
/// aborts.
pub fn process<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    pairs: &PairMap,
) -> Result<(), SwapError> {
    for line in input.lines() {
        let line = line?;
        writeln!(output, "{}", rewrite_line(&line, pairs))?;
    }
    output.flush()?;
    Ok(())
}
