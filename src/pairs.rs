use std::collections::HashMap;
use std::io::{ErrorKind, Read};

use encoding_rs::UTF_8;

use crate::diag::Diagnostics;
use crate::error::SwapError;
use crate::files;

/// Word -> replacement mapping built from a two-column pair file.
#[derive(Debug, Default)]
pub struct PairMap {
    entries: HashMap<String, String>,
}

impl PairMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses pair text, one `<source> <replacement>` pair per line.
    ///
    /// Fields are split on a single literal space; the first two fields form
    /// the pair and anything after them is ignored. A line with fewer than
    /// two fields is skipped and reported. A source word repeated on a later
    /// line overwrites the earlier replacement.
    pub fn parse(text: &str, diag: &mut dyn Diagnostics) -> Self {
        let mut entries = HashMap::new();
        for line in text.lines() {
            let mut fields = line.split(' ');
            match (fields.next(), fields.next()) {
                (Some(source), Some(replacement)) => {
                    entries.insert(source.to_string(), replacement.to_string());
                }
                _ => diag.report(&SwapError::MalformedPair(line.to_string())),
            }
        }
        Self { entries }
    }

    /// Loads a pair file. Every failure is reported through `diag` and
    /// yields whatever was built before it; a broken pair file never
    /// prevents passthrough processing.
    pub fn load(path: &str, diag: &mut dyn Diagnostics) -> Self {
        let mut reader = match files::file_reader(path) {
            Ok(reader) => reader,
            Err(err) => {
                let report = if err.kind() == ErrorKind::NotFound {
                    SwapError::PairFileNotFound(path.to_string())
                } else {
                    SwapError::PairFileRead {
                        path: path.to_string(),
                        source: err,
                    }
                };
                diag.report(&report);
                return Self::new();
            }
        };

        let mut bytes = Vec::new();
        if let Err(err) = reader.read_to_end(&mut bytes) {
            diag.report(&SwapError::PairFileRead {
                path: path.to_string(),
                source: err,
            });
            return Self::new();
        }

        let (text, _, had_errors) = UTF_8.decode(&bytes);
        if had_errors {
            diag.report(&SwapError::PairFileEncoding(path.to_string()));
        }

        Self::parse(&text, diag)
    }

    /// Lookup with fallback: the mapped replacement when present, the word
    /// itself otherwise.
    pub fn resolve<'a>(&'a self, word: &'a str) -> &'a str {
        self.entries.get(word).map(String::as_str).unwrap_or(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_pairs() {
        let mut diag = Vec::new();
        let pairs = PairMap::parse("hello hi\nworld earth\n", &mut diag);
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs.resolve("hello"), "hi");
        assert_eq!(pairs.resolve("world"), "earth");
        assert!(diag.is_empty());
    }

    #[test]
    fn test_parse_skips_and_reports_malformed_lines() {
        let mut diag = Vec::new();
        let pairs = PairMap::parse("lonely\n\ncat dog\n", &mut diag);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs.resolve("cat"), "dog");
        assert_eq!(diag.len(), 2);
        assert!(diag[0].contains("lonely"));
    }

    #[test]
    fn test_parse_duplicate_source_last_wins() {
        let mut diag = Vec::new();
        let pairs = PairMap::parse("cat dog\ncat ferret\n", &mut diag);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs.resolve("cat"), "ferret");
    }

    #[test]
    fn test_parse_extra_fields_ignored() {
        let mut diag = Vec::new();
        let pairs = PairMap::parse("cat dog mouse\n", &mut diag);
        assert_eq!(pairs.resolve("cat"), "dog");
        assert!(diag.is_empty());
    }

    #[test]
    fn test_parse_double_space_gives_empty_replacement() {
        // split on a single literal space: "cat  dog" has an empty second field
        let mut diag = Vec::new();
        let pairs = PairMap::parse("cat  dog\n", &mut diag);
        assert_eq!(pairs.resolve("cat"), "");
        assert!(diag.is_empty());
    }

    #[test]
    fn test_parse_tab_separator_is_malformed() {
        let mut diag = Vec::new();
        let pairs = PairMap::parse("cat\tdog\n", &mut diag);
        assert!(pairs.is_empty());
        assert_eq!(diag.len(), 1);
    }

    #[test]
    fn test_resolve_falls_back_to_word() {
        let pairs = PairMap::new();
        assert_eq!(pairs.resolve("anything"), "anything");
    }

    #[test]
    fn test_load_missing_file_reports_and_returns_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");
        let mut diag = Vec::new();
        let pairs = PairMap::load(path.to_str().unwrap(), &mut diag);
        assert!(pairs.is_empty());
        assert_eq!(diag.len(), 1);
        assert!(diag[0].contains("could not locate pair file"));
    }

    #[test]
    fn test_load_reads_pair_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pairs.txt");
        std::fs::write(&path, "hello hi\nworld earth\n").unwrap();
        let mut diag = Vec::new();
        let pairs = PairMap::load(path.to_str().unwrap(), &mut diag);
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs.resolve("world"), "earth");
        assert!(diag.is_empty());
    }

    #[test]
    fn test_load_reports_encoding_errors_but_keeps_pairs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pairs.txt");
        std::fs::write(&path, b"cat dog\n\xff\xfe broken\n").unwrap();
        let mut diag = Vec::new();
        let pairs = PairMap::load(path.to_str().unwrap(), &mut diag);
        assert_eq!(pairs.resolve("cat"), "dog");
        assert_eq!(diag.len(), 1);
        assert!(diag[0].contains("encoding"));
    }
}
