// src/scanner.rs
use std::io::Write;

use log::debug;

use crate::config::Settings;
use crate::error::ScanError;
use crate::fetcher::DocumentSource;

/// Runs one fetch-and-filter pass over the configured document.
pub struct Scanner<S: DocumentSource> {
    source: S,
}

impl<S: DocumentSource> Scanner<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Fetches the document at `settings.url` and writes every line matched
    /// by `settings.filter` to `out`, newline-terminated, in document order.
    /// Returns the number of lines written. A document with no matching
    /// lines is a successful run with empty output.
    pub fn run(&self, settings: &Settings, out: &mut dyn Write) -> Result<usize, ScanError> {
        let document = self.source.fetch_document(&settings.url)?;
        debug!("fetched {} bytes from {}", document.len(), settings.url);

        let matches = settings.filter.filter_lines(&document);
        for line in &matches {
            writeln!(out, "{}", line)?;
        }
        Ok(matches.len())
    }
}
