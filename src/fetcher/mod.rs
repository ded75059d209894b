// src/fetcher/mod.rs
pub mod http;

pub use http::HttpDocumentSource;

use crate::error::ScanError;

/// Source of a plaintext document, keyed by URL. Implementations other than
/// the HTTP one exist only in tests, where an in-memory body stands in for
/// the network.
pub trait DocumentSource {
    fn fetch_document(&self, url: &str) -> Result<String, ScanError>;
}
