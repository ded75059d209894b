// src/fetcher/http.rs
use reqwest::blocking::Client;
use url::Url;

use super::DocumentSource;
use crate::error::ScanError;

/// Fetches documents with a blocking HTTP client. One GET per document, no
/// retries, no timeout beyond the client defaults.
#[derive(Debug, Clone)]
pub struct HttpDocumentSource {
    client: Client,
}

impl HttpDocumentSource {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for HttpDocumentSource {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentSource for HttpDocumentSource {
    fn fetch_document(&self, url: &str) -> Result<String, ScanError> {
        let parsed = Url::parse(url)?;

        let response = self.client.get(parsed).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScanError::Status {
                status,
                url: url.to_string(),
            });
        }

        // Strict decode: a body that is not valid UTF-8 is an error, not a
        // lossy replacement.
        let body = response.bytes()?;
        let text = String::from_utf8(body.to_vec())?;
        Ok(text)
    }
}
