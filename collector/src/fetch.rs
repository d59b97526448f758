use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use reqwest::StatusCode;

use crate::CollectError;

/// Where listing pages come from. Lets the pagination loop run against
/// canned pages in tests.
pub trait PageSource {
    /// Returns the full HTML of listing page `page`, found at `url`.
    fn fetch(&self, page: u32, url: &str) -> Result<String, CollectError>;
}

/// Fetches listing pages over HTTP with a blocking client.
#[derive(Debug, Clone)]
pub struct HttpPageSource {
    client: Client,
}

impl HttpPageSource {
    pub fn new() -> Result<Self, CollectError> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(CollectError::Client)?;
        Ok(Self { client })
    }
}

impl PageSource for HttpPageSource {
    fn fetch(&self, page: u32, url: &str) -> Result<String, CollectError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|source| CollectError::Request { page, source })?;

        let status = response.status();
        if status != StatusCode::OK {
            // Dropping the response here closes the connection before we bail.
            return Err(CollectError::Status { page, status });
        }

        // `text` consumes the response, so its connection is released as
        // soon as this page has been read.
        let html = response
            .text()
            .map_err(|source| CollectError::Body { page, source })?;
        debug!("Fetched {} bytes for page {}", html.len(), page);
        Ok(html)
    }
}
