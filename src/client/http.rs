//! HTTP catalog backend
//!
//! Fetches the raw index catalog over the search system's REST API. The
//! core performs exactly one such call per extractor lifetime, so a
//! blocking client is sufficient.

use anyhow::Context;

use super::{CatalogClient, ClientError, IndexCatalog};

/// Catalog client backed by the search system's HTTP API
pub struct HttpCatalogClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpCatalogClient {
    /// Create a client for the given base URL (e.g. `http://localhost:9200`)
    pub fn new(base_url: impl Into<String>) -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .build()
            .context("Failed to build HTTP client for catalog access")?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { base_url, client })
    }
}

impl CatalogClient for HttpCatalogClient {
    fn indices(&self) -> Result<IndexCatalog, ClientError> {
        let url = format!("{}/*", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| ClientError::Network(e.to_string()))?;

        response
            .json::<IndexCatalog>()
            .map_err(|e| ClientError::MalformedResponse(e.to_string()))
    }
}
