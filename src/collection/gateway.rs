// SPDX-License-Identifier: MPL-2.0
//! Content-address rewriting and the HTTP side of metadata resolution.

use super::{MetadataSource, TokenMetadata};
use crate::config::defaults;
use crate::error::{Error, Result};
use futures_util::future::BoxFuture;

const USER_AGENT: &str = concat!("NftLens/", env!("CARGO_PKG_VERSION"));

/// Rewrites an `ipfs://` locator to `gateway_prefix`, preserving the suffix
/// byte-for-byte. Locators with any other scheme pass through unchanged.
pub fn to_gateway_url(uri: &str, gateway_prefix: &str) -> String {
    match uri.strip_prefix(defaults::IPFS_SCHEME) {
        Some(suffix) => format!("{gateway_prefix}{suffix}"),
        None => uri.to_string(),
    }
}

/// Gateway client fetching metadata documents and card images.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: reqwest::Client,
}

impl HttpGateway {
    /// Builds the client used for all gateway traffic.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Gateway`] when the HTTP client cannot be
    /// constructed.
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::Gateway(e.to_string()))?;
        Ok(Self { client })
    }

    /// Retrieves and parses the metadata document at `url`.
    pub async fn fetch_metadata(&self, url: &str) -> Result<TokenMetadata> {
        let bytes = self.get_bytes(url).await?;
        serde_json::from_slice(&bytes).map_err(|e| Error::Metadata(e.to_string()))
    }

    /// Retrieves raw image bytes for one gallery card.
    ///
    /// Failures here are per-card and never abort the batch; the caller
    /// logs them and keeps a placeholder on the card.
    pub async fn fetch_image(&self, url: &str) -> Result<Vec<u8>> {
        self.get_bytes(url).await
    }

    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Gateway(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::Gateway(format!(
                "HTTP status: {} for {url}",
                response.status()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::Gateway(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}

impl MetadataSource for HttpGateway {
    fn fetch(&self, url: &str) -> BoxFuture<'_, Result<TokenMetadata>> {
        let url = url.to_string();
        Box::pin(async move { self.fetch_metadata(&url).await })
    }
}
