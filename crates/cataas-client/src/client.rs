//! HTTP client for the Cataas API.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, instrument};
use url::Url;

use crate::error::ClientError;
use crate::types::RemoteCatMetadata;
use crate::url_builder::{build_url, CAT_PATH};

/// Public Cataas endpoint.
pub const DEFAULT_BASE_URL: &str = "https://cataas.com";
/// Per-request timeout; exceeding it surfaces as [`ClientError::Transport`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Operations the aggregator needs from the image service. Implemented by [`CataasClient`];
/// tests substitute their own implementation.
#[async_trait]
pub trait CatApi: Send + Sync {
    /// Fetches metadata of one random cat (one network call).
    async fn get_random_cat(&self) -> Result<RemoteCatMetadata, ClientError>;

    /// Builds an image URL against the configured base; no network call.
    fn build_url(
        &self,
        path: &str,
        caption: Option<&str>,
        caption_size: Option<u32>,
        width: Option<u32>,
        height: Option<u32>,
    ) -> Url;
}

/// Cataas client. Read-only after construction; clone or share behind `Arc`.
#[derive(Debug, Clone)]
pub struct CataasClient {
    client: Client,
    base_url: Url,
}

impl CataasClient {
    /// Creates a client for `base_url` with [`DEFAULT_TIMEOUT`].
    pub fn new(base_url: Url) -> Result<Self, ClientError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Creates a client for `base_url` with a custom per-request timeout.
    pub fn with_timeout(base_url: Url, timeout: Duration) -> Result<Self, ClientError> {
        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(ClientError::InvalidBaseUrl(base_url.to_string()));
        }
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    /// Client for the public service at [`DEFAULT_BASE_URL`].
    pub fn public() -> Result<Self, ClientError> {
        let base_url = Url::parse(DEFAULT_BASE_URL)
            .map_err(|e| ClientError::InvalidBaseUrl(format!("{}: {}", DEFAULT_BASE_URL, e)))?;
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn random_cat_url(&self) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(CAT_PATH);
        url.set_fragment(None);
        url.set_query(None);
        url.query_pairs_mut().append_pair("json", "true");
        url
    }
}

#[async_trait]
impl CatApi for CataasClient {
    #[instrument(skip(self))]
    async fn get_random_cat(&self) -> Result<RemoteCatMetadata, ClientError> {
        let url = self.random_cat_url();
        debug!(url = %url, "Cataas random cat request");

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status { status, body });
        }

        let body = response.text().await?;
        let cat: RemoteCatMetadata = serde_json::from_str(&body)?;

        info!(
            cat_id = %cat.id,
            mime_type = %cat.mime_type,
            tags = cat.tags.len(),
            "Cataas random cat received"
        );
        Ok(cat)
    }

    fn build_url(
        &self,
        path: &str,
        caption: Option<&str>,
        caption_size: Option<u32>,
        width: Option<u32>,
        height: Option<u32>,
    ) -> Url {
        build_url(&self.base_url, path, caption, caption_size, width, height)
    }
}
