use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::errors::CoreError;
use crate::models::address::Address;
use crate::models::mint::MintEvent;
use super::traits::MintEventSource;

const SOURCE_NAME: &str = "Indexer";

/// Default request timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Reads mint events from the indexer's HTTP API.
///
/// - **Endpoint**: `GET {base_url}/como/{address}/mints`
/// - **Response**: JSON array of `{"artistId", "mintedAt", "amount"}`
/// - Non-2xx responses become [`CoreError::Api`].
pub struct IndexerMintSource {
    client: Client,
    base_url: String,
}

impl IndexerMintSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL listing the mints of `address`.
    pub fn mints_url(&self, address: &Address) -> String {
        format!("{}/como/{}/mints", self.base_url, address)
    }
}

#[async_trait]
impl MintEventSource for IndexerMintSource {
    fn name(&self) -> &str {
        SOURCE_NAME
    }

    async fn get_mint_events(&self, address: &Address) -> Result<Vec<MintEvent>, CoreError> {
        let url = self.mints_url(address);
        tracing::debug!(%address, "Fetching mint events from indexer");

        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(CoreError::Api {
                source_name: SOURCE_NAME.into(),
                message: format!("HTTP {status} while listing mints for {address}"),
            });
        }

        let body = resp.text().await?;
        let events: Vec<MintEvent> = serde_json::from_str(&body).map_err(|e| CoreError::Api {
            source_name: SOURCE_NAME.into(),
            message: format!("Failed to parse mints for {address}: {e}"),
        })?;

        tracing::debug!(%address, count = events.len(), "Indexer returned mint events");
        Ok(events)
    }
}
