use crate::errors::CoreError;
use crate::models::address::Address;
use crate::models::mint::MintEvent;
use crate::models::settings::Settings;

use super::indexer::IndexerMintSource;
use super::traits::MintEventSource;

/// Ordered set of mint event sources.
///
/// Sources are tried in registration order; the first one that succeeds
/// wins, so a local mirror can sit in front of the remote indexer.
pub struct SourceRegistry {
    sources: Vec<Box<dyn MintEventSource>>,
}

impl SourceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Create a registry from settings: the indexer, if configured.
    pub fn new_with_defaults(settings: &Settings) -> Self {
        let mut registry = Self::new();

        if let Some(url) = &settings.indexer_url {
            registry.register(Box::new(IndexerMintSource::with_timeout(
                url.clone(),
                std::time::Duration::from_secs(settings.request_timeout_secs),
            )));
        }

        registry
    }

    /// Register a source after those already present.
    pub fn register(&mut self, source: Box<dyn MintEventSource>) {
        self.sources.push(source);
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Names of all sources, in priority order.
    pub fn source_names(&self) -> Vec<String> {
        self.sources.iter().map(|s| s.name().to_string()).collect()
    }

    /// Fetch events from the first source that answers.
    pub async fn get_mint_events(&self, address: &Address) -> Result<Vec<MintEvent>, CoreError> {
        if self.sources.is_empty() {
            return Err(CoreError::NoSource);
        }

        let mut last_error = None;
        for source in &self.sources {
            match source.get_mint_events(address).await {
                Ok(events) => return Ok(events),
                Err(e) => {
                    tracing::warn!(
                        source = source.name(),
                        error = %e,
                        "Mint source failed, trying next"
                    );
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or(CoreError::NoSource))
    }
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::new()
    }
}
