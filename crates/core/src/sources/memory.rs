use async_trait::async_trait;
use std::collections::HashMap;

use crate::errors::CoreError;
use crate::models::address::Address;
use crate::models::mint::MintEvent;
use super::traits::MintEventSource;

/// Mint events held in memory, keyed by address.
///
/// Used for embedding precomputed data and in tests. Unknown addresses
/// have no events.
#[derive(Debug, Default)]
pub struct InMemoryMintSource {
    events: HashMap<Address, Vec<MintEvent>>,
}

impl InMemoryMintSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append events for `address`.
    pub fn insert(&mut self, address: Address, events: impl IntoIterator<Item = MintEvent>) {
        self.events.entry(address).or_default().extend(events);
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_events(
        mut self,
        address: Address,
        events: impl IntoIterator<Item = MintEvent>,
    ) -> Self {
        self.insert(address, events);
        self
    }
}

#[async_trait]
impl MintEventSource for InMemoryMintSource {
    fn name(&self) -> &str {
        "InMemory"
    }

    async fn get_mint_events(&self, address: &Address) -> Result<Vec<MintEvent>, CoreError> {
        Ok(self.events.get(address).cloned().unwrap_or_default())
    }
}
