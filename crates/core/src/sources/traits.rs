use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::address::Address;
use crate::models::mint::MintEvent;

/// Anything that can list the COMO-granting mint events of an address.
///
/// The calendar itself never performs I/O; the facade fetches events
/// through one of these and hands them to the builder.
#[async_trait]
pub trait MintEventSource: Send + Sync {
    /// Human-readable name of this source (for logs/errors).
    fn name(&self) -> &str;

    /// Every mint event of `address`, in any order.
    async fn get_mint_events(&self, address: &Address) -> Result<Vec<MintEvent>, CoreError>;
}
