pub mod registry;
pub mod traits;

// Source implementations
pub mod indexer;
pub mod memory;
