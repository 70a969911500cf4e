//! Lookup adapters - Game account profiles for the `stalk` verb

pub mod mock;
pub mod network;

pub use mock::MockLookup;
pub use network::NetworkLookup;
