//! Infrastructure layer - External concerns
//! 
//! This layer contains:
//! - Config: Configuration loading
//! - Storage: Command file and session credentials
//! - Lookup: Account lookup strategies (network, mock)
//! - Adapters: Session implementations (console)

pub mod config;
pub mod storage;
pub mod lookup;
pub mod adapters;
