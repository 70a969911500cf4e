//! Application layer - Use cases and business logic
//! 
//! This layer contains:
//! - Services: Pending replies, retry policy, session runner
//! - Errors: Domain-specific errors
//! - Messaging: Message parsing and command routing

pub mod errors;
pub mod services;
pub mod messaging;
