//! Domain layer - Core business logic with no external dependencies
//! 
//! This layer contains:
//! - Entities: Core business objects (InboundMessage, CommandBook, LookupProfile, SessionEvent)
//! - Traits: Abstractions for infrastructure (CommandStore, LookupAdapter, Session)

pub mod entities;
pub mod traits;
