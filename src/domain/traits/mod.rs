//! Domain traits - Abstractions for infrastructure implementations

pub mod lookup;
pub mod session;
pub mod store;

pub use lookup::LookupAdapter;
pub use session::{Session, SessionConnector};
pub use store::CommandStore;
