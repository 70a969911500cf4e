//! Domain entities - Core business objects with no external dependencies

pub mod message;
pub mod command;
pub mod profile;
pub mod session;

pub use message::{InboundMessage, MessageBody};
pub use command::CommandBook;
pub use profile::LookupProfile;
pub use session::{ConnectionState, ConnectionUpdate, Credentials, DisconnectError, SessionEvent};
