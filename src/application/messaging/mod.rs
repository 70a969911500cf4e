//! Message handling - Parsing and routing of chat directives

pub mod parser;
pub mod replies;
pub mod router;

pub use parser::{MessageParser, ParsedCommand};
pub use router::{BuiltinVerb, CommandRouter, RouteResult};
