//! Session adapters - Concrete connections the bot can run on

pub mod console;

pub use console::{ConsoleConnector, ConsoleSession};
