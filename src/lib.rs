//! dotcmd-bot - A chat command dispatcher with user-defined commands
//!
//! Messages starting with the command prefix are routed to a fixed set of
//! built-in verbs (`ping`, `addlist`, `commands`, `dellist`, `stalk`, `help`)
//! or to custom commands saved in a JSON file.

pub mod domain;
pub mod application;
pub mod infrastructure;
