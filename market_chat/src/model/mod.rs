//! Types local to the chat front end.
//!
//! - `command` — slash commands and free-text questions typed by the user.
pub mod command;
