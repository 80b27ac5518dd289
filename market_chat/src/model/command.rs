//! Parsing of input lines.
//!
//! A line starting with `/` is a slash command (`/refresh`, `/quotes`, ...);
//! anything else that is not blank is a question for the responder.
use std::str::FromStr;

use strum::{Display, EnumIter, EnumString};

/// Session controls reachable with a leading `/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SlashCommand {
    /// Regenerate the watch list now.
    Refresh,
    /// Show the current snapshot again.
    Quotes,
    /// Print the current snapshot as JSON.
    Json,
    /// Print the conversation so far.
    History,
    /// List the commands.
    Help,
    /// End the session.
    Quit,
}

impl SlashCommand {
    /// One-line description for `/help`.
    pub fn description(self) -> &'static str {
        match self {
            SlashCommand::Refresh => "refresh the watch list now",
            SlashCommand::Quotes => "show the latest quotes",
            SlashCommand::Json => "print the latest quotes as JSON",
            SlashCommand::History => "show the conversation so far",
            SlashCommand::Help => "list commands",
            SlashCommand::Quit => "leave the chat",
        }
    }
}

/// What a single input line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
    /// A recognised slash command.
    Slash(SlashCommand),
    /// Free text for the responder.
    Ask(String),
    /// A slash command that does not exist.
    Unknown(String),
    /// Blank line.
    Empty,
}

impl ChatCommand {
    /// Classifies a raw input line.
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return ChatCommand::Empty;
        }
        match trimmed.strip_prefix('/') {
            Some(name) => match SlashCommand::from_str(name.trim()) {
                Ok(command) => ChatCommand::Slash(command),
                Err(_) => ChatCommand::Unknown(trimmed.to_string()),
            },
            None => ChatCommand::Ask(trimmed.to_string()),
        }
    }
}
