//! Plain-text rendering of the transcript and the watch list.
use chrono::Local;
use market_common::{ChatMessage, Role};
use market_feed::Snapshot;
use strum::IntoEnumIterator;

use crate::model::command::SlashCommand;

/// Watch-list table with one line per quote and the capture time.
pub fn render_snapshot(snapshot: &Snapshot) -> String {
    let mut out = String::from("Market Overview\n");
    for quote in &snapshot.quotes {
        let arrow = if quote.is_up() { '▲' } else { '▼' };
        out.push_str(&format!(
            "  {:<10} {:>12.2} {} {:>+10.2} ({:+.2}%)\n",
            quote.label(),
            quote.price,
            arrow,
            quote.change,
            quote.change_percent
        ));
    }
    out.push_str(&format!(
        "Last updated: {}",
        snapshot.updated_at.with_timezone(&Local).format("%H:%M:%S")
    ));
    out
}

/// A message prefixed by its author; continuation lines are indented.
pub fn render_message(message: &ChatMessage) -> String {
    let prefix = match message.role {
        Role::User => "You",
        Role::Assistant => "Assistant",
    };
    let indent = " ".repeat(prefix.len() + 2);
    let mut lines = message.content.lines();
    let mut out = format!("{prefix}: {}", lines.next().unwrap_or_default());
    for line in lines {
        out.push('\n');
        out.push_str(&indent);
        out.push_str(line);
    }
    out
}

/// Command overview for `/help`.
pub fn render_help() -> String {
    let mut out = String::from("Ask about a market in plain words, or use a command:");
    for command in SlashCommand::iter() {
        out.push_str(&format!("\n  /{:<8} {}", command.to_string(), command.description()));
    }
    out
}
