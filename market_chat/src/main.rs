//! Market Chat — an interactive terminal chat that shows mock quotes for a fixed
//! watch list and answers questions about them with generated statistics.
//!
//! Usage example (CLI):
//! ```bash
//! market_chat --refresh-secs 60 --seed 42
//! ```
//!
//! The binary wires together three building blocks:
//!
//! - `RefreshTask` — background thread regenerating the watch list on start, on
//!   every timer tick and on `/refresh`, delivering whole `Snapshot`s.
//! - `InputReader` — thread forwarding stdin lines to the main loop.
//! - `ChatSession` — transcript and latest snapshot, mutated only here.
//!
//! The main loop multiplexes input lines, snapshots and Ctrl+C with crossbeam's
//! `select!`. End of input, `/quit` or Ctrl+C stop the refresh task through its
//! handle and end the session. Logs go to stderr (`RUST_LOG` overrides the
//! default `info` level); the conversation goes to stdout.
#![warn(missing_docs)]
mod args;
mod input;
mod model;
mod render;
mod session;

use crate::args::Args;
use crate::input::InputReader;
use crate::model::command::{ChatCommand, SlashCommand};
use crate::render::{render_help, render_message, render_snapshot};
use crate::session::ChatSession;
use clap::Parser;
use crossbeam_channel::{bounded, select, unbounded};
use log::{error, info, warn};
use market_common::symbols::watch_list;
use market_common::{ChatError, RandomSource, Result};
use market_feed::{QuoteGenerator, RefreshHandle, RefreshTask, Responder};
use std::io::{self, Write};
use std::thread;

/// Whether the main loop keeps going after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Executes one input line against the session and writes the outcome to `out`.
fn dispatch<R: RandomSource, W: Write>(
    line: &str,
    session: &mut ChatSession,
    responder: &mut Responder<R>,
    refresh: &RefreshHandle,
    out: &mut W,
) -> Result<Flow> {
    match ChatCommand::parse(line) {
        ChatCommand::Empty => {}
        ChatCommand::Ask(question) => {
            let answer = session.ask(responder, &question);
            writeln!(out, "{}", render_message(answer))?;
        }
        ChatCommand::Unknown(command) => {
            writeln!(out, "Unknown command {command}. Type /help for the list.")?;
        }
        ChatCommand::Slash(SlashCommand::Refresh) => {
            if refresh.request() {
                writeln!(out, "Refreshing quotes...")?;
            } else {
                writeln!(out, "A refresh is already in progress.")?;
            }
        }
        ChatCommand::Slash(SlashCommand::Quotes) => match session.snapshot() {
            Some(snapshot) => writeln!(out, "{}", render_snapshot(snapshot))?,
            None => writeln!(out, "Quotes are still loading.")?,
        },
        ChatCommand::Slash(SlashCommand::Json) => match session.snapshot() {
            Some(snapshot) => writeln!(out, "{}", snapshot.to_json_pretty()?)?,
            None => writeln!(out, "Quotes are still loading.")?,
        },
        ChatCommand::Slash(SlashCommand::History) => {
            for message in session.messages() {
                writeln!(out, "{}", render_message(message))?;
            }
        }
        ChatCommand::Slash(SlashCommand::Help) => writeln!(out, "{}", render_help())?,
        ChatCommand::Slash(SlashCommand::Quit) => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

fn main() -> Result<(), ChatError> {
    init_logger();
    let args = Args::parse();
    let config = args.config()?;
    info!("Starting market chat: {:?}", config);

    let (shutdown_tx, shutdown_rx) = bounded::<()>(1);
    ctrlc::set_handler(move || {
        info!("Ctrl+C received. Shutting down chat...");
        let _ = shutdown_tx.try_send(());
    })
    .map_err(|e| ChatError::Signal(e.to_string()))?;

    let (input_tx, input_rx) = unbounded::<String>();
    thread::spawn(move || {
        if let Err(e) = InputReader::read_loop_with_channel(io::stdin().lock(), input_tx) {
            error!("Input loop failed: {:?}", e);
        }
    });

    let (feed_rng, chat_rng) = config.random_sources();
    let (refresh, snapshots) = RefreshTask::start(
        QuoteGenerator::new(feed_rng),
        watch_list(),
        config.refresh_interval,
    );
    let mut responder = Responder::new(chat_rng);
    let mut session = ChatSession::new();
    let mut out = io::stdout();

    for message in session.messages() {
        writeln!(out, "{}", render_message(message))?;
    }

    loop {
        select! {
            recv(shutdown_rx) -> _ => break,
            recv(snapshots) -> msg => match msg {
                Ok(snapshot) => {
                    session.replace_snapshot(snapshot);
                    if let Some(current) = session.snapshot() {
                        writeln!(out, "{}", render_snapshot(current))?;
                    }
                }
                Err(_) => {
                    warn!("Refresh task ended unexpectedly");
                    break;
                }
            },
            recv(input_rx) -> msg => match msg {
                Ok(line) => {
                    let flow = dispatch(&line, &mut session, &mut responder, &refresh, &mut out)?;
                    if flow == Flow::Quit {
                        break;
                    }
                }
                Err(_) => {
                    info!("Input closed");
                    break;
                }
            },
        }
        out.flush()?;
    }

    refresh.cancel()?;
    info!("Market chat stopped after {} messages", session.messages().len());
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use market_common::config::FALLBACK_MESSAGE;
    use market_common::random::StdRandom;
    use market_feed::Snapshot;
    use std::time::Duration;

    struct Harness {
        session: ChatSession,
        responder: Responder<StdRandom>,
        refresh: RefreshHandle,
        snapshots: crossbeam_channel::Receiver<Snapshot>,
    }

    impl Harness {
        fn new() -> Self {
            let (refresh, snapshots) = RefreshTask::start(
                QuoteGenerator::new(StdRandom::seeded(1)),
                watch_list(),
                None,
            );
            let mut session = ChatSession::new();
            let first = snapshots.recv_timeout(Duration::from_secs(5)).unwrap();
            session.replace_snapshot(first);
            Harness {
                session,
                responder: Responder::new(StdRandom::seeded(2)),
                refresh,
                snapshots,
            }
        }

        fn run(&mut self, line: &str) -> (Flow, String) {
            let mut out = Vec::new();
            let flow = dispatch(
                line,
                &mut self.session,
                &mut self.responder,
                &self.refresh,
                &mut out,
            )
            .unwrap();
            (flow, String::from_utf8(out).unwrap())
        }
    }

    #[test]
    fn test_question_is_answered_and_recorded() {
        let mut harness = Harness::new();
        let (flow, output) = harness.run("how is the NASDAQ?");
        assert_eq!(flow, Flow::Continue);
        assert!(output.starts_with("Assistant: NASDAQ (^IXIC)"));
        assert_eq!(harness.session.messages().len(), 3);
    }

    #[test]
    fn test_unmatched_question_gets_fallback() {
        let mut harness = Harness::new();
        let (_, output) = harness.run("banana");
        assert_eq!(output, format!("Assistant: {FALLBACK_MESSAGE}\n"));
    }

    #[test]
    fn test_refresh_command_delivers_snapshot() {
        let mut harness = Harness::new();
        let (_, output) = harness.run("/refresh");
        assert_eq!(output, "Refreshing quotes...\n");
        let snapshot = harness
            .snapshots
            .recv_timeout(Duration::from_secs(5))
            .unwrap();
        assert_eq!(snapshot.quotes.len(), 5);
    }

    #[test]
    fn test_quotes_and_json_commands() {
        let mut harness = Harness::new();
        let (_, quotes) = harness.run("/quotes");
        assert!(quotes.starts_with("Market Overview"));
        assert!(quotes.contains("Bitcoin"));

        let (_, json) = harness.run("/json");
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["quotes"][0]["symbol"], "^GSPC");
    }

    #[test]
    fn test_history_help_unknown_and_quit() {
        let mut harness = Harness::new();
        harness.run("gold");
        let (_, history) = harness.run("/history");
        assert!(history.starts_with("Assistant: Hello!"));
        assert!(history.contains("You: gold"));

        let (_, help) = harness.run("/help");
        assert!(help.contains("/refresh"));

        let (_, unknown) = harness.run("/sell");
        assert!(unknown.contains("Unknown command /sell"));

        let (flow, output) = harness.run("/quit");
        assert_eq!(flow, Flow::Quit);
        assert!(output.is_empty());
        assert_eq!(harness.session.messages().len(), 3);
    }

    #[test]
    fn test_blank_line_is_ignored() {
        let mut harness = Harness::new();
        let (flow, output) = harness.run("   ");
        assert_eq!(flow, Flow::Continue);
        assert!(output.is_empty());
        assert_eq!(harness.session.messages().len(), 1);
    }
}
