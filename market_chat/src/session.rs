//! Conversation state for one chat session.
//!
//! `ChatSession` is owned by the main loop and handed to the renderer by
//! reference. It changes only through two entry points: appending a message
//! to the append-only transcript, and replacing the snapshot as a whole.

use log::debug;
use market_common::config::GREETING;
use market_common::{ChatMessage, RandomSource};
use market_feed::{Responder, Snapshot};

/// In-memory session state, discarded when the session ends.
#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    snapshot: Option<Snapshot>,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    /// New session opened by the assistant's greeting.
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::assistant(GREETING)],
            snapshot: None,
        }
    }

    /// Appends a message and returns it.
    pub fn append(&mut self, message: ChatMessage) -> &ChatMessage {
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }

    /// Swaps in a new snapshot.
    pub fn replace_snapshot(&mut self, snapshot: Snapshot) {
        debug!("Snapshot replaced ({} quotes)", snapshot.quotes.len());
        self.snapshot = Some(snapshot);
    }

    /// Records `question`, answers it, records the answer and returns it.
    pub fn ask<R: RandomSource>(
        &mut self,
        responder: &mut Responder<R>,
        question: &str,
    ) -> &ChatMessage {
        self.append(ChatMessage::user(question));
        let answer = responder.respond(question);
        self.append(ChatMessage::assistant(answer))
    }

    /// Transcript in order of arrival.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Latest snapshot, if any refresh has completed.
    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }
}
