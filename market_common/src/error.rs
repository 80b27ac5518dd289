//! Error types shared by the feed and the chat front end.
//!
//! Generation itself never fails: unknown symbols and unmatched questions fall
//! back silently. `ChatError` covers the shell around it: terminal I/O, JSON
//! export, channel plumbing between the session and the refresh task, and
//! signal registration.
use std::io;

use thiserror::Error;

/// Unified error type shared by the workspace crates.
#[derive(Error, Debug)]
pub enum ChatError {
    /// I/O error originating from the terminal or the standard streams.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid configuration or input with a human-readable message.
    #[error("Format error: {0}")]
    Format(String),

    /// Failure while encoding a snapshot or transcript as JSON.
    #[error("JSON serialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// Crossbeam channel send failed (the other side hung up); carries a short context string.
    #[error("Channel send failed: {0}")]
    ChannelSend(String),

    /// Installing the Ctrl+C handler failed.
    #[error("Signal handler error: {0}")]
    Signal(String),

    /// A background task panicked before it could be joined.
    #[error("Background task panicked: {0}")]
    TaskPanicked(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts() {
        let err: ChatError = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        assert!(matches!(err, ChatError::Io(_)));
        assert_eq!(err.to_string(), "I/O error: closed");
    }

    #[test]
    fn test_channel_send_message() {
        let err = ChatError::ChannelSend("refresh stop".to_string());
        assert_eq!(err.to_string(), "Channel send failed: refresh stop");
    }
}
