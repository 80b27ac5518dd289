use std::io::BufRead;

use crossbeam_channel::Sender;
use log::debug;
use market_common::{ChatError, Result};

/// Line reader that forwards user input to the main loop.
///
/// Reading blocks, so it runs on its own thread; the main loop multiplexes the
/// forwarded lines with snapshots and shutdown signals.
pub struct InputReader;

impl InputReader {
    /// Forwards every line of `reader` to `tx` until end of input.
    ///
    /// Returns once the input is exhausted; dropping `tx` then tells the main
    /// loop that no more input will come.
    pub fn read_loop_with_channel<R: BufRead>(reader: R, tx: Sender<String>) -> Result<()> {
        for line in reader.lines() {
            let line = line?;
            debug!("Input line: {:?}", line);
            tx.send(line)
                .map_err(|e| ChatError::ChannelSend(format!("input line: {e}")))?;
        }
        debug!("Input closed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;
    use std::io::Cursor;

    #[test]
    fn test_forwards_lines_then_disconnects() {
        let (tx, rx) = unbounded();
        InputReader::read_loop_with_channel(Cursor::new("gold\n/quit\n"), tx).unwrap();
        assert_eq!(rx.recv().unwrap(), "gold");
        assert_eq!(rx.recv().unwrap(), "/quit");
        assert!(rx.recv().is_err());
    }

    #[test]
    fn test_closed_receiver_is_an_error() {
        let (tx, rx) = unbounded::<String>();
        drop(rx);
        let result = InputReader::read_loop_with_channel(Cursor::new("gold\n"), tx);
        assert!(matches!(result, Err(ChatError::ChannelSend(_))));
    }
}
