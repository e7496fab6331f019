//! Outbound chat messages.
//!
//! The command dispatcher only knows the [`MessageSink`] trait. The
//! production implementation, [`OutboundSink`], queues raw IRC lines for the
//! connection writer task so sending never blocks message processing.

use log::{debug, error};
use mockall::automock;
use tokio::sync::mpsc::UnboundedSender;

/// Fire-and-forget delivery of chat messages.
///
/// This trait abstracts the chat connection for easier testing with mocks.
#[automock]
pub trait MessageSink {
    /// Sends a message to a channel. Delivery is not guaranteed.
    fn send(&self, channel: &str, text: &str);
}

/// Sends chat messages through the Twitch connection writer.
#[derive(Debug, Clone)]
pub struct OutboundSink {
    /// Raw IRC lines waiting to be written, without line terminator
    lines: UnboundedSender<String>,
}

impl OutboundSink {
    /// Create a new [OutboundSink] writing into the given queue.
    pub fn new(lines: UnboundedSender<String>) -> Self {
        OutboundSink { lines }
    }

    /// Queues a raw IRC line.
    ///
    /// Line breaks are replaced by spaces so a message can never inject an
    /// extra IRC command.
    pub fn send_raw(&self, line: &str) {
        let line = line.replace(['\r', '\n'], " ");

        if self.lines.send(line).is_err() {
            error!("unable to queue outbound line, the connection writer is closed");
        }
    }
}

impl MessageSink for OutboundSink {
    fn send(&self, channel: &str, text: &str) {
        debug!("sending to #{}: {}", channel, text);
        self.send_raw(&format!("PRIVMSG #{} :{}", channel, text));
    }
}
