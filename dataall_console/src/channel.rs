//! Error event channel shared by console screens.

use tokio::sync::mpsc;

/// Creates a connected dispatch handle and consumer feed.
pub fn error_channel() -> (ErrorChannel, ErrorFeed) {
    let (tx, rx) = mpsc::unbounded_channel();
    (ErrorChannel { tx }, ErrorFeed { rx })
}

/// Dispatch side of the error feed. Cloned into every screen at
/// construction; there is no ambient global.
#[derive(Clone)]
pub struct ErrorChannel {
    tx: mpsc::UnboundedSender<String>,
}

impl ErrorChannel {
    /// Pushes a user-facing message. Dispatch never fails: with the consumer
    /// gone the message is dropped.
    pub fn dispatch(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!("error dispatched: {}", message);
        let _ = self.tx.send(message);
    }
}

/// Consumer side, held by whatever renders the error banner.
pub struct ErrorFeed {
    rx: mpsc::UnboundedReceiver<String>,
}

impl ErrorFeed {
    /// Next queued message, if any.
    pub fn try_next(&mut self) -> Option<String> {
        self.rx.try_recv().ok()
    }

    /// Drains everything currently queued.
    pub fn drain(&mut self) -> Vec<String> {
        let mut out = Vec::new();
        while let Ok(message) = self.rx.try_recv() {
            out.push(message);
        }
        out
    }

    /// Waits for the next message. Returns `None` once every dispatch handle
    /// is dropped.
    pub async fn recv(&mut self) -> Option<String> {
        self.rx.recv().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn dispatch_and_drain_preserve_order() {
        let (channel, mut feed) = error_channel();
        channel.dispatch("first");
        channel.clone().dispatch("second");
        assert_eq!(feed.drain(), vec!["first".to_string(), "second".to_string()]);
        assert_eq!(feed.try_next(), None);
    }

    #[tokio::test]
    async fn dispatch_without_consumer_is_silent() {
        let (channel, feed) = error_channel();
        drop(feed);
        channel.dispatch("nobody listening");
    }
}
