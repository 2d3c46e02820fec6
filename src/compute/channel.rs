use tokio::sync::mpsc;

/// Creates a connected publisher/subscriber pair.
///
/// The channel is unbounded; a subscriber drains whatever accumulated since its last read.
pub fn channel<T>() -> (Publisher<T>, Subscriber<T>) {
    let (sender, receiver) = mpsc::unbounded_channel();
    (Publisher { sender }, Subscriber { receiver })
}

/// Sending end of a channel.
#[derive(Debug)]
pub struct Publisher<T> {
    sender: mpsc::UnboundedSender<T>,
}

impl<T> Clone for Publisher<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T> Publisher<T> {
    /// Sends `msg`. Returns false if the subscriber is gone.
    pub fn send(&self, msg: T) -> bool {
        self.sender.send(msg).is_ok()
    }
}

/// Receiving end of a channel.
#[derive(Debug)]
pub struct Subscriber<T> {
    receiver: mpsc::UnboundedReceiver<T>,
}

impl<T> Subscriber<T> {
    /// Waits for the next message. Returns `None` once all publishers are dropped.
    pub async fn recv(&mut self) -> Option<T> {
        self.receiver.recv().await
    }

    /// Next message, if one is pending.
    pub fn try_recv(&mut self) -> Option<T> {
        self.receiver.try_recv().ok()
    }

    /// All pending messages, oldest first.
    pub fn drain(&mut self) -> Vec<T> {
        let mut msgs = vec![];
        while let Ok(msg) = self.receiver.try_recv() {
            msgs.push(msg);
        }
        msgs
    }
}
