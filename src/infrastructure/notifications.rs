// Notification channel - observable failure events for UI layers
use tokio::sync::broadcast;

const CHANNEL_CAPACITY: usize = 64;

pub const REQUEST_FAILED: &str = "request failed";

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub detail: String,
}

/// Broadcast channel the transport layer publishes failures on. UI code
/// subscribes and renders them however it likes; the transport itself
/// carries no presentation logic. Publishing never blocks and ignores
/// absent or lagging subscribers.
#[derive(Debug, Clone)]
pub struct NotificationChannel {
    sender: broadcast::Sender<Notification>,
}

impl NotificationChannel {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.sender.subscribe()
    }

    pub fn publish(&self, message: &str, detail: impl Into<String>) {
        let _ = self.sender.send(Notification {
            message: message.to_string(),
            detail: detail.into(),
        });
    }
}

impl Default for NotificationChannel {
    fn default() -> Self {
        Self::new()
    }
}
