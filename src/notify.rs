use std::fmt;
use tokio::sync::mpsc;
use tracing::{error, info};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Level {
    Success,
    Info,
    Error,
}

/// Transient user-facing message, the toast of the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: Level,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: Level::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: Level::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match self.level {
            Level::Success => "✓",
            Level::Info => "i",
            Level::Error => "✗",
        };
        write!(f, "{} {}", marker, self.message)
    }
}

/// Sink for notifications raised by dashboard workflows
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Writes notifications to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: Notification) {
        match notification.level {
            Level::Error => error!("{}", notification),
            _ => info!("{}", notification),
        }
    }
}

/// Forwards notifications to a channel, e.g. for a UI task to display
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    sender: mpsc::UnboundedSender<Notification>,
}

impl ChannelNotifier {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, notification: Notification) {
        // Receiver gone means nobody is displaying anything anymore
        if self.sender.send(notification).is_err() {
            tracing::debug!("Notification dropped, receiver closed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_channel_notifier() {
        let (notifier, mut receiver) = ChannelNotifier::new();
        notifier.notify(Notification::success("Saved"));
        notifier.notify(Notification::error("Failed"));

        assert_eq!(receiver.recv().await, Some(Notification::success("Saved")));
        let next = receiver.recv().await.unwrap();
        assert_eq!(next.level, Level::Error);
        assert_eq!(next.to_string(), "✗ Failed");
    }

    #[test]
    fn test_closed_channel_is_ignored() {
        let (notifier, receiver) = ChannelNotifier::new();
        drop(receiver);
        notifier.notify(Notification::info("nobody listening"));
        LogNotifier.notify(Notification::info("logged"));
    }
}
