//! Notification sinks.

use tokio::sync::broadcast;
use tracing::{debug, error, info, warn};

use crate::models::{Notification, Severity};

/// Fire-and-forget sink for user-facing notifications.
///
/// Delivery failures are swallowed: a notification that cannot be shown must
/// never fail the operation that raised it.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);

    /// Raise an error toast.
    fn error(&self, message: &str) {
        self.notify(Notification::error(message));
    }
}

fn log(notification: &Notification) {
    match notification.severity {
        Severity::Info => info!(message = %notification.message, "Notification"),
        Severity::Warning => warn!(message = %notification.message, "Notification"),
        Severity::Error => error!(message = %notification.message, "Notification"),
    }
}

/// Logs notifications instead of showing them.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        log(&notification);
    }
}

/// Publishes notifications to every UI subscriber.
#[derive(Debug, Clone)]
pub struct BroadcastNotifier {
    sender: broadcast::Sender<Notification>,
}

impl BroadcastNotifier {
    /// `capacity` bounds how many notifications a slow subscriber may lag behind.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for BroadcastNotifier {
    fn default() -> Self {
        Self::new(64)
    }
}

impl Notifier for BroadcastNotifier {
    fn notify(&self, notification: Notification) {
        if self.sender.send(notification).is_err() {
            debug!("Notification dropped, no subscribers");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broadcast_reaches_every_subscriber() {
        let notifier = BroadcastNotifier::new(8);
        let mut first = notifier.subscribe();
        let mut second = notifier.subscribe();

        notifier.error("Failed to delete task");

        assert_eq!(first.try_recv().unwrap().message, "Failed to delete task");
        let received = second.try_recv().unwrap();
        assert_eq!(received.severity, Severity::Error);
        assert_eq!(notifier.subscriber_count(), 2);
    }

    #[test]
    fn test_broadcast_without_subscribers_does_not_fail() {
        let notifier = BroadcastNotifier::default();
        notifier.error("nobody listening");
        assert_eq!(notifier.subscriber_count(), 0);
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let notifier = BroadcastNotifier::new(0);
        let mut rx = notifier.subscribe();
        notifier.notify(Notification::new(Severity::Info, "saved"));
        assert_eq!(rx.try_recv().unwrap().message, "saved");
    }

    #[test]
    fn test_tracing_notifier_accepts_all_severities() {
        let notifier = TracingNotifier;
        notifier.notify(Notification::new(Severity::Info, "info"));
        notifier.notify(Notification::new(Severity::Warning, "warning"));
        notifier.error("error");
    }

    #[test]
    fn test_notifier_is_object_safe() {
        let sinks: Vec<Box<dyn Notifier>> = vec![
            Box::new(TracingNotifier),
            Box::new(BroadcastNotifier::default()),
        ];
        for sink in &sinks {
            sink.error("boxed");
        }
    }
}
