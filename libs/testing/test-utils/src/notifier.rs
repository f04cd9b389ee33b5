use std::sync::{Arc, Mutex};

use domain_notifications::{Notification, Notifier};

/// Notifier that records everything it is asked to show.
///
/// Clones share the same log, so a test can hand one clone to a service and
/// inspect the other.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    received: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.received
            .lock()
            .map(|received| received.clone())
            .unwrap_or_default()
    }

    /// Messages in the order they were raised
    pub fn messages(&self) -> Vec<String> {
        self.notifications()
            .into_iter()
            .map(|notification| notification.message)
            .collect()
    }

    pub fn count(&self) -> usize {
        self.notifications().len()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        tracing::debug!(message = %notification.message, "Recorded notification");
        if let Ok(mut received) = self.received.lock() {
            received.push(notification);
        }
    }
}
