//! Notifications Domain
//!
//! User-facing notifications raised by the data-access services when a
//! backend call fails. Services receive a [`Notifier`] at construction and
//! call it fire-and-forget; how the message reaches the user is up to the
//! implementation.
//!
//! # Implementations
//!
//! - [`TracingNotifier`]: logs the notification only (headless use, jobs)
//! - [`BroadcastNotifier`]: fans notifications out to UI subscribers over a
//!   `tokio::sync::broadcast` channel
//!
//! # Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use domain_notifications::{BroadcastNotifier, Notifier};
//!
//! let notifier = Arc::new(BroadcastNotifier::new(16));
//! let mut toasts = notifier.subscribe();
//!
//! notifier.error("Failed to load tasks");
//! let toast = toasts.try_recv().unwrap();
//! assert_eq!(toast.message, "Failed to load tasks");
//! ```

pub mod models;
pub mod sink;

pub use models::{Notification, Severity};
pub use sink::{BroadcastNotifier, Notifier, TracingNotifier};
