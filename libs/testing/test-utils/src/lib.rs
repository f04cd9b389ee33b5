//! Shared test utilities for domain testing
//!
//! This crate provides reusable test infrastructure for the domain crates:
//! - [`RecordingNotifier`]: a `Notifier` that keeps every notification for assertions
//! - [`TestDataBuilder`]: deterministic backend rows for tasks and categories
//! - [`envelopes`]: canned backend outcomes (success, failure, batch results)
//! - [`assertions`]: custom assertion helpers
//!
//! # Usage
//!
//! ```rust
//! use test_utils::{envelopes, RecordingNotifier, TestDataBuilder};
//!
//! let builder = TestDataBuilder::from_test_name("list_tasks");
//! let row = builder.task_record(1);
//! let outcome = envelopes::records(vec![row]);
//! assert!(outcome.is_success());
//!
//! let notifier = RecordingNotifier::new();
//! assert_eq!(notifier.count(), 0);
//! ```

mod fixtures;
mod notifier;

pub mod envelopes;

pub use fixtures::{TestDataBuilder, record};
pub use notifier::RecordingNotifier;

/// Test assertion helpers
pub mod assertions {
    use record_client::RecordPayload;

    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Assert that a write payload holds exactly the given backend fields
    pub fn assert_payload_keys(payload: &RecordPayload, expected: &[&str]) {
        let mut actual: Vec<&str> = payload.keys().collect();
        let mut expected = expected.to_vec();
        actual.sort_unstable();
        expected.sort_unstable();
        assert_eq!(actual, expected, "payload fields differ");
    }

    /// Assert that an ISO-8601 UTC timestamp is not earlier than `floor`
    ///
    /// Both values must use the layout of `record_client::timestamp_now`, which sorts lexically.
    pub fn assert_timestamp_at_or_after(timestamp: &str, floor: &str) {
        assert!(
            timestamp >= floor,
            "timestamp {} is earlier than {}",
            timestamp,
            floor
        );
    }
}
