//! Tasks Domain
//!
//! Create, read, update and delete tasks stored in the `task_c` backend
//! collection, translating between backend records and the UI task shape.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │ TaskService │  ← Request building, envelope handling, notifications
//! └──────┬──────┘
//!        │
//! ┌──────▼───────┐
//! │ RecordClient │  ← Backend capability (HTTP or mock)
//! └──────┬───────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← UI shapes, DTOs, field table, conversions
//! └─────────────┘
//! ```
//!
//! # Failure channels
//!
//! - `list` and `delete` never fail: problems are logged, notified and
//!   collapse to an empty list or `false`.
//! - `get_by_id` fails with [`TaskError::NotFound`] whatever went wrong.
//! - `create` and `update` fail with the backend's message, a generic
//!   write failure, or the transport error.
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use domain_notifications::BroadcastNotifier;
//! use domain_tasks::{CreateTask, TaskService, UpdateTask};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let notifier = Arc::new(BroadcastNotifier::default());
//! let service = TaskService::from_env(notifier)?;
//!
//! let task = service
//!     .create(CreateTask {
//!         title: "Write release notes".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! service
//!     .update(task.id, UpdateTask {
//!         completed: Some(Some(true)),
//!         ..Default::default()
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod conversions;
pub mod error;
pub mod fields;
pub mod models;
pub mod service;

// Re-export commonly used types
pub use error::{TaskError, TaskResult, WriteAction};
pub use fields::TASK_SCHEMA;
pub use models::{CreateTask, Task, TaskPriority, UpdateTask};
pub use service::TaskService;
