//! Categories Domain
//!
//! Read-only access to task categories stored in the `category_c` backend
//! collection.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │ CategoryService │  ← Request building, envelope handling, notifications
//! └────────┬────────┘
//!          │
//! ┌────────▼────────┐
//! │  RecordClient   │  ← Backend capability (HTTP or mock)
//! └────────┬────────┘
//!          │
//! ┌────────▼────────┐
//! │ Fields / Models │  ← Static field table, UI shape, conversions
//! └─────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use domain_categories::CategoryService;
//! use domain_notifications::TracingNotifier;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Reads BACKEND_PROJECT_ID, BACKEND_PUBLIC_KEY and BACKEND_API_URL
//! let service = CategoryService::from_env(Arc::new(TracingNotifier))?;
//!
//! for category in service.list().await {
//!     println!("{} ({} tasks)", category.name, category.task_count);
//! }
//! # Ok(())
//! # }
//! ```

pub mod conversions;
pub mod error;
pub mod fields;
pub mod models;
pub mod service;

// Re-export commonly used types
pub use error::{CategoryError, CategoryResult};
pub use fields::CATEGORY_SCHEMA;
pub use models::Category;
pub use service::CategoryService;
