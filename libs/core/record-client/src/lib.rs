//! Record backend client
//!
//! Everything the domain services need to talk to the hosted record backend:
//!
//! - [`Schema`] / [`Field`]: static tables mapping UI field names to backend
//!   field names and the fallback used when the backend value is absent or falsy
//! - [`Record`]: a backend row with typed, fallback-aware accessors
//! - [`FetchQuery`], [`RecordPayload`], [`DeletePayload`]: request descriptors
//! - [`Envelope`] / [`Outcome`]: the response wrapper and its tagged classification
//! - [`RecordClient`]: the capability trait services are generic over
//! - [`HttpRecordClient`]: the `reqwest` implementation built from [`BackendConfig`]
//!
//! [`BackendConfig`]: core_config::BackendConfig

pub mod client;
pub mod envelope;
pub mod error;
pub mod http;
pub mod query;
pub mod record;
pub mod schema;

pub use client::RecordClient;
#[cfg(any(test, feature = "mock"))]
pub use client::MockRecordClient;
pub use envelope::{
    BatchOutcome, Envelope, Outcome, RecordLookup, RecordOutcome, RecordResult, RecordSet,
};
pub use error::{ClientError, ClientResult};
pub use http::HttpRecordClient;
pub use query::{
    DeletePayload, FetchQuery, FieldDescriptor, OrderBy, PagingInfo, RecordsPayload, SortType,
};
pub use record::{ID_FIELD, Record, RecordId, RecordPayload, parse_record_id, timestamp_now};
pub use schema::{Fallback, Field, Schema};
