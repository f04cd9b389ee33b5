use async_trait::async_trait;

use crate::envelope::{BatchOutcome, RecordLookup, RecordSet};
use crate::error::ClientResult;
use crate::query::{DeletePayload, FetchQuery, RecordsPayload};
use crate::record::RecordId;

/// Capability for talking to one backend project.
///
/// `Err` is reserved for transport and decoding failures; a response the
/// backend marked unsuccessful comes back as `Ok(Outcome::Failure { .. })`.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait RecordClient: Send + Sync {
    /// Query a collection
    async fn fetch_records(&self, table: &str, query: &FetchQuery) -> ClientResult<RecordSet>;

    /// Load one record by identifier
    async fn get_record_by_id(
        &self,
        table: &str,
        id: RecordId,
        query: &FetchQuery,
    ) -> ClientResult<RecordLookup>;

    /// Insert a batch of records
    async fn create_record(
        &self,
        table: &str,
        payload: &RecordsPayload,
    ) -> ClientResult<BatchOutcome>;

    /// Patch a batch of records; each payload carries its `Id`
    async fn update_record(
        &self,
        table: &str,
        payload: &RecordsPayload,
    ) -> ClientResult<BatchOutcome>;

    /// Delete records by identifier
    async fn delete_record(
        &self,
        table: &str,
        payload: &DeletePayload,
    ) -> ClientResult<BatchOutcome>;
}
