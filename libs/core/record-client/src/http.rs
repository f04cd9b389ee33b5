//! `reqwest` implementation of [`RecordClient`].
//!
//! Every operation is a `POST {api_url}/tables/{table}/records/{operation}`
//! with the request descriptor as JSON body, authenticated with the project
//! id and public key headers.

use async_trait::async_trait;
use core_config::BackendConfig;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::client::RecordClient;
use crate::envelope::{BatchOutcome, Envelope, RecordLookup, RecordSet};
use crate::error::{ClientError, ClientResult};
use crate::query::{DeletePayload, FetchQuery, RecordsPayload};
use crate::record::RecordId;

const PROJECT_HEADER: &str = "X-Project-Id";

#[derive(Serialize)]
struct LookupRequest<'a> {
    id: RecordId,
    #[serde(flatten)]
    query: &'a FetchQuery,
}

/// HTTP record client bound to one project.
#[derive(Clone, Debug)]
pub struct HttpRecordClient {
    client: Client,
    config: BackendConfig,
}

impl HttpRecordClient {
    pub fn new(config: BackendConfig) -> ClientResult<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    fn endpoint(&self, table: &str, operation: &str) -> String {
        format!(
            "{}/tables/{}/records/{}",
            self.config.api_url, table, operation
        )
    }

    async fn call<B: Serialize + ?Sized>(
        &self,
        table: &str,
        operation: &str,
        body: &B,
    ) -> ClientResult<Envelope> {
        let url = self.endpoint(table, operation);
        debug!(%url, "Calling record backend");

        let response = self
            .client
            .post(&url)
            .header(PROJECT_HEADER, &self.config.project_id)
            .bearer_auth(&self.config.public_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            return Ok(serde_json::from_str(&text)?);
        }

        // Error statuses may still carry a regular envelope
        match serde_json::from_str::<Value>(&text) {
            Ok(value) if value.get("success").is_some() => {
                warn!(%status, table, operation, "Backend answered with error status and envelope");
                Ok(serde_json::from_value(value)?)
            }
            parsed => {
                let message = parsed
                    .ok()
                    .and_then(|value| {
                        value
                            .get("message")
                            .and_then(Value::as_str)
                            .map(str::to_string)
                    })
                    .unwrap_or_else(|| {
                        status
                            .canonical_reason()
                            .unwrap_or("Unknown error")
                            .to_string()
                    });
                Err(ClientError::Api {
                    status: status.as_u16(),
                    message,
                })
            }
        }
    }
}

#[async_trait]
impl RecordClient for HttpRecordClient {
    #[instrument(skip(self, query), fields(fields = query.fields.len()))]
    async fn fetch_records(&self, table: &str, query: &FetchQuery) -> ClientResult<RecordSet> {
        Ok(self.call(table, "fetch", query).await?.into_records())
    }

    #[instrument(skip(self, query))]
    async fn get_record_by_id(
        &self,
        table: &str,
        id: RecordId,
        query: &FetchQuery,
    ) -> ClientResult<RecordLookup> {
        let request = LookupRequest { id, query };
        Ok(self.call(table, "get", &request).await?.into_record())
    }

    #[instrument(skip(self, payload), fields(records = payload.records.len()))]
    async fn create_record(
        &self,
        table: &str,
        payload: &RecordsPayload,
    ) -> ClientResult<BatchOutcome> {
        Ok(self.call(table, "create", payload).await?.into_batch())
    }

    #[instrument(skip(self, payload), fields(records = payload.records.len()))]
    async fn update_record(
        &self,
        table: &str,
        payload: &RecordsPayload,
    ) -> ClientResult<BatchOutcome> {
        Ok(self.call(table, "update", payload).await?.into_batch())
    }

    #[instrument(skip(self, payload), fields(records = payload.record_ids.len()))]
    async fn delete_record(
        &self,
        table: &str,
        payload: &DeletePayload,
    ) -> ClientResult<BatchOutcome> {
        Ok(self.call(table, "delete", payload).await?.into_batch())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::{Outcome, RecordOutcome};
    use crate::query::{FieldDescriptor, SortType};
    use crate::record::RecordPayload;
    use crate::schema::{Fallback, Field};
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const DONE: Field = Field::new("completed", "completed_c", Fallback::Flag(false));

    fn client_for(server: &MockServer) -> HttpRecordClient {
        HttpRecordClient::new(BackendConfig::new(
            "proj-1".to_string(),
            "pk_test".to_string(),
            server.uri(),
        ))
        .unwrap()
    }

    #[tokio::test]
    async fn test_fetch_records_sends_query_and_credentials() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/tables/task_c/records/fetch"))
            .and(header("X-Project-Id", "proj-1"))
            .and(header("Authorization", "Bearer pk_test"))
            .and(body_json(json!({
                "fields": [{"field": {"Name": "title_c"}}],
                "orderBy": [{"fieldName": "created_at_c", "sorttype": "DESC"}],
                "pagingInfo": {"limit": 100, "offset": 0}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": [{"Id": 1, "title_c": "Buy milk"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let query = FetchQuery::new(vec![FieldDescriptor::new("title_c")])
            .order_by("created_at_c", SortType::Desc)
            .page(100, 0);
        let outcome = client_for(&server).fetch_records("task_c", &query).await.unwrap();

        let Outcome::Success(records) = outcome else {
            panic!("expected success");
        };
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id(), Some(1));
    }

    #[tokio::test]
    async fn test_get_record_by_id_flattens_query() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/tables/category_c/records/get"))
            .and(body_json(json!({
                "id": 3,
                "fields": [{"field": {"Name": "name_c"}}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": null
            })))
            .mount(&server)
            .await;

        let query = FetchQuery::new(vec![FieldDescriptor::new("name_c")]);
        let outcome = client_for(&server)
            .get_record_by_id("category_c", 3, &query)
            .await
            .unwrap();

        assert_eq!(outcome, Outcome::Success(None));
    }

    #[tokio::test]
    async fn test_update_record_returns_batch_results() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/tables/task_c/records/update"))
            .and(body_json(json!({"records": [{"Id": 5, "completed_c": true}]})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "results": [{"success": true, "data": {"Id": 5, "completed_c": true}}]
            })))
            .mount(&server)
            .await;

        let mut record = RecordPayload::for_record(5);
        record.set(&DONE, true);
        let outcome = client_for(&server)
            .update_record("task_c", &RecordsPayload::single(record))
            .await
            .unwrap();

        let Outcome::Success(results) = outcome else {
            panic!("expected success");
        };
        assert!(matches!(&results[0], RecordOutcome::Succeeded(Some(r)) if r.id() == Some(5)));
    }

    #[tokio::test]
    async fn test_error_status_with_envelope_is_an_outcome() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/tables/task_c/records/delete"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "success": false,
                "message": "Record is locked"
            })))
            .mount(&server)
            .await;

        let outcome = client_for(&server)
            .delete_record("task_c", &DeletePayload::single(5))
            .await
            .unwrap();

        assert_eq!(outcome, Outcome::failure("Record is locked"));
    }

    #[tokio::test]
    async fn test_error_status_without_envelope_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid public key"})),
            )
            .mount(&server)
            .await;

        let err = client_for(&server)
            .fetch_records("task_c", &FetchQuery::default())
            .await
            .unwrap_err();

        match err {
            ClientError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Invalid public key");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_error_status_with_plain_body_uses_reason() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .fetch_records("task_c", &FetchQuery::default())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ClientError::Api { status: 503, ref message } if message == "Service Unavailable"
        ));
    }

    #[tokio::test]
    async fn test_malformed_success_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .fetch_records("task_c", &FetchQuery::default())
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::Decode(_)));
    }
}
