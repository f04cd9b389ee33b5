use std::sync::Arc;

use core_config::{BackendConfig, FromEnv};
use domain_notifications::Notifier;
use record_client::{
    BatchOutcome, DeletePayload, FetchQuery, HttpRecordClient, Outcome, RecordClient, RecordId,
    RecordOutcome, RecordsPayload, SortType, timestamp_now,
};
use tracing::{error, info, instrument, warn};

use crate::error::{TaskError, TaskResult, WriteAction};
use crate::fields::{CREATED_AT, LIST_LIMIT, TASK_SCHEMA};
use crate::models::{CreateTask, Task, UpdateTask};

/// Shown when a task listing fails without a backend message
pub const LOAD_FAILED: &str = "Failed to load tasks";

/// Service layer for task data access
pub struct TaskService<C: RecordClient> {
    client: Arc<C>,
    notifier: Arc<dyn Notifier>,
}

impl<C: RecordClient> Clone for TaskService<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            notifier: Arc::clone(&self.notifier),
        }
    }
}

impl TaskService<HttpRecordClient> {
    /// Build a service backed by the HTTP client, configured from the environment
    pub fn from_env(notifier: Arc<dyn Notifier>) -> TaskResult<Self> {
        let config = BackendConfig::from_env()?;
        Ok(Self::new(HttpRecordClient::new(config)?, notifier))
    }
}

impl<C: RecordClient> TaskService<C> {
    pub fn new(client: C, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            client: Arc::new(client),
            notifier,
        }
    }

    /// List tasks, newest first, at most 100.
    ///
    /// Never fails: backend rejections and transport errors are logged,
    /// notified, and yield an empty list.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Vec<Task> {
        let query = FetchQuery::new(TASK_SCHEMA.descriptors())
            .order_by(CREATED_AT.backend, SortType::Desc)
            .page(LIST_LIMIT, 0);

        match self.client.fetch_records(TASK_SCHEMA.table, &query).await {
            Ok(Outcome::Success(records)) => records.iter().map(Task::from).collect(),
            Ok(Outcome::Failure { message }) => {
                error!(%message, "Task listing rejected by backend");
                self.notifier.error(&message);
                Vec::new()
            }
            Err(err) => {
                error!(error = %err, "Error fetching tasks");
                self.notifier.error(LOAD_FAILED);
                Vec::new()
            }
        }
    }

    /// Fetch one task.
    ///
    /// Every failure, including a missing record, surfaces as
    /// [`TaskError::NotFound`].
    #[instrument(skip(self), fields(task_id = %id))]
    pub async fn get_by_id(&self, id: RecordId) -> TaskResult<Task> {
        let query = FetchQuery::new(TASK_SCHEMA.descriptors());

        match self.client.get_record_by_id(TASK_SCHEMA.table, id, &query).await {
            Ok(Outcome::Success(Some(record))) => Ok(Task::from(&record)),
            Ok(Outcome::Success(None)) => {
                warn!("Task lookup returned no data");
                Err(TaskError::NotFound(id))
            }
            Ok(Outcome::Failure { message }) => {
                error!(cause = %message, "Error fetching task");
                Err(TaskError::NotFound(id))
            }
            Err(err) => {
                error!(cause = %err, "Error fetching task");
                Err(TaskError::NotFound(id))
            }
        }
    }

    /// Create a task.
    ///
    /// The creation timestamp is the submission time; the completion
    /// timestamp starts empty.
    #[instrument(skip(self, input), fields(task_title = %input.title))]
    pub async fn create(&self, input: CreateTask) -> TaskResult<Task> {
        let payload = RecordsPayload::single(input.to_payload(&timestamp_now()));

        let outcome = self
            .client
            .create_record(TASK_SCHEMA.table, &payload)
            .await
            .inspect_err(|err| error!(error = %err, "Error creating task"))?;

        let task = self.settle_write(WriteAction::Create, outcome)?;
        info!(task_id = task.id, "Created task");
        Ok(task)
    }

    /// Write the fields present in `input` to task `id`.
    #[instrument(skip(self, input), fields(task_id = %id))]
    pub async fn update(&self, id: RecordId, input: UpdateTask) -> TaskResult<Task> {
        let payload = RecordsPayload::single(input.to_payload(id));

        let outcome = self
            .client
            .update_record(TASK_SCHEMA.table, &payload)
            .await
            .inspect_err(|err| error!(error = %err, "Error updating task"))?;

        self.settle_write(WriteAction::Update, outcome)
    }

    /// Mark a task completed (stamping the completion time) or reopen it
    /// (clearing the completion time).
    #[instrument(skip(self), fields(task_id = %id))]
    pub async fn set_completed(&self, id: RecordId, completed: bool) -> TaskResult<Task> {
        self.update(
            id,
            UpdateTask {
                completed: Some(Some(completed)),
                completed_at: Some(completed.then(timestamp_now)),
                ..Default::default()
            },
        )
        .await
    }

    /// Delete a task.
    ///
    /// Never fails: returns `true` only when the backend confirmed at least
    /// one deleted record and reported no failures.
    #[instrument(skip(self), fields(task_id = %id))]
    pub async fn delete(&self, id: RecordId) -> bool {
        let payload = DeletePayload::single(id);

        match self.client.delete_record(TASK_SCHEMA.table, &payload).await {
            Ok(Outcome::Success(results)) => {
                let failed = self.report_failures("delete", &results);
                failed == 0 && results.iter().any(RecordOutcome::is_success)
            }
            Ok(Outcome::Failure { message }) => {
                error!(%message, "Task deletion rejected by backend");
                self.notifier.error(&message);
                false
            }
            Err(err) => {
                error!(error = %err, "Error deleting task");
                false
            }
        }
    }

    /// Turn a create/update batch outcome into the written task.
    ///
    /// A single failed record fails the whole call.
    fn settle_write(&self, action: WriteAction, outcome: BatchOutcome) -> TaskResult<Task> {
        let results = match outcome {
            Outcome::Success(results) => results,
            Outcome::Failure { message } => {
                error!(%action, %message, "Task write rejected by backend");
                self.notifier.error(&message);
                return Err(TaskError::Rejected(message));
            }
        };

        if self.report_failures(&action.to_string(), &results) > 0 {
            return Err(TaskError::WriteFailed(action));
        }

        match results.into_iter().next() {
            Some(RecordOutcome::Succeeded(Some(record))) => Ok(Task::from(&record)),
            _ => {
                error!(%action, "Task write returned no record");
                Err(TaskError::WriteFailed(action))
            }
        }
    }

    /// Log and notify per-record failures; returns how many there were.
    fn report_failures(&self, action: &str, results: &[RecordOutcome]) -> usize {
        let failed: Vec<&RecordOutcome> = results.iter().filter(|r| !r.is_success()).collect();
        if failed.is_empty() {
            return 0;
        }

        error!(action, count = failed.len(), results = ?failed, "Task records failed");
        for result in &failed {
            if let RecordOutcome::Failed {
                message: Some(message),
            } = result
            {
                self.notifier.error(message);
            }
        }

        failed.len()
    }
}
