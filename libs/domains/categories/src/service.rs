use std::sync::Arc;

use core_config::{BackendConfig, FromEnv};
use domain_notifications::Notifier;
use record_client::{FetchQuery, HttpRecordClient, Outcome, RecordClient, RecordId, SortType};
use tracing::{error, instrument, warn};

use crate::error::{CategoryError, CategoryResult};
use crate::fields::{CATEGORY_SCHEMA, LIST_LIMIT, ORDER};
use crate::models::Category;

/// Shown when a category listing fails without a backend message
pub const LOAD_FAILED: &str = "Failed to load categories";

/// Read-only access to categories
pub struct CategoryService<C: RecordClient> {
    client: Arc<C>,
    notifier: Arc<dyn Notifier>,
}

impl<C: RecordClient> Clone for CategoryService<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            notifier: Arc::clone(&self.notifier),
        }
    }
}

impl CategoryService<HttpRecordClient> {
    /// Build a service backed by the HTTP client, configured from the environment
    pub fn from_env(notifier: Arc<dyn Notifier>) -> CategoryResult<Self> {
        let config = BackendConfig::from_env()?;
        Ok(Self::new(HttpRecordClient::new(config)?, notifier))
    }
}

impl<C: RecordClient> CategoryService<C> {
    pub fn new(client: C, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            client: Arc::new(client),
            notifier,
        }
    }

    /// List categories by `order` ascending, at most 50.
    ///
    /// Never fails: backend rejections and transport errors are logged,
    /// notified, and yield an empty list.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Vec<Category> {
        let query = FetchQuery::new(CATEGORY_SCHEMA.descriptors())
            .order_by(ORDER.backend, SortType::Asc)
            .page(LIST_LIMIT, 0);

        match self.client.fetch_records(CATEGORY_SCHEMA.table, &query).await {
            Ok(Outcome::Success(records)) => records.iter().map(Category::from).collect(),
            Ok(Outcome::Failure { message }) => {
                error!(%message, "Category listing rejected by backend");
                self.notifier.error(&message);
                Vec::new()
            }
            Err(err) => {
                error!(error = %err, "Error fetching categories");
                self.notifier.error(LOAD_FAILED);
                Vec::new()
            }
        }
    }

    /// Fetch one category.
    ///
    /// Every failure, including a missing record, surfaces as
    /// [`CategoryError::NotFound`].
    #[instrument(skip(self), fields(category_id = %id))]
    pub async fn get_by_id(&self, id: RecordId) -> CategoryResult<Category> {
        let query = FetchQuery::new(CATEGORY_SCHEMA.descriptors());

        match self.client.get_record_by_id(CATEGORY_SCHEMA.table, id, &query).await {
            Ok(Outcome::Success(Some(record))) => Ok(Category::from(&record)),
            Ok(Outcome::Success(None)) => {
                warn!("Category lookup returned no data");
                Err(CategoryError::NotFound(id))
            }
            Ok(Outcome::Failure { message }) => {
                error!(cause = %message, "Error fetching category");
                Err(CategoryError::NotFound(id))
            }
            Err(err) => {
                error!(cause = %err, "Error fetching category");
                Err(CategoryError::NotFound(id))
            }
        }
    }
}
