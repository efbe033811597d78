use crate::db::DbPool;
use crate::error::CoreError;
use crate::models::{NewSeriesData, Series, TaskInstance, TaskStatus};
use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

// Re-export domain modules
pub mod instances;
pub mod series;

// Traits are defined in this module and implemented in respective domain modules

/// Domain-specific trait for series definitions
#[async_trait]
pub trait SeriesRepository {
    /// Create a series and its seed instance (dated at the schedule anchor)
    /// in one transaction.
    async fn create_series(&self, data: NewSeriesData) -> Result<(Series, TaskInstance), CoreError>;
    async fn find_series_by_id(&self, id: Uuid) -> Result<Option<Series>, CoreError>;
    /// Ids of every series that has at least one materialized instance,
    /// oldest series first.
    async fn list_recurring_series_ids(&self) -> Result<Vec<Uuid>, CoreError>;
}

/// Domain-specific trait for task instances
#[async_trait]
pub trait InstanceRepository {
    /// Instances of one series, ascending by date key.
    async fn list_instances(&self, series_id: Uuid) -> Result<Vec<TaskInstance>, CoreError>;
    async fn latest_instance(&self, series_id: Uuid) -> Result<Option<TaskInstance>, CoreError>;
    /// Materialize a new instance on `due_date`, copying the denormalized
    /// task fields from `template`. Status always starts at todo. A second
    /// instance on the same calendar day fails with `DuplicateInstance`.
    async fn create_instance(
        &self,
        template: &TaskInstance,
        due_date: NaiveDate,
    ) -> Result<TaskInstance, CoreError>;
    async fn find_instance_by_id(&self, id: Uuid) -> Result<Option<TaskInstance>, CoreError>;
    async fn find_instances_by_short_id_prefix(
        &self,
        prefix: &str,
    ) -> Result<Vec<TaskInstance>, CoreError>;
    async fn update_status(&self, id: Uuid, status: TaskStatus) -> Result<TaskInstance, CoreError>;
    async fn list_all_instances(&self) -> Result<Vec<TaskInstance>, CoreError>;
}

/// Main repository trait that composes all domain traits
#[async_trait]
pub trait Repository: SeriesRepository + InstanceRepository {
    // This trait automatically composes all domain-specific repositories
    // Individual domain operations are defined in their respective traits
}

/// SQLite implementation of the repository pattern
pub struct SqliteRepository {
    pool: DbPool,
}

impl SqliteRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a reference to the database pool for internal use across modules
    pub(crate) fn pool(&self) -> &DbPool {
        &self.pool
    }
}

// The main Repository trait implementation will automatically be available
// when all domain trait implementations are defined
impl Repository for SqliteRepository {}
