use crate::error::CoreError;
use crate::models::{TaskInstance, TaskStatus};
use crate::repository::SqliteRepository;
use crate::timezone::date_key;
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use sqlx::{Sqlite, Transaction};
use uuid::Uuid;

#[async_trait]
impl super::InstanceRepository for SqliteRepository {
    async fn list_instances(&self, series_id: Uuid) -> Result<Vec<TaskInstance>, CoreError> {
        let instances = sqlx::query_as(
            "SELECT * FROM tasks WHERE series_id = $1 ORDER BY date_key",
        )
        .bind(series_id)
        .fetch_all(self.pool())
        .await?;
        Ok(instances)
    }

    async fn latest_instance(&self, series_id: Uuid) -> Result<Option<TaskInstance>, CoreError> {
        let instance = sqlx::query_as(
            "SELECT * FROM tasks WHERE series_id = $1 ORDER BY date_key DESC LIMIT 1",
        )
        .bind(series_id)
        .fetch_optional(self.pool())
        .await?;
        Ok(instance)
    }

    async fn create_instance(
        &self,
        template: &TaskInstance,
        due_date: NaiveDate,
    ) -> Result<TaskInstance, CoreError> {
        let now = Utc::now();
        let instance = TaskInstance {
            id: Uuid::now_v7(),
            series_id: template.series_id,
            title: template.title.clone(),
            description: template.description.clone(),
            status: TaskStatus::Todo,
            priority: template.priority,
            assigned_to: template.assigned_to,
            client_id: template.client_id,
            space_id: template.space_id,
            due_date,
            date_key: date_key(due_date),
            completed_at: None,
            created_at: now,
            updated_at: now,
        };

        let mut tx = self.pool().begin().await?;
        insert_instance(&mut tx, &instance).await?;
        tx.commit().await?;
        Ok(instance)
    }

    async fn find_instance_by_id(&self, id: Uuid) -> Result<Option<TaskInstance>, CoreError> {
        let instance = sqlx::query_as("SELECT * FROM tasks WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool())
            .await?;
        Ok(instance)
    }

    async fn find_instances_by_short_id_prefix(
        &self,
        prefix: &str,
    ) -> Result<Vec<TaskInstance>, CoreError> {
        // Ids are stored as 16-byte blobs; match the human-readable prefix
        // against their hex expansion.
        let mut pattern = prefix.replace('-', "").to_uppercase();
        pattern.push('%');

        let instances: Vec<TaskInstance> =
            sqlx::query_as("SELECT * FROM tasks WHERE hex(id) LIKE $1")
                .bind(pattern)
                .fetch_all(self.pool())
                .await?;
        Ok(instances)
    }

    async fn update_status(&self, id: Uuid, status: TaskStatus) -> Result<TaskInstance, CoreError> {
        let completed_at = if status == TaskStatus::Completed {
            Some(Utc::now())
        } else {
            None
        };

        let instance = sqlx::query_as(
            r#"UPDATE tasks
            SET status = $1, completed_at = $2, updated_at = $3
            WHERE id = $4
            RETURNING *
            "#,
        )
        .bind(status)
        .bind(completed_at)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(self.pool())
        .await?
        .ok_or_else(|| CoreError::NotFound(id.to_string()))?;

        Ok(instance)
    }

    async fn list_all_instances(&self) -> Result<Vec<TaskInstance>, CoreError> {
        let instances = sqlx::query_as("SELECT * FROM tasks ORDER BY date_key, created_at")
            .fetch_all(self.pool())
            .await?;
        Ok(instances)
    }
}

/// Insert an instance row within an existing transaction. A unique-index
/// conflict on (series_id, date_key) maps to `DuplicateInstance`.
pub(crate) async fn insert_instance(
    tx: &mut Transaction<'_, Sqlite>,
    instance: &TaskInstance,
) -> Result<(), CoreError> {
    sqlx::query(
        r#"INSERT INTO tasks (id, series_id, title, description, status, priority, assigned_to, client_id, space_id, due_date, date_key, completed_at, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)"#,
    )
    .bind(instance.id)
    .bind(instance.series_id)
    .bind(&instance.title)
    .bind(&instance.description)
    .bind(instance.status)
    .bind(instance.priority)
    .bind(instance.assigned_to)
    .bind(instance.client_id)
    .bind(instance.space_id)
    .bind(instance.due_date)
    .bind(&instance.date_key)
    .bind(instance.completed_at)
    .bind(instance.created_at)
    .bind(instance.updated_at)
    .execute(&mut **tx)
    .await
    .map_err(|err| match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => CoreError::DuplicateInstance {
            series_id: instance.series_id,
            date_key: instance.date_key.clone(),
        },
        _ => CoreError::Database(err),
    })?;

    Ok(())
}
