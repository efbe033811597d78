use crate::error::CoreError;
use crate::models::{NewSeriesData, Series, TaskInstance, TaskStatus};
use crate::repository::SqliteRepository;
use crate::timezone::date_key;
use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

#[async_trait]
impl super::SeriesRepository for SqliteRepository {
    async fn create_series(&self, data: NewSeriesData) -> Result<(Series, TaskInstance), CoreError> {
        let mut tx = self.pool().begin().await?;

        let now = Utc::now();
        let series = Series {
            id: Uuid::now_v7(),
            pattern: data.rule.pattern(),
            interval: data.rule.interval(),
            schedule_from: data.rule.schedule_from(),
            end_date: data.rule.end_date(),
            created_at: now,
            updated_at: now,
        };

        sqlx::query(
            r#"INSERT INTO series (id, pattern, interval, schedule_from, end_date, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)"#,
        )
        .bind(series.id)
        .bind(series.pattern)
        .bind(series.interval)
        .bind(series.schedule_from)
        .bind(series.end_date)
        .bind(series.created_at)
        .bind(series.updated_at)
        .execute(&mut *tx)
        .await?;

        // The interactive creation path seeds the series with its first
        // occurrence, due on the schedule anchor.
        let seed = TaskInstance {
            id: Uuid::now_v7(),
            series_id: series.id,
            title: data.title,
            description: data.description,
            status: TaskStatus::Todo,
            priority: data.priority,
            assigned_to: data.assigned_to,
            client_id: data.client_id,
            space_id: data.space_id,
            due_date: series.schedule_from,
            date_key: date_key(series.schedule_from),
            completed_at: None,
            created_at: now,
            updated_at: now,
        };

        super::instances::insert_instance(&mut tx, &seed).await?;

        tx.commit().await?;
        Ok((series, seed))
    }

    async fn find_series_by_id(&self, id: Uuid) -> Result<Option<Series>, CoreError> {
        let series = sqlx::query_as("SELECT * FROM series WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool())
            .await?;
        Ok(series)
    }

    async fn list_recurring_series_ids(&self) -> Result<Vec<Uuid>, CoreError> {
        let ids: Vec<(Uuid,)> = sqlx::query_as(
            r#"SELECT s.id FROM series s
            WHERE EXISTS (SELECT 1 FROM tasks t WHERE t.series_id = s.id)
            ORDER BY s.created_at"#,
        )
        .fetch_all(self.pool())
        .await?;
        Ok(ids.into_iter().map(|(id,)| id).collect())
    }
}
