use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

use crate::recurrence::RecurrenceRule;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "TEXT", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Completed,
}

impl TaskStatus {
    /// Anything that is not completed counts as open.
    pub fn is_open(&self) -> bool {
        !matches!(self, TaskStatus::Completed)
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskStatus::Todo => write!(f, "todo"),
            TaskStatus::InProgress => write!(f, "in_progress"),
            TaskStatus::Completed => write!(f, "completed"),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("Invalid task status: {0}")]
pub struct ParseTaskStatusError(String);

impl FromStr for TaskStatus {
    type Err = ParseTaskStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "todo" => Ok(TaskStatus::Todo),
            "in_progress" | "in-progress" => Ok(TaskStatus::InProgress),
            "completed" => Ok(TaskStatus::Completed),
            _ => Err(ParseTaskStatusError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "TEXT", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    None,
    Low,
    Medium,
    High,
}

#[derive(Error, Debug, PartialEq)]
#[error("Invalid task priority: {0}")]
pub struct ParseTaskPriorityError(String);

impl FromStr for TaskPriority {
    type Err = ParseTaskPriorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(TaskPriority::None),
            "low" => Ok(TaskPriority::Low),
            "medium" => Ok(TaskPriority::Medium),
            "high" => Ok(TaskPriority::High),
            _ => Err(ParseTaskPriorityError(s.to_string())),
        }
    }
}

/// Closed set of supported cadences. Every series repeats on exactly one of
/// these, scaled by its interval.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "TEXT", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RecurrencePattern {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl std::fmt::Display for RecurrencePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecurrencePattern::Daily => write!(f, "daily"),
            RecurrencePattern::Weekly => write!(f, "weekly"),
            RecurrencePattern::Monthly => write!(f, "monthly"),
            RecurrencePattern::Yearly => write!(f, "yearly"),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("Invalid recurrence pattern: {0}")]
pub struct ParseRecurrencePatternError(String);

impl FromStr for RecurrencePattern {
    type Err = ParseRecurrencePatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" => Ok(RecurrencePattern::Daily),
            "weekly" => Ok(RecurrencePattern::Weekly),
            "monthly" => Ok(RecurrencePattern::Monthly),
            "yearly" => Ok(RecurrencePattern::Yearly),
            _ => Err(ParseRecurrencePatternError(s.to_string())),
        }
    }
}

/// A recurring series definition. The rule lives here, normalized, rather
/// than being copied onto every instance row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Series {
    #[serde(with = "uuid::serde::compact")]
    pub id: Uuid,
    pub pattern: RecurrencePattern,
    pub interval: u32,
    pub schedule_from: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Series {
    /// Rebuild the validated rule from the stored columns.
    pub fn rule(&self) -> Result<RecurrenceRule, crate::error::CoreError> {
        RecurrenceRule::new(self.pattern, self.interval, self.schedule_from, self.end_date)
    }
}

/// One concrete occurrence of a series, with its own lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TaskInstance {
    pub id: Uuid,
    pub series_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub assigned_to: Option<Uuid>,
    pub client_id: Option<Uuid>,
    pub space_id: Option<Uuid>,
    pub due_date: NaiveDate,
    /// Canonical YYYY-MM-DD key for `due_date` in the business timezone.
    /// Unique per series; the dedup key for materialization.
    pub date_key: String,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new series together with its seed instance.
#[derive(Debug, Clone)]
pub struct NewSeriesData {
    pub title: String,
    pub description: Option<String>,
    pub priority: TaskPriority,
    pub assigned_to: Option<Uuid>,
    pub client_id: Option<Uuid>,
    pub space_id: Option<Uuid>,
    pub rule: RecurrenceRule,
}

/// Snapshot of the most recent instance of a series, as embedded in a
/// summary response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestTaskSnapshot {
    pub id: Uuid,
    pub status: TaskStatus,
    pub due_date: NaiveDate,
    pub assigned_to: Option<Uuid>,
    pub client_id: Option<Uuid>,
    pub space_id: Option<Uuid>,
}

impl From<&TaskInstance> for LatestTaskSnapshot {
    fn from(instance: &TaskInstance) -> Self {
        Self {
            id: instance.id,
            status: instance.status,
            due_date: instance.due_date,
            assigned_to: instance.assigned_to,
            client_id: instance.client_id,
            space_id: instance.space_id,
        }
    }
}

/// Per-series aggregate consumed by the series listing. Computed on demand,
/// never persisted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesSummary {
    pub series_id: Uuid,
    pub title: String,
    pub recurring_pattern: RecurrencePattern,
    pub recurring_interval: u32,
    pub recurring_end_date: Option<NaiveDate>,
    pub schedule_from: NaiveDate,
    pub total_instances: usize,
    pub open_instances: usize,
    pub completed_instances: usize,
    pub last_instance_date_key: String,
    pub next_instance_date_key: Option<String>,
    pub latest_task: LatestTaskSnapshot,
}

/// Result of backfilling a single series.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackfillOutcome {
    pub created: usize,
}

/// One series that could not be backfilled during a batch run.
#[derive(Debug, Clone)]
pub struct BackfillFailure {
    pub series_id: Uuid,
    pub error: String,
}

/// Aggregate result of a batch backfill. A series that failed contributes
/// nothing to `series_processed` or `tasks_created`; its error is recorded
/// instead of aborting the batch.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackfillReport {
    pub series_processed: usize,
    pub tasks_created: usize,
    #[serde(skip_serializing)]
    pub failures: Vec<BackfillFailure>,
}
