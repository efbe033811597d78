use chrono::NaiveDate;
use std::collections::HashSet;
use uuid::Uuid;

use crate::error::CoreError;
use crate::models::{BackfillFailure, BackfillOutcome, BackfillReport};
use crate::repository::Repository;
use crate::timezone::date_key;

/// Tuning for backfill runs - core version
#[derive(Debug, Clone)]
pub struct BackfillConfig {
    /// Cap on instances created per series in one run. A dormant daily
    /// series should not explode into years of rows in a single request;
    /// a capped run reports what it created and can simply be run again.
    pub max_instances_per_series: usize,
}

impl Default for BackfillConfig {
    fn default() -> Self {
        Self {
            max_instances_per_series: 366,
        }
    }
}

/// Walks each series from its latest materialized instance up to a given
/// date and creates whatever occurrences are missing. Materialization is
/// lazy: nothing runs in the background, a run happens only when explicitly
/// triggered.
pub struct BackfillEngine {
    config: BackfillConfig,
}

impl BackfillEngine {
    pub fn new(config: BackfillConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(BackfillConfig::default())
    }

    pub fn config(&self) -> &BackfillConfig {
        &self.config
    }

    /// Materialize the missing occurrences of one series up to and
    /// including `as_of`.
    ///
    /// The latest remaining instance anchors the walk; each created instance
    /// copies its denormalized fields from the most recently created one, so
    /// edits to the newest instance propagate forward while status always
    /// resets to todo. A series with no instances is a no-op. Losing a
    /// creation race to a concurrent run is not an error; the occurrence is
    /// simply skipped.
    pub async fn backfill_series(
        &self,
        repo: &impl Repository,
        series_id: Uuid,
        as_of: NaiveDate,
    ) -> Result<BackfillOutcome, CoreError> {
        let instances = repo.list_instances(series_id).await?;
        let latest = match instances.last() {
            Some(latest) => latest,
            None => return Ok(BackfillOutcome { created: 0 }),
        };

        let series = repo
            .find_series_by_id(series_id)
            .await?
            .ok_or_else(|| CoreError::NotFound(format!("Series with id {} not found", series_id)))?;
        let rule = series.rule()?;

        let existing: HashSet<&str> = instances.iter().map(|i| i.date_key.as_str()).collect();

        let mut template = latest.clone();
        let mut created = 0;
        for due in rule.occurrences_between(latest.due_date, as_of) {
            if existing.contains(date_key(due).as_str()) {
                continue; // Already materialized
            }

            match repo.create_instance(&template, due).await {
                Ok(instance) => {
                    created += 1;
                    template = instance;
                }
                Err(CoreError::DuplicateInstance { .. }) => {
                    // A concurrent run got there first
                    continue;
                }
                Err(err) => return Err(err),
            }

            if created >= self.config.max_instances_per_series {
                break;
            }
        }

        Ok(BackfillOutcome { created })
    }

    /// Backfill every recurring series up to `as_of`. One series failing
    /// never blocks the others: its error is recorded in the report and the
    /// batch keeps going.
    pub async fn backfill_all(
        &self,
        repo: &impl Repository,
        as_of: NaiveDate,
    ) -> Result<BackfillReport, CoreError> {
        let series_ids = repo.list_recurring_series_ids().await?;

        let mut report = BackfillReport::default();
        for series_id in series_ids {
            match self.backfill_series(repo, series_id, as_of).await {
                Ok(outcome) => {
                    report.series_processed += 1;
                    report.tasks_created += outcome.created;
                }
                Err(err) => {
                    report.failures.push(BackfillFailure {
                        series_id,
                        error: err.to_string(),
                    });
                }
            }
        }

        Ok(report)
    }
}
