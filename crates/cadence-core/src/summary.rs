use crate::error::CoreError;
use crate::models::{LatestTaskSnapshot, SeriesSummary, TaskStatus};
use crate::repository::Repository;
use crate::timezone::date_key;
use uuid::Uuid;

/// Aggregate one series into the shape the series listing consumes.
///
/// Counts treat every non-completed status as open. The next date key comes
/// straight from the cadence, anchored on the latest existing instance, and
/// is absent once the series has run past its end date.
pub async fn series_summary(
    repo: &impl Repository,
    series_id: Uuid,
) -> Result<SeriesSummary, CoreError> {
    let series = repo
        .find_series_by_id(series_id)
        .await?
        .ok_or_else(|| CoreError::NotFound(format!("Series with id {} not found", series_id)))?;

    let instances = repo.list_instances(series_id).await?;
    let latest = instances
        .last()
        .ok_or_else(|| CoreError::NotFound(format!("Series {} has no instances", series_id)))?;

    let completed = instances
        .iter()
        .filter(|i| i.status == TaskStatus::Completed)
        .count();

    let rule = series.rule()?;
    let next_instance_date_key = rule.next_occurrence_after(latest.due_date).map(date_key);

    Ok(SeriesSummary {
        series_id,
        title: latest.title.clone(),
        recurring_pattern: series.pattern,
        recurring_interval: series.interval,
        recurring_end_date: series.end_date,
        schedule_from: series.schedule_from,
        total_instances: instances.len(),
        open_instances: instances.len() - completed,
        completed_instances: completed,
        last_instance_date_key: latest.date_key.clone(),
        next_instance_date_key,
        latest_task: LatestTaskSnapshot::from(latest),
    })
}

/// One summary per recurring series, ordered by title, ties broken by
/// series id.
pub async fn all_series_summaries(repo: &impl Repository) -> Result<Vec<SeriesSummary>, CoreError> {
    let mut summaries = Vec::new();
    for series_id in repo.list_recurring_series_ids().await? {
        summaries.push(series_summary(repo, series_id).await?);
    }

    summaries.sort_by(|a, b| a.title.cmp(&b.title).then(a.series_id.cmp(&b.series_id)));
    Ok(summaries)
}
