use anyhow::Result;
use cadence_core::models::{TaskInstance, TaskStatus};
use cadence_core::repository::{InstanceRepository, Repository};
use chrono::NaiveDate;

use crate::cli::ListCommand;
use crate::views::table::display_instances;

pub async fn list_instances(
    repo: &impl Repository,
    command: ListCommand,
    today: NaiveDate,
) -> Result<()> {
    let instances = match command.series {
        Some(series_id) => repo.list_instances(series_id).await?,
        None => repo.list_all_instances().await?,
    };

    let instances: Vec<TaskInstance> = match command.status {
        Some(status) => {
            let status = TaskStatus::from(status);
            instances
                .into_iter()
                .filter(|i| i.status == status)
                .collect()
        }
        None => instances,
    };

    display_instances(&instances, today);

    Ok(())
}
