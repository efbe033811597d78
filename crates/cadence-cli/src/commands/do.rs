use anyhow::Result;
use cadence_core::models::TaskStatus;
use cadence_core::repository::{InstanceRepository, Repository};
use owo_colors::OwoColorize;

use crate::cli::DoCommand;
use crate::util::resolve_instance_id;

pub async fn do_task(repo: &impl Repository, command: DoCommand) -> Result<()> {
    let id = resolve_instance_id(repo, &command.id).await?;
    let completed = repo.update_status(id, TaskStatus::Completed).await?;

    println!(
        "{} Completed: {} ({})",
        "✓".green().bold(),
        completed.title.bright_white().bold(),
        completed.date_key.cyan()
    );

    Ok(())
}
