use anyhow::Result;
use cadence_core::models::TaskStatus;
use cadence_core::repository::{InstanceRepository, Repository};
use owo_colors::OwoColorize;

use crate::cli::StartCommand;
use crate::util::resolve_instance_id;

pub async fn start_task(repo: &impl Repository, command: StartCommand) -> Result<()> {
    let id = resolve_instance_id(repo, &command.id).await?;
    let started = repo.update_status(id, TaskStatus::InProgress).await?;

    println!(
        "{} In progress: {} ({})",
        "✓".green().bold(),
        started.title.bright_white().bold(),
        started.date_key.cyan()
    );

    Ok(())
}
