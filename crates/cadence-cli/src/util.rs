use cadence_core::error::CoreError;
use cadence_core::repository::{InstanceRepository, Repository};
use uuid::Uuid;

/// Resolve a full or short (prefix) instance ID to a unique task instance.
pub async fn resolve_instance_id(
    repo: &impl Repository,
    input: &str,
) -> Result<Uuid, CoreError> {
    if let Ok(id) = Uuid::parse_str(input) {
        return match repo.find_instance_by_id(id).await? {
            Some(instance) => Ok(instance.id),
            None => Err(CoreError::NotFound(format!(
                "Task with ID '{}' not found",
                input
            ))),
        };
    }

    let matches = repo.find_instances_by_short_id_prefix(input).await?;
    match matches.len() {
        0 => Err(CoreError::NotFound(format!(
            "Task with ID '{}' not found",
            input
        ))),
        1 => Ok(matches[0].id),
        _ => Err(CoreError::AmbiguousId(
            matches
                .iter()
                .map(|t| (t.id.to_string(), t.title.clone()))
                .collect(),
        )),
    }
}
