use crate::error::TopicDataError;
use crate::utils::timestamp::RunTimestamp;
use std::path::Path;
use tokio::fs;
use tracing::debug;

pub const HISTORY_FOLDER_NAME: &str = "history";

/// Finds the most recent run of a topic.
///
/// History entries that are not directories, or whose name does not decode
/// to a run timestamp, are skipped. A topic whose history holds no decodable
/// run is treated the same as a topic with no history at all.
pub async fn resolve_latest_run(
    root: &Path,
    topic_id: &str,
) -> Result<RunTimestamp, TopicDataError> {
    let topic_path = root.join(topic_id);
    if !topic_path.is_dir() {
        return Err(TopicDataError::NoSuchTopic(topic_id.to_string()));
    }

    let history_path = topic_path.join(HISTORY_FOLDER_NAME);
    if !history_path.is_dir() {
        return Err(TopicDataError::MissingTopicData(topic_id.to_string()));
    }

    let mut dir_entries = fs::read_dir(&history_path)
        .await
        .map_err(|error| TopicDataError::CannotReadHistory(topic_id.to_string(), error))?;

    let mut latest_run: Option<RunTimestamp> = None;
    while let Some(dir_entry) = dir_entries.next_entry().await.unwrap_or(None) {
        let metadata = dir_entry.metadata().await;
        if metadata.is_err() || metadata.unwrap().is_file() {
            continue;
        }

        let name = dir_entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };

        match RunTimestamp::from_folder_name(name) {
            Some(timestamp) => {
                if latest_run.map_or(true, |run| run < timestamp) {
                    latest_run = Some(timestamp);
                }
            }
            None => {
                debug!(
                    "Skipping invalid run folder with name: '{}' for topic with ID: '{}'.",
                    name, topic_id
                );
            }
        }
    }

    latest_run.ok_or_else(|| TopicDataError::MissingTopicData(topic_id.to_string()))
}
