use crate::error::TopicDataError;
use crate::filesystem::history;
use crate::filesystem::offsets;
use crate::models::parts::TopicParts;
use crate::models::stats::TopicStats;
use crate::models::PartitionMap;
use crate::provider::TopicDataProvider;
use crate::utils::timestamp::RunTimestamp;
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;
use tracing::{debug, error};

/// Topic data provider backed by a directory tree:
///
/// ```text
/// <root>/<topic>/history/<YYYY-MM-DD-HH-mm-ss>/offsets.csv
/// ```
#[derive(Debug)]
pub struct FileTopicDataProvider {
    root: PathBuf,
}

impl FileTopicDataProvider {
    /// Creates a provider over the given root folder.
    ///
    /// The root must already exist and be a directory; it is held as owned
    /// immutable configuration for the lifetime of the provider.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, TopicDataError> {
        let root = root.into();
        if !root.is_dir() {
            return Err(TopicDataError::InvalidRootPath(
                root.display().to_string(),
            ));
        }

        Ok(Self { root })
    }

    fn offsets_path(&self, topic_id: &str, run: &RunTimestamp) -> PathBuf {
        self.root
            .join(topic_id)
            .join(history::HISTORY_FOLDER_NAME)
            .join(run.as_folder_name())
            .join(offsets::OFFSETS_FILE_NAME)
    }

    async fn load_latest_offsets(
        &self,
        topic_id: &str,
    ) -> Result<(RunTimestamp, PartitionMap), TopicDataError> {
        let run = history::resolve_latest_run(&self.root, topic_id).await?;
        let path = self.offsets_path(topic_id, &run);
        debug!(
            "Reading offsets for topic with ID: '{}' from run: {}...",
            topic_id, run
        );
        match offsets::load_partition_offsets(&path).await {
            Ok(offsets) => Ok((run, offsets)),
            Err(io_error) => {
                error!(
                    "Failed to read offsets file: '{}' for topic with ID: '{}'.",
                    path.display(),
                    topic_id
                );
                Err(TopicDataError::CannotReadOffsets(
                    topic_id.to_string(),
                    io_error,
                ))
            }
        }
    }
}

#[async_trait]
impl TopicDataProvider for FileTopicDataProvider {
    async fn get_topics(&self) -> Result<Vec<String>, TopicDataError> {
        let mut dir_entries = fs::read_dir(&self.root)
            .await
            .map_err(TopicDataError::CannotListTopics)?;

        let mut topics = Vec::new();
        while let Some(dir_entry) = dir_entries.next_entry().await.unwrap_or(None) {
            let metadata = dir_entry.metadata().await;
            if metadata.is_err() || metadata.unwrap().is_file() {
                continue;
            }

            if let Ok(name) = dir_entry.file_name().into_string() {
                topics.push(name);
            }
        }

        Ok(topics)
    }

    async fn get_last_topic_timestamp(
        &self,
        topic_id: &str,
    ) -> Result<RunTimestamp, TopicDataError> {
        history::resolve_latest_run(&self.root, topic_id).await
    }

    async fn get_topic_stats(&self, topic_id: &str) -> Result<TopicStats, TopicDataError> {
        let (run, offsets) = self.load_latest_offsets(topic_id).await?;
        if offsets.is_empty() {
            return Err(TopicDataError::MissingTopicData(topic_id.to_string()));
        }

        Ok(TopicStats::aggregate(topic_id, run, &offsets))
    }

    async fn get_topic_parts(&self, topic_id: &str) -> Result<TopicParts, TopicDataError> {
        // An empty map is a valid parts view, unlike for stats.
        let (run, offsets) = self.load_latest_offsets(topic_id).await?;
        Ok(TopicParts::new(topic_id, run, offsets))
    }
}
