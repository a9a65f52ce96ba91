use crate::error::TopicDataError;
use crate::models::parts::TopicParts;
use crate::models::stats::TopicStats;
use crate::utils::timestamp::RunTimestamp;
use async_trait::async_trait;

/// Read-only access to recorded topic runs.
///
/// Every query re-reads the backing store; implementations hold no caches
/// and no mutable state, so concurrent queries are independent.
#[async_trait]
pub trait TopicDataProvider: Send + Sync {
    /// Lists the known topic IDs in enumeration order.
    async fn get_topics(&self) -> Result<Vec<String>, TopicDataError>;

    /// Returns the timestamp of the most recent run of a topic.
    async fn get_last_topic_timestamp(
        &self,
        topic_id: &str,
    ) -> Result<RunTimestamp, TopicDataError>;

    /// Returns min/max/avg message counts for the most recent run of a topic.
    async fn get_topic_stats(&self, topic_id: &str) -> Result<TopicStats, TopicDataError>;

    /// Returns per-partition message counts for the most recent run of a topic.
    async fn get_topic_parts(&self, topic_id: &str) -> Result<TopicParts, TopicDataError>;
}
