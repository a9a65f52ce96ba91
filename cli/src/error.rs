use thiserror::Error;
use topic_stats::error::TopicDataError;

#[derive(Debug, Error)]
pub(crate) enum ConsoleError {
    #[error("Topic data error")]
    TopicData(#[from] TopicDataError),

    #[error("JSON serialization error")]
    Serialization(#[from] serde_json::Error),
}
