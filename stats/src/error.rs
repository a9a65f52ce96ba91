use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TopicDataError {
    #[error("Invalid root path: '{0}'")]
    InvalidRootPath(String),
    #[error("Topic with ID: '{0}' was not found")]
    NoSuchTopic(String),
    #[error("No run data for topic with ID: '{0}'")]
    MissingTopicData(String),
    #[error("Cannot list topics")]
    CannotListTopics(#[source] io::Error),
    #[error("Cannot read run history for topic with ID: '{0}'")]
    CannotReadHistory(String, #[source] io::Error),
    #[error("Cannot read offsets file for topic with ID: '{0}'")]
    CannotReadOffsets(String, #[source] io::Error),
}
