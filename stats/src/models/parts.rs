use crate::models::PartitionMap;
use crate::utils::timestamp::RunTimestamp;
use serde::Serialize;

/// Per-partition message counts for the latest run of a topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicParts {
    pub id: String,
    pub timestamp: RunTimestamp,
    pub parts: PartitionMap,
}

impl TopicParts {
    pub fn new(id: &str, timestamp: RunTimestamp, parts: PartitionMap) -> TopicParts {
        TopicParts {
            id: id.to_string(),
            timestamp,
            parts,
        }
    }
}
