use crate::models::PartitionMap;
use crate::utils::timestamp::RunTimestamp;
use serde::Serialize;

/// Message-count statistics for the latest run of a topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicStats {
    pub id: String,
    pub timestamp: RunTimestamp,
    pub min: i64,
    pub max: i64,
    pub avg: i64,
}

impl TopicStats {
    /// Reduces accumulated per-partition counts to min/max/avg.
    ///
    /// The average is the sum of counts divided by the number of distinct
    /// partitions, truncating. The map must not be empty - callers reject
    /// missing data before aggregating.
    pub fn aggregate(id: &str, timestamp: RunTimestamp, parts: &PartitionMap) -> TopicStats {
        debug_assert!(!parts.is_empty());
        let mut min = i64::MAX;
        let mut max = i64::MIN;
        let mut sum: i64 = 0;
        for count in parts.values() {
            min = min.min(*count);
            max = max.max(*count);
            sum += count;
        }

        TopicStats {
            id: id.to_string(),
            timestamp,
            min,
            max,
            avg: sum / parts.len() as i64,
        }
    }
}
