pub mod parts;
pub mod stats;

use std::collections::HashMap;

/// Accumulated per-partition message counts for a single run.
pub type PartitionMap = HashMap<u32, i64>;
