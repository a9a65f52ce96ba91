use crate::models::PartitionMap;
use std::io;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::trace;

pub const OFFSETS_FILE_NAME: &str = "offsets.csv";

/// Reads an offsets file into accumulated per-partition counts.
///
/// Malformed lines are noise, not errors: anything that does not split on
/// `,` into exactly one partition ID and one count is skipped. Duplicate
/// partition IDs sum their counts. Only opening or reading the file itself
/// can fail; a file with no valid lines yields an empty map.
pub async fn load_partition_offsets(path: &Path) -> Result<PartitionMap, io::Error> {
    let file = File::open(path).await?;
    let mut lines = BufReader::new(file).lines();
    let mut offsets = PartitionMap::new();
    while let Some(line) = lines.next_line().await? {
        let fields = line.split(',').collect::<Vec<&str>>();
        if fields.len() != 2 {
            trace!("Skipping malformed offsets line: '{}'.", line);
            continue;
        }

        let (Ok(partition_id), Ok(count)) = (fields[0].parse::<u32>(), fields[1].parse::<i64>())
        else {
            trace!("Skipping malformed offsets line: '{}'.", line);
            continue;
        };

        *offsets.entry(partition_id).or_insert(0) += count;
    }

    Ok(offsets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    async fn write_offsets(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join(OFFSETS_FILE_NAME);
        tokio::fs::write(&path, content).await.unwrap();
        path
    }

    #[tokio::test]
    async fn should_load_all_partitions_without_duplicates() {
        let dir = TempDir::new().unwrap();
        let path = write_offsets(&dir, "1,100\n2,200\n3,300\n4,400\n5,500\n").await;

        let offsets = load_partition_offsets(&path).await.unwrap();

        assert_eq!(offsets.len(), 5);
        assert_eq!(offsets[&1], 100);
        assert_eq!(offsets[&5], 500);
    }

    #[tokio::test]
    async fn should_sum_counts_of_duplicate_partitions() {
        let dir = TempDir::new().unwrap();
        let path = write_offsets(&dir, "5,100\n5,200\n5,200\n").await;

        let offsets = load_partition_offsets(&path).await.unwrap();

        assert_eq!(offsets.len(), 1);
        assert_eq!(offsets[&5], 500);
    }

    #[tokio::test]
    async fn should_skip_malformed_lines() {
        let dir = TempDir::new().unwrap();
        let path = write_offsets(
            &dir,
            "notanumber,5\n1,2,3\n7\n\n8,notanumber\n-1,10\n7,70\n",
        )
        .await;

        let offsets = load_partition_offsets(&path).await.unwrap();

        assert_eq!(offsets.len(), 1);
        assert_eq!(offsets[&7], 70);
    }

    #[tokio::test]
    async fn should_yield_empty_map_for_file_with_only_malformed_lines() {
        let dir = TempDir::new().unwrap();
        let path = write_offsets(&dir, "notanumber,5\na,b\n").await;

        let offsets = load_partition_offsets(&path).await.unwrap();

        assert!(offsets.is_empty());
    }

    #[tokio::test]
    async fn should_yield_empty_map_for_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = write_offsets(&dir, "").await;

        let offsets = load_partition_offsets(&path).await.unwrap();

        assert!(offsets.is_empty());
    }

    #[tokio::test]
    async fn should_fail_for_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(OFFSETS_FILE_NAME);

        let result = load_partition_offsets(&path).await;

        assert!(result.is_err());
    }
}
