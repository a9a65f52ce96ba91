use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "topic-stats", version)]
#[command(about = "Read-only statistics for recorded topic runs")]
pub(crate) struct TopicStatsArgs {
    /// Root folder holding one subdirectory per topic.
    #[arg(long, short)]
    pub(crate) root: PathBuf,

    /// Print compact JSON instead of pretty-printed JSON.
    #[arg(long)]
    pub(crate) compact: bool,

    /// Suppress diagnostic output.
    #[arg(long, short)]
    pub(crate) quiet: bool,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// List the known topics.
    Topics,
    /// Show the timestamp of the latest run of a topic.
    Last { topic_id: String },
    /// Show message-count statistics for the latest run of a topic.
    Stats { topic_id: String },
    /// Show per-partition message counts for the latest run of a topic.
    Parts { topic_id: String },
}
