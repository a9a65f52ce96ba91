mod args;
mod error;

use crate::args::{Command, TopicStatsArgs};
use crate::error::ConsoleError;
use clap::Parser;
use serde::Serialize;
use std::error::Error;
use std::process;
use topic_stats::filesystem::provider::FileTopicDataProvider;
use topic_stats::provider::TopicDataProvider;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

#[tokio::main]
async fn main() {
    let args = TopicStatsArgs::parse();
    init_logging(args.quiet);
    if let Err(console_error) = run(&args).await {
        report(&console_error);
        process::exit(1);
    }
}

async fn run(args: &TopicStatsArgs) -> Result<(), ConsoleError> {
    let provider = FileTopicDataProvider::new(args.root.clone())?;
    match &args.command {
        Command::Topics => print_json(&provider.get_topics().await?, args.compact),
        Command::Last { topic_id } => print_json(
            &provider.get_last_topic_timestamp(topic_id).await?,
            args.compact,
        ),
        Command::Stats { topic_id } => {
            print_json(&provider.get_topic_stats(topic_id).await?, args.compact)
        }
        Command::Parts { topic_id } => {
            print_json(&provider.get_topic_parts(topic_id).await?, args.compact)
        }
    }
}

fn print_json<T: Serialize>(value: &T, compact: bool) -> Result<(), ConsoleError> {
    let rendered = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{rendered}");
    Ok(())
}

fn report(console_error: &ConsoleError) {
    eprintln!("error: {console_error}");
    let mut source = console_error.source();
    while let Some(cause) = source {
        eprintln!("caused by: {cause}");
        source = cause.source();
    }
}

fn init_logging(quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("off")
    } else {
        EnvFilter::builder()
            .with_default_directive(LevelFilter::WARN.into())
            .from_env_lossy()
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
