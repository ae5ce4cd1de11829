mod ingest;
mod ledger;
mod models;
mod pipeline;
mod scheduler;

use std::env;
use std::fs;
use std::io::stderr;
use std::path::PathBuf;
use std::process::exit;

use anyhow::{Context, Result};
use chrono::NaiveTime;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::pipeline::Pipeline;
use crate::scheduler::DailySchedule;

const RUN_HOUR: u32 = 2;
const RUN_MINUTE: u32 = 0;

#[tokio::main]
async fn main() -> Result<()> {
    //NOTE: For a binary with two optional directories and a log level,
    //      hand-rolled argument handling beats pulling in the clap crate.
    let args: Vec<String> = env::args().collect();

    if args.len() > 4 {
        eprintln!("Usage: statement-ledger [input_dir] [output_dir] [log_level]");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: info)");
        exit(1);
    }

    let input_dir = PathBuf::from(args.get(1).map(String::as_str).unwrap_or("input"));
    let output_dir = PathBuf::from(args.get(2).map(String::as_str).unwrap_or("output"));
    let log_level = args.get(3)
        .map(|value| parse_log_level(value)).unwrap_or(LevelFilter::INFO);

    setup_logging(log_level);

    fs::create_dir_all(&input_dir)
        .with_context(|| format!("creating input directory [{}]", input_dir.display()))?;
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("creating output directory [{}]", output_dir.display()))?;

    let pipeline = Pipeline::new(input_dir, output_dir);

    // Process whatever is already waiting before the first scheduled tick.
    pipeline.execute();

    if run_once() {
        return Ok(());
    }

    let run_at = NaiveTime::from_hms_opt(RUN_HOUR, RUN_MINUTE, 0)
        .context("invalid run time configuration")?;

    DailySchedule::new(run_at).run(|| pipeline.execute()).await;

    Ok(())
}

/// One-shot mode: run the startup pass and exit instead of scheduling.
fn run_once() -> bool {
    env::var("RUN_ONCE")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true"))
        .unwrap_or(false)
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'info'", level);
            LevelFilter::INFO
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: The ledgers are the program's real output; keeping the log on
    //      stderr leaves stdout free and matches where operators look.
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
