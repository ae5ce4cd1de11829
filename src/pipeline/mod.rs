
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use tracing::{error, info};

use crate::ingest::read_day;
use crate::ledger::write_partitions;

/// One ingest-validate-partition-append execution over a pair of directories.
///
/// Holds no state across runs; everything durable lives in the ledger files.
pub struct Pipeline {
    input_dir: PathBuf,
    output_dir: PathBuf
}

impl Pipeline {
    pub fn new(input_dir: PathBuf, output_dir: PathBuf) -> Self {
        Self {
            input_dir,
            output_dir
        }
    }

    /// Entry point for the scheduler. Resolves "today" from the local clock
    /// and logs any failure with its full cause chain instead of propagating
    /// it, so the next scheduled run still happens.
    ///
    /// The target day is the local calendar date at run start; source files
    /// produced in another timezone can land on a neighboring day.
    pub fn execute(&self) {
        let target_date = Local::now().date_naive();

        if let Err(error) = self.run(target_date) {
            error!("Daily run for {target_date} failed: {error:#}");
        }
    }

    /// Runs one full pass for an explicit target date and returns the number
    /// of matched records. Kept separate from [`Pipeline::execute`] so tests
    /// can pick the date instead of depending on the wall clock.
    pub fn run(&self, target_date: NaiveDate) -> Result<usize> {
        info!("Starting daily statement processing for {target_date}");

        let statements = read_day(&self.input_dir, target_date)
            .with_context(|| format!("reading input directory [{}]", self.input_dir.display()))?;

        info!("Found {} transactions for {target_date}", statements.len());

        let written = write_partitions(&self.output_dir, &statements);

        info!("Appended {written} user ledgers, run complete");

        Ok(statements.len())
    }
}
