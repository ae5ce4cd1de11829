use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use csv::ReaderBuilder;
use tracing::{error, warn};

use crate::ingest::errors::IngestError;
use crate::ingest::row::{validate_row, RowOutcome};
use crate::models::Statement;

/// Collects every valid record for `target_date` across all CSV files in
/// the input directory (non-recursive).
///
/// A file that cannot be opened or read is logged and contributes zero
/// records; only an unreadable input directory fails the whole run.
pub fn read_day(input_dir: &Path, target_date: NaiveDate) -> Result<Vec<Statement>, IngestError> {
    let mut statements = Vec::new();

    for path in csv_files(input_dir)? {
        match read_file(&path, target_date) {
            Ok(batch) => statements.extend(batch),
            Err(error) => error!("Skipping unreadable input file: {error}")
        }
    }

    Ok(statements)
}

fn csv_files(input_dir: &Path) -> Result<Vec<PathBuf>, IngestError> {
    let entries = fs::read_dir(input_dir).map_err(|source| IngestError::Scan {
        path: input_dir.to_path_buf(),
        source
    })?;

    let mut files = Vec::new();

    for entry in entries {
        let entry = entry.map_err(|source| IngestError::Scan {
            path: input_dir.to_path_buf(),
            source
        })?;

        let path = entry.path();

        if path.extension().is_some_and(|extension| extension == "csv") {
            files.push(path);
        }
    }

    Ok(files)
}

fn read_file(path: &Path, target_date: NaiveDate) -> Result<Vec<Statement>, IngestError> {
    let file = File::open(path).map_err(|source| IngestError::Open {
        path: path.to_path_buf(),
        source
    })?;

    let source_file = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    //NOTE: The reader stays flexible on purpose: a short row is a validation
    //      concern with its own rejection reason, not a codec error.
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_reader(BufReader::new(file));

    let mut statements = Vec::new();

    for result in reader.records() {
        let row = match result {
            Ok(row) => row,
            Err(error) if error.is_io_error() => {
                return Err(IngestError::Read {
                    path: path.to_path_buf(),
                    source: error
                });
            }
            Err(error) => {
                warn!("Skipping unparseable row in [{source_file}]: {error}");
                continue;
            }
        };

        match validate_row(&row, target_date, &source_file) {
            RowOutcome::Accepted(statement) => statements.push(statement),
            RowOutcome::OtherDay => {}
            RowOutcome::Rejected(reason) => {
                warn!("Skipping row {row:?} in [{source_file}]: {reason}");
            }
        }
    }

    Ok(statements)
}
