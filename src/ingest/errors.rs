use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Reasons a single row is excluded from the run. Every variant except the
/// silent wrong-day drop is logged together with the raw row content.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RowError {
    #[error("expected at least 4 columns, found {found}")]
    TooFewColumns {
        found: usize
    },
    #[error("invalid date [{value}]")]
    InvalidDate {
        value: String
    },
    #[error("invalid amount [{value}]")]
    InvalidAmount {
        value: String
    },
    #[error("missing transactionId or userId")]
    MissingIdentifier
}

/// File-level ingest failures. A failed file is skipped in its entirety and
/// contributes zero records; the run continues with the remaining files.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to scan input directory [{}]: {source}", .path.display())]
    Scan {
        path: PathBuf,
        source: io::Error
    },
    #[error("failed to open [{}]: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: io::Error
    },
    #[error("failed to read [{}]: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: csv::Error
    }
}
