use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while appending one user's partition. Each partition is written
/// independently, so one failing ledger never blocks the others.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("failed to open ledger [{}]: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: io::Error
    },
    #[error("failed to append to ledger [{}]: {source}", .path.display())]
    Append {
        path: PathBuf,
        source: csv::Error
    },
    #[error("failed to flush ledger [{}]: {source}", .path.display())]
    Flush {
        path: PathBuf,
        source: io::Error
    }
}
