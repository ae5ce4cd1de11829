use std::collections::HashMap;
use std::fs::OpenOptions;
use std::path::Path;

use chrono::NaiveDate;
use csv::WriterBuilder;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::error;

use crate::ledger::errors::LedgerError;
use crate::models::Statement;

/// Fixed column order of every per-user ledger file, written exactly once
/// as the first line when the file is created.
pub const LEDGER_HEADER: [&str; 5] = ["transactionId", "date", "amount", "description", "sourceFile"];

/// One output row, borrowed from a [`Statement`]. Serialized through the
/// csv codec so descriptions containing commas or quotes stay intact.
/// `Decimal` serializes as its exact plain string and `NaiveDate` as ISO 8601.
#[derive(Serialize)]
struct LedgerRow<'a> {
    transaction_id: &'a str,
    date: NaiveDate,
    amount: Decimal,
    description: &'a str,
    source_file: &'a str
}

impl<'a> From<&'a Statement> for LedgerRow<'a> {
    fn from(statement: &'a Statement) -> Self {
        Self {
            transaction_id: &statement.transaction_id,
            date: statement.date,
            amount: statement.amount,
            description: &statement.description,
            source_file: &statement.source_file
        }
    }
}

/// Appends every record to the ledger file named after its `user_id`,
/// creating files as needed. Returns how many partitions were written;
/// a failing partition is logged and skipped without affecting the rest.
pub fn write_partitions(output_dir: &Path, statements: &[Statement]) -> usize {
    let mut partitions: HashMap<&str, Vec<&Statement>> = HashMap::new();

    for statement in statements {
        partitions.entry(&statement.user_id).or_default().push(statement);
    }

    let mut written = 0;

    for (user_id, group) in &partitions {
        match append_partition(output_dir, user_id, group) {
            Ok(_) => written += 1,
            Err(error) => error!("Failed to write ledger for user [{user_id}]: {error}")
        }
    }

    written
}

fn append_partition(output_dir: &Path, user_id: &str, group: &[&Statement]) -> Result<(), LedgerError> {
    let path = output_dir.join(format!("{user_id}.csv"));
    let is_new = !path.exists();

    let file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(&path)
        .map_err(|source| LedgerError::Open {
            path: path.clone(),
            source
        })?;

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    if is_new {
        writer.write_record(LEDGER_HEADER).map_err(|source| LedgerError::Append {
            path: path.clone(),
            source
        })?;
    }

    for statement in group {
        writer.serialize(LedgerRow::from(*statement)).map_err(|source| LedgerError::Append {
            path: path.clone(),
            source
        })?;
    }

    writer.flush().map_err(|source| LedgerError::Flush { path, source })?;

    Ok(())
}
