use chrono::NaiveDate;
use csv::StringRecord;
use rust_decimal::Decimal;

use crate::ingest::errors::RowError;
use crate::models::Statement;

/// Minimum column count for a data row: transactionId, userId, date, amount.
const MIN_COLUMNS: usize = 4;

/// Outcome of validating one raw row against the run's target date.
///
/// A row carrying a perfectly valid date for some other day is not an error,
/// it is simply out of scope for this run and dropped without a trace. Only
/// `Rejected` rows are worth an operator's attention.
#[derive(Debug)]
pub enum RowOutcome {
    Accepted(Statement),
    OtherDay,
    Rejected(RowError)
}

/// Classifies one raw CSV row. Never fails toward the caller; every way a
/// row can be malformed maps to a `Rejected` reason, checked in a fixed
/// order where the first failing rule wins.
pub fn validate_row(row: &StringRecord, target_date: NaiveDate, source_file: &str) -> RowOutcome {
    if row.len() < MIN_COLUMNS {
        return RowOutcome::Rejected(RowError::TooFewColumns { found: row.len() });
    }

    let transaction_id = row.get(0).unwrap_or_default().trim();
    let user_id = row.get(1).unwrap_or_default().trim();
    let date_text = row.get(2).unwrap_or_default().trim();
    let amount_text = row.get(3).unwrap_or_default().trim();
    let description = row.get(4).unwrap_or_default();

    let Ok(date) = date_text.parse::<NaiveDate>() else {
        return RowOutcome::Rejected(RowError::InvalidDate { value: date_text.to_string() });
    };

    if date != target_date {
        return RowOutcome::OtherDay;
    }

    let Ok(amount) = Decimal::from_str_exact(amount_text) else {
        return RowOutcome::Rejected(RowError::InvalidAmount { value: amount_text.to_string() });
    };

    if transaction_id.is_empty() || user_id.is_empty() {
        return RowOutcome::Rejected(RowError::MissingIdentifier);
    }

    RowOutcome::Accepted(Statement {
        transaction_id: transaction_id.to_string(),
        user_id: user_id.to_string(),
        date,
        amount,
        description: description.to_string(),
        source_file: source_file.to_string()
    })
}
