use chrono::NaiveDate;
use rust_decimal::Decimal;

/// A single validated bank transaction from one source file.
///
/// Constructed by row validation and held in memory only for the duration
/// of one pipeline run; once appended to a ledger file the record is gone.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    /// Source-assigned transaction identifier. Never empty, but uniqueness
    /// is not enforced; duplicates across files are preserved as-is.
    pub transaction_id: String,
    /// The partition key deciding which ledger file the row lands in. Never empty.
    pub user_id: String,
    /// Calendar day of the transaction, always equal to the run's target date.
    pub date: NaiveDate,
    /// Exact decimal amount as given in the source text, sign and scale preserved.
    pub amount: Decimal,
    /// Free-text description, empty when the source column is absent.
    pub description: String,
    /// Base name of the originating file, kept for traceability.
    pub source_file: String,
}
