use std::fs;
use std::str::FromStr;

use anyhow::Result;
use chrono::NaiveDate;
use csv::ReaderBuilder;
use rust_decimal::Decimal;
use tempfile::tempdir;

use super::writer::{write_partitions, LEDGER_HEADER};
use crate::models::Statement;

fn statement(transaction_id: &str, user_id: &str, amount: &str, description: &str) -> Statement {
    Statement {
        transaction_id: transaction_id.to_string(),
        user_id: user_id.to_string(),
        date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        amount: Decimal::from_str(amount).unwrap(),
        description: description.to_string(),
        source_file: "bank.csv".to_string()
    }
}

#[test]
fn test_writer_partitions_records_by_user() -> Result<()> {
    let output_dir = tempdir()?;

    let statements = vec![
        statement("T1", "U1", "10.50", "coffee"),
        statement("T2", "U2", "-5", "refund"),
        statement("T3", "U1", "1", "snack"),
    ];

    let written = write_partitions(output_dir.path(), &statements);

    assert_eq!(written, 2);

    let u1 = fs::read_to_string(output_dir.path().join("U1.csv"))?;
    let u2 = fs::read_to_string(output_dir.path().join("U2.csv"))?;

    assert_eq!(
        u1,
        "transactionId,date,amount,description,sourceFile\n\
         T1,2024-06-01,10.50,coffee,bank.csv\n\
         T3,2024-06-01,1,snack,bank.csv\n"
    );
    assert_eq!(
        u2,
        "transactionId,date,amount,description,sourceFile\n\
         T2,2024-06-01,-5,refund,bank.csv\n"
    );

    Ok(())
}

#[test]
fn test_writer_writes_header_only_on_file_creation() -> Result<()> {
    let output_dir = tempdir()?;

    write_partitions(output_dir.path(), &[statement("T1", "U1", "10", "first run")]);
    write_partitions(output_dir.path(), &[statement("T2", "U1", "20", "second run")]);

    let contents = fs::read_to_string(output_dir.path().join("U1.csv"))?;
    let header_count = contents.lines()
        .filter(|line| *line == LEDGER_HEADER.join(",")).count();

    assert_eq!(header_count, 1);
    assert_eq!(contents.lines().count(), 3);
    assert!(contents.starts_with("transactionId,date,amount,description,sourceFile\n"));
    assert!(contents.ends_with("T2,2024-06-01,20,second run,bank.csv\n"));

    Ok(())
}

#[test]
fn test_writer_round_trips_through_the_csv_codec() -> Result<()> {
    let output_dir = tempdir()?;
    let original = statement("T1", "U1", "10.50", "coffee, large \"to go\"");

    write_partitions(output_dir.path(), std::slice::from_ref(&original));

    let file = fs::File::open(output_dir.path().join("U1.csv"))?;
    let mut reader = ReaderBuilder::new().from_reader(file);
    let rows: Vec<csv::StringRecord> = reader.records().collect::<Result<_, _>>()?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get(0), Some("T1"));
    assert_eq!(rows[0].get(1).unwrap().parse::<NaiveDate>()?, original.date);
    assert_eq!(rows[0].get(2), Some("10.50"));
    assert_eq!(rows[0].get(3), Some("coffee, large \"to go\""));
    assert_eq!(rows[0].get(4), Some("bank.csv"));

    Ok(())
}

#[test]
fn test_writer_isolates_partition_failures() -> Result<()> {
    let output_dir = tempdir()?;

    // Occupy U1's ledger path with a directory so its append fails.
    fs::create_dir(output_dir.path().join("U1.csv"))?;

    let statements = vec![
        statement("T1", "U1", "10", "doomed"),
        statement("T2", "U2", "20", "fine"),
    ];

    let written = write_partitions(output_dir.path(), &statements);

    assert_eq!(written, 1);

    let u2 = fs::read_to_string(output_dir.path().join("U2.csv"))?;

    assert!(u2.contains("T2,2024-06-01,20,fine,bank.csv"));

    Ok(())
}

#[test]
fn test_writer_appends_without_touching_existing_rows() -> Result<()> {
    let output_dir = tempdir()?;

    write_partitions(output_dir.path(), &[statement("T1", "U1", "10", "day one")]);

    let after_first = fs::read_to_string(output_dir.path().join("U1.csv"))?;

    write_partitions(output_dir.path(), &[statement("T2", "U1", "20", "day two")]);

    let after_second = fs::read_to_string(output_dir.path().join("U1.csv"))?;

    assert!(after_second.starts_with(&after_first));
    assert!(after_second.ends_with("T2,2024-06-01,20,day two,bank.csv\n"));

    Ok(())
}

#[test]
fn test_writer_handles_empty_input() -> Result<()> {
    let output_dir = tempdir()?;

    let written = write_partitions(output_dir.path(), &[]);

    assert_eq!(written, 0);
    assert_eq!(fs::read_dir(output_dir.path())?.count(), 0);

    Ok(())
}
