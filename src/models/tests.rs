use super::errors::TransactionError;
use super::{Transaction, TransactionKind, TransactionRecord};

use std::str::FromStr;

use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::budget::Categorizer;

fn today() -> Result<NaiveDate> {
    Ok("2025-03-31".parse::<NaiveDate>()?)
}

fn create_record(date: Option<&str>, description: Option<&str>, amount: Option<&str>, category: Option<&str>, kind: Option<&str>) -> Result<TransactionRecord> {
    Ok(TransactionRecord {
        user_id: 7,
        date: date.map(str::to_string),
        description: description.map(str::to_string),
        amount: match amount {
            Some(s) => Some(Decimal::from_str(s)?),
            None => None
        },
        category: category.map(str::to_string),
        kind: kind.map(str::to_string)
    })
}

#[test]
fn test_record_with_all_fields_keeps_explicit_category() -> Result<()> {
    let record = create_record(Some("2025-03-02"), Some("Uber to airport"), Some("640.5"), Some("Work"), Some("expense"))?;

    let transaction = record.into_transaction(&Categorizer::default(), today()?)?;

    assert_eq!(transaction, Transaction::new(
        "2025-03-02".parse()?,
        "Uber to airport",
        Decimal::from_str("640.5")?,
        "Work",
        TransactionKind::Expense
    ));

    Ok(())
}

#[test]
fn test_record_without_category_is_categorized() -> Result<()> {
    let categorizer = Categorizer::default();

    let travel = create_record(None, Some("Uber to airport"), Some("640.5"), None, None)?
        .into_transaction(&categorizer, today()?)?;
    let blank = create_record(None, Some("Misc payment"), Some("12000"), Some("   "), None)?
        .into_transaction(&categorizer, today()?)?;
    let income = create_record(None, Some("Uber payout"), Some("50"), None, Some("INCOME"))?
        .into_transaction(&categorizer, today()?)?;

    assert_eq!(travel.category, "Travel");
    assert_eq!(blank.category, "Rent");
    assert_eq!(income.category, "Income");
    assert_eq!(income.kind, TransactionKind::Income);

    Ok(())
}

#[test]
fn test_record_defaults_missing_values() -> Result<()> {
    let transaction = create_record(Some(""), None, None, None, Some(" "))?
        .into_transaction(&Categorizer::default(), today()?)?;

    assert_eq!(transaction.date, today()?);
    assert_eq!(transaction.description, "");
    assert!(transaction.amount.is_zero());
    assert_eq!(transaction.category, "Other");
    assert_eq!(transaction.kind, TransactionKind::Expense);

    Ok(())
}

#[test]
fn test_record_rejects_unknown_type() -> Result<()> {
    let record = create_record(None, None, Some("10"), None, Some("transfer"))?;

    let result = record.into_transaction(&Categorizer::default(), today()?);

    assert!(matches!(result, Err(TransactionError::InvalidKind { user_id: 7, .. })));

    Ok(())
}

#[test]
fn test_record_rejects_unparseable_date() -> Result<()> {
    let record = create_record(Some("31/03/2025"), None, Some("10"), None, None)?;

    let result = record.into_transaction(&Categorizer::default(), today()?);

    assert!(matches!(result, Err(TransactionError::InvalidDate { user_id: 7, .. })));

    Ok(())
}

#[test]
fn test_record_rejects_negative_amount() -> Result<()> {
    let record = create_record(None, Some("Refund"), Some("-10"), None, None)?;

    let result = record.into_transaction(&Categorizer::default(), today()?);

    assert!(matches!(result, Err(TransactionError::NegativeAmount { user_id: 7, .. })));

    Ok(())
}

#[test]
fn test_transaction_kind_parse_is_case_insensitive() {
    assert_eq!(TransactionKind::parse("Income"), Some(TransactionKind::Income));
    assert_eq!(TransactionKind::parse(" EXPENSE "), Some(TransactionKind::Expense));
    assert_eq!(TransactionKind::parse("refund"), None);
}

#[test]
fn test_transaction_serializes_with_rounded_amount() -> Result<()> {
    let transaction = Transaction::new("2025-03-02".parse()?, "Lunch", Decimal::from_str("12.345")?, "Food", TransactionKind::Expense);

    let json = serde_json::to_value(&transaction)?;

    assert_eq!(json["date"], "2025-03-02");
    assert_eq!(json["amount"], 12.35);
    assert_eq!(json["type"], "expense");

    Ok(())
}
