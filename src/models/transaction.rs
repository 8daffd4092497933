use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::TransactionKind;
use crate::types::monetary;

/// A stored income or expense entry.
///
/// Once ingested a transaction is never modified; the budget code only reads it.
/// `amount` is always a magnitude, the direction lives in `kind`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    /// Calendar date the money moved.
    pub date: NaiveDate,
    /// Free-form text, possibly empty.
    pub description: String,
    /// Magnitude of the transaction.
    #[serde(serialize_with = "monetary::serialize")]
    pub amount: Decimal,
    /// Category label, either supplied by the caller or assigned at ingestion.
    pub category: String,
    /// Income or expense.
    #[serde(rename = "type")]
    pub kind: TransactionKind
}

impl Transaction {
    pub fn new(date: NaiveDate, description: impl Into<String>, amount: Decimal, category: impl Into<String>, kind: TransactionKind) -> Self {
        Self {
            date,
            description: description.into(),
            amount,
            category: category.into(),
            kind
        }
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }
}
