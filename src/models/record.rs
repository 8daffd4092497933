use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::budget::Categorizer;
use crate::models::errors::TransactionError;
use crate::models::{Transaction, TransactionKind};
use crate::types::UserId;

/// Represents a single row from the input CSV file.
///
/// Everything except the user is optional here; missing values are filled in by
/// [`TransactionRecord::into_transaction`] the same way the tracker's insert
/// endpoint does it.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionRecord {
    /// Owner of the transaction.
    #[serde(rename = "user")]
    pub user_id: UserId,
    /// ISO date (`YYYY-MM-DD`); defaults to today.
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Defaults to zero.
    #[serde(default)]
    pub amount: Option<Decimal>,
    /// Explicit category; when absent the categorizer picks one.
    #[serde(default)]
    pub category: Option<String>,
    /// `income` or `expense` in any case; defaults to `expense`.
    #[serde(rename = "type", default)]
    pub kind: Option<String>
}

impl TransactionRecord {
    /// Validates the row and turns it into a stored [`Transaction`].
    ///
    /// # Errors
    /// Returns `TransactionError` if:
    /// - The type is neither `income` nor `expense`.
    /// - The date is not a valid ISO calendar date.
    /// - The amount is negative.
    pub fn into_transaction(self, categorizer: &Categorizer, today: NaiveDate) -> Result<Transaction, TransactionError> {
        let kind = match non_empty(self.kind.as_deref()) {
            Some(kind) => TransactionKind::parse(kind)
                .ok_or_else(|| TransactionError::invalid_kind(&self, kind))?,
            None => TransactionKind::Expense
        };

        let date = match non_empty(self.date.as_deref()) {
            Some(date) => date.parse::<NaiveDate>()
                .map_err(|_| TransactionError::invalid_date(&self, date))?,
            None => today
        };

        let amount = self.amount.unwrap_or(Decimal::ZERO);

        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(TransactionError::negative_amount(&self, amount));
        }

        let description = self.description.unwrap_or_default();

        let category = match non_empty(self.category.as_deref()) {
            Some(category) => category.to_string(),
            None => categorizer.categorize(&description, amount, kind)
        };

        Ok(Transaction::new(date, description, amount, category, kind))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}
