use crate::models::TransactionRecord;
use crate::types::UserId;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransactionError {
    #[error("Type '{kind}' is not 'income' or 'expense' for user [{user_id}]")]
    InvalidKind {
        user_id: UserId,
        kind: String
    },
    #[error("Date '{date}' is not a valid YYYY-MM-DD date for user [{user_id}]")]
    InvalidDate {
        user_id: UserId,
        date: String
    },
    #[error("Amount [{amount}] must not be negative for user [{user_id}]")]
    NegativeAmount {
        user_id: UserId,
        amount: Decimal
    }
}

impl TransactionError {
    pub fn invalid_kind(record: &TransactionRecord, kind: &str) -> Self {
        Self::InvalidKind {
            user_id: record.user_id,
            kind: kind.to_string()
        }
    }

    pub fn invalid_date(record: &TransactionRecord, date: &str) -> Self {
        Self::InvalidDate {
            user_id: record.user_id,
            date: date.to_string()
        }
    }

    pub fn negative_amount(record: &TransactionRecord, amount: Decimal) -> Self {
        Self::NegativeAmount {
            user_id: record.user_id,
            amount
        }
    }
}
