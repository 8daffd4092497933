mod errors;
mod record;
#[cfg(test)]
mod tests;
mod transaction;

use serde::Serialize;

pub use record::TransactionRecord;
pub use transaction::Transaction;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense
}

impl TransactionKind {
    /// Case-insensitive match on `income` / `expense`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "income" => Some(TransactionKind::Income),
            "expense" => Some(TransactionKind::Expense),
            _ => None
        }
    }
}
