mod transaction_storage;

use chrono::NaiveDate;

use crate::models::Transaction;
use crate::types::UserId;

pub use transaction_storage::TransactionStorage;

pub const DEFAULT_LIST_LIMIT: usize = 50;

pub trait TransactionStore: Send + Sync + 'static {
    fn insert(&self, user_id: UserId, transaction: Transaction);
    /// Newest first by date, most recently inserted first within a date.
    fn list(&self, user_id: UserId, limit: usize) -> Vec<Transaction>;
    /// Transactions dated within `from..=to`, in insertion order.
    fn query(&self, user_id: UserId, from: NaiveDate, to: NaiveDate) -> Vec<Transaction>;
    /// Every user with at least one transaction, ascending.
    fn users(&self) -> Vec<UserId>;
}
