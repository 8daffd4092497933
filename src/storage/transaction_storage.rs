use crate::models::Transaction;
use crate::storage::TransactionStore;
use crate::types::UserId;
use chrono::NaiveDate;
use dashmap::DashMap;
use std::cmp::Reverse;
use std::sync::Arc;

/// In-memory transaction store keyed by user.
pub struct TransactionStorage {
    ledgers: Arc<DashMap<UserId, Vec<Transaction>>>
}

impl TransactionStorage {
    pub fn new() -> Self {
        Self {
            ledgers: Arc::new(DashMap::new())
        }
    }
}

impl Default for TransactionStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionStore for TransactionStorage {
    fn insert(&self, user_id: UserId, transaction: Transaction) {
        self.ledgers.entry(user_id).or_default().push(transaction);
    }

    fn list(&self, user_id: UserId, limit: usize) -> Vec<Transaction> {
        let Some(ledger) = self.ledgers.get(&user_id) else {
            return Vec::new();
        };

        let mut ordered: Vec<(usize, &Transaction)> = ledger.iter().enumerate().collect();
        ordered.sort_by_key(|(position, transaction)| (Reverse(transaction.date), Reverse(*position)));

        ordered.into_iter()
            .take(limit)
            .map(|(_, transaction)| transaction.clone())
            .collect()
    }

    fn query(&self, user_id: UserId, from: NaiveDate, to: NaiveDate) -> Vec<Transaction> {
        let Some(ledger) = self.ledgers.get(&user_id) else {
            return Vec::new();
        };

        ledger.iter()
            .filter(|transaction| transaction.date >= from && transaction.date <= to)
            .cloned()
            .collect()
    }

    fn users(&self) -> Vec<UserId> {
        let mut users: Vec<UserId> = self.ledgers.iter().map(|ledger| *ledger.key()).collect();
        users.sort_unstable();
        users
    }
}
