use std::collections::HashMap;

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::error;

use crate::models::{Transaction, TransactionKind};
use crate::types::monetary;

pub const DEFAULT_WINDOW_DAYS: u32 = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: Decimal
}

/// Expense totals per category for one aggregation window.
///
/// Categories are kept in the order they were first seen; ranking by amount is
/// left to the allocator so ties resolve to that order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryTotals {
    totals: Vec<CategoryTotal>,
    index: HashMap<String, usize>,
    grand_total: Decimal
}

impl CategoryTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `amount` to `category` and to the grand total.
    pub fn add(&mut self, category: &str, amount: Decimal) {
        let position = match self.index.get(category).copied() {
            Some(position) => position,
            None => {
                self.totals.push(CategoryTotal { category: category.to_string(), amount: Decimal::ZERO });
                self.index.insert(category.to_string(), self.totals.len() - 1);
                self.totals.len() - 1
            }
        };

        let total = &mut self.totals[position];

        match (total.amount.checked_add(amount), self.grand_total.checked_add(amount)) {
            (Some(category_total), Some(grand_total)) => {
                total.amount = category_total;
                self.grand_total = grand_total;
            }
            _ => error!("Category total overflow while adding [{amount}] to [{category}]")
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryTotal> {
        self.totals.iter()
    }

    pub fn grand_total(&self) -> Decimal {
        self.grand_total
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }
}

impl<'a> FromIterator<(&'a str, Decimal)> for CategoryTotals {
    fn from_iter<I: IntoIterator<Item = (&'a str, Decimal)>>(iter: I) -> Self {
        let mut totals = CategoryTotals::new();

        for (category, amount) in iter {
            totals.add(category, amount);
        }

        totals
    }
}

/// Sums expenses per category over the trailing `window_days` ending at `today`.
///
/// A transaction is counted when it is an expense dated on or after
/// `today - window_days`. Later dates are not cut off.
pub fn aggregate(transactions: &[Transaction], today: NaiveDate, window_days: u32) -> CategoryTotals {
    let since = window_start(today, window_days);

    transactions.iter()
        .filter(|transaction| transaction.is_expense() && transaction.date >= since)
        .map(|transaction| (transaction.category.as_str(), transaction.amount))
        .collect()
}

pub fn window_start(today: NaiveDate, window_days: u32) -> NaiveDate {
    today.checked_sub_days(Days::new(u64::from(window_days)))
        .unwrap_or(NaiveDate::MIN)
}

/// Lifetime income and expense totals for one user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Summary {
    #[serde(serialize_with = "monetary::serialize")]
    pub total_income: Decimal,
    #[serde(serialize_with = "monetary::serialize")]
    pub total_expense: Decimal
}

pub fn summarize(transactions: &[Transaction]) -> Summary {
    let mut summary = Summary::default();

    for transaction in transactions {
        let total = match transaction.kind {
            TransactionKind::Income => &mut summary.total_income,
            TransactionKind::Expense => &mut summary.total_expense
        };

        match total.checked_add(transaction.amount) {
            Some(value) => *total = value,
            None => error!("Summary overflow while adding [{}]", transaction.amount)
        }
    }

    summary
}
