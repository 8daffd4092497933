use rust_decimal::Decimal;
use tracing::trace;

use crate::budget::KeywordTable;
use crate::models::TransactionKind;

const INCOME_CATEGORY: &str = "Income";
const RENT_CATEGORY: &str = "Rent";
const FALLBACK_CATEGORY: &str = "Other";
const RENT_KEYWORD: &str = "rent";
const RENT_KEYWORD_THRESHOLD: Decimal = Decimal::from_parts(5000, 0, 0, false, 0);
const RENT_THRESHOLD: Decimal = Decimal::from_parts(10000, 0, 0, false, 0);

/// Assigns a category to a transaction that arrived without one.
#[derive(Debug, Clone, Default)]
pub struct Categorizer {
    keywords: KeywordTable
}

impl Categorizer {
    pub fn new(keywords: KeywordTable) -> Self {
        Self { keywords }
    }

    /// Picks a category for a single transaction.
    ///
    /// Rules are tried in order and the first hit wins:
    /// 1. Income is always `Income`.
    /// 2. First keyword table entry found in the lower-cased description.
    /// 3. `Rent` when the amount is at least 5000 and the description mentions
    ///    rent, or when the amount is at least 10000 whatever the description says.
    /// 4. `Other`.
    pub fn categorize(&self, description: &str, amount: Decimal, kind: TransactionKind) -> String {
        if kind == TransactionKind::Income {
            return INCOME_CATEGORY.to_string();
        }

        let description = description.to_lowercase();

        if let Some(category) = self.keywords.lookup(&description) {
            trace!("Description '{description}' matched keyword category [{category}]");
            return category.to_string();
        }

        if (amount >= RENT_KEYWORD_THRESHOLD && description.contains(RENT_KEYWORD)) || amount >= RENT_THRESHOLD {
            trace!("Amount [{amount}] fell back to [{RENT_CATEGORY}]");
            return RENT_CATEGORY.to_string();
        }

        FALLBACK_CATEGORY.to_string()
    }
}
