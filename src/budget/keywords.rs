use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use serde::Deserialize;

use crate::budget::errors::KeywordTableError;

const DEFAULT_KEYWORDS: [(&str, &str); 24] = [
    ("restaurant", "Food"),
    ("food", "Food"),
    ("grocery", "Food"),
    ("supermarket", "Food"),
    ("uber", "Travel"),
    ("ola", "Travel"),
    ("taxi", "Travel"),
    ("flight", "Travel"),
    ("airlines", "Travel"),
    ("rent", "Rent"),
    ("salary", "Income"),
    ("payroll", "Income"),
    ("bonus", "Income"),
    ("electricity", "Utilities"),
    ("water", "Utilities"),
    ("wifi", "Utilities"),
    ("internet", "Utilities"),
    ("recharge", "Utilities"),
    ("movie", "Entertainment"),
    ("netflix", "Entertainment"),
    ("prime", "Entertainment"),
    ("shopping", "Shopping"),
    ("amazon", "Shopping"),
    ("flipkart", "Shopping"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
struct KeywordRule {
    keyword: String,
    category: String
}

#[derive(Debug, Deserialize)]
struct KeywordRow {
    keyword: String,
    category: String
}

/// Ordered `(substring, category)` pairs used to classify descriptions.
///
/// Order is significant: lookups return the category of the first keyword found,
/// so rules are kept exactly in the order they were supplied. Keywords are stored
/// lower-cased because descriptions are lower-cased before matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordTable {
    rules: Vec<KeywordRule>
}

impl KeywordTable {
    /// Builds a table from pairs in the given order.
    ///
    /// # Errors
    /// Returns `KeywordTableError` if a keyword or category is blank; `row` is
    /// 1-based.
    pub fn from_pairs<I, K, C>(pairs: I) -> Result<Self, KeywordTableError>
    where
        I: IntoIterator<Item = (K, C)>,
        K: AsRef<str>,
        C: AsRef<str>,
    {
        let mut rules = Vec::new();

        for (index, (keyword, category)) in pairs.into_iter().enumerate() {
            let keyword = keyword.as_ref().trim().to_lowercase();
            let category = category.as_ref().trim();

            if keyword.is_empty() {
                return Err(KeywordTableError::EmptyKeyword { row: index + 1 });
            }

            if category.is_empty() {
                return Err(KeywordTableError::EmptyCategory { row: index + 1 });
            }

            rules.push(KeywordRule { keyword, category: category.to_string() });
        }

        Ok(Self { rules })
    }

    /// Reads a `keyword,category` CSV with a header row.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, KeywordTableError> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .from_reader(reader);

        let rows = reader.deserialize::<KeywordRow>()
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_pairs(rows.into_iter().map(|row| (row.keyword, row.category)))
    }

    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, KeywordTableError> {
        let file = std::fs::File::open(path.as_ref()).map_err(csv::Error::from)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Category of the first keyword contained in `description`.
    ///
    /// `description` must already be lower-cased.
    pub fn lookup(&self, description: &str) -> Option<&str> {
        self.rules.iter()
            .find(|rule| description.contains(rule.keyword.as_str()))
            .map(|rule| rule.category.as_str())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self {
            rules: DEFAULT_KEYWORDS.iter()
                .map(|(keyword, category)| KeywordRule {
                    keyword: keyword.to_string(),
                    category: category.to_string()
                })
                .collect()
        }
    }
}
