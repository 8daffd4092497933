use thiserror::Error;

#[derive(Debug, Error)]
pub enum KeywordTableError {
    #[error("Keyword table error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Keyword table error: row [{row}] has an empty keyword")]
    EmptyKeyword {
        row: usize
    },
    #[error("Keyword table error: row [{row}] has an empty category")]
    EmptyCategory {
        row: usize
    }
}
