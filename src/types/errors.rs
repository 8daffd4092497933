use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PercentError {
    #[error("Percent error: {0}")]
    InvalidFormat(String),
    #[error("Percent error: {0} is outside of the range 0 to 100")]
    OutOfRange(Decimal)
}
