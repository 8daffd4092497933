//! Display helpers for currency amounts.
//!
//! Amounts are carried as `Decimal` everywhere; they are only rounded to cents when
//! they leave the process (JSON output, log lines).

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serializer;

const DECIMAL_PLACES: u32 = 2;

/// Rounds an amount to cents, half away from zero.
pub fn round(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Serializes an amount as a JSON number rounded to cents.
pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    rust_decimal::serde::float::serialize(&round(*value), serializer)
}
