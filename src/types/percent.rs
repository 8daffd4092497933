use crate::types::errors::PercentError;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::iter::Sum;
use std::str::FromStr;
use tracing::error;

const DECIMAL_PLACES: u32 = 1;

/// A percentage carried with one fractional digit.
///
/// Every constructor rounds half to even, so two percents built from the same
/// ratio always compare equal. Serializes as a plain JSON number.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize)]
#[serde(transparent)]
pub struct Percent(#[serde(with = "rust_decimal::serde::float")] Decimal);

impl Percent {
    pub const ZERO: Percent = Percent(Decimal::ZERO);
    pub const HUNDRED: Percent = Percent(Decimal::ONE_HUNDRED);

    pub fn new(value: Decimal) -> Self {
        Percent(round(value))
    }

    pub const fn whole(value: u32) -> Self {
        Percent(Decimal::from_parts(value, 0, 0, false, 0))
    }

    /// `round(100 * part / whole, 1)`, or `None` when `whole` is zero or the
    /// intermediate product does not fit in a `Decimal`.
    pub fn from_ratio(part: Decimal, whole: Decimal) -> Option<Self> {
        Decimal::ONE_HUNDRED
            .checked_mul(part)
            .and_then(|scaled| scaled.checked_div(whole))
            .map(Percent::new)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Multiplies by `factor` and re-rounds to one fractional digit. On
    /// overflow the percent is returned unchanged.
    pub fn scaled(self, factor: Decimal) -> Self {
        match self.0.checked_mul(factor) {
            Some(value) => Percent::new(value),
            None => {
                error!("Percent overflow while scaling [{self}] by [{factor}]");
                self
            }
        }
    }
}

impl From<u8> for Percent {
    fn from(value: u8) -> Self {
        Percent::whole(u32::from(value))
    }
}

impl Sum for Percent {
    fn sum<I: Iterator<Item = Percent>>(iter: I) -> Self {
        Percent(iter.map(|percent| percent.0).sum())
    }
}

impl Display for Percent {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{:.1}", self.0)
    }
}

impl FromStr for Percent {
    type Err = PercentError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        let value = value.strip_suffix('%').unwrap_or(value).trim_end();

        if value.is_empty() {
            return Err(PercentError::InvalidFormat("Value is an empty string".to_string()));
        }

        let parsed = Decimal::from_str(value).map_err(|error| {
            PercentError::InvalidFormat(format!("Value '{value}' is not a number: {error}"))
        })?;

        if parsed.is_sign_negative() || parsed > Decimal::ONE_HUNDRED {
            return Err(PercentError::OutOfRange(parsed));
        }

        Ok(Percent::new(parsed))
    }
}

fn round(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointNearestEven)
}
