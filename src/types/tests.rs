use super::errors::PercentError;
use super::{monetary, Percent};
use anyhow::Result;
use rust_decimal::Decimal;
use std::str::FromStr;

#[test]
fn test_percent_successfully_parses_valid_strings() -> Result<()> {
    let test_cases = vec![
        ("20", "20.0"),
        ("0", "0.0"),
        ("100", "100.0"),
        ("12.5", "12.5"),
        ("  15  ", "15.0"),
        ("25%", "25.0"),
        ("33.33", "33.3"),
    ];

    for (input_string, expected_output) in test_cases {
        assert_eq!(Percent::from_str(input_string)?.to_string(), expected_output);
    }

    Ok(())
}

#[test]
fn test_percent_fails_to_parse_invalid_strings() {
    assert!(matches!(Percent::from_str(""), Err(PercentError::InvalidFormat(_))));
    assert!(matches!(Percent::from_str("abc"), Err(PercentError::InvalidFormat(_))));
    assert!(matches!(Percent::from_str("%"), Err(PercentError::InvalidFormat(_))));
    assert!(matches!(Percent::from_str("-1"), Err(PercentError::OutOfRange(_))));
    assert!(matches!(Percent::from_str("100.1"), Err(PercentError::OutOfRange(_))));
}

#[test]
fn test_percent_from_ratio_rounds_to_one_decimal_place() -> Result<()> {
    let whole = Decimal::from(3);

    assert_eq!(Percent::from_ratio(Decimal::ONE, whole).map(|p| p.to_string()), Some("33.3".to_string()));
    assert_eq!(Percent::from_ratio(Decimal::TWO, whole).map(|p| p.to_string()), Some("66.7".to_string()));
    assert_eq!(Percent::from_ratio(Decimal::from_str("600")?, Decimal::from_str("1000")?), Some(Percent::from_str("60")?));

    Ok(())
}

#[test]
fn test_percent_from_ratio_rejects_zero_whole() {
    assert!(Percent::from_ratio(Decimal::ONE, Decimal::ZERO).is_none());
}

#[test]
fn test_percent_rounds_exact_midpoints_to_even() -> Result<()> {
    //NOTE: rounding runs on exact decimals, so 0.35 is a true midpoint here (a binary float would round it down)
    assert_eq!(Percent::new(Decimal::from_str("0.25")?).to_string(), "0.2");
    assert_eq!(Percent::new(Decimal::from_str("0.35")?).to_string(), "0.4");

    Ok(())
}

#[test]
fn test_percent_scaled_re_rounds_each_value() -> Result<()> {
    let percent = Percent::from_str("33.3")?;
    let factor = Decimal::from(80) / Decimal::from_str("99.9")?;

    assert_eq!(percent.scaled(factor).to_string(), "26.7");
    assert_eq!(Percent::from_str("60")?.scaled(Decimal::from_str("0.8")?), Percent::from_str("48")?);

    Ok(())
}

#[test]
fn test_percent_overflow_keeps_value() -> Result<()> {
    let percent = Percent::from_str("50")?;

    assert_eq!(percent.scaled(Decimal::MAX), percent);
    assert!(Percent::from_ratio(Decimal::MAX, Decimal::ONE).is_none());

    Ok(())
}

#[test]
fn test_percent_sum_and_serialization() -> Result<()> {
    let total: Percent = ["48.0", "16.0", "16.0", "20"]
        .iter()
        .map(|value| Percent::from_str(value))
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .sum();

    assert_eq!(total, Percent::HUNDRED);
    assert_eq!(serde_json::to_string(&Percent::from_str("48")?)?, "48.0");
    assert_eq!(serde_json::to_string(&Percent::from(20))?, "20.0");

    Ok(())
}

#[test]
fn test_monetary_rounds_to_cents() -> Result<()> {
    assert_eq!(monetary::round(Decimal::from_str("10.005")?), Decimal::from_str("10.01")?);
    assert_eq!(monetary::round(Decimal::from_str("10.004")?), Decimal::from_str("10.00")?);
    assert_eq!(monetary::round(Decimal::from_str("-2.345")?), Decimal::from_str("-2.35")?);

    Ok(())
}
