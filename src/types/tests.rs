use super::CashAmount;
use anyhow::Result;
use std::str::FromStr;

#[test]
fn test_cash_amount_successfully_parses_valid_strings() -> Result<()> {
    let test_cases = vec![
        ("1,234.56", "1234.56"),
        ("1,000.00", "1000.00"),
        ("12,345,678.90", "12345678.90"),
        ("1234.56", "1234.56"),
        ("100", "100"),
        ("-1,500.25", "-1500.25"),
        ("  1,000.00  ", "1000.00"),
        ("0.55", "0.55"),
    ];

    for (input_string, expected_output) in test_cases {
        assert_eq!(CashAmount::from_str(input_string)?.to_string(), expected_output);
    }

    Ok(())
}

#[test]
fn test_cash_amount_fails_to_parse_invalid_strings() {
    assert!(CashAmount::from_str("").is_err());
    assert!(CashAmount::from_str("   ").is_err());
    assert!(CashAmount::from_str("abc").is_err());
    assert!(CashAmount::from_str("1.2.3").is_err());
    assert!(CashAmount::from_str("$100").is_err());
}

#[test]
fn test_cash_amount_preserves_source_scale() -> Result<()> {
    assert_eq!(CashAmount::from_str("10")?.to_string(), "10");
    assert_eq!(CashAmount::from_str("10.0")?.to_string(), "10.0");
    assert_eq!(CashAmount::from_str("10.00")?.to_string(), "10.00");

    Ok(())
}
