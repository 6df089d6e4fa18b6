// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Field validation for transaction input.
//!
//! Every function here is a pure parse-or-fail step over raw text. Retrying
//! on failure is left to the caller (see [`crate::prompt::ask`]).

use crate::models::Category;
use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Invalid date format '{input}'. Please enter the date in {hint} format.")]
    Format { input: String, hint: String },
    #[error("Invalid amount '{input}': {reason}")]
    Range { input: String, reason: &'static str },
    #[error("Invalid category '{0}'. Please enter 'I' for Income or 'E' for Expense.")]
    InvalidCategory(String),
}

/// Parse a date against `format`. With `allow_default`, empty input means today.
pub fn parse_date(
    input: &str,
    allow_default: bool,
    format: &str,
) -> Result<NaiveDate, FieldError> {
    parse_date_on(input, allow_default, format, Local::now().date_naive())
}

pub fn parse_date_on(
    input: &str,
    allow_default: bool,
    format: &str,
    today: NaiveDate,
) -> Result<NaiveDate, FieldError> {
    let s = input.trim();
    if allow_default && s.is_empty() {
        return Ok(today);
    }
    NaiveDate::parse_from_str(s, format).map_err(|_| FieldError::Format {
        input: s.to_string(),
        hint: format_hint(format),
    })
}

/// Largest accepted amount. Keeps any realistic number of summed records far
/// below `Decimal::MAX`.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xA4C6_8000, 0x38D7E, 0, false, 0); // 1e15

/// `Decimal` keeps at most 28 fractional digits; more would be rounded away.
pub const MAX_SCALE: usize = 28;

pub fn parse_amount(input: &str) -> Result<Decimal, FieldError> {
    let s = input.trim();
    let range = |reason| FieldError::Range {
        input: s.to_string(),
        reason,
    };
    if let Some((_, frac)) = s.split_once('.') {
        if !s.contains(['e', 'E']) && frac.len() > MAX_SCALE {
            return Err(range("too many decimal places (max 28)"));
        }
    }
    let amount = match Decimal::from_str(s).or_else(|_| Decimal::from_scientific(s)) {
        Ok(v) => v,
        // Numeric text Decimal cannot hold (e.g. 1e-30) is a range problem,
        // not a typo.
        Err(_) => match s.parse::<f64>() {
            Ok(f) if f.is_finite() => {
                return Err(range(
                    "outside the supported range or precision (max 28 decimal places)",
                ));
            }
            _ => return Err(range("not a number")),
        },
    };
    if amount <= Decimal::ZERO {
        return Err(range("amount must be a non-negative non-zero value"));
    }
    if amount > MAX_AMOUNT {
        return Err(range("amount too large"));
    }
    Ok(amount)
}

pub fn parse_category(input: &str) -> Result<Category, FieldError> {
    let s = input.trim();
    match s.to_ascii_uppercase().as_str() {
        "I" => Ok(Category::Income),
        "E" => Ok(Category::Expense),
        _ => Err(FieldError::InvalidCategory(s.to_string())),
    }
}

pub fn parse_description(input: &str) -> String {
    input.to_string()
}

/// Human-readable form of a strftime pattern, e.g. `%d-%m-%Y` -> `dd-mm-yyyy`.
pub fn format_hint(format: &str) -> String {
    format
        .replace("%d", "dd")
        .replace("%m", "mm")
        .replace("%Y", "yyyy")
        .replace("%y", "yy")
}

#[cfg(test)]
mod tests {
    use super::*;

    const FMT: &str = "%d-%m-%Y";

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn date_round_trips_through_format() {
        for s in ["01-01-2024", "29-02-2024", "31-12-1999", "15-07-2031"] {
            let date = parse_date(s, false, FMT).unwrap();
            assert_eq!(date.format(FMT).to_string(), s);
        }
    }

    #[test]
    fn empty_date_defaults_to_today_only_when_allowed() {
        let today = d(2025, 3, 14);
        assert_eq!(parse_date_on("", true, FMT, today).unwrap(), today);
        assert_eq!(parse_date_on("   ", true, FMT, today).unwrap(), today);
        assert!(matches!(
            parse_date_on("", false, FMT, today),
            Err(FieldError::Format { .. })
        ));
    }

    #[test]
    fn date_rejects_other_layouts_and_impossible_days() {
        for s in ["2024-01-15", "15/01/2024", "30-02-2024", "tomorrow", "32-01-2024"] {
            let err = parse_date(s, true, FMT).unwrap_err();
            assert!(matches!(err, FieldError::Format { .. }), "{s} accepted");
        }
    }

    #[test]
    fn date_error_mentions_expected_layout() {
        let err = parse_date("nope", false, FMT).unwrap_err();
        assert!(err.to_string().contains("dd-mm-yyyy"));
    }

    #[test]
    fn date_honors_custom_format() {
        let date = parse_date("2024-05-06", false, "%Y-%m-%d").unwrap();
        assert_eq!(date, d(2024, 5, 6));
        assert!(parse_date("06-05-2024", false, "%Y-%m-%d").is_err());
    }

    #[test]
    fn amount_accepts_positive_decimals() {
        assert_eq!(parse_amount("100").unwrap(), Decimal::new(100, 0));
        assert_eq!(parse_amount(" 12.50 ").unwrap(), Decimal::new(1250, 2));
        assert_eq!(parse_amount("0.01").unwrap(), Decimal::new(1, 2));
        assert_eq!(parse_amount("1e3").unwrap(), Decimal::new(1000, 0));
    }

    #[test]
    fn amount_rejects_zero_negative_and_text() {
        for s in ["0", "0.00", "-5", "-0.01", "abc", "", "12,50"] {
            let err = parse_amount(s).unwrap_err();
            assert!(matches!(err, FieldError::Range { .. }), "{s} accepted");
        }
    }

    #[test]
    fn amount_is_capped() {
        assert_eq!(MAX_AMOUNT, Decimal::new(1_000_000_000_000_000, 0));
        assert_eq!(parse_amount("1000000000000000").unwrap(), MAX_AMOUNT);
        let err = parse_amount("50000000000000000000000000000").unwrap_err();
        assert_eq!(
            err,
            FieldError::Range {
                input: "50000000000000000000000000000".into(),
                reason: "amount too large"
            }
        );
    }

    #[test]
    fn amount_precision_limit_has_its_own_reason() {
        let err = parse_amount("0.00000000000000000000000000001").unwrap_err();
        assert!(err.to_string().contains("too many decimal places"), "{err}");
        let err = parse_amount("1e-30").unwrap_err();
        assert!(err.to_string().contains("max 28 decimal places"), "{err}");
        assert!(parse_amount("0.0000000000000000000000000001").is_ok());
        assert!(parse_amount("nan").unwrap_err().to_string().contains("not a number"));
    }

    #[test]
    fn category_is_case_insensitive() {
        assert_eq!(parse_category("I").unwrap(), Category::Income);
        assert_eq!(parse_category("i").unwrap(), Category::Income);
        assert_eq!(parse_category("E").unwrap(), Category::Expense);
        assert_eq!(parse_category(" e ").unwrap(), Category::Expense);
    }

    #[test]
    fn category_rejects_anything_else() {
        for s in ["", "x", "Income", "expense", "IE"] {
            assert_eq!(
                parse_category(s).unwrap_err(),
                FieldError::InvalidCategory(s.trim().to_string())
            );
        }
    }

    #[test]
    fn description_passes_through() {
        assert_eq!(parse_description(""), "");
        assert_eq!(parse_description(" rent, \"june\" "), " rent, \"june\" ");
    }
}
