//! Tax value formatting.
//!
//! Tax figures arrive from the property data source either as numbers or as
//! strings that may already be formatted. A zero figure is treated as
//! absent and rendered `"N/A"`, the same as a figure that cannot be read.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::TaxValue;

/// Rendered for missing, zero, or unreadable figures.
pub const NOT_APPLICABLE: &str = "N/A";

/// Formats a tax figure for display.
///
/// 1. The figure is parsed as an integer. Text has `$` and `,` removed and
///    its leading integer read; numbers are truncated toward zero.
/// 2. An unreadable or zero figure gives `"N/A"`.
/// 3. Numbers are rendered as grouped dollars, always led by `$`.
/// 4. Text that starts with an optional `$` and a digit is returned as-is.
/// 5. Any other text gives `"N/A"`.
///
/// # Example
///
/// ```
/// use assessing_core::calculation::format_tax_value;
/// use assessing_core::models::TaxValue;
///
/// assert_eq!(format_tax_value(&TaxValue::from(1250_i64)), "$1,250");
/// assert_eq!(format_tax_value(&TaxValue::from("$9,427.20")), "$9,427.20");
/// assert_eq!(format_tax_value(&TaxValue::from(0_i64)), "N/A");
/// assert_eq!(format_tax_value(&TaxValue::from("abc")), "N/A");
/// assert_eq!(format_tax_value(&TaxValue::from(f64::NAN)), "N/A");
/// ```
pub fn format_tax_value(value: &TaxValue) -> String {
    match value {
        TaxValue::Number(number) => match Decimal::from_f64(*number) {
            Some(amount) if !amount.trunc().is_zero() => format_currency(amount),
            _ => NOT_APPLICABLE.to_string(),
        },
        TaxValue::Text(text) => match parse_leading_integer(text) {
            Some(parsed) if parsed != 0 && looks_like_currency(text) => text.clone(),
            _ => NOT_APPLICABLE.to_string(),
        },
    }
}

/// Formats an optional figure, rendering a missing one as `"N/A"`.
pub fn format_optional_tax_value(value: Option<&TaxValue>) -> String {
    value.map_or_else(|| NOT_APPLICABLE.to_string(), format_tax_value)
}

/// Renders an amount as grouped dollars.
///
/// Whole amounts have no cents; other amounts are rounded to two decimals.
/// A negative amount keeps its sign after the `$`.
///
/// # Example
///
/// ```
/// use assessing_core::calculation::format_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_currency(Decimal::new(1250, 0)), "$1,250");
/// assert_eq!(format_currency(Decimal::new(371640, 2)), "$3,716.40");
/// assert_eq!(format_currency(Decimal::new(-1250, 0)), "$-1,250");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let sign = if amount.is_sign_negative() && !amount.is_zero() {
        "-"
    } else {
        ""
    };
    let rounded = amount
        .abs()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    let whole = rounded.trunc();
    let grouped = group_thousands(&whole.to_string());

    let cents = rounded - whole;
    if cents.is_zero() {
        format!("${}{}", sign, grouped)
    } else {
        let cents = (cents * Decimal::ONE_HUNDRED).trunc().to_string();
        format!("${}{}.{:0>2}", sign, grouped, cents)
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Reads the leading integer of a figure once `$` and `,` are removed.
///
/// Leading whitespace and a sign are accepted; parsing stops at the first
/// non-digit. `None` if no digit leads.
fn parse_leading_integer(text: &str) -> Option<i64> {
    let cleaned: String = text.chars().filter(|c| *c != '$' && *c != ',').collect();
    let trimmed = cleaned.trim_start();

    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }

    // Saturate rather than fail on very long digit runs; only zero-ness matters.
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Whether text starts with an optional `$` followed by a digit.
fn looks_like_currency(text: &str) -> bool {
    let rest = text.strip_prefix('$').unwrap_or(text);
    rest.chars().next().is_some_and(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(value: f64) -> String {
        format_tax_value(&TaxValue::Number(value))
    }

    fn text(value: &str) -> String {
        format_tax_value(&TaxValue::from(value))
    }

    #[test]
    fn test_zero_is_not_applicable() {
        assert_eq!(number(0.0), "N/A");
        assert_eq!(text("0"), "N/A");
        assert_eq!(text("$0.00"), "N/A");
    }

    #[test]
    fn test_fraction_below_one_dollar_is_not_applicable() {
        assert_eq!(number(0.75), "N/A");
        assert_eq!(number(-0.5), "N/A");
    }

    #[test]
    fn test_numbers_are_grouped_dollars() {
        assert_eq!(number(1250.0), "$1,250");
        assert_eq!(number(5.0), "$5");
        assert_eq!(number(1234567.0), "$1,234,567");
        assert_eq!(number(3716.4), "$3,716.40");
    }

    #[test]
    fn test_negative_numbers_keep_sign_after_dollar() {
        assert_eq!(number(-1250.0), "$-1,250");
        assert_eq!(number(-3716.4), "$-3,716.40");
        assert!(number(-1_000_000.0).starts_with('$'));
    }

    #[test]
    fn test_preformatted_text_is_unchanged() {
        assert_eq!(text("$9,427.20"), "$9,427.20");
        assert_eq!(text("9427.20"), "9427.20");
        assert_eq!(text("$1,250"), "$1,250");
    }

    #[test]
    fn test_unreadable_text_is_not_applicable() {
        assert_eq!(text("abc"), "N/A");
        assert_eq!(text(""), "N/A");
        assert_eq!(text("$"), "N/A");
    }

    #[test]
    fn test_text_not_starting_with_dollar_or_digit_is_not_applicable() {
        // Reads as 1250 but is not shaped like a currency string
        assert_eq!(text(" $1,250"), "N/A");
        assert_eq!(text("-1250"), "N/A");
    }

    #[test]
    fn test_non_finite_numbers_are_not_applicable() {
        assert_eq!(number(f64::NAN), "N/A");
        assert_eq!(number(f64::INFINITY), "N/A");
        assert_eq!(number(f64::NEG_INFINITY), "N/A");
    }

    #[test]
    fn test_missing_figure_is_not_applicable() {
        assert_eq!(format_optional_tax_value(None), "N/A");
        assert_eq!(
            format_optional_tax_value(Some(&TaxValue::Number(42.0))),
            "$42"
        );
    }

    #[test]
    fn test_parse_leading_integer_like_parse_int() {
        assert_eq!(parse_leading_integer("$9,427.20"), Some(9427));
        assert_eq!(parse_leading_integer("  12abc"), Some(12));
        assert_eq!(parse_leading_integer("-7"), Some(-7));
        assert_eq!(parse_leading_integer("abc"), None);
    }

    #[test]
    fn test_currency_rounds_to_cents() {
        assert_eq!(format_currency(Decimal::new(12345, 3)), "$12.35");
        assert_eq!(format_currency(Decimal::new(99999, 3)), "$100");
        assert_eq!(format_currency(Decimal::new(105, 2)), "$1.05");
    }
}
