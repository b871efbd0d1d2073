use std::sync::OnceLock;

use chrono::NaiveDate;
use iso_currency::Currency;
use num_format::{Grouping, Locale};
use regex::Regex;

/// Standard number decimal places for the given currency
/// (ex. JPY = 0, USD = 2).
fn decimal_places(currency: Currency) -> usize {
    currency.exponent().unwrap_or(0) as usize
}

/// Where the currency symbol goes relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SymbolPlacement {
    /// `$1,234.50`
    Before,
    /// `R$ 1.234,50`
    BeforeSpaced,
    /// `1.234,50 €`
    After,
}

/// Symbol placement of a locale's standard currency format.
pub(crate) fn symbol_placement(language: &str, region: Option<&str>) -> SymbolPlacement {
    match (language, region) {
        ("en" | "ja" | "zh" | "ko" | "he" | "th", _) => SymbolPlacement::Before,
        ("pt", Some("BR")) | ("nl", _) => SymbolPlacement::BeforeSpaced,
        _ => SymbolPlacement::After,
    }
}

/// Inserts the locale's thousands separator into a run of ASCII digits,
/// following its grouping rule (Indian grouping is 3 then 2 digits).
fn group_digits(digits: &str, locale: &Locale) -> String {
    let (first, rest) = match locale.grouping() {
        Grouping::Standard => (3, 3),
        Grouping::Indian => (3, 2),
        Grouping::Posix => return digits.to_string(),
    };
    let mut groups = Vec::new();
    let mut end = digits.len();
    let mut size = first;
    while end > size {
        groups.push(&digits[end - size..end]);
        end -= size;
        size = rest;
    }
    groups.push(&digits[..end]);
    groups.reverse();
    groups.join(locale.separator())
}

/// Format cash amount with currency symbol, correct number of decimal places,
/// and the locale's thousands separator, decimal mark and minus sign.
///
/// The sign is taken after rounding, so amounts that round to zero carry no
/// minus sign.
pub(crate) fn format_amount(
    amount: f64,
    currency: Currency,
    locale: &Locale,
    placement: SymbolPlacement,
) -> String {
    let decimal_places = decimal_places(currency);
    let fixed = format!("{:.decimal_places$}", amount.abs());
    let (integer_part, fractional_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };
    let mut number = group_digits(integer_part, locale);
    if let Some(fractional_part) = fractional_part {
        number.push_str(locale.decimal());
        number.push_str(fractional_part);
    }
    let rounds_to_zero = !fixed.bytes().any(|b| matches!(b, b'1'..=b'9'));
    let sign = if amount.is_sign_negative() && !rounds_to_zero {
        locale.minus_sign()
    } else {
        ""
    };
    let symbol = currency.symbol();
    match placement {
        SymbolPlacement::Before => format!("{}{}{}", sign, symbol, number),
        SymbolPlacement::BeforeSpaced => format!("{}{} {}", sign, symbol, number),
        SymbolPlacement::After => format!("{}{} {}", sign, number, symbol),
    }
}

/// Reads the leading `YYYY-MM-DD` of an ISO date string as a plain calendar
/// date. Time-of-day and offsets after it are ignored, so the date never
/// shifts across a timezone boundary.
pub(crate) fn parse_calendar_date(s: &str) -> Option<NaiveDate> {
    static ISO_DATE_PREFIX: OnceLock<Regex> = OnceLock::new();
    let pattern = ISO_DATE_PREFIX.get_or_init(|| {
        Regex::new(r"^\s*(\d{4})-(\d{1,2})-(\d{1,2})(?:$|[T\s])")
            .expect("hardcoded regex should be valid")
    });
    let caps = pattern.captures(s)?;
    let year = caps[1].parse::<i32>().ok()?;
    let month = caps[2].parse::<u32>().ok()?;
    let day = caps[3].parse::<u32>().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Splits a locale tag (`en-US`, `en_US.UTF-8`, `de`) into lowercase language
/// and uppercase region.
pub(crate) fn split_locale_tag(tag: &str) -> (String, Option<String>) {
    let base = tag.split(['.', '@']).next().unwrap_or_default();
    let mut parts = base.split(['-', '_']).filter(|p| !p.is_empty());
    let language = parts.next().unwrap_or_default().to_ascii_lowercase();
    let region = parts.next().map(|r| r.to_ascii_uppercase());
    (language, region)
}
