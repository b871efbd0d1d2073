use chrono::{NaiveDate, NaiveTime};
use iso_currency::Currency;
use num_format::Locale;

use crate::entities::{AmountFormatter, RawAmount};

use super::utils::{
    format_amount, parse_calendar_date, split_locale_tag, symbol_placement, SymbolPlacement,
};

pub const FALLBACK_LOCALE: &str = "en-US";
pub const DEFAULT_CURRENCY_CODE: &str = "USD";

/// Locale- and currency-aware formatting of dates and amounts.
///
/// Both operations are total: input that cannot be parsed is returned as
/// given, and a locale or currency that cannot be formatted falls back to
/// `en-US` / `USD`.
#[derive(Debug, Clone)]
pub struct Formatter {
    locale: String,
    currency_code: String,
}

impl Formatter {
    pub fn new(locale: impl Into<String>, currency_code: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            currency_code: currency_code.into(),
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn currency_code(&self) -> &str {
        &self.currency_code
    }

    /// Renders an ISO date in the locale's medium style (`Jan 5, 2025` for
    /// `en-US`). Absent input stays absent; unparseable input is returned
    /// unchanged.
    pub fn format_date(&self, iso_date: Option<&str>) -> Option<String> {
        let iso_date = iso_date?;
        Some(match parse_calendar_date(iso_date) {
            Some(date) => self.medium_date(date),
            None => iso_date.to_string(),
        })
    }

    /// Renders an amount as currency. Values that are not finite numbers are
    /// returned unchanged. Never adds a sign beyond the value's own.
    pub fn format_amount(&self, value: &RawAmount) -> String {
        let amount = match value {
            RawAmount::Number(n) if n.is_finite() => *n,
            RawAmount::Number(_) => return value.to_string(),
            RawAmount::Text(s) => match s.trim().parse::<f64>() {
                Ok(n) if n.is_finite() => n,
                _ => return s.clone(),
            },
        };
        self.localized_currency(amount).unwrap_or_else(|| {
            format_amount(amount, Currency::USD, &Locale::en, SymbolPlacement::Before)
        })
    }

    fn localized_currency(&self, amount: f64) -> Option<String> {
        let currency = Currency::from_code(&self.currency_code.trim().to_ascii_uppercase())?;
        let (language, region) = split_locale_tag(&self.locale);
        let locale = region
            .as_ref()
            .and_then(|r| Locale::from_name(format!("{}-{}", language, r)).ok())
            .or_else(|| Locale::from_name(&language).ok())?;
        let placement = symbol_placement(&language, region.as_deref());
        Some(format_amount(amount, currency, &locale, placement))
    }

    fn medium_date(&self, date: NaiveDate) -> String {
        let (language, region) = split_locale_tag(&self.locale);
        let region = region.unwrap_or_else(|| {
            match language.as_str() {
                "en" => "US",
                "ja" => "JP",
                "zh" => "CN",
                "ko" => "KR",
                other => other,
            }
            .to_ascii_uppercase()
        });
        let (locale, pattern) = match chrono::Locale::try_from(
            format!("{}_{}", language, region).as_str(),
        ) {
            Ok(locale) => (locale, medium_date_pattern(&language, &region)),
            Err(_) => (chrono::Locale::en_US, medium_date_pattern("en", "US")),
        };
        // Some locales pad abbreviated month names; collapse the padding.
        date.and_time(NaiveTime::MIN)
            .and_utc()
            .format_localized(pattern, locale)
            .to_string()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl AmountFormatter for Formatter {
    fn format_date(&self, iso_date: Option<&str>) -> Option<String> {
        Formatter::format_date(self, iso_date)
    }

    fn format_amount(&self, value: &RawAmount) -> String {
        Formatter::format_amount(self, value)
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(FALLBACK_LOCALE, DEFAULT_CURRENCY_CODE)
    }
}

fn medium_date_pattern(language: &str, region: &str) -> &'static str {
    match (language, region) {
        ("en", "US") => "%b %-d, %Y",
        ("de", _) => "%d.%m.%Y",
        ("ja" | "zh", _) => "%Y/%m/%d",
        ("ko", _) => "%Y. %-m. %-d.",
        _ => "%-d %b %Y",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn us() -> Formatter {
        Formatter::new("en-US", "USD")
    }

    #[test]
    fn formats_numbers_and_numeric_strings() {
        assert_eq!(us().format_amount(&RawAmount::Number(1234.5)), "$1,234.50");
        assert_eq!(us().format_amount(&"99.9".into()), "$99.90");
        assert_eq!(us().format_amount(&" 7 ".into()), "$7.00");
        assert_eq!(us().format_amount(&RawAmount::Number(-12.0)), "-$12.00");
    }

    #[test]
    fn non_numeric_amounts_pass_through() {
        assert_eq!(us().format_amount(&"N/A".into()), "N/A");
        assert_eq!(us().format_amount(&"1,000".into()), "1,000");
        assert_eq!(us().format_amount(&"".into()), "");
        assert_eq!(us().format_amount(&"NaN".into()), "NaN");
    }

    #[test]
    fn german_locale_uses_its_separators() {
        let formatter = Formatter::new("de-DE", "EUR");
        assert_eq!(formatter.format_amount(&RawAmount::Number(1234.5)), "1.234,50 €");
    }

    #[test]
    fn japanese_locale_puts_yen_symbol_first() {
        let formatter = Formatter::new("ja-JP", "JPY");
        assert_eq!(formatter.format_amount(&RawAmount::Number(1234567.89)), "¥1,234,568");
    }

    #[test]
    fn brazilian_locale_puts_real_symbol_first() {
        let formatter = Formatter::new("pt-BR", "BRL");
        assert_eq!(
            formatter.format_amount(&RawAmount::Number(1234567.89)),
            "R$ 1.234.567,89"
        );
        assert_eq!(formatter.format_amount(&RawAmount::Number(-5.0)), "-R$ 5,00");
    }

    #[test]
    fn unsupported_locale_falls_back_to_us_dollars() {
        let formatter = Formatter::new("zz-QQ", "EUR");
        assert_eq!(formatter.format_amount(&RawAmount::Number(5.0)), "$5.00");
    }

    #[test]
    fn unknown_currency_falls_back_to_us_dollars() {
        let formatter = Formatter::new("de-DE", "???");
        assert_eq!(formatter.format_amount(&RawAmount::Number(5.0)), "$5.00");
    }

    #[test]
    fn formats_date_without_day_shift() {
        assert_eq!(us().format_date(Some("2025-01-05")).as_deref(), Some("Jan 5, 2025"));
        assert_eq!(
            us().format_date(Some("2025-01-05T00:00:00.000Z")).as_deref(),
            Some("Jan 5, 2025")
        );
        assert_eq!(
            us().format_date(Some("2025-01-05T23:59:59-11:00")).as_deref(),
            Some("Jan 5, 2025")
        );
    }

    #[test]
    fn formats_date_per_locale() {
        assert_eq!(
            Formatter::new("en-GB", "GBP").format_date(Some("2025-12-31")).as_deref(),
            Some("31 Dec 2025")
        );
        assert_eq!(
            Formatter::new("de-DE", "EUR").format_date(Some("2025-01-05")).as_deref(),
            Some("05.01.2025")
        );
        assert_eq!(
            Formatter::new("ja-JP", "JPY").format_date(Some("2025-01-05")).as_deref(),
            Some("2025/01/05")
        );
        assert_eq!(
            Formatter::new("ja", "JPY").format_date(Some("2025-01-05")).as_deref(),
            Some("2025/01/05")
        );
        assert_eq!(
            Formatter::new("pt-BR", "BRL").format_date(Some("2025-01-05")).as_deref(),
            Some("5 jan 2025")
        );
        assert_eq!(
            Formatter::new("en", "USD").format_date(Some("2025-03-09")).as_deref(),
            Some("Mar 9, 2025")
        );
        assert_eq!(
            Formatter::new("zz-QQ", "USD").format_date(Some("2025-01-05")).as_deref(),
            Some("Jan 5, 2025")
        );
    }

    #[test]
    fn unparseable_dates_pass_through() {
        assert_eq!(us().format_date(None), None);
        assert_eq!(us().format_date(Some("soon")).as_deref(), Some("soon"));
        assert_eq!(us().format_date(Some("2025-13-01")).as_deref(), Some("2025-13-01"));
    }
}
