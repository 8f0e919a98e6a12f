// Locale-aware currency formatting
use std::borrow::Cow;

use crate::error::{KompKitError, Result};
use crate::models::{CurrencyInfo, LocaleConventions, SymbolPlacement, CURRENCIES, LOCALES, NBSP};

pub const DEFAULT_CURRENCY: &str = "EUR";
pub const DEFAULT_LOCALE: &str = "es-ES";

// Minor digits for well-formed codes missing from the currency table
const FALLBACK_MINOR_DIGITS: usize = 2;

/// Formats `amount` as a currency string for `locale`.
///
/// ```
/// use kompkit_core::format_currency;
///
/// assert_eq!(format_currency(1234.56, "EUR", "es-ES").unwrap(), "1.234,56\u{a0}€");
/// assert_eq!(format_currency(1234.56, "USD", "en-US").unwrap(), "$1,234.56");
/// assert_eq!(format_currency(1000.0, "JPY", "ja-JP").unwrap(), "\u{ffe5}1,000");
/// ```
pub fn format_currency(amount: f64, currency_code: &str, locale: &str) -> Result<String> {
    if !amount.is_finite() {
        return Err(KompKitError::InvalidArgument(format!("amount must be a finite number (got {})", amount)));
    }
    let conventions = find_locale(locale)?;
    let (code, currency) = find_currency(currency_code)?;

    let symbol: Cow<'_, str> = match currency {
        Some(info) => Cow::Borrowed(info.symbol_for(conventions)),
        None => Cow::Owned(code),
    };
    let minor_digits = currency.map_or(FALLBACK_MINOR_DIGITS, |info| info.minor_digits);

    let number = format_decimal(amount.abs(), minor_digits, conventions);
    // Sign kept even when the digits round to zero ("-0,00 €"); -0.0 is not < 0.0
    let sign = if amount < 0.0 {
        "-"
    } else {
        ""
    };

    Ok(match conventions.placement {
        SymbolPlacement::Prefix { spaced: true } => format!("{}{}{}{}", sign, symbol, NBSP, number),
        SymbolPlacement::Prefix { spaced: false } => format!("{}{}{}", sign, symbol, number),
        SymbolPlacement::Suffix => format!("{}{}{}{}", sign, number, NBSP, symbol),
    })
}

/// Currency formatter with the kit defaults (EUR, es-ES) that can be
/// reconfigured before use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    currency: String,
    locale: String,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl CurrencyFormat {
    pub fn currency(mut self, currency_code: &str) -> Self {
        self.currency = currency_code.to_string();
        self
    }

    pub fn locale(mut self, locale: &str) -> Self {
        self.locale = locale.to_string();
        self
    }

    pub fn format(&self, amount: f64) -> Result<String> {
        format_currency(amount, &self.currency, &self.locale)
    }
}

// Accepts "es-ES", "es_ES", "ES-es"...
fn find_locale(locale: &str) -> Result<&'static LocaleConventions> {
    let normalized = locale.trim().replace('_', "-");
    LOCALES
        .iter()
        .find(|conventions| conventions.tag.eq_ignore_ascii_case(&normalized))
        .ok_or_else(|| KompKitError::UnsupportedLocale(locale.to_string()))
}

// Returns the upper-cased code and its table entry, if any.
fn find_currency(currency_code: &str) -> Result<(String, Option<&'static CurrencyInfo>)> {
    let code = currency_code.trim();
    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(KompKitError::InvalidCurrencyCode(currency_code.to_string()));
    }
    let code = code.to_ascii_uppercase();
    let info = CURRENCIES.iter().find(|info| info.code == code);
    Ok((code, info))
}

// Formats a non-negative value with grouping and the locale's decimal separator
fn format_decimal(value: f64, minor_digits: usize, conventions: &LocaleConventions) -> String {
    let fixed = format!("{:.*}", minor_digits, value);
    let (integer, fraction) = match fixed.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::with_capacity(fixed.len() + integer.len() / 3 * 3);
    let len = integer.len();
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(conventions.group_separator);
        }
        out.push(digit);
    }
    if let Some(fraction) = fraction {
        out.push(conventions.decimal_separator);
        out.push_str(fraction);
    }
    out
}
