// Formatting conventions shared by the currency formatter.
// Plain data; lookups live in `format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPlacement {
    // "$1,234.56", or "R$ 1.234,56" when spaced
    Prefix { spaced: bool },
    // "1.234,56 €"
    Suffix,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleConventions {
    pub tag: &'static str,
    pub decimal_separator: char,
    pub group_separator: char,
    pub placement: SymbolPlacement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyInfo {
    pub code: &'static str,
    pub symbol: &'static str,
    // Shorter symbol used in the locales where the currency is at home (USD: "$")
    pub native_symbol: &'static str,
    pub native_locales: &'static [&'static str],
    pub minor_digits: usize,
}

impl CurrencyInfo {
    pub fn symbol_for(&self, locale: &LocaleConventions) -> &'static str {
        if self.native_locales.contains(&locale.tag) {
            self.native_symbol
        } else {
            self.symbol
        }
    }
}

pub const NBSP: char = '\u{00A0}';
pub const NARROW_NBSP: char = '\u{202F}';

pub static LOCALES: &[LocaleConventions] = &[
    LocaleConventions { tag: "es-ES", decimal_separator: ',', group_separator: '.', placement: SymbolPlacement::Suffix },
    LocaleConventions { tag: "en-US", decimal_separator: '.', group_separator: ',', placement: SymbolPlacement::Prefix { spaced: false } },
    LocaleConventions { tag: "en-GB", decimal_separator: '.', group_separator: ',', placement: SymbolPlacement::Prefix { spaced: false } },
    LocaleConventions { tag: "de-DE", decimal_separator: ',', group_separator: '.', placement: SymbolPlacement::Suffix },
    LocaleConventions { tag: "fr-FR", decimal_separator: ',', group_separator: NARROW_NBSP, placement: SymbolPlacement::Suffix },
    LocaleConventions { tag: "pt-BR", decimal_separator: ',', group_separator: '.', placement: SymbolPlacement::Prefix { spaced: true } },
    LocaleConventions { tag: "ja-JP", decimal_separator: '.', group_separator: ',', placement: SymbolPlacement::Prefix { spaced: false } },
];

pub static CURRENCIES: &[CurrencyInfo] = &[
    CurrencyInfo { code: "EUR", symbol: "€", native_symbol: "€", native_locales: &[], minor_digits: 2 },
    CurrencyInfo { code: "USD", symbol: "US$", native_symbol: "$", native_locales: &["en-US"], minor_digits: 2 },
    CurrencyInfo { code: "GBP", symbol: "£", native_symbol: "£", native_locales: &[], minor_digits: 2 },
    CurrencyInfo { code: "JPY", symbol: "¥", native_symbol: "\u{ffe5}", native_locales: &["ja-JP"], minor_digits: 0 },
    CurrencyInfo { code: "BRL", symbol: "R$", native_symbol: "R$", native_locales: &[], minor_digits: 2 },
    CurrencyInfo { code: "CHF", symbol: "CHF", native_symbol: "CHF", native_locales: &[], minor_digits: 2 },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_have_unique_keys() {
        for (i, locale) in LOCALES.iter().enumerate() {
            assert!(LOCALES[i + 1..].iter().all(|other| other.tag != locale.tag), "duplicate locale {}", locale.tag);
        }
        for (i, currency) in CURRENCIES.iter().enumerate() {
            assert!(CURRENCIES[i + 1..].iter().all(|other| other.code != currency.code), "duplicate currency {}", currency.code);
        }
    }

    #[test]
    fn test_symbol_for_native_locale() {
        let usd = CURRENCIES.iter().find(|c| c.code == "USD").unwrap();
        let en_us = LOCALES.iter().find(|l| l.tag == "en-US").unwrap();
        let es_es = LOCALES.iter().find(|l| l.tag == "es-ES").unwrap();
        assert_eq!(usd.symbol_for(en_us), "$");
        assert_eq!(usd.symbol_for(es_es), "US$");
    }
}
