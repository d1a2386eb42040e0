//! Currency display formatting

use paydash_config::{CurrencyConfig, SymbolPosition};

/// How a currency amount is rendered for one locale/currency pair
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyStyle {
    /// Currency symbol
    pub symbol: String,
    /// Symbol before or after the number
    pub symbol_position: SymbolPosition,
    /// Space between symbol and number (es-AR style)
    pub symbol_spacing: bool,
    /// Thousands separator
    pub thousands_separator: char,
    /// Decimal separator
    pub decimal_separator: char,
    /// Fraction digits, always rendered in full
    pub decimal_places: usize,
}

impl CurrencyStyle {
    /// Argentine peso rendering: `$ 1.234,56`
    pub fn es_ar() -> Self {
        Self {
            symbol: "$".to_string(),
            symbol_position: SymbolPosition::Before,
            symbol_spacing: true,
            thousands_separator: '.',
            decimal_separator: ',',
            decimal_places: 2,
        }
    }

    /// US dollar rendering: `$1,234.56`
    pub fn en_us() -> Self {
        Self {
            symbol: "$".to_string(),
            symbol_position: SymbolPosition::Before,
            symbol_spacing: false,
            thousands_separator: ',',
            decimal_separator: '.',
            decimal_places: 2,
        }
    }

    /// Resolve a style from a locale tag and currency code; unknown pairs
    /// fall back to the dashboard default (es-AR)
    pub fn for_locale(locale: &str, currency: &str) -> Self {
        match (locale, currency) {
            ("en-US", _) | (_, "USD") => Self::en_us(),
            _ => Self::es_ar(),
        }
    }

    /// Build a style from the currency configuration section
    pub fn from_config(config: &CurrencyConfig) -> Self {
        Self {
            symbol: config.symbol.clone(),
            symbol_position: config.symbol_position,
            symbol_spacing: config.symbol_spacing,
            thousands_separator: config.thousands_separator.chars().next().unwrap_or('.'),
            decimal_separator: config.decimal_separator.chars().next().unwrap_or(','),
            decimal_places: config.decimal_places as usize,
        }
    }
}

impl Default for CurrencyStyle {
    fn default() -> Self {
        Self::es_ar()
    }
}

/// Format a value as a locale currency string with the style's full number
/// of fraction digits
pub fn format_currency(value: f64, style: &CurrencyStyle) -> String {
    let negative = value < 0.0;
    let rendered = format!("{:.*}", style.decimal_places, value.abs());
    let (integer, decimals) = match rendered.split_once('.') {
        Some((integer, decimals)) => (integer, decimals),
        None => (rendered.as_str(), ""),
    };

    let mut number = group_digits(integer, style.thousands_separator);
    if !decimals.is_empty() {
        number.push(style.decimal_separator);
        number.push_str(decimals);
    }

    let spacing = if style.symbol_spacing { " " } else { "" };
    let formatted = match style.symbol_position {
        SymbolPosition::Before => format!("{}{}{}", style.symbol, spacing, number),
        SymbolPosition::After => format!("{}{}{}", number, spacing, style.symbol),
    };

    if negative {
        format!("-{}", formatted)
    } else {
        formatted
    }
}

/// Split a formatted currency string into integer and decimal parts.
///
/// Whitespace is stripped first (locale formatters place non-breaking
/// spaces after the symbol); a missing decimal part defaults to `"00"`.
pub fn split_currency_parts(formatted: &str, decimal_separator: char) -> (String, String) {
    let cleaned: String = formatted.chars().filter(|c| !c.is_whitespace()).collect();
    match cleaned.split_once(decimal_separator) {
        Some((integer, decimals)) => (integer.to_string(), decimals.to_string()),
        None => (cleaned, "00".to_string()),
    }
}

/// Insert a thousands separator every three digits
fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    let mut count = 0;
    for c in digits.chars().rev() {
        if count == 3 {
            grouped.push(separator);
            count = 0;
        }
        grouped.push(c);
        count += 1;
    }
    grouped.chars().rev().collect()
}
