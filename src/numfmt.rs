//! Currency formatting for amount cells.
//!
//! The grid never interprets formatted strings; it only places them into
//! labels or editable fields. Any `Fn(f64) -> String` can act as a formatter.

/// Turns a numeric cell value into its display string.
pub trait CurrencyFormatter {
    fn format(&self, value: f64) -> String;
}

impl<F> CurrencyFormatter for F
where
    F: Fn(f64) -> String,
{
    fn format(&self, value: f64) -> String {
        self(value)
    }
}

/// Fixed-precision money format with thousands separators.
///
/// `MoneyFormat { symbol: "$".into(), decimals: 2 }` formats `-1234.5` as
/// `-$1,234.50`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoneyFormat {
    /// Prefix placed after the sign (empty for none)
    pub symbol: String,
    /// Digits after the decimal point (capped at 10)
    pub decimals: usize,
}

impl Default for MoneyFormat {
    fn default() -> Self {
        Self {
            symbol: String::new(),
            decimals: 2,
        }
    }
}

impl MoneyFormat {
    pub fn with_symbol(symbol: impl Into<String>, decimals: usize) -> Self {
        Self {
            symbol: symbol.into(),
            decimals,
        }
    }
}

impl CurrencyFormatter for MoneyFormat {
    fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }
        let body = format_with_thousands(value.abs(), self.decimals);
        // "-0.00" reads badly; only show the sign if something non-zero survives rounding
        let is_negative = value < 0.0 && body.bytes().any(|b| matches!(b, b'1'..=b'9'));
        if is_negative {
            format!("-{}{body}", self.symbol)
        } else {
            format!("{}{body}", self.symbol)
        }
    }
}

/// Format a non-negative number with thousands separators.
fn format_with_thousands(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.prec$}", value, prec = decimals.min(10));
    let mut parts = formatted.split('.');

    // split() always returns at least one element for a non-empty string
    let int_part = parts.next().unwrap_or("0");
    let dec_part = parts.next();

    let mut with_sep = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            with_sep.push(',');
        }
        with_sep.push(c);
    }
    let int_with_sep: String = with_sep.chars().rev().collect();

    match dec_part {
        Some(dec) => format!("{int_with_sep}.{dec}"),
        None => int_with_sep,
    }
}
