//! Rendering of monetary values as display strings.

use crate::currency::Currency;
use crate::locale::{Locale, SymbolPosition};
use crate::money::Money;

/// Render according to the value's locale, or plainly when it has none.
pub(crate) fn format_money(value: &Money) -> String {
    match value.locale() {
        Some(locale) => localized(value, locale),
        None => plain(value),
    }
}

/// Locale-free rendering: digits, a `.` decimal point when the currency has
/// minor units, no grouping, no symbol.
fn plain(value: &Money) -> String {
    let (major, minor) = split_units(value.amount(), value.currency());
    let mut out = String::new();
    if value.amount() < 0 {
        out.push('-');
    }
    out.push_str(&major);
    if !minor.is_empty() {
        out.push('.');
        out.push_str(&minor);
    }
    out
}

fn localized(value: &Money, locale: &Locale) -> String {
    let currency = value.currency();
    let (major, minor) = split_units(value.amount(), currency);

    let mut number = group(&major, locale.grouping_separator);
    if !minor.is_empty() {
        number.push(locale.decimal_separator);
        number.push_str(&minor);
    }

    let body = if currency.symbol.is_empty() {
        // Symbol-less currencies render with their code, the way ICU does.
        format!("{} {}", currency.code, number)
    } else {
        match locale.symbol_position {
            SymbolPosition::Before => format!("{}{}", currency.symbol, number),
            SymbolPosition::BeforeSpaced => format!("{} {}", currency.symbol, number),
            SymbolPosition::AfterSpaced => format!("{} {}", number, currency.symbol),
        }
    };

    if value.amount() < 0 {
        format!("-{body}")
    } else {
        body
    }
}

/// Split an amount of minor units into unsigned major digits and a
/// zero-padded minor part sized by the currency exponent.
fn split_units(amount: i128, currency: &Currency) -> (String, String) {
    let digits = amount.unsigned_abs().to_string();
    let exponent = currency.exponent as usize;
    if exponent == 0 {
        return (digits, String::new());
    }

    if digits.len() <= exponent {
        let minor = format!("{digits:0>exponent$}");
        ("0".to_string(), minor)
    } else {
        let split = digits.len() - exponent;
        (digits[..split].to_string(), digits[split..].to_string())
    }
}

/// Insert a grouping separator every three digits, counted from the right.
fn group(digits: &str, separator: char) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
