//! Currency metadata: a bundled ISO 4217 subset plus code lookup.
//!
//! Metadata here covers what display and scaling need (minor-unit exponent,
//! symbol). Exchange rates and conversion are out of scope: amounts never
//! move between currencies, they are only relabeled.

/// Currency metadata.
///
/// Values are `'static` handles: the bundled set lives in this module, and
/// callers with a non-ISO currency can declare their own
/// `static MYC: Currency = ...` and pass it to
/// [`Money::with_currency`](crate::Money::with_currency).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Currency {
    /// ISO 4217-style alphabetic code, e.g. `"USD"`.
    pub code: &'static str,
    /// Human-readable name.
    pub name: &'static str,
    /// Minor units per major unit, as a power of ten (2 for cents).
    pub exponent: u32,
    /// Display symbol; empty when the currency has no conventional symbol.
    pub symbol: &'static str,
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code)
    }
}

macro_rules! iso_currencies {
    ($($ident:ident => ($name:literal, $exp:literal, $sym:literal)),* $(,)?) => {
        $(
            pub const $ident: Currency = Currency {
                code: stringify!($ident),
                name: $name,
                exponent: $exp,
                symbol: $sym,
            };
        )*

        /// The bundled ISO currency set.
        pub static ISO: &[&Currency] = &[$(&$ident),*];
    };
}

iso_currencies! {
    AUD => ("Australian Dollar", 2, "$"),
    BHD => ("Bahraini Dinar", 3, ".د.ب"),
    BRL => ("Brazilian Real", 2, "R$"),
    CAD => ("Canadian Dollar", 2, "$"),
    CHF => ("Swiss Franc", 2, ""),
    CLP => ("Chilean Peso", 0, "$"),
    CNY => ("Chinese Yuan", 2, "¥"),
    DKK => ("Danish Krone", 2, "kr"),
    EUR => ("Euro", 2, "€"),
    GBP => ("Pound Sterling", 2, "£"),
    HKD => ("Hong Kong Dollar", 2, "HK$"),
    IDR => ("Indonesian Rupiah", 2, "Rp"),
    INR => ("Indian Rupee", 2, "₹"),
    JPY => ("Japanese Yen", 0, "¥"),
    KRW => ("South Korean Won", 0, "₩"),
    KWD => ("Kuwaiti Dinar", 3, "د.ك"),
    MXN => ("Mexican Peso", 2, "$"),
    NOK => ("Norwegian Krone", 2, "kr"),
    NZD => ("New Zealand Dollar", 2, "$"),
    PLN => ("Polish Złoty", 2, "zł"),
    SEK => ("Swedish Krona", 2, "kr"),
    SGD => ("Singapore Dollar", 2, "S$"),
    THB => ("Thai Baht", 2, "฿"),
    TRY => ("Turkish Lira", 2, "₺"),
    USD => ("US Dollar", 2, "$"),
    VND => ("Vietnamese Dong", 0, "₫"),
    ZAR => ("South African Rand", 2, "R"),
}

/// Look up a bundled currency by code (case-insensitive).
pub fn find(code: &str) -> Option<&'static Currency> {
    ISO.iter()
        .copied()
        .find(|c| c.code.eq_ignore_ascii_case(code.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_is_case_insensitive() {
        assert_eq!(find("usd"), Some(&USD));
        assert_eq!(find("EUR"), Some(&EUR));
        assert_eq!(find(" jpy "), Some(&JPY));
    }

    #[test]
    fn find_rejects_unknown_codes() {
        assert_eq!(find("XYZ"), None);
        assert_eq!(find(""), None);
    }

    #[test]
    fn bundled_codes_are_unique() {
        let mut codes: Vec<&str> = ISO.iter().map(|c| c.code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), ISO.len());
    }

    #[test]
    fn zero_exponent_currencies_have_no_minor_units() {
        assert_eq!(JPY.exponent, 0);
        assert_eq!(KRW.exponent, 0);
        assert_eq!(BHD.exponent, 3);
    }
}
