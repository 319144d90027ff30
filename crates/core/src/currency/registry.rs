//! Static currency table and code lookups.
//!
//! The table is compile-time data. Indices over it are built once on first
//! use and never change afterwards, so lookups are safe from any thread.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::Currency;

/// Position of the default currency (USD) in [`CURRENCIES`].
const DEFAULT_INDEX: usize = 0;

/// Every currency the registry knows about. USD must stay first.
static CURRENCIES: [Currency; 47] = [
    Currency::new("USD", 840, "US Dollar", "$", 2),
    Currency::new("AED", 784, "UAE Dirham", "AED", 2),
    Currency::new("ARS", 32, "Argentine Peso", "AR$", 2),
    Currency::new("AUD", 36, "Australian Dollar", "A$", 2),
    Currency::new("BHD", 48, "Bahraini Dinar", "BD", 3),
    Currency::new("BRL", 986, "Brazilian Real", "R$", 2),
    Currency::new("CAD", 124, "Canadian Dollar", "CA$", 2),
    Currency::new("CHF", 756, "Swiss Franc", "CHF", 2),
    Currency::new("CLP", 152, "Chilean Peso", "CL$", 0),
    Currency::new("CNY", 156, "Chinese Yuan", "CN¥", 2),
    Currency::new("COP", 170, "Colombian Peso", "CO$", 2),
    Currency::new("CZK", 203, "Czech Koruna", "Kč", 2),
    Currency::new("DKK", 208, "Danish Krone", "kr", 2),
    Currency::new("DZD", 12, "Algerian Dinar", "DA", 2),
    Currency::new("EGP", 818, "Egyptian Pound", "E£", 2),
    Currency::new("EUR", 978, "Euro", "€", 2),
    Currency::new("GBP", 826, "British Pound", "£", 2),
    Currency::new("HKD", 344, "Hong Kong Dollar", "HK$", 2),
    Currency::new("HUF", 348, "Hungarian Forint", "Ft", 2),
    Currency::new("IDR", 360, "Indonesian Rupiah", "Rp", 2),
    Currency::new("ILS", 376, "Israeli New Shekel", "₪", 2),
    Currency::new("INR", 356, "Indian Rupee", "₹", 2),
    Currency::new("ISK", 352, "Icelandic Krona", "kr", 0),
    Currency::new("JOD", 400, "Jordanian Dinar", "JD", 3),
    Currency::new("JPY", 392, "Japanese Yen", "¥", 0),
    Currency::new("KES", 404, "Kenyan Shilling", "KSh", 2),
    Currency::new("KRW", 410, "South Korean Won", "₩", 0),
    Currency::new("KWD", 414, "Kuwaiti Dinar", "KD", 3),
    Currency::new("MAD", 504, "Moroccan Dirham", "MAD", 2),
    Currency::new("MXN", 484, "Mexican Peso", "MX$", 2),
    Currency::new("MYR", 458, "Malaysian Ringgit", "RM", 2),
    Currency::new("NGN", 566, "Nigerian Naira", "₦", 2),
    Currency::new("NOK", 578, "Norwegian Krone", "kr", 2),
    Currency::new("NZD", 554, "New Zealand Dollar", "NZ$", 2),
    Currency::new("OMR", 512, "Omani Rial", "OMR", 3),
    Currency::new("PHP", 608, "Philippine Peso", "₱", 2),
    Currency::new("PLN", 985, "Polish Zloty", "zł", 2),
    Currency::new("RUB", 643, "Russian Ruble", "₽", 2),
    Currency::new("SAR", 682, "Saudi Riyal", "SR", 2),
    Currency::new("SEK", 752, "Swedish Krona", "kr", 2),
    Currency::new("SGD", 702, "Singapore Dollar", "S$", 2),
    Currency::new("THB", 764, "Thai Baht", "฿", 2),
    Currency::new("TND", 788, "Tunisian Dinar", "DT", 3),
    Currency::new("TRY", 949, "Turkish Lira", "₺", 2),
    Currency::new("VND", 704, "Vietnamese Dong", "₫", 0),
    Currency::new("XOF", 952, "West African CFA Franc", "F CFA", 0),
    Currency::new("ZAR", 710, "South African Rand", "R", 2),
];

static BY_CODE: Lazy<HashMap<&'static str, &'static Currency>> =
    Lazy::new(|| CURRENCIES.iter().map(|c| (c.code(), c)).collect());

/// Symbols and codes that may decorate an amount string, longest first so
/// "CA$" wins over "$".
static DECORATIONS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    let mut decorations: Vec<&'static str> = CURRENCIES
        .iter()
        .flat_map(|c| [c.symbol(), c.code()])
        .collect();
    decorations.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    decorations.dedup();
    decorations
});

/// Looks up a currency by its exact uppercase ISO code.
///
/// ```
/// use moneta_core::currency::lookup_by_code;
///
/// assert_eq!(lookup_by_code("EUR").map(|c| c.subunit_exponent()), Some(2));
/// assert!(lookup_by_code("eur").is_none());
/// ```
#[must_use]
pub fn lookup_by_code(code: &str) -> Option<&'static Currency> {
    BY_CODE.get(code).copied()
}

/// Currencies whose display symbol is exactly `symbol`.
///
/// Several currencies can share a glyph ("kr" is used by four of them).
#[must_use]
pub fn lookup_by_symbol(symbol: &str) -> Vec<&'static Currency> {
    CURRENCIES.iter().filter(|c| c.symbol() == symbol).collect()
}

/// The currency used when none is given: US Dollar.
#[must_use]
pub fn default_currency() -> &'static Currency {
    &CURRENCIES[DEFAULT_INDEX]
}

/// All registered currencies, default first.
#[must_use]
pub fn all() -> &'static [Currency] {
    &CURRENCIES
}

pub(crate) fn decorations() -> &'static [&'static str] {
    &DECORATIONS
}
