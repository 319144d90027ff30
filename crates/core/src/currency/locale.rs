//! Locale identifier to currency resolution.
//!
//! Accepts POSIX/ICU/BCP 47 shaped identifiers: `en_US`, `en-US`,
//! `zh_Hans_CN`, `fr_TN.UTF-8` and `de_DE@currency=CHF`.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::Currency;
use super::registry::lookup_by_code;

/// ISO 3166 territory to ISO 4217 currency.
const TERRITORIES: &[(&str, &str)] = &[
    ("AE", "AED"),
    ("AR", "ARS"),
    ("AT", "EUR"),
    ("AU", "AUD"),
    ("BE", "EUR"),
    ("BF", "XOF"),
    ("BH", "BHD"),
    ("BJ", "XOF"),
    ("BR", "BRL"),
    ("CA", "CAD"),
    ("CH", "CHF"),
    ("CI", "XOF"),
    ("CL", "CLP"),
    ("CN", "CNY"),
    ("CO", "COP"),
    ("CY", "EUR"),
    ("CZ", "CZK"),
    ("DE", "EUR"),
    ("DK", "DKK"),
    ("DZ", "DZD"),
    ("EC", "USD"),
    ("EE", "EUR"),
    ("EG", "EGP"),
    ("ES", "EUR"),
    ("FI", "EUR"),
    ("FR", "EUR"),
    ("GB", "GBP"),
    ("GR", "EUR"),
    ("HK", "HKD"),
    ("HR", "EUR"),
    ("HU", "HUF"),
    ("ID", "IDR"),
    ("IE", "EUR"),
    ("IL", "ILS"),
    ("IN", "INR"),
    ("IS", "ISK"),
    ("IT", "EUR"),
    ("JO", "JOD"),
    ("JP", "JPY"),
    ("KE", "KES"),
    ("KR", "KRW"),
    ("KW", "KWD"),
    ("LI", "CHF"),
    ("LT", "EUR"),
    ("LU", "EUR"),
    ("LV", "EUR"),
    ("MA", "MAD"),
    ("MC", "EUR"),
    ("ML", "XOF"),
    ("MT", "EUR"),
    ("MX", "MXN"),
    ("MY", "MYR"),
    ("NE", "XOF"),
    ("NG", "NGN"),
    ("NL", "EUR"),
    ("NO", "NOK"),
    ("NZ", "NZD"),
    ("OM", "OMR"),
    ("PH", "PHP"),
    ("PL", "PLN"),
    ("PR", "USD"),
    ("PT", "EUR"),
    ("RU", "RUB"),
    ("SA", "SAR"),
    ("SE", "SEK"),
    ("SG", "SGD"),
    ("SI", "EUR"),
    ("SK", "EUR"),
    ("SN", "XOF"),
    ("SV", "USD"),
    ("TG", "XOF"),
    ("TH", "THB"),
    ("TN", "TND"),
    ("TR", "TRY"),
    ("US", "USD"),
    ("VN", "VND"),
    ("ZA", "ZAR"),
];

static BY_TERRITORY: Lazy<HashMap<&'static str, &'static Currency>> = Lazy::new(|| {
    TERRITORIES
        .iter()
        .filter_map(|(territory, code)| lookup_by_code(code).map(|c| (*territory, c)))
        .collect()
});

/// Resolves the currency used in a locale's territory.
///
/// An ICU `@currency=XXX` keyword wins over the territory when `XXX` is
/// registered. Returns `None` for malformed identifiers, locales without a
/// territory, and territories with no mapped currency.
///
/// ```
/// use moneta_core::currency::lookup_by_locale;
///
/// assert_eq!(lookup_by_locale("en_US").map(|c| c.code()), Some("USD"));
/// assert_eq!(lookup_by_locale("fr_TN").map(|c| c.code()), Some("TND"));
/// assert!(lookup_by_locale("en").is_none());
/// ```
#[must_use]
pub fn lookup_by_locale(locale: &str) -> Option<&'static Currency> {
    let (base, keywords) = match locale.trim().split_once('@') {
        Some((base, keywords)) => (base, Some(keywords)),
        None => (locale.trim(), None),
    };

    if let Some(currency) = keywords.and_then(currency_keyword) {
        return Some(currency);
    }

    let territory = territory(base)?;
    BY_TERRITORY.get(territory.as_str()).copied()
}

fn currency_keyword(keywords: &str) -> Option<&'static Currency> {
    keywords.split(';').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        if key.trim().eq_ignore_ascii_case("currency") {
            lookup_by_code(&value.trim().to_ascii_uppercase())
        } else {
            None
        }
    })
}

/// Territory subtag of a locale, uppercased. The language subtag must come
/// first; script and variant subtags are skipped.
fn territory(base: &str) -> Option<String> {
    // drop a POSIX codeset suffix such as ".UTF-8"
    let base = base.split('.').next().unwrap_or(base);
    let mut subtags = base.split(['_', '-']);

    let language = subtags.next()?;
    if !(2..=8).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }

    subtags.find(|s| is_region(s)).map(str::to_ascii_uppercase)
}

fn is_region(subtag: &str) -> bool {
    match subtag.len() {
        2 => subtag.chars().all(|c| c.is_ascii_alphabetic()),
        3 => subtag.chars().all(|c| c.is_ascii_digit()),
        _ => false,
    }
}
