//! Reading amounts out of strings.
//!
//! Only decoration is handled: surrounding whitespace and one leading and/or
//! trailing currency symbol or ISO code. Grouping separators, digit
//! separators and decimal commas are display formats and are rejected, as is
//! precision a `Decimal` cannot hold.

use rust_decimal::Decimal;

use crate::currency::Currency;
use crate::currency::registry::decorations;

/// Parses a possibly decorated amount, `None` if nothing numeric remains.
///
/// With a `currency`, only that currency's own code or symbol may decorate
/// the number; `"12.5 EUR"` read as dollars is `None`.
pub(crate) fn parse_decimal(input: &str, currency: Option<&Currency>) -> Option<Decimal> {
    let trimmed = input.trim();

    // "-$1.50": the sign sits in front of the symbol
    let (negative, leading, body) = match trimmed
        .strip_prefix('-')
        .and_then(|rest| strip_leading(rest.trim_start()))
    {
        Some((decoration, rest)) => (true, Some(decoration), rest),
        None => match strip_leading(trimmed) {
            Some((decoration, rest)) => (false, Some(decoration), rest),
            None => (false, None, trimmed),
        },
    };
    let (trailing, body) = match strip_trailing(body) {
        Some((decoration, rest)) => (Some(decoration), rest.trim()),
        None => (None, body.trim()),
    };

    if let Some(currency) = currency {
        let foreign = |decoration: &str| {
            decoration != currency.code() && decoration != currency.symbol()
        };
        if leading.is_some_and(foreign) || trailing.is_some_and(foreign) {
            return None;
        }
    }

    if body.is_empty() || body.contains('_') || (negative && body.starts_with(['-', '+'])) {
        return None;
    }

    let value = Decimal::from_str_exact(body)
        .or_else(|_| Decimal::from_scientific(body))
        .ok()?;

    Some(if negative { -value } else { value })
}

fn strip_leading(input: &str) -> Option<(&'static str, &str)> {
    decorations()
        .iter()
        .find_map(|&symbol| Some((symbol, input.strip_prefix(symbol)?.trim_start())))
}

fn strip_trailing(input: &str) -> Option<(&'static str, &str)> {
    decorations()
        .iter()
        .find_map(|&symbol| Some((symbol, input.strip_suffix(symbol)?.trim_end())))
}
