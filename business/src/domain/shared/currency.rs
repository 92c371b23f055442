use std::sync::LazyLock;

use regex::Regex;

/// The single display currency. Amounts are whole naira, no decimals.
pub const CURRENCY_GLYPH: char = '₦';

const GROUPING_SEPARATOR: char = ',';

static DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+$").expect("digits pattern compiles"));

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CurrencyError {
    #[error("currency.unparseable")]
    Unparseable,
}

/// Parses a display price such as `"₦2,500"` into a plain integer amount.
///
/// Strips the currency glyph and grouping separators; whatever remains must
/// be base-10 digits. Rejecting everything else keeps malformed catalog data
/// out of cart totals.
pub fn parse_amount(display: &str) -> Result<i64, CurrencyError> {
    let stripped: String = display
        .trim()
        .chars()
        .filter(|c| *c != CURRENCY_GLYPH && *c != GROUPING_SEPARATOR)
        .collect();

    if !DIGITS.is_match(&stripped) {
        return Err(CurrencyError::Unparseable);
    }

    stripped.parse::<i64>().map_err(|_| CurrencyError::Unparseable)
}

/// Formats an integer amount back into the display shape, e.g. `2500` into
/// `"₦2,500"`. Inverse of [`parse_amount`] for non-negative amounts.
pub fn format_amount(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);

    let leading = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - leading) % 3 == 0 {
            grouped.push(GROUPING_SEPARATOR);
        }
        grouped.push(c);
    }

    if amount < 0 {
        format!("-{}{}", CURRENCY_GLYPH, grouped)
    } else {
        format!("{}{}", CURRENCY_GLYPH, grouped)
    }
}
