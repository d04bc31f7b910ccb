//! Amount cleaning for French-formatted statement columns.
//!
//! Statements write `1 234,56 €`: spaces (often non-breaking) group
//! thousands, `.` may also group thousands and `,` is the decimal separator.
//! Without a `,`, a `.` is only dropped when it groups exactly three digits,
//! so `-12.50` stays `-12.50`.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::{Error, Result};

const CURRENCY_SYMBOLS: &[char] = &['€', '$', '£', '¥'];

/// Turn `"1 234,56 €"` into `"1234.56"`.
///
/// The result may be empty; it is not validated as a number.
pub fn clean_amount(text: &str) -> String {
    let compact: String = text
        .trim_matches(|c: char| {
            c.is_whitespace() || c.is_ascii_alphabetic() || CURRENCY_SYMBOLS.contains(&c)
        })
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    if compact.contains(',') {
        return compact
            .chars()
            .filter(|&c| c != '.')
            .map(|c| if c == ',' { '.' } else { c })
            .collect();
    }

    compact
        .char_indices()
        .filter(|&(i, c)| c != '.' || !groups_thousands(&compact[i + 1..]))
        .map(|(_, c)| c)
        .collect()
}

/// `rest` follows a `.`: exactly three digits, then the end or another `.`
fn groups_thousands(rest: &str) -> bool {
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    digits == 3 && matches!(rest.as_bytes().get(3), None | Some(b'.'))
}

/// Parse one amount column. `Ok(None)` when the column is empty.
pub fn parse_amount(text: &str) -> Result<Option<Decimal>> {
    let cleaned = clean_amount(text);
    if cleaned.is_empty() {
        return Ok(None);
    }
    Decimal::from_str(&cleaned)
        .map(Some)
        .map_err(|_| Error::MalformedAmount(text.to_string()))
}

/// Signed amount from a credit and a debit column; the debit wins if both are set.
pub fn signed_amount(credit: &str, debit: &str) -> Result<Decimal> {
    if let Some(debit) = parse_amount(debit)? {
        return Ok(-debit);
    }
    Ok(parse_amount(credit)?.unwrap_or(Decimal::ZERO))
}
