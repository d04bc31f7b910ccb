//! Currency detection from amount or balance text

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Currency {
    #[default]
    #[serde(rename = "unknown")]
    Unknown,
    #[serde(rename = "EUR")]
    Eur,
    #[serde(rename = "CHF")]
    Chf,
    #[serde(rename = "USD")]
    Usd,
}

impl Currency {
    /// Guess the currency of `"1 234,56 €"` or `"USD 12.00"`.
    ///
    /// Only letters and currency symbols are looked at.
    pub fn from_text(text: &str) -> Self {
        let marker: String = text
            .chars()
            .filter(|c| c.is_ascii_alphabetic() || matches!(*c, '€' | '$'))
            .collect();
        match marker.to_ascii_uppercase().as_str() {
            "€" | "EUR" => Currency::Eur,
            "CHF" => Currency::Chf,
            "$" | "USD" => Currency::Usd,
            _ => Currency::Unknown,
        }
    }

    /// ISO 4217 code, empty for unknown
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Unknown => "",
            Currency::Eur => "EUR",
            Currency::Chf => "CHF",
            Currency::Usd => "USD",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text() {
        assert_eq!(Currency::from_text("1 234,56 €"), Currency::Eur);
        assert_eq!(Currency::from_text("12,00 eur"), Currency::Eur);
        assert_eq!(Currency::from_text("CHF 80.00"), Currency::Chf);
        assert_eq!(Currency::from_text("$5.82"), Currency::Usd);
        assert_eq!(Currency::from_text("12,00"), Currency::Unknown);
        assert_eq!(Currency::from_text("12 € $"), Currency::Unknown);
    }
}
