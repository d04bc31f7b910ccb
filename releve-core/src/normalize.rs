//! Turn a raw statement line (date + label) into a [`Transaction`].

use chrono::{Local, NaiveDate};
use regex::Captures;
use rust_decimal::Decimal;

use crate::dates::{DateInput, embedded_date};
use crate::error::{Error, Result};
use crate::rules::RuleSet;
use crate::transaction::{StatementDate, Transaction, TransactionType};

/// Applies a rule table to statement lines.
///
/// `today` is the reference date used to guess the year of day/month pairs
/// found in labels.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer<'r> {
    rules: &'r RuleSet,
    today: NaiveDate,
}

impl<'r> Normalizer<'r> {
    pub fn new(rules: &'r RuleSet, today: NaiveDate) -> Self {
        Self { rules, today }
    }

    /// Use the machine's local date as reference.
    pub fn with_local_date(rules: &'r RuleSet) -> Self {
        Self::new(rules, Local::now().date_naive())
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn rules(&self) -> &'r RuleSet {
        self.rules
    }

    /// Parse a booking date and a raw label.
    ///
    /// The amount is left at zero; see [`Transaction::set_amount`].
    pub fn parse<'a>(&self, date: impl Into<DateInput<'a>>, raw_label: &str) -> Result<Transaction> {
        let booking_date = date.into().resolve()?;
        let (category, label) = split_category(raw_label);

        let mut txn = Transaction {
            booking_date,
            operation_date: booking_date,
            raw: collapse_whitespace(raw_label),
            category,
            label,
            kind: TransactionType::Unknown,
            amount: Decimal::ZERO,
        };

        if let Some((rule, caps)) = self.rules.first_match(&txn.raw) {
            txn.kind = rule.kind();
            if let Some(text) = caps.name("text") {
                txn.label = text.as_str().trim().to_string();
            }
            if let Some(date) = operation_date(&caps, self.today)? {
                txn.operation_date = date;
            }
        }

        Ok(txn)
    }
}

/// Collapse every whitespace run (newlines included) to one space and trim.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split `"RESTAURANT  LE BISTROT"` into a category and a label at the first
/// run of two or more whitespace characters.
///
/// Any whitespace counts toward the run, newlines and tabs included, so
/// `"X\n Y"` splits into `X` and `Y` just like `"X  Y"`. A single newline
/// does not split.
pub fn split_category(raw_label: &str) -> (Option<String>, String) {
    let text = raw_label.trim();
    let mut prev_ws = None;
    for (i, c) in text.char_indices() {
        if !c.is_whitespace() {
            prev_ws = None;
            continue;
        }
        match prev_ws {
            Some(start) => {
                let category = collapse_whitespace(&text[..start]);
                let label = collapse_whitespace(&text[start..]);
                return (Some(category), label);
            }
            None => prev_ws = Some(i),
        }
    }
    (None, collapse_whitespace(text))
}

fn operation_date(caps: &Captures<'_>, today: NaiveDate) -> Result<Option<StatementDate>> {
    let (Some(dd), Some(mm)) = (caps.name("dd"), caps.name("mm")) else {
        return Ok(None);
    };
    let day = number(dd.as_str())?;
    let month = number(mm.as_str())?;
    let year = caps.name("yy").map(|yy| number(yy.as_str())).transpose()?;
    let time = match (caps.name("HH"), caps.name("MM")) {
        (Some(h), Some(m)) => Some((number(h.as_str())?, number(m.as_str())?)),
        _ => None,
    };
    embedded_date(day, month, year, time, today).map(Some)
}

fn number<T: std::str::FromStr>(s: &str) -> Result<T> {
    s.trim()
        .parse()
        .map_err(|_| Error::MalformedDate(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  CB  CARREFOUR\n 12/03 \t"), "CB CARREFOUR 12/03");
    }

    #[test]
    fn test_split_category_on_mixed_whitespace() {
        assert_eq!(split_category("X\n Y"), (Some("X".to_string()), "Y".to_string()));
        assert_eq!(split_category("X\tZ\t\tY"), (Some("X Z".to_string()), "Y".to_string()));
        assert_eq!(split_category("X\nY"), (None, "X Y".to_string()));
    }

    #[test]
    fn test_split_category() {
        assert_eq!(
            split_category("RESTAURANT  LE BISTROT DU COIN"),
            (Some("RESTAURANT".to_string()), "LE BISTROT DU COIN".to_string())
        );
        assert_eq!(
            split_category("  FRAIS BANCAIRES   COTISATION  CARTE "),
            (Some("FRAIS BANCAIRES".to_string()), "COTISATION CARTE".to_string())
        );
        assert_eq!(split_category("PRLV EDF"), (None, "PRLV EDF".to_string()));
    }

    #[test]
    fn test_newline_counts_as_separator() {
        assert_eq!(
            split_category("Paiement Par Carte\n CARREFOUR"),
            (Some("Paiement Par Carte".to_string()), "CARREFOUR".to_string())
        );
    }

    #[test]
    fn test_parse_without_rules() {
        let rules = RuleSet::default();
        let txn = Normalizer::new(&rules, d(2013, 6, 1))
            .parse("15/04/2013", "PRLV   EDF\nFACTURE")
            .unwrap();
        assert_eq!(txn.raw, "PRLV EDF FACTURE");
        assert_eq!(txn.category.as_deref(), Some("PRLV"));
        assert_eq!(txn.label, "EDF FACTURE");
        assert_eq!(txn.kind, TransactionType::Unknown);
        assert_eq!(txn.booking_date, txn.operation_date);
    }

    #[test]
    fn test_match_without_text_keeps_split_label() {
        let rules = RuleSet::from_patterns([(r"CHEQUE.*", TransactionType::Check)]).unwrap();
        let txn = Normalizer::new(&rules, d(2013, 6, 1))
            .parse(d(2013, 5, 2), "CHEQUE  1234567")
            .unwrap();
        assert_eq!(txn.kind, TransactionType::Check);
        assert_eq!(txn.category.as_deref(), Some("CHEQUE"));
        assert_eq!(txn.label, "1234567");
    }

    #[test]
    fn test_optional_groups_that_did_not_match_are_ignored() {
        let rules = RuleSet::from_patterns([(
            r"RETRAIT DAB (?P<dd>\d{2})/(?P<mm>\d{2})(/(?P<yy>\d{2}))?( (?P<HH>\d+)H(?P<MM>\d+))? (?P<text>.*)",
            TransactionType::Withdrawal,
        )])
        .unwrap();
        let normalizer = Normalizer::new(&rules, d(2013, 6, 1));

        let txn = normalizer.parse("03062013", "RETRAIT DAB 28/05 PARIS").unwrap();
        assert_eq!(txn.operation_date, StatementDate::Date(d(2013, 5, 28)));
        assert_eq!(txn.label, "PARIS");

        let txn = normalizer.parse("03062013", "RETRAIT DAB 28/05/12 09H05 PARIS").unwrap();
        assert_eq!(
            txn.operation_date,
            StatementDate::DateTime(d(2012, 5, 28).and_hms_opt(9, 5, 0).unwrap())
        );
    }

    #[test]
    fn test_malformed_booking_date() {
        let rules = RuleSet::default();
        let err = Normalizer::new(&rules, d(2013, 6, 1))
            .parse("2013-04-15", "PRLV EDF")
            .unwrap_err();
        assert!(matches!(err, Error::MalformedDate(_)));
    }

    #[test]
    fn test_embedded_date_never_exists() {
        let rules = RuleSet::from_patterns([(
            r"CB (?P<dd>\d{2})(?P<mm>\d{2}) (?P<text>.*)",
            TransactionType::Card,
        )])
        .unwrap();
        let err = Normalizer::new(&rules, d(2013, 6, 1))
            .parse("03062013", "CB 3104 FNAC")
            .unwrap_err();
        assert!(matches!(err, Error::InvalidDate { month: 4, day: 31, .. }));
    }
}
