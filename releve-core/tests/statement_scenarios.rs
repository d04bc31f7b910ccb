use chrono::NaiveDate;
use releve_core::{Normalizer, RuleSet, StatementDate, Transaction, TransactionType};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::str::FromStr;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn french_rules() -> RuleSet {
    RuleSet::from_patterns([
        (r"^VIR(EMENT)? (?P<text>.*)", TransactionType::Transfer),
        (r"^PRLV (?P<text>.*)", TransactionType::Order),
        (r"^ACHAT CB (?P<dd>\d{2})(?P<mm>\d{2}) (?P<text>.*)", TransactionType::Card),
        (r"^(?P<text>.*) CARTE \d+ PAIEMENT CB (?P<dd>\d{2})(?P<mm>\d{2}) ?(.*)$", TransactionType::Card),
    ])
    .unwrap()
}

#[test]
fn test_transfer_label_from_text_group() {
    let rules = french_rules();
    let txn = Normalizer::new(&rules, d(2013, 6, 1))
        .parse("15042013", "VIREMENT RECU DE M MARTIN")
        .unwrap();
    assert_eq!(txn.kind, TransactionType::Transfer);
    assert_eq!(txn.label, "RECU DE M MARTIN");
    assert_eq!(txn.category, None);
}

#[test]
fn test_debit_column_amount() {
    let rules = french_rules();
    let mut txn = Normalizer::new(&rules, d(2013, 6, 1))
        .parse("15042013", "PRLV EDF")
        .unwrap();
    txn.set_amount("", "1 234,56").unwrap();
    assert_eq!(txn.amount, Decimal::from_str("-1234.56").unwrap());
}

#[test]
fn test_category_split_without_match() {
    let rules = french_rules();
    let txn = Normalizer::new(&rules, d(2013, 6, 1))
        .parse("15042013", "RESTAURANT  LE BISTROT DU COIN")
        .unwrap();
    assert_eq!(txn.category.as_deref(), Some("RESTAURANT"));
    assert_eq!(txn.label, "LE BISTROT DU COIN");
    assert_eq!(txn.kind, TransactionType::Unknown);
    assert_eq!(txn.raw, "RESTAURANT LE BISTROT DU COIN");
}

#[test]
fn test_compact_booking_date() {
    let rules = RuleSet::default();
    let txn = Normalizer::new(&rules, d(2013, 6, 1))
        .parse("15042013", "ANY")
        .unwrap();
    assert_eq!(txn.booking_date, StatementDate::Date(d(2013, 4, 15)));
    assert_eq!(txn.operation_date, StatementDate::Date(d(2013, 4, 15)));
}

#[test]
fn test_card_date_in_the_past_keeps_year() {
    let rules = french_rules();
    let txn = Normalizer::new(&rules, d(2013, 6, 1))
        .parse("03042013", "ACHAT CB 2903 PAIEMENT")
        .unwrap();
    assert_eq!(txn.kind, TransactionType::Card);
    assert_eq!(txn.label, "PAIEMENT");
    assert_eq!(txn.operation_date, StatementDate::Date(d(2013, 3, 29)));
    assert_eq!(txn.booking_date, StatementDate::Date(d(2013, 4, 3)));
}

#[test]
fn test_card_date_in_the_future_rolls_back_a_year() {
    let rules = french_rules();
    let txn = Normalizer::new(&rules, d(2013, 2, 1))
        .parse("31012013", "ACHAT CB 2903 PAIEMENT")
        .unwrap();
    assert_eq!(txn.operation_date, StatementDate::Date(d(2012, 3, 29)));
}

#[test]
fn test_card_date_equal_to_today() {
    let rules = french_rules();
    let txn = Normalizer::new(&rules, d(2013, 3, 29))
        .parse("29032013", "ACHAT CB 2903 PAIEMENT")
        .unwrap();
    assert_eq!(txn.operation_date, StatementDate::Date(d(2013, 3, 29)));
}

#[test]
fn test_card_feb_29_in_non_leap_year() {
    let rules = french_rules();
    let txn = Normalizer::new(&rules, d(2013, 3, 5))
        .parse("04032013", "ACHAT CB 2902 RELAY")
        .unwrap();
    assert_eq!(txn.operation_date, StatementDate::Date(d(2012, 2, 29)));
}

#[test]
fn test_text_before_card_marker() {
    let rules = french_rules();
    let txn = Normalizer::new(&rules, d(2013, 6, 1))
        .parse("14/05/2013", "CARREFOUR CARTE 4974 PAIEMENT CB 1205 PARIS")
        .unwrap();
    assert_eq!(txn.kind, TransactionType::Card);
    assert_eq!(txn.label, "CARREFOUR");
    assert_eq!(txn.operation_date, StatementDate::Date(d(2013, 5, 12)));
}

#[test]
fn test_category_is_prefix_of_raw() {
    let rules = RuleSet::default();
    let normalizer = Normalizer::new(&rules, d(2013, 6, 1));
    let labels = [
        "FRAIS  COTISATION CARTE",
        "Paiement Par Carte   SNCF\nPARIS",
        "  VIREMENT   EMIS  LOYER",
        "A  B",
    ];
    for raw in labels {
        let txn = normalizer.parse("01062013", raw).unwrap();
        let category = txn.category.clone().expect("double space should split");
        assert!(txn.raw.starts_with(&category), "{raw:?}");
        assert!(category.len() < txn.raw.len());
        assert_eq!(format!("{} {}", category, txn.label), txn.raw);
    }
}

#[test]
fn test_reparse_is_idempotent() {
    let rules = RuleSet::default();
    let normalizer = Normalizer::new(&rules, d(2013, 6, 1));
    let first = normalizer.parse("01062013", "RESTAURANT  LE  BISTROT").unwrap();

    let again: Transaction = normalizer.parse("01062013", &first.label).unwrap();
    assert_eq!(again.label, first.label);
    assert_eq!(again.category, None);

    let category = first.category.unwrap();
    let again = normalizer.parse("01062013", &category).unwrap();
    assert_eq!(again.label, category);
}

#[test]
fn test_amount_sign_property() {
    let values = ["0,01", "1", "12,50", "1 000,00", "999 999,99", "3.141,59"];
    let expected = [dec!(0.01), dec!(1), dec!(12.50), dec!(1000.00), dec!(999999.99), dec!(3141.59)];
    let rules = RuleSet::default();
    let normalizer = Normalizer::new(&rules, d(2013, 6, 1));
    for (text, value) in values.iter().zip(expected) {
        let mut txn = normalizer.parse("01062013", "X").unwrap();
        txn.set_amount(text, "").unwrap();
        assert_eq!(txn.amount, value);
        txn.set_amount("", text).unwrap();
        assert_eq!(txn.amount, -value);
    }
}
