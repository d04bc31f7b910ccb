//! Transaction record types produced by the normalizer

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::amount::signed_amount;
use crate::error::{Error, Result};

/// A single normalized statement line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    /// Date the bank posted the line
    pub booking_date: StatementDate,
    /// Date the operation actually happened (card payments settle later)
    pub operation_date: StatementDate,
    /// Whitespace-normalized statement text
    pub raw: String,
    /// Prefix split off the label at its first double space, if any
    pub category: Option<String>,
    /// Short human-readable label
    pub label: String,
    /// Inferred kind of transaction
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// Positive = credit, negative = debit
    pub amount: Decimal,
}

impl Transaction {
    /// Set the amount from a credit and a debit column.
    ///
    /// A non-empty debit wins and is negated; otherwise the credit is used
    /// as-is, an empty credit meaning zero.
    pub fn set_amount(&mut self, credit: &str, debit: &str) -> Result<()> {
        self.amount = signed_amount(credit, debit)?;
        Ok(())
    }

    /// Returns true if money left the account
    pub fn is_debit(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    /// Returns true if money entered the account
    pub fn is_credit(&self) -> bool {
        self.amount > Decimal::ZERO
    }
}

/// Kinds of bank transactions.
///
/// The numeric codes are the historical ones used by statement backends.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TransactionType {
    #[default]
    #[serde(rename = "unknown")]
    Unknown,
    #[serde(rename = "transfer")]
    Transfer,
    /// Direct debit
    #[serde(rename = "order")]
    Order,
    #[serde(rename = "check")]
    Check,
    #[serde(rename = "deposit")]
    Deposit,
    #[serde(rename = "payback")]
    Payback,
    #[serde(rename = "withdrawal")]
    Withdrawal,
    #[serde(rename = "card")]
    Card,
    #[serde(rename = "loan-payment")]
    LoanPayment,
    #[serde(rename = "bank-fee")]
    BankFee,
}

impl TransactionType {
    pub const ALL: [TransactionType; 10] = [
        TransactionType::Unknown,
        TransactionType::Transfer,
        TransactionType::Order,
        TransactionType::Check,
        TransactionType::Deposit,
        TransactionType::Payback,
        TransactionType::Withdrawal,
        TransactionType::Card,
        TransactionType::LoanPayment,
        TransactionType::BankFee,
    ];

    /// Historical numeric code
    pub fn code(self) -> u8 {
        match self {
            TransactionType::Unknown => 0,
            TransactionType::Transfer => 1,
            TransactionType::Order => 2,
            TransactionType::Check => 3,
            TransactionType::Deposit => 4,
            TransactionType::Payback => 5,
            TransactionType::Withdrawal => 6,
            TransactionType::Card => 7,
            TransactionType::LoanPayment => 8,
            TransactionType::BankFee => 9,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }

    /// Stable identifier, same as the serde form
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Unknown => "unknown",
            TransactionType::Transfer => "transfer",
            TransactionType::Order => "order",
            TransactionType::Check => "check",
            TransactionType::Deposit => "deposit",
            TransactionType::Payback => "payback",
            TransactionType::Withdrawal => "withdrawal",
            TransactionType::Card => "card",
            TransactionType::LoanPayment => "loan-payment",
            TransactionType::BankFee => "bank-fee",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| Error::UnknownType(s.to_string()))
    }
}

/// A statement date, with or without a time of day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum StatementDate {
    DateTime(NaiveDateTime),
    Date(NaiveDate),
}

impl StatementDate {
    /// Calendar date, dropping any time of day
    pub fn date(&self) -> NaiveDate {
        match self {
            StatementDate::DateTime(dt) => dt.date(),
            StatementDate::Date(d) => *d,
        }
    }

    pub fn time(&self) -> Option<NaiveTime> {
        match self {
            StatementDate::DateTime(dt) => Some(dt.time()),
            StatementDate::Date(_) => None,
        }
    }
}

impl From<NaiveDate> for StatementDate {
    fn from(d: NaiveDate) -> Self {
        StatementDate::Date(d)
    }
}

impl From<NaiveDateTime> for StatementDate {
    fn from(dt: NaiveDateTime) -> Self {
        StatementDate::DateTime(dt)
    }
}

impl fmt::Display for StatementDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatementDate::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M")),
            StatementDate::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample() -> Transaction {
        let date = StatementDate::Date(NaiveDate::from_ymd_opt(2013, 4, 15).unwrap());
        Transaction {
            booking_date: date,
            operation_date: date,
            raw: "PRLV EDF".to_string(),
            category: None,
            label: "EDF".to_string(),
            kind: TransactionType::Order,
            amount: Decimal::ZERO,
        }
    }

    #[test]
    fn test_type_codes_are_historical() {
        assert_eq!(TransactionType::Unknown.code(), 0);
        assert_eq!(TransactionType::Card.code(), 7);
        assert_eq!(TransactionType::BankFee.code(), 9);
        assert_eq!(TransactionType::from_code(8), Some(TransactionType::LoanPayment));
        assert_eq!(TransactionType::from_code(10), None);
    }

    #[test]
    fn test_type_from_str() {
        assert_eq!("loan-payment".parse::<TransactionType>().unwrap(), TransactionType::LoanPayment);
        assert_eq!(" Card ".parse::<TransactionType>().unwrap(), TransactionType::Card);
        assert!(matches!("wire".parse::<TransactionType>(), Err(Error::UnknownType(_))));
    }

    #[test]
    fn test_set_amount_debit_is_negative() {
        let mut txn = sample();
        txn.set_amount("", "42,10").unwrap();
        assert_eq!(txn.amount, dec!(-42.10));
        assert!(txn.is_debit());
        assert!(!txn.is_credit());
    }

    #[test]
    fn test_serialize_shape() {
        let mut txn = sample();
        txn.set_amount("1 200,00", "").unwrap();
        let json = serde_json::to_value(&txn).unwrap();
        assert_eq!(json["type"], "order");
        assert_eq!(json["booking_date"], "2013-04-15");
        assert_eq!(json["amount"], "1200.00");
        assert!(json["category"].is_null());
    }

    #[test]
    fn test_statement_date_accessors() {
        let dt = NaiveDate::from_ymd_opt(2013, 4, 15)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();
        let d = StatementDate::from(dt);
        assert_eq!(d.date(), NaiveDate::from_ymd_opt(2013, 4, 15).unwrap());
        assert_eq!(d.time(), NaiveTime::from_hms_opt(14, 30, 0));
        assert_eq!(d.to_string(), "2013-04-15 14:30");
    }
}
