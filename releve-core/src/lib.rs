//! releve-core: bank statement line normalization.
//!
//! A [`Normalizer`] takes a booking date and a raw label, cleans the label,
//! splits off a category, and classifies the line with an ordered
//! [`RuleSet`]. Amounts are exact decimals built from credit/debit columns.

pub mod amount;
pub mod currency;
pub mod dates;
pub mod error;
pub mod normalize;
pub mod rules;
pub mod time;
pub mod transaction;

pub use amount::{clean_amount, parse_amount, signed_amount};
pub use currency::Currency;
pub use dates::{DateInput, parse_statement_date};
pub use error::{Error, Result};
pub use normalize::Normalizer;
pub use rules::{Rule, RuleSet, RuleSpec};
pub use transaction::{StatementDate, Transaction, TransactionType};
