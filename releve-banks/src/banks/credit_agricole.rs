//! Crédit Agricole statement labels
//!
//! The first line of a label is the operation kind ("Paiement Par Carte"),
//! the second the counterpart, optionally followed by the operation day:
//!
//!   Paiement Par Carte  CARREFOUR MARKET 12/03
//!
//! Only card payments take their operation date from that trailing day; for
//! other kinds it is dropped from the label.

use releve_core::TransactionType;

use super::Patterns;

pub const PATTERNS: Patterns = &[
    (
        r"(?i)Paiement Par Carte (?P<text>.+?) (?P<dd>\d{2})/(?P<mm>\d{2})$",
        TransactionType::Card,
    ),
    (r"(?i)Paiement Par Carte (?P<text>.+)", TransactionType::Card),
    (
        r"(?i)Retrait Au Distributeur (?P<text>.+?)( \d{2}/\d{2})?$",
        TransactionType::Withdrawal,
    ),
    (r"(?i)Virement Emis (?P<text>.+?)( \d{2}/\d{2})?$", TransactionType::Transfer),
    (r"(?i)Virement (?P<text>.+?)( \d{2}/\d{2})?$", TransactionType::Transfer),
    (r"(?i)Cheque Emis( (?P<text>.+))?", TransactionType::Check),
    (r"(?i)Remise De Cheque( (?P<text>.+))?", TransactionType::Deposit),
    (r"(?i)Prelevement (?P<text>.+?)( \d{2}/\d{2})?$", TransactionType::Order),
    (r"(?i)(Frais|Cotisation) (?P<text>.+?)( \d{2}/\d{2})?$", TransactionType::BankFee),
];
