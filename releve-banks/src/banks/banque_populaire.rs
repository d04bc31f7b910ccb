//! Banque Populaire statement labels
//!
//!   RET DAB BP LYON RETRAIT DU 02042013 CARTE 1234
//!   FACTURE 120413 CB:*4974 MONOPRIX
//!   PRELEVEMENT FREE MOBILE

use releve_core::TransactionType;

use super::Patterns;

pub const PATTERNS: Patterns = &[
    (
        r"^RET DAB (?P<text>.*?) RETRAIT (DU|LE) (?P<dd>\d{2})(?P<mm>\d{2})(?P<yy>\d+).*",
        TransactionType::Withdrawal,
    ),
    (r"^RET DAB (?P<text>.*?) CARTE ?:.*", TransactionType::Withdrawal),
    (
        r"^(?P<text>.*) RETRAIT DU (?P<dd>\d{2})(?P<mm>\d{2})(?P<yy>\d{2}) .*",
        TransactionType::Withdrawal,
    ),
    (r"^(RETRAIT CARTE )?RET(RAIT)? DAB (?P<text>.*)", TransactionType::Withdrawal),
    (
        r"((\w+) )?(?P<dd>\d{2})(?P<mm>\d{2})(?P<yy>\d{2}) CB[:*][^ ]+ (?P<text>.*)",
        TransactionType::Card,
    ),
    (r"^VIR(EMENT)? (?P<text>.*)", TransactionType::Transfer),
    (r"^(PRLV|PRELEVEMENT) (?P<text>.*)", TransactionType::Order),
    (r"^CHEQUE.*", TransactionType::Check),
    (r"(?i)^(AGIOS /|FRAIS) (?P<text>.*)", TransactionType::BankFee),
    (r"(?i)^(CONVENTION \d+ )?COTIS(ATION)? (?P<text>.*)", TransactionType::BankFee),
    (r"^REMISE (?P<text>.*)", TransactionType::Deposit),
    (r"^(?P<text>.*)( \d+)? QUITTANCE .*", TransactionType::Order),
    (r"^.* LE (?P<dd>\d{2})/(?P<mm>\d{2})/(?P<yy>\d{2})$", TransactionType::Unknown),
];
