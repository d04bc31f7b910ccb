//! Crédit Mutuel Sud-Ouest statement labels

use releve_core::TransactionType;

use super::Patterns;

pub const PATTERNS: Patterns = &[
    (
        r"^RET DAB (?P<dd>\d{2})/?(?P<mm>\d{2})(/?(?P<yy>\d{2}))? (?P<text>.*)",
        TransactionType::Withdrawal,
    ),
    (r"CARTE (?P<dd>\d{2})/(?P<mm>\d{2}) (?P<text>.*)", TransactionType::Card),
    (
        r"^VIR(EMEN)?T? (SEPA)?(RECU|FAVEUR)?( /FRM)?(?P<text>.*)",
        TransactionType::Transfer,
    ),
    (r"^PRLV (?P<text>.*)( \d+)?$", TransactionType::Order),
    (r"^(CHQ|CHEQUE) .*$", TransactionType::Check),
    (r"^(AGIOS /|FRAIS) (?P<text>.*)", TransactionType::BankFee),
    (r"^(CONVENTION \d+ |F )?COTIS(ATION)? (?P<text>.*)", TransactionType::BankFee),
    (r"^REMISE (?P<text>.*)", TransactionType::Deposit),
    (r"^(?P<text>.*)( \d+)? QUITTANCE .*", TransactionType::Order),
    (r"^.* LE (?P<dd>\d{2})/(?P<mm>\d{2})/(?P<yy>\d{2})$", TransactionType::Unknown),
];
