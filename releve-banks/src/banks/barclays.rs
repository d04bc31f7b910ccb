//! Barclays France statement labels
//!
//!   RET DAB PARIS OPERA RETRAIT DU 120413 CARTE 1234
//!   CARTE 150413 CB:*123456 FNAC PARIS
//!   VIRT FAVEUR /FRM EMPLOYEUR SA

use releve_core::TransactionType;

use super::Patterns;

pub const PATTERNS: Patterns = &[
    (
        r"^RET DAB (?P<text>.*?) RETRAIT DU (?P<dd>\d{2})(?P<mm>\d{2})(?P<yy>\d{2}).*",
        TransactionType::Withdrawal,
    ),
    (r"^RET DAB (?P<text>.*?) CARTE ?:.*", TransactionType::Withdrawal),
    (
        r"^RET DAB (?P<dd>\d{2})/(?P<mm>\d{2})/(?P<yy>\d{2}) (?P<text>.*?) CARTE .*",
        TransactionType::Withdrawal,
    ),
    (
        r"^(?P<text>.*) RETRAIT DU (?P<dd>\d{2})(?P<mm>\d{2})(?P<yy>\d{2}) .*",
        TransactionType::Withdrawal,
    ),
    (
        r"(\w+) (?P<dd>\d{2})(?P<mm>\d{2})(?P<yy>\d{2}) CB[:*][^ ]+ (?P<text>.*)",
        TransactionType::Card,
    ),
    (
        r"^VIR(EMEN)?T? (SEPA)?(RECU|FAVEUR)?( /FRM)?(?P<text>.*)",
        TransactionType::Transfer,
    ),
    (r"^PRLV (?P<text>.*) (REF \w+)?$", TransactionType::Order),
    (r"^CHEQUE.*? (REF \w+)?$", TransactionType::Check),
    (r"^(AGIOS /|FRAIS) (?P<text>.*)", TransactionType::BankFee),
    (r"^(CONVENTION \d+ )?COTIS(ATION)? (?P<text>.*)", TransactionType::BankFee),
    (r"^REMISE (?P<text>.*)", TransactionType::Deposit),
    (r"^(?P<text>.*)( \d+)? QUITTANCE .*", TransactionType::Order),
    (r"^.* LE (?P<dd>\d{2})/(?P<mm>\d{2})/(?P<yy>\d{2})$", TransactionType::Unknown),
];
