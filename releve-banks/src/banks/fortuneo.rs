//! Fortuneo statement labels
//!
//! Labels start with an upper-case operation keyword, often glued to the
//! rest of the text (`ECHEANCEPRET`, `CHEQUE1234567`).

use releve_core::TransactionType;

use super::Patterns;

pub const PATTERNS: Patterns = &[
    (r"^CHEQUE(?P<text>.*)", TransactionType::Check),
    (
        r"^FACTURE CARTE DU (?P<dd>\d{2})(?P<mm>\d{2})(?P<yy>\d{2}) (?P<text>.*?)( CA?R?T?E? ?\d*X*\d*)?$",
        TransactionType::Card,
    ),
    (r"^(PRELEVEMENT|TELEREGLEMENT|TIP) (?P<text>.*)", TransactionType::Order),
    (r"^ECHEANCEPRET(?P<text>.*)", TransactionType::LoanPayment),
    (
        r"^RETRAIT DAB (?P<dd>\d{2})/(?P<mm>\d{2})/(?P<yy>\d{2})( (?P<HH>\d+)H(?P<MM>\d+))? (?P<text>.*)",
        TransactionType::Withdrawal,
    ),
    (
        r"^VIR(EMEN)?T? ((RECU|FAVEUR) TIERS|SEPA RECU)?( /FRM)?(?P<text>.*)",
        TransactionType::Transfer,
    ),
    (r"^REMBOURST(?P<text>.*)", TransactionType::Payback),
    (r"^COMMISSIONS(?P<text>.*)", TransactionType::BankFee),
    (r"^(?P<text>REMUNERATION.*)", TransactionType::BankFee),
    (r"^REMISE CHEQUES(?P<text>.*)", TransactionType::Deposit),
];
