//! Rule tables for the supported banks.
//!
//! Each table is an ordered list of `(pattern, type)` pairs matched against
//! the normalized label; order matters, the first match wins.

pub mod banque_populaire;
pub mod barclays;
pub mod cmso;
pub mod credit_agricole;
pub mod fortuneo;

use releve_core::{Error, Result, RuleSet, TransactionType};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A static rule table
pub type Patterns = &'static [(&'static str, TransactionType)];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Bank {
    #[serde(rename = "barclays")]
    Barclays,
    #[serde(rename = "banque-populaire")]
    BanquePopulaire,
    #[serde(rename = "cmso")]
    Cmso,
    #[serde(rename = "fortuneo")]
    Fortuneo,
    #[serde(rename = "credit-agricole")]
    CreditAgricole,
}

impl Bank {
    pub const ALL: [Bank; 5] = [
        Bank::Barclays,
        Bank::BanquePopulaire,
        Bank::Cmso,
        Bank::Fortuneo,
        Bank::CreditAgricole,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Bank::Barclays => "barclays",
            Bank::BanquePopulaire => "banque-populaire",
            Bank::Cmso => "cmso",
            Bank::Fortuneo => "fortuneo",
            Bank::CreditAgricole => "credit-agricole",
        }
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Bank::Barclays => "Barclays",
            Bank::BanquePopulaire => "Banque Populaire",
            Bank::Cmso => "Crédit Mutuel Sud-Ouest",
            Bank::Fortuneo => "Fortuneo",
            Bank::CreditAgricole => "Crédit Agricole",
        }
    }

    pub fn patterns(&self) -> Patterns {
        match self {
            Bank::Barclays => barclays::PATTERNS,
            Bank::BanquePopulaire => banque_populaire::PATTERNS,
            Bank::Cmso => cmso::PATTERNS,
            Bank::Fortuneo => fortuneo::PATTERNS,
            Bank::CreditAgricole => credit_agricole::PATTERNS,
        }
    }

    /// Compile this bank's table.
    pub fn rules(&self) -> Result<RuleSet> {
        RuleSet::from_patterns(self.patterns().iter().copied())
    }
}

impl fmt::Display for Bank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Bank {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Bank::ALL
            .into_iter()
            .find(|b| b.id() == wanted)
            .ok_or_else(|| Error::UnknownBank(s.to_string()))
    }
}
