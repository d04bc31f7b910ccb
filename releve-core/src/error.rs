//! Error types for releve-core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("malformed statement date: {0:?}")]
    MalformedDate(String),

    #[error("invalid calendar date: day {day}, month {month}, year {year}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("invalid time of day: {hour:02}:{minute:02}")]
    InvalidTime { hour: u32, minute: u32 },

    #[error("malformed amount: {0:?}")]
    MalformedAmount(String),

    #[error("invalid rule pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid timezone: {0}")]
    Timezone(String),

    #[error("unknown transaction type: {0}")]
    UnknownType(String),

    #[error("unknown bank: {0}")]
    UnknownBank(String),
}

pub type Result<T> = std::result::Result<T, Error>;
