//! Statement date parsing and year inference for day/month pairs.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{Error, Result};
use crate::transaction::StatementDate;

/// A booking date as handed over by a statement backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateInput<'a> {
    /// `DDMMYYYY` or `DD/MM/YYYY`
    Text(&'a str),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl DateInput<'_> {
    pub fn resolve(self) -> Result<StatementDate> {
        match self {
            DateInput::Text(text) => parse_statement_date(text).map(StatementDate::Date),
            DateInput::Date(d) => Ok(StatementDate::Date(d)),
            DateInput::DateTime(dt) => Ok(StatementDate::DateTime(dt)),
        }
    }
}

impl<'a> From<&'a str> for DateInput<'a> {
    fn from(s: &'a str) -> Self {
        DateInput::Text(s)
    }
}

impl<'a> From<&'a String> for DateInput<'a> {
    fn from(s: &'a String) -> Self {
        DateInput::Text(s)
    }
}

impl From<NaiveDate> for DateInput<'_> {
    fn from(d: NaiveDate) -> Self {
        DateInput::Date(d)
    }
}

impl From<NaiveDateTime> for DateInput<'_> {
    fn from(dt: NaiveDateTime) -> Self {
        DateInput::DateTime(dt)
    }
}

impl From<StatementDate> for DateInput<'_> {
    fn from(d: StatementDate) -> Self {
        match d {
            StatementDate::Date(d) => DateInput::Date(d),
            StatementDate::DateTime(dt) => DateInput::DateTime(dt),
        }
    }
}

/// Parse `DDMMYYYY` or `D/M/YYYY` (two-digit years are taken as 20YY;
/// four-digit years are kept as written).
pub fn parse_statement_date(text: &str) -> Result<NaiveDate> {
    let s = text.trim();
    let malformed = || Error::MalformedDate(text.to_string());

    let (day, month, year) = if s.len() == 8 && s.bytes().all(|b| b.is_ascii_digit()) {
        (&s[0..2], &s[2..4], &s[4..8])
    } else if s.contains('/') {
        let parts: Vec<&str> = s.split('/').collect();
        match parts.as_slice() {
            [d, m, y]
                if (1..=2).contains(&d.len())
                    && (1..=2).contains(&m.len())
                    && (y.len() == 2 || y.len() == 4) =>
            {
                (*d, *m, *y)
            }
            _ => return Err(malformed()),
        }
    } else {
        return Err(malformed());
    };

    let day: u32 = digits(day).ok_or_else(malformed)?;
    let month: u32 = digits(month).ok_or_else(malformed)?;
    let year = match year.len() {
        2 => expand_year(digits(year).ok_or_else(malformed)?),
        _ => digits(year).ok_or_else(malformed)?,
    };

    ymd(year, month, day)
}

/// Two-digit years belong to this century.
pub fn expand_year(yy: i32) -> i32 {
    if yy < 100 { yy + 2000 } else { yy }
}

/// Year of the most recent `day/month` that is not after `today`.
///
/// Feb 29 walks back to the last leap year. A day/month that exists in no
/// year, like 31/04, is an error.
pub fn infer_year(day: u32, month: u32, today: NaiveDate) -> Result<i32> {
    let invalid = || Error::InvalidDate { year: today.year(), month, day };

    // 2000 is a leap year: anything it rejects never exists
    NaiveDate::from_ymd_opt(2000, month, day).ok_or_else(invalid)?;

    // a leap year is at most 8 years back (2100, 2200, ... are not leap)
    let current = today.year();
    (current - 8..=current)
        .rev()
        .find(|&year| matches!(NaiveDate::from_ymd_opt(year, month, day), Some(d) if d <= today))
        .ok_or_else(invalid)
}

/// Build an operation date from parts captured in a label.
pub fn embedded_date(
    day: u32,
    month: u32,
    year: Option<i32>,
    time: Option<(u32, u32)>,
    today: NaiveDate,
) -> Result<StatementDate> {
    let year = match year {
        Some(yy) => expand_year(yy),
        None => infer_year(day, month, today)?,
    };
    let date = ymd(year, month, day)?;

    match time {
        Some((hour, minute)) => {
            let time = NaiveTime::from_hms_opt(hour, minute, 0)
                .ok_or(Error::InvalidTime { hour, minute })?;
            Ok(StatementDate::DateTime(date.and_time(time)))
        }
        None => Ok(StatementDate::Date(date)),
    }
}

fn ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(Error::InvalidDate { year, month, day })
}

fn digits<T: std::str::FromStr>(s: &str) -> Option<T> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
