//! Reference dates for year inference.

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;

use crate::error::{Error, Result};

/// Today's date in an IANA timezone like "Europe/Paris".
pub fn today_in(tz: &str) -> Result<NaiveDate> {
    let tz: Tz = tz.parse().map_err(|_| Error::Timezone(tz.to_string()))?;
    Ok(Utc::now().with_timezone(&tz).date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_today_in_paris_is_close_to_utc() {
        let paris = today_in("Europe/Paris").unwrap();
        let utc = Utc::now().date_naive();
        assert!((paris - utc).num_days().abs() <= 1);
    }

    #[test]
    fn test_invalid_timezone() {
        assert!(matches!(today_in("Mars/Olympus"), Err(Error::Timezone(_))));
    }
}
