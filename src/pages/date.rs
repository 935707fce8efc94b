//! Site date parsing.
//!
//! Dates appear in `popup_date` titles and profile headers, e.g.
//! `Sep 8, 2023 02:17 PM`, `Sep 8th, 2023 02:17 PM` or
//! `Registered: Dec 11, 2006 09:37`. The site renders them without a zone;
//! they are taken as UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::{Error, Result};
use crate::patterns::{DATE_LABEL, ORDINAL_SUFFIX, WHITESPACE_RUN};

const DATE_TIME_FORMATS: [&str; 6] = [
    "%b %d, %Y %I:%M %p",
    "%b %d, %Y %I:%M:%S %p",
    "%B %d, %Y %I:%M %p",
    "%B %d, %Y %I:%M:%S %p",
    "%b %d, %Y %H:%M",
    "%B %d, %Y %H:%M",
];

const DATE_FORMATS: [&str; 2] = ["%b %d, %Y", "%B %d, %Y"];

/// Parse a date as rendered by the site.
pub fn parse_site_date(raw: &str) -> Result<DateTime<Utc>> {
    let cleaned = WHITESPACE_RUN.replace_all(raw.trim(), " ");
    let cleaned = DATE_LABEL.replace(&cleaned, "");
    let cleaned = ORDINAL_SUFFIX.replace_all(&cleaned, "$1");

    for format in DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(&cleaned, format) {
            return Ok(dt.and_utc());
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(&cleaned, format) {
            return Ok(date.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc());
        }
    }

    Err(Error::InvalidDate(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_popup_date() {
        let dt = parse_site_date("Sep 8, 2023 02:17 PM").unwrap();
        assert_eq!(dt.to_rfc3339(), "2023-09-08T14:17:00+00:00");
    }

    #[test]
    fn test_ordinal_and_full_month() {
        let dt = parse_site_date("September 21st, 2019 11:05 AM").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2019, 9, 21));
        assert_eq!((dt.hour(), dt.minute()), (11, 5));
    }

    #[test]
    fn test_labelled_24h() {
        let dt = parse_site_date("Registered: Dec 11, 2006 09:37").unwrap();
        assert_eq!(dt.to_rfc3339(), "2006-12-11T09:37:00+00:00");
    }

    #[test]
    fn test_date_only() {
        let dt = parse_site_date("  Jan  5,   2010 ").unwrap();
        assert_eq!(dt.to_rfc3339(), "2010-01-05T00:00:00+00:00");
    }

    #[test]
    fn test_invalid() {
        assert!(matches!(parse_site_date("2 days ago"), Err(Error::InvalidDate(_))));
        assert!(matches!(parse_site_date(""), Err(Error::InvalidDate(_))));
    }
}
