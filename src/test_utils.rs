//! Constructors shared by unit tests.

use crate::date::EdtfDate;
use crate::types::{Day, Month, Year};
use chrono::{DateTime, NaiveDate, Utc};

pub fn year(y: u16) -> Year {
    Year::new(y).expect("test year should be valid")
}

pub fn month(m: u8) -> Month {
    Month::new(m).expect("test month should be valid")
}

pub fn day(d: u8, y: u16, m: u8) -> Day {
    Day::new(d, y, m).expect("test day should be valid")
}

pub fn edtf_year(y: u16) -> EdtfDate {
    EdtfDate::Year { year: year(y) }
}

pub fn edtf_month(y: u16, m: u8) -> EdtfDate {
    EdtfDate::Month {
        year:  year(y),
        month: month(m),
    }
}

pub fn edtf_day(y: u16, m: u8, d: u8) -> EdtfDate {
    EdtfDate::Day {
        year:  year(y),
        month: month(m),
        day:   day(d, y, m),
    }
}

pub fn naive(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("test date should be valid")
}

/// Parses an RFC 3339 timestamp such as `1985-01-01T00:00:00.000Z`.
pub fn utc(timestamp: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(timestamp)
        .expect("test timestamp should be RFC 3339")
        .with_timezone(&Utc)
}

/// Renders a bound the way the assertions spell them out.
pub fn iso(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}
