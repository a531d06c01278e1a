use crate::consts::{DATE_SEPARATOR, JANUARY, MAX_MONTH, MAX_YEAR, MIN_DAY};
use crate::prelude::*;
use crate::types;
use chrono::{Datelike, Months, NaiveDate};
use std::str::FromStr;

/// How much of a calendar date an EDTF value pins down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum Precision {
    #[display(fmt = "YYYY")]
    Year,
    #[display(fmt = "YYYY-MM")]
    Month,
    #[display(fmt = "YYYY-MM-DD")]
    Day,
}

impl Precision {
    /// The EDTF skeleton for this precision (`YYYY`, `YYYY-MM` or `YYYY-MM-DD`)
    pub const fn skeleton(self) -> &'static str {
        match self {
            Self::Year => "YYYY",
            Self::Month => "YYYY-MM",
            Self::Day => "YYYY-MM-DD",
        }
    }

    /// Precision implied by the length of a cleaned EDTF date (4, 7 or 10 characters).
    pub const fn from_clean_len(len: usize) -> Self {
        match len {
            4 => Self::Year,
            7 => Self::Month,
            _ => Self::Day,
        }
    }

    /// Precision implied by a date format string: day if it has a `D` token,
    /// month if it has an `M` token, year otherwise.
    pub fn from_format(format: &str) -> Self {
        if format.contains('D') {
            Self::Day
        } else if format.contains('M') {
            Self::Month
        } else {
            Self::Year
        }
    }

    pub const fn has_month(self) -> bool {
        matches!(self, Self::Month | Self::Day)
    }

    pub const fn has_day(self) -> bool {
        matches!(self, Self::Day)
    }
}

/// A cleaned EDTF date with year, month or day precision.
/// Missing components are never fabricated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum EdtfDate {
    /// Full date with day, month, and year
    #[display(fmt = "{}-{}-{}", "year", "month", "day")]
    Day {
        year:  types::Year,
        month: types::Month,
        day:   types::Day,
    },
    /// Month and year only
    #[display(fmt = "{}-{}", "year", "month")]
    Month {
        year:  types::Year,
        month: types::Month,
    },
    /// Year only
    #[display(fmt = "{}", "year")]
    Year { year: types::Year },
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 0-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl EdtfDate {
    /// Truncates a calendar date to the given precision.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the year is outside `0..=MAX_YEAR`.
    pub fn from_naive(date: NaiveDate, precision: Precision) -> Result<Self, ParseError> {
        let year_value = u16::try_from(date.year())
            .map_err(|_| ParseError::InvalidFormat(format!("year {} out of range", date.year())))?;
        let year = types::Year::new(year_value)?;
        // chrono months and days are always in range for a valid NaiveDate
        let month_value = u8::try_from(date.month()).unwrap_or(JANUARY);
        let day_value = u8::try_from(date.day()).unwrap_or(MIN_DAY);
        Ok(match precision {
            Precision::Year => Self::Year { year },
            Precision::Month => Self::Month {
                year,
                month: types::Month::new(month_value)?,
            },
            Precision::Day => Self::Day {
                year,
                month: types::Month::new(month_value)?,
                day: types::Day::new(day_value, year_value, month_value)?,
            },
        })
    }

    pub const fn precision(&self) -> Precision {
        match self {
            Self::Day { .. } => Precision::Day,
            Self::Month { .. } => Precision::Month,
            Self::Year { .. } => Precision::Year,
        }
    }

    /// Returns the year component (always present)
    pub const fn year(&self) -> u16 {
        match self {
            Self::Day { year, .. } | Self::Month { year, .. } | Self::Year { year } => year.get(),
        }
    }

    /// Returns the month component if present
    pub const fn month(&self) -> Option<u8> {
        match self {
            Self::Day { month, .. } | Self::Month { month, .. } => Some(month.get()),
            Self::Year { .. } => None,
        }
    }

    /// Returns the day component if present
    pub const fn day(&self) -> Option<u8> {
        match self {
            Self::Day { day, .. } => Some(day.get()),
            Self::Month { .. } | Self::Year { .. } => None,
        }
    }

    /// Returns the Year type (always present)
    pub const fn year_typed(&self) -> types::Year {
        match self {
            Self::Day { year, .. } | Self::Month { year, .. } | Self::Year { year } => *year,
        }
    }

    /// Earliest concrete (year, month, day) represented by this value.
    pub const fn lower_bound(&self) -> (u16, u8, u8) {
        match *self {
            Self::Day { year, month, day } => (year.get(), month.get(), day.get()),
            Self::Month { year, month } => (year.get(), month.get(), MIN_DAY),
            Self::Year { year } => (year.get(), JANUARY, MIN_DAY),
        }
    }

    /// The first calendar day covered by this value.
    pub fn first_day(&self) -> Option<NaiveDate> {
        let (y, m, d) = self.lower_bound();
        NaiveDate::from_ymd_opt(i32::from(y), u32::from(m), u32::from(d))
    }

    /// The last calendar day covered by this value.
    pub fn last_day(&self) -> Option<NaiveDate> {
        let first = self.first_day()?;
        let span = match self {
            Self::Day { .. } => return Some(first),
            Self::Month { .. } => Months::new(1),
            Self::Year { .. } => Months::new(u32::from(MAX_MONTH)),
        };
        first.checked_add_months(span)?.pred_opt()
    }
}

impl FromStr for EdtfDate {
    type Err = ParseError;

    /// Parses a cleaned EDTF date: `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
        let year_str = parts[0];
        if year_str.len() != 4 {
            return Err(ParseError::InvalidFormat(trimmed.to_owned()));
        }
        let year_u16 = Self::parse_u16(year_str)?;
        let year = types::Year::new(year_u16)?;

        match parts.as_slice() {
            [_] => Ok(Self::Year { year }),
            [_, month] => {
                let month_u8 = Self::parse_two_digits(month)?;
                Ok(Self::Month {
                    year,
                    month: types::Month::new(month_u8)?,
                })
            }
            [_, month, day] => {
                let month_u8 = Self::parse_two_digits(month)?;
                let day_u8 = Self::parse_two_digits(day)?;
                let month = types::Month::new(month_u8)?;
                let day = types::Day::new(day_u8, year_u16, month_u8)?;
                Ok(Self::Day { year, month, day })
            }
            _ => Err(ParseError::InvalidFormat(format!(
                "Too many {} separators: expected 0-2, found {}",
                DATE_SEPARATOR,
                parts.len() - 1
            ))),
        }
    }
}

impl EdtfDate {
    /// Helper to parse u16 with better error messages
    fn parse_u16(s: &str) -> Result<u16, ParseError> {
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidFormat(s.to_owned()));
        }
        s.parse::<u16>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }

    /// Month and day components are always written with two digits
    fn parse_two_digits(s: &str) -> Result<u8, ParseError> {
        if s.len() != 2 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidFormat(s.to_owned()));
        }
        s.parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }
}
