use crate::consts::{CENTURY_CYCLE, MAX_MONTH, MAX_YEAR};
use crate::date::ParseError;
use chrono::{Datelike, Months, NaiveDate};
use std::fmt;
use std::num::NonZeroU8;

/// A four-digit EDTF year in the range `0..=MAX_YEAR` (0..=9999).
/// Year zero is a valid EDTF year (1 BCE).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Year(u16);

impl Year {
    /// Creates a new Year, validating that it's <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the value is > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, ParseError> {
        if value > MAX_YEAR {
            return Err(ParseError::InvalidYear(value));
        }
        Ok(Self(value))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0
    }

    /// First two digits of the year, e.g. `18` for 1850
    #[inline]
    pub const fn century_digits(self) -> u16 {
        self.0 / CENTURY_CYCLE
    }
}

impl TryFrom<u16> for Year {
    type Error = ParseError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(ParseError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// A day value guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and valid for the given year and month
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the value is 0 or invalid for the given year and month.
    pub fn new(value: u8, year: u16, month: u8) -> Result<Self, ParseError> {
        let invalid = ParseError::InvalidDay {
            month,
            day: value,
            year,
        };
        let non_zero = NonZeroU8::new(value).ok_or_else(|| invalid.clone())?;

        if days_in_month(year, month).is_none_or(|last| value > last) {
            return Err(invalid);
        }

        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

// Helper functions

/// Number of days in `month` of `year`, or `None` if the month is out of range.
pub fn days_in_month(year: u16, month: u8) -> Option<u8> {
    NaiveDate::from_ymd_opt(i32::from(year), u32::from(month), 1)?
        .checked_add_months(Months::new(1))?
        .pred_opt()
        .and_then(|last| u8::try_from(last.day()).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_new_valid() {
        assert!(Year::new(0).is_ok());
        assert!(Year::new(1).is_ok());
        assert!(Year::new(9999).is_ok());
    }

    #[test]
    fn test_year_new_invalid_too_large() {
        let result = Year::new(10000);
        assert!(matches!(result, Err(ParseError::InvalidYear(10000))));
    }

    #[test]
    fn test_year_display_is_zero_padded() {
        assert_eq!(Year::new(409).unwrap().to_string(), "0409");
        assert_eq!(Year::new(1).unwrap().to_string(), "0001");
        assert_eq!(Year::new(2024).unwrap().to_string(), "2024");
    }

    #[test]
    fn test_year_digit_groups() {
        let year = Year::new(1875).unwrap();
        assert_eq!(year.century_digits(), 18);

        let year = Year::new(9).unwrap();
        assert_eq!(year.century_digits(), 0);
    }

    #[test]
    fn test_year_try_from_u16() {
        let year: Year = 2024.try_into().unwrap();
        assert_eq!(year.get(), 2024);

        let result: Result<Year, _> = 10000.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_month_new_valid() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
    }

    #[test]
    fn test_month_new_invalid() {
        assert!(matches!(Month::new(0), Err(ParseError::InvalidMonth(0))));
        assert!(matches!(Month::new(13), Err(ParseError::InvalidMonth(13))));
    }

    #[test]
    fn test_month_display() {
        let month = Month::new(8).unwrap();
        assert_eq!(month.to_string(), "08");
        let value: u8 = month.into();
        assert_eq!(value, 8);
    }

    #[test]
    fn test_day_new_valid() {
        // January - 31 days
        assert!(Day::new(1, 2024, 1).is_ok());
        assert!(Day::new(31, 2024, 1).is_ok());

        // February non-leap - 28 days
        assert!(Day::new(28, 2023, 2).is_ok());
        assert!(Day::new(29, 2023, 2).is_err());

        // February leap year - 29 days
        assert!(Day::new(29, 2024, 2).is_ok());
        assert!(Day::new(30, 2024, 2).is_err());

        // April - 30 days
        assert!(Day::new(30, 2024, 4).is_ok());
        assert!(Day::new(31, 2024, 4).is_err());
    }

    #[test]
    fn test_day_new_invalid() {
        assert!(matches!(Day::new(0, 2024, 1), Err(ParseError::InvalidDay { .. })));
        assert!(matches!(
            Day::new(32, 2024, 1),
            Err(ParseError::InvalidDay {
                month: 1,
                day: 32,
                year: 2024
            })
        ));
        assert!(Day::new(1, 2024, 13).is_err());
    }

    #[test]
    fn test_day_display() {
        assert_eq!(Day::new(5, 2024, 8).unwrap().to_string(), "05");
    }

    #[test]
    fn test_days_in_month_february() {
        struct TestCase {
            year:        u16,
            days:        u8,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year:        2020,
                days:        29,
                description: "divisible by 4",
            },
            TestCase {
                year:        2021,
                days:        28,
                description: "not divisible by 4",
            },
            TestCase {
                year:        1900,
                days:        28,
                description: "century not divisible by 400",
            },
            TestCase {
                year:        2000,
                days:        29,
                description: "divisible by 400",
            },
            TestCase {
                year:        0,
                days:        29,
                description: "year zero is divisible by 400",
            },
        ];

        for case in &cases {
            assert_eq!(
                days_in_month(case.year, 2),
                Some(case.days),
                "Year {} ({})",
                case.year,
                case.description
            );
        }
    }

    #[test]
    fn test_all_months_have_valid_days() {
        let expected = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for month in 1..=12 {
            assert_eq!(
                days_in_month(2023, month),
                Some(expected[usize::from(month)]),
                "Month {month} has incorrect day count"
            );
        }
    }

    #[test]
    fn test_days_in_month_out_of_range() {
        assert_eq!(days_in_month(2023, 0), None);
        assert_eq!(days_in_month(2023, 13), None);
        assert_eq!(days_in_month(9999, 12), Some(31));
    }
}
