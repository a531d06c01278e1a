//! Locale date format strings.
//!
//! Locale resources describe dates with moment-style tokens (`MMMM D, YYYY`,
//! `DD/MM/YYYY`, ...). A [`DateFormat`] compiles such a string once and can
//! then strictly parse text into a calendar date or render a date back to text.
//!
//! Supported tokens:
//! - `YYYY` four-digit year
//! - `MMMM` full month name, `MMM` short month name (case-insensitive when parsing)
//! - `MM` two-digit month, `M` one or two digit month
//! - `DD` two-digit day, `D` one or two digit day
//! - `[text]` escaped literal text
//!
//! Every other character is literal and must match exactly.

use crate::locale::Calendar;
use chrono::{Datelike, NaiveDate};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Year,
    MonthName,
    MonthShort,
    MonthPadded,
    Month,
    DayPadded,
    Day,
    Literal(String),
}

/// A compiled date format string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat {
    source: String,
    tokens: Vec<Token>,
}

impl DateFormat {
    pub fn new(source: &str) -> Self {
        let chars: Vec<char> = source.chars().collect();
        let mut tokens = Vec::new();
        let mut literal = String::new();
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];
            let run = chars[i..].iter().take_while(|&&other| other == c).count();
            let token = match (c, run) {
                ('[', _) => {
                    let close = chars[i + 1..].iter().position(|&other| other == ']');
                    if let Some(offset) = close {
                        literal.extend(&chars[i + 1..i + 1 + offset]);
                        i += offset + 2;
                    } else {
                        literal.push(c);
                        i += 1;
                    }
                    continue;
                }
                ('Y', 4) => Token::Year,
                ('M', n) if n >= 4 => Token::MonthName,
                ('M', 3) => Token::MonthShort,
                ('M', 2) => Token::MonthPadded,
                ('M', 1) => Token::Month,
                ('D', 2) => Token::DayPadded,
                ('D', 1) => Token::Day,
                _ => {
                    literal.extend(std::iter::repeat_n(c, run));
                    i += run;
                    continue;
                }
            };
            if !literal.is_empty() {
                tokens.push(Token::Literal(std::mem::take(&mut literal)));
            }
            tokens.push(token);
            i += match c {
                'M' => run.min(4),
                _ => run,
            };
        }
        if !literal.is_empty() {
            tokens.push(Token::Literal(literal));
        }

        Self {
            source: source.to_owned(),
            tokens,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Strictly parses `input`: every token must match, the whole input must be
    /// consumed and the result must be a real calendar date. Components the
    /// format does not mention default to January and the first of the month.
    pub fn parse(&self, input: &str, calendar: &Calendar) -> Option<NaiveDate> {
        let mut rest = input;
        let mut year: Option<i32> = None;
        let mut month: Option<u32> = None;
        let mut day: Option<u32> = None;

        for token in &self.tokens {
            match token {
                Token::Year => year = Some(take_digits(&mut rest, 4, 4)?),
                Token::MonthPadded => month = Some(take_digits(&mut rest, 2, 2)?),
                Token::Month => month = Some(take_digits(&mut rest, 1, 2)?),
                Token::DayPadded => day = Some(take_digits(&mut rest, 2, 2)?),
                Token::Day => day = Some(take_digits(&mut rest, 1, 2)?),
                Token::MonthName => month = Some(take_month_name(&mut rest, calendar.months())?),
                Token::MonthShort => {
                    month = Some(take_month_name(&mut rest, calendar.months_short())?);
                }
                Token::Literal(text) => rest = rest.strip_prefix(text.as_str())?,
            }
        }

        if !rest.is_empty() {
            return None;
        }

        NaiveDate::from_ymd_opt(year?, month.unwrap_or(1), day.unwrap_or(1))
    }

    /// Renders `date` using the calendar's month names.
    pub fn format(&self, date: NaiveDate, calendar: &Calendar) -> String {
        let month_index = date.month0() as usize;
        let mut out = String::new();
        for token in &self.tokens {
            match token {
                Token::Year => out.push_str(&format!("{:04}", date.year())),
                Token::MonthName => out.push_str(calendar.month_name(month_index)),
                Token::MonthShort => out.push_str(calendar.month_short(month_index)),
                Token::MonthPadded => out.push_str(&format!("{:02}", date.month())),
                Token::Month => out.push_str(&date.month().to_string()),
                Token::DayPadded => out.push_str(&format!("{:02}", date.day())),
                Token::Day => out.push_str(&date.day().to_string()),
                Token::Literal(text) => out.push_str(text),
            }
        }
        out
    }
}

/// Consumes between `min` and `max` ASCII digits from the front of `rest`.
fn take_digits<T: std::str::FromStr>(rest: &mut &str, min: usize, max: usize) -> Option<T> {
    let len = rest
        .bytes()
        .take(max)
        .take_while(u8::is_ascii_digit)
        .count();
    if len < min {
        return None;
    }
    let (digits, tail) = rest.split_at(len);
    *rest = tail;
    digits.parse().ok()
}

/// Consumes the longest month name matching the front of `rest`, ignoring case.
/// Returns the 1-based month number.
fn take_month_name(rest: &mut &str, names: &[String]) -> Option<u32> {
    let mut best: Option<(usize, usize)> = None;
    for (index, name) in names.iter().enumerate() {
        let char_count = name.chars().count();
        let byte_len: usize = rest.chars().take(char_count).map(char::len_utf8).sum();
        let candidate = &rest[..byte_len];
        if !name.is_empty()
            && candidate.to_lowercase() == name.to_lowercase()
            && best.is_none_or(|(_, len)| byte_len > len)
        {
            best = Some((index, byte_len));
        }
    }
    let (index, byte_len) = best?;
    *rest = &rest[byte_len..];
    u32::try_from(index + 1).ok()
}
