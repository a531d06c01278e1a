use crate::error::ConvertError;
use crate::format::DateFormat;
use crate::locale::Calendar;
use chrono::NaiveDate;
use tracing::trace;

/// A parsed date together with the format string that parsed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateMatch {
    pub date:   NaiveDate,
    pub format: String,
}

/// Finds the first locale and format, in priority order, that strictly parses
/// `text`. Locales are the outer loop, so every format is tried under the
/// first locale's month names before the second locale is consulted.
///
/// # Errors
/// Returns `ConvertError::NoMatchingFormat` naming `text` if nothing parses it.
pub fn get_valid_date_from_string(
    text: &str,
    formats: &[String],
    calendars: &[Calendar],
) -> Result<DateMatch, ConvertError> {
    let compiled: Vec<DateFormat> = formats.iter().map(|f| DateFormat::new(f)).collect();
    for calendar in calendars {
        for format in &compiled {
            trace!(text = text, locale = calendar.locale(), format = format.as_str(), "trying date format");
            if let Some(date) = format.parse(text, calendar) {
                return Ok(DateMatch {
                    date,
                    format: format.as_str().to_owned(),
                });
            }
        }
    }
    Err(ConvertError::NoMatchingFormat(text.to_owned()))
}
