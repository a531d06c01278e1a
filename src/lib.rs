//! Conversion between natural-language dates, Extended Date/Time Format
//! (EDTF) strings and concrete min/max date ranges.
//!
//! ```text
//! "c. 1930 - 1935"  --text_to_edtf-->  "1930~/1935"
//! "1930~/1935"      --edtf_to_text-->  "c. 1930 – 1935"
//! "1930~/1935"      --edtf_to_date-->  1927-01-01T00:00:00.000Z .. 1935-12-31T23:59:59.999Z
//! ```

mod consts;
mod converter;
mod date;
mod error;
mod format;
mod generator;
mod keywords;
mod locale;
mod matcher;
mod modifier;
mod options;
mod parser;
mod prelude;
mod preprocess;
mod range;
mod types;
mod words;

#[cfg(test)]
mod test_utils;

pub use consts::*;
pub use converter::Converter;
pub use date::{EdtfDate, ParseError, Precision};
pub use error::ConvertError;
pub use format::DateFormat;
pub use generator::edtf_to_text;
pub use keywords::{find_and_remove_keywords, find_inner_phrase};
pub use locale::{Calendar, IntervalKeywords, Keywords, Locale, LocaleData, SUPPORTED_LOCALES};
pub use matcher::{DateMatch, get_valid_date_from_string};
pub use modifier::CustomModifier;
pub use options::{ApproximateVariance, EdtfToTextOptions, MergedIntervalFormats, Options};
pub use parser::{EdtfPart, ParseResult, PartKind, parse_edtf, validate_edtf};
pub use preprocess::preprocess_text;
pub use range::{DateRange, RangeError};
pub use types::{Day, Month, Year};
pub use words::parse_words;
