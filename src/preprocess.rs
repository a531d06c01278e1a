//! Normalization of free-form date text before it is split into words.
//!
//! Each rule is anchored to the whole string and only rewrites input that
//! matches it exactly. Rules run in order, each on the previous rule's output.
//! Digits are ASCII only; other scripts pass through untouched.

use crate::locale::LocaleData;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// `1-2/12/2000` → `1/12/2000-2/12/2000`
static DAY_RANGE_NUMERIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([^0-9]*?)([0-9]{1,2})([^0-9]+?)([0-9]{1,2})/([0-9]{1,2})/([0-9]{4})([^0-9]*?)$").expect("valid pattern")
});

/// `1-2 December 2000` → `1 December 2000-2 December 2000`
static DAY_RANGE_NAMED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([^0-9]*?)([0-9]{1,2})([^0-9]+?)([0-9]{1,2})\s*([^-–0-9]+?)\s*([0-9]{4})([^0-9]*?)$").expect("valid pattern")
});

/// `31/01-28/02/2000` → `31/01/2000-28/02/2000`
static DAY_MONTH_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([^0-9]*?)([0-9]{1,2})/([0-9]{1,2})([^0-9]+?)([0-9]{1,2})/([0-9]{1,2})/([0-9]{4})([^0-9]*?)$").expect("valid pattern")
});

/// `September - October 1958` → `September 1958 - October 1958`
static MONTH_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^-–0-9]+?)\s*[-–]\s*([^-–0-9]+?)\s*([0-9]{4})$").expect("valid pattern"));

/// `1930-35` → `1930-1935`
static PARTIAL_END_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^0-9]*?)([0-9]{4})([^0-9]+?)([0-9]{2})([^0-9]*?)$").expect("valid pattern"));

/// `1930-1935` → `1930 - 1935`
static UNSPACED_DELIMITER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^-–]*\S)[-–](\S[^-–]*)$").expect("valid pattern"));

/// Applies every normalization rule to `text`.
pub fn preprocess_text(text: &str, locale: &LocaleData) -> String {
    let mut text = text.replace(',', "");

    text = rewrite(&DAY_RANGE_NUMERIC, &text, |c| {
        format!(
            "{}{}/{}/{}{}{}/{}/{}{}",
            &c[1], &c[2], &c[5], &c[6], &c[3], &c[4], &c[5], &c[6], &c[7]
        )
    });

    text = rewrite(&DAY_RANGE_NAMED, &text, |c| {
        format!(
            "{}{} {} {}{}{} {} {}{}",
            &c[1], &c[2], &c[5], &c[6], &c[3], &c[4], &c[5], &c[6], &c[7]
        )
    });

    text = rewrite(&DAY_MONTH_RANGE, &text, |c| {
        format!(
            "{}{}/{}/{}{}{}/{}/{}{}",
            &c[1], &c[2], &c[3], &c[7], &c[4], &c[5], &c[6], &c[7], &c[8]
        )
    });

    text = rewrite(&MONTH_RANGE, &text, |c| {
        format!("{} {} - {} {}", c[1].trim(), &c[3], c[2].trim(), &c[3])
    });

    text = rewrite(&PARTIAL_END_YEAR, &text, |c| {
        let century = c[2].get(..2).unwrap_or_default();
        format!("{}{}{}{}{}{}", &c[1], &c[2], &c[3], century, &c[4], &c[5])
    });

    text = rewrite(&UNSPACED_DELIMITER, &text, |c| format!("{} - {}", &c[1], &c[2]));

    if locale.has_month_shorthands() {
        text = expand_month_shorthands(&text, locale);
    }

    text
}

fn rewrite(pattern: &Regex, text: &str, replace: impl Fn(&Captures<'_>) -> String) -> String {
    pattern
        .captures(text)
        .map_or_else(|| text.to_owned(), |captures| replace(&captures))
}

/// Replaces each month abbreviation (optionally followed by a period) with
/// the full month name of the primary locale.
fn expand_month_shorthands(text: &str, locale: &LocaleData) -> String {
    let calendar = locale.primary_calendar();
    let mut text = text.to_owned();
    for (index, shorthands) in locale.month_shorthands.iter().enumerate() {
        let full_name = calendar.month_name(index);
        for shorthand in shorthands {
            let pattern = format!(r"(?i)\b{}\b\.?", regex::escape(shorthand));
            let Ok(regex) = Regex::new(&pattern) else {
                continue;
            };
            text = regex.replace_all(&text, regex::NoExpand(full_name)).into_owned();
        }
    }
    text
}
