use crate::consts::{BUILTIN_DELIMITERS, UNCERTAIN};
use crate::error::ConvertError;
use crate::format::DateFormat;
use crate::locale::LocaleData;
use crate::options::{MergedIntervalFormats, Options};
use crate::parser::{EdtfPart, ParseResult, PartKind, parse_edtf};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static DAY_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"D+[,./-]?\s*").expect("valid pattern"));
static MONTH_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"M+[,./-]?\s*").expect("valid pattern"));

/// Separator characters left dangling once a token is removed from a format.
const DANGLING: &[char] = &[' ', ',', '.', '/', '-'];

/// Renders an EDTF string as human-readable text in the primary locale.
///
/// # Errors
/// Returns `ConvertError::InvalidEdtf` if `edtf` does not parse.
pub fn edtf_to_text(edtf: &str, options: &Options, locale: &LocaleData) -> Result<String, ConvertError> {
    let parsed = parse_edtf(edtf, options)?;
    let mut rendered = Vec::with_capacity(2);
    for (index, part) in parsed.parts().enumerate() {
        let other = match index {
            0 => parsed.secondary_part.as_ref(),
            _ => Some(&parsed.primary_part),
        };
        rendered.push(render_part(part, index, other, options, locale)?);
    }

    let separator = separator(&parsed, options, locale);
    let text = rendered.join(format!(" {separator} ").as_str());
    debug!(edtf = edtf, text = text.as_str(), "rendered EDTF as text");
    Ok(text)
}

/// Configured separator, else the detected custom separator, else the
/// locale's first delimiter.
fn separator<'a>(parsed: &'a ParseResult, options: &'a Options, locale: &'a LocaleData) -> &'a str {
    options
        .edtf_to_text_options
        .separator
        .as_deref()
        .or(parsed.separator.as_deref())
        .or(locale.keywords.interval.delimiters.first().map(String::as_str))
        .unwrap_or(BUILTIN_DELIMITERS[1])
}

fn render_part(
    part: &EdtfPart,
    index: usize,
    other: Option<&EdtfPart>,
    options: &Options,
    locale: &LocaleData,
) -> Result<String, ConvertError> {
    let keywords = &locale.keywords;
    let mut text = String::new();

    for modifier in &part.detected_modifiers {
        text.push_str(modifier.keyword());
        text.push(' ');
    }
    if part.has_open_start {
        push_keyword(&mut text, keywords.interval.open_start.first());
    }
    if part.is_approximate {
        push_keyword(&mut text, keywords.approximate.first());
    }

    let earliest = part.earliest()?;
    match part.kind {
        PartKind::Century => {
            let century = earliest.year_typed().century_digits() + 1;
            text.push_str(&format!("{century}th century"));
        }
        // leading zeros are kept: `007X` is the 0070s
        PartKind::Decade => {
            text.push_str(part.year_text().get(..3).unwrap_or_default());
            text.push_str("0s");
        }
        PartKind::Date => {
            let format = part_format(part, index, other, options, locale);
            let date = earliest
                .first_day()
                .ok_or_else(|| ConvertError::InvalidEdtf(part.clean_edtf.clone()))?;
            text.push_str(&DateFormat::new(&format).format(date, locale.primary_calendar()));
        }
    }

    if part.has_open_end {
        if let Some(keyword) = keywords.interval.open_end.first() {
            text.push(' ');
            text.push_str(keyword);
        }
    }
    if part.is_uncertain {
        text.push(UNCERTAIN);
    }
    Ok(text)
}

fn push_keyword(text: &mut String, keyword: Option<&String>) {
    if let Some(keyword) = keyword {
        text.push_str(keyword);
        text.push(' ');
    }
}

/// Picks the format for one side: the merged interval format when both
/// sides share a year, otherwise the configured or locale default with the
/// tokens this part cannot fill removed.
fn part_format(
    part: &EdtfPart,
    index: usize,
    other: Option<&EdtfPart>,
    options: &Options,
    locale: &LocaleData,
) -> String {
    let text_options = &options.edtf_to_text_options;
    let mut format = text_options
        .date_format
        .clone()
        .or_else(|| locale.date_formats.first().cloned())
        .unwrap_or_else(|| part.format().to_owned());

    if !part.precision.has_day() {
        format = drop_token(&DAY_TOKEN, &format);
    }
    if !part.precision.has_month() {
        format = drop_token(&MONTH_TOKEN, &format);
    }

    let merged = text_options
        .merged_interval_date_formats
        .as_ref()
        .zip(other)
        .filter(|(_, other)| other.year_text() == part.year_text())
        .and_then(|(merged, other)| merged_format(merged, part, other));
    if let Some(pair) = merged {
        format.clone_from(&pair[index.min(1)]);
    }
    format
}

fn merged_format<'a>(
    merged: &'a MergedIntervalFormats,
    part: &EdtfPart,
    other: &EdtfPart,
) -> Option<&'a [String; 2]> {
    if part.precision.has_day() {
        let same_month = !part.month_text().is_empty() && other.month_text() == part.month_text();
        same_month
            .then_some(merged.same_year_and_month.as_ref())
            .flatten()
            .or(merged.same_year.as_ref())
    } else if part.precision.has_month() {
        merged.same_year_only_month.as_ref()
    } else {
        None
    }
}

fn drop_token(token: &Regex, format: &str) -> String {
    token.replace_all(format, "").trim_matches(DANGLING).to_owned()
}
