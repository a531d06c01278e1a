use crate::consts::{APPROXIMATE, APPROXIMATE_AND_UNCERTAIN, OPEN_ELLIPSIS, UNCERTAIN};
use crate::date::{EdtfDate, Precision};
use crate::error::ConvertError;
use crate::keywords::find_and_remove_keywords;
use crate::locale::LocaleData;
use crate::matcher::get_valid_date_from_string;
use crate::options::Options;
use tracing::debug;

/// Keyword categories found on one side of an interval.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Flags {
    approximate: bool,
    uncertain:   bool,
    open_start:  bool,
    open_end:    bool,
}

/// Strips one keyword category from `words`, returning whether it matched.
fn strip_category(words: &mut Vec<String>, keywords: &[String]) -> bool {
    match find_and_remove_keywords(words.as_slice(), keywords) {
        Some(remaining) => {
            *words = remaining;
            true
        }
        None => false,
    }
}

/// Converts the words of one interval side into an EDTF date.
///
/// Custom modifier keywords are stripped first, then the approximate,
/// uncertain, open-start and open-end keywords in that order. What is left
/// must parse with one of the locale's date formats; the matched format
/// decides whether the result has year, month or day precision.
///
/// A `paired` side already has an interval end, so open-start and open-end
/// keywords are left in place and the side fails to match.
///
/// # Errors
/// Returns `ConvertError::NoMatchingFormat` if the remaining words are not a date.
pub fn parse_words(
    words: &[String],
    paired: bool,
    options: &Options,
    locale: &LocaleData,
) -> Result<String, ConvertError> {
    let mut words = words.to_vec();

    let mut detected = Vec::new();
    for modifier in &options.custom_modifiers {
        if strip_category(&mut words, &[modifier.keyword().to_owned()]) {
            debug!(keyword = modifier.keyword(), "custom modifier detected");
            detected.push(modifier);
        }
    }

    let keywords = &locale.keywords;
    let flags = Flags {
        approximate: strip_category(&mut words, &keywords.approximate),
        uncertain:   strip_category(&mut words, &keywords.uncertain),
        open_start:  !paired && strip_category(&mut words, &keywords.interval.open_start),
        open_end:    !paired && strip_category(&mut words, &keywords.interval.open_end),
    };
    debug!(?flags, remaining = ?words, "keywords stripped");

    let text = words.join(" ");
    let found = get_valid_date_from_string(&text, &locale.date_formats, locale.calendars())?;
    let precision = Precision::from_format(&found.format);
    let mut edtf = EdtfDate::from_naive(found.date, precision)
        .map_err(|_| ConvertError::NoMatchingFormat(text.clone()))?
        .to_string();

    for modifier in detected {
        edtf = modifier.apply(&edtf);
    }

    match (flags.approximate, flags.uncertain) {
        (true, true) => edtf.push(APPROXIMATE_AND_UNCERTAIN),
        (true, false) => edtf.push(APPROXIMATE),
        (false, true) => edtf.push(UNCERTAIN),
        (false, false) => {}
    }

    if flags.open_start {
        edtf = format!("[{OPEN_ELLIPSIS}{edtf}]");
    } else if flags.open_end {
        edtf = format!("[{edtf}{OPEN_ELLIPSIS}]");
    }

    Ok(edtf)
}
