//! EDTF validation and decomposition.
//!
//! The supported grammar covers years, months and days (`YYYY`, `YYYY-MM`,
//! `YYYY-MM-DD`), unspecified decades and centuries (`187X`, `18XX`), the
//! approximate/uncertain markers `~`, `?` and `%`, open intervals
//! (`[..1900]`, `[1900..]`) and closed intervals (`1900/1910`).

use crate::consts::{RANGE_SEPARATOR, UNSPECIFIED_DIGIT};
use crate::date::{EdtfDate, Precision};
use crate::error::ConvertError;
use crate::modifier::CustomModifier;
use crate::options::{ApproximateVariance, Options};
use chrono::{DateTime, Datelike, Days, Months, NaiveDate, NaiveTime, TimeDelta, Utc};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

const MODIFIER: &str = r"[?~%]";
const DATE: &str = r"(?:[0-9]{4}|[0-9]{3}X|[0-9]{2}XX)(?:-(?:0[1-9]|1[0-2])(?:-(?:0[1-9]|[12][0-9]|3[01]))?)?";
const OPEN_START: &str = r"\[(?:\s*\.\.)?";
const OPEN_END: &str = r"(?:\.\.\s*)?\]";

/// The full grammar: an optional opening bracket, one date section, then
/// either a second section after `/` or an optional closing bracket.
static EDTF: LazyLock<Regex> = LazyLock::new(|| {
    let section = format!(r"{MODIFIER}?\s*{DATE}\s*{MODIFIER}?");
    Regex::new(&format!(
        r"^\s*(?:{OPEN_START})?\s*{section}\s*(?:/\s*{section}|(?:{OPEN_END})?)?\s*$"
    ))
    .expect("valid pattern")
});

static APPROXIMATE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[~%]").expect("valid pattern"));
static UNCERTAIN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[?%]").expect("valid pattern"));
static HAS_OPEN_START: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*\[\s*\.\.").expect("valid pattern"));
static HAS_OPEN_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.\.\s*\]\s*$").expect("valid pattern"));
static CENTURY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{2}XX$").expect("valid pattern"));
static DECADE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{3}X$").expect("valid pattern"));
static MARKUP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\[\].?~%\s]").expect("valid pattern"));

/// Whether a part names a calendar date or a span of years with unspecified digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartKind {
    /// `YYYY`, `YYYY-MM` or `YYYY-MM-DD`
    Date,
    /// `DDDX`, e.g. `147X` for the 1470s
    Decade,
    /// `DDXX`, e.g. `18XX` for the 19th century
    Century,
}

/// One `/`-delimited section of an EDTF string.
#[derive(Debug, Clone, PartialEq)]
pub struct EdtfPart {
    /// Date digits with every bracket, ellipsis, modifier and space removed.
    pub clean_edtf:         String,
    /// Decided by the length of `clean_edtf`; decades and centuries are years.
    pub precision:          Precision,
    pub kind:               PartKind,
    pub is_approximate:     bool,
    pub is_uncertain:       bool,
    pub has_open_start:     bool,
    pub has_open_end:       bool,
    /// Custom modifiers found on this part, in detection order.
    pub detected_modifiers: Vec<CustomModifier>,
    pub min_date:           DateTime<Utc>,
    pub max_date:           DateTime<Utc>,
}

impl EdtfPart {
    /// The EDTF skeleton of this part (`YYYY`, `YYYY-MM` or `YYYY-MM-DD`).
    pub const fn format(&self) -> &'static str {
        self.precision.skeleton()
    }

    pub const fn is_century(&self) -> bool {
        matches!(self.kind, PartKind::Century)
    }

    pub const fn is_decade(&self) -> bool {
        matches!(self.kind, PartKind::Decade)
    }

    /// The earliest date this part can stand for, without approximation.
    /// Unspecified digits count as `0`.
    pub fn earliest(&self) -> Result<EdtfDate, ConvertError> {
        self.clean_edtf
            .replace(UNSPECIFIED_DIGIT, "0")
            .parse()
            .map_err(|_| ConvertError::InvalidEdtf(self.clean_edtf.clone()))
    }

    /// The latest date this part can stand for, without approximation.
    /// Unspecified digits count as `9`.
    fn latest(&self) -> Result<EdtfDate, ConvertError> {
        self.clean_edtf
            .replace(UNSPECIFIED_DIGIT, "9")
            .parse()
            .map_err(|_| ConvertError::InvalidEdtf(self.clean_edtf.clone()))
    }

    /// Year digits, `YYYY` (possibly containing `X`).
    pub fn year_text(&self) -> &str {
        self.clean_edtf.get(..4).unwrap_or(&self.clean_edtf)
    }

    /// Month digits, `MM`, empty for year precision.
    pub fn month_text(&self) -> &str {
        self.clean_edtf.get(5..7).unwrap_or("")
    }
}

/// The decomposition of an EDTF string.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult {
    pub primary_part:   EdtfPart,
    /// Present iff the string was an interval (`start/end`).
    pub secondary_part: Option<EdtfPart>,
    /// Keyword of the custom separator detected on the whole string, if any.
    pub separator:      Option<String>,
}

impl ParseResult {
    /// Both parts, primary first.
    pub fn parts(&self) -> impl Iterator<Item = &EdtfPart> {
        std::iter::once(&self.primary_part).chain(self.secondary_part.as_ref())
    }
}

/// Checks an EDTF string against the supported grammar.
///
/// # Errors
/// Returns `ConvertError::InvalidEdtf` naming the string if it does not conform.
pub fn validate_edtf(edtf: &str) -> Result<(), ConvertError> {
    if EDTF.is_match(edtf) {
        Ok(())
    } else {
        Err(ConvertError::InvalidEdtf(edtf.to_owned()))
    }
}

/// Validates and decomposes an EDTF string into one or two parts.
///
/// # Errors
/// Returns `ConvertError::InvalidEdtf` if any part breaks the grammar, names
/// an impossible date, or an open bracket is combined with a `/` interval.
pub fn parse_edtf(edtf: &str, options: &Options) -> Result<ParseResult, ConvertError> {
    let mut body = edtf.to_owned();
    let mut separator = None;
    if let Some(custom) = options.custom_separators.iter().find(|s| s.detect(edtf)) {
        debug!(keyword = custom.keyword(), "custom separator detected");
        separator = Some(custom.keyword().to_owned());
        body = custom.strip(edtf);
    }

    let sections: Vec<&str> = body.split(RANGE_SEPARATOR).collect();
    let (primary, secondary) = match sections.as_slice() {
        [single] => (parse_part(single, options)?, None),
        [start, end] => (parse_part(start, options)?, Some(parse_part(end, options)?)),
        _ => return Err(ConvertError::InvalidEdtf(edtf.to_owned())),
    };

    if let Some(secondary) = &secondary {
        let open = [&primary, secondary]
            .iter()
            .any(|part| part.has_open_start || part.has_open_end);
        if open {
            return Err(ConvertError::InvalidEdtf(edtf.to_owned()));
        }
    }

    Ok(ParseResult {
        primary_part: primary,
        secondary_part: secondary,
        separator,
    })
}

fn parse_part(section: &str, options: &Options) -> Result<EdtfPart, ConvertError> {
    let mut section = section.to_owned();
    let mut detected_modifiers = Vec::new();
    for modifier in &options.custom_modifiers {
        if modifier.detect(&section) {
            debug!(keyword = modifier.keyword(), "custom modifier detected");
            detected_modifiers.push(modifier.clone());
            section = modifier.strip(&section);
        }
    }

    validate_edtf(&section)?;

    let clean_edtf = MARKUP.replace_all(&section, "").into_owned();
    let kind = if CENTURY.is_match(&clean_edtf) {
        PartKind::Century
    } else if DECADE.is_match(&clean_edtf) {
        PartKind::Decade
    } else {
        PartKind::Date
    };

    let mut part = EdtfPart {
        precision: Precision::from_clean_len(clean_edtf.len()),
        clean_edtf,
        kind,
        is_approximate: APPROXIMATE.is_match(&section),
        is_uncertain: UNCERTAIN.is_match(&section),
        has_open_start: HAS_OPEN_START.is_match(&section),
        has_open_end: HAS_OPEN_END.is_match(&section),
        detected_modifiers,
        min_date: DateTime::<Utc>::MIN_UTC,
        max_date: DateTime::<Utc>::MAX_UTC,
    };

    let invalid = || ConvertError::InvalidEdtf(section.clone());
    let variance = variance_for(&part, &options.approximate_variance);
    let (min_date, max_date) = bounds(&part, variance).ok_or_else(invalid)?;
    part.min_date = min_date;
    part.max_date = max_date;
    Ok(part)
}

/// Min and max instants of a part, widened by `variance` units and clamped
/// to the start and end of the unit.
fn bounds(part: &EdtfPart, variance: u32) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let earliest = part.earliest().ok()?;
    let latest = part.latest().ok()?;
    let (first, last) = (earliest.first_day()?, latest.last_day()?);

    let (first, last) = match part.precision {
        Precision::Day => (
            first.checked_sub_days(Days::new(u64::from(variance)))?,
            last.checked_add_days(Days::new(u64::from(variance)))?,
        ),
        Precision::Month => (
            first.checked_sub_months(Months::new(variance))?,
            end_of_month(last.checked_add_months(Months::new(variance))?)?,
        ),
        Precision::Year => {
            let months = variance.checked_mul(12)?;
            (
                first.checked_sub_months(Months::new(months))?,
                last.checked_add_months(Months::new(months))?,
            )
        }
    };

    Some((start_of_day(first), end_of_day(last)?))
}

fn end_of_month(date: NaiveDate) -> Option<NaiveDate> {
    let first_of_month = date.with_day0(0)?;
    first_of_month.checked_add_months(Months::new(1))?.pred_opt()
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

fn end_of_day(date: NaiveDate) -> Option<DateTime<Utc>> {
    let next = date.succ_opt()?;
    Some(start_of_day(next) - TimeDelta::milliseconds(1))
}

/// Units an approximate part is widened by on each side.
const fn variance_for(part: &EdtfPart, variance: &ApproximateVariance) -> u32 {
    if part.is_approximate {
        variance.for_precision(part.precision)
    } else {
        0
    }
}
