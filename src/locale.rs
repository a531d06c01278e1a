//! Locale resources and their priority-ordered merge.
//!
//! A [`Locale`] is one language resource: its date formats in priority order,
//! month names, and the keyword lists that trigger EDTF features. A converter
//! configured with several locales works on a single merged [`LocaleData`].

use crate::consts::MAX_MONTH;
use crate::error::ConvertError;
use serde::{Deserialize, Serialize};

const EN: &str = include_str!("../locales/en.json");
const FR: &str = include_str!("../locales/fr.json");

/// Names of the locales bundled with the crate.
pub const SUPPORTED_LOCALES: [&str; 2] = ["en", "fr"];

const MONTHS: usize = MAX_MONTH as usize;

/// Keywords for the open ends of an interval and interval delimiters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IntervalKeywords {
    pub delimiters: Vec<String>,
    pub open_start: Vec<String>,
    pub open_end:   Vec<String>,
}

/// Keyword lists, each in priority order. The first entry of a list is the
/// one used when rendering text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Keywords {
    pub approximate: Vec<String>,
    pub uncertain:   Vec<String>,
    pub interval:    IntervalKeywords,
}

impl Keywords {
    fn merge(&mut self, other: &Self) {
        merge_unique(&mut self.approximate, &other.approximate);
        merge_unique(&mut self.uncertain, &other.uncertain);
        merge_unique(&mut self.interval.delimiters, &other.interval.delimiters);
        merge_unique(&mut self.interval.open_start, &other.interval.open_start);
        merge_unique(&mut self.interval.open_end, &other.interval.open_end);
    }
}

/// One locale resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Locale {
    pub name:            String,
    pub date_formats:    Vec<String>,
    pub months:          Vec<String>,
    pub months_short:    Vec<String>,
    #[serde(default)]
    pub keywords:        Keywords,
    #[serde(default)]
    pub month_shorthands: Vec<Vec<String>>,
}

impl Locale {
    /// Loads one of the bundled locales by name.
    ///
    /// # Errors
    /// Returns `ConvertError::UnsupportedLocale` if no resource exists for `name`.
    pub fn builtin(name: &str) -> Result<Self, ConvertError> {
        let source = match name {
            "en" => EN,
            "fr" => FR,
            _ => return Err(ConvertError::UnsupportedLocale(name.to_owned())),
        };
        Self::from_json(source)
    }

    /// Parses and validates a locale resource.
    ///
    /// # Errors
    /// Returns `ConvertError::Config` for malformed JSON and
    /// `ConvertError::InvalidLocale` when the resource breaks the contract.
    pub fn from_json(source: &str) -> Result<Self, ConvertError> {
        let locale: Self = serde_json::from_str(source)?;
        locale.validate()?;
        Ok(locale)
    }

    fn validate(&self) -> Result<(), ConvertError> {
        let invalid = |reason: &str| ConvertError::InvalidLocale {
            locale: self.name.clone(),
            reason: reason.to_owned(),
        };
        if self.date_formats.is_empty() {
            return Err(invalid("at least one date format is required"));
        }
        if self.months.len() != MONTHS || self.months_short.len() != MONTHS {
            return Err(invalid("month name tables must have 12 entries"));
        }
        if !self.month_shorthands.is_empty() && self.month_shorthands.len() != MONTHS {
            return Err(invalid("month shorthand table must have 12 entries"));
        }
        Ok(())
    }

    /// The month names of this locale.
    pub fn calendar(&self) -> Calendar {
        Calendar {
            locale:       self.name.clone(),
            months:       self.months.clone(),
            months_short: self.months_short.clone(),
        }
    }
}

/// Month names of one locale, used to parse and render textual months.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calendar {
    locale:       String,
    months:       Vec<String>,
    months_short: Vec<String>,
}

impl Calendar {
    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn months(&self) -> &[String] {
        &self.months
    }

    pub fn months_short(&self) -> &[String] {
        &self.months_short
    }

    /// Full name of the month at zero-based `index`.
    pub fn month_name(&self, index: usize) -> &str {
        self.months.get(index).map_or("", String::as_str)
    }

    /// Short name of the month at zero-based `index`.
    pub fn month_short(&self, index: usize) -> &str {
        self.months_short.get(index).map_or("", String::as_str)
    }
}

/// Locale resources merged in priority order.
///
/// Lists are concatenated in locale order with duplicates removed, so the
/// first locale's entries win on priority. Calendars stay separate so the
/// matcher can try each locale's month names in turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleData {
    locales:              Vec<String>,
    calendars:            Vec<Calendar>,
    pub date_formats:     Vec<String>,
    pub keywords:         Keywords,
    pub month_shorthands: Vec<Vec<String>>,
}

impl LocaleData {
    /// Loads and merges the bundled locales named in `names`.
    ///
    /// # Errors
    /// Returns `ConvertError::UnsupportedLocale` for an unknown name and
    /// `ConvertError::NoLocales` for an empty list.
    pub fn load<S: AsRef<str>>(names: &[S]) -> Result<Self, ConvertError> {
        let locales = names
            .iter()
            .map(|name| Locale::builtin(name.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::merge(locales)
    }

    /// Merges locale resources; the first one has the highest priority.
    ///
    /// # Errors
    /// Returns `ConvertError::NoLocales` if `locales` is empty.
    pub fn merge(locales: Vec<Locale>) -> Result<Self, ConvertError> {
        let mut iter = locales.into_iter();
        let first = iter.next().ok_or(ConvertError::NoLocales)?;

        let mut data = Self {
            locales:          vec![first.name.clone()],
            calendars:        vec![first.calendar()],
            date_formats:     Vec::new(),
            keywords:         first.keywords.clone(),
            month_shorthands: vec![Vec::new(); MONTHS],
        };
        merge_unique(&mut data.date_formats, &first.date_formats);
        data.merge_shorthands(&first.month_shorthands);

        for locale in iter {
            if data.locales.contains(&locale.name) {
                continue;
            }
            data.locales.push(locale.name.clone());
            data.calendars.push(locale.calendar());
            merge_unique(&mut data.date_formats, &locale.date_formats);
            data.keywords.merge(&locale.keywords);
            data.merge_shorthands(&locale.month_shorthands);
        }

        Ok(data)
    }

    fn merge_shorthands(&mut self, table: &[Vec<String>]) {
        for (merged, entries) in self.month_shorthands.iter_mut().zip(table) {
            merge_unique(merged, entries);
        }
    }

    /// Locale names in priority order.
    pub fn locales(&self) -> &[String] {
        &self.locales
    }

    /// Calendars in priority order.
    pub fn calendars(&self) -> &[Calendar] {
        &self.calendars
    }

    /// The highest-priority calendar, used when rendering text.
    pub fn primary_calendar(&self) -> &Calendar {
        // merge() always stores at least one calendar
        &self.calendars[0]
    }

    pub fn has_month_shorthands(&self) -> bool {
        self.month_shorthands.iter().any(|entries| !entries.is_empty())
    }
}

fn merge_unique(target: &mut Vec<String>, source: &[String]) {
    for value in source {
        if !value.is_empty() && !target.contains(value) {
            target.push(value.clone());
        }
    }
}
