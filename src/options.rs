use crate::consts::{DEFAULT_LOCALE, DEFAULT_VARIANCE};
use crate::date::Precision;
use crate::error::ConvertError;
use crate::modifier::CustomModifier;
use serde::{Deserialize, Serialize};

/// How far an approximate date (`~` or `%`) widens its min/max bounds, in
/// the date's own unit.
///
/// With `days = 5`, `1930-05-03~` spans `1930-04-28` to `1930-05-08`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApproximateVariance {
    pub days:   u32,
    pub months: u32,
    pub years:  u32,
}

impl ApproximateVariance {
    pub const fn uniform(value: u32) -> Self {
        Self {
            days:   value,
            months: value,
            years:  value,
        }
    }

    /// Variance for a date of the given precision.
    pub const fn for_precision(&self, precision: Precision) -> u32 {
        match precision {
            Precision::Year => self.years,
            Precision::Month => self.months,
            Precision::Day => self.days,
        }
    }
}

impl Default for ApproximateVariance {
    fn default() -> Self {
        Self::uniform(DEFAULT_VARIANCE)
    }
}

/// Paired formats for the two ends of an interval that share a year,
/// index 0 for the start and index 1 for the end.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MergedIntervalFormats {
    /// `["MMMM D", "MMMM D, YYYY"]` renders `July 1 – September 1, 2000`
    pub same_year:            Option<[String; 2]>,
    /// `["MMMM D", "D, YYYY"]` renders `July 1 – 10, 2000`
    pub same_year_and_month:  Option<[String; 2]>,
    /// `["MMMM", "MMMM YYYY"]` renders `July – September 2000`
    pub same_year_only_month: Option<[String; 2]>,
}

/// Formatting knobs for EDTF → text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EdtfToTextOptions {
    /// Overrides the locale's first date format.
    pub date_format:                 Option<String>,
    pub merged_interval_date_formats: Option<MergedIntervalFormats>,
    /// Overrides the interval separator.
    pub separator:                   Option<String>,
}

/// Converter configuration.
///
/// Deserializing a partial document fills every missing field with its
/// default. Custom modifiers and separators carry closures and are attached
/// in code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    /// Locale names; list order is parsing priority.
    pub locales:              Vec<String>,
    pub approximate_variance: ApproximateVariance,
    #[serde(skip)]
    pub custom_modifiers:     Vec<CustomModifier>,
    #[serde(skip)]
    pub custom_separators:    Vec<CustomModifier>,
    pub edtf_to_text_options: EdtfToTextOptions,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            locales:              vec![DEFAULT_LOCALE.to_owned()],
            approximate_variance: ApproximateVariance::default(),
            custom_modifiers:     Vec::new(),
            custom_separators:    Vec::new(),
            edtf_to_text_options: EdtfToTextOptions::default(),
        }
    }
}

impl Options {
    /// Parses options from JSON, merging with the defaults.
    ///
    /// # Errors
    /// Returns `ConvertError::Config` if the document is malformed.
    pub fn from_json(source: &str) -> Result<Self, ConvertError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn with_locales<S: Into<String>>(mut self, locales: impl IntoIterator<Item = S>) -> Self {
        self.locales = locales.into_iter().map(Into::into).collect();
        self
    }

    pub const fn with_variance(mut self, variance: ApproximateVariance) -> Self {
        self.approximate_variance = variance;
        self
    }

    pub fn with_modifier(mut self, modifier: CustomModifier) -> Self {
        self.custom_modifiers.push(modifier);
        self
    }

    pub fn with_separator(mut self, separator: CustomModifier) -> Self {
        self.custom_separators.push(separator);
        self
    }

    pub fn with_text_options(mut self, text_options: EdtfToTextOptions) -> Self {
        self.edtf_to_text_options = text_options;
        self
    }
}
