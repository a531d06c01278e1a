use crate::consts::{BUILTIN_DELIMITERS, RANGE_SEPARATOR};
use crate::error::ConvertError;
use crate::generator;
use crate::keywords::find_inner_phrase;
use crate::locale::{Locale, LocaleData};
use crate::modifier::CustomModifier;
use crate::options::Options;
use crate::parser::{self, ParseResult};
use crate::preprocess::preprocess_text;
use crate::range::DateRange;
use crate::words::parse_words;
use tracing::debug;

/// Converts between natural-language dates, EDTF strings and date ranges.
///
/// A converter owns its options and the merged locale data derived from
/// them. Conversions never mutate either, so one converter can be reused
/// for any number of calls.
#[derive(Debug, Clone)]
pub struct Converter {
    options: Options,
    locale:  LocaleData,
}

/// Where a word sequence splits into the two sides of an interval.
struct Split<'a> {
    index:     usize,
    len:       usize,
    separator: Option<&'a CustomModifier>,
}

impl Converter {
    /// Creates a converter using the bundled locale resources.
    ///
    /// # Errors
    /// Returns `ConvertError::UnsupportedLocale` for a locale without a bundled
    /// resource and `ConvertError::NoLocales` for an empty locale list.
    pub fn new(options: Options) -> Result<Self, ConvertError> {
        let locale = LocaleData::load(&options.locales)?;
        debug!(locales = ?locale.locales(), "converter created");
        Ok(Self { options, locale })
    }

    /// Creates a converter from externally supplied locale resources, in
    /// priority order. `options.locales` is replaced by their names.
    ///
    /// # Errors
    /// Returns `ConvertError::NoLocales` if `locales` is empty.
    pub fn with_locale_data(mut options: Options, locales: Vec<Locale>) -> Result<Self, ConvertError> {
        let locale = LocaleData::merge(locales)?;
        options.locales = locale.locales().to_vec();
        debug!(locales = ?locale.locales(), "converter created from supplied locales");
        Ok(Self { options, locale })
    }

    pub const fn options(&self) -> &Options {
        &self.options
    }

    pub const fn locale_data(&self) -> &LocaleData {
        &self.locale
    }

    /// Replaces the options. Locale data is reloaded when the locale list
    /// changes; on error the converter keeps its previous configuration.
    ///
    /// # Errors
    /// Returns the same errors as [`Converter::new`].
    pub fn set_options(&mut self, options: Options) -> Result<(), ConvertError> {
        if options.locales.as_slice() != self.locale.locales() {
            self.locale = LocaleData::load(&options.locales)?;
        }
        self.options = options;
        Ok(())
    }

    /// Converts natural-language date text to EDTF.
    ///
    /// # Errors
    /// Returns `ConvertError::NoMatchingFormat` if a side of the text is not a
    /// date in any configured locale format.
    pub fn text_to_edtf(&self, text: &str) -> Result<String, ConvertError> {
        debug!(text = text, "converting text to EDTF");
        let preprocessed = preprocess_text(text, &self.locale);
        let words: Vec<String> = preprocessed.split_whitespace().map(str::to_owned).collect();

        let Some(split) = self.find_split(&words) else {
            return parse_words(&words, false, &self.options, &self.locale);
        };

        let start = parse_words(&words[..split.index], true, &self.options, &self.locale)?;
        let end = parse_words(&words[split.index + split.len..], true, &self.options, &self.locale)?;
        let edtf = format!("{start}{RANGE_SEPARATOR}{end}");
        Ok(match split.separator {
            Some(separator) => separator.apply(&edtf),
            None => edtf,
        })
    }

    /// Finds the earliest delimiter strictly inside the words. Built-in and
    /// locale delimiters are tried before custom separators.
    fn find_split<'a>(&'a self, words: &[String]) -> Option<Split<'a>> {
        let delimiter = BUILTIN_DELIMITERS
            .iter()
            .copied()
            .chain(self.locale.keywords.interval.delimiters.iter().map(String::as_str))
            .filter_map(|delimiter| find_inner_phrase(words, delimiter))
            .min_by_key(|&(index, _)| index);
        if let Some((index, len)) = delimiter {
            return Some(Split {
                index,
                len,
                separator: None,
            });
        }

        self.options.custom_separators.iter().find_map(|separator| {
            let (index, len) = find_inner_phrase(words, separator.keyword())?;
            debug!(keyword = separator.keyword(), "custom separator detected");
            Some(Split {
                index,
                len,
                separator: Some(separator),
            })
        })
    }

    /// Renders an EDTF string as text in the primary locale.
    ///
    /// # Errors
    /// Returns `ConvertError::InvalidEdtf` if `edtf` does not parse.
    pub fn edtf_to_text(&self, edtf: &str) -> Result<String, ConvertError> {
        debug!(edtf = edtf, "converting EDTF to text");
        generator::edtf_to_text(edtf, &self.options, &self.locale)
    }

    /// Computes the concrete range an EDTF string covers.
    ///
    /// An open start yields no minimum and an open end no maximum. For an
    /// interval the minimum comes from the first part and the maximum from
    /// the second.
    ///
    /// # Errors
    /// Returns `ConvertError::InvalidEdtf` if `edtf` does not parse or its
    /// interval ends before it starts.
    pub fn edtf_to_date(&self, edtf: &str) -> Result<DateRange, ConvertError> {
        debug!(edtf = edtf, "converting EDTF to date range");
        let parsed = self.parse_edtf(edtf)?;
        let primary = &parsed.primary_part;
        let (min, max) = if primary.has_open_start {
            (None, Some(primary.max_date))
        } else if primary.has_open_end {
            (Some(primary.min_date), None)
        } else {
            let end = parsed.secondary_part.as_ref().unwrap_or(primary);
            (Some(primary.min_date), Some(end.max_date))
        };
        DateRange::new(min, max).map_err(|_| ConvertError::InvalidEdtf(edtf.to_owned()))
    }

    /// Checks an EDTF string against the supported grammar.
    ///
    /// # Errors
    /// Returns `ConvertError::InvalidEdtf` if it does not conform.
    pub fn validate_edtf(&self, edtf: &str) -> Result<(), ConvertError> {
        debug!(edtf = edtf, "validating EDTF");
        parser::validate_edtf(edtf)
    }

    /// Decomposes an EDTF string into its parts.
    ///
    /// # Errors
    /// Returns `ConvertError::InvalidEdtf` if `edtf` does not parse.
    pub fn parse_edtf(&self, edtf: &str) -> Result<ParseResult, ConvertError> {
        debug!(edtf = edtf, "parsing EDTF");
        parser::parse_edtf(edtf, &self.options)
    }
}
