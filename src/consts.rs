/// Maximum valid year (inclusive), the largest four-digit EDTF year
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;

/// Years per century
pub(crate) const CENTURY_CYCLE: u16 = 100;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Separator between the two parts of an EDTF interval
pub const RANGE_SEPARATOR: char = '/';

/// EDTF suffix for an approximate date
pub const APPROXIMATE: char = '~';
/// EDTF suffix for an uncertain date
pub const UNCERTAIN: char = '?';
/// EDTF suffix for a date that is both approximate and uncertain
pub const APPROXIMATE_AND_UNCERTAIN: char = '%';
/// Placeholder digit for unspecified decade/century digits
pub const UNSPECIFIED_DIGIT: char = 'X';
/// Ellipsis marking the open side of an interval
pub const OPEN_ELLIPSIS: &str = "..";

/// Default variance (in the date's own unit) applied to approximate dates
pub const DEFAULT_VARIANCE: u32 = 3;
/// Locale used when none is configured explicitly
pub const DEFAULT_LOCALE: &str = "en";

/// Interval delimiters recognised in free text regardless of locale
pub const BUILTIN_DELIMITERS: [&str; 2] = ["-", "–"];
