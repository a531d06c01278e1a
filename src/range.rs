use chrono::{DateTime, SecondsFormat, Utc};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize};

/// The concrete span an EDTF string stands for.
///
/// Both bounds are inclusive. A missing bound is an open end of the interval
/// (`[..1749-03]` has no minimum, `[1990..]` has no maximum).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    min: Option<DateTime<Utc>>,
    max: Option<DateTime<Utc>>,
}

/// Error type for date range construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Minimum is after maximum.
    #[error("Invalid date range: min ({min}) is after max ({max})")]
    InvalidRange { min: DateTime<Utc>, max: DateTime<Utc> },
}

impl DateRange {
    /// Creates a new date range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if both bounds are set and min > max.
    pub fn new(min: Option<DateTime<Utc>>, max: Option<DateTime<Utc>>) -> Result<Self, RangeError> {
        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Err(RangeError::InvalidRange { min, max });
            }
        }
        Ok(Self { min, max })
    }

    /// Earliest instant, `None` for an open start
    pub const fn min(&self) -> Option<DateTime<Utc>> {
        self.min
    }

    /// Latest instant, `None` for an open end
    pub const fn max(&self) -> Option<DateTime<Utc>> {
        self.max
    }

    pub const fn is_open_start(&self) -> bool {
        self.min.is_none()
    }

    pub const fn is_open_end(&self) -> bool {
        self.max.is_none()
    }

    /// Checks if the range contains a given instant. Open bounds are unbounded.
    pub fn contains(&self, instant: &DateTime<Utc>) -> bool {
        self.min.is_none_or(|min| min <= *instant) && self.max.is_none_or(|max| *instant <= max)
    }

    /// Checks if this range shares at least one instant with another range.
    pub fn overlaps(&self, other: &Self) -> bool {
        before_or_equal(self.min, other.max) && before_or_equal(other.min, self.max)
    }

    /// Checks if this range is completely contained within another range.
    pub fn is_within(&self, other: &Self) -> bool {
        let lower_ok = match (other.min, self.min) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(outer), Some(inner)) => outer <= inner,
        };
        let upper_ok = match (other.max, self.max) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(outer), Some(inner)) => inner <= outer,
        };
        lower_ok && upper_ok
    }
}

/// `lower <= upper`, where a missing bound never constrains.
fn before_or_equal(lower: Option<DateTime<Utc>>, upper: Option<DateTime<Utc>>) -> bool {
    match (lower, upper) {
        (Some(lower), Some(upper)) => lower <= upper,
        _ => true,
    }
}

fn to_rfc3339(instant: Option<DateTime<Utc>>) -> Option<String> {
    instant.map(|instant| instant.to_rfc3339_opts(SecondsFormat::Millis, true))
}

impl Serialize for DateRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("DateRange", 2)?;
        state.serialize_field("min", &to_rfc3339(self.min))?;
        state.serialize_field("max", &to_rfc3339(self.max))?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for DateRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Bounds {
            min: Option<DateTime<Utc>>,
            max: Option<DateTime<Utc>>,
        }

        let bounds = Bounds::deserialize(deserializer)?;
        Self::new(bounds.min, bounds.max).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::utc;

    fn closed(min: &str, max: &str) -> DateRange {
        DateRange::new(Some(utc(min)), Some(utc(max))).unwrap()
    }

    #[test]
    fn test_new_range_cases() {
        struct TestCase {
            min:            Option<&'static str>,
            max:            Option<&'static str>,
            should_succeed: bool,
            description:    &'static str,
        }

        let cases = [
            TestCase {
                min:            Some("1990-01-01T00:00:00.000Z"),
                max:            Some("2000-12-31T23:59:59.999Z"),
                should_succeed: true,
                description:    "valid range (min < max)",
            },
            TestCase {
                min:            Some("2000-01-01T00:00:00.000Z"),
                max:            Some("1990-12-31T23:59:59.999Z"),
                should_succeed: false,
                description:    "invalid range (min > max)",
            },
            TestCase {
                min:            Some("2000-01-01T00:00:00.000Z"),
                max:            Some("2000-01-01T00:00:00.000Z"),
                should_succeed: true,
                description:    "single instant (min == max)",
            },
            TestCase {
                min:            None,
                max:            Some("1749-03-31T23:59:59.999Z"),
                should_succeed: true,
                description:    "open start",
            },
            TestCase {
                min:            None,
                max:            None,
                should_succeed: true,
                description:    "open on both sides",
            },
        ];

        for case in &cases {
            let range = DateRange::new(case.min.map(utc), case.max.map(utc));

            if case.should_succeed {
                assert!(range.is_ok(), "Expected success for: {}", case.description);
            } else {
                assert!(range.is_err(), "Expected failure for: {}", case.description);
            }
        }
    }

    #[test]
    fn test_accessors() {
        let range = closed("1990-01-01T00:00:00.000Z", "2000-12-31T23:59:59.999Z");
        assert_eq!(range.min(), Some(utc("1990-01-01T00:00:00.000Z")));
        assert_eq!(range.max(), Some(utc("2000-12-31T23:59:59.999Z")));
        assert!(!range.is_open_start());
        assert!(!range.is_open_end());

        let open = DateRange::new(Some(utc("1990-12-26T00:00:00.000Z")), None).unwrap();
        assert!(!open.is_open_start());
        assert!(open.is_open_end());
    }

    #[test]
    fn test_contains() {
        let range = closed("1990-01-01T00:00:00.000Z", "2000-12-31T23:59:59.999Z");

        assert!(range.contains(&utc("1990-01-01T00:00:00.000Z")));
        assert!(range.contains(&utc("2000-12-31T23:59:59.999Z")));
        assert!(range.contains(&utc("1995-06-15T12:00:00.000Z")));
        assert!(!range.contains(&utc("1989-12-31T23:59:59.999Z")));
        assert!(!range.contains(&utc("2001-01-01T00:00:00.000Z")));

        let until = DateRange::new(None, Some(utc("1749-03-31T23:59:59.999Z"))).unwrap();
        assert!(until.contains(&utc("0001-01-01T00:00:00.000Z")));
        assert!(!until.contains(&utc("1749-04-01T00:00:00.000Z")));
    }

    #[test]
    fn test_overlaps() {
        let range1 = closed("1990-01-01T00:00:00.000Z", "2000-12-31T23:59:59.999Z");
        let range2 = closed("1995-01-01T00:00:00.000Z", "2005-12-31T23:59:59.999Z");
        let range3 = closed("2010-01-01T00:00:00.000Z", "2020-12-31T23:59:59.999Z");

        assert!(range1.overlaps(&range2));
        assert!(range2.overlaps(&range1));
        assert!(!range1.overlaps(&range3));
        assert!(!range3.overlaps(&range1));

        let since = DateRange::new(Some(utc("2015-01-01T00:00:00.000Z")), None).unwrap();
        assert!(since.overlaps(&range3));
        assert!(!since.overlaps(&range1));
    }

    #[test]
    fn test_is_within() {
        let outer = closed("1990-01-01T00:00:00.000Z", "2000-12-31T23:59:59.999Z");
        let inner = closed("1995-01-01T00:00:00.000Z", "1998-12-31T23:59:59.999Z");
        let unbounded = DateRange::new(None, None).unwrap();

        assert!(inner.is_within(&outer));
        assert!(!outer.is_within(&inner));
        assert!(outer.is_within(&unbounded));
        assert!(!unbounded.is_within(&outer));
    }

    #[test]
    fn test_serde_shape() {
        let range = DateRange::new(None, Some(utc("1749-03-31T23:59:59.999Z"))).unwrap();
        let json = serde_json::to_string(&range).unwrap();
        assert_eq!(json, r#"{"min":null,"max":"1749-03-31T23:59:59.999Z"}"#);

        let back: DateRange = serde_json::from_str(&json).unwrap();
        assert_eq!(back, range);
    }

    #[test]
    fn test_deserialize_rejects_inverted_range() {
        let json = r#"{"min":"2000-01-01T00:00:00.000Z","max":"1990-01-01T00:00:00.000Z"}"#;
        assert!(serde_json::from_str::<DateRange>(json).is_err());
    }
}
