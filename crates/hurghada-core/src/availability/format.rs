//! Locale-aware rendering of a single date range.

use std::fmt;

use super::group::DateRange;
use crate::locale::Locale;

/// Formats `range` for the locale code `locale`.
///
/// ```rust
/// use hurghada_core::availability::{format_range, DateRange};
/// use jiff::civil::date;
///
/// let range = DateRange::new(date(2025, 8, 31), date(2025, 9, 2));
/// assert_eq!(format_range(&range, "en-US"), "Aug 31 – Sep 2, 2025");
/// ```
pub fn format_range(range: &DateRange, locale: &str) -> String {
    range.display(&Locale::resolve(locale)).to_string()
}

impl DateRange {
    /// Display wrapper rendering this range with `locale`'s month names.
    pub fn display<'a>(&'a self, locale: &'a Locale) -> FormattedRange<'a> {
        FormattedRange {
            range: self,
            locale,
        }
    }
}

/// A [`DateRange`] paired with the locale used to render it.
///
/// The layout collapses shared parts of the two ends:
///
/// - same day: `Aug 20, 2025`
/// - same month: `Aug 20–21, 2025`
/// - same year: `Aug 31 – Sep 2, 2025`
/// - otherwise: `Dec 30, 2025 – Jan 2, 2026`
pub struct FormattedRange<'a> {
    range: &'a DateRange,
    locale: &'a Locale,
}

impl fmt::Display for FormattedRange<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let DateRange { start, end } = *self.range;
        let start_month = self.locale.short_month(start.month());
        let end_month = self.locale.short_month(end.month());

        if start == end {
            write!(f, "{start_month} {}, {}", start.day(), start.year())
        } else if start.year() == end.year() && start.month() == end.month() {
            write!(
                f,
                "{start_month} {}\u{2013}{}, {}",
                start.day(),
                end.day(),
                start.year()
            )
        } else if start.year() == end.year() {
            write!(
                f,
                "{start_month} {} \u{2013} {end_month} {}, {}",
                start.day(),
                end.day(),
                end.year()
            )
        } else {
            write!(
                f,
                "{start_month} {}, {} \u{2013} {end_month} {}, {}",
                start.day(),
                start.year(),
                end.day(),
                end.year()
            )
        }
    }
}
