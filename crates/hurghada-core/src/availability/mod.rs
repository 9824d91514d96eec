//! Trip availability range formatting.
//!
//! Trips come from the backend with a `tripDates` list of loosely formatted
//! date strings. This module turns that list into a short, locale-aware line
//! such as `Aug 20–21, 2025 • Aug 23, 2025 • +2 more`.
//!
//! ```text
//! raw tokens ──parse──▶ dates ──normalize──▶ sorted, distinct
//!            ──group──▶ ranges ──format──▶ summary line
//! ```
//!
//! Every step is a pure function of its input. Unparseable tokens are dropped
//! rather than reported: partial availability is preferred over hiding a
//! listing, and a trip with no usable dates simply gets an empty summary.
//!
//! ## Submodules
//!
//! - [`parse`]: [`parse_date_token`] and [`normalize`]
//! - [`group`]: [`DateRange`] and [`group_consecutive`]
//! - [`format`]: [`format_range`]
//! - [`summary`]: [`summarize`]
//!
//! The free functions cover one-off calls. Rendering code that formats many
//! trips with the same settings builds an [`AvailabilityFormatter`] once and
//! passes it around:
//!
//! ```rust
//! use hurghada_core::availability::AvailabilityFormatter;
//!
//! let formatter = AvailabilityFormatter::builder()
//!     .with_locale("de-DE")
//!     .with_max_shown(2)
//!     .build();
//!
//! let availability = formatter.availability(["2025-08-20", "2025-08-21", "2025-10-03"]);
//! assert_eq!(availability.len(), 2);
//! assert_eq!(availability.summary(), "Aug. 20\u{2013}21, 2025 \u{2022} Okt. 3, 2025");
//! ```

pub mod format;
pub mod group;
pub mod parse;
pub mod summary;

#[cfg(test)]
mod tests;

use std::fmt;

use jiff::civil::Date;
use log::debug;

pub use format::{format_range, FormattedRange};
pub use group::{group_consecutive, DateRange};
pub use parse::{normalize, parse_date_token};
pub use summary::{summarize, DEFAULT_MAX_SHOWN, SEPARATOR};

use crate::locale::Locale;

/// Availability formatting settings shared across a render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityFormatter {
    locale: Locale,
    max_shown: usize,
    separator: String,
}

impl AvailabilityFormatter {
    /// Starts a builder with the default locale, limit and separator.
    pub fn builder() -> AvailabilityFormatterBuilder {
        AvailabilityFormatterBuilder::new()
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn max_shown(&self) -> usize {
        self.max_shown
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Computes the full range list for `tokens`.
    pub fn availability<I, S>(&self, tokens: I) -> Availability<'_>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let dates = normalize(tokens);
        let ranges = group_consecutive(&dates);
        debug!(
            "Grouped {} dates into {} ranges",
            dates.len(),
            ranges.len()
        );
        Availability {
            ranges,
            formatter: self,
        }
    }

    /// Shorthand for `self.availability(tokens).summary()`.
    pub fn summarize<I, S>(&self, tokens: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.availability(tokens).summary()
    }

    /// Formats one range with this formatter's locale.
    pub fn format_range(&self, range: &DateRange) -> String {
        range.display(&self.locale).to_string()
    }
}

impl Default for AvailabilityFormatter {
    fn default() -> Self {
        AvailabilityFormatterBuilder::new().build()
    }
}

/// Builder for [`AvailabilityFormatter`].
#[derive(Debug, Clone)]
pub struct AvailabilityFormatterBuilder {
    locale: Option<Locale>,
    max_shown: usize,
    separator: Option<String>,
}

impl AvailabilityFormatterBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            locale: None,
            max_shown: DEFAULT_MAX_SHOWN,
            separator: None,
        }
    }

    /// Sets the locale code used for month names. Unknown codes render in
    /// English.
    pub fn with_locale(mut self, locale: &str) -> Self {
        self.locale = Some(Locale::resolve(locale));
        self
    }

    /// Sets how many ranges a summary lists before collapsing the rest.
    pub fn with_max_shown(mut self, max_shown: usize) -> Self {
        self.max_shown = max_shown;
        self
    }

    /// Sets the separator between summary items.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    pub fn build(self) -> AvailabilityFormatter {
        AvailabilityFormatter {
            locale: self.locale.unwrap_or_default(),
            max_shown: self.max_shown,
            separator: self.separator.unwrap_or_else(|| SEPARATOR.to_string()),
        }
    }
}

impl Default for AvailabilityFormatterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The consecutive-day ranges of one trip, with the settings to render them.
///
/// Holds the complete range list so callers can show both the truncated
/// summary and every range (for example in a calendar).
#[derive(Debug, Clone)]
pub struct Availability<'a> {
    ranges: Vec<DateRange>,
    formatter: &'a AvailabilityFormatter,
}

impl Availability<'_> {
    pub fn ranges(&self) -> &[DateRange] {
        &self.ranges
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Every available day across all ranges, ascending.
    pub fn dates(&self) -> Vec<Date> {
        self.ranges.iter().flat_map(DateRange::days).collect()
    }

    /// Every range formatted in full, without truncation.
    pub fn formatted_ranges(&self) -> Vec<String> {
        self.ranges
            .iter()
            .map(|range| self.formatter.format_range(range))
            .collect()
    }

    /// The truncated summary line; empty when there are no ranges.
    pub fn summary(&self) -> String {
        summary::join_ranges(
            self.ranges
                .iter()
                .map(|range| self.formatter.format_range(range)),
            self.ranges.len(),
            self.formatter.max_shown,
            &self.formatter.separator,
        )
    }
}

impl fmt::Display for Availability<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary())
    }
}
