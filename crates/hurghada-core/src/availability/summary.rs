//! Truncated availability summaries.

use super::AvailabilityFormatter;

/// Number of ranges shown before the remainder is collapsed into `+N more`.
pub const DEFAULT_MAX_SHOWN: usize = 3;

/// Separator placed between ranges in a summary.
pub const SEPARATOR: &str = " \u{2022} ";

/// Summarizes raw date tokens as a short availability line.
///
/// At most `max_shown` ranges are listed; when more exist, a trailing
/// `+N more` item reports how many were left out. Returns an empty string
/// when no token parses, which callers treat as "no availability
/// information".
///
/// ```rust
/// use hurghada_core::availability::summarize;
///
/// let line = summarize(["2025-08-20", "2025-08-21", "9/1/2025"], "en-US", 3);
/// assert_eq!(line, "Aug 20\u{2013}21, 2025 \u{2022} Sep 1, 2025");
/// assert_eq!(summarize(["not a date"], "en-US", 3), "");
/// ```
pub fn summarize<I, S>(tokens: I, locale: &str, max_shown: usize) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    AvailabilityFormatter::builder()
        .with_locale(locale)
        .with_max_shown(max_shown)
        .build()
        .summarize(tokens)
}

/// Joins already-formatted ranges into a summary line.
pub(crate) fn join_ranges<I>(formatted: I, total: usize, max_shown: usize, separator: &str) -> String
where
    I: IntoIterator<Item = String>,
{
    let mut items: Vec<String> = formatted.into_iter().take(max_shown).collect();
    if total > max_shown {
        items.push(format!("+{} more", total - max_shown));
    }
    items.join(separator)
}
