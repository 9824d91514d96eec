use jiff::civil::{date, Date};

use super::*;

fn range(start: Date, end: Date) -> DateRange {
    DateRange::new(start, end)
}

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_parse_iso_date() {
    assert_eq!(parse_date_token("2025-08-20"), Some(date(2025, 8, 20)));
    assert_eq!(parse_date_token("  2025-08-20  "), Some(date(2025, 8, 20)));
}

#[test]
fn test_parse_iso_datetime_discards_time() {
    assert_eq!(
        parse_date_token("2025-08-20T09:30:00"),
        Some(date(2025, 8, 20))
    );
    assert_eq!(
        parse_date_token("2025-08-20T23:30:00.000Z"),
        Some(date(2025, 8, 20))
    );
    assert_eq!(
        parse_date_token("2025-08-20T01:00:00+02:00"),
        Some(date(2025, 8, 20))
    );
}

#[test]
fn test_parse_month_first_fallback() {
    assert_eq!(parse_date_token("8/20/2025"), Some(date(2025, 8, 20)));
    assert_eq!(parse_date_token("08-21-2025"), Some(date(2025, 8, 21)));
    assert_eq!(parse_date_token("8.22.2025"), Some(date(2025, 8, 22)));
    assert_eq!(parse_date_token("8/23/2025 10:00 AM"), Some(date(2025, 8, 23)));
}

#[test]
fn test_parse_two_digit_year_is_2000s() {
    assert_eq!(parse_date_token("8/20/25"), Some(date(2025, 8, 20)));
    assert_eq!(parse_date_token("1/2/03"), Some(date(2003, 1, 2)));
}

#[test]
fn test_parse_padded_four_digit_year_is_literal() {
    assert_eq!(parse_date_token("8/20/0025"), Some(date(25, 8, 20)));
    assert_eq!(parse_date_token("8/20/2025"), Some(date(2025, 8, 20)));
}

#[test]
fn test_parse_ambiguous_dates_are_month_first() {
    assert_eq!(parse_date_token("03/04/2025"), Some(date(2025, 3, 4)));
    // Day-first input only fails when the "month" cannot be a month.
    assert_eq!(parse_date_token("20/08/2025"), None);
    assert_eq!(parse_date_token("20.08.2025"), None);
}

#[test]
fn test_parse_rejects_malformed_tokens() {
    for token in [
        "",
        "   ",
        "tomorrow",
        "2/30/2025",
        "13/1/2025",
        "8/20",
        "8/20/2025/1",
        "a/b/c",
        "8//2025",
        "+8/20/2025",
        "2025-13-01",
    ] {
        assert_eq!(parse_date_token(token), None, "token {token:?}");
    }
}

#[test]
fn test_parse_leap_day() {
    assert_eq!(parse_date_token("2/29/2024"), Some(date(2024, 2, 29)));
    assert_eq!(parse_date_token("2/29/2025"), None);
}

// ============================================================================
// Normalization
// ============================================================================

#[test]
fn test_normalize_sorts_and_dedups() {
    let dates = normalize([
        "2025-08-23",
        "8/20/2025",
        "2025-08-20T10:00:00",
        "garbage",
        "2025-08-21",
        "08/23/25",
    ]);
    assert_eq!(
        dates,
        vec![date(2025, 8, 20), date(2025, 8, 21), date(2025, 8, 23)]
    );
}

#[test]
fn test_normalize_is_strictly_ascending() {
    let dates = normalize([
        "2026-01-02",
        "12/31/2025",
        "2025-06-01",
        "2025-06-01",
        "1/1/2026",
        "2025-05-31T23:59:59Z",
    ]);
    assert!(dates.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(dates.len(), 5);
}

#[test]
fn test_normalize_is_idempotent() {
    let once = normalize(["2025-09-02", "8/31/2025", "2025-09-01", "nope", "9/1/2025"]);
    let tokens: Vec<String> = once.iter().map(ToString::to_string).collect();
    let twice = normalize(&tokens);
    assert_eq!(once, twice);
}

#[test]
fn test_normalize_empty() {
    assert!(normalize(Vec::<String>::new()).is_empty());
    assert!(normalize(["", "x", "99/99/99"]).is_empty());
}

// ============================================================================
// Grouping
// ============================================================================

#[test]
fn test_group_consecutive_splits_on_gaps() {
    let ranges = group_consecutive(&[date(2025, 8, 20), date(2025, 8, 21), date(2025, 8, 23)]);
    assert_eq!(
        ranges,
        vec![
            range(date(2025, 8, 20), date(2025, 8, 21)),
            range(date(2025, 8, 23), date(2025, 8, 23)),
        ]
    );
}

#[test]
fn test_group_consecutive_crosses_month_and_year() {
    let ranges = group_consecutive(&[
        date(2025, 12, 30),
        date(2025, 12, 31),
        date(2026, 1, 1),
        date(2026, 2, 28),
        date(2026, 3, 1),
    ]);
    assert_eq!(
        ranges,
        vec![
            range(date(2025, 12, 30), date(2026, 1, 1)),
            range(date(2026, 2, 28), date(2026, 3, 1)),
        ]
    );
}

#[test]
fn test_group_consecutive_empty() {
    assert!(group_consecutive(&[]).is_empty());
}

#[test]
fn test_date_range_helpers() {
    let r = DateRange::new(date(2025, 9, 2), date(2025, 8, 31));
    assert_eq!(r.start, date(2025, 8, 31));
    assert_eq!(r.len_days(), 3);
    assert!(r.contains(date(2025, 9, 1)));
    assert!(!r.contains(date(2025, 9, 3)));
    assert!(!r.is_single_day());
    assert!(DateRange::single(date(2025, 9, 3)).is_single_day());
    assert_eq!(
        r.days().collect::<Vec<_>>(),
        vec![date(2025, 8, 31), date(2025, 9, 1), date(2025, 9, 2)]
    );
}

// ============================================================================
// Formatting
// ============================================================================

#[test]
fn test_format_single_day() {
    let r = DateRange::single(date(2025, 8, 23));
    assert_eq!(format_range(&r, "en-US"), "Aug 23, 2025");
}

#[test]
fn test_format_same_month() {
    let r = range(date(2025, 8, 20), date(2025, 8, 21));
    assert_eq!(format_range(&r, "en-US"), "Aug 20\u{2013}21, 2025");
}

#[test]
fn test_format_same_year_different_month() {
    let r = range(date(2025, 8, 31), date(2025, 9, 2));
    assert_eq!(format_range(&r, "en-US"), "Aug 31 \u{2013} Sep 2, 2025");
}

#[test]
fn test_format_different_years() {
    let r = range(date(2025, 12, 30), date(2026, 1, 2));
    assert_eq!(
        format_range(&r, "en-US"),
        "Dec 30, 2025 \u{2013} Jan 2, 2026"
    );
}

#[test]
fn test_format_uses_locale_month_names() {
    let r = range(date(2025, 3, 30), date(2025, 4, 2));
    assert_eq!(format_range(&r, "de-DE"), "März 30 \u{2013} Apr. 2, 2025");
    assert_eq!(format_range(&r, "fr"), "mars 30 \u{2013} avr. 2, 2025");
    assert_eq!(format_range(&r, "zz"), "Mar 30 \u{2013} Apr 2, 2025");
}

// ============================================================================
// Summaries
// ============================================================================

const FIVE_RANGES: [&str; 7] = [
    "2025-08-01",
    "2025-08-02",
    "2025-08-05",
    "2025-08-10",
    "2025-08-15",
    "2025-08-16",
    "2025-09-01",
];

#[test]
fn test_summarize_truncates_with_more_suffix() {
    let line = summarize(FIVE_RANGES, "en-US", 3);
    assert_eq!(
        line,
        "Aug 1\u{2013}2, 2025 \u{2022} Aug 5, 2025 \u{2022} Aug 10, 2025 \u{2022} +2 more"
    );
    assert!(line.ends_with("+2 more"));
}

#[test]
fn test_summarize_without_truncation() {
    let line = summarize(FIVE_RANGES, "en-US", 5);
    assert!(!line.contains("more"));
    assert_eq!(line.matches(SEPARATOR).count(), 4);
}

#[test]
fn test_summarize_empty_and_malformed() {
    assert_eq!(summarize(Vec::<&str>::new(), "en-US", 3), "");
    assert_eq!(summarize(["soon", "13/45/2025", ""], "en-US", 3), "");
}

#[test]
fn test_summarize_zero_max_shown_only_counts() {
    assert_eq!(summarize(FIVE_RANGES, "en-US", 0), "+5 more");
}

// ============================================================================
// Formatter
// ============================================================================

#[test]
fn test_formatter_defaults() {
    let formatter = AvailabilityFormatter::default();
    assert_eq!(formatter.max_shown(), DEFAULT_MAX_SHOWN);
    assert_eq!(formatter.separator(), SEPARATOR);
    assert_eq!(formatter.locale().tag(), "en-US");
}

#[test]
fn test_formatter_custom_separator() {
    let formatter = AvailabilityFormatter::builder()
        .with_separator(", ")
        .with_max_shown(1)
        .build();
    assert_eq!(
        formatter.summarize(["2025-08-20", "2025-08-22"]),
        "Aug 20, 2025, +1 more"
    );
}

#[test]
fn test_availability_exposes_full_range_list() {
    let formatter = AvailabilityFormatter::builder().with_max_shown(1).build();
    let availability = formatter.availability(FIVE_RANGES);

    assert_eq!(availability.len(), 5);
    assert_eq!(availability.formatted_ranges().len(), 5);
    assert_eq!(availability.dates().len(), 7);
    assert_eq!(availability.to_string(), "Aug 1\u{2013}2, 2025 \u{2022} +4 more");
}

#[test]
fn test_availability_empty() {
    let formatter = AvailabilityFormatter::default();
    let availability = formatter.availability(["n/a"]);
    assert!(availability.is_empty());
    assert!(availability.dates().is_empty());
    assert_eq!(availability.summary(), "");
}
