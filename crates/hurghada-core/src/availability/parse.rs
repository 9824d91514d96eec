//! Date token parsing and normalization.

use jiff::{civil::Date, fmt::temporal::Pieces};
use log::debug;

/// Parses a single raw date token into a calendar date.
///
/// ISO-8601 / Temporal strings are accepted first; any time of day or offset
/// is discarded and the date is taken as written. Otherwise the date part
/// (up to the first whitespace) is split on `/`, `-` or `.` into three
/// numeric fields read as month/day/year, with one- or two-digit years
/// placed in the 2000s. Four-digit years are taken as written.
///
/// The fallback is month-first: `03/04/2025` is March 4th, never April 3rd.
/// Day-first input is only rejected when the day is above 12.
///
/// Returns `None` when neither path yields a valid calendar date.
pub fn parse_date_token(token: &str) -> Option<Date> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }

    parse_iso(token).or_else(|| parse_month_first(token))
}

fn parse_iso(token: &str) -> Option<Date> {
    if let Ok(date) = token.parse::<Date>() {
        return Some(date);
    }
    Pieces::parse(token).ok().map(|pieces| pieces.date())
}

fn parse_month_first(token: &str) -> Option<Date> {
    let date_part = token.split_whitespace().next()?;
    let fields: Vec<&str> = date_part.split(['/', '-', '.']).collect();
    let [month, day, year] = fields.as_slice() else {
        return None;
    };

    let month: i8 = numeric_field(month)?;
    let day: i8 = numeric_field(day)?;
    let mut full_year: i16 = numeric_field(year)?;
    if year.len() <= 2 {
        full_year += 2000;
    }

    Date::new(full_year, month, day).ok()
}

fn numeric_field<T: std::str::FromStr>(field: &str) -> Option<T> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

/// Parses every token, drops the unparseable ones, and returns the distinct
/// calendar dates in ascending order.
pub fn normalize<I, S>(tokens: I) -> Vec<Date>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut dates: Vec<Date> = tokens
        .into_iter()
        .filter_map(|token| {
            let token = token.as_ref();
            let parsed = parse_date_token(token);
            if parsed.is_none() {
                debug!("Dropping unparseable date token: {token:?}");
            }
            parsed
        })
        .collect();

    dates.sort_unstable();
    dates.dedup();
    dates
}
