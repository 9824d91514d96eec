//! Grouping of normalized dates into consecutive-day ranges.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// A run of consecutive calendar days, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Date,
    pub end: Date,
}

impl DateRange {
    /// A range covering a single day.
    pub fn single(date: Date) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Creates a range, swapping the ends if they are given in reverse.
    pub fn new(start: Date, end: Date) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    pub fn is_single_day(&self) -> bool {
        self.start == self.end
    }

    /// Number of days covered, counting both ends.
    pub fn len_days(&self) -> usize {
        self.days().count()
    }

    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    /// Iterates over every day in the range in ascending order.
    pub fn days(&self) -> impl Iterator<Item = Date> {
        let end = self.end;
        let mut next = Some(self.start);
        std::iter::from_fn(move || {
            let current = next.filter(|day| *day <= end)?;
            next = current.tomorrow().ok();
            Some(current)
        })
    }

    /// Whether `date` is the day right after this range ends.
    fn is_followed_by(&self, date: Date) -> bool {
        self.end.tomorrow().is_ok_and(|next| next == date)
    }
}

/// Collapses ascending, deduplicated dates into maximal consecutive runs.
///
/// A new range starts whenever the next date is not exactly one day after the
/// last date of the current range. Empty input yields no ranges.
pub fn group_consecutive(dates: &[Date]) -> Vec<DateRange> {
    let mut ranges: Vec<DateRange> = Vec::new();

    for &date in dates {
        match ranges.last_mut() {
            Some(current) if current.is_followed_by(date) => current.end = date,
            _ => ranges.push(DateRange::single(date)),
        }
    }

    ranges
}
