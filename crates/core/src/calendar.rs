//! Month arithmetic for the availability grid. Month lengths come from
//! chrono date math rather than a lookup table so leap years fall out for
//! free.

use chrono::{Datelike, NaiveDate};

use crate::errors::{TimeError, TimeResult};

/// A (year, month) scope, the unit of cache replacement and of every month
/// fetch. Month is 1-based; the fields stay private so every value goes
/// through [`MonthRef::new`] validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthRef {
    year: i32,
    month: u32,
}

impl MonthRef {
    pub fn new(year: i32, month: u32) -> TimeResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(TimeError::Validation(format!(
                "month must be between 1 and 12, got {month}"
            )));
        }
        Ok(MonthRef { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// First day of this month.
    pub fn first_day(&self) -> NaiveDate {
        // Month is validated on construction.
        NaiveDate::from_ymd_opt(self.year, self.month, 1).expect("validated month scope")
    }

    pub fn next(&self) -> MonthRef {
        if self.month == 12 {
            MonthRef { year: self.year + 1, month: 1 }
        } else {
            MonthRef { year: self.year, month: self.month + 1 }
        }
    }

    pub fn prev(&self) -> MonthRef {
        if self.month == 1 {
            MonthRef { year: self.year - 1, month: 12 }
        } else {
            MonthRef { year: self.year, month: self.month - 1 }
        }
    }

    /// Half-open [first of month, first of next month) range for SQL scoping.
    pub fn span(&self) -> (NaiveDate, NaiveDate) {
        (self.first_day(), self.next().first_day())
    }

    /// Number of days in this month (handles leap February).
    pub fn days(&self) -> u32 {
        self.next().first_day().pred_opt().map(|d| d.day()).unwrap_or(0)
    }

    /// Whether a date falls inside this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

/// Days in a calendar month, e.g. `days_in_month(2024, 2) == 29`.
pub fn days_in_month(year: i32, month: u32) -> TimeResult<u32> {
    Ok(MonthRef::new(year, month)?.days())
}
