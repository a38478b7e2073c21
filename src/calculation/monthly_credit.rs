//! Monthly credit schedule.
//!
//! Each month of service earns one monthly credit. The credit for a month is
//! posted on the last working day of the *previous* month, so February's
//! credit is available from January's last working day onward.
//!
//! A credit belongs to the calendar year in which it is posted. The credit for
//! January is posted on December's last working day and is therefore counted
//! in the closing year, before that year's carry-forward cap is applied. Within
//! a year the window of credit months runs over `2..=13`, where month 13 stands
//! for January of the following year.

use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate};

use crate::error::{EngineError, EngineResult};

use super::working_day::last_working_day;

/// The month after December within a year's credit window.
const NEXT_JANUARY: u32 = 13;

/// Returns the date on which the credit for `month` of `year` is posted.
///
/// That is the last working day of the previous month, wrapping January back
/// to December of the previous year.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::credit_posting_date;
/// use chrono::NaiveDate;
///
/// // February 2023's credit posts on Tuesday 31 January
/// assert_eq!(
///     credit_posting_date(2023, 2).unwrap(),
///     NaiveDate::from_ymd_opt(2023, 1, 31).unwrap()
/// );
///
/// // January 2024's credit posts on Friday 29 December 2023
/// assert_eq!(
///     credit_posting_date(2024, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2023, 12, 29).unwrap()
/// );
/// ```
pub fn credit_posting_date(year: i32, month: u32) -> EngineResult<NaiveDate> {
    match month {
        1 => last_working_day(year - 1, 12),
        2..=12 => last_working_day(year, month - 1),
        _ => Err(EngineError::InvalidDate {
            year,
            month,
            day: 1,
        }),
    }
}

/// The range of credit months whose posting falls within one calendar year.
///
/// Months are numbered relative to `year`: `2` is February, `12` is December
/// and `13` is January of the following year. An empty window has
/// `start_month > end_month`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreditWindow {
    /// The calendar year whose postings the window covers.
    pub year: i32,
    /// First credit month in the window.
    pub start_month: u32,
    /// Last credit month in the window.
    pub end_month: u32,
}

impl CreditWindow {
    /// Determines the credit window for `year`.
    ///
    /// - In the join year the window starts the month after joining; other
    ///   years start with February (January's credit was posted the year
    ///   before).
    /// - A fully closed year runs through next January.
    /// - The as-of year runs through the as-of month, extended by one month
    ///   once the as-of date has reached the as-of month's last working day.
    pub fn for_year(
        year: i32,
        effective_join_date: NaiveDate,
        as_of: NaiveDate,
    ) -> EngineResult<Self> {
        let start_month = if year == effective_join_date.year() {
            effective_join_date.month() + 1
        } else {
            2
        };

        let end_month = if year != as_of.year() {
            NEXT_JANUARY
        } else if last_working_day(as_of.year(), as_of.month())? <= as_of {
            as_of.month() + 1
        } else {
            as_of.month()
        };

        Ok(Self {
            year,
            start_month,
            end_month,
        })
    }

    /// The credit months in the window, in posting order.
    pub fn months(&self) -> RangeInclusive<u32> {
        self.start_month..=self.end_month
    }

    /// Returns true if no credit can be posted in the window.
    pub fn is_empty(&self) -> bool {
        self.start_month > self.end_month
    }

    /// Posting date of a credit month in this window.
    pub fn posting_date(&self, month: u32) -> EngineResult<NaiveDate> {
        if month == NEXT_JANUARY {
            credit_posting_date(self.year + 1, 1)
        } else {
            credit_posting_date(self.year, month)
        }
    }

    /// Counts the credits in the window that have been posted by `as_of`.
    ///
    /// A credit counts from its posting date inclusive.
    pub fn posted_credits(&self, as_of: NaiveDate) -> EngineResult<u32> {
        let mut posted = 0;
        for month in self.months() {
            if self.posting_date(month)? <= as_of {
                posted += 1;
            }
        }
        Ok(posted)
    }
}
