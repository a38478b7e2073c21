//! Working day calendar.
//!
//! This module determines the last working day (Monday to Friday) of a month.
//! Monthly leave credits are posted on that day. Public holidays are not
//! consulted; only weekends are skipped.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

use crate::error::{EngineError, EngineResult};

/// Returns true if `date` falls Monday through Friday.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::is_working_day;
/// use chrono::NaiveDate;
///
/// // 2026-01-17 is a Saturday
/// assert!(!is_working_day(NaiveDate::from_ymd_opt(2026, 1, 17).unwrap()));
/// // 2026-01-16 is a Friday
/// assert!(is_working_day(NaiveDate::from_ymd_opt(2026, 1, 16).unwrap()));
/// ```
pub fn is_working_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Returns the last working day of the given month.
///
/// The calendar's last day of the month is used unless it falls on a weekend,
/// in which case the preceding Friday is returned.
///
/// # Arguments
///
/// * `year` - The calendar year
/// * `month` - The month, 1 through 12
///
/// # Errors
///
/// Returns [`EngineError::InvalidDate`] if `month` is outside 1..=12 or the
/// year is outside the range `chrono` can represent.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::last_working_day;
/// use chrono::NaiveDate;
///
/// // January 2023 ends on a Tuesday
/// assert_eq!(
///     last_working_day(2023, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2023, 1, 31).unwrap()
/// );
///
/// // December 2023 ends on a Sunday, so the Friday before is used
/// assert_eq!(
///     last_working_day(2023, 12).unwrap(),
///     NaiveDate::from_ymd_opt(2023, 12, 29).unwrap()
/// );
/// ```
pub fn last_working_day(year: i32, month: u32) -> EngineResult<NaiveDate> {
    let invalid = || EngineError::InvalidDate {
        year,
        month,
        day: 1,
    };

    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    let last_day = first
        .checked_add_months(Months::new(1))
        .and_then(|next_month| next_month.pred_opt())
        .ok_or_else(invalid)?;

    let weekend_days = match last_day.weekday() {
        Weekday::Sun => 2,
        Weekday::Sat => 1,
        _ => 0,
    };

    last_day
        .checked_sub_days(Days::new(weekend_days))
        .ok_or_else(invalid)
}

/// Returns true if `date` is the last working day of its month.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::is_last_working_day_of_month;
/// use chrono::NaiveDate;
///
/// assert!(is_last_working_day_of_month(NaiveDate::from_ymd_opt(2023, 1, 31).unwrap()));
/// assert!(!is_last_working_day_of_month(NaiveDate::from_ymd_opt(2023, 1, 30).unwrap()));
/// ```
pub fn is_last_working_day_of_month(date: NaiveDate) -> bool {
    matches!(last_working_day(date.year(), date.month()), Ok(last) if last == date)
}
