//! Service anniversary rules.
//!
//! Anniversaries are always measured from the employee's true join date, even
//! when that date precedes the system epoch. A bonus is attributed to the
//! calendar year containing the anniversary and is granted once the as-of date
//! reaches it, provided the anniversary itself is not before the epoch.

use chrono::{Datelike, Months, NaiveDate};
use rust_decimal::Decimal;

use crate::config::AnniversaryBonus;
use crate::error::{EngineError, EngineResult};

/// Returns the date `years` after `join_date`.
///
/// A 29 February join date has its anniversary on 28 February in non-leap
/// years.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::anniversary_date;
/// use chrono::NaiveDate;
///
/// let join = NaiveDate::from_ymd_opt(2020, 2, 29).unwrap();
/// assert_eq!(
///     anniversary_date(join, 3).unwrap(),
///     NaiveDate::from_ymd_opt(2023, 2, 28).unwrap()
/// );
/// ```
pub fn anniversary_date(join_date: NaiveDate, years: u32) -> EngineResult<NaiveDate> {
    years
        .checked_mul(12)
        .and_then(|months| join_date.checked_add_months(Months::new(months)))
        .ok_or(EngineError::InvalidDate {
            year: join_date.year().saturating_add_unsigned(years),
            month: join_date.month(),
            day: join_date.day(),
        })
}

/// Returns the number of full years of service completed by `as_of`.
///
/// One is subtracted when the as-of month/day precedes the join month/day.
/// Returns zero when `as_of` precedes `join_date`.
pub fn years_of_service(join_date: NaiveDate, as_of: NaiveDate) -> u32 {
    if as_of < join_date {
        return 0;
    }

    let mut years = as_of.year() - join_date.year();
    if (as_of.month(), as_of.day()) < (join_date.month(), join_date.day()) {
        years -= 1;
    }
    u32::try_from(years).unwrap_or(0)
}

/// Returns true only on the exact `years`-th anniversary of `join_date`.
///
/// The elapsed full years must equal `years` and the as-of month/day must
/// match the join month/day; the day after the anniversary returns false.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::has_completed_anniversary;
/// use chrono::NaiveDate;
///
/// let join = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
/// assert!(has_completed_anniversary(join, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(), 3));
/// assert!(!has_completed_anniversary(join, NaiveDate::from_ymd_opt(2026, 1, 2).unwrap(), 3));
/// ```
pub fn has_completed_anniversary(join_date: NaiveDate, as_of: NaiveDate, years: u32) -> bool {
    years_of_service(join_date, as_of) == years
        && as_of.month() == join_date.month()
        && as_of.day() == join_date.day()
}

/// Returns true once at least `years` full years of service are completed.
pub fn has_completed_at_least(join_date: NaiveDate, as_of: NaiveDate, years: u32) -> bool {
    as_of >= join_date && years_of_service(join_date, as_of) >= years
}

/// Returns the anniversary bonus casual days attributed to `year`.
///
/// Each configured bonus contributes when its anniversary date falls in
/// `year`, on or after `epoch`, and on or before `as_of`. Because the
/// anniversary date is fixed, each bonus can contribute to at most one year.
pub fn anniversary_bonus(
    join_date: NaiveDate,
    year: i32,
    as_of: NaiveDate,
    epoch: NaiveDate,
    bonuses: &[AnniversaryBonus],
) -> EngineResult<Decimal> {
    let mut total = Decimal::ZERO;
    for bonus in bonuses {
        let anniversary = anniversary_date(join_date, bonus.years)?;
        if anniversary.year() == year && anniversary >= epoch && anniversary <= as_of {
            total += bonus.casual;
        }
    }
    Ok(total)
}
