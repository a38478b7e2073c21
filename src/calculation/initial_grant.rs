//! Initial grant for new joiners.
//!
//! The join month itself earns no monthly credit. Instead a one-off grant is
//! made in the join year, pro-rated by whether the employee joined in the
//! first or second half of the month.

use chrono::{Datelike, NaiveDate};

use crate::config::InitialGrantConfig;
use crate::models::AccrualResult;

/// Returns the initial grant for an employee whose effective join date is
/// `effective_join_date`.
///
/// Joiners on or before the cutoff day receive the larger grant; later
/// joiners receive the smaller one.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::initial_grant;
/// use leave_engine::config::AccrualPolicy;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let policy = AccrualPolicy::default();
/// let grant = initial_grant(NaiveDate::from_ymd_opt(2024, 3, 16).unwrap(), &policy.initial_grant);
/// assert_eq!(grant.casual, Decimal::ZERO);
/// assert_eq!(grant.sick, Decimal::new(5, 1));
/// ```
pub fn initial_grant(effective_join_date: NaiveDate, config: &InitialGrantConfig) -> AccrualResult {
    if effective_join_date.day() <= config.cutoff_day {
        config.on_or_before_cutoff
    } else {
        config.after_cutoff
    }
}
