//! Year-end adjustment.
//!
//! When a calendar year closes, casual leave above the carry-forward cap is
//! forfeited and sick leave is reset. The cap applies to the running balance,
//! not just the closing year's own accrual.

use crate::config::YearEndConfig;
use crate::models::AccrualResult;

/// Applies the year-end carry-forward caps to a running balance.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::close_year;
/// use leave_engine::config::AccrualPolicy;
/// use leave_engine::models::AccrualResult;
/// use rust_decimal::Decimal;
///
/// let policy = AccrualPolicy::default();
/// let closed = close_year(
///     AccrualResult::new(Decimal::new(13, 0), Decimal::new(65, 1)),
///     &policy.year_end,
/// );
/// assert_eq!(closed, AccrualResult::new(Decimal::new(8, 0), Decimal::ZERO));
/// ```
pub fn close_year(balance: AccrualResult, config: &YearEndConfig) -> AccrualResult {
    AccrualResult::new(
        balance.casual.min(config.casual_carry_forward_cap),
        balance.sick.min(config.sick_carry_forward_cap),
    )
}
