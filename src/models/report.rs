//! Accrual report models.
//!
//! An [`AccrualReport`] is the balance returned by the engine together with a
//! [`YearSummary`] for every calendar year that was replayed to produce it.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AccrualResult, YearAccumulator};

/// What happened to the running balance during one replayed year.
///
/// # Example
///
/// ```
/// use leave_engine::models::{AccrualResult, YearSummary};
/// use rust_decimal::Decimal;
///
/// let summary = YearSummary {
///     year: 2025,
///     opening: AccrualResult::new(Decimal::new(8, 0), Decimal::ZERO),
///     initial_grant: AccrualResult::ZERO,
///     monthly_credits: 12,
///     monthly: AccrualResult::new(Decimal::new(12, 0), Decimal::new(6, 0)),
///     anniversary_bonus: Decimal::ZERO,
///     closing: AccrualResult::new(Decimal::new(8, 0), Decimal::ZERO),
///     year_end_applied: true,
/// };
/// assert_eq!(summary.forfeited().sick, Decimal::new(6, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearSummary {
    /// The calendar year.
    pub year: i32,
    /// Balance carried in from the previous year.
    pub opening: AccrualResult,
    /// Initial grant (non-zero only in the effective join year).
    pub initial_grant: AccrualResult,
    /// Number of monthly credits posted in the year.
    pub monthly_credits: u32,
    /// Total of the monthly credits.
    pub monthly: AccrualResult,
    /// Anniversary bonus casual days granted in the year.
    pub anniversary_bonus: Decimal,
    /// Balance after the year, including any year-end adjustment.
    pub closing: AccrualResult,
    /// Whether the year had closed and the carry-forward rules were applied.
    pub year_end_applied: bool,
}

impl YearSummary {
    /// Builds a summary from the year's accumulator and the balances around it.
    pub fn from_accumulator(
        accumulator: &YearAccumulator,
        opening: AccrualResult,
        closing: AccrualResult,
        year_end_applied: bool,
    ) -> Self {
        Self {
            year: accumulator.year,
            opening,
            initial_grant: accumulator.initial_grant,
            monthly_credits: accumulator.monthly_credits,
            monthly: accumulator.monthly,
            anniversary_bonus: accumulator.anniversary_bonus,
            closing,
            year_end_applied,
        }
    }

    /// Days lost to the year-end adjustment.
    pub fn forfeited(&self) -> AccrualResult {
        let accrued = self
            .opening
            .plus(self.initial_grant)
            .plus(self.monthly)
            .plus(AccrualResult::new(self.anniversary_bonus, Decimal::ZERO));
        AccrualResult::new(
            accrued.casual - self.closing.casual,
            accrued.sick - self.closing.sick,
        )
    }
}

/// The outcome of replaying an employee's service up to an as-of date.
///
/// `balance` is the clamped final balance; `years` holds the per-year audit
/// trail. When the as-of date precedes the effective join date the report has
/// a zero balance and no years.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccrualReport {
    /// Identifier of the employee, when the report was requested for one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    /// The employee's true join date.
    pub join_date: NaiveDate,
    /// The later of the join date and the policy epoch.
    pub effective_join_date: NaiveDate,
    /// The date the balance was evaluated at.
    pub as_of: NaiveDate,
    /// Final casual/sick balance.
    pub balance: AccrualResult,
    /// One entry per replayed calendar year, oldest first.
    pub years: Vec<YearSummary>,
}

impl AccrualReport {
    /// The summary for the as-of year, if any year was replayed.
    pub fn current_year(&self) -> Option<&YearSummary> {
        self.years
            .last()
            .filter(|summary| summary.year == self.as_of.year())
    }
}
