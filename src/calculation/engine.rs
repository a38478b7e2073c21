//! The leave accrual engine.
//!
//! Balances are recomputed from scratch on every call: the engine replays
//! calendar years from the effective join date through the as-of date as a
//! fold over `{casual, sick}` state. Each step applies the initial grant,
//! posted monthly credits and anniversary bonuses for one year, then closes
//! the year out unless it is the as-of year. No balance is stored between
//! calls, and the clock is never read inside the replay.

use chrono::{Datelike, Local, NaiveDate};
use tracing::debug;

use crate::config::{AccrualPolicy, ConfigLoader};
use crate::error::EngineResult;
use crate::models::{AccrualReport, AccrualResult, Employee, YearAccumulator, YearSummary};

use super::anniversary::anniversary_bonus;
use super::initial_grant::initial_grant;
use super::monthly_credit::CreditWindow;
use super::year_end::close_year;

/// Computes casual and sick leave balances under an [`AccrualPolicy`].
///
/// The engine holds no mutable state and can be shared freely across threads.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::AccrualEngine;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let engine = AccrualEngine::default();
/// let join = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
///
/// // On January's last working day February's credit has been posted
/// let balance = engine
///     .compute(join, NaiveDate::from_ymd_opt(2023, 1, 31).unwrap())
///     .unwrap();
/// assert_eq!(balance.casual, Decimal::new(2, 0));
/// assert_eq!(balance.sick, Decimal::new(1, 0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct AccrualEngine {
    policy: AccrualPolicy,
}

/// Running state threaded through the year-by-year fold.
#[derive(Debug, Default)]
struct ReplayState {
    balance: AccrualResult,
    years: Vec<YearSummary>,
}

impl AccrualEngine {
    /// Creates an engine for `policy` after validating it.
    pub fn new(policy: AccrualPolicy) -> EngineResult<Self> {
        policy.validate()?;
        Ok(Self { policy })
    }

    /// Returns the policy the engine applies.
    pub fn policy(&self) -> &AccrualPolicy {
        &self.policy
    }

    /// The later of `join_date` and the policy epoch.
    pub fn effective_join_date(&self, join_date: NaiveDate) -> NaiveDate {
        join_date.max(self.policy.epoch)
    }

    /// Computes the balance accrued from `join_date` through `as_of`.
    ///
    /// Returns a zero balance when `as_of` precedes the effective join date.
    pub fn compute(&self, join_date: NaiveDate, as_of: NaiveDate) -> EngineResult<AccrualResult> {
        Ok(self.report(join_date, as_of)?.balance)
    }

    /// Computes the balance together with a summary of every replayed year.
    pub fn report(&self, join_date: NaiveDate, as_of: NaiveDate) -> EngineResult<AccrualReport> {
        let effective_join_date = self.effective_join_date(join_date);

        let state = if as_of < effective_join_date {
            debug!(
                join_date = %join_date,
                as_of = %as_of,
                "As-of date precedes effective join date; nothing accrued"
            );
            ReplayState::default()
        } else {
            (effective_join_date.year()..=as_of.year()).try_fold(
                ReplayState::default(),
                |state, year| self.replay_year(state, year, join_date, effective_join_date, as_of),
            )?
        };

        Ok(AccrualReport {
            employee_id: None,
            join_date,
            effective_join_date,
            as_of,
            balance: state.balance.clamped(self.policy.balance_ceiling),
            years: state.years,
        })
    }

    /// Computes the report for an employee record.
    pub fn report_for(&self, employee: &Employee, as_of: NaiveDate) -> EngineResult<AccrualReport> {
        employee.validate()?;
        let mut report = self.report(employee.join_date, as_of)?;
        report.employee_id = Some(employee.id.clone());
        Ok(report)
    }

    /// Advances the fold by one calendar year.
    fn replay_year(
        &self,
        mut state: ReplayState,
        year: i32,
        join_date: NaiveDate,
        effective_join_date: NaiveDate,
        as_of: NaiveDate,
    ) -> EngineResult<ReplayState> {
        let mut accumulator = YearAccumulator::new(year);

        if year == effective_join_date.year() {
            accumulator.initial_grant = initial_grant(effective_join_date, &self.policy.initial_grant);
        }

        let window = CreditWindow::for_year(year, effective_join_date, as_of)?;
        for _ in 0..window.posted_credits(as_of)? {
            accumulator.post_monthly_credit(self.policy.monthly_credit);
        }

        accumulator.anniversary_bonus = anniversary_bonus(
            join_date,
            year,
            as_of,
            self.policy.epoch,
            &self.policy.anniversary_bonuses,
        )?;

        let opening = state.balance;
        let accrued = opening.plus(accumulator.subtotal());
        let year_closed = year != as_of.year();
        let closing = if year_closed {
            close_year(accrued, &self.policy.year_end)
        } else {
            accrued
        };

        debug!(
            year,
            monthly_credits = accumulator.monthly_credits,
            casual = %closing.casual,
            sick = %closing.sick,
            closed = year_closed,
            "Replayed accrual year"
        );

        state
            .years
            .push(YearSummary::from_accumulator(&accumulator, opening, closing, year_closed));
        state.balance = closing;
        Ok(state)
    }
}

impl From<ConfigLoader> for AccrualEngine {
    /// The loader has already validated its policy.
    fn from(config: ConfigLoader) -> Self {
        Self {
            policy: config.into_policy(),
        }
    }
}

/// Computes the balance accrued by `as_of` under the default policy.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::compute_accrual;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let balance = compute_accrual(
///     NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 7, 1).unwrap(),
/// )
/// .unwrap();
/// assert_eq!(balance.casual, Decimal::new(19, 0));
/// ```
pub fn compute_accrual(join_date: NaiveDate, as_of: NaiveDate) -> EngineResult<AccrualResult> {
    AccrualEngine::default().compute(join_date, as_of)
}

/// Computes the balance accrued by today's local date under the default policy.
pub fn compute_accrual_today(join_date: NaiveDate) -> EngineResult<AccrualResult> {
    compute_accrual(join_date, Local::now().date_naive())
}
