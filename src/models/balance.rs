//! Leave balance value types.
//!
//! This module contains [`AccrualResult`], the (casual, sick) pair returned by
//! the engine, and [`YearAccumulator`], the per-year working state used while
//! replaying a calendar year.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The kinds of leave tracked by the accrual engine.
///
/// # Example
///
/// ```
/// use leave_engine::models::LeaveEntitlement;
///
/// assert_eq!(LeaveEntitlement::Casual.to_string(), "casual");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveEntitlement {
    /// Casual leave: carried forward across years up to a cap.
    Casual,
    /// Sick leave: forfeited at the end of every year.
    Sick,
}

impl std::fmt::Display for LeaveEntitlement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeaveEntitlement::Casual => write!(f, "casual"),
            LeaveEntitlement::Sick => write!(f, "sick"),
        }
    }
}

/// A casual/sick leave balance in days.
///
/// Both fields are non-negative. Amounts are exact decimals so that half-day
/// sick credits never drift.
///
/// # Example
///
/// ```
/// use leave_engine::models::AccrualResult;
/// use rust_decimal::Decimal;
///
/// let balance = AccrualResult::new(Decimal::ONE, Decimal::new(5, 1));
/// assert_eq!(balance.total(), Decimal::new(15, 1));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccrualResult {
    /// Casual leave days.
    pub casual: Decimal,
    /// Sick leave days.
    pub sick: Decimal,
}

impl AccrualResult {
    /// An empty balance.
    pub const ZERO: AccrualResult = AccrualResult {
        casual: Decimal::ZERO,
        sick: Decimal::ZERO,
    };

    /// Creates a balance from casual and sick amounts.
    pub fn new(casual: Decimal, sick: Decimal) -> Self {
        Self { casual, sick }
    }

    /// Returns the amount held for one kind of leave.
    pub fn get(&self, entitlement: LeaveEntitlement) -> Decimal {
        match entitlement {
            LeaveEntitlement::Casual => self.casual,
            LeaveEntitlement::Sick => self.sick,
        }
    }

    /// Casual plus sick days.
    pub fn total(&self) -> Decimal {
        self.casual + self.sick
    }

    /// Returns the balance with each field independently capped at `ceiling`.
    pub fn clamped(self, ceiling: Decimal) -> Self {
        Self {
            casual: self.casual.min(ceiling),
            sick: self.sick.min(ceiling),
        }
    }

    /// Returns the field-wise sum of two balances.
    pub fn plus(self, other: AccrualResult) -> Self {
        Self {
            casual: self.casual + other.casual,
            sick: self.sick + other.sick,
        }
    }
}

/// Working state for a single replayed calendar year.
///
/// Each component is tracked separately so that the year can be audited;
/// [`YearAccumulator::subtotal`] folds them into the amount added to the
/// running balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearAccumulator {
    /// The calendar year being replayed.
    pub year: i32,
    /// One-off grant applied in the effective join year.
    pub initial_grant: AccrualResult,
    /// Number of monthly credits posted during the year.
    pub monthly_credits: u32,
    /// Casual/sick total of those monthly credits.
    pub monthly: AccrualResult,
    /// Casual days granted for service anniversaries falling in the year.
    pub anniversary_bonus: Decimal,
}

impl YearAccumulator {
    /// Creates an empty accumulator for `year`.
    pub fn new(year: i32) -> Self {
        Self {
            year,
            initial_grant: AccrualResult::ZERO,
            monthly_credits: 0,
            monthly: AccrualResult::ZERO,
            anniversary_bonus: Decimal::ZERO,
        }
    }

    /// Records one monthly credit.
    pub fn post_monthly_credit(&mut self, credit: AccrualResult) {
        self.monthly_credits += 1;
        self.monthly = self.monthly.plus(credit);
    }

    /// The year's contribution to the running balance.
    pub fn subtotal(&self) -> AccrualResult {
        let casual = self.initial_grant.casual + self.monthly.casual + self.anniversary_bonus;
        let sick = self.initial_grant.sick + self.monthly.sick;
        AccrualResult::new(casual, sick)
    }
}
