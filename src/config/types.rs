//! Configuration types for leave accrual.
//!
//! This module contains the strongly-typed policy structures that are
//! deserialized from YAML configuration files. [`AccrualPolicy::default`]
//! reproduces the policy the leave system went live with.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::AccrualResult;

/// The one-off grant made in the effective join year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitialGrantConfig {
    /// Last day of month that still earns the larger grant.
    pub cutoff_day: u32,
    /// Grant for joiners on or before the cutoff day.
    pub on_or_before_cutoff: AccrualResult,
    /// Grant for joiners after the cutoff day.
    pub after_cutoff: AccrualResult,
}

/// A lump casual-leave bonus for a service anniversary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnniversaryBonus {
    /// Completed years of service that trigger the bonus.
    pub years: u32,
    /// Casual days granted.
    pub casual: Decimal,
}

/// Carry-forward rules applied when a year closes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearEndConfig {
    /// Maximum casual days carried into the next year.
    pub casual_carry_forward_cap: Decimal,
    /// Maximum sick days carried into the next year.
    #[serde(default)]
    pub sick_carry_forward_cap: Decimal,
}

/// The complete leave accrual policy.
///
/// # Example
///
/// ```
/// use leave_engine::config::AccrualPolicy;
/// use chrono::NaiveDate;
///
/// let policy = AccrualPolicy::default();
/// assert_eq!(policy.epoch, NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
/// assert!(policy.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccrualPolicy {
    /// Go-live date; service before it earns nothing.
    pub epoch: NaiveDate,
    /// Grant made once in the effective join year.
    pub initial_grant: InitialGrantConfig,
    /// Credit posted for every month of service.
    pub monthly_credit: AccrualResult,
    /// Anniversary bonuses, each granted at most once.
    #[serde(default)]
    pub anniversary_bonuses: Vec<AnniversaryBonus>,
    /// Rules applied at every closed year boundary.
    pub year_end: YearEndConfig,
    /// Hard ceiling applied to each final balance field.
    pub balance_ceiling: Decimal,
}

impl Default for AccrualPolicy {
    fn default() -> Self {
        Self {
            epoch: NaiveDate::from_ymd_opt(2020, 1, 1).expect("Valid epoch date"),
            initial_grant: InitialGrantConfig {
                cutoff_day: 15,
                on_or_before_cutoff: AccrualResult::new(Decimal::ONE, Decimal::new(5, 1)),
                after_cutoff: AccrualResult::new(Decimal::ZERO, Decimal::new(5, 1)),
            },
            monthly_credit: AccrualResult::new(Decimal::ONE, Decimal::new(5, 1)),
            anniversary_bonuses: vec![
                AnniversaryBonus {
                    years: 3,
                    casual: Decimal::new(3, 0),
                },
                AnniversaryBonus {
                    years: 5,
                    casual: Decimal::new(5, 0),
                },
            ],
            year_end: YearEndConfig {
                casual_carry_forward_cap: Decimal::new(8, 0),
                sick_carry_forward_cap: Decimal::ZERO,
            },
            balance_ceiling: Decimal::new(99, 0),
        }
    }
}

impl AccrualPolicy {
    /// Checks that every amount is non-negative and the rules are consistent.
    pub fn validate(&self) -> EngineResult<()> {
        if !(1..=31).contains(&self.initial_grant.cutoff_day) {
            return Err(invalid(
                "initial_grant.cutoff_day",
                format!("must be between 1 and 31, got {}", self.initial_grant.cutoff_day),
            ));
        }

        let amounts = [
            ("initial_grant.on_or_before_cutoff", &self.initial_grant.on_or_before_cutoff),
            ("initial_grant.after_cutoff", &self.initial_grant.after_cutoff),
            ("monthly_credit", &self.monthly_credit),
        ];
        for (field, amount) in amounts {
            if amount.casual.is_sign_negative() || amount.sick.is_sign_negative() {
                return Err(invalid(field, "must not be negative".to_string()));
            }
        }

        let mut seen_years = Vec::with_capacity(self.anniversary_bonuses.len());
        for bonus in &self.anniversary_bonuses {
            if bonus.years == 0 {
                return Err(invalid(
                    "anniversary_bonuses.years",
                    "must be at least 1".to_string(),
                ));
            }
            if seen_years.contains(&bonus.years) {
                return Err(invalid(
                    "anniversary_bonuses.years",
                    format!("duplicate bonus for {} years", bonus.years),
                ));
            }
            if bonus.casual.is_sign_negative() {
                return Err(invalid(
                    "anniversary_bonuses.casual",
                    "must not be negative".to_string(),
                ));
            }
            seen_years.push(bonus.years);
        }

        if self.year_end.casual_carry_forward_cap.is_sign_negative()
            || self.year_end.sick_carry_forward_cap.is_sign_negative()
        {
            return Err(invalid("year_end", "caps must not be negative".to_string()));
        }

        if self.balance_ceiling < self.year_end.casual_carry_forward_cap {
            return Err(invalid(
                "balance_ceiling",
                format!(
                    "{} is below the casual carry-forward cap {}",
                    self.balance_ceiling, self.year_end.casual_carry_forward_cap
                ),
            ));
        }

        Ok(())
    }
}

fn invalid(field: &str, message: String) -> EngineError {
    EngineError::InvalidPolicy {
        field: field.to_string(),
        message,
    }
}
