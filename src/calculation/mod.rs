//! Calculation logic for the Leave Accrual Engine.
//!
//! This module contains the working day calendar, the initial grant for new
//! joiners, the monthly credit schedule, anniversary rules, the year-end
//! adjustment, and the [`AccrualEngine`] that replays them year by year.

mod anniversary;
mod engine;
mod initial_grant;
mod monthly_credit;
mod working_day;
mod year_end;

pub use anniversary::{
    anniversary_bonus, anniversary_date, has_completed_anniversary, has_completed_at_least,
    years_of_service,
};
pub use engine::{AccrualEngine, compute_accrual, compute_accrual_today};
pub use initial_grant::initial_grant;
pub use monthly_credit::{CreditWindow, credit_posting_date};
pub use working_day::{is_last_working_day_of_month, is_working_day, last_working_day};
pub use year_end::close_year;
