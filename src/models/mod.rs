//! Core data models for the Leave Accrual Engine.
//!
//! This module contains all the value types used throughout the engine.

mod balance;
mod employee;
mod report;

pub use balance::{AccrualResult, LeaveEntitlement, YearAccumulator};
pub use employee::Employee;
pub use report::{AccrualReport, YearSummary};
