//! Leave Accrual Engine
//!
//! This crate computes how many casual and sick leave days an employee has
//! accrued as of any date, given only their join date. It replays monthly
//! credits, the initial grant, service-anniversary bonuses and year-end
//! carry-forward rules from the leave system's go-live epoch.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
