//! Configuration loading and management for the Leave Accrual Engine.
//!
//! This module provides functionality to load the leave accrual policy from a
//! YAML file: the system epoch, initial grants, the monthly credit,
//! anniversary bonuses, and year-end carry-forward caps.
//!
//! # Example
//!
//! ```no_run
//! use leave_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/leave_policy").unwrap();
//! println!("Carry-forward cap: {}", config.policy().year_end.casual_carry_forward_cap);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AccrualPolicy, AnniversaryBonus, InitialGrantConfig, YearEndConfig};
