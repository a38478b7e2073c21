//! HTTP API module for the Leave Accrual Engine.
//!
//! This module exposes the accrual engine, the working day calendar and the
//! anniversary predicates over a small REST API.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AccrualRequest, AnniversaryRequest};
pub use response::{AccrualResponse, AnniversaryResponse, ApiError, WorkingDayResponse};
pub use state::AppState;
