//! Application state for the Leave Accrual Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calculation::AccrualEngine;
use crate::config::ConfigLoader;

/// Shared application state.
///
/// Holds the accrual engine built from the loaded policy.
#[derive(Clone)]
pub struct AppState {
    engine: Arc<AccrualEngine>,
}

impl AppState {
    /// Creates a new application state from a loaded policy configuration.
    pub fn new(config: ConfigLoader) -> Self {
        Self::with_engine(AccrualEngine::from(config))
    }

    /// Creates a new application state around an existing engine.
    pub fn with_engine(engine: AccrualEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }

    /// Returns a reference to the accrual engine.
    pub fn engine(&self) -> &AccrualEngine {
        &self.engine
    }
}
