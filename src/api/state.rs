//! Application state for the Deduction Estimator API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use crate::calculation::Estimator;
use crate::config::ConfigLoader;

/// Shared application state.
///
/// Holds an estimator over the loaded rate schedule. Cloning shares the
/// schedule rather than copying it.
#[derive(Clone)]
pub struct AppState {
    estimator: Estimator,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            estimator: Estimator::new(config.schedule().clone()),
        }
    }

    /// Returns the estimator.
    pub fn estimator(&self) -> &Estimator {
        &self.estimator
    }
}
