//! Solve-loop configuration.

use crate::error::{Result, SearchError};

/// Stopping criteria for [`SearchRunner`](super::SearchRunner).
///
/// # Examples
///
/// ```
/// use u_isa::SolveConfig;
///
/// let config = SolveConfig::default()
///     .with_n_iter(200)
///     .with_stagnation_limit(25)
///     .with_tolerance(1e-9)
///     .with_time_limit_ms(5_000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveConfig {
    /// Maximum number of generations after initialization.
    pub n_iter: usize,

    /// Minimum fitness gain counted as an improvement.
    pub tolerance: f64,

    /// Stop after this many generations without improvement (0 = disabled).
    pub stagnation_limit: usize,

    /// Wall-clock limit in milliseconds (`None` = unlimited).
    pub time_limit_ms: Option<u64>,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            n_iter: 20,
            tolerance: 0.0,
            stagnation_limit: 0,
            time_limit_ms: None,
        }
    }
}

impl SolveConfig {
    /// Sets the generation budget.
    pub fn with_n_iter(mut self, n: usize) -> Self {
        self.n_iter = n;
        self
    }

    /// Sets the improvement tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the stagnation limit.
    pub fn with_stagnation_limit(mut self, n: usize) -> Self {
        self.stagnation_limit = n;
        self
    }

    /// Sets the wall-clock limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.n_iter == 0 {
            return Err(SearchError::config("n_iter must be at least 1"));
        }
        if self.tolerance.is_nan() || self.tolerance < 0.0 {
            return Err(SearchError::config(format!(
                "tolerance must be non-negative, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}
