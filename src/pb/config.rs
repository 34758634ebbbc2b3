//! Population-based search configuration.

use crate::device::Device;
use crate::error::{Result, SearchError};

/// Configuration for [`PopulationBased`](super::PopulationBased).
///
/// # Examples
///
/// ```
/// use u_isa::pb::PopulationConfig;
///
/// let config = PopulationConfig::default().with_pop_size(50).with_seed(3);
/// assert_eq!(config.pop_size, 50);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PopulationConfig {
    /// Number of individuals, fixed for the whole run.
    ///
    /// Seeded starting individuals consume slots from this budget.
    pub pop_size: usize,

    /// Seed for the instance-local random generator.
    pub seed: u64,

    /// Processing device passed to the initializer.
    pub device: Device,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            pop_size: 100,
            seed: 0,
            device: Device::Cpu,
        }
    }
}

impl PopulationConfig {
    /// Sets the population size.
    pub fn with_pop_size(mut self, n: usize) -> Self {
        self.pop_size = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the processing device.
    pub fn with_device(mut self, device: Device) -> Self {
        self.device = device;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.pop_size == 0 {
            return Err(SearchError::config("pop_size must be at least 1"));
        }
        Ok(())
    }

    /// Validates a caller-supplied seed count against the population size.
    pub fn validate_seeds(&self, seeds: usize) -> Result<()> {
        if seeds > self.pop_size {
            return Err(SearchError::config(format!(
                "{seeds} starting individuals supplied but pop_size is {}",
                self.pop_size
            )));
        }
        Ok(())
    }
}
