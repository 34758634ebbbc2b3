//! Random search configuration.

use crate::device::Device;
use crate::error::{Result, SearchError};

/// Configuration for [`RandomSearch`](super::RandomSearch).
///
/// # Examples
///
/// ```
/// use u_isa::rs::RandomSearchConfig;
/// use u_isa::Device;
///
/// let config = RandomSearchConfig::default()
///     .with_seed(42)
///     .with_device(Device::Cuda(0))
///     .with_max_init_attempts(500);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RandomSearchConfig {
    /// Seed for the instance-local random generator.
    pub seed: u64,

    /// Processing device passed to the initializer.
    pub device: Device,

    /// Maximum number of random draws while looking for a feasible
    /// starting point. Initialization fails once exhausted.
    pub max_init_attempts: usize,
}

impl Default for RandomSearchConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            device: Device::Cpu,
            max_init_attempts: 10_000,
        }
    }
}

impl RandomSearchConfig {
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

    /// Sets the feasibility retry cap.
    pub fn with_max_init_attempts(mut self, attempts: usize) -> Self {
        self.max_init_attempts = attempts;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.max_init_attempts == 0 {
            return Err(SearchError::config("max_init_attempts must be at least 1"));
        }
        Ok(())
    }
}
