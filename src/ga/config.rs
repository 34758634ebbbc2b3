//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control generational evolution.

use crate::device::Device;
use crate::error::{Result, SearchError};
use crate::pb::PopulationConfig;

/// Configuration for the Genetic Algorithm.
///
/// Controls population size, variation probabilities, elitism and
/// reproduction policy.
///
/// # Variation policy
///
/// For each bred slot one uniform value `u` is drawn and exactly one
/// operator fires:
///
/// - `u < p_c`: crossover of the two selected parents;
/// - otherwise, with `reproduction` enabled, the first parent is copied
///   unchanged;
/// - otherwise the first parent is mutated.
///
/// Crossover therefore fires with probability `p_c` whatever `p_m` is.
/// `p_m` is validated and kept on the config for mutators that scale
/// their own per-gene rate; the slot draw does not read it.
///
/// # Defaults
///
/// ```
/// use u_isa::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.pop_size, 100);
/// assert!((config.p_m - 0.2).abs() < 1e-12);
/// assert!((config.p_c - 0.8).abs() < 1e-12);
/// assert!(config.elitism);
/// assert!(!config.reproduction);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_isa::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_pop_size(200)
///     .with_p_c(0.9)
///     .with_p_m(0.1)
///     .with_reproduction(true)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in the population.
    pub pop_size: usize,

    /// Mutation probability (0.0–1.0), for mutators that read it.
    pub p_m: f64,

    /// Probability of applying crossover to a pair of parents (0.0–1.0).
    pub p_c: f64,

    /// Carry the best individual unchanged into every new generation.
    pub elitism: bool,

    /// Copy a parent unchanged when crossover is skipped, instead of
    /// mutating it.
    pub reproduction: bool,

    /// Random seed for reproducibility.
    pub seed: u64,

    /// Processing device passed to the initializer.
    pub device: Device,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            pop_size: 100,
            p_m: 0.2,
            p_c: 0.8,
            elitism: true,
            reproduction: false,
            seed: 0,
            device: Device::Cpu,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_pop_size(mut self, n: usize) -> Self {
        self.pop_size = n;
        self
    }

    /// Sets the mutation probability.
    pub fn with_p_m(mut self, p: f64) -> Self {
        self.p_m = p;
        self
    }

    /// Sets the crossover probability.
    pub fn with_p_c(mut self, p: f64) -> Self {
        self.p_c = p;
        self
    }

    /// Enables or disables elitism.
    pub fn with_elitism(mut self, elitism: bool) -> Self {
        self.elitism = elitism;
        self
    }

    /// Enables or disables reproduction.
    pub fn with_reproduction(mut self, reproduction: bool) -> Self {
        self.reproduction = reproduction;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the processing device.
    pub fn with_device(mut self, device: Device) -> Self {
        self.device = device;
        self
    }

    /// Population-level part of this configuration.
    pub fn population(&self) -> PopulationConfig {
        PopulationConfig {
            pop_size: self.pop_size,
            seed: self.seed,
            device: self.device,
        }
    }

    /// Validates the configuration.
    ///
    /// Probabilities are reported, never clamped.
    pub fn validate(&self) -> Result<()> {
        self.population().validate()?;
        check_probability("p_m", self.p_m)?;
        check_probability("p_c", self.p_c)?;
        Ok(())
    }
}

fn check_probability(name: &str, p: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&p) {
        return Err(SearchError::config(format!(
            "{name} must be within [0, 1], got {p}"
        )));
    }
    Ok(())
}
