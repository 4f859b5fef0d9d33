//! Configuration system with YAML schema and validation.
//!
//! All run parameters are fixed for the lifetime of a race and flow in
//! through one validated struct: type-safe fields, schema validation via
//! serde, and a runtime semantic pass for the constraints the schema
//! cannot express.
//!
//! # Example YAML
//!
//! ```yaml
//! seed: 42
//! ga:
//!   population_size: 100
//!   offspring_per_generation: 10
//!   crossover_rate: 0.9
//!   mutation_rate: 0.1
//! race:
//!   workers: 4            # omit to derive from available parallelism
//!   run_duration_secs: 10.0
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use validator::Validate;

use crate::error::{EvoError, EvoResult};

/// Top-level run configuration.
///
/// Loaded from YAML files with full schema validation, or built
/// programmatically via [`EvoConfig::builder`].
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct EvoConfig {
    /// Master seed: every worker's RNG stream derives from it.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Genetic-operator parameters shared by every worker.
    #[validate(nested)]
    #[serde(default)]
    pub ga: GaConfig,

    /// Concurrency and deadline parameters.
    #[validate(nested)]
    #[serde(default)]
    pub race: RaceConfig,
}

const fn default_seed() -> u64 {
    42
}

/// Genetic-operator parameters. Each worker evolves its own population
/// with these; there is no shared GA state between workers.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct GaConfig {
    /// Tours per population. Slots are replaced during evolution, never
    /// added or removed.
    #[validate(range(min = 1))]
    #[serde(default = "default_population_size")]
    pub population_size: usize,

    /// Children attempted per generation (pairs of parents produce up
    /// to two children each, so this runs `offspring / 2` pairings).
    #[validate(range(min = 2))]
    #[serde(default = "default_offspring")]
    pub offspring_per_generation: usize,

    /// Probability that a selected parent pair reproduces at all.
    #[validate(range(min = 0.0, max = 1.0))]
    #[serde(default = "default_crossover_rate")]
    pub crossover_rate: f64,

    /// Probability that a tour undergoes one segment inversion.
    #[validate(range(min = 0.0, max = 1.0))]
    #[serde(default = "default_mutation_rate")]
    pub mutation_rate: f64,
}

const fn default_population_size() -> usize {
    100
}

const fn default_offspring() -> usize {
    10
}

const fn default_crossover_rate() -> f64 {
    0.9
}

const fn default_mutation_rate() -> f64 {
    0.1
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: default_population_size(),
            offspring_per_generation: default_offspring(),
            crossover_rate: default_crossover_rate(),
            mutation_rate: default_mutation_rate(),
        }
    }
}

/// Concurrency and deadline parameters for one race.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct RaceConfig {
    /// Number of parallel GA workers. When absent, derived from
    /// available parallelism (half the cores plus one, at least two).
    #[serde(default)]
    pub workers: Option<usize>,

    /// Wall-clock budget in seconds. Zero is valid and means "signal
    /// stop immediately" — useful for shutdown tests.
    #[serde(default = "default_run_duration_secs")]
    pub run_duration_secs: f64,
}

const fn default_run_duration_secs() -> f64 {
    10.0
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self {
            workers: None,
            run_duration_secs: default_run_duration_secs(),
        }
    }
}

impl Default for EvoConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            ga: GaConfig::default(),
            race: RaceConfig::default(),
        }
    }
}

impl EvoConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - YAML parsing fails
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> EvoResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> EvoResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;

        // Schema-level constraints
        config.validate()?;

        // Constraints the schema cannot express
        config.validate_semantic()?;

        Ok(config)
    }

    /// Create a builder for configuration.
    #[must_use]
    pub fn builder() -> EvoConfigBuilder {
        EvoConfigBuilder::default()
    }

    /// Validate semantic constraints beyond schema.
    ///
    /// Also covers builder-made configs, which skip the derive pass.
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the offending parameter.
    pub fn validate_semantic(&self) -> EvoResult<()> {
        if self.ga.population_size < 1 {
            return Err(EvoError::config("population_size must be at least 1"));
        }
        if self.ga.offspring_per_generation < 2 {
            return Err(EvoError::config(
                "offspring_per_generation must be at least 2 (children come in pairs)",
            ));
        }
        for (name, rate) in [
            ("crossover_rate", self.ga.crossover_rate),
            ("mutation_rate", self.ga.mutation_rate),
        ] {
            if !rate.is_finite() || !(0.0..=1.0).contains(&rate) {
                return Err(EvoError::config(format!(
                    "{name} must be a probability in [0, 1], got {rate}"
                )));
            }
        }
        if !self.race.run_duration_secs.is_finite() || self.race.run_duration_secs < 0.0 {
            return Err(EvoError::config(format!(
                "run_duration_secs must be non-negative, got {}",
                self.race.run_duration_secs
            )));
        }
        if self.race.workers == Some(0) {
            return Err(EvoError::config("workers must be at least 1 when set"));
        }
        Ok(())
    }

    /// Wall-clock budget as a `Duration`.
    #[must_use]
    pub fn run_duration(&self) -> Duration {
        Duration::from_secs_f64(self.race.run_duration_secs.max(0.0))
    }

    /// Worker count: configured value, or derived from available
    /// parallelism — half the cores plus one, never fewer than two.
    #[must_use]
    pub fn resolved_workers(&self) -> usize {
        self.race.workers.unwrap_or_else(|| {
            let cores = std::thread::available_parallelism()
                .map(std::num::NonZero::get)
                .unwrap_or(4);
            (cores / 2 + 1).max(2)
        })
    }
}

/// Configuration builder for programmatic construction.
#[derive(Debug, Default)]
pub struct EvoConfigBuilder {
    seed: Option<u64>,
    population_size: Option<usize>,
    offspring_per_generation: Option<usize>,
    crossover_rate: Option<f64>,
    mutation_rate: Option<f64>,
    workers: Option<usize>,
    run_duration_secs: Option<f64>,
}

impl EvoConfigBuilder {
    /// Set the master seed.
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the population size per worker.
    #[must_use]
    pub const fn population_size(mut self, size: usize) -> Self {
        self.population_size = Some(size);
        self
    }

    /// Set the number of children attempted per generation.
    #[must_use]
    pub const fn offspring_per_generation(mut self, count: usize) -> Self {
        self.offspring_per_generation = Some(count);
        self
    }

    /// Set the crossover probability.
    #[must_use]
    pub const fn crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = Some(rate);
        self
    }

    /// Set the mutation probability.
    #[must_use]
    pub const fn mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = Some(rate);
        self
    }

    /// Set the worker count explicitly.
    #[must_use]
    pub const fn workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Set the wall-clock budget in seconds.
    #[must_use]
    pub const fn run_duration_secs(mut self, secs: f64) -> Self {
        self.run_duration_secs = Some(secs);
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> EvoConfig {
        let mut config = EvoConfig::default();

        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(size) = self.population_size {
            config.ga.population_size = size;
        }
        if let Some(count) = self.offspring_per_generation {
            config.ga.offspring_per_generation = count;
        }
        if let Some(rate) = self.crossover_rate {
            config.ga.crossover_rate = rate;
        }
        if let Some(rate) = self.mutation_rate {
            config.ga.mutation_rate = rate;
        }
        if let Some(workers) = self.workers {
            config.race.workers = Some(workers);
        }
        if let Some(secs) = self.run_duration_secs {
            config.race.run_duration_secs = secs;
        }

        config
    }
}
