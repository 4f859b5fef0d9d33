//! The GA engine.
//!
//! Everything a single worker needs to evolve tours on its own:
//! - Deterministic RNG (PCG with partitioned per-worker streams)
//! - Tours and their genetic operators
//! - The immutable genotype (search space)
//! - The population and its generational step
//!
//! Nothing in this module is shared between threads; each worker owns
//! one genotype, one population, and one RNG stream.

pub mod genotype;
pub mod population;
pub mod rng;
pub mod tour;

pub use genotype::Genotype;
pub use population::Population;
pub use rng::EvoRng;
pub use tour::Tour;
