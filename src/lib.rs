//! # evotour
//!
//! Concurrent genetic-algorithm search for short Traveling Salesman tours.
//!
//! Several independent populations of candidate tours evolve in parallel,
//! one per worker thread. Each worker publishes its current best tour to a
//! collector, which keeps the global best seen until a wall-clock budget
//! expires. Runs are reproducible: every worker owns an independent,
//! deterministic RNG stream derived from a single master seed.
//!
//! ## Example
//!
//! ```rust,no_run
//! use evotour::prelude::*;
//!
//! let config = EvoConfig::builder()
//!     .seed(42)
//!     .run_duration_secs(2.0)
//!     .build();
//! let outcome = race("capitals.tsp", &config, &mut NullReporter)?;
//! # Ok::<(), EvoError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::missing_const_for_fn,  // Many functions can't be const in stable Rust
    clippy::needless_range_loop,   // Sometimes range loops are clearer
)]

pub mod config;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod geo;
pub mod runner;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{EvoConfig, EvoConfigBuilder};
    pub use crate::engine::genotype::Genotype;
    pub use crate::engine::population::Population;
    pub use crate::engine::rng::EvoRng;
    pub use crate::engine::tour::Tour;
    pub use crate::error::{EvoError, EvoResult};
    pub use crate::geo::City;
    pub use crate::runner::{race, NullReporter, RaceOutcome, Reporter};
}

/// Re-export for public API
pub use error::{EvoError, EvoResult};
