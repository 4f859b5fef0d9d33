//! The genotype: the immutable search space.
//!
//! Loaded once per worker and never mutated afterwards; every tour the
//! worker evolves is a permutation of these genes.

use std::path::Path;

use crate::dataset;
use crate::engine::rng::EvoRng;
use crate::engine::tour::Tour;
use crate::error::EvoResult;
use crate::geo::City;

/// The reference set of all cities. Read-only after construction.
#[derive(Debug, Clone)]
pub struct Genotype {
    genes: Vec<City>,
}

impl Genotype {
    /// Load the search space from a city data file.
    ///
    /// # Errors
    ///
    /// Any dataset failure (unreadable file, malformed record, empty
    /// file) is fatal — there is no partial-load recovery.
    pub fn load<P: AsRef<Path>>(path: P) -> EvoResult<Self> {
        Ok(Self {
            genes: dataset::load(path)?,
        })
    }

    /// Build a genotype from cities already in memory (tests, callers
    /// with their own data source).
    #[must_use]
    pub fn from_cities(genes: Vec<City>) -> Self {
        Self { genes }
    }

    /// Number of cities in the search space.
    #[must_use]
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Whether the search space is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// The genes themselves.
    #[must_use]
    pub fn genes(&self) -> &[City] {
        &self.genes
    }

    /// Create a new randomized tour over the whole search space.
    ///
    /// The tour gets independent copies of every gene, so mutating one
    /// tour can never affect another tour or the genotype itself.
    #[must_use]
    pub fn random_tour(&self, rng: &mut EvoRng) -> Tour {
        let mut tour = Tour::new(self.genes.clone());
        tour.shuffle(rng);
        tour
    }
}
