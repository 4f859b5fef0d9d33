//! Tours and their genetic operators.
//!
//! A `Tour` is one candidate solution: an ordered permutation of every
//! city in the search space, closed implicitly from the last city back
//! to the first. The operators here must uphold one invariant as a
//! postcondition: a tour contains every genotype city exactly once.
//! Mutation reorders in place so it cannot break it; crossover rebuilds
//! children with an explicit membership check.

use serde::{Deserialize, Serialize};

use crate::engine::rng::EvoRng;
use crate::geo::{great_circle, City};

/// One candidate solution: a path through all cities, owned exclusively.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tour {
    path: Vec<City>,
}

impl Tour {
    /// Build a tour from an ordered city sequence.
    #[must_use]
    pub fn new(path: Vec<City>) -> Self {
        Self { path }
    }

    /// Number of cities in the tour.
    #[must_use]
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Whether the tour holds no cities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// The ordered city sequence.
    #[must_use]
    pub fn cities(&self) -> &[City] {
        &self.path
    }

    /// Randomly permute the path in place. Used only at population
    /// seeding; the shuffle is uniform over all permutations.
    pub fn shuffle(&mut self, rng: &mut EvoRng) {
        rng.shuffle(&mut self.path);
    }

    /// Membership test by city name. O(len) scan — fine at the
    /// population and offspring sizes this crate runs at.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.path.iter().any(|city| city.name() == name)
    }

    /// Mutation operator: with probability `rate`, reverse the sub-path
    /// between two distinct random indices (a 2-opt style inversion).
    ///
    /// Only reorders existing elements, so the permutation invariant is
    /// preserved unconditionally. Tours shorter than two cities have no
    /// segment to invert.
    pub fn mutate(&mut self, rate: f64, rng: &mut EvoRng) {
        if self.path.len() < 2 {
            return;
        }
        if rng.chance(rate) {
            let (low, high) = rng.distinct_pair(self.path.len());
            self.path[low..=high].reverse();
        }
    }

    /// Reproduction operator: with probability `crossover_rate`, produce
    /// two children; otherwise none. Callers must handle both cases.
    ///
    /// Each child takes a uniform-random-length prefix of one parent,
    /// then the remaining cities in the other parent's order, skipping
    /// any already present — so every child is a valid permutation.
    /// Children are mutated before being returned.
    #[must_use]
    pub fn crossover(
        &self,
        other: &Self,
        crossover_rate: f64,
        mutation_rate: f64,
        rng: &mut EvoRng,
    ) -> Vec<Self> {
        if !rng.chance(crossover_rate) {
            return Vec::new();
        }
        vec![
            Self::child_of(&self.path, &other.path, mutation_rate, rng),
            Self::child_of(&other.path, &self.path, mutation_rate, rng),
        ]
    }

    /// Build one child: prefix of `prefix` (length uniform over
    /// [0, len)), filled out in `filler` order. A zero-length prefix
    /// yields a child entirely in the second parent's order.
    fn child_of(prefix: &[City], filler: &[City], mutation_rate: f64, rng: &mut EvoRng) -> Self {
        let take = rng.index(prefix.len());
        let mut child = Self {
            path: prefix[..take].to_vec(),
        };
        for city in filler {
            if !child.contains(city.name()) {
                child.path.push(city.clone());
            }
        }
        child.mutate(mutation_rate, rng);
        child
    }

    /// Total great-circle distance of the closed loop: consecutive
    /// edges plus the wrap-around from last back to first.
    ///
    /// Recomputed on every call, never cached — an O(len) scan per
    /// comparison is a deliberate simplicity tradeoff at these sizes.
    #[must_use]
    pub fn score(&self) -> f64 {
        let (Some(first), Some(last)) = (self.path.first(), self.path.last()) else {
            return 0.0;
        };
        let mut total = great_circle(last, first);
        for pair in self.path.windows(2) {
            total += great_circle(&pair[0], &pair[1]);
        }
        total
    }
}
