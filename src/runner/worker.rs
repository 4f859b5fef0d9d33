//! The per-thread GA worker.
//!
//! Each worker is a fully independent GA instance: it loads its own
//! genotype, seeds its own population, and owns its own RNG stream. The
//! only contact with the rest of the process is the results channel it
//! publishes on and the stop channel it watches.

use crossbeam_channel::{select, Receiver, Sender, TryRecvError};
use std::path::PathBuf;

use crate::config::GaConfig;
use crate::engine::{EvoRng, Genotype, Population};
use crate::engine::tour::Tour;
use crate::error::EvoError;

/// What a worker can publish on the results channel.
#[derive(Debug)]
pub(crate) enum WorkerEvent {
    /// The worker's current best tour, one per generation.
    Best(Tour),
    /// The worker could not load the data source. The source is a
    /// shared precondition, so the coordinator aborts the whole run.
    Failed(EvoError),
}

/// One GA instance, consumed by its thread.
pub(crate) struct Worker {
    /// Path of the city data source; every worker loads its own copy.
    pub source: PathBuf,
    /// Genetic-operator parameters.
    pub ga: GaConfig,
    /// This worker's private RNG stream.
    pub rng: EvoRng,
    /// Results channel (rendezvous: publishing blocks until the
    /// collector takes the tour, which backpressures evolution).
    pub events: Sender<WorkerEvent>,
    /// Stop broadcast: the coordinator drops the sender, which every
    /// worker observes as a disconnect.
    pub stop: Receiver<()>,
}

impl Worker {
    /// The worker loop: publish the current best, then evolve one
    /// generation, until stopped.
    ///
    /// Publication and evolution alternate — a generation only runs
    /// after the previous best has been handed off. Cancellation is
    /// checked before every publish attempt (so it wins ties with a
    /// ready send) and raced against the publish itself; it can only be
    /// observed between generations, never mid-evolve.
    pub fn run(mut self) {
        let genotype = match Genotype::load(&self.source) {
            Ok(genotype) => genotype,
            Err(err) => {
                // Raced against stop so a collector that already gave up
                // cannot strand this worker in a blocking send.
                select! {
                    send(self.events, WorkerEvent::Failed(err)) -> _ => {}
                    recv(self.stop) -> _ => {}
                }
                return;
            }
        };

        let mut population = Population::seeded(&genotype, self.ga.population_size, &mut self.rng);

        loop {
            match self.stop.try_recv() {
                Ok(()) | Err(TryRecvError::Disconnected) => return,
                Err(TryRecvError::Empty) => {}
            }

            let Some(best) = population.best().cloned() else {
                return;
            };

            select! {
                send(self.events, WorkerEvent::Best(best)) -> result => {
                    if result.is_err() {
                        return; // collector hung up
                    }
                    population.evolve(&self.ga, &mut self.rng);
                }
                recv(self.stop) -> _ => return,
            }
        }
    }
}
