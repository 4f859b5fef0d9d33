//! The race: N workers, one collector, one deadline.
//!
//! The coordinator launches a fixed number of worker threads, consumes
//! their published tours from a single rendezvous channel, tracks the
//! best score seen anywhere, and broadcasts stop when the wall-clock
//! budget expires. Shutdown is synchronous: the scope join means no
//! worker outlives the race.
//!
//! No ordering is guaranteed between workers' publications — arrival
//! order is a race the design tolerates, since only monotonic
//! best-tracking matters. Within one worker, each publication reflects
//! a population at least one generation more evolved than the last.

mod worker;

use crossbeam_channel::{after, bounded, select};
use std::path::Path;
use std::thread;

use crate::config::EvoConfig;
use crate::engine::tour::Tour;
use crate::engine::EvoRng;
use crate::error::{EvoError, EvoResult};
use worker::{Worker, WorkerEvent};

/// Observer for global-best improvements.
///
/// The coordinator calls `improved` once per strict improvement, in
/// discovery order; duplicate and worse reports are dropped silently.
pub trait Reporter {
    /// A tour strictly better than everything seen so far.
    fn improved(&mut self, score: f64, tour: &Tour);
}

/// Reporter that discards everything. For library callers that only
/// want the final `RaceOutcome`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn improved(&mut self, _score: f64, _tour: &Tour) {}
}

/// What a race produced.
#[derive(Debug, Clone)]
pub struct RaceOutcome {
    /// Best tour seen across all workers, if any report arrived.
    pub best: Option<Tour>,
    /// Score of the best tour; +infinity when no report arrived.
    pub best_score: f64,
    /// Number of strict improvements (reporter calls).
    pub improvements: u64,
    /// Total tours received from workers.
    pub reports: u64,
    /// Number of workers that ran.
    pub workers: usize,
}

/// Run one race: evolve in parallel until the budget expires, then
/// stop every worker and return the global best.
///
/// The master seed is partitioned into one independent RNG stream per
/// worker, so the outcome is reproducible for a given seed, worker
/// count, and budget generous enough to converge.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or any worker
/// fails to load the data source (a shared precondition — one failure
/// aborts the whole run).
pub fn race<P: AsRef<Path>>(
    source: P,
    config: &EvoConfig,
    reporter: &mut dyn Reporter,
) -> EvoResult<RaceOutcome> {
    config.validate_semantic()?;

    let workers = config.resolved_workers();
    let mut master = EvoRng::new(config.seed);
    let streams = master.partition(workers);

    // Capacity 0: publications rendezvous with the collector, which
    // backpressures each worker to one un-consumed best at a time.
    let (event_tx, event_rx) = bounded::<WorkerEvent>(0);
    let (stop_tx, stop_rx) = bounded::<()>(0);

    let source = source.as_ref();
    let mut outcome = RaceOutcome {
        best: None,
        best_score: f64::INFINITY,
        improvements: 0,
        reports: 0,
        workers,
    };
    let mut fatal: Option<EvoError> = None;

    thread::scope(|scope| {
        for rng in streams {
            let worker = Worker {
                source: source.to_path_buf(),
                ga: config.ga.clone(),
                rng,
                events: event_tx.clone(),
                stop: stop_rx.clone(),
            };
            scope.spawn(move || worker.run());
        }
        // Only workers hold senders now, so the channel disconnects
        // when the last worker exits.
        drop(event_tx);

        let deadline = after(config.run_duration());
        loop {
            select! {
                recv(event_rx) -> event => match event {
                    Ok(WorkerEvent::Best(tour)) => {
                        outcome.reports += 1;
                        let score = tour.score();
                        if score < outcome.best_score {
                            outcome.best_score = score;
                            outcome.improvements += 1;
                            reporter.improved(score, &tour);
                            outcome.best = Some(tour);
                        }
                    }
                    Ok(WorkerEvent::Failed(err)) => {
                        fatal = Some(err);
                        break;
                    }
                    Err(_) => break, // every worker already exited
                },
                recv(deadline) -> _ => break,
            }
        }

        // Broadcast stop: every worker sees the disconnect, including
        // those blocked mid-publish. The scope join below is the
        // completion barrier.
        drop(stop_tx);
    });

    match fatal {
        Some(err) => Err(err),
        None => Ok(outcome),
    }
}
