//! evotour CLI - concurrent GA search for short TSP tours.
//!
//! Reads a city file, races GA workers against the wall clock, and
//! prints every global-best improvement as it is found.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{arg, Command};

use evotour::config::EvoConfig;
use evotour::engine::tour::Tour;
use evotour::error::EvoResult;
use evotour::runner::{race, Reporter};

fn cli() -> Command {
    Command::new("evotour")
        .about("Concurrent genetic-algorithm search for short TSP tours")
        .arg(
            arg!(<CITIES> "Path to a city file: one 'name lat lon' record per line")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            arg!(--config <PATH> "YAML run configuration")
                .value_parser(clap::value_parser!(PathBuf))
                .required(false),
        )
        .arg(
            arg!(--seconds <SECS> "Wall-clock budget in seconds")
                .value_parser(clap::value_parser!(f64))
                .required(false),
        )
        .arg(
            arg!(--workers <N> "Number of parallel GA workers")
                .value_parser(clap::value_parser!(usize))
                .required(false),
        )
        .arg(
            arg!(--seed <SEED> "Master RNG seed")
                .value_parser(clap::value_parser!(u64))
                .required(false),
        )
}

/// Prints each improvement as a score line plus the city sequence.
struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn improved(&mut self, score: f64, tour: &Tour) {
        println!("Score = {score:.3}");
        let names: Vec<&str> = tour.cities().iter().map(|city| city.name()).collect();
        println!("{}", names.join(", "));
        println!();
    }
}

fn run() -> EvoResult<()> {
    let matches = cli().get_matches();

    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => EvoConfig::load(path)?,
        None => EvoConfig::default(),
    };
    if let Some(secs) = matches.get_one::<f64>("seconds") {
        config.race.run_duration_secs = *secs;
    }
    if let Some(workers) = matches.get_one::<usize>("workers") {
        config.race.workers = Some(*workers);
    }
    if let Some(seed) = matches.get_one::<u64>("seed") {
        config.seed = *seed;
    }

    let cities = matches
        .get_one::<PathBuf>("CITIES")
        .cloned()
        .unwrap_or_default();

    let outcome = race(&cities, &config, &mut ConsoleReporter)?;

    match outcome.best {
        Some(_) => println!(
            "Done. Best score {:.3} after {} improvements ({} tours from {} workers).",
            outcome.best_score, outcome.improvements, outcome.reports, outcome.workers
        ),
        None => println!("Done. No tours reported within the budget."),
    }
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("evotour: {err}");
            ExitCode::FAILURE
        }
    }
}
