//! Probar E2E tests for the worker/coordinator race.
//!
//! These tests verify:
//! - A full race over the shipped capitals dataset produces a valid tour
//! - The global best is monotonically non-increasing
//! - Immediate cancellation shuts down cleanly (no deadlock)
//! - Dataset failures abort the whole run
//! - YAML configuration drives a race end to end

use evotour::config::EvoConfig;
use evotour::engine::tour::Tour;
use evotour::geo::great_circle;
use evotour::runner::{race, NullReporter, Reporter};
use evotour::{dataset, EvoError};

const CAPITALS_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/capitals.tsp");
const CAPITALS_TEXT: &str = include_str!("../data/capitals.tsp");

#[derive(Debug, Default)]
struct RecordingReporter {
    scores: Vec<f64>,
}

impl Reporter for RecordingReporter {
    fn improved(&mut self, score: f64, _tour: &Tour) {
        self.scores.push(score);
    }
}

// =============================================================================
// Probar E2E: shipped dataset
// =============================================================================

#[test]
fn probar_capitals_dataset_parses() {
    let cities = dataset::parse("capitals.tsp", CAPITALS_TEXT).expect("dataset should parse");
    assert_eq!(cities.len(), 50, "one record per state capital");
}

#[test]
fn probar_race_over_capitals_finds_a_valid_tour() {
    let config = EvoConfig::builder()
        .seed(42)
        .population_size(50)
        .workers(2)
        .run_duration_secs(0.5)
        .build();

    let outcome = race(CAPITALS_PATH, &config, &mut NullReporter).expect("race should run");
    assert!(outcome.reports > 0, "workers never published");

    let best = outcome.best.expect("at least one tour reported");
    assert_eq!(best.len(), 50, "tour must visit every capital");

    let cities = dataset::parse("capitals.tsp", CAPITALS_TEXT).expect("dataset should parse");
    for city in &cities {
        assert!(best.contains(city.name()), "tour is missing {}", city.name());
    }
}

#[test]
fn probar_global_best_is_monotonic() {
    let config = EvoConfig::builder()
        .seed(7)
        .population_size(40)
        .workers(3)
        .run_duration_secs(0.5)
        .build();

    let mut reporter = RecordingReporter::default();
    let outcome = race(CAPITALS_PATH, &config, &mut reporter).expect("race should run");

    assert_eq!(outcome.improvements as usize, reporter.scores.len());
    for pair in reporter.scores.windows(2) {
        assert!(
            pair[1] < pair[0],
            "reported best must strictly improve: {} -> {}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn probar_race_beats_the_first_report_given_time() {
    // Convergence trend: with a real budget, the final best should be
    // strictly better than the very first tour any worker published.
    let config = EvoConfig::builder()
        .seed(42)
        .population_size(60)
        .workers(2)
        .run_duration_secs(1.0)
        .build();

    let mut reporter = RecordingReporter::default();
    let outcome = race(CAPITALS_PATH, &config, &mut reporter).expect("race should run");

    let first = reporter.scores.first().expect("at least one improvement");
    assert!(
        outcome.best_score < *first,
        "no improvement over the first report: first {first}, final {}",
        outcome.best_score
    );
}

// =============================================================================
// Probar E2E: shutdown
// =============================================================================

#[test]
fn probar_zero_duration_single_worker_shuts_down() {
    // Cancellation fires before (or while) the worker publishes; the
    // coordinator must still join it without deadlock.
    let config = EvoConfig::builder()
        .seed(42)
        .population_size(5)
        .workers(1)
        .run_duration_secs(0.0)
        .build();

    let outcome = race(CAPITALS_PATH, &config, &mut NullReporter).expect("race should run");
    assert_eq!(outcome.workers, 1);
    if outcome.reports == 0 {
        assert!(outcome.best.is_none());
    }
}

#[test]
fn probar_zero_duration_many_workers_shut_down() {
    let config = EvoConfig::builder()
        .seed(42)
        .population_size(5)
        .workers(8)
        .run_duration_secs(0.0)
        .build();

    let outcome = race(CAPITALS_PATH, &config, &mut NullReporter).expect("race should run");
    assert_eq!(outcome.workers, 8);
}

// =============================================================================
// Probar E2E: failure paths
// =============================================================================

#[test]
fn probar_missing_dataset_aborts() {
    let config = EvoConfig::builder().workers(2).run_duration_secs(0.2).build();
    let err = race("/nonexistent/capitals.tsp", &config, &mut NullReporter).unwrap_err();
    assert!(err.is_dataset_error());
}

#[test]
fn probar_malformed_dataset_aborts_with_line_context() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "Olympia 47.0379 -122.9007").expect("write");
    writeln!(file, "Salem 44.9429").expect("write");
    file.flush().expect("flush");

    let config = EvoConfig::builder().workers(2).run_duration_secs(0.2).build();
    let err = race(file.path(), &config, &mut NullReporter).unwrap_err();
    assert!(matches!(
        err,
        EvoError::MalformedRecord { line: 2, found: 2, .. }
    ));
}

// =============================================================================
// Probar E2E: YAML-driven run
// =============================================================================

#[test]
fn probar_yaml_config_drives_a_race() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        "seed: 11\nga:\n  population_size: 30\nrace:\n  workers: 2\n  run_duration_secs: 0.2\n"
    )
    .expect("write");
    file.flush().expect("flush");

    let config = EvoConfig::load(file.path()).expect("config should load");
    assert_eq!(config.seed, 11);
    assert_eq!(config.ga.population_size, 30);

    let outcome = race(CAPITALS_PATH, &config, &mut NullReporter).expect("race should run");
    assert_eq!(outcome.workers, 2);
}

// =============================================================================
// Probar E2E: deterministic small case (the 4-city square)
// =============================================================================

#[test]
fn probar_square_perimeter_score_is_the_sum_of_its_edges() {
    let cities =
        dataset::parse("square", "SW 0.0 0.0\nNW 1.0 0.0\nNE 1.0 1.0\nSE 0.0 1.0").expect("parse");
    let expected: f64 = great_circle(&cities[0], &cities[1])
        + great_circle(&cities[1], &cities[2])
        + great_circle(&cities[2], &cities[3])
        + great_circle(&cities[3], &cities[0]);

    let tour = Tour::new(cities);
    assert!((tour.score() - expected).abs() < 1e-9);
}

#[test]
fn probar_square_race_recovers_the_perimeter() {
    use std::io::Write;

    // Four cities have three distinct closed tours; the perimeter is
    // optimal and a short race finds it essentially immediately.
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "SW 0.0 0.0\nNW 1.0 0.0\nNE 1.0 1.0\nSE 0.0 1.0\n").expect("write");
    file.flush().expect("flush");

    let cities =
        dataset::parse("square", "SW 0.0 0.0\nNW 1.0 0.0\nNE 1.0 1.0\nSE 0.0 1.0").expect("parse");
    let perimeter = Tour::new(cities).score();

    let config = EvoConfig::builder()
        .seed(42)
        .population_size(20)
        .workers(2)
        .run_duration_secs(0.3)
        .build();
    let outcome = race(file.path(), &config, &mut NullReporter).expect("race should run");

    assert!(
        outcome.best_score >= perimeter - 1e-9,
        "no closed tour can beat the perimeter"
    );
    assert!(
        outcome.best_score <= perimeter + 1e-6,
        "a 0.3s race on 4 cities should land on the optimum, got {} vs {}",
        outcome.best_score,
        perimeter
    );
}
