//! Timing runs of each search and checking that the results agree.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use gridpath_core::Point;
use gridpath_map::TileMap;
use gridpath_paths::{Algorithm, Path, SearchStats, is_path_valid};
use log::{debug, info, warn};

use crate::error::{BenchError, Result};
use crate::render::{Overlay, format_path, write_map};

/// Results of running one algorithm `runs` times.
#[derive(Debug, Clone)]
pub struct AlgorithmReport {
    pub algorithm: Algorithm,
    /// The path from the first run.
    pub path: Option<Path>,
    pub runs: usize,
    pub total: Duration,
    /// Later runs whose path differed from the first.
    pub mismatches: usize,
    /// Counters from the first run.
    pub stats: SearchStats,
}

impl AlgorithmReport {
    /// Mean wall time per run, in microseconds.
    pub fn average_us(&self) -> f64 {
        if self.runs == 0 {
            return 0.0;
        }
        self.total.as_secs_f64() * 1e6 / self.runs as f64
    }
}

/// Results for every algorithm, in [`Algorithm::ALL`] order.
#[derive(Debug, Clone)]
pub struct BenchReport {
    pub origin: Point,
    pub destination: Point,
    pub reports: Vec<AlgorithmReport>,
    /// All algorithms found a path of the same length, or none did.
    pub consistent: bool,
}

/// Run one algorithm `runs` times and validate its first path.
pub fn bench_algorithm(
    algorithm: Algorithm,
    map: &TileMap,
    origin: Point,
    destination: Point,
    runs: usize,
) -> Result<AlgorithmReport> {
    if runs == 0 {
        return Err(BenchError::NoRuns);
    }

    let mut first: Option<(Option<Path>, SearchStats)> = None;
    let mut total = Duration::ZERO;
    let mut mismatches = 0;

    for run in 0..runs {
        let start = Instant::now();
        let outcome = algorithm.run_with_stats(origin, destination, map);
        total += start.elapsed();

        if let Some((path, _)) = &first {
            if *path != outcome.path {
                warn!("{algorithm} path mismatch on run {run}");
                mismatches += 1;
            }
        } else {
            first = Some((outcome.path, outcome.stats));
        }
    }

    let (path, stats) = first.ok_or(BenchError::NoRuns)?;
    let valid = path
        .as_deref()
        .is_none_or(|p| is_path_valid(p, |q| map.is_walkable(q)));
    if !valid {
        return Err(BenchError::InvalidPath {
            algorithm: algorithm.name(),
        });
    }
    debug!(
        "{algorithm}: {} runs in {:?}, expanded {} pushed {} stale {}",
        runs, total, stats.expanded, stats.pushed, stats.stale
    );

    Ok(AlgorithmReport {
        algorithm,
        path,
        runs,
        total,
        mismatches,
        stats,
    })
}

/// Benchmark every algorithm between `origin` and `destination`.
pub fn run_benchmarks(
    map: &TileMap,
    origin: Point,
    destination: Point,
    runs: usize,
) -> Result<BenchReport> {
    let mut reports = Vec::with_capacity(Algorithm::ALL.len());
    for algorithm in Algorithm::ALL {
        info!("benchmarking {algorithm} algorithm");
        reports.push(bench_algorithm(algorithm, map, origin, destination, runs)?);
    }

    let lengths: Vec<Option<usize>> = reports
        .iter()
        .map(|r| r.path.as_ref().map(Vec::len))
        .collect();
    let consistent = lengths.windows(2).all(|w| w[0] == w[1]);
    if !consistent {
        warn!("path lengths differ between algorithms: {lengths:?}");
    }

    Ok(BenchReport {
        origin,
        destination,
        reports,
        consistent,
    })
}

/// Print one algorithm's results, including the map with its path.
pub fn write_algorithm_report<W: Write>(
    out: &mut W,
    map: &TileMap,
    origin: Point,
    destination: Point,
    report: &AlgorithmReport,
    color: bool,
) -> io::Result<()> {
    writeln!(out, "benchmarking {} algorithm", report.algorithm)?;
    if report.mismatches > 0 {
        writeln!(
            out,
            "{} path mismatch ({} of {} runs)",
            report.algorithm, report.mismatches, report.runs
        )?;
    }
    match &report.path {
        Some(path) => {
            writeln!(out, "path found: {}", format_path(path))?;
            writeln!(out, "path length: {}", path.len())?;
            let overlay = Overlay::targets(origin, destination).with_path(path);
            write_map(out, map, &overlay, color)?;
        }
        None => writeln!(out, "no path found")?,
    }
    writeln!(out, "average time: {:.3} us", report.average_us())?;
    writeln!(out)
}

/// Print every algorithm's results and the consistency verdict.
pub fn write_report<W: Write>(
    out: &mut W,
    map: &TileMap,
    report: &BenchReport,
    color: bool,
) -> io::Result<()> {
    for r in &report.reports {
        write_algorithm_report(out, map, report.origin, report.destination, r, color)?;
    }
    if report.consistent {
        writeln!(out, "all algorithms agree on path length")
    } else {
        writeln!(out, "path lengths differ between algorithms")
    }
}
