//! Reading the benchmark inputs, from configuration or interactively.

use std::io::{BufRead, Write};

use gridpath_core::Point;
use gridpath_map::TileMap;
use log::warn;

use crate::config::BenchConfig;
use crate::error::{BenchError, Result};

/// Whether `p` can be used as a search endpoint on `map`.
pub fn validate_point(map: &TileMap, p: Point) -> bool {
    map.has_tile(p) && map.is_walkable(p)
}

/// Print `prompt` and read one line. `what` names the value in errors.
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    what: &'static str,
) -> Result<String> {
    write!(output, "{prompt}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(BenchError::EndOfInput(what));
    }
    Ok(line)
}

/// Read an `x y` pair, asking again until the line parses.
pub fn read_point<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    which: &'static str,
) -> Result<Point> {
    let prompt = format!("Enter the x and y coordinates of the {which} point: ");
    loop {
        let line = read_line(input, output, &prompt, which)?;
        match line.parse::<Point>() {
            Ok(p) => return Ok(p),
            Err(e) => {
                warn!("{e}");
                writeln!(output, "Expected two integers, e.g. \"3 4\"")?;
            }
        }
    }
}

/// Read a positive run count, asking again until the line parses.
pub fn read_runs<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<usize> {
    loop {
        let line = read_line(
            input,
            output,
            "Enter the number of times to run the pathfinding algorithms: ",
            "the run count",
        )?;
        match line.trim().parse::<usize>() {
            Ok(0) => return Err(BenchError::NoRuns),
            Ok(n) => return Ok(n),
            Err(_) => writeln!(output, "Expected a positive integer")?,
        }
    }
}

/// Origin and destination from `config`, or read from `input` when unset.
///
/// Both must exist on `map`, be walkable and differ.
pub fn resolve_endpoints<R: BufRead, W: Write>(
    config: &BenchConfig,
    map: &TileMap,
    input: &mut R,
    output: &mut W,
) -> Result<(Point, Point)> {
    let origin = match config.origin() {
        Some(p) => p,
        None => read_point(input, output, "origin")?,
    };
    if !validate_point(map, origin) {
        return Err(BenchError::InvalidPoint {
            which: "origin",
            point: origin,
        });
    }

    let destination = match config.destination() {
        Some(p) => p,
        None => read_point(input, output, "destination")?,
    };
    if !validate_point(map, destination) {
        return Err(BenchError::InvalidPoint {
            which: "destination",
            point: destination,
        });
    }

    if origin == destination {
        return Err(BenchError::SamePoints);
    }
    Ok((origin, destination))
}

/// Run count from `config`, or read from `input` when unset.
pub fn resolve_runs<R: BufRead, W: Write>(
    config: &BenchConfig,
    input: &mut R,
    output: &mut W,
) -> Result<usize> {
    match config.runs {
        Some(0) => Err(BenchError::NoRuns),
        Some(n) => Ok(n),
        None => read_runs(input, output),
    }
}
