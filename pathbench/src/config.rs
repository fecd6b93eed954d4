//! Configuration loading for pathbench.
//!
//! Settings come from an optional TOML file and are then overridden by
//! command-line flags:
//!
//! ```text
//! pathbench [MAP.txt | CONFIG.toml] [--runs N] [--origin X,Y]
//!           [--destination X,Y] [--cave WxH] [--seed N] [--no-color]
//! ```
//!
//! Anything left unset (endpoints, run count) is asked for on stdin.

use std::path::{Path, PathBuf};

use gridpath_core::Point;
use serde::Deserialize;

use crate::error::ConfigError;

/// Benchmark settings.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct BenchConfig {
    /// Text map to load (default: `map.txt`). Ignored when `cave` is set.
    pub map_path: PathBuf,

    /// Times each algorithm is run. Prompted for when unset.
    pub runs: Option<usize>,

    /// Origin as `[x, y]`. Prompted for when unset.
    pub origin: Option<[i32; 2]>,

    /// Destination as `[x, y]`. Prompted for when unset.
    pub destination: Option<[i32; 2]>,

    /// Colour the rendered maps when stdout is a terminal (default: true).
    pub color: bool,

    /// Generate a cave instead of loading `map_path`.
    pub cave: Option<CaveConfig>,
}

/// Generated-map settings.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct CaveConfig {
    pub width: i32,
    pub height: i32,

    #[serde(default)]
    pub seed: u64,

    /// Probability that a tile starts as wall (default: 0.45)
    #[serde(default = "default_wall_fraction")]
    pub wall_fraction: f64,
}

fn default_wall_fraction() -> f64 {
    0.45
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            map_path: PathBuf::from("map.txt"),
            runs: None,
            origin: None,
            destination: None,
            color: true,
            cave: None,
        }
    }
}

impl BenchConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&text)?)
    }

    /// Build the configuration from command-line arguments (program name
    /// already stripped).
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter().peekable();

        let mut config = match args.next_if(|a| !a.starts_with("--")) {
            Some(first) => {
                let first = PathBuf::from(first);
                if first.extension().is_some_and(|ext| ext == "toml") {
                    Self::load(&first)?
                } else {
                    Self {
                        map_path: first,
                        ..Self::default()
                    }
                }
            }
            None => Self::default(),
        };

        while let Some(flag) = args.next() {
            match flag.as_str() {
                "--no-color" => config.color = false,
                "--runs" => {
                    let value = value_for(&flag, args.next())?;
                    config.runs = Some(parse_value(&flag, &value)?);
                }
                "--origin" => {
                    let value = value_for(&flag, args.next())?;
                    config.origin = Some(parse_pair(&flag, &value)?);
                }
                "--destination" => {
                    let value = value_for(&flag, args.next())?;
                    config.destination = Some(parse_pair(&flag, &value)?);
                }
                "--cave" => {
                    let value = value_for(&flag, args.next())?;
                    let (w, h) = value.split_once('x').ok_or_else(|| invalid(&flag, &value))?;
                    let seed = config.cave.as_ref().map_or(0, |c| c.seed);
                    config.cave = Some(CaveConfig {
                        width: parse_value(&flag, w)?,
                        height: parse_value(&flag, h)?,
                        seed,
                        wall_fraction: default_wall_fraction(),
                    });
                }
                "--seed" => {
                    let value = value_for(&flag, args.next())?;
                    let seed = parse_value(&flag, &value)?;
                    match config.cave.as_mut() {
                        Some(cave) => cave.seed = seed,
                        None => return Err(invalid(&flag, "--seed requires --cave first")),
                    }
                }
                _ => return Err(ConfigError::UnknownFlag(flag)),
            }
        }

        Ok(config)
    }

    pub fn origin(&self) -> Option<Point> {
        self.origin.map(Point::from)
    }

    pub fn destination(&self) -> Option<Point> {
        self.destination.map(Point::from)
    }
}

fn value_for(flag: &str, value: Option<String>) -> Result<String, ConfigError> {
    value.ok_or_else(|| ConfigError::MissingValue(flag.to_string()))
}

fn invalid(flag: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        flag: flag.to_string(),
        value: value.to_string(),
    }
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| invalid(flag, value))
}

fn parse_pair(flag: &str, value: &str) -> Result<[i32; 2], ConfigError> {
    let p: Point = value.parse().map_err(|_| invalid(flag, value))?;
    Ok([p.x, p.y])
}
