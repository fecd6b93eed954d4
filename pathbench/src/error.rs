//! Error types for pathbench.

use std::path::PathBuf;

use gridpath_core::Point;
use gridpath_map::MapError;
use thiserror::Error;

/// Errors raised while building a [`BenchConfig`](crate::BenchConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{0} expects a value")]
    MissingValue(String),

    #[error("invalid value {value:?} for {flag}")]
    InvalidValue { flag: String, value: String },

    #[error("unknown option {0}")]
    UnknownFlag(String),
}

/// Pathbench error type.
#[derive(Error, Debug)]
pub enum BenchError {
    #[error(transparent)]
    Map(#[from] MapError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid {which} point {point}")]
    InvalidPoint { which: &'static str, point: Point },

    #[error("Origin and destination points cannot be the same")]
    SamePoints,

    #[error("run count must be at least 1")]
    NoRuns,

    #[error("input ended before {0} was read")]
    EndOfInput(&'static str),

    #[error("{algorithm} returned an invalid path")]
    InvalidPath { algorithm: &'static str },
}

impl BenchError {
    /// Whether the error rejects an endpoint the user gave, rather than
    /// reporting a failure of the benchmark itself.
    pub fn is_rejected_input(&self) -> bool {
        matches!(self, Self::InvalidPoint { .. } | Self::SamePoints)
    }
}

pub type Result<T> = std::result::Result<T, BenchError>;
