//! Pathbench: time A* against Dijkstra on a text map and check that they
//! agree.
//!
//! The binary in `main.rs` wires these modules together; they are a library
//! so the pieces can be tested without a terminal.

pub mod bench;
pub mod config;
pub mod error;
pub mod prompt;
pub mod render;

pub use bench::{AlgorithmReport, BenchReport, run_benchmarks};
pub use config::{BenchConfig, CaveConfig};
pub use error::{BenchError, ConfigError, Result};
