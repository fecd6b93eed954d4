//! **gridpath-core**: geometry shared by the gridpath crates.
//!
//! This crate provides the grid coordinate type used as a search key by the
//! pathfinding engine ([`Point`]) and the half-open rectangle used to describe
//! map extents ([`Range`]).

pub mod geom;

pub use geom::{ParsePointError, Point, Range, RangeIter};
