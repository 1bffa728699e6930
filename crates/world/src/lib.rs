//! Dreadhall World - Level Grid Model
//!
//! This crate owns the static spatial model of a level: a rectangular grid
//! of cells parsed from integer map codes, each cell carrying a wall flag,
//! a floor height, a ceiling height and an optional item marker.
//!
//! The grid is built once at level start and is read-only afterwards. Every
//! spatial query is total: out-of-grid coordinates resolve to a "void"
//! sentinel (solid for walls, `VOID_FLOOR` for heights) so callers never
//! need to handle a missing cell.

pub mod cell;
pub mod geometry;
pub mod grid;

pub use cell::{Cell, Spawn, SpawnKind, CELL_CEILING, VOID_FLOOR};
pub use geometry::WallPanel;
pub use grid::{GridMap, MapError};
