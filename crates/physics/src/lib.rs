//! Dreadhall Physics - Movement and Hit Detection
//!
//! Resolves desired displacements against the collision grid (per-axis wall
//! blocking, step-up, gravity, floor snap) and performs the two hit tests
//! the weapons need: an instant narrow-cone check and a swept-segment test
//! that always reports the single closest surface or body.
//!
//! Everything here is synchronous, allocation-light and deterministic; the
//! grid is only ever read.

pub mod hitscan;
pub mod mover;

pub use hitscan::{instant_hit, sweep_segment, HitKind, HitTarget, SweptHit};
pub use mover::{resolve_move, MoveConfig, MoveResult};
