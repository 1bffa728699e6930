//! Hit detection for ranged attacks.
//!
//! Two call shapes share the segment-vs-box core:
//!
//! - [`sweep_segment`] intersects the path a projectile traveled this tick
//!   against the grid's solid volumes and every live body, returning the
//!   single closest hit regardless of kind.
//! - [`instant_hit`] is the hitbox-weapon check: a narrow-cone
//!   proximity-and-direction test against bodies only. It damages the
//!   *first* body in iteration order, not the closest one; that asymmetry
//!   with the projectile path is intentional and pinned by tests.

use dreadhall_world::{GridMap, CELL_CEILING, VOID_FLOOR};
use glam::Vec3;

/// What a swept segment struck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitKind {
    /// Level geometry (wall column, floor slab or void boundary).
    Wall,
    /// A live body, by the caller's index.
    Agent(usize),
}

/// Closest intersection found along a swept segment.
#[derive(Debug, Clone, Copy)]
pub struct SweptHit {
    /// World-space impact point.
    pub point: Vec3,
    /// Distance from the segment start.
    pub distance: f32,
    pub kind: HitKind,
}

/// A live body exposed to hit testing, as an axis-aligned box.
#[derive(Debug, Clone, Copy)]
pub struct HitTarget {
    /// Caller-side identifier reported back in [`HitKind::Agent`].
    pub index: usize,
    /// Body center in world space.
    pub position: Vec3,
    /// Horizontal half-extent.
    pub radius: f32,
    /// Vertical half-extent.
    pub half_height: f32,
}

/// Ray-vs-AABB slab test.
///
/// Returns the entry distance along `dir` (or the exit distance when the
/// ray starts inside), limited to `max_dist`; `None` on a miss.
fn segment_aabb(origin: Vec3, dir: Vec3, max_dist: f32, min: Vec3, max: Vec3) -> Option<f32> {
    let inv_dir = Vec3::new(
        if dir.x.abs() > 1e-6 { 1.0 / dir.x } else { f32::MAX },
        if dir.y.abs() > 1e-6 { 1.0 / dir.y } else { f32::MAX },
        if dir.z.abs() > 1e-6 { 1.0 / dir.z } else { f32::MAX },
    );

    let t1 = (min.x - origin.x) * inv_dir.x;
    let t2 = (max.x - origin.x) * inv_dir.x;
    let t3 = (min.y - origin.y) * inv_dir.y;
    let t4 = (max.y - origin.y) * inv_dir.y;
    let t5 = (min.z - origin.z) * inv_dir.z;
    let t6 = (max.z - origin.z) * inv_dir.z;

    let tmin = t1.min(t2).max(t3.min(t4)).max(t5.min(t6));
    let tmax = t1.max(t2).min(t3.max(t4)).min(t5.max(t6));

    if tmax >= 0.0 && tmin <= tmax && tmin <= max_dist {
        let t = if tmin >= 0.0 { tmin } else { tmax };
        if t >= 0.0 && t <= max_dist {
            return Some(t);
        }
    }
    None
}

/// Solid vertical span of the cell at grid coordinates `(col, row)`:
/// walls and off-grid voids fill the whole column, open cells are solid
/// from the void floor up to their walkable surface.
fn cell_solid_span(grid: &GridMap, col: i64, row: i64) -> (f32, f32) {
    if col < 0 || row < 0 {
        return (VOID_FLOOR, CELL_CEILING);
    }
    match grid.cell(col as usize, row as usize) {
        Some(cell) if cell.is_wall => (VOID_FLOOR, cell.ceiling),
        Some(cell) => (VOID_FLOOR, cell.floor),
        None => (VOID_FLOOR, CELL_CEILING),
    }
}

/// Intersect the segment `start..end` against the grid's solid volumes and
/// the given bodies, returning the single closest hit.
///
/// A zero-length segment performs no test at all.
pub fn sweep_segment(
    grid: &GridMap,
    targets: &[HitTarget],
    start: Vec3,
    end: Vec3,
) -> Option<SweptHit> {
    let travel = end - start;
    let len = travel.length();
    if len <= f32::EPSILON {
        return None;
    }
    let dir = travel / len;

    let mut best: Option<SweptHit> = None;
    let mut consider = |t: f32, kind: HitKind| {
        if best.map_or(true, |hit| t < hit.distance) {
            best = Some(SweptHit {
                point: start + dir * t,
                distance: t,
                kind,
            });
        }
    };

    // Level geometry: every cell column whose XZ footprint the segment's
    // bounding rectangle overlaps, plus a one-cell margin so the void
    // boundary just outside the grid is included.
    let size = grid.cell_size();
    let half = size * 0.5;
    let col_min = ((start.x.min(end.x) / size).round() as i64) - 1;
    let col_max = ((start.x.max(end.x) / size).round() as i64) + 1;
    let row_min = ((start.z.min(end.z) / size).round() as i64) - 1;
    let row_max = ((start.z.max(end.z) / size).round() as i64) + 1;

    for row in row_min..=row_max {
        for col in col_min..=col_max {
            let (bottom, top) = cell_solid_span(grid, col, row);
            let center_x = col as f32 * size;
            let center_z = row as f32 * size;
            let min = Vec3::new(center_x - half, bottom, center_z - half);
            let max = Vec3::new(center_x + half, top, center_z + half);
            if let Some(t) = segment_aabb(start, dir, len, min, max) {
                consider(t, HitKind::Wall);
            }
        }
    }

    // Bodies.
    for target in targets {
        let extent = Vec3::new(target.radius, target.half_height, target.radius);
        let min = target.position - extent;
        let max = target.position + extent;
        if let Some(t) = segment_aabb(start, dir, len, min, max) {
            consider(t, HitKind::Agent(target.index));
        }
    }

    best
}

/// Narrow-cone instant hit check.
///
/// A body is a valid target when it lies within `max_range` of `origin`
/// and the angle between `aim` and the to-body direction is below
/// `max_angle` (radians). Returns the first valid target in iteration
/// order, or `None`.
pub fn instant_hit(
    origin: Vec3,
    aim: Vec3,
    targets: &[HitTarget],
    max_range: f32,
    max_angle: f32,
) -> Option<usize> {
    let aim = aim.normalize_or_zero();
    if aim == Vec3::ZERO {
        return None;
    }

    for target in targets {
        let to_target = target.position - origin;
        let distance = to_target.length();
        if distance <= f32::EPSILON || distance > max_range {
            continue;
        }
        let angle = (aim.dot(to_target / distance)).clamp(-1.0, 1.0).acos();
        if angle < max_angle {
            return Some(target.index);
        }
    }
    None
}
