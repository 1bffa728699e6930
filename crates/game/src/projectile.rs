//! Swept projectiles.
//!
//! A projectile remembers where it was at the start of the tick so the hit
//! test can sweep the full segment it traveled, not just its endpoint.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A fired projectile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub position: Vec3,
    /// Position at the start of the current tick.
    pub last_position: Vec3,
    /// Unit travel direction.
    pub direction: Vec3,
    /// Speed in world units/second.
    pub speed: f32,
    /// Cleared on first hit or range expiry.
    pub alive: bool,
    origin: Vec3,
}

impl Projectile {
    pub fn new(origin: Vec3, direction: Vec3, speed: f32) -> Self {
        Self {
            position: origin,
            last_position: origin,
            direction: direction.normalize_or_zero(),
            speed,
            alive: true,
            origin,
        }
    }

    /// Move forward one tick, recording the swept segment's start.
    pub fn advance(&mut self, dt: f32) {
        self.last_position = self.position;
        self.position += self.direction * self.speed * dt;
    }

    /// Distance flown since firing.
    pub fn traveled(&self) -> f32 {
        (self.position - self.origin).length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_records_the_segment() {
        let mut projectile = Projectile::new(Vec3::ZERO, Vec3::X, 20.0);
        projectile.advance(0.1);
        assert_eq!(projectile.last_position, Vec3::ZERO);
        assert_eq!(projectile.position, Vec3::new(2.0, 0.0, 0.0));

        projectile.advance(0.1);
        assert_eq!(projectile.last_position, Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(projectile.position, Vec3::new(4.0, 0.0, 0.0));
    }

    #[test]
    fn traveled_measures_from_origin() {
        let mut projectile = Projectile::new(Vec3::new(5.0, 1.0, 0.0), Vec3::Z, 10.0);
        for _ in 0..6 {
            projectile.advance(0.1);
        }
        assert!((projectile.traveled() - 6.0).abs() < 1e-4);
    }

    #[test]
    fn direction_is_normalized() {
        let projectile = Projectile::new(Vec3::ZERO, Vec3::new(3.0, 0.0, 4.0), 1.0);
        assert!((projectile.direction.length() - 1.0).abs() < 1e-6);
    }
}
