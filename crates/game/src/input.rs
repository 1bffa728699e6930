//! Player intent for a single frame.
//!
//! The input collaborator reduces whatever devices it reads to this
//! struct; the simulation never sees keys or mice. Fire fields carry the
//! *held* state of each trigger; edge detection (one shot per press)
//! happens inside the simulation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// One frame of player intent.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PlayerInput {
    /// Desired horizontal movement in world space, magnitude up to 1.
    pub move_intent: Vec2,

    /// Horizontal aim direction for both weapons.
    pub aim: Vec2,

    /// Projectile-weapon trigger held.
    pub fire_projectile: bool,

    /// Hitscan-weapon trigger held.
    pub fire_hitscan: bool,
}

impl PlayerInput {
    /// Movement intent clamped to unit length, so diagonal input is never
    /// faster than straight input.
    pub fn clamped_intent(&self) -> Vec2 {
        let magnitude = self.move_intent.length();
        if magnitude > 1.0 {
            self.move_intent / magnitude
        } else {
            self.move_intent
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagonal_intent_is_clamped() {
        let input = PlayerInput {
            move_intent: Vec2::new(1.0, 1.0),
            ..PlayerInput::default()
        };
        assert!((input.clamped_intent().length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn partial_intent_passes_through() {
        let input = PlayerInput {
            move_intent: Vec2::new(0.3, 0.0),
            ..PlayerInput::default()
        };
        assert_eq!(input.clamped_intent(), Vec2::new(0.3, 0.0));
    }
}
