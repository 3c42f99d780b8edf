//! The ball

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;

/// A ball entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub center: Vec2,
    pub radius: f32,
    /// Per-tick displacement
    pub vel: Vec2,
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

impl Ball {
    /// A centered ball heading down-right at base speed
    pub fn new() -> Self {
        Self {
            center: Self::spawn_point(),
            radius: BALL_RADIUS,
            vel: Vec2::splat(BALL_BASE_SPEED),
        }
    }

    /// Midpoint of the play area
    pub fn spawn_point() -> Vec2 {
        Vec2::new(WIDTH / 2.0, HEIGHT / 2.0)
    }

    /// Square hitbox enclosing the ball
    pub fn hitbox(&self) -> Rect {
        Rect::around(self.center, self.radius)
    }

    /// Advance one tick. No sweep: fast balls may tunnel through paddles.
    pub fn advance(&mut self) {
        self.center += self.vel;
    }

    /// Paddle contact boost; both axes scale together with no upper bound
    pub fn accelerate(&mut self) {
        self.vel *= BALL_GROWTH;
    }

    /// Recenter and relaunch on a 45 degree diagonal at base speed
    pub fn reset(&mut self, rng: &mut impl Rng) {
        self.center = Self::spawn_point();
        let dir = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        self.vel = Vec2::splat(BALL_BASE_SPEED * dir);
    }

    /// Per-axis speed magnitude (both axes always agree)
    pub fn speed(&self) -> f32 {
        self.vel.x.abs()
    }
}
