//! Scripted opponent
//!
//! Chases the ball while it approaches, drifts back to center while it
//! recedes. Speed jitters every tick and grows with every contact.

use rand::Rng;

use super::ball::Ball;
use super::collision::Rect;
use super::paddle::{Paddle, Side};
use crate::consts::*;

/// Control state for an automatic paddle
#[derive(Debug, Clone, PartialEq)]
pub struct AiPolicy {
    /// Compounds by `AI_GROWTH` on every contact, never reset within a match
    base_speed: f32,
    /// Speed used for the most recent decision
    current_speed: f32,
}

impl Default for AiPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl AiPolicy {
    pub fn new() -> Self {
        Self {
            base_speed: AI_BASE_SPEED,
            current_speed: AI_BASE_SPEED,
        }
    }

    pub fn base_speed(&self) -> f32 {
        self.base_speed
    }

    pub fn current_speed(&self) -> f32 {
        self.current_speed
    }

    /// Contact boost
    pub fn accelerate(&mut self) {
        self.base_speed *= AI_GROWTH;
    }

    /// Resample the per-tick speed from the jitter range, scaled by growth so far
    fn resample(&mut self, rng: &mut impl Rng) -> f32 {
        let scale = self.base_speed / AI_BASE_SPEED;
        self.current_speed = rng.random_range(AI_SPEED_MIN..=AI_SPEED_MAX) * scale;
        self.current_speed
    }

    /// Vertical displacement for this tick
    pub fn displacement(
        &mut self,
        hitbox: &Rect,
        side: Side,
        ball: &Ball,
        rng: &mut impl Rng,
    ) -> f32 {
        let speed = self.resample(rng);
        let ball_box = ball.hitbox();
        let travel = ball.vel.x * side.approach_sign();

        if travel > 0.0 {
            // Chase: no correction once past alignment
            if hitbox.top() < ball_box.top() {
                speed
            } else if hitbox.bottom() > ball_box.bottom() {
                -speed
            } else {
                0.0
            }
        } else if travel < 0.0 {
            // Both checks run in sequence against the updated position
            let home = Paddle::home_y();
            let mut y = hitbox.y;
            if y < home {
                y += speed;
            }
            if y > home {
                y -= speed;
            }
            y - hitbox.y
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn paddle_box(y: f32) -> Rect {
        Rect::new(WIDTH - PADDLE_WIDTH, y, PADDLE_WIDTH, PADDLE_HEIGHT)
    }

    fn ball_at(y: f32, vel_x: f32) -> Ball {
        Ball {
            center: Vec2::new(WIDTH / 2.0, y),
            radius: BALL_RADIUS,
            vel: Vec2::new(vel_x, 8.0),
        }
    }

    #[test]
    fn test_jitter_stays_in_range() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut ai = AiPolicy::new();
        let ball = ball_at(HEIGHT / 2.0, 8.0);
        for _ in 0..500 {
            ai.displacement(&paddle_box(Paddle::home_y()), Side::Right, &ball, &mut rng);
            assert!((AI_SPEED_MIN..=AI_SPEED_MAX).contains(&ai.current_speed()));
        }
    }

    #[test]
    fn test_chases_approaching_ball() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut ai = AiPolicy::new();

        // Ball below: paddle top above ball top, move down
        let dy = ai.displacement(&paddle_box(0.0), Side::Right, &ball_at(600.0, 8.0), &mut rng);
        assert!(dy >= AI_SPEED_MIN);

        // Ball above: move up
        let dy = ai.displacement(&paddle_box(400.0), Side::Right, &ball_at(100.0, 8.0), &mut rng);
        assert!(dy <= -AI_SPEED_MIN);
    }

    #[test]
    fn test_left_side_chases_leftward_ball() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut ai = AiPolicy::new();
        let dy = ai.displacement(&paddle_box(0.0), Side::Left, &ball_at(600.0, -8.0), &mut rng);
        assert!(dy > 0.0);
    }

    #[test]
    fn test_drifts_home_when_ball_recedes() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut ai = AiPolicy::new();
        let receding = ball_at(100.0, -8.0);

        let dy = ai.displacement(&paddle_box(0.0), Side::Right, &receding, &mut rng);
        assert!(dy > 0.0);

        let dy = ai.displacement(&paddle_box(470.0), Side::Right, &receding, &mut rng);
        assert!(dy < 0.0);

        // Within one step above home: the down step overshoots and the up step undoes it
        let dy = ai.displacement(&paddle_box(Paddle::home_y() - 5.0), Side::Right, &receding, &mut rng);
        assert!(dy.abs() < 1e-3);

        let dy = ai.displacement(&paddle_box(Paddle::home_y()), Side::Right, &receding, &mut rng);
        assert_eq!(dy, 0.0);
    }

    #[test]
    fn test_acceleration_compounds() {
        let mut ai = AiPolicy::new();
        for _ in 0..3 {
            ai.accelerate();
        }
        assert!((ai.base_speed() - 8.0 * 1.03f32.powi(3)).abs() < 1e-4);
        assert!((ai.base_speed() - 8.742).abs() < 1e-2);

        let mut rng = Pcg32::seed_from_u64(5);
        let ball = ball_at(HEIGHT / 2.0, 8.0);
        ai.displacement(&paddle_box(0.0), Side::Right, &ball, &mut rng);
        let scale = 1.03f32.powi(3);
        assert!(ai.current_speed() >= AI_SPEED_MIN * scale - 1e-4);
        assert!(ai.current_speed() <= AI_SPEED_MAX * scale + 1e-4);
    }
}
