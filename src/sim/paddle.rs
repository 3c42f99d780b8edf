//! Paddles and their control policies

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::ai::AiPolicy;
use super::ball::Ball;
use super::collision::Rect;
use crate::consts::*;

/// Which end of the play area a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Side credited for a ball travelling with horizontal velocity `vel_x`.
    ///
    /// Rightward travel credits the left side and vice versa. A ball with no
    /// horizontal motion is attributed to nobody.
    pub fn from_travel(vel_x: f32) -> Option<Self> {
        if vel_x > 0.0 {
            Some(Side::Left)
        } else if vel_x < 0.0 {
            Some(Side::Right)
        } else {
            None
        }
    }

    /// Sign of horizontal velocity that carries the ball toward this side
    pub fn approach_sign(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }

    /// Home x coordinate of a paddle on this side
    pub fn home_x(self) -> f32 {
        match self {
            Side::Left => 0.0,
            Side::Right => WIDTH - PADDLE_WIDTH,
        }
    }
}

/// Up/down controls for one paddle during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleControls {
    pub up: bool,
    pub down: bool,
}

/// How a paddle decides its per-tick displacement
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPolicy {
    /// Driven by the player's up/down controls
    Human,
    /// Driven by the scripted opponent
    Automatic(AiPolicy),
}

/// A paddle: hitbox, score and control policy
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    pub hitbox: Rect,
    pub score: u32,
    pub side: Side,
    pub control: ControlPolicy,
}

impl Paddle {
    fn with_control(side: Side, control: ControlPolicy) -> Self {
        Self {
            hitbox: Rect::new(side.home_x(), Self::home_y(), PADDLE_WIDTH, PADDLE_HEIGHT),
            score: 0,
            side,
            control,
        }
    }

    pub fn human(side: Side) -> Self {
        Self::with_control(side, ControlPolicy::Human)
    }

    pub fn automatic(side: Side) -> Self {
        Self::with_control(side, ControlPolicy::Automatic(AiPolicy::new()))
    }

    /// Home y coordinate (top edge) that vertically centers the paddle
    pub fn home_y() -> f32 {
        (HEIGHT - PADDLE_HEIGHT) / 2.0
    }

    pub fn is_automatic(&self) -> bool {
        matches!(self.control, ControlPolicy::Automatic(_))
    }

    /// Current base speed of an automatic paddle
    pub fn ai_base_speed(&self) -> Option<f32> {
        match &self.control {
            ControlPolicy::Automatic(ai) => Some(ai.base_speed()),
            ControlPolicy::Human => None,
        }
    }

    /// Move one tick according to the control policy
    pub fn update(&mut self, controls: PaddleControls, ball: &Ball, rng: &mut impl Rng) {
        let dy = match &mut self.control {
            ControlPolicy::Human => human_displacement(&self.hitbox, controls),
            ControlPolicy::Automatic(ai) => ai.displacement(&self.hitbox, self.side, ball, rng),
        };
        self.hitbox.y += dy;
        self.clamp_to_bounds();
    }

    /// Keep the paddle within one paddle height of the play area
    pub fn clamp_to_bounds(&mut self) {
        // Top may rise one height above the area; bottom may sink one below
        let min_y = -self.hitbox.h;
        let max_y = HEIGHT;
        if !self.hitbox.y.is_finite() {
            self.hitbox.y = Self::home_y();
        }
        self.hitbox.y = self.hitbox.y.clamp(min_y, max_y);
    }

    /// Contact hook; only automatic paddles react
    pub fn accelerate(&mut self) {
        if let ControlPolicy::Automatic(ai) = &mut self.control {
            ai.accelerate();
        }
    }

    /// Return to home position. Score is kept.
    pub fn reset(&mut self) {
        self.hitbox.x = self.side.home_x();
        self.hitbox.y = Self::home_y();
    }
}

/// Fixed-step movement. Both controls are checked in turn against the
/// position left by the previous check, so holding both cancels out.
fn human_displacement(hitbox: &Rect, controls: PaddleControls) -> f32 {
    let mut probe = *hitbox;
    if controls.up && probe.top() > -probe.h {
        probe.y -= HUMAN_STEP;
    }
    if controls.down && probe.bottom() < HEIGHT + probe.h {
        probe.y += HUMAN_STEP;
    }
    probe.y - hitbox.y
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(11)
    }

    #[test]
    fn test_home_positions() {
        let left = Paddle::human(Side::Left);
        let right = Paddle::automatic(Side::Right);
        assert_eq!(left.hitbox, Rect::new(0.0, 235.0, 50.0, 250.0));
        assert_eq!(right.hitbox, Rect::new(1230.0, 235.0, 50.0, 250.0));
        assert!(!left.is_automatic());
        assert!(right.is_automatic());
    }

    #[test]
    fn test_human_steps() {
        let ball = Ball::new();
        let mut paddle = Paddle::human(Side::Left);
        paddle.update(PaddleControls { up: true, down: false }, &ball, &mut rng());
        assert_eq!(paddle.hitbox.y, 220.0);
        paddle.update(PaddleControls { up: false, down: true }, &ball, &mut rng());
        paddle.update(PaddleControls { up: false, down: true }, &ball, &mut rng());
        assert_eq!(paddle.hitbox.y, 250.0);
    }

    #[test]
    fn test_human_both_controls_cancel() {
        let ball = Ball::new();
        let mut paddle = Paddle::human(Side::Right);
        paddle.update(PaddleControls { up: true, down: true }, &ball, &mut rng());
        assert_eq!(paddle.hitbox.y, Paddle::home_y());
    }

    #[test]
    fn test_human_overhang_is_limited() {
        let ball = Ball::new();
        let mut paddle = Paddle::human(Side::Left);
        for _ in 0..100 {
            paddle.update(PaddleControls { up: true, down: false }, &ball, &mut rng());
        }
        assert_eq!(paddle.hitbox.y, -PADDLE_HEIGHT);
        for _ in 0..200 {
            paddle.update(PaddleControls { up: false, down: true }, &ball, &mut rng());
        }
        assert_eq!(paddle.hitbox.bottom(), HEIGHT + PADDLE_HEIGHT);
    }

    #[test]
    fn test_reset_keeps_score() {
        let mut paddle = Paddle::human(Side::Right);
        paddle.hitbox.y = -100.0;
        paddle.score = 4;
        paddle.reset();
        assert_eq!(paddle.hitbox.y, Paddle::home_y());
        assert_eq!(paddle.hitbox.x, WIDTH - PADDLE_WIDTH);
        assert_eq!(paddle.score, 4);
    }

    #[test]
    fn test_accelerate_is_noop_for_human() {
        let mut paddle = Paddle::human(Side::Right);
        let before = paddle.clone();
        paddle.accelerate();
        assert_eq!(paddle, before);
        assert_eq!(paddle.ai_base_speed(), None);
    }

    #[test]
    fn test_side_attribution() {
        assert_eq!(Side::from_travel(8.0), Some(Side::Left));
        assert_eq!(Side::from_travel(-0.1), Some(Side::Right));
        assert_eq!(Side::from_travel(0.0), None);
        assert_eq!(Side::Left.opposite(), Side::Right);
    }

    proptest! {
        #[test]
        fn paddle_stays_in_bounds(
            moves in proptest::collection::vec((any::<bool>(), any::<bool>()), 0..200),
            automatic in any::<bool>(),
            ball_y in -200.0f32..900.0,
            ball_vx in -20.0f32..20.0,
        ) {
            let mut rng = rng();
            let mut paddle = if automatic {
                Paddle::automatic(Side::Right)
            } else {
                Paddle::human(Side::Left)
            };
            let mut ball = Ball::new();
            ball.center.y = ball_y;
            ball.vel.x = ball_vx;
            for (up, down) in moves {
                paddle.update(PaddleControls { up, down }, &ball, &mut rng);
                prop_assert!(paddle.hitbox.top() >= -PADDLE_HEIGHT);
                prop_assert!(paddle.hitbox.bottom() <= HEIGHT + PADDLE_HEIGHT);
            }
        }
    }
}
