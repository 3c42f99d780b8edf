//! Collision detection and scoring
//!
//! Axis-aligned hitboxes for paddles and the ball, plus the per-frame
//! resolution pass: paddle contact, wall bounce and out-of-bounds exit.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::paddle::Side;
use super::state::{GameEvent, MatchState};
use crate::consts::*;

/// An axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Square of side `2 * radius` centered on `center`
    pub fn around(center: Vec2, radius: f32) -> Self {
        Self::new(center.x - radius, center.y - radius, radius * 2.0, radius * 2.0)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// True if the rectangles overlap with positive area (shared edges don't count)
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Point containment, inclusive of the top-left edges only
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }
}

/// Ball touches the top or bottom wall
pub fn hits_wall(ball: &Rect, play_height: f32) -> bool {
    ball.top() <= 0.0 || ball.bottom() >= play_height
}

/// Ball has fully cleared the left or right edge of the play area
pub fn is_out_of_bounds(ball: &Rect, play_width: f32) -> bool {
    ball.left() < -ball.w || ball.right() > play_width + ball.w
}

/// Resolve collisions for one frame.
///
/// Attribution for the rally comes from the ball's direction of travel at the
/// start of the pass, not from which paddle actually touched it last. A ball
/// moving right credits the left side, a ball moving left credits the right.
pub fn resolve(state: &mut MatchState) -> Vec<GameEvent> {
    let mut events = Vec::new();

    let attribution = Side::from_travel(state.ball.vel.x);
    state.last_toucher = attribution;

    let ball_box = state.ball.hitbox();

    // A ball credited to one side can only strike the opposite paddle
    let contact = attribution
        .map(Side::opposite)
        .filter(|side| state.paddle(*side).hitbox.intersects(&ball_box));

    if let Some(side) = contact {
        events.push(GameEvent::PaddleHit(side));
        state.ball.vel.x = -state.ball.vel.x;
        state.ball.accelerate();
        // Only the right paddle escalates, whichever side made contact.
        // Unclear whether this rubber-banding is intended; kept as-is.
        state.right.accelerate();
    }

    if hits_wall(&ball_box, HEIGHT) {
        state.ball.vel.y = -state.ball.vel.y;
        events.push(GameEvent::WallBounce);
    }

    if is_out_of_bounds(&ball_box, WIDTH) {
        state.end_rally(attribution);
        events.push(GameEvent::BallOut {
            scorer: attribution,
        });
    }

    events
}
