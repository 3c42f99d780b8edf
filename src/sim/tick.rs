//! Fixed timestep simulation tick
//!
//! One tick: paddles move, the ball advances, collisions and scoring resolve.

use super::collision;
use super::paddle::PaddleControls;
use super::state::{GameEvent, MatchState};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: PaddleControls,
    pub right: PaddleControls,
}

/// Advance the match by one tick
pub fn tick(state: &mut MatchState, input: &TickInput) -> Vec<GameEvent> {
    state.time_ticks += 1;
    state.step_entities(input.left, input.right);
    collision::resolve(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::paddle::Side;
    use crate::sim::state::MatchMode;
    use glam::Vec2;

    #[test]
    fn test_tick_moves_ball_without_scoring() {
        let mut state = MatchState::new(MatchMode::TwoPlayer, 1);
        let start = state.ball.center;

        let events = tick(&mut state, &TickInput::default());

        assert!(events.is_empty());
        assert_eq!(state.ball.center, start + Vec2::new(8.0, 8.0));
        assert_eq!(state.scores(), (0, 0));
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_tick_applies_controls() {
        let mut state = MatchState::new(MatchMode::TwoPlayer, 1);
        let input = TickInput {
            left: PaddleControls { up: true, down: false },
            right: PaddleControls { up: false, down: true },
        };
        tick(&mut state, &input);
        assert_eq!(state.left.hitbox.y, 220.0);
        assert_eq!(state.right.hitbox.y, 250.0);
    }

    #[test]
    fn test_rightward_exit_scores_left_and_resets() {
        let mut state = MatchState::new(MatchMode::TwoPlayer, 1);
        state.ball.center = Vec2::new(WIDTH + 2.0 * BALL_RADIUS + 25.0, 200.0);
        state.ball.vel = Vec2::new(8.0, 8.0);
        state.left.hitbox.y = 10.0;

        let events = tick(&mut state, &TickInput::default());

        assert_eq!(
            events,
            vec![GameEvent::BallOut {
                scorer: Some(Side::Left)
            }]
        );
        assert_eq!(state.scores(), (1, 0));
        assert_eq!(state.ball.center, Vec2::new(WIDTH / 2.0, HEIGHT / 2.0));
        assert_eq!(state.ball.vel.x.abs(), BALL_BASE_SPEED);
        assert_eq!(state.left.hitbox.y, 235.0);
        assert_eq!(state.right.hitbox.y, 235.0);
    }

    #[test]
    fn test_rally_against_automatic_opponent_eventually_scores() {
        let mut state = MatchState::new(MatchMode::OnePlayer, 2024);
        let mut points = 0;
        for _ in 0..10_000 {
            for event in tick(&mut state, &TickInput::default()) {
                if let GameEvent::BallOut { scorer } = event {
                    assert!(scorer.is_some());
                    points += 1;
                }
            }
            let (l, r) = state.scores();
            assert_eq!(l + r, points);
        }
        assert!(points > 0);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = MatchState::new(MatchMode::OnePlayer, 99999);
        let mut state2 = MatchState::new(MatchMode::OnePlayer, 99999);

        let inputs = [
            TickInput {
                left: PaddleControls { up: true, down: false },
                ..Default::default()
            },
            TickInput::default(),
            TickInput {
                left: PaddleControls { up: false, down: true },
                ..Default::default()
            },
        ];

        for _ in 0..500 {
            for input in &inputs {
                let e1 = tick(&mut state1, input);
                let e2 = tick(&mut state2, input);
                assert_eq!(e1, e2);
            }
        }

        assert_eq!(state1.ball, state2.ball);
        assert_eq!(state1.left, state2.left);
        assert_eq!(state1.right, state2.right);
        assert_eq!(state1.scores(), state2.scores());
    }
}
