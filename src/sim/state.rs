//! Match state and core simulation types

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::paddle::{Paddle, PaddleControls, Side};

/// Which pairing of paddles is in play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchMode {
    /// Human on the left, scripted opponent on the right
    OnePlayer,
    /// Two humans
    TwoPlayer,
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ball bounced off a paddle
    PaddleHit(Side),
    /// Ball bounced off the top or bottom edge
    WallBounce,
    /// Ball left the play area; rally over
    BallOut { scorer: Option<Side> },
}

/// Everything a match needs between ticks
#[derive(Debug, Clone)]
pub struct MatchState {
    pub mode: MatchMode,
    /// Seed the match RNG was created from
    pub seed: u64,
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    /// Side credited by the current direction of travel
    pub last_toucher: Option<Side>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Completed rallies
    pub rallies: u32,
    rng: Pcg32,
}

impl MatchState {
    /// Fresh match: paddles home, ball centered heading down-right
    pub fn new(mode: MatchMode, seed: u64) -> Self {
        let right = match mode {
            MatchMode::OnePlayer => Paddle::automatic(Side::Right),
            MatchMode::TwoPlayer => Paddle::human(Side::Right),
        };
        Self {
            mode,
            seed,
            left: Paddle::human(Side::Left),
            right,
            ball: Ball::new(),
            last_toucher: None,
            time_ticks: 0,
            rallies: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// (left, right) scores
    pub fn scores(&self) -> (u32, u32) {
        (self.left.score, self.right.score)
    }

    /// Move both paddles one tick, then advance the ball
    pub(crate) fn step_entities(&mut self, left: PaddleControls, right: PaddleControls) {
        self.left.update(left, &self.ball, &mut self.rng);
        self.right.update(right, &self.ball, &mut self.rng);
        self.ball.advance();
    }

    /// Close out a rally: everything back home, then credit `scorer`
    pub fn end_rally(&mut self, scorer: Option<Side>) {
        self.left.reset();
        self.right.reset();
        self.ball.reset(&mut self.rng);
        self.rallies += 1;

        match scorer {
            Some(side) => {
                self.paddle_mut(side).score += 1;
                let (left, right) = self.scores();
                log::debug!("Point to {:?} ({} - {})", side, left, right);
            }
            None => log::warn!("Rally ended with no attributable side, no point awarded"),
        }
    }

    /// Next value from the match RNG, without disturbing it
    #[cfg(test)]
    pub(crate) fn peek_rng(&self) -> u64 {
        use rand::RngCore;
        self.rng.clone().next_u64()
    }
}
