//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod ai;
pub mod ball;
pub mod collision;
pub mod paddle;
pub mod state;
pub mod tick;

pub use ai::AiPolicy;
pub use ball::Ball;
pub use collision::{Rect, hits_wall, is_out_of_bounds, resolve};
pub use paddle::{ControlPolicy, Paddle, PaddleControls, Side};
pub use state::{GameEvent, MatchMode, MatchState};
pub use tick::{TickInput, tick};
