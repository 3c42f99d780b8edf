//! Paddle Duel - classic two-paddle Pong
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball, paddles, collisions, scoring)
//! - `fsm`: Application state machine (menu, match, pause)
//! - `ui`: Menu layout and pointer hit-testing
//! - `renderer`: Draw command generation for an external render sink
//! - `audio`: Sound cues for an external audio sink
//! - `platform`: Input, frame pacing and the frame loop
//! - `settings`: Runtime configuration

pub mod audio;
pub mod fsm;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use fsm::{AppEvent, ApplicationState, Effect, GameStateMachine};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Play area dimensions
    pub const WIDTH: f32 = 1280.0;
    pub const HEIGHT: f32 = 720.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 50.0;
    pub const PADDLE_HEIGHT: f32 = 250.0;
    /// Distance a human paddle moves per tick while a control is held
    pub const HUMAN_STEP: f32 = 15.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 30.0;
    /// Per-axis speed magnitude at spawn and after every reset
    pub const BALL_BASE_SPEED: f32 = 8.0;
    /// Speed boost when ball hits paddle (multiplicative, unbounded)
    pub const BALL_GROWTH: f32 = 1.03;

    /// Automatic paddle per-tick speed jitter range
    pub const AI_SPEED_MIN: f32 = 7.0;
    pub const AI_SPEED_MAX: f32 = 8.0;
    /// Automatic paddle base speed before any contact
    pub const AI_BASE_SPEED: f32 = 8.0;
    /// Automatic paddle speed boost per contact
    pub const AI_GROWTH: f32 = 1.03;

    /// Tick rate during play and menus
    pub const PLAY_TICK_HZ: u32 = 60;
    /// Tick rate applied right after a rally ends
    pub const RESET_TICK_HZ: u32 = 6;
    /// Delay after leaving a paused match for the menu (ms)
    pub const MENU_COOLDOWN_MS: u64 = 250;
}
