//! Runtime settings
//!
//! Parsed from JSON; every missing field falls back to its default.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::{MENU_COOLDOWN_MS, PLAY_TICK_HZ, RESET_TICK_HZ};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base seed; each new match derives its own seed from it
    pub seed: u64,

    // === Pacing ===
    /// Ticks per second during play and menus
    pub play_tick_hz: u32,
    /// Tick rate for the frame right after a rally ends
    pub reset_tick_hz: u32,
    /// Pause after leaving a paused match for the menu
    pub menu_cooldown_ms: u64,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
    /// Play a cue when the ball leaves the play area
    pub ball_out_cue: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: 0,

            play_tick_hz: PLAY_TICK_HZ,
            reset_tick_hz: RESET_TICK_HZ,
            menu_cooldown_ms: MENU_COOLDOWN_MS,

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            // Off by default: the classic game never played it
            ball_out_cue: false,
        }
    }
}

impl Settings {
    /// Parse settings from JSON and sanitize the values
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        Ok(settings.sanitized())
    }

    /// Clamp volumes to [0, 1] and tick rates to at least 1 Hz
    pub fn sanitized(mut self) -> Self {
        self.master_volume = clamp_unit(self.master_volume);
        self.sfx_volume = clamp_unit(self.sfx_volume);
        self.play_tick_hz = self.play_tick_hz.max(1);
        self.reset_tick_hz = self.reset_tick_hz.max(1);
        self
    }

    pub fn menu_cooldown(&self) -> Duration {
        Duration::from_millis(self.menu_cooldown_ms)
    }
}

fn clamp_unit(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}
