//! Platform abstraction layer
//!
//! Handles the boundary with the outside world:
//! - Input events (`input`)
//! - Frame pacing (`time`)
//! - The frame loop that ties input, state, audio and rendering together

pub mod input;
pub mod time;

pub use input::{InputSnapshot, InputSource, ScriptedInput};
pub use time::{FrameClock, ManualClock, SleepClock};

use crate::audio::{AudioManager, AudioSink};
use crate::fsm::{AppEvent, Effect, GameStateMachine};
use crate::renderer::{self, RenderSink};
use crate::settings::Settings;

/// Collaborators the frame loop drives
pub struct Frontend<'a, I, R, A: AudioSink, C> {
    pub input: &'a mut I,
    pub render: &'a mut R,
    pub audio: &'a mut AudioManager<A>,
    pub clock: &'a mut C,
}

/// Run frames until quit. Returns the number of frames processed.
///
/// Each frame: sample input, update state, render, then wait for the next
/// tick. Quit is checked first so no state changes after it is seen.
pub fn run<I, R, A, C>(
    machine: &mut GameStateMachine,
    frontend: Frontend<'_, I, R, A, C>,
    settings: &Settings,
) -> u64
where
    I: InputSource,
    R: RenderSink,
    A: AudioSink,
    C: FrameClock,
{
    let Frontend {
        input,
        render,
        audio,
        clock,
    } = frontend;

    render.set_cursor_visible(true);
    let mut frames = 0;

    while machine.is_running() {
        let snapshot = input.poll().unwrap_or_default();
        if snapshot.quit {
            machine.dispatch(AppEvent::Quit);
            break;
        }

        let mut rate = settings.play_tick_hz;
        for effect in machine.frame(&snapshot) {
            match effect {
                Effect::Sound(sound) => audio.play(sound),
                Effect::SlowTick => rate = settings.reset_tick_hz,
                Effect::MenuCooldown => clock.delay(settings.menu_cooldown()),
                Effect::CursorVisible(visible) => render.set_cursor_visible(visible),
            }
        }

        renderer::submit(render, &machine.scene(snapshot.pointer));
        clock.tick(rate);
        frames += 1;
    }

    frames
}
