//! Application state machine
//!
//! Owns the menu / match / pause lifecycle. Discrete transitions are pure
//! functions of (state, event); side effects the driver must carry out are
//! returned as [`Effect`]s.

use glam::Vec2;

use crate::audio::SoundEffect;
use crate::platform::InputSnapshot;
use crate::renderer::{self, DrawCommand};
use crate::settings::Settings;
use crate::sim::{GameEvent, MatchMode, MatchState, Side, tick};
use crate::ui::{MAIN_MENU, MenuItem, PAUSE_MENU};

/// Top-level application state
#[derive(Debug, Clone)]
pub enum ApplicationState {
    /// Title screen
    Menu,
    /// A match is being played
    MatchInProgress(Box<MatchState>),
    /// A match is frozen behind the pause menu
    Paused {
        /// Last frame drawn before pausing
        snapshot: Vec<DrawCommand>,
        game: Box<MatchState>,
    },
    /// Quit was requested; the frame loop stops
    Exited,
}

impl ApplicationState {
    /// Match being played or paused, if any
    pub fn game(&self) -> Option<&MatchState> {
        match self {
            ApplicationState::MatchInProgress(game) | ApplicationState::Paused { game, .. } => {
                Some(&**game)
            }
            ApplicationState::Menu | ApplicationState::Exited => None,
        }
    }

    pub fn is_paused(&self) -> bool {
        matches!(self, ApplicationState::Paused { .. })
    }

    /// Apply a discrete event.
    ///
    /// `next_seed` seeds the match created when a mode is selected from the
    /// menu; it is ignored otherwise.
    pub fn on_event(self, event: AppEvent, next_seed: u64) -> (ApplicationState, Vec<Effect>) {
        use ApplicationState::*;

        match (self, event) {
            (Exited, _) => (Exited, Vec::new()),
            (_, AppEvent::Quit) => (Exited, Vec::new()),

            (Menu, AppEvent::Select(MenuItem::OnePlayer)) => {
                start_match(MatchMode::OnePlayer, next_seed)
            }
            (Menu, AppEvent::Select(MenuItem::TwoPlayer)) => {
                start_match(MatchMode::TwoPlayer, next_seed)
            }

            (MatchInProgress(game), AppEvent::PauseToggle) => {
                let snapshot = renderer::match_scene(&game);
                (
                    Paused { snapshot, game },
                    vec![Effect::CursorVisible(true)],
                )
            }

            (Paused { game, .. }, AppEvent::PauseToggle | AppEvent::Select(MenuItem::Continue)) => {
                (MatchInProgress(game), vec![Effect::CursorVisible(false)])
            }
            (Paused { .. }, AppEvent::Select(MenuItem::ReturnToMenu)) => {
                (Menu, vec![Effect::MenuCooldown])
            }

            (state, _) => (state, Vec::new()),
        }
    }
}

fn start_match(mode: MatchMode, seed: u64) -> (ApplicationState, Vec<Effect>) {
    let game = MatchState::new(mode, seed);
    (
        ApplicationState::MatchInProgress(Box::new(game)),
        vec![Effect::CursorVisible(false)],
    )
}

/// Discrete input that can change the application state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// A menu option was clicked
    Select(MenuItem),
    /// The pause key was pressed
    PauseToggle,
    /// The window was closed
    Quit,
}

/// Work for the frame loop driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Sound(SoundEffect),
    /// Run this frame at the post-rally tick rate
    SlowTick,
    /// Sleep for the menu cooldown before the next frame
    MenuCooldown,
    CursorVisible(bool),
}

/// The application: current state plus match seeding
#[derive(Debug)]
pub struct GameStateMachine {
    state: ApplicationState,
    base_seed: u64,
    matches_started: u64,
    ball_out_cue: bool,
    /// Match that was on screen when quit arrived
    final_match: Option<MatchState>,
}

impl GameStateMachine {
    pub fn new(settings: &Settings) -> Self {
        Self {
            state: ApplicationState::Menu,
            base_seed: settings.seed,
            matches_started: 0,
            ball_out_cue: settings.ball_out_cue,
            final_match: None,
        }
    }

    pub fn state(&self) -> &ApplicationState {
        &self.state
    }

    /// Current match, or the one abandoned by quitting
    pub fn last_match(&self) -> Option<&MatchState> {
        self.state.game().or(self.final_match.as_ref())
    }

    pub fn is_running(&self) -> bool {
        !matches!(self.state, ApplicationState::Exited)
    }

    /// Apply a discrete event to the current state
    pub fn dispatch(&mut self, event: AppEvent) -> Vec<Effect> {
        let next_seed = self.base_seed.wrapping_add(self.matches_started);
        let previous = std::mem::replace(&mut self.state, ApplicationState::Exited);
        let was_menu = matches!(previous, ApplicationState::Menu);
        if event == AppEvent::Quit {
            if let Some(game) = previous.game() {
                self.final_match = Some(game.clone());
            }
        }
        let (state, effects) = previous.on_event(event, next_seed);
        self.state = state;

        match &self.state {
            ApplicationState::MatchInProgress(game) if was_menu => {
                self.matches_started += 1;
                log::info!("Starting {:?} match (seed {})", game.mode, game.seed);
            }
            ApplicationState::MatchInProgress(_)
                if matches!(event, AppEvent::PauseToggle | AppEvent::Select(MenuItem::Continue)) =>
            {
                log::info!("Resumed");
            }
            ApplicationState::Paused { .. } if event == AppEvent::PauseToggle => {
                log::info!("Paused");
            }
            ApplicationState::Menu if event == AppEvent::Select(MenuItem::ReturnToMenu) => {
                log::info!("Match abandoned, back to menu");
            }
            ApplicationState::Exited if event == AppEvent::Quit => log::info!("Quit requested"),
            _ => {}
        }

        effects
    }

    /// Run one frame of input against the current state
    pub fn frame(&mut self, input: &InputSnapshot) -> Vec<Effect> {
        if input.quit {
            return self.dispatch(AppEvent::Quit);
        }

        // The pause key takes the whole frame; the match does not advance
        if input.pause_pressed && self.state.game().is_some() {
            return self.dispatch(AppEvent::PauseToggle);
        }

        let layout = match &mut self.state {
            ApplicationState::Menu => MAIN_MENU,
            ApplicationState::Paused { .. } => PAUSE_MENU,
            ApplicationState::MatchInProgress(game) => {
                let events = tick(game, &input.tick_input());
                return self.effects_for(&events);
            }
            ApplicationState::Exited => return Vec::new(),
        };

        match pointer_selection(input, layout.hit(input.pointer)) {
            Some(item) => self.dispatch(AppEvent::Select(item)),
            None => Vec::new(),
        }
    }

    /// Draw commands for the current state
    pub fn scene(&self, pointer: Vec2) -> Vec<DrawCommand> {
        renderer::compose(&self.state, pointer)
    }

    fn effects_for(&self, events: &[GameEvent]) -> Vec<Effect> {
        let mut effects = Vec::new();
        for event in events {
            match event {
                GameEvent::PaddleHit(Side::Left) => effects.push(Effect::Sound(SoundEffect::LeftHit)),
                GameEvent::PaddleHit(Side::Right) => {
                    effects.push(Effect::Sound(SoundEffect::RightHit))
                }
                GameEvent::BallOut { .. } => {
                    if self.ball_out_cue {
                        effects.push(Effect::Sound(SoundEffect::BallOut));
                    }
                    effects.push(Effect::SlowTick);
                }
                GameEvent::WallBounce => {}
            }
        }
        effects
    }
}

/// Options fire while the primary button is held over them
fn pointer_selection(input: &InputSnapshot, hovered: Option<MenuItem>) -> Option<MenuItem> {
    if input.pointer_pressed { hovered } else { None }
}
