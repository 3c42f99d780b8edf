//! Paddle Duel headless runner
//!
//! Drives the real frame loop with scripted input: picks a mode from the
//! menu, lets the match play out, optionally pauses once, then quits and
//! prints the score.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use glam::Vec2;

use paddle_duel::audio::{AudioManager, LogAudio};
use paddle_duel::platform::{self, Frontend, InputSnapshot, ManualClock, ScriptedInput, SleepClock};
use paddle_duel::renderer::{DrawCommand, RenderSink};
use paddle_duel::ui::{MAIN_MENU, MenuItem, PAUSE_MENU};
use paddle_duel::{GameStateMachine, Settings};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// Human vs scripted opponent
    One,
    /// Two humans
    Two,
}

#[derive(Parser, Debug)]
#[command(name = "paddle-duel", about = "Run a headless Pong match")]
struct Args {
    /// JSON settings file
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Override the settings seed
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, value_enum, default_value = "one")]
    mode: Mode,
    /// Match frames to play before quitting
    #[arg(long, default_value_t = 600)]
    ticks: usize,
    /// Pause (and resume on the next frame) after this many match frames
    #[arg(long)]
    pause_at: Option<usize>,
    /// Don't sleep between frames
    #[arg(long)]
    fast: bool,
}

/// Counts draw commands instead of drawing them
#[derive(Debug, Default)]
struct CountingRenderer {
    commands: u64,
    frames: u64,
    cursor_visible: bool,
}

impl RenderSink for CountingRenderer {
    fn draw(&mut self, _command: &DrawCommand) {
        self.commands += 1;
    }

    fn present(&mut self) {
        self.frames += 1;
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        self.cursor_visible = visible;
    }
}

fn option_center(item: MenuItem) -> Option<Vec2> {
    [MAIN_MENU, PAUSE_MENU]
        .iter()
        .flat_map(|layout| layout.item_rects())
        .find(|(i, _)| *i == item)
        .map(|(_, rect)| rect.center())
}

fn script(args: &Args) -> Result<ScriptedInput> {
    let item = match args.mode {
        Mode::One => MenuItem::OnePlayer,
        Mode::Two => MenuItem::TwoPlayer,
    };
    let pos = option_center(item).context("mode option missing from menu")?;

    let mut input = ScriptedInput::new();
    input.click(pos);
    match args.pause_at {
        Some(at) if at < args.ticks => {
            input
                .repeat(InputSnapshot::default(), at)
                .pause()
                .pause()
                .repeat(InputSnapshot::default(), args.ticks - at);
        }
        _ => {
            input.repeat(InputSnapshot::default(), args.ticks);
        }
    }
    Ok(input)
}

/// Settings from an optional JSON document, with CLI overrides on top
fn merge_settings(json: Option<&str>, seed: Option<u64>) -> Result<Settings> {
    let mut settings = match json {
        Some(json) => Settings::from_json(json).context("parsing settings")?,
        None => Settings::default(),
    };
    if let Some(seed) = seed {
        settings.seed = seed;
    }
    Ok(settings)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    log::info!("Paddle Duel (headless) starting...");

    let json = match &args.settings {
        Some(path) => Some(
            std::fs::read_to_string(path)
                .with_context(|| format!("reading settings {}", path.display()))?,
        ),
        None => None,
    };
    let settings = merge_settings(json.as_deref(), args.seed)?;

    let mut machine = GameStateMachine::new(&settings);
    let mut input = script(&args)?;
    let mut render = CountingRenderer::default();
    let mut audio = AudioManager::new(LogAudio, &settings);

    let frames = if args.fast {
        let mut clock = ManualClock::new();
        let frontend = Frontend {
            input: &mut input,
            render: &mut render,
            audio: &mut audio,
            clock: &mut clock,
        };
        let frames = platform::run(&mut machine, frontend, &settings);
        log::info!("Simulated {:.1}s of play", clock.elapsed().as_secs_f64());
        frames
    } else {
        let mut clock = SleepClock::new();
        let frontend = Frontend {
            input: &mut input,
            render: &mut render,
            audio: &mut audio,
            clock: &mut clock,
        };
        platform::run(&mut machine, frontend, &settings)
    };

    log::info!(
        "{} frames ({} presented), {} draw commands, cursor visible: {}",
        frames,
        render.frames,
        render.commands,
        render.cursor_visible
    );

    match machine.last_match() {
        Some(game) => {
            let (left, right) = game.scores();
            println!("Final score: {} - {} after {} rallies", left, right, game.rallies);
        }
        None => println!("No match was played"),
    }

    Ok(())
}
