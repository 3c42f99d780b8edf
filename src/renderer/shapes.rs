//! Scene composition for matches and menus

use glam::Vec2;

use super::{BG_COLOUR, DrawCommand, OBJ_COLOUR, PAUSE_OVERLAY_ALPHA, SELECT_COLOUR};
use crate::consts::WIDTH;
use crate::fsm::ApplicationState;
use crate::sim::{MatchState, Rect};
use crate::ui::{self, MAIN_MENU, MenuLayout, PAUSE_MENU};

const DIVIDER_WIDTH: f32 = 15.0;
const DIVIDER_SEGMENT: f32 = 20.0;
const DIVIDER_TOP: f32 = 9.0;

/// Dashed center line: every other 20px slot filled, top to bottom
pub fn divider() -> Vec<DrawCommand> {
    let x = (WIDTH - DIVIDER_WIDTH) / 2.0;
    (0..36)
        .step_by(2)
        .map(|i| DrawCommand::FillRect {
            rect: Rect::new(
                x,
                DIVIDER_TOP + i as f32 * DIVIDER_SEGMENT,
                DIVIDER_WIDTH,
                DIVIDER_SEGMENT,
            ),
            color: OBJ_COLOUR,
        })
        .collect()
}

/// Left score pinned top-left, right score right-aligned top-right
pub fn scoreboard(left: u32, right: u32) -> Vec<DrawCommand> {
    let left = left.to_string();
    let right = right.to_string();
    let right_width = ui::label_extent(&right, ui::SCORE_SIZE).x;
    vec![
        DrawCommand::Text {
            text: left,
            pos: Vec2::ZERO,
            size: ui::SCORE_SIZE,
            color: OBJ_COLOUR,
        },
        DrawCommand::Text {
            text: right,
            pos: Vec2::new(WIDTH - right_width, 0.0),
            size: ui::SCORE_SIZE,
            color: OBJ_COLOUR,
        },
    ]
}

/// One frame of active play
pub fn match_scene(state: &MatchState) -> Vec<DrawCommand> {
    let mut commands = vec![DrawCommand::Clear(BG_COLOUR)];
    let (left, right) = state.scores();
    commands.extend(scoreboard(left, right));
    commands.extend(divider());
    for paddle in [&state.left, &state.right] {
        commands.push(DrawCommand::FillRect {
            rect: paddle.hitbox,
            color: OBJ_COLOUR,
        });
    }
    commands.push(DrawCommand::FillCircle {
        center: state.ball.center,
        radius: state.ball.radius,
        color: OBJ_COLOUR,
    });
    commands
}

fn menu_text(layout: &MenuLayout, pointer: Vec2) -> Vec<DrawCommand> {
    let title = layout.title_rect();
    let mut commands = vec![DrawCommand::Text {
        text: layout.title.to_string(),
        pos: Vec2::new(title.x, title.y),
        size: ui::TITLE_SIZE,
        color: OBJ_COLOUR,
    }];
    for (item, rect) in layout.item_rects() {
        let color = if rect.contains(pointer) {
            SELECT_COLOUR
        } else {
            OBJ_COLOUR
        };
        commands.push(DrawCommand::Text {
            text: item.label().to_string(),
            pos: Vec2::new(rect.x, rect.y),
            size: ui::OPTION_SIZE,
            color,
        });
    }
    commands
}

/// Title screen with the mode options
pub fn menu_scene(pointer: Vec2) -> Vec<DrawCommand> {
    let mut commands = vec![DrawCommand::Clear(BG_COLOUR)];
    commands.extend(menu_text(&MAIN_MENU, pointer));
    commands
}

/// Frozen frame, dimmed, with the pause options on top
pub fn pause_scene(snapshot: &[DrawCommand], pointer: Vec2) -> Vec<DrawCommand> {
    let mut commands = snapshot.to_vec();
    commands.push(DrawCommand::Overlay {
        color: BG_COLOUR,
        alpha: PAUSE_OVERLAY_ALPHA,
    });
    commands.extend(menu_text(&PAUSE_MENU, pointer));
    commands
}

/// Draw commands for whatever the application is showing
pub fn compose(state: &ApplicationState, pointer: Vec2) -> Vec<DrawCommand> {
    match state {
        ApplicationState::Menu => menu_scene(pointer),
        ApplicationState::MatchInProgress(game) => match_scene(game),
        ApplicationState::Paused { snapshot, .. } => pause_scene(snapshot, pointer),
        ApplicationState::Exited => Vec::new(),
    }
}
