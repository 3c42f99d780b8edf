//! Rendering contract
//!
//! The simulation never draws. It produces [`DrawCommand`]s that an external
//! [`RenderSink`] (window, terminal, test recorder) turns into pixels.

pub mod shapes;

use glam::Vec2;

use crate::sim::Rect;

pub use shapes::{compose, divider, match_scene, menu_scene, pause_scene, scoreboard};

/// RGB color
pub type Color = [u8; 3];

pub const BG_COLOUR: Color = [0, 0, 0];
pub const OBJ_COLOUR: Color = [255, 255, 255];
/// Menu option under the pointer
pub const SELECT_COLOUR: Color = [225, 225, 225];

/// Opacity of the layer drawn over a frozen frame while paused
pub const PAUSE_OVERLAY_ALPHA: u8 = 128;

/// A single draw primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole play area
    Clear(Color),
    /// Fill the whole play area with a translucent color
    Overlay { color: Color, alpha: u8 },
    FillRect { rect: Rect, color: Color },
    FillCircle { center: Vec2, radius: f32, color: Color },
    /// Text with its top-left corner at `pos`
    Text {
        text: String,
        pos: Vec2,
        size: f32,
        color: Color,
    },
}

/// Consumer of draw commands; performs no game logic
pub trait RenderSink {
    fn draw(&mut self, command: &DrawCommand);

    /// Called once all commands for a frame were drawn
    fn present(&mut self) {}

    fn set_cursor_visible(&mut self, _visible: bool) {}
}

/// Draw a full frame and present it
pub fn submit<S: RenderSink + ?Sized>(sink: &mut S, commands: &[DrawCommand]) {
    for command in commands {
        sink.draw(command);
    }
    sink.present();
}
