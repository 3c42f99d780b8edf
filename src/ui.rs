//! Menu layout and pointer hit-testing
//!
//! Labels use a monospace metric (every glyph is `size` wide and tall), so
//! option bounds can be computed without a font backend.

use glam::Vec2;

use crate::consts::WIDTH;
use crate::sim::Rect;

/// Title text size
pub const TITLE_SIZE: f32 = 78.0;
/// Menu option text size
pub const OPTION_SIZE: f32 = 28.0;
/// Score text size
pub const SCORE_SIZE: f32 = 36.0;

/// Vertical placement of menu text
pub const TITLE_Y: f32 = 250.0;
pub const FIRST_OPTION_Y: f32 = 500.0;
pub const SECOND_OPTION_Y: f32 = 600.0;

/// A selectable menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    OnePlayer,
    TwoPlayer,
    ReturnToMenu,
    Continue,
}

impl MenuItem {
    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::OnePlayer => "1 Player",
            MenuItem::TwoPlayer => "2 Player",
            MenuItem::ReturnToMenu => "Return To Menu",
            MenuItem::Continue => "Continue",
        }
    }
}

/// A title with two stacked options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuLayout {
    pub title: &'static str,
    pub items: [MenuItem; 2],
}

pub const MAIN_MENU: MenuLayout = MenuLayout {
    title: "PONG",
    items: [MenuItem::OnePlayer, MenuItem::TwoPlayer],
};

pub const PAUSE_MENU: MenuLayout = MenuLayout {
    title: "PAUSED",
    items: [MenuItem::ReturnToMenu, MenuItem::Continue],
};

/// Width and height of a label at `size`
pub fn label_extent(text: &str, size: f32) -> Vec2 {
    Vec2::new(text.chars().count() as f32 * size, size)
}

/// Bounds of a label horizontally centered in the play area at `y`
pub fn centered_label(text: &str, size: f32, y: f32) -> Rect {
    let extent = label_extent(text, size);
    Rect::new((WIDTH - extent.x) / 2.0, y, extent.x, extent.y)
}

impl MenuLayout {
    pub fn title_rect(&self) -> Rect {
        centered_label(self.title, TITLE_SIZE, TITLE_Y)
    }

    /// Each item with its bounds, top to bottom
    pub fn item_rects(&self) -> [(MenuItem, Rect); 2] {
        let [first, second] = self.items;
        [
            (first, centered_label(first.label(), OPTION_SIZE, FIRST_OPTION_Y)),
            (second, centered_label(second.label(), OPTION_SIZE, SECOND_OPTION_Y)),
        ]
    }

    /// Item under the pointer, if any
    pub fn hit(&self, pointer: Vec2) -> Option<MenuItem> {
        self.item_rects()
            .into_iter()
            .find(|(_, rect)| rect.contains(pointer))
            .map(|(item, _)| item)
    }
}
