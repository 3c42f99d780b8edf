//! Per-frame input snapshots

use std::collections::VecDeque;

use glam::Vec2;

use crate::sim::{PaddleControls, TickInput};

/// Everything the game reads from input devices in one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    /// Left paddle up/down
    pub left: PaddleControls,
    /// Right paddle up/down (ignored when the right paddle is automatic)
    pub right: PaddleControls,
    /// Pointer position in play-area coordinates
    pub pointer: Vec2,
    /// Primary pointer button held
    pub pointer_pressed: bool,
    /// Pause key went down this frame
    pub pause_pressed: bool,
    /// Window close or equivalent
    pub quit: bool,
}

impl InputSnapshot {
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            left: self.left,
            right: self.right,
        }
    }
}

/// A device layer that can be polled once per frame.
///
/// `None` means no snapshot was available and is treated as no input.
pub trait InputSource {
    fn poll(&mut self) -> Option<InputSnapshot>;
}

/// Replays a fixed list of snapshots, then requests quit
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<Option<InputSnapshot>>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue one frame
    pub fn push(&mut self, snapshot: InputSnapshot) -> &mut Self {
        self.frames.push_back(Some(snapshot));
        self
    }

    /// Queue `count` copies of a frame
    pub fn repeat(&mut self, snapshot: InputSnapshot, count: usize) -> &mut Self {
        self.frames.extend(std::iter::repeat_n(Some(snapshot), count));
        self
    }

    /// Queue a frame with no snapshot at all
    pub fn dropout(&mut self) -> &mut Self {
        self.frames.push_back(None);
        self
    }

    /// Queue a pointer press at `pos`
    pub fn click(&mut self, pos: Vec2) -> &mut Self {
        self.push(InputSnapshot {
            pointer: pos,
            pointer_pressed: true,
            ..Default::default()
        })
    }

    /// Queue a pause key press
    pub fn pause(&mut self) -> &mut Self {
        self.push(InputSnapshot {
            pause_pressed: true,
            ..Default::default()
        })
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Option<InputSnapshot> {
        match self.frames.pop_front() {
            Some(frame) => frame,
            None => Some(InputSnapshot {
                quit: true,
                ..Default::default()
            }),
        }
    }
}
