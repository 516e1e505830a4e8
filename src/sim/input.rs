//! Per-frame input
//!
//! The frame driver translates whatever device it reads into these abstract
//! keys. Discrete events are consumed once per frame; held keys are a polled
//! snapshot used for continuous horizontal movement.

use serde::{Deserialize, Serialize};

/// Abstract game keys (no remapping, the driver decides the physical binding)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Start the game from the menu (Enter)
    Confirm,
    /// Pause / resume / back / quit from menu (Escape)
    Cancel,
    /// Full session reset from pause or game over (R)
    Restart,
    Jump,
    Attack,
    Left,
    Right,
}

impl Key {
    /// Keys whose release clears horizontal motion
    pub fn is_horizontal(self) -> bool {
        matches!(self, Key::Left | Key::Right)
    }
}

/// A discrete input event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Window close / terminate request
    Quit,
    KeyDown(Key),
    KeyUp(Key),
}

/// Keys currently held down
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
}

/// Everything the game consumes from input in a single frame
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameInput {
    pub events: Vec<InputEvent>,
    pub held: HeldKeys,
}

impl FrameInput {
    /// A frame with a single key press and nothing held
    pub fn press(key: Key) -> Self {
        Self {
            events: vec![InputEvent::KeyDown(key)],
            held: HeldKeys::default(),
        }
    }

    /// A frame with only held keys
    pub fn holding(held: HeldKeys) -> Self {
        Self {
            events: Vec::new(),
            held,
        }
    }

    pub fn quit() -> Self {
        Self {
            events: vec![InputEvent::Quit],
            held: HeldKeys::default(),
        }
    }

    pub fn with_event(mut self, event: InputEvent) -> Self {
        self.events.push(event);
        self
    }
}
