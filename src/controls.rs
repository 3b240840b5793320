use geng::Key;

use crate::prelude::*;

/// Keyboard layout of one fighter.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    pub left: Key,
    pub right: Key,
    pub jump: Key,
    pub attack: Key,
    pub second_attack: Option<Key>,
}

impl KeyBindings {
    pub fn player() -> Self {
        Self {
            left: Key::A,
            right: Key::D,
            jump: Key::W,
            attack: Key::Space,
            second_attack: None,
        }
    }

    pub fn enemy() -> Self {
        Self {
            left: Key::ArrowLeft,
            right: Key::ArrowRight,
            jump: Key::ArrowUp,
            attack: Key::ArrowDown,
            second_attack: Some(Key::ShiftRight),
        }
    }
}

/// Collects keyboard events between frames and hands them out as snapshots.
pub struct Controls {
    bindings: [KeyBindings; 2],
    state: [FighterInput; 2],
}

impl Controls {
    pub fn new() -> Self {
        Self {
            bindings: [KeyBindings::player(), KeyBindings::enemy()],
            state: Default::default(),
        }
    }

    /// `dead` tells which fighters no longer accept key presses.
    pub fn handle_event(&mut self, event: &geng::Event, dead: [bool; 2]) {
        match event {
            geng::Event::KeyPress { key } => {
                for ((bindings, state), dead) in
                    self.bindings.iter().zip(&mut self.state).zip(dead)
                {
                    if !dead {
                        press(bindings, state, *key);
                    }
                }
            }
            geng::Event::KeyRelease { key } => {
                for (bindings, state) in self.bindings.iter().zip(&mut self.state) {
                    if *key == bindings.left {
                        state.left = false;
                    } else if *key == bindings.right {
                        state.right = false;
                    }
                }
            }
            _ => {}
        }
    }

    /// The input for the next frame. One-shot presses are consumed.
    pub fn snapshot(&mut self) -> InputSnapshot {
        let snapshot = InputSnapshot {
            fighters: self.state,
        };
        for state in &mut self.state {
            state.jump = false;
            state.attack = None;
        }
        snapshot
    }

    pub fn reset(&mut self) {
        self.state = Default::default();
    }
}

fn press(bindings: &KeyBindings, state: &mut FighterInput, key: Key) {
    if key == bindings.left {
        state.left = true;
        state.last_direction = Some(Direction::Left);
    } else if key == bindings.right {
        state.right = true;
        state.last_direction = Some(Direction::Right);
    } else if key == bindings.jump {
        state.jump = true;
    } else if key == bindings.attack {
        state.attack = Some(VariantName::Attack1);
    } else if Some(key) == bindings.second_attack {
        state.attack = Some(VariantName::Attack2);
    }
}
