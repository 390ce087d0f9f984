/// Keyboard handling: held-key tracking and one-shot commands.
///
/// Instead of acting on each key event individually we keep a map from key
/// to the frame of its last press/repeat event.  Each frame the game asks
/// which keys are still "fresh" and applies all their effects together, so
/// jump, move and shoot can be held at the same time.
///
/// Works on two classes of terminal:
/// * **Keyboard-enhancement capable** (kitty protocol): proper `Press` /
///   `Repeat` / `Release` events, so keys are dropped on release.
/// * **Classic terminals**: only `Press` events (OS key-repeat shows up as
///   repeated presses).  Keys expire after `HOLD_WINDOW` frames of silence.
use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A key counts as held if its last press/repeat arrived within this many
/// frames (≈133 ms at 60 FPS, shorter than the OS repeat interval).
pub const HOLD_WINDOW: u64 = 8;

/// Held-key state sampled once per tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Controls {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub shoot: bool,
}

/// Discrete key presses that drive screen transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Confirm,
    Restart,
    Back,
    Quit,
}

const LEFT_KEYS: [KeyCode; 3] = [KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')];
const RIGHT_KEYS: [KeyCode; 3] = [KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')];
const JUMP_KEYS: [KeyCode; 4] = [
    KeyCode::Char(' '),
    KeyCode::Up,
    KeyCode::Char('w'),
    KeyCode::Char('W'),
];
const SHOOT_KEYS: [KeyCode; 2] = [KeyCode::Char('x'), KeyCode::Char('X')];

#[derive(Debug, Default)]
pub struct KeyTracker {
    last_seen: HashMap<KeyCode, u64>,
}

impl KeyTracker {
    pub fn new() -> Self {
        KeyTracker::default()
    }

    /// Record a key event seen during `frame`.  Returns the command it
    /// triggers, if it is a fresh press of a command key.
    pub fn record(&mut self, event: &KeyEvent, frame: u64) -> Option<Command> {
        match event.kind {
            KeyEventKind::Press => {
                self.last_seen.insert(event.code, frame);
                command_for(event)
            }
            KeyEventKind::Repeat => {
                self.last_seen.insert(event.code, frame);
                None
            }
            KeyEventKind::Release => {
                self.last_seen.remove(&event.code);
                None
            }
        }
    }

    /// Any of `keys` pressed or repeated no more than `HOLD_WINDOW` frames
    /// before `frame`.
    fn any_held(&self, keys: &[KeyCode], frame: u64) -> bool {
        keys.iter()
            .filter_map(|k| self.last_seen.get(k))
            .any(|&seen| frame.saturating_sub(seen) <= HOLD_WINDOW)
    }

    pub fn controls(&self, frame: u64) -> Controls {
        Controls {
            left: self.any_held(&LEFT_KEYS, frame),
            right: self.any_held(&RIGHT_KEYS, frame),
            jump: self.any_held(&JUMP_KEYS, frame),
            shoot: self.any_held(&SHOOT_KEYS, frame),
        }
    }

    /// Forget every held key, e.g. when the screen changes.
    pub fn clear(&mut self) {
        self.last_seen.clear();
    }
}

fn command_for(event: &KeyEvent) -> Option<Command> {
    match event.code {
        KeyCode::Enter => Some(Command::Confirm),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Restart),
        KeyCode::Esc => Some(Command::Back),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::Quit),
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Command::Quit)
        }
        _ => None,
    }
}
