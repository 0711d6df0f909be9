//! Key events, what they do to a running game, and where they come from.

use std::collections::VecDeque;

use crate::error::{Error, Result};
use crate::snake_game::Direction;

/// Keys the game reacts to, plus a catch-all for everything else.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum KeyId {
    Escape,
    Up,
    Down,
    Left,
    Right,
    Other,
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum KeyState {
    Pressed,
    Released,
    Repeat,
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct InputEvent {
    pub key: KeyId,
    pub state: KeyState,
}

impl InputEvent {
    pub fn pressed(key: KeyId) -> Self {
        Self { key, state: KeyState::Pressed }
    }
}

/// Effect of one input event on the game.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Control {
    Quit,
    Turn(Direction),
}

/// Only press transitions count; releases, repeats and unknown keys do nothing.
pub fn control_for(event: InputEvent) -> Option<Control> {
    if event.state != KeyState::Pressed {
        return None;
    }
    match event.key {
        KeyId::Escape => Some(Control::Quit),
        KeyId::Up => Some(Control::Turn(Direction::Up)),
        KeyId::Down => Some(Control::Turn(Direction::Down)),
        KeyId::Left => Some(Control::Turn(Direction::Left)),
        KeyId::Right => Some(Control::Turn(Direction::Right)),
        KeyId::Other => None,
    }
}

/// A source of input, polled once per loop iteration.
pub trait InputPort {
    fn poll_events(&mut self) -> Vec<InputEvent>;
}

/// Replays a fixed per-frame input script. Empty once the script runs out.
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    frames: VecDeque<Vec<InputEvent>>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = Vec<InputEvent>>) -> Self {
        Self { frames: frames.into_iter().collect() }
    }

    /// Parses comma separated frame tokens: `U`, `D`, `L`, `R` press an arrow key,
    /// `Q` presses escape and `.` is a frame without input.
    pub fn parse(script: &str) -> Result<Self> {
        let script = script.trim();
        if script.is_empty() {
            return Ok(Self::default());
        }
        let frames = script
            .split(',')
            .enumerate()
            .map(|(frame, token)| {
                let key = match token.trim() {
                    "." => return Ok(Vec::new()),
                    "U" | "u" => KeyId::Up,
                    "D" | "d" => KeyId::Down,
                    "L" | "l" => KeyId::Left,
                    "R" | "r" => KeyId::Right,
                    "Q" | "q" => KeyId::Escape,
                    other => {
                        return Err(Error::UnknownScriptToken { token: other.to_string(), frame })
                    }
                };
                Ok(vec![InputEvent::pressed(key)])
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(frames))
    }

    /// Frames left to replay.
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputPort for ScriptedInput {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.frames.pop_front().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys_turn() {
        assert_eq!(control_for(InputEvent::pressed(KeyId::Up)), Some(Control::Turn(Direction::Up)));
        assert_eq!(control_for(InputEvent::pressed(KeyId::Down)), Some(Control::Turn(Direction::Down)));
        assert_eq!(control_for(InputEvent::pressed(KeyId::Left)), Some(Control::Turn(Direction::Left)));
        assert_eq!(control_for(InputEvent::pressed(KeyId::Right)), Some(Control::Turn(Direction::Right)));
    }

    #[test]
    fn test_escape_quits() {
        assert_eq!(control_for(InputEvent::pressed(KeyId::Escape)), Some(Control::Quit));
    }

    #[test]
    fn test_only_presses_count() {
        for state in [KeyState::Released, KeyState::Repeat] {
            assert_eq!(control_for(InputEvent { key: KeyId::Escape, state }), None);
            assert_eq!(control_for(InputEvent { key: KeyId::Left, state }), None);
        }
    }

    #[test]
    fn test_unknown_key_is_ignored() {
        assert_eq!(control_for(InputEvent::pressed(KeyId::Other)), None);
    }

    #[test]
    fn test_script_parsing() {
        let mut input = ScriptedInput::parse("R, ., u,Q").unwrap();
        assert_eq!(input.remaining(), 4);
        assert_eq!(input.poll_events(), vec![InputEvent::pressed(KeyId::Right)]);
        assert!(input.poll_events().is_empty());
        assert_eq!(input.poll_events(), vec![InputEvent::pressed(KeyId::Up)]);
        assert_eq!(input.poll_events(), vec![InputEvent::pressed(KeyId::Escape)]);
        assert!(input.poll_events().is_empty());
        assert_eq!(input.remaining(), 0);
    }

    #[test]
    fn test_script_rejects_unknown_tokens() {
        match ScriptedInput::parse("U,.,X") {
            Err(Error::UnknownScriptToken { token, frame }) => {
                assert_eq!(token, "X");
                assert_eq!(frame, 2);
            }
            other => panic!("expected UnknownScriptToken, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_script() {
        assert_eq!(ScriptedInput::parse("  ").unwrap().remaining(), 0);
    }
}
