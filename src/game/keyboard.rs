//! Keyboard adapter: bevy key presses become [`InputEvent`]s for the session.

use bevy::prelude::*;

use crate::controls::{InputEvent, InputPort, KeyId};
use crate::AppSet;

use super::ActiveSession;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Update, record_input.in_set(AppSet::RecordInput));
}

pub fn key_id(code: KeyCode) -> KeyId {
    match code {
        KeyCode::Escape => KeyId::Escape,
        KeyCode::ArrowUp => KeyId::Up,
        KeyCode::ArrowDown => KeyId::Down,
        KeyCode::ArrowLeft => KeyId::Left,
        KeyCode::ArrowRight => KeyId::Right,
        _ => KeyId::Other,
    }
}

/// Reads this frame's press transitions. Held keys are not reported again.
pub struct KeyboardPort<'a>(pub &'a ButtonInput<KeyCode>);

impl InputPort for KeyboardPort<'_> {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.0
            .get_just_pressed()
            .map(|code| InputEvent::pressed(key_id(*code)))
            .collect()
    }
}

fn record_input(input: Res<ButtonInput<KeyCode>>, mut session: ResMut<ActiveSession>) {
    for event in KeyboardPort(&*input).poll_events() {
        session.handle_event(event);
    }
}
