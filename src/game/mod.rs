//! Bevy front end: keyboard in, stepping, board mesh out.

use bevy::prelude::*;

use crate::session::Session;

pub mod keyboard;
pub mod scene;
pub mod tick;

/// The session driven by the app.
#[derive(Resource, Deref, DerefMut)]
pub struct ActiveSession(pub Session);

pub(super) fn plugin(app: &mut App) {
    app.add_plugins((
        keyboard::plugin,
        tick::plugin,
        scene::plugin,
    ));
}
