use bevy::prelude::*;
use log::info;

use crate::AppSet;

use super::ActiveSession;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Update, advance_session.in_set(AppSet::Advance));
}

/// Steps the session once per frame, or ends the app after a quit key.
fn advance_session(mut session: ResMut<ActiveSession>, mut exit: EventWriter<AppExit>) {
    if !session.is_running() {
        info!("leaving after {} frames, {} ticks", session.frames(), session.ticks());
        exit.send(AppExit::Success);
        return;
    }
    session.update();
}
