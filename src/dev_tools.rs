//! Development tools for dev builds: an FPS overlay, handy for comparing the
//! render rate with the snake's step rate.

use bevy::{dev_tools::fps_overlay::FpsOverlayPlugin, prelude::*};

pub(super) fn plugin(app: &mut App) {
    app.add_plugins(FpsOverlayPlugin::default());
}
