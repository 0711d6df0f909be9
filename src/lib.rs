#[cfg(feature = "dev")]
mod dev_tools;
pub mod cmdline;
pub mod config;
pub mod controls;
pub mod error;
pub mod game;
pub mod render;
pub mod session;
pub mod snake_game;

use bevy::{
    prelude::*,
    window::{PresentMode, WindowResolution},
};

use config::{GameConfig, ProjectionConfig, WindowConfig};
use game::scene::BoardProjection;

pub struct AppPlugin {
    window: WindowConfig,
    projection: ProjectionConfig,
}

impl AppPlugin {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            window: config.window.clone(),
            projection: config.projection,
        }
    }
}

impl Plugin for AppPlugin {
    fn build(&self, app: &mut App) {
        // Order new `AppSet` variants by adding them here:
        app.configure_sets(
            Update,
            (AppSet::RecordInput, AppSet::Advance, AppSet::Draw).chain(),
        );

        app.insert_resource(ClearColor(Color::BLACK));
        app.insert_resource(BoardProjection(self.projection));

        // Add Bevy plugins.
        app.add_plugins(
            DefaultPlugins.set(WindowPlugin {
                primary_window: Window {
                    title: self.window.title.clone(),
                    resolution: WindowResolution::new(self.window.width, self.window.height),
                    present_mode: if self.window.vsync {
                        PresentMode::AutoVsync
                    } else {
                        PresentMode::AutoNoVsync
                    },
                    ..default()
                }
                .into(),
                ..default()
            }),
        );

        // Add other plugins.
        app.add_plugins(game::plugin);

        // Enable dev tools for dev builds.
        #[cfg(feature = "dev")]
        app.add_plugins(dev_tools::plugin);
    }
}

/// High-level groupings of systems for the app in the `Update` schedule.
/// When adding a new variant, make sure to order it in the `configure_sets`
/// call above.
#[derive(SystemSet, Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum AppSet {
    /// Apply key presses to the session.
    RecordInput,
    /// Count the frame and step the snake when the divider fires.
    Advance,
    /// Rebuild the board mesh from the current state.
    Draw,
}
