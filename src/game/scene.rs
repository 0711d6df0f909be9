//! Camera, the board mesh and window resizing.
//!
//! The board is a single mesh rebuilt from the session every frame, one vertex
//! colored quad per occupied cell.

use bevy::{
    prelude::*,
    render::{
        mesh::{Indices, PrimitiveTopology},
        render_asset::RenderAssetUsages,
        view::NoFrustumCulling,
    },
    window::WindowResized,
};
use log::info;

use crate::config::ProjectionConfig;
use crate::render::{aspect_ratio, scene_quads, BoardGeometry};
use crate::AppSet;

use super::ActiveSession;

#[derive(Resource, Clone, Copy, Debug)]
pub struct BoardProjection(pub ProjectionConfig);

#[derive(Component)]
struct Board;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Startup, (spawn_camera, spawn_board));
    app.add_systems(Update, (on_resize, redraw_board).in_set(AppSet::Draw));
}

fn spawn_camera(mut commands: Commands, projection: Res<BoardProjection>) {
    let ProjectionConfig { fov_degrees, near, far } = projection.0;
    commands.spawn((
        Name::new("Camera"),
        Camera3dBundle {
            projection: PerspectiveProjection {
                fov: fov_degrees.to_radians(),
                near,
                far,
                ..default()
            }
            .into(),
            ..default()
        },
    ));
}

fn spawn_board(
    mut commands: Commands,
    session: Res<ActiveSession>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let geometry = BoardGeometry::from_quads(&scene_quads(&session.state));
    info!("board ready with {} quads", geometry.quad_count());
    commands.spawn((
        Name::new("Board"),
        Board,
        PbrBundle {
            mesh: meshes.add(board_mesh(&geometry)),
            material: materials.add(StandardMaterial {
                base_color: Color::WHITE,
                unlit: true,
                cull_mode: None,
                ..default()
            }),
            ..default()
        },
        // The mesh moves with the snake, so its spawn-time bounds go stale.
        NoFrustumCulling,
    ));
}

fn redraw_board(
    session: Res<ActiveSession>,
    boards: Query<&Handle<Mesh>, With<Board>>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    let geometry = BoardGeometry::from_quads(&scene_quads(&session.state));
    for handle in &boards {
        if let Some(mesh) = meshes.get_mut(handle) {
            *mesh = board_mesh(&geometry);
        }
    }
}

fn on_resize(
    mut resized: EventReader<WindowResized>,
    mut cameras: Query<&mut Projection, With<Camera3d>>,
) {
    for event in resized.read() {
        let aspect = aspect_ratio(event.width, event.height);
        for mut projection in &mut cameras {
            if let Projection::Perspective(perspective) = &mut *projection {
                perspective.aspect_ratio = aspect;
            }
        }
    }
}

pub fn board_mesh(geometry: &BoardGeometry) -> Mesh {
    let colors: Vec<[f32; 4]> = geometry
        .colors
        .iter()
        .map(|&[r, g, b]| {
            let c = Color::srgb(r, g, b).to_linear();
            [c.red, c.green, c.blue, c.alpha]
        })
        .collect();
    let normals = vec![[0.0_f32, 0.0, 1.0]; geometry.positions.len()];

    Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, geometry.positions.clone())
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
        .with_inserted_attribute(Mesh::ATTRIBUTE_COLOR, colors)
        .with_inserted_indices(Indices::U32(geometry.indices.clone()))
}
