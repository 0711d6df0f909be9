//! Turns a [`GameState`] into colored quads and plain vertex buffers.
//!
//! Every occupied cell becomes one quad on a uniform grid in front of the camera:
//! a cell at `(x, y)` covers world `0.05 * (x - 5 .. x - 4)` horizontally (same for
//! `y`) at depth `-1`.

use crate::snake_game::{GameState, GridPoint};

/// World units per grid cell.
pub const CELL_SCALE: f32 = 0.05;
/// Grid offset that puts cell `(5, 5)` at the origin.
pub const GRID_OFFSET: f32 = 5.0;
/// Depth of the board plane.
pub const BOARD_DEPTH: f32 = -1.0;
/// Cells per side of the board centered on the camera, `0..BOARD_CELLS`.
pub const BOARD_CELLS: i32 = 10;

pub type Rgb = [f32; 3];

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum CellKind {
    Food,
    /// Segment index counted from the tail.
    Snake(usize),
}

/// One quad. Corners run top-left, top-right, bottom-right, bottom-left in cell units.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Quad {
    pub cell: GridPoint,
    pub kind: CellKind,
    pub corners: [[f32; 2]; 4],
    /// Color of the top and the bottom edge.
    pub shades: [Rgb; 2],
}

impl Quad {
    pub fn food(cell: GridPoint) -> Quad {
        let (fx, fy) = cell_fraction(cell);
        Quad {
            cell,
            kind: CellKind::Food,
            corners: [[0.25, 0.75], [0.75, 0.75], [0.75, 0.25], [0.25, 0.25]],
            shades: [shade([0.5, fx, fy]), shade([0.3, fx - 0.2, fy - 0.2])],
        }
    }

    pub fn snake(cell: GridPoint, segment: usize) -> Quad {
        let (fx, fy) = cell_fraction(cell);
        Quad {
            cell,
            kind: CellKind::Snake(segment),
            corners: [[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]],
            shades: [shade([fy, fx, 0.5]), shade([fy - 0.2, fx - 0.2, 0.3])],
        }
    }

    /// World position of each corner.
    pub fn world_corners(&self) -> [[f32; 3]; 4] {
        self.corners.map(|[cx, cy]| to_world(self.cell, cx, cy))
    }

    /// Color of each corner; the top two share the first shade.
    pub fn corner_colors(&self) -> [Rgb; 4] {
        let [top, bottom] = self.shades;
        [top, top, bottom, bottom]
    }
}

fn cell_fraction(cell: GridPoint) -> (f32, f32) {
    (cell.x as f32 / 10.0, cell.y as f32 / 10.0)
}

fn shade(rgb: Rgb) -> Rgb {
    rgb.map(|c| c.clamp(0.0, 1.0))
}

pub fn to_world(cell: GridPoint, cx: f32, cy: f32) -> [f32; 3] {
    [
        CELL_SCALE * (cell.x as f32 + cx - GRID_OFFSET),
        CELL_SCALE * (cell.y as f32 + cy - GRID_OFFSET),
        BOARD_DEPTH,
    ]
}

/// Food first in sorted order, then the snake from tail to head.
pub fn scene_quads(state: &GameState) -> Vec<Quad> {
    let mut food: Vec<GridPoint> = state.food.iter().copied().collect();
    food.sort();
    let mut quads: Vec<Quad> = food.into_iter().map(Quad::food).collect();
    quads.extend(
        state
            .snake
            .segments()
            .enumerate()
            .map(|(segment, cell)| Quad::snake(*cell, segment)),
    );
    quads
}

/// Triangle-list buffers for a batch of quads.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BoardGeometry {
    pub positions: Vec<[f32; 3]>,
    pub colors: Vec<Rgb>,
    pub indices: Vec<u32>,
}

impl BoardGeometry {
    pub fn from_quads(quads: &[Quad]) -> BoardGeometry {
        let mut geometry = BoardGeometry {
            positions: Vec::with_capacity(quads.len() * 4),
            colors: Vec::with_capacity(quads.len() * 4),
            indices: Vec::with_capacity(quads.len() * 6),
        };
        for quad in quads {
            let base = geometry.positions.len() as u32;
            geometry.positions.extend(quad.world_corners());
            geometry.colors.extend(quad.corner_colors());
            // Counter-clockwise when seen from the camera.
            geometry.indices.extend([0, 2, 1, 0, 3, 2].map(|i| base + i));
        }
        geometry
    }

    pub fn quad_count(&self) -> usize {
        self.positions.len() / 4
    }
}

/// Width over height, treating a zero height as one pixel.
pub fn aspect_ratio(width: f32, height: f32) -> f32 {
    let height = if height <= 0.0 { 1.0 } else { height };
    width / height
}
