use crate::error::{Error, Result};
use crate::snake_game::{Direction, GridPoint, Snake};

#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Snake".to_string(),
            width: 480.0,
            height: 480.0,
            vsync: true,
        }
    }
}

/// Perspective used to look at the board.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionConfig {
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 45.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub projection: ProjectionConfig,
    /// Render frames per simulation step.
    pub tick_rate: u32,
    /// Tail first, head last.
    pub initial_snake: Vec<GridPoint>,
    pub initial_food: Vec<GridPoint>,
    pub initial_direction: Direction,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            projection: ProjectionConfig::default(),
            tick_rate: 6,
            initial_snake: [(1, 2), (2, 2), (2, 3), (2, 4), (3, 4), (4, 4)]
                .map(GridPoint::from)
                .to_vec(),
            initial_food: [(3, 3), (7, 3), (3, 5), (6, 3)].map(GridPoint::from).to_vec(),
            initial_direction: Direction::Up,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<()> {
        if self.tick_rate == 0 {
            return Err(Error::ZeroTickRate);
        }
        Snake::new(self.initial_snake.iter().copied())?;
        let ProjectionConfig { near, far, .. } = self.projection;
        if !(near > 0.0 && far > near) {
            return Err(Error::InvalidProjection { near, far });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.window.title, "Snake");
        assert_eq!((config.window.width, config.window.height), (480.0, 480.0));
        assert_eq!(config.tick_rate, 6);
        assert_eq!(config.initial_snake.len(), 6);
        assert_eq!(config.initial_food.len(), 4);
        assert_eq!(config.initial_direction, Direction::Up);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = GameConfig { tick_rate: 0, ..Default::default() };
        assert!(matches!(config.validate(), Err(Error::ZeroTickRate)));

        let config = GameConfig { initial_snake: Vec::new(), ..Default::default() };
        assert!(matches!(config.validate(), Err(Error::EmptySnake)));

        let mut config = GameConfig::default();
        config.projection.far = config.projection.near;
        assert!(matches!(config.validate(), Err(Error::InvalidProjection { .. })));

        let mut config = GameConfig::default();
        config.projection.near = 0.0;
        assert!(matches!(config.validate(), Err(Error::InvalidProjection { .. })));
    }
}
