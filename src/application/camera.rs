use macroquad::prelude::{Vec2, vec2};

use crate::domain::{CENTER, Position};

/// Half the visible world height, in tiles
pub const VIEW_RADIUS: f32 = 10.0;

/// Camera maps world units (one tile = 1.0, y up) onto the screen
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub at: Vec2,
    pub radius: Vec2,
}

impl Camera {
    /// Camera centred on the board for a screen with the given aspect ratio
    pub fn new(aspect: f32) -> Self {
        Self {
            at: Vec2::ZERO,
            radius: vec2(VIEW_RADIUS * aspect, VIEW_RADIUS),
        }
    }

    /// Keep the vertical radius and widen to the current screen
    pub fn fit(&mut self, screen: Vec2) {
        if screen.y > 0.0 {
            self.radius.x = self.radius.y * screen.x / screen.y;
        }
    }

    /// World position of a tile's centre; the board centre sits at the origin
    pub fn tile_center(pos: Position) -> Vec2 {
        vec2(
            pos.x() as f32 - CENTER.x() as f32,
            pos.y() as f32 - CENTER.y() as f32,
        )
    }

    /// Convert world coordinates to screen pixels
    pub fn world_to_screen(&self, world: Vec2, screen: Vec2) -> Vec2 {
        let clip = (world - self.at) / self.radius;
        vec2((clip.x + 1.0) * 0.5 * screen.x, (1.0 - clip.y) * 0.5 * screen.y)
    }

    /// Size of a world-space extent in pixels
    pub fn extent_to_screen(&self, extent: Vec2, screen: Vec2) -> Vec2 {
        extent / self.radius * 0.5 * screen
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Vec2 = Vec2::new(960.0, 720.0);

    #[test]
    fn test_origin_maps_to_screen_center() {
        let camera = Camera::new(SCREEN.x / SCREEN.y);
        assert_eq!(camera.world_to_screen(Vec2::ZERO, SCREEN), vec2(480.0, 360.0));
    }

    #[test]
    fn test_world_y_points_up() {
        let camera = Camera::new(SCREEN.x / SCREEN.y);
        let above = camera.world_to_screen(vec2(0.0, 5.0), SCREEN);
        assert!(above.y < 360.0);
        let top = camera.world_to_screen(vec2(0.0, VIEW_RADIUS), SCREEN);
        assert!(top.y.abs() < 1e-3);
    }

    #[test]
    fn test_tiles_are_square_on_screen() {
        let mut camera = Camera::default();
        camera.fit(SCREEN);
        let size = camera.extent_to_screen(vec2(1.0, 1.0), SCREEN);
        assert!((size.x - size.y).abs() < 1e-3);
        assert!((size.y - 36.0).abs() < 1e-3);
    }

    #[test]
    fn test_tile_center() {
        assert_eq!(Camera::tile_center(CENTER), Vec2::ZERO);
        let corner = Position::new(0, 10).unwrap();
        assert_eq!(Camera::tile_center(corner), vec2(-5.0, 5.0));
    }
}
