mod atlas;

pub use atlas::{Sprite, SpriteAtlas, SpriteRegion};

use std::path::Path;

use macroquad::prelude::*;

use crate::application::{Camera, GameState, visible_tiles};
use crate::domain::TileBoard;
use crate::error::{Error, Result};

/// World position of the prompt and end banners
const BANNER_AT: Vec2 = Vec2::new(0.0, -8.0);

/// Draws the visible part of the game each frame.
/// Without an atlas texture every sprite is drawn as a flat shape.
pub struct Renderer {
    atlas: SpriteAtlas,
    texture: Option<Texture2D>,
    camera: Camera,
}

impl Renderer {
    /// Renderer that draws flat coloured shapes
    pub fn flat() -> Self {
        Self {
            atlas: SpriteAtlas::standard(),
            texture: None,
            camera: Camera::new(screen_width() / screen_height()),
        }
    }

    /// Renderer backed by an atlas texture loaded from `path`
    pub async fn with_atlas(path: &Path) -> Result<Self> {
        let texture = load_texture(&path.to_string_lossy())
            .await
            .map_err(|e| Error::TextureLoad {
                path: path.to_path_buf(),
                reason: format!("{e:?}"),
            })?;
        texture.set_filter(FilterMode::Nearest);
        log::info!(
            "loaded atlas {} ({}x{})",
            path.display(),
            texture.width(),
            texture.height()
        );
        let atlas = SpriteAtlas::standard();
        for sprite in Sprite::all() {
            let rect = atlas.region(sprite).source_rect(texture.width(), texture.height());
            log::debug!("atlas region {:<8} -> {:?}", sprite.name(), rect);
        }
        Ok(Self {
            texture: Some(texture),
            ..Self::flat()
        })
    }

    /// Draw one frame: visible tiles, banners and the player
    pub fn draw(&mut self, state: &GameState, board: &TileBoard, pointer: Vec2) {
        let screen = vec2(screen_width(), screen_height());
        self.camera.fit(screen);

        clear_background(BLACK);

        for tile in visible_tiles(state, board) {
            let sprite = if tile.has_rock { Sprite::Rock } else { Sprite::Base };
            self.draw_sprite(sprite, Camera::tile_center(tile.pos), screen);
        }

        let cursor = Camera::tile_center(state.cursor);
        if state.mine_highlighted {
            self.draw_sprite(Sprite::Prompt, BANNER_AT, screen);
        }
        if state.end_triggered() {
            self.draw_sprite(Sprite::End, BANNER_AT, screen);
            self.draw_sprite(Sprite::Treasure, cursor, screen);
        }
        self.draw_sprite(Sprite::Char, cursor, screen);

        draw_circle(pointer.x, pointer.y, 3.0, Color::from_rgba(255, 255, 255, 160));
    }

    fn draw_sprite(&self, sprite: Sprite, at: Vec2, screen: Vec2) {
        let region = self.atlas.region(sprite);
        let center = self.camera.world_to_screen(at, screen);
        let half = self.camera.extent_to_screen(region.half_size, screen);
        let top_left = center - half;

        match &self.texture {
            Some(texture) => draw_texture_ex(
                texture,
                top_left.x,
                top_left.y,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(half * 2.0),
                    source: Some(region.source_rect(texture.width(), texture.height())),
                    ..Default::default()
                },
            ),
            None => Self::draw_flat(sprite, top_left, half * 2.0),
        }
    }

    fn draw_flat(sprite: Sprite, top_left: Vec2, size: Vec2) {
        let color = sprite.fallback_color();
        match sprite {
            Sprite::Char => {
                let center = top_left + size * 0.5;
                draw_circle(center.x, center.y, size.y * 0.3, color);
            }
            Sprite::Treasure => {
                let inset = size * 0.2;
                draw_rectangle(
                    top_left.x + inset.x,
                    top_left.y + inset.y,
                    size.x - inset.x * 2.0,
                    size.y - inset.y * 2.0,
                    color,
                );
            }
            _ => {
                // One pixel gap keeps neighbouring tiles distinguishable
                draw_rectangle(
                    top_left.x + 1.0,
                    top_left.y + 1.0,
                    size.x - 2.0,
                    size.y - 2.0,
                    color,
                );
                if let Some(caption) = sprite.caption() {
                    let font_size = size.y * 0.6;
                    let dims = measure_text(caption, None, font_size as u16, 1.0);
                    draw_text(
                        caption,
                        top_left.x + (size.x - dims.width) * 0.5,
                        top_left.y + (size.y + dims.offset_y) * 0.5,
                        font_size,
                        WHITE,
                    );
                }
            }
        }
    }
}
