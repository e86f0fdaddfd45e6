//! Static sprite atlas layout.
//!
//! UV bounds use a bottom-left origin; `source_rect` converts them to the
//! top-left pixel rectangles macroquad samples from.

use macroquad::prelude::{Color, Rect, Vec2, vec2};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sprite {
    Base,
    Rock,
    Char,
    Treasure,
    Prompt,
    End,
}

impl Sprite {
    pub fn all() -> [Sprite; 6] {
        [
            Sprite::Base,
            Sprite::Rock,
            Sprite::Char,
            Sprite::Treasure,
            Sprite::Prompt,
            Sprite::End,
        ]
    }

    /// Region name in the atlas
    pub fn name(&self) -> &'static str {
        match self {
            Sprite::Base => "base",
            Sprite::Rock => "rock",
            Sprite::Char => "char",
            Sprite::Treasure => "treasure",
            Sprite::Prompt => "prompt",
            Sprite::End => "end",
        }
    }

    /// Colour used when no atlas texture is loaded
    pub fn fallback_color(&self) -> Color {
        match self {
            Sprite::Base => Color::from_rgba(110, 84, 60, 255),
            Sprite::Rock => Color::from_rgba(140, 140, 150, 255),
            Sprite::Char => Color::from_rgba(0, 200, 255, 255),
            Sprite::Treasure => Color::from_rgba(255, 210, 0, 255),
            Sprite::Prompt => Color::from_rgba(60, 60, 60, 220),
            Sprite::End => Color::from_rgba(20, 120, 40, 230),
        }
    }

    /// Banner text for the flat fallback
    pub fn caption(&self) -> Option<&'static str> {
        match self {
            Sprite::Prompt => Some("A rock! Press SPACE to dig"),
            Sprite::End => Some("You found the treasure!"),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpriteRegion {
    pub min_uv: Vec2,
    pub max_uv: Vec2,
    /// Half of the on-screen size, in world units
    pub half_size: Vec2,
}

impl SpriteRegion {
    const fn new(min_uv: Vec2, max_uv: Vec2, half_size: Vec2) -> Self {
        Self {
            min_uv,
            max_uv,
            half_size,
        }
    }

    /// Pixel rectangle inside a texture of the given size
    pub fn source_rect(&self, width: f32, height: f32) -> Rect {
        Rect::new(
            self.min_uv.x * width,
            (1.0 - self.max_uv.y) * height,
            (self.max_uv.x - self.min_uv.x) * width,
            (self.max_uv.y - self.min_uv.y) * height,
        )
    }
}

/// The fixed atlas every sprite is cut from
#[derive(Clone, Debug, PartialEq)]
pub struct SpriteAtlas {
    regions: [SpriteRegion; 6],
}

impl SpriteAtlas {
    pub fn standard() -> Self {
        let tile = vec2(0.5, 0.5);
        Self {
            regions: [
                SpriteRegion::new(vec2(0.0, 0.9), vec2(0.1, 1.0), tile),
                SpriteRegion::new(vec2(0.1, 0.9), vec2(0.2, 1.0), tile),
                SpriteRegion::new(vec2(0.3, 0.9), vec2(0.4, 1.0), tile),
                SpriteRegion::new(vec2(0.4, 0.9), vec2(0.5, 1.0), tile),
                SpriteRegion::new(vec2(0.0, 0.8), vec2(0.8, 0.9), vec2(4.0, 0.5)),
                SpriteRegion::new(vec2(0.0, 0.7), vec2(0.6, 0.8), vec2(3.0, 0.5)),
            ],
        }
    }

    pub fn region(&self, sprite: Sprite) -> SpriteRegion {
        self.regions[sprite as usize]
    }
}

impl Default for SpriteAtlas {
    fn default() -> Self {
        Self::standard()
    }
}
